use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{DIMMED_ALPHA, ForceGraphState};

const BACKGROUND: &str = "#ffffff";
const EDGE_RGB: &str = "170, 170, 170";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);
	ctx.set_line_width(1.0 / state.transform.k);

	state.graph.visit_edges(|n1, n2, _| {
		let in_group = state.is_highlighted(n1.index()) && state.is_highlighted(n2.index());
		// Edges inside the hovered affiliation stay visible, the rest recede.
		let alpha = if in_group {
			0.6 + 0.3 * t
		} else {
			0.6 - 0.45 * t
		};
		ctx.set_stroke_style_str(&format!("rgba({}, {})", EDGE_RGB, alpha));
		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);
	let dimmed = 1.0 - (1.0 - DIMMED_ALPHA) * t;

	// Dimmed nodes first so the highlighted group draws on top.
	for pass_highlighted in [false, true] {
		state.graph.visit_nodes(|node| {
			let idx = node.index();
			let highlighted = has_highlight && state.is_highlighted(idx);
			if highlighted != pass_highlighted {
				return;
			}
			let info = &node.data.user_data;
			let (x, y) = (node.x() as f64, node.y() as f64);

			ctx.set_global_alpha(if has_highlight && !highlighted {
				dimmed
			} else {
				1.0
			});
			ctx.begin_path();
			let _ = ctx.arc(x, y, info.radius, 0.0, 2.0 * PI);
			ctx.set_fill_style_str(&info.color);
			ctx.fill();
			ctx.set_stroke_style_str("#ffffff");
			ctx.set_line_width(0.75 / k);
			ctx.stroke();
			ctx.set_global_alpha(1.0);

			if state.selected == Some(idx) {
				ctx.begin_path();
				let _ = ctx.arc(x, y, info.radius + 2.5 / k, 0.0, 2.0 * PI);
				ctx.set_stroke_style_str("#333333");
				ctx.set_line_width(1.5 / k);
				ctx.stroke();
			}

			if state.is_hovered(idx) && t > 0.01 {
				ctx.set_fill_style_str(&format!("rgba(20, 20, 20, {})", t));
				ctx.set_font(&format!("{}px sans-serif", 11.0 / k.max(0.5)));
				let _ = ctx.fill_text(&info.name, x + info.radius + 3.0, y + 3.0);
			}
		});
	}
}
