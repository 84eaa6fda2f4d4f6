use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::scale::SqrtScale;
use super::types::GraphData;
use crate::config::{COLLISION_PADDING, ForceSettings};
use crate::network::Category;

/// Extra screen-independent slack around a node for pointer hits.
pub const HIT_SLACK: f64 = 2.0;
/// Pointer travel (px) below which a press and release counts as a click.
pub const CLICK_TOLERANCE: f64 = 3.0;
/// Opacity of nodes outside the hovered affiliation once fully faded.
pub const DIMMED_ALPHA: f64 = 0.2;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub name: String,
	pub affiliation: Option<String>,
	pub category: Category,
	pub degree: u32,
	pub color: String,
	pub radius: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
	pub moved: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
	pub moved: bool,
}

/// Hovering a node highlights every node sharing its affiliation; nodes
/// without one form a single group.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub group: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_group: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub selected: Option<DefaultNodeIdx>,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	collision_radius: Option<f64>,
	affiliations: HashMap<Option<String>, Vec<DefaultNodeIdx>>,
}

impl ForceGraphState {
	pub fn new(
		data: &GraphData,
		width: f64,
		height: f64,
		radius_range: (f64, f64),
		forces: ForceSettings,
	) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: forces.repulsion,
			force_spring: forces.link_strength,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let scale = SqrtScale::for_degrees(data.max_degree(), radius_range);
		let mut id_to_idx = HashMap::new();
		let mut affiliations: HashMap<Option<String>, Vec<DefaultNodeIdx>> = HashMap::new();
		let spread = 10.0 * (data.nodes.len() as f64).sqrt().max(10.0);

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let (x, y) = (
				(width / 2.0 + spread * angle.cos()) as f32,
				(height / 2.0 + spread * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					name: node.name.clone(),
					affiliation: node.affiliation.clone(),
					category: node.category.clone(),
					degree: node.degree,
					color: node.color.clone(),
					radius: scale.apply(node.degree as f64),
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
			affiliations
				.entry(node.affiliation.clone())
				.or_default()
				.push(idx);
		}

		// Links naming unknown identifiers have nothing to attach to.
		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				if src != tgt {
					graph.add_edge(src, tgt, EdgeData::default());
				}
			}
		}

		Self {
			graph,
			transform: ViewTransform {
				x: 0.0,
				y: 0.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			selected: None,
			width,
			height,
			animation_running: true,
			collision_radius: forces.collision_radius,
			affiliations,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < node.data.user_data.radius + HIT_SLACK {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn node_info(&self, idx: DefaultNodeIdx) -> Option<NodeInfo> {
		let mut info = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				info = Some(node.data.user_data.clone());
			}
		});
		info
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Keep the outgoing group around so it can fade out.
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_group = std::mem::take(&mut self.hover.group);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_group.clear();
		}

		self.hover.node = node;
		self.hover.group.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			self.hover.group.insert(idx);
			let affiliation = self.node_info(idx).map(|info| info.affiliation);
			if let Some(members) = affiliation.and_then(|a| self.affiliations.get(&a)) {
				self.hover.group.extend(members.iter().copied());
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.group.contains(&idx) || self.hover.prev_group.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	/// Applies slider values and wakes the simulation.
	pub fn set_forces(&mut self, forces: ForceSettings) {
		self.graph.parameters.force_charge = forces.repulsion;
		self.graph.parameters.force_spring = forces.link_strength;
		self.collision_radius = forces.collision_radius;
		self.animation_running = true;
	}

	fn collision_radius_of(&self, info: &NodeInfo) -> f64 {
		self.collision_radius
			.unwrap_or(info.radius + COLLISION_PADDING)
	}

	/// Pushes overlapping nodes apart; pinned nodes stay put.
	fn resolve_collisions(&mut self) {
		let mut bodies = Vec::new();
		self.graph.visit_nodes(|node| {
			bodies.push((
				node.index(),
				node.x() as f64,
				node.y() as f64,
				self.collision_radius_of(&node.data.user_data),
				node.data.is_anchor,
			));
		});

		let mut shifts: HashMap<DefaultNodeIdx, (f64, f64)> = HashMap::new();
		for (i, a) in bodies.iter().enumerate() {
			for b in &bodies[i + 1..] {
				let (dx, dy) = (b.1 - a.1, b.2 - a.2);
				let (dist, min) = ((dx * dx + dy * dy).sqrt(), a.3 + b.3);
				if dist >= min || dist < 1e-6 {
					continue;
				}
				let push = (min - dist) * 0.5;
				let (ux, uy) = (dx / dist * push, dy / dist * push);
				if !a.4 {
					let s = shifts.entry(a.0).or_default();
					s.0 -= ux;
					s.1 -= uy;
				}
				if !b.4 {
					let s = shifts.entry(b.0).or_default();
					s.0 += ux;
					s.1 += uy;
				}
			}
		}

		if shifts.is_empty() {
			return;
		}
		self.graph.visit_nodes_mut(|node| {
			if let Some(&(sx, sy)) = shifts.get(&node.index()) {
				node.data.x += sx as f32;
				node.data.y += sy as f32;
			}
		});
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.resolve_collisions();

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_group.clear();
			}
		}
	}

	/// Recenters the view on the layout origin after a size change.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	fn node(id: &str, affiliation: Option<&str>, degree: u32) -> GraphNode {
		GraphNode {
			id: id.to_string(),
			name: id.to_string(),
			affiliation: affiliation.map(str::to_string),
			category: Category::Missing,
			degree,
			color: "#000".to_string(),
		}
	}

	fn sample() -> ForceGraphState {
		let data = GraphData {
			nodes: vec![
				node("a", Some("MIT"), 1),
				node("b", Some("MIT"), 4),
				node("c", Some("CNRS"), 1),
				node("d", None, 0),
				node("e", None, 2),
			],
			links: vec![
				GraphLink {
					source: "a".into(),
					target: "b".into(),
				},
				GraphLink {
					source: "b".into(),
					target: "ghost".into(),
				},
			],
		};
		ForceGraphState::new(&data, 800.0, 600.0, (3.0, 12.0), ForceSettings::default())
	}

	fn index_of(state: &ForceGraphState, name: &str) -> DefaultNodeIdx {
		let mut found = None;
		state.graph.visit_nodes(|n| {
			if n.data.user_data.name == name {
				found = Some(n.index());
			}
		});
		found.unwrap()
	}

	#[test]
	fn hover_highlights_shared_affiliation() {
		let mut state = sample();
		let (a, b, c) = (index_of(&state, "a"), index_of(&state, "b"), index_of(&state, "c"));
		state.set_hover(Some(a));
		assert!(state.is_highlighted(a));
		assert!(state.is_highlighted(b));
		assert!(!state.is_highlighted(c));
		assert!(state.is_hovered(a));
	}

	#[test]
	fn unaffiliated_nodes_highlight_together() {
		let mut state = sample();
		let (a, d, e) = (index_of(&state, "a"), index_of(&state, "d"), index_of(&state, "e"));
		state.set_hover(Some(d));
		assert!(state.is_highlighted(d));
		assert!(state.is_highlighted(e));
		assert!(!state.is_highlighted(a));
	}

	#[test]
	fn leaving_keeps_group_until_faded() {
		let mut state = sample();
		let b = index_of(&state, "b");
		state.set_hover(Some(index_of(&state, "a")));
		state.set_hover(None);
		assert!(state.has_active_highlight());
		assert!(state.is_highlighted(b));
		for _ in 0..400 {
			state.tick(0.016);
		}
		assert!(!state.has_active_highlight());
	}

	#[test]
	fn radius_follows_degree() {
		let state = sample();
		let radius = |name| state.node_info(index_of(&state, name)).unwrap().radius;
		assert_eq!(radius("a"), 3.0);
		assert_eq!(radius("b"), 12.0);
		assert_eq!(radius("d"), 3.0);
	}

	#[test]
	fn collisions_separate_nodes() {
		let mut state = sample();
		state.set_forces(ForceSettings {
			repulsion: 0.0,
			link_strength: 0.0,
			collision_radius: Some(20.0),
		});
		state.graph.visit_nodes_mut(|n| {
			n.data.x = 100.0 + n.index().index() as f32;
			n.data.y = 100.0;
		});
		for _ in 0..200 {
			state.resolve_collisions();
		}
		let mut xs = Vec::new();
		state.graph.visit_nodes(|n| xs.push(n.x() as f64));
		xs.sort_by(|a, b| a.total_cmp(b));
		for pair in xs.windows(2) {
			assert!(pair[1] - pair[0] > 30.0);
		}
	}
}
