use leptos::prelude::*;

use super::force_graph::NodeDetails;

/// Offset of the tooltip from the click position.
const OFFSET: (f64, f64) = (5.0, -5.0);

#[component]
pub fn Tooltip(#[prop(into)] details: Signal<Option<NodeDetails>>) -> impl IntoView {
	let position = move || {
		details
			.get()
			.map(|d| (d.page_x + OFFSET.0, d.page_y + OFFSET.1))
			.unwrap_or_default()
	};

	view! {
		<div
			class="tooltip"
			style:left=move || format!("{}px", position().0)
			style:top=move || format!("{}px", position().1)
			style:opacity=move || if details.with(Option::is_some) { "1" } else { "0" }
		>
			{move || {
				details
					.get()
					.map(|d| {
						view! {
							<strong>"Name: "</strong>
							{d.name}
							<br />
							<strong>"Affiliation: "</strong>
							{d.affiliation.unwrap_or_else(|| "Unknown".to_string())}
							<br />
							<strong>"Country: "</strong>
							{d.category.to_string()}
							<br />
							<strong>"Co-authorships: "</strong>
							{d.degree}
						}
					})
			}}
		</div>
	}
}
