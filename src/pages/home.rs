use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::controls::ForceControls;
use crate::components::force_graph::{ForceGraphCanvas, GraphData, NodeDetails};
use crate::components::legend::{Legend, legend_entries};
use crate::components::tooltip::Tooltip;
use crate::config::VizConfig;
use crate::network::{PreparedNetwork, load_dataset, prepare_network};

/// Callback that stores the clicked node (or `None` on a background click).
fn selection_callback(set: WriteSignal<Option<NodeDetails>>) -> Callback<Option<NodeDetails>> {
	Callback::new(move |details| set.set(details))
}

#[component]
fn NetworkView(network: PreparedNetwork, config: VizConfig) -> impl IntoView {
	let graph_data = Signal::derive({
		let data = GraphData::from(&network);
		move || data.clone()
	});
	let legend = legend_entries(&network);
	let forces = RwSignal::new(config.forces);
	let (selected, set_selected) = signal(None::<NodeDetails>);

	view! {
		<ForceGraphCanvas
			data=graph_data
			forces=forces
			on_select=selection_callback(set_selected)
			radius_range=config.radius_range
			fullscreen=true
		/>
		<Tooltip details=selected />
		<div class="graph-overlay">
			<h1>"Co-authorship Network"</h1>
			<p class="subtitle">
				{format!(
					"{} authors, {} links. Hover to highlight an affiliation, click for details.",
					network.nodes.len(),
					network.edges.len(),
				)}
			</p>
			<ForceControls forces=forces />
			<Legend entries=Signal::derive(move || legend.clone()) />
		</div>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let config = use_context::<VizConfig>().unwrap_or_default();
	let query = use_query_map();
	let default_url = config.dataset_url.clone();
	let url = move || {
		query
			.read()
			.get("data")
			.unwrap_or_else(|| default_url.clone())
	};
	let dataset = LocalResource::new(move || {
		let url = url();
		async move { load_dataset(url).await.map_err(|e| e.to_string()) }
	});

	view! {
		<div class="fullscreen-graph">
			<Suspense fallback=|| view! { <p class="status">"Loading network…"</p> }>
				{move || {
					let config = config.clone();
					Suspend::new(async move {
						match dataset.await {
							Ok(data) => {
								let network = prepare_network(&data, &config);
								view! { <NetworkView network=network config=config /> }.into_any()
							}
							Err(e) => {
								view! {
									<div class="status error">
										<h1>"No data available"</h1>
										<p>{e}</p>
									</div>
								}
									.into_any()
							}
						}
					})
				}}
			</Suspense>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::network::Category;

	#[test]
	fn selection_callback_stores_details() {
		let owner = Owner::new();
		owner.with(|| {
			let (selected, set_selected) = signal(None::<NodeDetails>);
			let on_select = selection_callback(set_selected);
			let details = NodeDetails {
				name: "Ada".to_string(),
				affiliation: None,
				category: Category::Missing,
				degree: 2,
				page_x: 10.0,
				page_y: 20.0,
			};

			on_select.run(Some(details.clone()));
			assert_eq!(selected.get_untracked(), Some(details));
			on_select.run(None);
			assert_eq!(selected.get_untracked(), None);
		});
	}
}
