use leptos::prelude::*;

use crate::network::{Category, PreparedNetwork};

/// Text of the fallback bucket's legend row.
pub const OTHER_LABEL: &str = "(other)";

/// Which bucket a legend row stands for; unique within one legend.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LegendKind {
	Top(Category),
	Other,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
	pub kind: LegendKind,
	pub label: String,
	pub color: String,
	pub count: usize,
}

impl LegendEntry {
	/// Rows that are not a data label: the missing bucket and the fallback.
	pub fn is_meta(&self) -> bool {
		match &self.kind {
			LegendKind::Top(category) => category.is_missing(),
			LegendKind::Other => true,
		}
	}
}

/// Top categories in rank order, then one [`LegendKind::Other`] entry for the fallback
/// bucket when any node lands in it.
pub fn legend_entries(network: &PreparedNetwork) -> Vec<LegendEntry> {
	let mut entries: Vec<LegendEntry> = network
		.colors
		.legend()
		.map(|(category, color)| LegendEntry {
			kind: LegendKind::Top(category.clone()),
			label: category.to_string(),
			color: color.to_string(),
			count: network.ranking.count(category),
		})
		.collect();

	let other: usize = network
		.ranking
		.entries()
		.iter()
		.filter(|(c, _)| !network.colors.is_top(c))
		.map(|(_, n)| n)
		.sum();
	if other > 0 {
		entries.push(LegendEntry {
			kind: LegendKind::Other,
			label: OTHER_LABEL.to_string(),
			color: network.colors.fallback().to_string(),
			count: other,
		});
	}
	entries
}

#[component]
pub fn Legend(#[prop(into)] entries: Signal<Vec<LegendEntry>>) -> impl IntoView {
	view! {
		<ul class="legend">
			<For
				each=move || entries.get()
				key=|entry| entry.kind.clone()
				children=|entry| {
					let is_meta = entry.is_meta();
					view! {
						<li class="legend-entry" class:legend-meta=is_meta>
							<span class="legend-swatch" style:background-color=entry.color />
							<span class="legend-label">{entry.label}</span>
							<span class="legend-count">{entry.count}</span>
						</li>
					}
				}
			/>
		</ul>
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::config::VizConfig;
	use crate::network::{Edge, MISSING_LABEL, NetworkData, Node, prepare_network};

	fn network(top_k: usize) -> PreparedNetwork {
		let data = NetworkData {
			nodes: vec![
				Node::new("a", Category::from("US")),
				Node::new("b", Category::from("US")),
				Node::new("c", Category::from("FR")),
				Node::new("d", Category::Missing),
			],
			edges: vec![Edge::new("a", "b")],
		};
		prepare_network(
			&data,
			&VizConfig {
				top_k,
				..VizConfig::default()
			},
		)
	}

	#[test]
	fn lists_top_categories_then_other() {
		let entries = legend_entries(&network(1));
		let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
		assert_eq!(labels, vec!["US", OTHER_LABEL]);
		assert_eq!(entries[1].count, 2);
		assert_eq!(entries[1].color, VizConfig::default().fallback_color);
	}

	#[test]
	fn omits_other_when_everything_fits() {
		let entries = legend_entries(&network(10));
		let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
		assert_eq!(labels, vec!["US", "FR", MISSING_LABEL]);
		assert_eq!(entries[0].count, 2);
	}

	#[test]
	fn look_alike_labels_stay_distinct() {
		let data = NetworkData {
			nodes: vec![
				Node::new("a", Category::from("Unknown")),
				Node::new("b", Category::Missing),
				Node::new("c", Category::from("Other")),
				Node::new("d", Category::from("FR")),
			],
			edges: vec![],
		};
		let config = VizConfig {
			top_k: 3,
			..VizConfig::default()
		};
		let entries = legend_entries(&prepare_network(&data, &config));

		let kinds: HashSet<&LegendKind> = entries.iter().map(|e| &e.kind).collect();
		assert_eq!(kinds.len(), entries.len());
		let labels: HashSet<&str> = entries.iter().map(|e| e.label.as_str()).collect();
		assert_eq!(labels.len(), entries.len());

		let meta: Vec<&LegendKind> = entries.iter().filter(|e| e.is_meta()).map(|e| &e.kind).collect();
		assert_eq!(meta, vec![&LegendKind::Top(Category::Missing), &LegendKind::Other]);
	}
}
