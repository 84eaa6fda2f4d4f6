use crate::network::{Category, PreparedNetwork};

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub name: String,
	pub affiliation: Option<String>,
	pub category: Category,
	pub degree: u32,
	pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl GraphData {
	pub fn max_degree(&self) -> u32 {
		self.nodes.iter().map(|n| n.degree).max().unwrap_or(0)
	}
}

impl From<&PreparedNetwork> for GraphData {
	fn from(network: &PreparedNetwork) -> Self {
		Self {
			nodes: network
				.nodes
				.iter()
				.map(|n| GraphNode {
					id: n.node.id.clone(),
					name: n.node.display_name().to_string(),
					affiliation: n.node.affiliation.clone(),
					category: n.node.category.clone(),
					degree: n.degree,
					color: n.color.clone(),
				})
				.collect(),
			links: network
				.edges
				.iter()
				.map(|e| GraphLink {
					source: e.source.clone(),
					target: e.target.clone(),
				})
				.collect(),
		}
	}
}

/// What the tooltip shows for a clicked node, with the page position of the click.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDetails {
	pub name: String,
	pub affiliation: Option<String>,
	pub category: Category,
	pub degree: u32,
	pub page_x: f64,
	pub page_y: f64,
}
