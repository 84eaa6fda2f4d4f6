//! Dataset schema and the preparation pipeline that annotates nodes with
//! degree and color before they reach the renderer.

use std::collections::HashSet;

use log::{debug, warn};
use serde::Deserialize;

use super::bucket::{CategoryRanking, ColorAssignment, assign_colors, category_ranking};
use super::category::Category;
use super::degree::compute_degrees;
use super::error::DatasetError;
use crate::config::VizConfig;

/// A graph vertex: an author or affiliated actor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
	/// Unique within a dataset.
	pub id: String,
	/// Country, or whatever the nodes are bucketed by.
	pub category: Category,
	/// Display name, when the dataset has one.
	pub name: Option<String>,
	/// Institution; nodes sharing one highlight together on hover.
	pub affiliation: Option<String>,
	/// Publication count, when the dataset carries one.
	pub publications: Option<u32>,
}

impl Node {
	/// A node with only an identifier and a category.
	pub fn new(id: impl Into<String>, category: Category) -> Self {
		Self {
			id: id.into(),
			category,
			name: None,
			affiliation: None,
			publications: None,
		}
	}

	/// Name to show for this node, falling back to its identifier.
	pub fn display_name(&self) -> &str {
		self.name.as_deref().unwrap_or(&self.id)
	}
}

/// A link between two node identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	/// Identifier of one endpoint.
	pub source: String,
	/// Identifier of the other endpoint.
	pub target: String,
}

impl Edge {
	/// Edge between two identifiers.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
		}
	}

	/// Whether both endpoints are the same node.
	pub fn is_self_loop(&self) -> bool {
		self.source == self.target
	}
}

/// Nodes and edges as loaded, before any derived attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetworkData {
	/// Nodes in input order.
	pub nodes: Vec<Node>,
	/// Edges in input order.
	pub edges: Vec<Edge>,
}

#[derive(Deserialize)]
struct RawDataset {
	#[serde(default)]
	nodes: Vec<RawNode>,
	#[serde(default, alias = "edges")]
	links: Vec<RawLink>,
}

#[derive(Deserialize)]
struct RawNode {
	id: RawId,
	// `country` and `category` (and `name` and `label`) may both appear; the
	// first of each pair wins.
	#[serde(default)]
	country: Option<String>,
	#[serde(default)]
	category: Option<String>,
	#[serde(default)]
	name: Option<String>,
	#[serde(default)]
	label: Option<String>,
	#[serde(default)]
	affiliation: Option<String>,
	#[serde(default)]
	publications: Option<u32>,
}

#[derive(Deserialize)]
struct RawLink {
	#[serde(default)]
	source: Option<RawId>,
	#[serde(default)]
	target: Option<RawId>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
	Text(String),
	Number(i64),
	Float(f64),
}

impl RawId {
	/// Integral value of a numeric id; `1.0` counts as `1`.
	fn integral(&self) -> Option<i64> {
		match *self {
			Self::Text(_) => None,
			Self::Number(n) => Some(n),
			Self::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(f as i64),
			Self::Float(_) => None,
		}
	}

	fn into_id(self) -> String {
		if let Some(n) = self.integral() {
			return n.to_string();
		}
		match self {
			Self::Text(s) => s,
			Self::Number(n) => n.to_string(),
			Self::Float(f) => f.to_string(),
		}
	}
}

impl NetworkData {
	/// Parses a `{ "nodes": [...], "links": [...] }` document.
	///
	/// Links with a missing endpoint, or with a numeric endpoint that is
	/// neither a known identifier nor a valid node position, are dropped.
	pub fn from_json(text: &str) -> Result<Self, DatasetError> {
		let raw: RawDataset = serde_json::from_str(text)?;

		let nodes: Vec<Node> = raw
			.nodes
			.into_iter()
			.map(|n| Node {
				id: n.id.into_id(),
				category: Category::from(n.country.or(n.category)),
				name: n.name.or(n.label),
				affiliation: n.affiliation,
				publications: n.publications,
			})
			.collect();
		let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

		let resolve = |endpoint: Option<RawId>| -> Option<String> {
			let endpoint = endpoint?;
			if let RawId::Text(s) = &endpoint {
				return Some(s.clone());
			}
			let id = endpoint.clone().into_id();
			if ids.contains(id.as_str()) {
				return Some(id);
			}
			let position = endpoint.integral().and_then(|n| usize::try_from(n).ok())?;
			nodes.get(position).map(|node| node.id.clone())
		};

		let mut edges = Vec::with_capacity(raw.links.len());
		let mut skipped = 0usize;
		for link in raw.links {
			match (resolve(link.source), resolve(link.target)) {
				(Some(s), Some(t)) => edges.push(Edge::new(s, t)),
				_ => skipped += 1,
			}
		}
		if skipped > 0 {
			warn!("skipped {} link(s) with unresolvable endpoints", skipped);
		}

		Ok(Self { nodes, edges })
	}

	/// Whether there are neither nodes nor edges.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() && self.edges.is_empty()
	}
}

/// A node with its derived degree and display color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotatedNode {
	/// The node as loaded.
	pub node: Node,
	/// Number of edge endpoints touching the node.
	pub degree: u32,
	/// Fill color from the category bucketing.
	pub color: String,
}

/// Everything the renderer needs: annotated nodes, edges and the color
/// scheme (for the legend).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedNetwork {
	/// Nodes in input order.
	pub nodes: Vec<AnnotatedNode>,
	/// Edges in input order.
	pub edges: Vec<Edge>,
	/// Every category with its frequency.
	pub ranking: CategoryRanking,
	/// Colors of the top categories and the fallback.
	pub colors: ColorAssignment,
}

impl PreparedNetwork {
	/// Largest node degree, 0 for an empty network.
	pub fn max_degree(&self) -> u32 {
		self.nodes.iter().map(|n| n.degree).max().unwrap_or(0)
	}

	/// Whether some node is colored with the fallback color.
	pub fn has_overflow(&self) -> bool {
		self.nodes
			.iter()
			.any(|n| !self.colors.is_top(&n.node.category))
	}
}

/// Computes degrees, ranks categories and assigns colors for `data`.
pub fn prepare_network(data: &NetworkData, config: &VizConfig) -> PreparedNetwork {
	let degrees = compute_degrees(&data.edges);
	let ranking = category_ranking(data.nodes.iter().map(|n| &n.category));
	let top = ranking.top(config.top_k);
	debug!(
		"{} distinct categories, top {}: {:?}",
		ranking.len(),
		config.top_k,
		top
	);
	let colors = assign_colors(&top, config.palette.as_slice(), &config.fallback_color);

	let nodes = data
		.nodes
		.iter()
		.map(|node| AnnotatedNode {
			degree: degrees.get(&node.id),
			color: colors.resolve(&node.category).to_string(),
			node: node.clone(),
		})
		.collect();

	PreparedNetwork {
		nodes,
		edges: data.edges.clone(),
		ranking,
		colors,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: &str = r#"{
		"nodes": [
			{"id": "A", "country": "US", "name": "Ada"},
			{"id": "B", "country": "US", "affiliation": "MIT, Cambridge, US"},
			{"id": "C", "country": "FR"}
		],
		"links": [
			{"source": "A", "target": "B"},
			{"source": "B", "target": "C"}
		]
	}"#;

	#[test]
	fn parses_nodes_and_links() {
		let data = NetworkData::from_json(SAMPLE).unwrap();
		assert_eq!(data.nodes.len(), 3);
		assert_eq!(data.nodes[0].display_name(), "Ada");
		assert_eq!(data.nodes[2].display_name(), "C");
		assert_eq!(data.nodes[1].affiliation.as_deref(), Some("MIT, Cambridge, US"));
		assert_eq!(data.edges, vec![Edge::new("A", "B"), Edge::new("B", "C")]);
	}

	#[test]
	fn prepares_degrees_and_colors() {
		let data = NetworkData::from_json(SAMPLE).unwrap();
		let config = VizConfig::default();
		let prepared = prepare_network(&data, &config);

		let degrees: Vec<u32> = prepared.nodes.iter().map(|n| n.degree).collect();
		assert_eq!(degrees, vec![1, 2, 1]);
		assert_eq!(
			prepared.colors.legend().map(|(c, _)| c.clone()).collect::<Vec<_>>(),
			vec![Category::from("US"), Category::from("FR")]
		);
		assert_eq!(prepared.nodes[0].color, config.palette[0]);
		assert_eq!(prepared.nodes[2].color, config.palette[1]);
		assert_eq!(prepared.max_degree(), 2);
		assert!(!prepared.has_overflow());
	}

	#[test]
	fn small_top_k_uses_fallback() {
		let data = NetworkData::from_json(SAMPLE).unwrap();
		let config = VizConfig {
			top_k: 1,
			..VizConfig::default()
		};
		let prepared = prepare_network(&data, &config);
		assert_eq!(prepared.nodes[2].color, config.fallback_color);
		assert!(prepared.has_overflow());
	}

	#[test]
	fn accepts_edges_alias_and_index_endpoints() {
		let text = r#"{
			"nodes": [{"id": "x"}, {"id": "y", "category": null}, {"id": 7}],
			"edges": [
				{"source": 0, "target": 1},
				{"source": 7, "target": "x"},
				{"source": 42, "target": 0},
				{"source": "y"}
			]
		}"#;
		let data = NetworkData::from_json(text).unwrap();
		assert_eq!(data.nodes[1].category, Category::Missing);
		assert_eq!(data.nodes[2].id, "7");
		assert_eq!(data.edges, vec![Edge::new("x", "y"), Edge::new("7", "x")]);
	}

	#[test]
	fn dangling_identifiers_still_count() {
		let data = NetworkData {
			nodes: vec![Node::new("A", Category::Missing)],
			edges: vec![Edge::new("A", "ghost"), Edge::new("A", "A")],
		};
		let prepared = prepare_network(&data, &VizConfig::default());
		assert_eq!(prepared.nodes[0].degree, 3);
		assert_eq!(prepared.nodes.len(), 1);
	}

	#[test]
	fn tolerates_duplicate_aliases_and_float_ids() {
		let text = r#"{
			"nodes": [
				{"id": 0.0, "country": "FR", "category": "DE", "name": "Ada", "label": "A."},
				{"id": 1.0, "category": "DE", "label": "Bo"},
				{"id": 2.5}
			],
			"links": [
				{"source": 0.0, "target": 1},
				{"source": 2.5, "target": 1.0},
				{"source": 7.0, "target": 0}
			]
		}"#;
		let data = NetworkData::from_json(text).unwrap();
		let ids: Vec<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, vec!["0", "1", "2.5"]);
		assert_eq!(data.nodes[0].category, Category::from("FR"));
		assert_eq!(data.nodes[0].display_name(), "Ada");
		assert_eq!(data.nodes[1].category, Category::from("DE"));
		assert_eq!(data.nodes[1].display_name(), "Bo");
		assert_eq!(data.edges, vec![Edge::new("0", "1"), Edge::new("2.5", "1")]);
	}

	#[test]
	fn rejects_malformed_documents() {
		assert!(matches!(
			NetworkData::from_json("{ nodes: }"),
			Err(DatasetError::Json(_))
		));
		assert!(NetworkData::from_json("{}").unwrap().is_empty());
	}

	#[test]
	fn preparation_is_repeatable() {
		let data = NetworkData::from_json(SAMPLE).unwrap();
		let config = VizConfig::default();
		assert_eq!(
			prepare_network(&data, &config),
			prepare_network(&data, &config)
		);
	}
}
