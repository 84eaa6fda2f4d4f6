//! Builds a co-authorship network from a Scopus CSV export.
//!
//! Each row is a publication. Authors listed with an affiliation become
//! nodes, and every pair of such authors on the same row becomes a link.

use std::collections::{HashMap, HashSet};
use std::io::Read;

use serde::Deserialize;

use super::category::Category;
use super::dataset::{Edge, NetworkData, Node};
use super::error::DatasetError;

#[derive(Debug, Deserialize)]
struct ScopusRecord {
	#[serde(rename = "Year", default)]
	year: Option<String>,
	#[serde(rename = "Authors", default)]
	authors: Option<String>,
	#[serde(rename = "Authors with affiliations", default)]
	affiliations: Option<String>,
}

#[derive(Default)]
struct AuthorEntry {
	affiliation: String,
	country: Category,
	publications: u32,
}

fn present(field: &Option<String>) -> Option<&str> {
	field.as_deref().filter(|s| !s.trim().is_empty())
}

/// Country of an affiliation: the text after its last comma.
fn country_of(affiliation: &str) -> Category {
	Category::from_label(affiliation.rsplit(',').next())
}

/// Reads Scopus records from `reader` and builds the co-authorship network.
///
/// Rows missing a year, an author list or an affiliation list are ignored.
/// Only authors taking part in at least one link are emitted as nodes.
pub fn from_scopus_csv<R: Read>(reader: R) -> Result<NetworkData, DatasetError> {
	let mut order: Vec<String> = Vec::new();
	let mut authors: HashMap<String, AuthorEntry> = HashMap::new();
	let mut edges: Vec<Edge> = Vec::new();

	let mut csv = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
	for record in csv.deserialize::<ScopusRecord>() {
		let record = record?;
		let (Some(_), Some(names), Some(affiliations)) = (
			present(&record.year),
			present(&record.authors),
			present(&record.affiliations),
		) else {
			continue;
		};
		let affiliations: Vec<&str> = affiliations.split("; ").collect();

		// Authors beyond the affiliation list have no known affiliation.
		let valid: Vec<&str> = names
			.split(", ")
			.zip(affiliations.iter())
			.map(|(name, &affiliation)| {
				let entry = authors.entry(name.to_string()).or_insert_with(|| {
					order.push(name.to_string());
					AuthorEntry::default()
				});
				entry.affiliation = affiliation.to_string();
				entry.country = country_of(affiliation);
				entry.publications += 1;
				name
			})
			.collect();

		for (i, a) in valid.iter().enumerate() {
			for b in &valid[i + 1..] {
				edges.push(Edge::new(*a, *b));
			}
		}
	}

	let linked: HashSet<&str> = edges
		.iter()
		.flat_map(|e| [e.source.as_str(), e.target.as_str()])
		.collect();
	let nodes = order
		.iter()
		.filter(|name| linked.contains(name.as_str()))
		.filter_map(|name| {
			let entry = authors.get(name)?;
			Some(Node {
				id: name.clone(),
				category: entry.country.clone(),
				name: Some(name.clone()),
				affiliation: Some(entry.affiliation.clone()),
				publications: Some(entry.publications),
			})
		})
		.collect();

	Ok(NetworkData { nodes, edges })
}
