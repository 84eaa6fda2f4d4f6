use std::collections::HashMap;

use super::dataset::Edge;

/// Incidence counts keyed by node identifier.
///
/// Only identifiers that appear in at least one edge are stored; every
/// other identifier has degree 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DegreeTable {
	counts: HashMap<String, u32>,
}

impl DegreeTable {
	/// Degree of `id`, 0 when no edge touches it.
	pub fn get(&self, id: &str) -> u32 {
		self.counts.get(id).copied().unwrap_or(0)
	}

	/// Whether some edge touches `id`.
	pub fn contains(&self, id: &str) -> bool {
		self.counts.contains_key(id)
	}

	/// Number of identifiers touched by at least one edge.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	/// Whether no edge was counted.
	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Sum of all degrees; always twice the number of edges counted.
	pub fn total(&self) -> u64 {
		self.counts.values().map(|&d| d as u64).sum()
	}

	/// Largest degree, 0 for an empty table.
	pub fn max(&self) -> u32 {
		self.counts.values().copied().max().unwrap_or(0)
	}

	/// Identifiers with their degrees, in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
		self.counts.iter().map(|(id, &d)| (id.as_str(), d))
	}
}

/// Counts, for every identifier, how many edge endpoints touch it.
///
/// A self-loop contributes 2 to its identifier, and parallel edges are
/// each counted. Identifiers are not checked against any node table.
pub fn compute_degrees<'a, I>(edges: I) -> DegreeTable
where
	I: IntoIterator<Item = &'a Edge>,
{
	let mut counts: HashMap<String, u32> = HashMap::new();
	for edge in edges {
		*counts.entry(edge.source.clone()).or_default() += 1;
		*counts.entry(edge.target.clone()).or_default() += 1;
	}
	DegreeTable { counts }
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	fn edge(s: &str, t: &str) -> Edge {
		Edge::new(s, t)
	}

	#[test]
	fn counts_both_endpoints() {
		let degrees = compute_degrees(&[edge("A", "B"), edge("B", "C")]);
		assert_eq!(degrees.get("A"), 1);
		assert_eq!(degrees.get("B"), 2);
		assert_eq!(degrees.get("C"), 1);
		assert_eq!(degrees.len(), 3);
	}

	#[test]
	fn self_loop_counts_twice() {
		let degrees = compute_degrees(&[edge("A", "A")]);
		assert_eq!(degrees.get("A"), 2);
		assert_eq!(degrees.len(), 1);
	}

	#[test]
	fn parallel_edges_count_independently() {
		let degrees = compute_degrees(&[edge("A", "B"), edge("B", "A"), edge("A", "B")]);
		assert_eq!(degrees.get("A"), 3);
		assert_eq!(degrees.get("B"), 3);
	}

	#[test]
	fn unseen_identifiers_default_to_zero() {
		let degrees = compute_degrees(&[edge("A", "B")]);
		assert_eq!(degrees.get("Z"), 0);
		assert!(!degrees.contains("Z"));
		assert!(compute_degrees(&Vec::<Edge>::new()).is_empty());
	}

	fn arb_edges() -> impl Strategy<Value = Vec<Edge>> {
		prop::collection::vec(("[a-e]", "[a-e]"), 0..64)
			.prop_map(|pairs| pairs.into_iter().map(|(s, t)| Edge::new(s, t)).collect())
	}

	proptest! {
		#![proptest_config(ProptestConfig::with_cases(100))]

		#[test]
		fn degree_sum_is_twice_edge_count(edges in arb_edges()) {
			let degrees = compute_degrees(&edges);
			prop_assert_eq!(degrees.total(), 2 * edges.len() as u64);
		}

		#[test]
		fn repeated_calls_agree(edges in arb_edges()) {
			prop_assert_eq!(compute_degrees(&edges), compute_degrees(&edges));
		}
	}
}
