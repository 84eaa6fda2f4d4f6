//! Top-K category bucketing.
//!
//! Categories are ranked by how many nodes carry them; the `k` most frequent
//! get their own palette color and everything else shares a fallback color.

use std::collections::HashMap;

use super::category::Category;

/// Distinct categories with their frequencies, most frequent first.
///
/// Equal frequencies keep the order in which the categories were first
/// encountered, so the ranking is reproducible for a given input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryRanking {
	entries: Vec<(Category, usize)>,
}

impl CategoryRanking {
	/// `(category, count)` pairs in rank order.
	pub fn entries(&self) -> &[(Category, usize)] {
		&self.entries
	}

	/// Number of distinct categories.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no category was seen.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// How many nodes carry `category`.
	pub fn count(&self, category: &Category) -> usize {
		self.entries
			.iter()
			.find(|(c, _)| c == category)
			.map_or(0, |&(_, n)| n)
	}

	/// The `k` highest-ranked categories (all of them if fewer than `k` exist).
	pub fn top(&self, k: usize) -> Vec<Category> {
		self.entries
			.iter()
			.take(k)
			.map(|(c, _)| c.clone())
			.collect()
	}
}

/// Counts every distinct category and sorts them by descending frequency.
pub fn category_ranking<'a, I>(categories: I) -> CategoryRanking
where
	I: IntoIterator<Item = &'a Category>,
{
	let mut index: HashMap<&'a Category, usize> = HashMap::new();
	let mut entries: Vec<(Category, usize)> = Vec::new();
	for category in categories {
		match index.get(category) {
			Some(&i) => entries[i].1 += 1,
			None => {
				index.insert(category, entries.len());
				entries.push((category.clone(), 1));
			}
		}
	}
	// `sort_by` is stable: ties stay in first-occurrence order.
	entries.sort_by(|a, b| b.1.cmp(&a.1));
	CategoryRanking { entries }
}

/// The `k` most frequent categories, most frequent first.
pub fn rank_categories<'a, I>(categories: I, k: usize) -> Vec<Category>
where
	I: IntoIterator<Item = &'a Category>,
{
	category_ranking(categories).top(k)
}

/// Category to color lookup built from a ranked top list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorAssignment {
	top: Vec<(Category, String)>,
	colors: HashMap<Category, usize>,
	fallback: String,
}

impl ColorAssignment {
	/// Color for `category`: its palette color when it is in the top list,
	/// the fallback color otherwise.
	pub fn resolve(&self, category: &Category) -> &str {
		match self.colors.get(category) {
			Some(&i) => &self.top[i].1,
			None => &self.fallback,
		}
	}

	/// Whether `category` has its own palette color.
	pub fn is_top(&self, category: &Category) -> bool {
		self.colors.contains_key(category)
	}

	/// Color shared by categories outside the top list.
	pub fn fallback(&self) -> &str {
		&self.fallback
	}

	/// Top categories in rank order with their colors.
	pub fn legend(&self) -> impl Iterator<Item = (&Category, &str)> {
		self.top.iter().map(|(c, color)| (c, color.as_str()))
	}

	/// Number of categories with their own color.
	pub fn len(&self) -> usize {
		self.top.len()
	}

	/// Whether every category resolves to the fallback.
	pub fn is_empty(&self) -> bool {
		self.top.is_empty()
	}
}

/// Pairs the i-th top category with the i-th palette color.
///
/// The palette is reused cyclically when there are more top categories than
/// colors. An empty palette leaves every category on the fallback color.
pub fn assign_colors<S: AsRef<str>>(
	top: &[Category],
	palette: &[S],
	fallback: &str,
) -> ColorAssignment {
	let mut assignment = ColorAssignment {
		top: Vec::with_capacity(top.len()),
		colors: HashMap::with_capacity(top.len()),
		fallback: fallback.to_string(),
	};
	if palette.is_empty() {
		return assignment;
	}
	for (i, category) in top.iter().enumerate() {
		if assignment.colors.contains_key(category) {
			continue;
		}
		let color = palette[i % palette.len()].as_ref().to_string();
		assignment
			.colors
			.insert(category.clone(), assignment.top.len());
		assignment.top.push((category.clone(), color));
	}
	assignment
}
