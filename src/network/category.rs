use std::fmt;

/// Display text for [`Category::Missing`]; renderers style it apart from
/// real labels.
pub const MISSING_LABEL: &str = "(none)";

/// A node's category label (a country, in co-authorship data).
///
/// A missing label is its own category rather than "no category", so it is
/// counted, ranked and colored like any other.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
	/// A non-blank label.
	Known(String),
	/// Absent, `null` or blank label.
	#[default]
	Missing,
}

impl Category {
	/// Builds a category from a raw label; blank labels become [`Category::Missing`].
	pub fn from_label(label: Option<&str>) -> Self {
		match label.map(str::trim) {
			Some(l) if !l.is_empty() => Self::Known(l.to_string()),
			_ => Self::Missing,
		}
	}

	/// The label text, or `None` for [`Category::Missing`].
	pub fn label(&self) -> Option<&str> {
		match self {
			Self::Known(l) => Some(l),
			Self::Missing => None,
		}
	}

	/// Whether this is the missing-label bucket.
	pub fn is_missing(&self) -> bool {
		matches!(self, Self::Missing)
	}
}

impl From<Option<String>> for Category {
	fn from(label: Option<String>) -> Self {
		Self::from_label(label.as_deref())
	}
}

impl From<&str> for Category {
	fn from(label: &str) -> Self {
		Self::from_label(Some(label))
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Known(l) => f.write_str(l),
			Self::Missing => f.write_str(MISSING_LABEL),
		}
	}
}
