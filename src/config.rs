//! Viewer configuration and defaults.

/// d3's `schemeCategory10`.
pub const CATEGORY10: [&str; 10] = [
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Color shared by every category outside the top K.
pub const FALLBACK_COLOR: &str = "#A9A9A9";

/// Dataset loaded when the page has no `?data=` parameter.
pub const DEFAULT_DATASET_URL: &str = "author_network.json";
/// Number of categories colored individually.
pub const DEFAULT_TOP_K: usize = 10;

/// Repulsion slider bounds as `(min, max, step)`.
pub const REPULSION_RANGE: (f64, f64, f64) = (0.0, 600.0, 10.0);
/// Link strength slider bounds as `(min, max, step)`.
pub const LINK_STRENGTH_RANGE: (f64, f64, f64) = (0.0, 0.3, 0.01);
/// Collision radius slider bounds as `(min, max, step)`.
pub const COLLISION_RADIUS_RANGE: (f64, f64, f64) = (0.0, 40.0, 1.0);

/// Extra spacing added to a node's radius when no collision radius is set.
pub const COLLISION_PADDING: f64 = 3.0;

/// Physics knobs exposed through the sliders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceSettings {
	/// Node repulsion (`force_charge`).
	pub repulsion: f32,
	/// Link spring constant (`force_spring`).
	pub link_strength: f32,
	/// Uniform separation radius; `None` keeps each node's radius plus padding.
	pub collision_radius: Option<f64>,
}

impl Default for ForceSettings {
	fn default() -> Self {
		Self {
			repulsion: 150.0,
			link_strength: 0.05,
			collision_radius: None,
		}
	}
}

/// Settings for loading, coloring and laying out a network.
#[derive(Clone, Debug, PartialEq)]
pub struct VizConfig {
	/// Dataset fetched by the home page.
	pub dataset_url: String,
	/// How many categories get their own color.
	pub top_k: usize,
	/// Colors handed to the top categories in rank order.
	pub palette: Vec<String>,
	/// Color of every category outside the top K.
	pub fallback_color: String,
	/// Node radius range, mapped from degree by a square-root scale.
	pub radius_range: (f64, f64),
	/// Initial slider values.
	pub forces: ForceSettings,
}

impl Default for VizConfig {
	fn default() -> Self {
		Self {
			dataset_url: DEFAULT_DATASET_URL.to_string(),
			top_k: DEFAULT_TOP_K,
			palette: CATEGORY10.iter().map(|c| c.to_string()).collect(),
			fallback_color: FALLBACK_COLOR.to_string(),
			radius_range: (3.0, 12.0),
			forces: ForceSettings::default(),
		}
	}
}
