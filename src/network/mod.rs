//! Renderer-independent data preparation: loading a network, computing
//! node degrees and bucketing node categories into colors.

mod bucket;
mod category;
mod coauthor;
mod dataset;
mod degree;
mod error;
mod loader;

pub use bucket::{CategoryRanking, ColorAssignment, assign_colors, category_ranking, rank_categories};
pub use category::{Category, MISSING_LABEL};
pub use coauthor::from_scopus_csv;
pub use dataset::{AnnotatedNode, Edge, NetworkData, Node, PreparedNetwork, prepare_network};
pub use degree::{DegreeTable, compute_degrees};
pub use error::DatasetError;
pub use loader::{DatasetFormat, load_dataset};
