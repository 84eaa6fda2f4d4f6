use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why a dataset could not be loaded.
#[derive(Debug, Error)]
pub enum DatasetError {
	/// Not running in a browser page.
	#[error("no browser window available")]
	NoWindow,

	/// The request or reading its body failed.
	#[error("fetch failed: {0}")]
	Fetch(String),

	/// The server answered with a non-success status.
	#[error("{url} responded with HTTP {status}")]
	Status {
		/// Requested URL.
		url: String,
		/// HTTP status code.
		status: u16,
	},

	/// The body is not a valid JSON dataset.
	#[error("invalid JSON dataset: {0}")]
	Json(#[from] serde_json::Error),

	/// The body is not a readable CSV export.
	#[error("invalid CSV dataset: {0}")]
	Csv(#[from] csv::Error),
}

impl From<JsValue> for DatasetError {
	fn from(value: JsValue) -> Self {
		Self::Fetch(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
	}
}
