use log::{error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::coauthor::from_scopus_csv;
use super::dataset::NetworkData;
use super::error::DatasetError;

/// How a dataset's text is turned into a network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetFormat {
	/// `{ "nodes": [...], "links": [...] }`
	Json,
	/// Scopus publication export, built into a co-authorship network.
	ScopusCsv,
}

impl DatasetFormat {
	/// Guesses the format from the URL's extension, defaulting to JSON.
	pub fn from_url(url: &str) -> Self {
		let path = url.split(['?', '#']).next().unwrap_or(url);
		if path.to_ascii_lowercase().ends_with(".csv") {
			Self::ScopusCsv
		} else {
			Self::Json
		}
	}

	/// Builds a network from the dataset text.
	pub fn parse(self, text: &str) -> Result<NetworkData, DatasetError> {
		match self {
			Self::Json => NetworkData::from_json(text),
			Self::ScopusCsv => from_scopus_csv(text.as_bytes()),
		}
	}
}

async fn fetch_text(url: &str) -> Result<String, DatasetError> {
	let window = web_sys::window().ok_or(DatasetError::NoWindow)?;
	let response: Response = JsFuture::from(window.fetch_with_str(url))
		.await?
		.dyn_into()?;
	if !response.ok() {
		return Err(DatasetError::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}
	let text = JsFuture::from(response.text()?).await?;
	text.as_string()
		.ok_or_else(|| DatasetError::Fetch(format!("{} returned a non-text body", url)))
}

/// Fetches and parses the dataset at `url`.
pub async fn load_dataset(url: String) -> Result<NetworkData, DatasetError> {
	info!("Loading dataset from {}", url);
	let result = match fetch_text(&url).await {
		Ok(text) => DatasetFormat::from_url(&url).parse(&text),
		Err(e) => Err(e),
	};
	match &result {
		Ok(data) => info!(
			"Loaded {} nodes and {} links from {}",
			data.nodes.len(),
			data.edges.len(),
			url
		),
		Err(e) => error!("Failed to load {}: {}", url, e),
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn format_follows_extension() {
		assert_eq!(DatasetFormat::from_url("data_scopus.csv"), DatasetFormat::ScopusCsv);
		assert_eq!(
			DatasetFormat::from_url("/data/Export.CSV?v=2"),
			DatasetFormat::ScopusCsv
		);
		assert_eq!(DatasetFormat::from_url("author_network.json"), DatasetFormat::Json);
		assert_eq!(DatasetFormat::from_url("graph"), DatasetFormat::Json);
	}

	#[test]
	fn parses_by_format() {
		let data = DatasetFormat::Json
			.parse(r#"{"nodes": [{"id": "a"}], "links": []}"#)
			.unwrap();
		assert_eq!(data.nodes.len(), 1);
		assert!(DatasetFormat::Json.parse("not json").is_err());
	}
}
