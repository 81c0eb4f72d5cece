//! Graph loader: fetch the todo document, decode it, reshape it for rendering.
//!
//! Each stage is its own function so it can be exercised without the others:
//! [`fetch_body`], [`parse_document`], [`to_render_graph`]. [`load_with`]
//! chains them; [`load`] does the same over the browser transport.

pub mod document;
pub mod fetch;
pub mod transform;

use log::{debug, info};

pub use document::{parse_document, Edge, Identifier, SourceGraph, TodoNode};
pub use fetch::{BrowserFetch, Fetch, Response};
pub use transform::{check_references, to_render_graph};

use crate::components::force_graph::RenderGraph;
use crate::error::{Error, Result};

/// Where the todograph server publishes the whole graph.
pub const DEFAULT_ENDPOINT: &str = "./api/all";

/// Knobs for a single load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
	/// Endpoint to GET, absolute or relative to the page.
	pub endpoint: String,
	/// Reject documents with edges pointing at unknown nodes.
	pub strict_references: bool,
}

impl Default for LoadOptions {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			strict_references: false,
		}
	}
}

/// GETs `url` and returns the body of a 2xx response.
pub async fn fetch_body<F: Fetch + ?Sized>(fetch: &F, url: &str) -> Result<String> {
	let response = fetch.get(url).await?;
	if !response.is_success() {
		return Err(Error::Status {
			url: url.to_string(),
			status: response.status,
		});
	}
	Ok(response.body)
}

/// Loads `endpoint` through the browser, with dangling edges passed through.
pub async fn load(endpoint: &str) -> Result<RenderGraph> {
	let options = LoadOptions {
		endpoint: endpoint.to_string(),
		..LoadOptions::default()
	};
	load_with(&BrowserFetch::new(), &options).await
}

/// Runs fetch, parse and transform against any transport.
pub async fn load_with<F: Fetch + ?Sized>(fetch: &F, options: &LoadOptions) -> Result<RenderGraph> {
	let url = fetch.resolve(&options.endpoint)?;
	let body = fetch_body(fetch, &url).await?;
	let doc = parse_document(&body)?;

	debug!("todograph: document from {}: {:?}", url, doc);

	let graph = to_render_graph(&doc);
	if options.strict_references {
		check_references(&graph)?;
	}

	info!(
		"todograph: loaded {} nodes, {} edges",
		graph.nodes.len(),
		graph.edges.len()
	);
	Ok(graph)
}
