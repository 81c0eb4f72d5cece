//! HTTP transport for the graph document.
//!
//! The loader only needs "GET this URL, give me status and body", so that is
//! all [`Fetch`] asks for. [`BrowserFetch`] does it with `reqwest`, which on
//! wasm goes through the browser's `fetch`.

use async_trait::async_trait;
use reqwest::Url;

use crate::error::{Error, Result};

/// Status and body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
	/// HTTP status code.
	pub status: u16,
	/// Full response body as text.
	pub body: String,
}

impl Response {
	/// Whether the status is in the 2xx range.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Performs a single GET request.
#[async_trait(?Send)]
pub trait Fetch {
	/// Fetches `url`, which has already been resolved by the caller if needed.
	async fn get(&self, url: &str) -> Result<Response>;

	/// Turns a possibly relative endpoint into the URL to request.
	fn resolve(&self, endpoint: &str) -> Result<String> {
		Ok(endpoint.to_string())
	}
}

/// [`Fetch`] backed by `reqwest`, resolving relative endpoints against the page.
#[derive(Clone, Debug)]
pub struct BrowserFetch {
	client: reqwest::Client,
	base: Option<Url>,
}

impl BrowserFetch {
	/// Uses the current document's base URI, when there is a document.
	pub fn new() -> Self {
		Self::with_base(page_base())
	}

	/// Uses an explicit base URL for relative endpoints.
	pub fn with_base(base: Option<Url>) -> Self {
		Self {
			client: reqwest::Client::new(),
			base,
		}
	}
}

impl Default for BrowserFetch {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait(?Send)]
impl Fetch for BrowserFetch {
	async fn get(&self, url: &str) -> Result<Response> {
		let network = |source: reqwest::Error| Error::Network {
			url: url.to_string(),
			source: Box::new(source),
		};
		let response = self.client.get(url).send().await.map_err(network)?;
		let status = response.status().as_u16();
		let body = response.text().await.map_err(network)?;
		Ok(Response { status, body })
	}

	fn resolve(&self, endpoint: &str) -> Result<String> {
		resolve_endpoint(self.base.as_ref(), endpoint).map(String::from)
	}
}

/// Parses `endpoint` as an absolute URL, or joins it onto `base`.
pub fn resolve_endpoint(base: Option<&Url>, endpoint: &str) -> Result<Url> {
	let parsed = match base {
		Some(base) => base.join(endpoint),
		None => Url::parse(endpoint),
	};
	parsed.map_err(|source| Error::Endpoint {
		endpoint: endpoint.to_string(),
		source: Box::new(source),
	})
}

#[cfg(target_arch = "wasm32")]
fn page_base() -> Option<Url> {
	let uri = web_sys::window()?.document()?.base_uri().ok()??;
	Url::parse(&uri).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_base() -> Option<Url> {
	None
}
