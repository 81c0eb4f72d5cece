//! Error type shared by the loader and the render handoff.

use log::error;

/// Boxed transport error, so stub transports don't need a `reqwest::Error`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A convenient alias for `Result`.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Coarse classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
	/// The document could not be retrieved.
	Network,
	/// The document was retrieved but is not a usable graph.
	Parse,
	/// The graph could not be handed to the rendering surface.
	Render,
}

/// Everything that can go wrong between the endpoint and the canvas.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The endpoint could not be turned into a request URL.
	#[error("invalid endpoint {endpoint:?}")]
	Endpoint {
		/// The endpoint as configured.
		endpoint: String,
		/// Why it could not be resolved.
		#[source]
		source: BoxError,
	},
	/// The request or the body read failed.
	#[error("request to {url} failed")]
	Network {
		/// The requested URL.
		url: String,
		/// Transport failure.
		#[source]
		source: BoxError,
	},
	/// The server answered with a non-2xx status.
	#[error("request to {url} returned HTTP {status}")]
	Status {
		/// The requested URL.
		url: String,
		/// HTTP status code.
		status: u16,
	},
	/// The body is not a graph document.
	#[error("malformed graph document")]
	Parse {
		/// Decoder failure.
		#[from]
		source: serde_json::Error,
	},
	/// An edge names a node id that is not in the document.
	#[error("edge {edge} references unknown node {id:?}")]
	DanglingReference {
		/// Position of the edge in the document.
		edge: usize,
		/// The id that does not resolve.
		id: String,
	},
	/// The container element is not in the page.
	#[error("no element with id {id:?} to render into")]
	MissingContainer {
		/// The container id that was looked up.
		id: String,
	},
}

impl Error {
	/// Which stage of the pipeline failed.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Error::Endpoint { .. } | Error::Network { .. } | Error::Status { .. } => {
				ErrorKind::Network
			}
			Error::Parse { .. } | Error::DanglingReference { .. } => ErrorKind::Parse,
			Error::MissingContainer { .. } => ErrorKind::Render,
		}
	}
}

/// Logs an error, including its causes.
pub fn log_error(err: &(dyn std::error::Error + 'static)) {
	let mut chain = ErrorCauseIter::from(err);
	if let Some(first) = chain.next() {
		error!("todograph: {}", first);
	}
	for cause in chain {
		error!("todograph: caused by: {}", cause);
	}
}

/// An iterator over an error and its sources.
#[derive(Debug)]
pub struct ErrorCauseIter<'a>(Option<&'a (dyn std::error::Error + 'static)>);

impl<'a> From<&'a (dyn std::error::Error + 'static)> for ErrorCauseIter<'a> {
	fn from(err: &'a (dyn std::error::Error + 'static)) -> Self {
		ErrorCauseIter(Some(err))
	}
}

impl<'a> Iterator for ErrorCauseIter<'a> {
	type Item = &'a (dyn std::error::Error + 'static);

	fn next(&mut self) -> Option<Self::Item> {
		let err = self.0?;
		self.0 = err.source();
		Some(err)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_is_network_kind() {
		let err = Error::Status {
			url: "http://localhost/api/all".into(),
			status: 500,
		};
		assert_eq!(err.kind(), ErrorKind::Network);
		assert_eq!(
			err.to_string(),
			"request to http://localhost/api/all returned HTTP 500"
		);
	}

	#[test]
	fn json_errors_convert_to_parse_kind() {
		let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		let err: Error = json_err.into();
		assert_eq!(err.kind(), ErrorKind::Parse);
	}

	#[test]
	fn cause_iter_walks_sources() {
		let err = Error::Network {
			url: "http://localhost/api/all".into(),
			source: "connection refused".into(),
		};
		let messages: Vec<String> = ErrorCauseIter::from(&err as &(dyn std::error::Error + 'static))
			.map(|e| e.to_string())
			.collect();
		assert_eq!(
			messages,
			vec![
				"request to http://localhost/api/all failed".to_string(),
				"connection refused".to_string(),
			]
		);
	}

	#[test]
	fn missing_container_is_render_kind() {
		let err = Error::MissingContainer { id: "main".into() };
		assert_eq!(err.kind(), ErrorKind::Render);
	}
}
