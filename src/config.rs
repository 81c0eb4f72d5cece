//! Page-level configuration.
//!
//! The host page may carry a JSON blob in
//! `<script id="todograph-config" type="application/json">`. Every field is
//! optional; a page without the element gets the defaults.

use log::Level;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::loader::{DEFAULT_ENDPOINT, LoadOptions};

/// Id of the script element holding the configuration.
pub const CONFIG_ELEMENT_ID: &str = "todograph-config";

/// Id of the element the graph is mounted into.
pub const DEFAULT_CONTAINER: &str = "main";

/// Viewer settings read from the host page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
	/// Graph document endpoint.
	pub endpoint: String,
	/// Id of the container element.
	pub container: String,
	/// Console log level name (`error` through `trace`).
	pub log_level: String,
	/// Fail the load when an edge references an unknown node.
	pub strict_references: bool,
	/// Size the canvas to the window instead of the container.
	pub fullscreen: bool,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			container: DEFAULT_CONTAINER.to_string(),
			log_level: "info".to_string(),
			strict_references: false,
			fullscreen: false,
		}
	}
}

impl ViewerConfig {
	/// Parses a configuration blob.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Reads the configuration element from the current page.
	///
	/// Returns `Ok(None)` when the element is absent. Logging is usually not
	/// set up yet when this runs, so problems are returned rather than logged.
	pub fn from_page() -> Result<Option<Self>, serde_json::Error> {
		match config_text() {
			Some(text) => Self::from_json(&text).map(Some),
			None => Ok(None),
		}
	}

	/// The configured level, `Info` if the name is not recognised.
	pub fn level(&self) -> Level {
		self.log_level.parse().unwrap_or(Level::Info)
	}

	/// Options for the loader.
	pub fn load_options(&self) -> LoadOptions {
		LoadOptions {
			endpoint: self.endpoint.clone(),
			strict_references: self.strict_references,
		}
	}
}

fn config_text() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_is_default() {
		assert_eq!(ViewerConfig::from_json("{}").unwrap(), ViewerConfig::default());
	}

	#[test]
	fn defaults_point_at_server_and_main() {
		let config = ViewerConfig::default();
		assert_eq!(config.endpoint, "./api/all");
		assert_eq!(config.container, "main");
		assert!(!config.strict_references);
		assert_eq!(config.level(), Level::Info);
	}

	#[test]
	fn partial_override() {
		let config =
			ViewerConfig::from_json(r#"{"log_level": "DEBUG", "strict_references": true}"#).unwrap();
		assert_eq!(config.level(), Level::Debug);
		assert_eq!(config.container, "main");
		assert_eq!(config.load_options(), LoadOptions {
			endpoint: "./api/all".into(),
			strict_references: true,
		});
	}

	#[test]
	fn unknown_level_falls_back_to_info() {
		let config = ViewerConfig::from_json(r#"{"log_level": "chatty"}"#).unwrap();
		assert_eq!(config.level(), Level::Info);
	}

	#[test]
	fn wrong_types_are_rejected() {
		assert!(ViewerConfig::from_json(r#"{"fullscreen": "yes"}"#).is_err());
	}
}
