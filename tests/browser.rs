//! Page-level behaviour that needs a real DOM. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use todograph_view::config::CONFIG_ELEMENT_ID;
use todograph_view::{Error, ErrorKind, RenderGraph, RenderNode, ViewerConfig, mount_graph};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
	web_sys::window().unwrap().document().unwrap()
}

fn append(tag: &str, id: &str, text: &str) -> web_sys::Element {
	let el = document().create_element(tag).unwrap();
	el.set_id(id);
	el.set_text_content(Some(text));
	document().body().unwrap().append_child(&el).unwrap();
	el
}

#[wasm_bindgen_test]
fn page_without_config_element() {
	assert_eq!(ViewerConfig::from_page().unwrap(), None);
}

#[wasm_bindgen_test]
fn page_config_element_is_read() {
	let el = append(
		"script",
		CONFIG_ELEMENT_ID,
		r#"{"container": "graph", "strict_references": true}"#,
	);
	let config = ViewerConfig::from_page().unwrap().unwrap();
	el.remove();

	assert_eq!(config.container, "graph");
	assert!(config.strict_references);
	assert_eq!(config.endpoint, "./api/all");
}

#[wasm_bindgen_test]
fn broken_page_config_is_an_error() {
	let el = append("script", CONFIG_ELEMENT_ID, "{not json");
	let result = ViewerConfig::from_page();
	el.remove();
	assert!(result.is_err());
}

#[wasm_bindgen_test]
fn missing_container_is_render_error() {
	let config = ViewerConfig {
		container: "no-such-element".into(),
		..ViewerConfig::default()
	};
	let err = mount_graph(RenderGraph::default(), &config).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Render);
	assert!(matches!(err, Error::MissingContainer { ref id } if id == "no-such-element"));
}

#[wasm_bindgen_test]
fn graph_mounts_into_container() {
	append("div", "graph-host", "");
	let config = ViewerConfig {
		container: "graph-host".into(),
		..ViewerConfig::default()
	};
	let graph = RenderGraph {
		nodes: vec![RenderNode {
			id: "1".into(),
			label: "A".into(),
		}],
		edges: vec![],
	};
	mount_graph(graph, &config).unwrap();

	let host = document().get_element_by_id("graph-host").unwrap();
	assert!(host.query_selector("canvas").unwrap().is_some());
}
