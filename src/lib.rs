//! todograph-view: browser view of the todograph dependency graph.
//!
//! Fetches the todo document from the todograph server (`./api/all`),
//! reshapes it into nodes and edges, and mounts a force-directed canvas into
//! the page's `main` element.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub mod components;
pub mod config;
pub mod error;
pub mod loader;

pub use components::force_graph::{ForceGraphCanvas, RenderEdge, RenderGraph, RenderNode};
pub use config::ViewerConfig;
pub use error::{Error, ErrorKind, Result, log_error};
pub use loader::{LoadOptions, load, load_with};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging(level: Level) {
	let _ = console_log::init_with_level(level);
	console_error_panic_hook::set_once();
	info!("todograph: logging initialized at {}", level);
}

/// The graph view mounted into the container.
#[component]
pub fn GraphView(graph: RenderGraph, #[prop(default = false)] fullscreen: bool) -> impl IntoView {
	provide_meta_context();

	view! {
		<Title text="todograph" />
		<ForceGraphCanvas data=graph fullscreen=fullscreen />
	}
}

/// Hands `graph` to the canvas inside the element with id `config.container`.
pub fn mount_graph(graph: RenderGraph, config: &ViewerConfig) -> Result<()> {
	let container = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(&config.container))
		.and_then(|e| e.dyn_into::<HtmlElement>().ok())
		.ok_or_else(|| Error::MissingContainer {
			id: config.container.clone(),
		})?;

	let fullscreen = config.fullscreen;
	leptos::mount::mount_to(container, move || view! { <GraphView graph=graph fullscreen=fullscreen /> }).forget();
	Ok(())
}

/// Reads the page config, loads the graph and mounts it. Failures are logged.
pub async fn start() {
	let (config, config_err) = match ViewerConfig::from_page() {
		Ok(config) => (config.unwrap_or_default(), None),
		Err(e) => (ViewerConfig::default(), Some(e)),
	};
	init_logging(config.level());
	if let Some(e) = config_err {
		warn!("todograph: ignoring invalid page config: {}", e);
	}

	let fetch = loader::BrowserFetch::new();
	let result = load_with(&fetch, &config.load_options())
		.await
		.and_then(|graph| mount_graph(graph, &config));
	if let Err(e) = result {
		log_error(&e);
	}
}

/// Spawns [`start`] on the browser's event loop.
pub fn run() {
	wasm_bindgen_futures::spawn_local(start());
}
