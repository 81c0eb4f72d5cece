//! Force-directed graph visualization component.
//!
//! Renders a [`RenderGraph`] on an HTML canvas with:
//! - Physics-based node positioning via force simulation
//! - Pan, zoom, and node dragging interactions
//! - Neighbour highlighting on hover
//!
//! # Example
//!
//! ```ignore
//! use todograph_view::components::force_graph::{ForceGraphCanvas, RenderEdge, RenderGraph, RenderNode};
//!
//! let data = RenderGraph {
//!     nodes: vec![
//!         RenderNode { id: "1".into(), label: "draft plan".into() },
//!         RenderNode { id: "2".into(), label: "ship".into() },
//!     ],
//!     edges: vec![
//!         RenderEdge { id: "0".into(), source: "1".into(), target: "2".into() },
//!     ],
//! };
//!
//! view! { <ForceGraphCanvas data=data /> }
//! ```

mod component;
mod render;
mod state;
pub mod theme;
mod types;

pub use component::ForceGraphCanvas;
pub use state::{ForceGraphState, HighlightState};
pub use theme::Theme;
pub use types::{RenderEdge, RenderGraph, RenderNode};
