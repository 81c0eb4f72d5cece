//! Graph data structures for input to the force graph component.

use serde::{Deserialize, Serialize};

/// A node in the graph.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderNode {
	/// Unique identifier for this node. Used to reference nodes in edges.
	pub id: String,
	/// Display label drawn next to the node.
	pub label: String,
}

/// A directed edge between two nodes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderEdge {
	/// Edge identifier, its position in the source document.
	pub id: String,
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
}

/// Complete graph data: nodes and edges.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderGraph {
	/// Nodes in document order.
	pub nodes: Vec<RenderNode>,
	/// Edges in document order.
	pub edges: Vec<RenderEdge>,
}
