//! Reshapes a [`SourceGraph`] into the [`RenderGraph`] the canvas consumes.

use std::collections::HashSet;

use crate::components::force_graph::{RenderEdge, RenderGraph, RenderNode};
use crate::error::{Error, Result};

use super::document::SourceGraph;

/// Maps todos to nodes and dependencies to edges, preserving input order.
///
/// Edge ids are positions in `doc.edges`, so they are only stable for as long
/// as the server returns edges in the same order.
pub fn to_render_graph(doc: &SourceGraph) -> RenderGraph {
	let nodes = doc
		.todos
		.iter()
		.map(|todo| RenderNode {
			id: todo.id.to_string(),
			label: todo.name.clone(),
		})
		.collect();

	let edges = doc
		.edges
		.iter()
		.enumerate()
		.map(|(i, edge)| RenderEdge {
			id: i.to_string(),
			source: edge.from.to_string(),
			target: edge.to.to_string(),
		})
		.collect();

	RenderGraph { nodes, edges }
}

/// Fails on the first edge whose source or target is not a node id.
pub fn check_references(graph: &RenderGraph) -> Result<()> {
	let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
	for (i, edge) in graph.edges.iter().enumerate() {
		for end in [&edge.source, &edge.target] {
			if !ids.contains(end.as_str()) {
				return Err(Error::DanglingReference {
					edge: i,
					id: end.clone(),
				});
			}
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::loader::document::{Edge, Identifier, TodoNode};

	fn todo(id: impl Into<Identifier>, name: &str) -> TodoNode {
		TodoNode {
			id: id.into(),
			name: name.to_string(),
		}
	}

	fn edge(from: impl Into<Identifier>, to: impl Into<Identifier>) -> Edge {
		Edge {
			from: from.into(),
			to: to.into(),
		}
	}

	#[test]
	fn edge_ids_are_positions() {
		let doc = SourceGraph {
			edges: vec![edge(3, 1), edge(1, 2), edge(3, 2)],
			todos: vec![todo(1, "a"), todo(2, "b"), todo(3, "c")],
		};
		let graph = to_render_graph(&doc);
		let ids: Vec<&str> = graph.edges.iter().map(|e| e.id.as_str()).collect();
		assert_eq!(ids, ["0", "1", "2"]);
		assert_eq!(graph.edges[0].source, "3");
		assert_eq!(graph.edges[0].target, "1");
	}

	#[test]
	fn nodes_keep_document_order() {
		let doc = SourceGraph {
			edges: vec![],
			todos: vec![todo(9, "last"), todo("x", "middle"), todo(1, "first")],
		};
		let graph = to_render_graph(&doc);
		assert_eq!(graph.nodes, vec![
			RenderNode {
				id: "9".into(),
				label: "last".into()
			},
			RenderNode {
				id: "x".into(),
				label: "middle".into()
			},
			RenderNode {
				id: "1".into(),
				label: "first".into()
			},
		]);
	}

	#[test]
	fn dangling_edges_pass_through_the_transform() {
		let doc = SourceGraph {
			edges: vec![edge(1, 42)],
			todos: vec![todo(1, "only")],
		};
		let graph = to_render_graph(&doc);
		assert_eq!(graph.edges.len(), 1);
		assert_eq!(graph.edges[0].target, "42");
	}

	#[test]
	fn check_references_names_first_dangling_end() {
		let doc = SourceGraph {
			edges: vec![edge(1, 2), edge(7, 1)],
			todos: vec![todo(1, "a"), todo(2, "b")],
		};
		let err = check_references(&to_render_graph(&doc)).unwrap_err();
		match err {
			Error::DanglingReference { edge, id } => {
				assert_eq!(edge, 1);
				assert_eq!(id, "7");
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn mixed_identifier_types_resolve_by_string() {
		let doc = SourceGraph {
			edges: vec![edge("1", 2)],
			todos: vec![todo(1, "a"), todo("2", "b")],
		};
		assert!(check_references(&to_render_graph(&doc)).is_ok());
	}
}
