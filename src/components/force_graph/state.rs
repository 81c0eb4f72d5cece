//! Graph simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation with per-node metadata, view
//! transforms for pan/zoom, and highlight state for hover effects.

use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::warn;

use super::theme::Theme;
use super::types::RenderGraph;

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	/// Text drawn beside the node.
	pub label: String,
	/// CSS fill colour.
	pub color: String,
	/// Size multiplier (1.0 = normal, >1.0 = more connected)
	pub size: f64,
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	/// Horizontal offset in screen pixels.
	pub x: f64,
	/// Vertical offset in screen pixels.
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

impl ViewTransform {
	/// Zooms by `factor` keeping the screen point (`sx`, `sy`) fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.k;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
		self.k = new_k;
	}
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
#[allow(missing_docs)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
#[allow(missing_docs)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Hover highlighting with a smoothed per-node intensity in `0.0..=1.0`.
///
/// The hovered node and its neighbours fade in; everything else fades out.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	/// Node under the pointer, if any.
	pub hovered_node: Option<DefaultNodeIdx>,
	target_set: HashSet<DefaultNodeIdx>,
	/// Nodes not in this map have intensity 0.
	node_intensity: HashMap<DefaultNodeIdx, f64>,
	cached_max: f64,
}

const FADE_IN_SPEED: f64 = 6.0;
/// Todos with a blank name are drawn smaller, there is nothing to read next to them.
const UNLABELLED_SCALE: f64 = 0.75;
const FADE_OUT_SPEED: f64 = 4.0;

impl HighlightState {
	/// Update the hovered node and recompute the target highlight set.
	pub fn set_hover(
		&mut self,
		node: Option<DefaultNodeIdx>,
		edges: &[(DefaultNodeIdx, DefaultNodeIdx)],
	) {
		if self.hovered_node == node {
			return;
		}
		self.hovered_node = node;
		self.target_set.clear();

		if let Some(idx) = node {
			self.target_set.insert(idx);
			for &(src, tgt) in edges {
				if src == idx {
					self.target_set.insert(tgt);
				} else if tgt == idx {
					self.target_set.insert(src);
				}
			}
		}
	}

	/// Whether `idx` is the hovered node or one of its neighbours.
	#[cfg(test)]
	fn is_target(&self, idx: DefaultNodeIdx) -> bool {
		self.target_set.contains(&idx)
	}

	/// Exponential smoothing: value += (target - value) * (1 - e^(-speed * dt))
	pub fn tick(&mut self, dt: f64) {
		let fade_in_factor = 1.0 - (-FADE_IN_SPEED * dt).exp();
		let fade_out_decay = (-FADE_OUT_SPEED * dt).exp();

		for &idx in &self.target_set {
			let intensity = self.node_intensity.entry(idx).or_insert(0.0);
			*intensity += (1.0 - *intensity) * fade_in_factor;
		}

		let mut new_max: f64 = 0.0;
		self.node_intensity.retain(|idx, intensity| {
			if !self.target_set.contains(idx) {
				*intensity *= fade_out_decay;
			}
			new_max = new_max.max(*intensity);
			*intensity > 0.005
		});
		self.cached_max = new_max;
	}

	/// Current intensity of `idx`, 0 when not highlighted.
	pub fn node_intensity(&self, idx: DefaultNodeIdx) -> f64 {
		self.node_intensity.get(&idx).copied().unwrap_or(0.0)
	}

	/// Geometric mean of the two end intensities.
	pub fn edge_intensity(&self, idx1: DefaultNodeIdx, idx2: DefaultNodeIdx) -> f64 {
		(self.node_intensity(idx1) * self.node_intensity(idx2)).sqrt()
	}

	/// Highest node intensity as of the last tick, used to dim everything else.
	pub fn max_intensity(&self) -> f64 {
		self.cached_max
	}
}

/// Physics simulation plus interaction and highlight tracking.
///
/// Built once per render graph when the component mounts, then mutated each
/// frame by the animation loop.
pub struct ForceGraphState {
	/// The physics simulation.
	pub graph: ForceGraph<NodeInfo, ()>,
	/// Current pan and zoom.
	pub transform: ViewTransform,
	/// Node drag in progress.
	pub drag: DragState,
	/// Canvas pan in progress.
	pub pan: PanState,
	/// Hover highlight.
	pub highlight: HighlightState,
	/// Canvas width in CSS pixels.
	pub width: f64,
	/// Canvas height in CSS pixels.
	pub height: f64,
	/// While set, the frame loop keeps stepping the simulation.
	pub animation_running: bool,
	id_to_idx: HashMap<String, DefaultNodeIdx>,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

impl ForceGraphState {
	/// Lays out `data` on a circle around the canvas centre.
	pub fn new(data: &RenderGraph, width: f64, height: f64, theme: &Theme) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();

		let mut degree: HashMap<&str, usize> = HashMap::new();
		for edge in &data.edges {
			*degree.entry(edge.source.as_str()).or_insert(0) += 1;
			*degree.entry(edge.target.as_str()).or_insert(0) += 1;
		}
		let max_degree = degree.values().copied().max().unwrap_or(1).max(1);

		let n = data.nodes.len().max(1) as f64;
		for (i, node) in data.nodes.iter().enumerate() {
			if id_to_idx.contains_key(&node.id) {
				warn!("todograph: duplicate node id {:?}, keeping the first", node.id);
				continue;
			}
			let angle = (i as f64) * 2.0 * PI / n;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);
			// sqrt for softer scaling: 0.8x for isolated todos up to 1.6x for the hub
			let node_degree = degree.get(node.id.as_str()).copied().unwrap_or(0);
			let mut size = 0.8 + 0.8 * (node_degree as f64 / max_degree as f64).sqrt();
			if node.label.trim().is_empty() {
				size *= UNLABELLED_SCALE;
			}

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					label: node.label.clone(),
					color: theme.palette.get(i).to_css(),
					size,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		for edge in &data.edges {
			match (id_to_idx.get(&edge.source), id_to_idx.get(&edge.target)) {
				(Some(&src), Some(&tgt)) => {
					graph.add_edge(src, tgt, EdgeData::default());
					edges.push((src, tgt));
				}
				_ => warn!(
					"todograph: skipping edge {} ({} -> {}), endpoint not in graph",
					edge.id, edge.source, edge.target
				),
			}
		}

		Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			highlight: HighlightState::default(),
			width,
			height,
			animation_running: true,
			id_to_idx,
			edges,
		}
	}

	/// Number of nodes in the simulation.
	#[cfg(test)]
	fn node_count(&self) -> usize {
		self.id_to_idx.len()
	}

	/// Edges that made it into the simulation, as node index pairs.
	#[cfg(test)]
	fn edges(&self) -> &[(DefaultNodeIdx, DefaultNodeIdx)] {
		&self.edges
	}

	/// Simulation index of the node with render id `id`.
	#[cfg(test)]
	fn node_index(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.id_to_idx.get(id).copied()
	}

	/// Converts canvas coordinates to simulation coordinates.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node within hit distance of the canvas point.
	pub fn node_at_position(&self, sx: f64, sy: f64, theme: &Theme) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		// at least 5 screen pixels regardless of zoom
		let hit_radius = theme.node.hit_radius.max(5.0 / self.transform.k);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < hit_radius * node.data.user_data.size {
				found = Some(node.index());
			}
		});
		found
	}

	/// Sets the hovered node, highlighting its neighbours.
	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.highlight.set_hover(node, &self.edges);
	}

	/// Advances physics and highlight fades by `dt` seconds.
	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.highlight.tick(dt as f64);
	}

	/// Records the new canvas size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::{RenderEdge, RenderNode};

	fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> RenderGraph {
		RenderGraph {
			nodes: nodes
				.iter()
				.map(|id| RenderNode {
					id: id.to_string(),
					label: format!("todo {id}"),
				})
				.collect(),
			edges: edges
				.iter()
				.enumerate()
				.map(|(i, (s, t))| RenderEdge {
					id: i.to_string(),
					source: s.to_string(),
					target: t.to_string(),
				})
				.collect(),
		}
	}

	fn state(data: &RenderGraph) -> ForceGraphState {
		ForceGraphState::new(data, 800.0, 600.0, &Theme::default())
	}

	#[test]
	fn dangling_edges_are_skipped() {
		let s = state(&graph(&["1", "2"], &[("1", "2"), ("2", "99")]));
		assert_eq!(s.node_count(), 2);
		assert_eq!(s.edges().len(), 1);
	}

	#[test]
	fn duplicate_ids_keep_first_node() {
		let s = state(&graph(&["1", "1", "2"], &[("1", "2")]));
		assert_eq!(s.node_count(), 2);
		assert_eq!(s.edges().len(), 1);
	}

	#[test]
	fn unlabelled_nodes_are_smaller() {
		let mut data = graph(&["a", "b"], &[("a", "b")]);
		data.nodes[1].label = "  ".into();
		let s = state(&data);
		let size = |id| {
			let idx = s.node_index(id).unwrap();
			let mut found = 0.0;
			s.graph.visit_nodes(|n| {
				if n.index() == idx {
					found = n.data.user_data.size;
				}
			});
			found
		};
		// equal degree, so only the label differs
		assert!((size("a") - 1.6).abs() < 1e-9);
		assert!((size("b") - 1.6 * UNLABELLED_SCALE).abs() < 1e-9);
	}

	#[test]
	fn empty_graph_builds() {
		let s = state(&RenderGraph::default());
		assert_eq!(s.node_count(), 0);
		assert!(s.edges().is_empty());
	}

	#[test]
	fn hover_targets_node_and_neighbours() {
		let mut s = state(&graph(&["a", "b", "c", "d"], &[("a", "b"), ("c", "a")]));
		let idx = |id| s.node_index(id).unwrap();
		let (a, b, c, d) = (idx("a"), idx("b"), idx("c"), idx("d"));

		s.set_hover(Some(a));
		assert!(s.highlight.is_target(a));
		assert!(s.highlight.is_target(b));
		assert!(s.highlight.is_target(c));
		assert!(!s.highlight.is_target(d));

		s.highlight.tick(0.1);
		assert!(s.highlight.node_intensity(a) > 0.0);
		assert_eq!(s.highlight.node_intensity(d), 0.0);
		assert!(s.highlight.max_intensity() > 0.0);
	}

	#[test]
	fn highlight_fades_out_after_hover_ends() {
		let mut s = state(&graph(&["a", "b"], &[("a", "b")]));
		let a = s.node_index("a").unwrap();
		s.set_hover(Some(a));
		for _ in 0..30 {
			s.highlight.tick(0.016);
		}
		let peak = s.highlight.node_intensity(a);
		assert!(peak > 0.9);

		s.set_hover(None);
		s.highlight.tick(0.016);
		assert!(s.highlight.node_intensity(a) < peak);
		for _ in 0..300 {
			s.highlight.tick(0.016);
		}
		assert_eq!(s.highlight.node_intensity(a), 0.0);
		assert_eq!(s.highlight.max_intensity(), 0.0);
	}

	#[test]
	fn zoom_keeps_anchor_point_fixed() {
		let mut t = ViewTransform {
			x: 10.0,
			y: 20.0,
			k: 1.0,
		};
		t.zoom_at(110.0, 220.0, 2.0);
		assert_eq!(t.k, 2.0);
		// graph point under the cursor before: (100, 200)
		assert_eq!(((110.0 - t.x) / t.k, (220.0 - t.y) / t.k), (100.0, 200.0));
	}
}
