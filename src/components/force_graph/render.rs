//! Canvas rendering for the force graph.
//!
//! Draws in three passes so highlighted elements end up on top:
//! 1. Background (screen space)
//! 2. Edges with arrowheads (world space)
//! 3. Dimmed nodes, then highlighted nodes and their labels

use std::f64::consts::PI;

use force_graph::Node;
use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, NodeInfo};
use super::theme::Theme;

fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Renders the complete graph to the canvas.
pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, theme);
	draw_nodes(state, ctx, theme);

	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let k = state.transform.k;
	let max_t = smooth_step(state.highlight.max_intensity());

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		let edge_t = smooth_step(state.highlight.edge_intensity(n1.index(), n2.index()));
		let color = theme.edge.color.lerp(theme.edge.highlight_color, edge_t);
		// edges away from the hovered node dim along with their nodes
		let color = color.with_alpha(color.a * (1.0 - 0.6 * max_t * (1.0 - edge_t)));

		let r1 = theme.node.radius * n1.data.user_data.size;
		let r2 = theme.node.radius * n2.data.user_data.size;
		let arrow = theme.edge.arrow_size;
		let (ux, uy) = (dx / dist, dy / dist);

		ctx.set_stroke_style_str(&color.to_css());
		ctx.set_line_width(theme.edge.line_width * (1.0 + 0.5 * edge_t) / k);
		ctx.begin_path();
		ctx.move_to(x1 + ux * r1, y1 + uy * r1);
		ctx.line_to(x2 - ux * (r2 + arrow), y2 - uy * (r2 + arrow));
		ctx.stroke();

		let (tip_x, tip_y) = (x2 - ux * r2, y2 - uy * r2);
		let (back_x, back_y) = (tip_x - ux * arrow, tip_y - uy * arrow);
		let (px, py) = (-uy * arrow * 0.5, ux * arrow * 0.5);

		ctx.set_fill_style_str(&color.to_css());
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	});
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let max_t = smooth_step(state.highlight.max_intensity());
	let font = theme.label_font(state.transform.k);

	// Pass 1: nodes outside the highlight
	state.graph.visit_nodes(|node| {
		if state.highlight.node_intensity(node.index()) > 0.001 {
			return;
		}
		let alpha = 1.0 - 0.7 * max_t;
		draw_node(ctx, node, theme, &font, alpha, 1.0 - 0.15 * max_t);
	});

	// Pass 2: highlighted or fading nodes on top
	state.graph.visit_nodes(|node| {
		let node_t = state.highlight.node_intensity(node.index());
		if node_t <= 0.001 {
			return;
		}
		let eased = smooth_step(node_t);
		let hovered = state.highlight.hovered_node == Some(node.index());
		let grow = if hovered { 0.4 } else { 0.2 };
		let dim_alpha = 1.0 - 0.7 * max_t;
		let alpha = dim_alpha + (1.0 - dim_alpha) * eased;
		draw_node(ctx, node, theme, &font, alpha, 1.0 + grow * eased);
	});
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &Node<NodeInfo>,
	theme: &Theme,
	font: &str,
	alpha: f64,
	radius_mult: f64,
) {
	let (x, y) = (node.x() as f64, node.y() as f64);
	let info = &node.data.user_data;
	let radius = theme.node.radius * info.size * radius_mult;

	ctx.set_global_alpha(alpha);

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&info.color);
	ctx.fill();
	ctx.set_stroke_style_str(&theme.node.border_color.to_css());
	ctx.set_line_width(1.0);
	ctx.stroke();

	if alpha > 0.5 {
		ctx.set_fill_style_str(&theme.node.label_color.to_css());
		ctx.set_font(font);
		let _ = ctx.fill_text(&info.label, x + radius + 4.0, y + 3.0);
	}

	ctx.set_global_alpha(1.0);
}
