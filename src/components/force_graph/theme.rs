//! Visual theming for the force graph.
//!
//! Colors, sizes and the node palette. Sizes are in world units unless noted.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `0.0..=1.0`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	/// Hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colors handed out to nodes by position.
#[derive(Clone, Debug)]
pub struct NodePalette {
	/// Cycled through by node position.
	pub colors: Vec<Color>,
}

impl NodePalette {
	/// Slate blues and teals.
	pub fn slate() -> Self {
		Self {
			colors: vec![
				Color::rgb(94, 129, 172),  // Steel blue
				Color::rgb(129, 161, 193), // Light steel
				Color::rgb(100, 148, 160), // Teal gray
				Color::rgb(136, 160, 175), // Cadet blue
				Color::rgb(108, 142, 173), // Air force blue
				Color::rgb(119, 158, 165), // Desaturated cyan
			],
		}
	}

	/// Color for the node at `index`; gray if the palette is empty.
	pub fn get(&self, index: usize) -> Color {
		if self.colors.is_empty() {
			return Color::rgb(128, 128, 128);
		}
		self.colors[index % self.colors.len()]
	}
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Resting edge color.
	pub color: Color,
	/// Color used for edges touching the hovered node.
	pub highlight_color: Color,
	/// Line width in screen pixels.
	pub line_width: f64,
	/// Arrowhead length in world units.
	pub arrow_size: f64,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Base radius before degree scaling.
	pub radius: f64,
	/// Pointer distance that still counts as a hit.
	pub hit_radius: f64,
	/// Node outline.
	pub border_color: Color,
	/// Label text.
	pub label_color: Color,
	/// Label font size in screen pixels.
	pub label_size: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Canvas fill.
	pub background: Color,
	/// Edge style.
	pub edge: EdgeStyle,
	/// Node style.
	pub node: NodeStyle,
	/// Node fill colors.
	pub palette: NodePalette,
}

impl Theme {
	/// Font string for labels at zoom `k`, kept at a constant screen size.
	pub fn label_font(&self, k: f64) -> String {
		format!("{}px sans-serif", self.node.label_size / k.max(0.5))
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::rgb(22, 27, 34),
			edge: EdgeStyle {
				color: Color::rgba(140, 160, 180, 0.5),
				highlight_color: Color::rgba(220, 230, 240, 0.9),
				line_width: 1.5,
				arrow_size: 5.0,
			},
			node: NodeStyle {
				radius: 6.0,
				hit_radius: 12.0,
				border_color: Color::rgba(255, 255, 255, 0.35),
				label_color: Color::rgba(255, 255, 255, 0.85),
				label_size: 11.0,
			},
			palette: NodePalette::slate(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(94, 129, 172).to_css(), "#5e81ac");
		assert_eq!(
			Color::rgb(0, 0, 0).with_alpha(0.5).to_css(),
			"rgba(0, 0, 0, 0.5)"
		);
	}

	#[test]
	fn lerp_hits_both_ends() {
		let (from, to) = (Color::rgba(0, 100, 200, 0.5), Color::rgb(200, 0, 100));
		assert_eq!(from.lerp(to, 0.0), from);
		assert_eq!(from.lerp(to, 1.0), to);
		assert_eq!(from.lerp(to, 7.0), to);
	}

	#[test]
	fn palette_wraps_around() {
		let palette = NodePalette::slate();
		let n = palette.colors.len();
		assert_eq!(palette.get(n + 1), palette.get(1));
	}
}
