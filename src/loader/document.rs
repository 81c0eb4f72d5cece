//! The graph document served by `/api/all`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A node identifier: the server sends integers, hand-written documents may use strings.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Identifier {
	/// Any JSON number, integral or not.
	Number(serde_json::Number),
	/// A JSON string, used verbatim.
	Text(String),
}

impl fmt::Display for Identifier {
	/// Formats the identifier the way the browser's `toString()` would.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Identifier::Text(s) => f.write_str(s),
			// every number is an f64 in the browser, so large integers lose digits too
			Identifier::Number(n) => match n.as_f64() {
				Some(x) => write_js_number(f, x),
				None => write!(f, "{n}"),
			},
		}
	}
}

/// Writes `x` in ECMAScript Number::toString form.
///
/// `{:e}` already gives the shortest round-trip digits; only the layout
/// (plain, padded, leading zeros or exponent) differs from Rust's.
fn write_js_number(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
	// JSON numbers are always finite
	if x == 0.0 {
		return f.write_str("0");
	}
	if x < 0.0 {
		f.write_str("-")?;
	}

	let sci = format!("{:e}", x.abs());
	let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
	let exp: i32 = exp.parse().unwrap_or(0);
	let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
	let k = digits.len() as i32;
	// decimal point position relative to the start of `digits`
	let n = exp + 1;

	if k <= n && n <= 21 {
		write!(f, "{digits}{}", "0".repeat((n - k) as usize))
	} else if 0 < n && n <= 21 {
		let (int, frac) = digits.split_at(n as usize);
		write!(f, "{int}.{frac}")
	} else if -6 < n && n <= 0 {
		write!(f, "0.{}{digits}", "0".repeat((-n) as usize))
	} else {
		let sign = if n - 1 < 0 { '-' } else { '+' };
		let (lead, rest) = digits.split_at(1);
		if rest.is_empty() {
			write!(f, "{lead}e{sign}{}", (n - 1).abs())
		} else {
			write!(f, "{lead}.{rest}e{sign}{}", (n - 1).abs())
		}
	}
}

impl From<i32> for Identifier {
	fn from(n: i32) -> Self {
		Identifier::Number(n.into())
	}
}

impl From<&str> for Identifier {
	fn from(s: &str) -> Self {
		Identifier::Text(s.to_string())
	}
}

/// A dependency between two todos.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Edge {
	/// The todo that depends on `to`.
	pub from: Identifier,
	/// The todo `from` depends on.
	pub to: Identifier,
}

/// A todo item. Extra fields such as `done` are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TodoNode {
	/// Unique id, referenced by edges.
	pub id: Identifier,
	/// Display label.
	pub name: String,
}

/// The raw payload: dependency edges and the todos they connect.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SourceGraph {
	/// The server names this list `deps`.
	#[serde(alias = "deps")]
	pub edges: Vec<Edge>,
	/// Every todo, in server order.
	pub todos: Vec<TodoNode>,
}

/// Decodes a response body into a [`SourceGraph`].
pub fn parse_document(body: &str) -> Result<SourceGraph> {
	Ok(serde_json::from_str(body)?)
}
