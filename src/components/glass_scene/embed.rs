//! Responsive embed snippets.
//!
//! A site embeds the scene through an iframe whose URL carries the camera
//! settings. Different viewport widths usually want different offsets, so the
//! generated snippet ships a breakpoint table and swaps the iframe URL on
//! resize.

use serde::{Deserialize, Serialize};

use super::config::DEFAULT_FOV;
use super::error::ConfigError;

/// Camera settings applied up to a viewport width (inclusive).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
	#[serde(skip_serializing, default)]
	pub name: String,
	pub max_width: u32,
	pub offset_x: f64,
	pub offset_y: f64,
	pub fov: f64,
}

impl Breakpoint {
	pub fn new(name: &str, max_width: u32) -> Self {
		Self {
			name: name.to_string(),
			max_width,
			offset_x: 0.0,
			offset_y: 0.0,
			fov: DEFAULT_FOV,
		}
	}
}

/// Width presets from small phones up to large desktops.
pub fn default_breakpoints() -> Vec<Breakpoint> {
	[
		("Mobile S", 479),
		("Mobile L", 767),
		("Tablet", 991),
		("Laptop", 1439),
		("Desktop", 1919),
		("Large", 9999),
	]
	.into_iter()
	.map(|(name, max_width)| Breakpoint::new(name, max_width))
	.collect()
}

/// Settings for a viewport `width`: the first breakpoint that covers it, or
/// an unnamed default when none does.
pub fn breakpoint_for_width(breakpoints: &[Breakpoint], width: u32) -> Breakpoint {
	breakpoints
		.iter()
		.find(|bp| width <= bp.max_width)
		.cloned()
		.unwrap_or_else(|| Breakpoint::new("", u32::MAX))
}

/// Human readable width range of breakpoint `index`, e.g. `"480-767px"`.
///
/// The last breakpoint is open ended (`"1920px+"`).
pub fn breakpoint_range_label(breakpoints: &[Breakpoint], index: usize) -> Option<String> {
	let bp = breakpoints.get(index)?;
	let min_width = match index {
		0 => 0,
		_ => breakpoints[index - 1].max_width.saturating_add(1),
	};
	if index + 1 == breakpoints.len() {
		Some(format!("{}px+", min_width))
	} else {
		Some(format!("{}-{}px", min_width, bp.max_width))
	}
}

/// URL of the embed page for one set of camera settings.
pub fn embed_url(base_url: &str, offset_x: f64, offset_y: f64, fov: f64) -> String {
	format!(
		"{}/embed.html?offsetX={}&offsetY={}&fov={}",
		base_url.trim_end_matches('/'),
		offset_x,
		offset_y,
		fov
	)
}

/// Debounce before the iframe URL is recomputed after a resize.
const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Copy-paste HTML that embeds the scene and follows `breakpoints` on resize.
pub fn generate_embed_code(
	base_url: &str,
	breakpoints: &[Breakpoint],
) -> Result<String, ConfigError> {
	let table = serde_json::to_string(breakpoints)?;
	let base_url = base_url.trim_end_matches('/');

	Ok(format!(
		r#"<div style="width: 100%; height: 400px;">
  <iframe id="glass-logo-embed" style="width: 100%; height: 100%; border: none;" loading="lazy"></iframe>
</div>
<script>
(function() {{
  var BASE_URL = '{base_url}/embed.html';
  var breakpoints = {table};
  function getConfig(w) {{
    for (var i = 0; i < breakpoints.length; i++) {{
      if (w <= breakpoints[i].maxWidth) return breakpoints[i];
    }}
    return {{ offsetX: 0, offsetY: 0, fov: {DEFAULT_FOV} }};
  }}
  function update() {{
    var cfg = getConfig(window.innerWidth);
    document.getElementById('glass-logo-embed').src = BASE_URL + '?offsetX=' + cfg.offsetX + '&offsetY=' + cfg.offsetY + '&fov=' + cfg.fov;
  }}
  update();
  var t;
  window.addEventListener('resize', function() {{
    clearTimeout(t);
    t = setTimeout(update, {RESIZE_DEBOUNCE_MS});
  }});
}})();
</script>"#
	))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn picks_first_covering_breakpoint() {
		let mut bps = default_breakpoints();
		bps[1].offset_x = 6.0;

		assert_eq!(breakpoint_for_width(&bps, 320).name, "Mobile S");
		assert_eq!(breakpoint_for_width(&bps, 479).name, "Mobile S");
		let tablet_ish = breakpoint_for_width(&bps, 480);
		assert_eq!(tablet_ish.name, "Mobile L");
		assert_eq!(tablet_ish.offset_x, 6.0);
		assert_eq!(breakpoint_for_width(&bps, 2560).name, "Large");
	}

	#[test]
	fn falls_back_past_last_breakpoint() {
		let bps = vec![Breakpoint::new("Only", 600)];
		let bp = breakpoint_for_width(&bps, 601);
		assert_eq!(bp.offset_x, 0.0);
		assert_eq!(bp.offset_y, 0.0);
		assert_eq!(bp.fov, DEFAULT_FOV);
		assert!(breakpoint_for_width(&[], 100).name.is_empty());
	}

	#[test]
	fn range_labels() {
		let bps = default_breakpoints();
		assert_eq!(breakpoint_range_label(&bps, 0).as_deref(), Some("0-479px"));
		assert_eq!(breakpoint_range_label(&bps, 1).as_deref(), Some("480-767px"));
		assert_eq!(breakpoint_range_label(&bps, 5).as_deref(), Some("1920px+"));
		assert_eq!(breakpoint_range_label(&bps, 6), None);
	}

	#[test]
	fn url_carries_camera_settings() {
		assert_eq!(
			embed_url("https://example.com/", -4.0, 1.5, 45.0),
			"https://example.com/embed.html?offsetX=-4&offsetY=1.5&fov=45"
		);
	}

	#[test]
	fn snippet_embeds_breakpoint_table() {
		let mut bps = default_breakpoints();
		bps[0].fov = 70.0;
		let code = generate_embed_code("https://example.com", &bps).unwrap();

		assert!(code.contains("var BASE_URL = 'https://example.com/embed.html';"));
		assert!(code.contains(r#"{"maxWidth":479,"offsetX":0.0,"offsetY":0.0,"fov":70.0}"#));
		assert!(code.contains("setTimeout(update, 250)"));
		assert!(!code.contains("Mobile S"));
	}

	#[test]
	fn breakpoints_deserialize_without_names() {
		let parsed: Vec<Breakpoint> =
			serde_json::from_str(r#"[{"maxWidth":767,"offsetX":2.0,"offsetY":0.0,"fov":50.0}]"#)
				.unwrap();
		assert_eq!(parsed[0].max_width, 767);
		assert_eq!(parsed[0].offset_x, 2.0);
		assert!(parsed[0].name.is_empty());
	}
}
