//! Share card: a self-contained SVG of the result
//!
//! Names and labels are user-controlled text and pass through escape_text
//! before landing in the markup.

use crate::types::FlamesOutcome;

/// Branding line at the bottom of the card
pub const SHARE_BRANDING: &str = "www.yourwebsite.com";

/// Escape text for safe insertion into markup
pub fn escape_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#039;".to_string(),
            other => other.to_string(),
        })
        .collect()
}

/// Render the outcome as an SVG share card
pub fn render_share_card(outcome: &FlamesOutcome) -> String {
    let accent = outcome.relationship.accent_hex();
    let name_a = escape_text(&outcome.name_a.raw);
    let name_b = escape_text(&outcome.name_b.raw);
    let result = escape_text(&outcome.relationship.to_string());
    let emoji = outcome.relationship.emoji();

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="600" height="400" viewBox="0 0 600 400">
  <rect x="0" y="0" width="600" height="400" fill="#1e1e2e"/>
  <rect x="10" y="10" width="580" height="380" fill="none" stroke="{accent}" stroke-width="5"/>
  <text x="300" y="80" text-anchor="middle" font-family="sans-serif" font-size="36" fill="#ffffff">🔥 FLAMES 🔥</text>
  <text x="300" y="140" text-anchor="middle" font-family="sans-serif" font-size="18" fill="#cccccc">The Relationship between</text>
  <text x="300" y="190" text-anchor="middle" font-family="sans-serif" font-size="28" fill="#ffffff">{name_a} &amp; {name_b}</text>
  <text x="300" y="240" text-anchor="middle" font-family="sans-serif" font-size="18" fill="#cccccc">is:</text>
  <text x="300" y="300" text-anchor="middle" font-family="sans-serif" font-size="34" fill="{accent}">{emoji} {result} {emoji}</text>
  <text x="300" y="370" text-anchor="middle" font-family="sans-serif" font-size="14" fill="#888888">{branding}</text>
</svg>
"##,
        accent = accent,
        name_a = name_a,
        name_b = name_b,
        result = result,
        emoji = emoji,
        branding = SHARE_BRANDING,
    )
}

/// Save the share card to an SVG file, returning its path
pub fn save_share_card(outcome: &FlamesOutcome, dir: &str) -> std::io::Result<String> {
    let filename = format!(
        "{}/flames_{}.svg",
        dir,
        outcome.timestamp.format("%Y%m%d_%H%M%S")
    );

    let svg = render_share_card(outcome);

    std::fs::create_dir_all(dir)?;
    std::fs::write(&filename, svg)?;

    Ok(filename)
}

// =============================================================================
// TESTS
// =============================================================================
