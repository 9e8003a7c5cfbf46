//! Shared formatting helpers for diff rendering.
//!
//! Pure string functions only (no ratatui styles, no layout math).

use crate::layout::display_units;

/// Format an integer with thousands separators: `1000` -> `"1,000"`.
pub fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Truncate a string to a display-unit budget with a unicode ellipsis (`…`).
///
/// Units follow [`display_units`]: printable ASCII counts 1, everything else
/// counts 2 (the ellipsis itself counts 2). Strings within budget are
/// returned unchanged.
pub fn truncate_units(s: &str, max_units: usize) -> String {
    if display_units(s) <= max_units {
        return s.to_string();
    }
    let budget = max_units.saturating_sub(2); // reserve room for the ellipsis
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = if (' '..='~').contains(&ch) { 1 } else { 2 };
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
