//! Hue-spaced color palette
//!
//! Colors are deterministic: the same count always yields byte-identical
//! output, so reloading a chart never shifts its colors.

/// Generate `count` fill colors evenly distributed over the hue circle.
/// A zero count yields an empty palette.
pub fn generate_colors(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let hue = i as f64 * (360.0 / count as f64);
            format!("hsla({hue}, 70%, 60%, 0.7)")
        })
        .collect()
}

/// Higher-opacity border color for each fill color.
///
/// Replaces the first embedded alpha substring, checked in the order
/// 0.7 -> 0.9, 0.6 -> 0.8, 0.5 -> 0.7; a color containing none of the three
/// patterns is returned unchanged.
pub fn border_colors(colors: &[String]) -> Vec<String> {
    colors.iter().map(|c| border_color(c)).collect()
}

fn border_color(color: &str) -> String {
    let mut out = color.replacen("0.7", "0.9", 1);
    out = out.replacen("0.6", "0.8", 1);
    out.replacen("0.5", "0.7", 1)
}

/// Opaque color for group `index` out of `count` groups, used by the
/// scatter/bubble transformers. Kept separate from [`generate_colors`]
/// because it is keyed by an exact index/count pair rather than a
/// pre-built list.
pub fn group_color(index: usize, count: usize) -> String {
    let hue = index as f64 * (360.0 / count.max(1) as f64);
    format!("hsl({hue}, 70%, 60%)")
}

/// Translucent fill variant of [`group_color`], used for bubble bodies
pub fn group_fill(index: usize, count: usize) -> String {
    let hue = index as f64 * (360.0 / count.max(1) as f64);
    format!("hsla({hue}, 70%, 60%, 0.5)")
}
