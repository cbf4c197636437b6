//! Chart transformers: raw payload -> normalized chart spec
//!
//! One pure function per chart kind. Color and radius vectors are always
//! positionally aligned with the point vectors they style.

pub mod bubble;
pub mod categorical;
pub mod heatmap;
pub mod scatter;
pub mod share;
pub mod stacked;

pub use share::ShareSpec;

/// Partition rows into groups keyed by `key`, preserving first-seen group
/// order and row order within each group.
pub(crate) fn partition_by<'a, T>(
    rows: &'a [T],
    key: impl Fn(&T) -> &str,
) -> Vec<(String, Vec<&'a T>)> {
    let mut groups: Vec<(String, Vec<&T>)> = Vec::new();
    for row in rows {
        let k = key(row);
        match groups.iter_mut().find(|(name, _)| name == k) {
            Some((_, members)) => members.push(row),
            None => groups.push((k.to_string(), vec![row])),
        }
    }
    groups
}
