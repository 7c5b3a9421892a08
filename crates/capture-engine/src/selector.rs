//! Monitor selection resolution.

/// Resolve a monitor spec string against the number of attached displays.
///
/// Accepted forms, checked in order:
/// - `"all"`: every display, ascending.
/// - `"primary"`: the first display only.
/// - A comma list of 1-based display numbers (`"1,3"`). Entries that do
///   not parse or are out of range are dropped; user order and duplicates
///   are kept, so `"1,1"` captures display 1 twice per tick.
///
/// A spec that resolves to nothing falls back to the primary display with
/// a warning. Callers guarantee `num_displays >= 1`.
pub fn resolve_monitors(spec: &str, num_displays: usize) -> Vec<usize> {
    if spec == "all" {
        return (0..num_displays).collect();
    }
    if spec == "primary" {
        return vec![0];
    }

    let mut resolved = Vec::new();
    for part in spec.split(',') {
        match part.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= num_displays => resolved.push(n - 1),
            _ => {}
        }
    }

    if resolved.is_empty() {
        tracing::warn!(spec, "Monitor spec resolved to no displays, using primary");
        return vec![0];
    }
    resolved
}
