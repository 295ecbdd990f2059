use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Whole numbers print without a fractional part, everything else as-is.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Maps a label onto `[0, 1)`, stable across runs of the same build.
pub fn stable_unit(label: &str) -> f64 {
    let mut hasher = DefaultHasher::new();
    label.hash(&mut hasher);
    let hash = hasher.finish();

    (hash >> 11) as f64 / (1u64 << 53) as f64
}
