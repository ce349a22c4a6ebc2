//! CPU brand normalization.
//!
//! Benchmark tables are keyed by the core model identifier (`i7-8650U`),
//! while hosts report a marketing string
//! (`Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz`). Normalization strips the
//! brand prefix and everything from the `CPU` marker onward.

/// Brand tokens removed before the model identifier is located.
pub const BRAND_PREFIXES: &[&str] = &["Intel(R) Core(TM)"];

/// Marker that precedes the clock-speed suffix.
pub const CPU_MARKER: &str = "CPU";

/// Reduce a raw CPU brand string to the key used for benchmark lookup.
///
/// When the `CPU` marker is absent the prefix-stripped string is returned
/// trimmed.
///
/// # Example
///
/// ```
/// use rigcheck::benchmark::normalize;
///
/// assert_eq!(normalize("Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz"), "i7-8650U");
/// assert_eq!(normalize("  AMD Ryzen 7 5800H with Radeon Graphics "), "AMD Ryzen 7 5800H with Radeon Graphics");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut name = raw.to_string();
    while let Some(prefix) = BRAND_PREFIXES.iter().find(|p| name.contains(*p)) {
        name = name.replace(prefix, "");
    }

    if let Some(marker) = name.find(CPU_MARKER) {
        name.truncate(marker);
    }

    name.trim().to_string()
}
