//! Current machine properties.

use serde::Serialize;
use std::fmt;

/// Supported host operating systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OsName {
    Windows,
    MacOS,
    Linux,
}

impl OsName {
    /// Detect the operating system this binary was built for.
    ///
    /// Returns `None` on any target other than the three supported ones.
    pub fn current() -> Option<Self> {
        if cfg!(target_os = "windows") {
            Some(OsName::Windows)
        } else if cfg!(target_os = "macos") {
            Some(OsName::MacOS)
        } else if cfg!(target_os = "linux") {
            Some(OsName::Linux)
        } else {
            None
        }
    }

    /// Display label, also the primary token searched for in requirement OS cells.
    pub fn label(&self) -> &'static str {
        match self {
            OsName::Windows => "Windows",
            OsName::MacOS => "MacOS",
            OsName::Linux => "Linux",
        }
    }

    /// Tokens that identify this OS inside a requirement OS segment.
    ///
    /// Requirement sheets name the Linux track after its distribution.
    pub fn match_labels(&self) -> &'static [&'static str] {
        match self {
            OsName::Windows => &["Windows"],
            OsName::MacOS => &["MacOS"],
            OsName::Linux => &["Linux", "Ubuntu"],
        }
    }
}

impl fmt::Display for OsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable snapshot of the properties compared against requirement rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemProperties {
    pub os_name: OsName,
    /// Free-form OS description, e.g. `Windows 10 Pro` or `Linux (Ubuntu 22.04)`.
    pub os_edition: String,
    pub architecture: String,
    /// Raw CPU brand string as reported by the host.
    pub cpu_model: String,
    pub cpu_benchmark_score: i64,
    /// Physical memory in GiB, rounded to two decimals.
    pub usable_memory_gb: f64,
    /// Capacity of all ready volumes, whole GiB.
    pub total_storage_gb: i64,
    /// Free space across all ready volumes, whole GiB.
    pub free_storage_gb: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_is_supported_on_test_hosts() {
        if cfg!(any(target_os = "windows", target_os = "macos", target_os = "linux")) {
            assert!(OsName::current().is_some());
        }
    }

    #[test]
    fn labels_match_display() {
        assert_eq!(OsName::Windows.to_string(), "Windows");
        assert_eq!(OsName::MacOS.to_string(), "MacOS");
        assert_eq!(OsName::Linux.to_string(), "Linux");
    }

    #[test]
    fn linux_also_matches_ubuntu() {
        assert!(OsName::Linux.match_labels().contains(&"Ubuntu"));
        assert_eq!(OsName::Windows.match_labels(), &["Windows"]);
    }

    #[test]
    fn properties_serialize_to_json() {
        let props = SystemProperties {
            os_name: OsName::Linux,
            os_edition: "Linux (Ubuntu 22.04)".to_string(),
            architecture: "X64".to_string(),
            cpu_model: "AMD Ryzen 7 5800H".to_string(),
            cpu_benchmark_score: 21000,
            usable_memory_gb: 15.5,
            total_storage_gb: 512,
            free_storage_gb: 100,
        };
        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json["os_name"], "Linux");
        assert_eq!(json["cpu_benchmark_score"], 21000);
        assert_eq!(json["usable_memory_gb"], 15.5);
    }
}
