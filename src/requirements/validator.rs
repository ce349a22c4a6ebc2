//! Comparing current properties against requirement rows.
//!
//! Each row is checked dimension by dimension and stops at the first failing
//! one. The verdict is the conjunction over all rows and carries no detail
//! about which dimension failed.

use regex::Regex;
use std::sync::LazyLock;

use crate::system::{OsName, SystemProperties};

use super::row::RequirementRow;

/// Everything that is not a digit.
static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]+").expect("NON_DIGITS must compile"));

/// Everything except digits, `-` and `.`.
static NON_VERSION_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.\-]+").expect("NON_VERSION_CHARS must compile"));

/// Outcome of validating one machine against its applicable rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationVerdict {
    pub satisfied: bool,
    pub applied_requirements: Vec<RequirementRow>,
}

impl ValidationVerdict {
    /// Validate `current` against every row in `requirements`.
    pub fn evaluate(current: &SystemProperties, requirements: Vec<RequirementRow>) -> Self {
        let satisfied = validate(current, &requirements);
        Self {
            satisfied,
            applied_requirements: requirements,
        }
    }

    /// Sheet text for the verdict cell.
    pub fn as_cell(&self) -> &'static str {
        if self.satisfied {
            "Yes"
        } else {
            "No"
        }
    }
}

/// `true` only if every row is satisfied.
pub fn validate(current: &SystemProperties, requirements: &[RequirementRow]) -> bool {
    requirements.iter().all(|row| {
        let ok = row_satisfied(current, row);
        tracing::debug!(project = %row.project_name, satisfied = ok, "Checked requirement row");
        ok
    })
}

/// Check one row in order: OS, CPU score, memory, storage, free storage, architecture.
pub fn row_satisfied(current: &SystemProperties, row: &RequirementRow) -> bool {
    os_satisfied(current.os_name, &current.os_edition, row)
        && current.cpu_benchmark_score >= row.min_cpu_score
        && current.usable_memory_gb >= row.min_memory_gb
        && current.total_storage_gb >= row.min_storage_gb
        && current.free_storage_gb >= row.min_free_storage_gb
        && current
            .architecture
            .contains(row.required_architecture.as_str())
}

/// The OS version a row demands for `os`, if it names one.
///
/// Picks the first `&`-separated segment that mentions the OS and keeps its
/// digits.
pub fn expected_os_version(row: &RequirementRow, os: OsName) -> Option<i64> {
    let segment = row
        .os_variants()
        .find(|segment| os.match_labels().iter().any(|label| segment.contains(label)))?;
    NON_DIGITS.replace_all(segment, "").parse().ok()
}

/// Major version of the running OS, from its edition string.
///
/// `Microsoft Windows 10.0.19045` gives 10, `macOS 14.2.1 Sonoma` gives 14.
pub fn current_os_version(edition: &str) -> Option<i64> {
    let stripped = NON_VERSION_CHARS.replace_all(edition, "");
    stripped.split('.').next()?.parse().ok()
}

fn os_satisfied(os: OsName, edition: &str, row: &RequirementRow) -> bool {
    // A row that does not name this OS, or a version that cannot be read,
    // fails the row.
    match (current_os_version(edition), expected_os_version(row, os)) {
        (Some(current), Some(expected)) => current >= expected,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn machine() -> SystemProperties {
        SystemProperties {
            os_name: OsName::Windows,
            os_edition: "10.0.19045".to_string(),
            architecture: "X64".to_string(),
            cpu_model: "Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz".to_string(),
            cpu_benchmark_score: 6300,
            usable_memory_gb: 15.87,
            total_storage_gb: 476,
            free_storage_gb: 120,
        }
    }

    fn row(project: &str) -> RequirementRow {
        RequirementRow {
            project_name: project.to_string(),
            required_os: "Windows10&MacOS11&Ubuntu20".to_string(),
            min_cpu_score: 6000,
            min_memory_gb: 8.0,
            min_storage_gb: 256,
            min_free_storage_gb: 50,
            required_architecture: "64".to_string(),
        }
    }

    #[test]
    fn all_checks_pass() {
        assert!(validate(&machine(), &[row("Alpha")]));
    }

    #[test]
    fn windows_edition_version_matches_required() {
        assert_eq!(current_os_version("10.0.19045"), Some(10));
        assert_eq!(expected_os_version(&row("Alpha"), OsName::Windows), Some(10));
        assert!(row_satisfied(&machine(), &row("Alpha")));
    }

    #[test]
    fn edition_strings_from_each_platform() {
        assert_eq!(current_os_version("Microsoft Windows 10.0.19045"), Some(10));
        assert_eq!(current_os_version("macOS 14.2.1 Sonoma"), Some(14));
        assert_eq!(current_os_version("Linux (Ubuntu 22.04)"), Some(22));
        assert_eq!(current_os_version("Linux (Ubuntu 24.04)"), Some(24));
        assert_eq!(current_os_version("Windows 11 Pro"), Some(11));
        assert_eq!(current_os_version("Arch Linux rolling"), None);
    }

    #[test]
    fn memory_below_minimum_fails() {
        let mut current = machine();
        current.usable_memory_gb = 7.5;
        assert!(!validate(&current, &[row("Alpha")]));
    }

    #[test]
    fn second_row_failing_storage_fails_verdict() {
        let mut strict = row("Beta");
        strict.min_storage_gb = 1024;
        assert!(row_satisfied(&machine(), &row("Alpha")));
        assert!(!validate(&machine(), &[row("Alpha"), strict]));
    }

    #[test]
    fn older_os_fails() {
        let mut current = machine();
        current.os_edition = "Microsoft Windows 6.1.7601".to_string();
        assert!(!validate(&current, &[row("Alpha")]));
    }

    #[test]
    fn os_missing_from_row_fails_without_panicking() {
        let mut windows_only = row("Alpha");
        windows_only.required_os = "Windows10".to_string();
        let mut current = machine();
        current.os_name = OsName::MacOS;
        current.os_edition = "macOS 14.2.1 Sonoma".to_string();
        assert_eq!(expected_os_version(&windows_only, OsName::MacOS), None);
        assert!(!validate(&current, &[windows_only]));
    }

    #[test]
    fn os_segment_without_version_fails() {
        let mut r = row("Alpha");
        r.required_os = "Windows".to_string();
        assert!(!validate(&machine(), &[r]));
    }

    #[test]
    fn linux_matches_ubuntu_segment() {
        let mut current = machine();
        current.os_name = OsName::Linux;
        current.os_edition = "Linux (Ubuntu 22.04)".to_string();
        assert_eq!(expected_os_version(&row("Alpha"), OsName::Linux), Some(20));
        assert!(validate(&current, &[row("Alpha")]));
    }

    #[test]
    fn cpu_score_below_minimum_fails() {
        let mut current = machine();
        current.cpu_benchmark_score = 5999;
        assert!(!validate(&current, &[row("Alpha")]));
    }

    #[test]
    fn free_storage_below_minimum_fails() {
        let mut current = machine();
        current.free_storage_gb = 49;
        assert!(!validate(&current, &[row("Alpha")]));
    }

    #[test]
    fn architecture_must_contain_required_substring() {
        let mut r = row("Alpha");
        r.required_architecture = "Arm".to_string();
        assert!(!validate(&machine(), &[r.clone()]));
        r.required_architecture = String::new();
        assert!(validate(&machine(), &[r]));
    }

    #[test]
    fn verdict_keeps_applied_rows_and_cell_text() {
        let verdict = ValidationVerdict::evaluate(&machine(), vec![row("Alpha")]);
        assert!(verdict.satisfied);
        assert_eq!(verdict.applied_requirements.len(), 1);
        assert_eq!(verdict.as_cell(), "Yes");

        let mut current = machine();
        current.usable_memory_gb = 4.0;
        let verdict = ValidationVerdict::evaluate(&current, vec![row("Alpha")]);
        assert_eq!(verdict.as_cell(), "No");
    }

    proptest! {
        #[test]
        fn raising_any_dimension_never_breaks_a_pass(
            extra_score in 0i64..100_000,
            extra_memory in 0.0f64..512.0,
            extra_storage in 0i64..10_000,
            extra_free in 0i64..10_000,
            dimension in 0usize..4,
        ) {
            let rows = [row("Alpha")];
            let base = machine();
            prop_assume!(validate(&base, &rows));

            let mut raised = base.clone();
            match dimension {
                0 => raised.cpu_benchmark_score += extra_score,
                1 => raised.usable_memory_gb += extra_memory,
                2 => raised.total_storage_gb += extra_storage,
                _ => raised.free_storage_gb += extra_free,
            }
            prop_assert!(validate(&raised, &rows));
        }

        #[test]
        fn verdict_is_monotonic_for_arbitrary_thresholds(
            min_score in 0i64..20_000,
            min_memory in 0.0f64..64.0,
            bump in 0i64..5_000,
        ) {
            let mut r = row("Alpha");
            r.min_cpu_score = min_score;
            r.min_memory_gb = min_memory;
            let rows = [r];
            let base = machine();
            let mut raised = base.clone();
            raised.cpu_benchmark_score += bump;
            raised.usable_memory_gb += bump as f64;
            prop_assert!(!validate(&base, &rows) || validate(&raised, &rows));
        }
    }
}
