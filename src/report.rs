//! Human-readable summary of the collected properties.

use crate::system::SystemProperties;

/// Render properties as the fixed seven-line block stored next to the verdict.
///
/// # Example
///
/// ```
/// use rigcheck::report::format_report;
/// use rigcheck::system::{OsName, SystemProperties};
///
/// let props = SystemProperties {
///     os_name: OsName::Windows,
///     os_edition: "Windows 10 Pro".into(),
///     architecture: "X64".into(),
///     cpu_model: "Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz".into(),
///     cpu_benchmark_score: 6300,
///     usable_memory_gb: 16.0,
///     total_storage_gb: 476,
///     free_storage_gb: 120,
/// };
/// let report = format_report(&props);
/// assert!(report.starts_with(" - CPU : Intel(R) Core(TM) i7-8650U"));
/// assert!(report.ends_with(" - Architecture : X64"));
/// ```
pub fn format_report(props: &SystemProperties) -> String {
    [
        format!(" - CPU : {}", props.cpu_model),
        format!(" - CPU Score : {}", props.cpu_benchmark_score),
        format!(" - Memory : {}G", props.usable_memory_gb),
        format!(" - OS : {}", props.os_edition),
        format!(" - Storage : {}G", props.total_storage_gb),
        format!(" - Free disk space : {}G", props.free_storage_gb),
        format!(" - Architecture : {}", props.architecture),
    ]
    .join("\n")
}
