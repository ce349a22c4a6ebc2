//! Building [`SystemProperties`] from a probe and the benchmark table.

use crate::benchmark::BenchmarkTable;
use crate::error::{Result, RigcheckError};

use super::probe::{HostProbe, Volume};
use super::properties::SystemProperties;

const BYTES_PER_KIB: u64 = 1024;

/// Convert bytes to whole GiB, truncating.
pub fn bytes_to_whole_gib(bytes: u64) -> i64 {
    (bytes / BYTES_PER_KIB / BYTES_PER_KIB / BYTES_PER_KIB) as i64
}

/// Convert bytes to GiB rounded to two decimals.
pub fn bytes_to_gib_rounded(bytes: u64) -> f64 {
    let gib = bytes as f64 / (BYTES_PER_KIB * BYTES_PER_KIB * BYTES_PER_KIB) as f64;
    (gib * 100.0).round() / 100.0
}

/// Sum capacity and free space over ready volumes, in bytes.
///
/// Totals are summed in bytes and converted once, so the GiB figures are
/// truncated a single time.
pub fn storage_totals(volumes: &[Volume]) -> (u64, u64) {
    volumes
        .iter()
        .filter(|v| v.is_ready())
        .fold((0u64, 0u64), |(total, free), v| {
            (
                total.saturating_add(v.total_bytes),
                free.saturating_add(v.available_bytes),
            )
        })
}

/// Collect the current host's properties.
///
/// Fails with [`RigcheckError::UnsupportedPlatform`] before any other query
/// when the OS is not supported, and with
/// [`RigcheckError::UnknownCpuBenchmark`] when the CPU has no score.
pub fn collect(probe: &dyn HostProbe, benchmarks: &BenchmarkTable) -> Result<SystemProperties> {
    let os_name = probe
        .os_name()
        .ok_or_else(|| RigcheckError::UnsupportedPlatform {
            os: probe.os_identifier(),
        })?;

    let volumes = probe.volumes();
    let (total_bytes, free_bytes) = storage_totals(&volumes);

    let cpu_model = probe.cpu_model();
    let cpu_benchmark_score = benchmarks.score_for(&cpu_model)?;

    let properties = SystemProperties {
        os_name,
        os_edition: probe.os_edition(),
        architecture: probe.architecture(),
        cpu_model,
        cpu_benchmark_score,
        usable_memory_gb: bytes_to_gib_rounded(probe.total_memory_bytes()),
        total_storage_gb: bytes_to_whole_gib(total_bytes),
        free_storage_gb: bytes_to_whole_gib(free_bytes),
    };

    tracing::info!(
        os = %properties.os_name,
        cpu = %properties.cpu_model,
        score = properties.cpu_benchmark_score,
        memory_gb = properties.usable_memory_gb,
        "Collected system properties"
    );

    Ok(properties)
}
