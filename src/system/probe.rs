//! Host probing.
//!
//! A [`HostProbe`] answers the raw questions the collector needs: which OS
//! this is, what the CPU reports itself as, how much memory is installed and
//! which volumes are mounted. [`SysinfoProbe`] answers them for the live
//! host; tests substitute a fixed probe.

use std::path::PathBuf;
use sysinfo::{Disks, System};

use super::properties::OsName;

/// One mounted volume as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    pub mount_point: PathBuf,
    pub total_bytes: u64,
    pub available_bytes: u64,
}

impl Volume {
    /// A volume counts toward storage totals only once it reports a capacity.
    pub fn is_ready(&self) -> bool {
        self.total_bytes > 0
    }
}

/// Read-only view of host facts.
pub trait HostProbe {
    /// The supported OS family, or `None` if the host is none of them.
    fn os_name(&self) -> Option<OsName>;

    /// Identifier of the host OS for error messages (e.g. `freebsd`).
    fn os_identifier(&self) -> String {
        std::env::consts::OS.to_string()
    }

    /// Human-readable OS description including its version number.
    fn os_edition(&self) -> String;

    /// OS architecture label (`X64`, `Arm64`, ...).
    fn architecture(&self) -> String;

    /// CPU brand string.
    fn cpu_model(&self) -> String;

    /// Installed physical memory in bytes.
    fn total_memory_bytes(&self) -> u64;

    /// All mounted volumes.
    fn volumes(&self) -> Vec<Volume>;
}

/// Map a Rust target architecture to the label requirement sheets carry.
pub fn architecture_label(arch: &str) -> String {
    match arch {
        "x86_64" => "X64".to_string(),
        "x86" => "X86".to_string(),
        "aarch64" => "Arm64".to_string(),
        "arm" => "Arm".to_string(),
        other => other.to_string(),
    }
}

/// Probe backed by `sysinfo`, refreshed once at construction.
pub struct SysinfoProbe {
    system: System,
    disks: Disks,
}

impl SysinfoProbe {
    /// Query the live host.
    pub fn new() -> Self {
        let mut system = System::new_all();
        system.refresh_all();
        let disks = Disks::new_with_refreshed_list();

        tracing::debug!(
            cpus = system.cpus().len(),
            disks = disks.list().len(),
            "Probed host"
        );

        Self { system, disks }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HostProbe for SysinfoProbe {
    fn os_name(&self) -> Option<OsName> {
        OsName::current()
    }

    fn os_edition(&self) -> String {
        System::long_os_version().unwrap_or_else(|| {
            let name = System::name().unwrap_or_default();
            let version = System::os_version().unwrap_or_default();
            format!("{} {}", name, version).trim().to_string()
        })
    }

    fn architecture(&self) -> String {
        architecture_label(std::env::consts::ARCH)
    }

    fn cpu_model(&self) -> String {
        self.system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_default()
    }

    fn total_memory_bytes(&self) -> u64 {
        self.system.total_memory()
    }

    fn volumes(&self) -> Vec<Volume> {
        self.disks
            .list()
            .iter()
            .map(|disk| Volume {
                mount_point: disk.mount_point().to_path_buf(),
                total_bytes: disk.total_space(),
                available_bytes: disk.available_space(),
            })
            .collect()
    }
}
