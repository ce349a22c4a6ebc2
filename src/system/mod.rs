//! Property collection for the current machine.
//!
//! # Modules
//!
//! - [`properties`] - The [`SystemProperties`] value and [`OsName`]
//! - [`probe`] - Raw host queries behind the [`HostProbe`] trait
//! - [`collector`] - Assembling properties from a probe and the benchmark table

pub mod collector;
pub mod probe;
pub mod properties;

pub use collector::{bytes_to_gib_rounded, bytes_to_whole_gib, collect, storage_totals};
pub use probe::{architecture_label, HostProbe, SysinfoProbe, Volume};
pub use properties::{OsName, SystemProperties};
