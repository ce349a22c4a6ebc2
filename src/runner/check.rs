//! The machine check: collect, fetch, resolve, validate, format, write.

use crate::benchmark::BenchmarkTable;
use crate::config::RigcheckConfig;
use crate::error::{Result, RigcheckError};
use crate::report::format_report;
use crate::requirements::{IdentityTable, RequirementResolver, RequirementTable, ValidationVerdict};
use crate::sheets::SheetStore;
use crate::system::{self, HostProbe, SystemProperties};

/// Options for one check run.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Evaluate everything but write nothing.
    pub dry_run: bool,
}

/// Result of a completed check.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Identity key the check ran for (trimmed).
    pub identity: String,
    pub properties: SystemProperties,
    pub verdict: ValidationVerdict,
    pub report: String,
    /// One-based sheet row the verdict belongs to.
    pub sheet_row: usize,
    pub verdict_cell: String,
    pub report_cell: String,
    /// Whether the cells were written to the store.
    pub written: bool,
}

/// Fetch and parse the benchmark table.
pub fn load_benchmarks(store: &dyn SheetStore, config: &RigcheckConfig) -> Result<BenchmarkTable> {
    let table = &config.tables.benchmarks;
    let rows = store.fetch_rows(&table.range, table.orientation)?;
    BenchmarkTable::from_rows(&rows, config.benchmark_match)
}

/// Fetch and parse the identity membership table.
pub fn load_identities(store: &dyn SheetStore, config: &RigcheckConfig) -> Result<IdentityTable> {
    let table = &config.tables.identities;
    let rows = store.fetch_rows(&table.range, table.orientation)?;
    Ok(IdentityTable::from_rows(rows, &config.identity_columns))
}

/// Fetch and parse the requirement table.
pub fn load_requirements(
    store: &dyn SheetStore,
    config: &RigcheckConfig,
) -> Result<RequirementTable> {
    let table = &config.tables.requirements;
    let lines = store.fetch_rows(&table.range, table.orientation)?;
    RequirementTable::from_lines(&lines)
}

/// Runs the check against one store and host.
pub struct CheckRun<'a> {
    config: &'a RigcheckConfig,
    probe: &'a dyn HostProbe,
}

impl<'a> CheckRun<'a> {
    pub fn new(config: &'a RigcheckConfig, probe: &'a dyn HostProbe) -> Self {
        Self { config, probe }
    }

    /// Collect this machine's properties (needs the benchmark table for the score).
    pub fn collect(&self, store: &dyn SheetStore) -> Result<SystemProperties> {
        let benchmarks = load_benchmarks(store, self.config)?;
        system::collect(self.probe, &benchmarks)
    }

    /// Resolve and validate `properties` for `identity`. Nothing is written.
    ///
    /// Fails with [`RigcheckError::IdentityNotFound`] before any comparison
    /// when the identity is blank or selects no requirement row.
    pub fn evaluate(
        &self,
        store: &dyn SheetStore,
        properties: SystemProperties,
        identity: &str,
    ) -> Result<CheckOutcome> {
        let identity = identity.trim();
        if identity.is_empty() {
            return Err(RigcheckError::IdentityNotFound {
                identity: String::new(),
            });
        }

        let identities = load_identities(store, self.config)?;
        let requirements = load_requirements(store, self.config)?;
        let resolver = RequirementResolver::new(&identities, &requirements);

        let rows = resolver.resolve(identity)?;
        let sheet_row = resolver.sheet_row(identity);
        tracing::debug!(identity, sheet_row, "Located identity row");

        let verdict = ValidationVerdict::evaluate(&properties, rows);
        let report = format_report(&properties);

        tracing::info!(
            identity,
            satisfied = verdict.satisfied,
            projects = verdict.applied_requirements.len(),
            "Validation finished"
        );

        Ok(CheckOutcome {
            identity: identity.to_string(),
            properties,
            verdict,
            report,
            sheet_row,
            verdict_cell: self.config.cells.verdict_at(sheet_row),
            report_cell: self.config.cells.report_at(sheet_row),
            written: false,
        })
    }

    /// Write the verdict then the report.
    pub fn record(&self, store: &mut dyn SheetStore, outcome: &mut CheckOutcome) -> Result<()> {
        store.write_cell(&outcome.verdict_cell, outcome.verdict.as_cell())?;
        store.write_cell(&outcome.report_cell, &outcome.report)?;
        outcome.written = true;

        tracing::info!(
            verdict = %outcome.verdict_cell,
            report = %outcome.report_cell,
            "Recorded check result"
        );
        Ok(())
    }

    /// Run every stage in order.
    pub fn execute(
        &self,
        store: &mut dyn SheetStore,
        identity: &str,
        options: &CheckOptions,
    ) -> Result<CheckOutcome> {
        let properties = self.collect(store)?;
        let mut outcome = self.evaluate(store, properties, identity)?;

        if options.dry_run {
            tracing::info!("Dry run, nothing written");
        } else {
            self.record(store, &mut outcome)?;
        }

        Ok(outcome)
    }
}
