//! The once-built, immutable pipeline context.
//!
//! `PipelineContext::load` runs the whole load → resolve → normalize →
//! reconcile → categorize sequence exactly once, synchronously, before any
//! request is served. The result is an explicitly constructed value the
//! caller passes by reference into every aggregation call — never a hidden
//! singleton. There is no refresh path; restarting the process is the only
//! way to pick up new source data. Aggregation requests are pure functions
//! of this context plus the filter, so concurrent use needs no locking.

use std::path::Path;

use serde::Serialize;

use crate::aggregate::{AggregateSet, DepartmentFilter, aggregate};
use crate::config::LoaderConfig;
use crate::geo::{self, GeometryStatus};
use crate::loader::load_table_or_empty;
use crate::models::ReconciledRecord;
use crate::reconcile::reconcile;
use crate::source::{causes, divisions, mortality};
use crate::source::{CauseColumns, DivisionColumns, MortalityColumns};

/// One aggregation request's complete answer: the eight views plus the
/// geometry diagnostic the presentation layer shows when the map cannot be
/// drawn. This is the sole boundary between the core and the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// The eight aggregate tables
    pub aggregates: AggregateSet,
    /// Present when the boundary geometry is missing or unusable
    pub geometry_note: Option<String>,
}

/// Process-wide read-only state: the reconciled record set and the geometry
/// probe outcome
#[derive(Debug)]
pub struct PipelineContext {
    records: Vec<ReconciledRecord>,
    geometry: GeometryStatus,
}

impl PipelineContext {
    /// Run the full pipeline over a data directory
    ///
    /// Never fails: missing or malformed sources degrade to sentinel-labeled
    /// records or, at worst, an empty record set, with diagnostics logged
    /// along the way.
    #[must_use]
    pub fn load(data_dir: &Path, config: &LoaderConfig) -> Self {
        let mortality_table = load_table_or_empty(&data_dir.join(mortality::FILE_NAME), config);
        let division_table = load_table_or_empty(&data_dir.join(divisions::FILE_NAME), config);
        let cause_table = load_table_or_empty(&data_dir.join(causes::FILE_NAME), config);

        let mortality_cols = MortalityColumns::resolve(&mortality_table);
        let division_cols = DivisionColumns::resolve(&division_table);
        let cause_cols = CauseColumns::resolve(&cause_table);

        let records = reconcile(
            &mortality_table,
            &division_table,
            &cause_table,
            &mortality_cols,
            &division_cols,
            &cause_cols,
        );

        let geometry = geo::probe(&data_dir.join(geo::FILE_NAME));

        Self { records, geometry }
    }

    /// Build a context from an already-reconciled record set
    #[must_use]
    pub fn from_records(records: Vec<ReconciledRecord>, geometry: GeometryStatus) -> Self {
        Self { records, geometry }
    }

    /// The reconciled record set
    #[must_use]
    pub fn records(&self) -> &[ReconciledRecord] {
        &self.records
    }

    /// Outcome of the boundary-geometry probe
    #[must_use]
    pub fn geometry(&self) -> &GeometryStatus {
        &self.geometry
    }

    /// Recompute the eight aggregate views under a filter
    #[must_use]
    pub fn aggregate(&self, filter: &DepartmentFilter) -> AggregateSet {
        aggregate(&self.records, filter)
    }

    /// Answer one aggregation request
    #[must_use]
    pub fn view(&self, filter: &DepartmentFilter) -> DashboardView {
        DashboardView {
            aggregates: self.aggregate(filter),
            geometry_note: self.geometry.diagnostic().map(str::to_string),
        }
    }

    /// Sorted, distinct department names for the filter dropdown
    #[must_use]
    pub fn department_options(&self) -> Vec<String> {
        let mut options: Vec<String> = self
            .records
            .iter()
            .map(|r| r.department.clone())
            .collect();
        options.sort();
        options.dedup();
        options
    }
}
