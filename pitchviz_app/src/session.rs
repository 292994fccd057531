//! Operator session - the user-facing actions around the core.
//!
//! Mirrors the three buttons and two toggles of an add-on panel:
//! - **Import**: read a CSV into the session
//! - **Visualize**: run the batch against a scene host
//! - **Add Strike Zone**: drop the zone box into the scene
//!
//! Every action ends in an [`Outcome`] carrying the message shown to the user.
//! Conditions the user can fix (missing file, nothing imported) are
//! `Cancelled` outcomes, not errors; host failures still come back as `Err`.

use pitchviz_core::{
    add_strike_zone, import_csv, visualize_batch, BatchReport, PitchRecord, VisualizeOptions,
    VizError,
};
use pitchviz_env::SceneHost;
use std::path::Path;
use tracing::{info, warn};

pub const MSG_IMPORTED: &str = "Statcast Data Imported";
pub const MSG_FILE_NOT_FOUND: &str = "File not found";
pub const MSG_NO_DATA: &str = "No Statcast data found. Please import a CSV first.";
pub const MSG_STRIKE_ZONE: &str = "Strike Zone Created";

/// Result of an operator action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Action completed (info report)
    Finished(String),
    /// Action aborted without changing anything (error report)
    Cancelled(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Finished(msg) | Outcome::Cancelled(msg) => msg,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Outcome::Finished(_))
    }
}

/// Imported data plus the panel toggles.
#[derive(Debug, Default)]
pub struct Session {
    records: Option<Vec<PitchRecord>>,

    /// Grouping/material toggles and sample count
    pub options: VisualizeOptions,

    last_report: Option<BatchReport>,
}

impl Session {
    /// Creates an empty session with both toggles off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session with the given options.
    pub fn with_options(options: VisualizeOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Imported records, if any.
    pub fn records(&self) -> Option<&[PitchRecord]> {
        self.records.as_deref()
    }

    pub fn record_count(&self) -> usize {
        self.records.as_ref().map_or(0, Vec::len)
    }

    /// Report of the most recent visualize action.
    pub fn last_report(&self) -> Option<&BatchReport> {
        self.last_report.as_ref()
    }

    pub fn set_group_by_at_bat(&mut self, enabled: bool) {
        self.options.group_by_at_bat = enabled;
    }

    pub fn set_assign_materials(&mut self, enabled: bool) {
        self.options.assign_materials = enabled;
    }

    /// Imports a CSV file, replacing previously imported records on success.
    ///
    /// On any failure the session keeps whatever it held before.
    pub fn import(&mut self, path: impl AsRef<Path>) -> Outcome {
        let path = path.as_ref();
        match import_csv(path) {
            Ok(records) => {
                info!("Imported {} records from {}", records.len(), path.display());
                self.records = Some(records);
                Outcome::Finished(MSG_IMPORTED.to_string())
            }
            Err(VizError::MissingInput(_)) => {
                warn!("Import failed, no such file: {}", path.display());
                Outcome::Cancelled(MSG_FILE_NOT_FOUND.to_string())
            }
            Err(e) => {
                warn!("Import failed for {}: {}", path.display(), e);
                Outcome::Cancelled(format!("Could not read {}: {}", path.display(), e))
            }
        }
    }

    /// Visualizes every imported record into `host`.
    pub fn visualize<H: SceneHost>(&mut self, host: &mut H) -> Result<Outcome, VizError> {
        let records = match self.records.as_deref() {
            Some(records) if !records.is_empty() => records,
            _ => return Ok(Outcome::Cancelled(MSG_NO_DATA.to_string())),
        };

        let report = visualize_batch(host, records, &self.options)?;
        let mut message = format!("Visualized {} pitches.", report.visualized_count());
        if report.skipped_count() > 0 {
            message.push_str(&format!(
                " Skipped {} records with invalid fields.",
                report.skipped_count()
            ));
        }
        self.last_report = Some(report);
        Ok(Outcome::Finished(message))
    }

    /// Adds the strike zone box to `host`.
    pub fn add_strike_zone<H: SceneHost>(&self, host: &mut H) -> Result<Outcome, VizError> {
        add_strike_zone(host)?;
        Ok(Outcome::Finished(MSG_STRIKE_ZONE.to_string()))
    }
}
