//! # Load Study
//!
//! A `LoadStudy` groups the load cases run for one aircraft (different load
//! factors, weights, point-mass positions) with the settings they share.
//! Studies serialize to `.wlc` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! LoadStudy
//! ├── meta: StudyMetadata (version, engineer, aircraft, timestamps)
//! ├── settings: StudySettings (default distribution, engine options)
//! └── cases: HashMap<Uuid, LoadCaseInput>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use spanload_core::study::{LoadCaseInput, LoadStudy};
//! use spanload_core::calculations::WingParameters;
//!
//! let mut study = LoadStudy::new("Jane Engineer", "Aerobatic biplane");
//! let id = study.add_case(LoadCaseInput::new("+6g", WingParameters::default()));
//!
//! let result = study.run_case(&id).unwrap();
//! assert_eq!(result.summary.required_lift_lb, 4850.0);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{calculate, CalcOptions, CalculationResult, DistributionKind, WingParameters};
use crate::errors::{CalcError, CalcResult};

/// Current schema version for .wlc files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root study container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadStudy {
    /// Study metadata (version, engineer, aircraft)
    pub meta: StudyMetadata,

    /// Settings shared by every case
    pub settings: StudySettings,

    /// All load cases, keyed by UUID
    pub cases: HashMap<Uuid, LoadCaseInput>,
}

impl LoadStudy {
    /// Create a new empty study.
    pub fn new(engineer: impl Into<String>, aircraft: impl Into<String>) -> Self {
        let now = Utc::now();
        LoadStudy {
            meta: StudyMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                aircraft: aircraft.into(),
                created: now,
                modified: now,
            },
            settings: StudySettings::default(),
            cases: HashMap::new(),
        }
    }

    /// Add a load case. Returns the UUID assigned to it.
    pub fn add_case(&mut self, case: LoadCaseInput) -> Uuid {
        let id = Uuid::new_v4();
        self.cases.insert(id, case);
        self.touch();
        id
    }

    /// Remove a load case by UUID.
    pub fn remove_case(&mut self, id: &Uuid) -> Option<LoadCaseInput> {
        let case = self.cases.remove(id);
        if case.is_some() {
            self.touch();
        }
        case
    }

    /// Get a load case by UUID.
    pub fn get_case(&self, id: &Uuid) -> Option<&LoadCaseInput> {
        self.cases.get(id)
    }

    /// Number of load cases
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Run one case with the study settings.
    pub fn run_case(&self, id: &Uuid) -> CalcResult<CalculationResult> {
        let case = self.get_case(id).ok_or_else(|| {
            CalcError::invalid_input("case_id", id.to_string(), "No such load case in study")
        })?;
        case.run(&self.settings)
    }

    /// Run every case, ordered by label.
    ///
    /// Each case gets its own result or error; one failing case does not stop
    /// the others.
    pub fn run_all(&self) -> Vec<(String, CalcResult<CalculationResult>)> {
        let mut cases: Vec<&LoadCaseInput> = self.cases.values().collect();
        cases.sort_by(|a, b| a.label.cmp(&b.label));
        debug!("running {} load cases", cases.len());
        cases
            .into_iter()
            .map(|case| (case.label.clone(), case.run(&self.settings)))
            .collect()
    }
}

impl Default for LoadStudy {
    fn default() -> Self {
        LoadStudy::new("", "")
    }
}

/// Study metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Aircraft or wing designation
    pub aircraft: String,

    /// When the study was created
    pub created: DateTime<Utc>,

    /// When the study was last modified
    pub modified: DateTime<Utc>,
}

/// Settings shared by every case in a study.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudySettings {
    /// Shape used by cases that do not pick their own
    pub default_distribution: DistributionKind,

    /// Engine options
    pub options: CalcOptions,
}

/// One load case: wing parameters plus an optional shape override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCaseInput {
    /// User label (e.g., "+6g MTOW", "Gear down")
    pub label: String,

    /// Wing and loading
    pub parameters: WingParameters,

    /// Shape override; `None` uses the study default
    #[serde(default)]
    pub distribution: Option<DistributionKind>,
}

impl LoadCaseInput {
    /// Create a case that uses the study's default shape
    pub fn new(label: impl Into<String>, parameters: WingParameters) -> Self {
        LoadCaseInput {
            label: label.into(),
            parameters,
            distribution: None,
        }
    }

    /// Pick a shape for this case (builder pattern)
    pub fn with_distribution(mut self, kind: DistributionKind) -> Self {
        self.distribution = Some(kind);
        self
    }

    /// Run this case with the given settings.
    pub fn run(&self, settings: &StudySettings) -> CalcResult<CalculationResult> {
        let kind = self.distribution.unwrap_or(settings.default_distribution);
        calculate(&self.parameters, kind, &settings.options)
    }
}
