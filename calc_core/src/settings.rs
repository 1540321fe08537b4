//! # Design Settings
//!
//! Load/strain factors and the shear density-factor variant used by every
//! evaluation, plus defaults that [`EvaluationRequest::resolve`] fills in when
//! a request omits them: steel modulus, transverse bar and crack-control
//! exposure class. Typed calls to `evaluate` take those three from the
//! `BeamSection` and exposure arguments instead.
//!
//! [`EvaluationRequest::resolve`]: crate::calculations::EvaluationRequest::resolve
//!
//! Settings serialize to JSON. Missing fields fall back to their defaults,
//! so a settings file only needs the values it changes:
//!
//! ```json
//! { "gamma_1": 1.2, "default_exposure": "Class2" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculations::design::ExposureClass;
use crate::errors::{require_positive, CalcError, CalcResult};

/// Default steel modulus of elasticity (ksi)
pub const DEFAULT_E_S_KSI: f64 = 29000.0;

/// How the shear density modification factor λ is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LambdaMode {
    /// λ = clamp(7.5·w_c/1000, 0.75, 1.0)
    #[default]
    DensityBased,
    /// λ = 1.0 regardless of unit weight
    Unity,
}

/// Global defaults for concrete section evaluations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Steel modulus of elasticity E_s (ksi)
    pub e_s_ksi: f64,

    /// Flexural cracking variability factor γ1
    ///
    /// 1.2 for precast segmental structures, 1.6 for all others.
    pub gamma_1: f64,

    /// Ultimate concrete compressive strain ε_cu
    pub epsilon_cu: f64,

    /// Shear density modification factor variant
    pub lambda_mode: LambdaMode,

    /// Exposure class used when a request does not name one
    pub default_exposure: ExposureClass,

    /// Transverse bar (stirrup/tie) size enclosing the main bars, if any
    pub transverse_bar: Option<String>,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            e_s_ksi: DEFAULT_E_S_KSI,
            gamma_1: 1.6,
            epsilon_cu: 0.003,
            lambda_mode: LambdaMode::DensityBased,
            default_exposure: ExposureClass::Class1,
            transverse_bar: None,
        }
    }
}

impl DesignSettings {
    /// Validate the numeric settings.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("e_s_ksi", self.e_s_ksi)?;
        require_positive("gamma_1", self.gamma_1)?;
        require_positive("epsilon_cu", self.epsilon_cu)?;
        Ok(())
    }

    /// Parse settings from a JSON string.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: DesignSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            CalcError::serialization(format!("Failed to read settings '{}': {}", path.display(), e))
        })?;
        let settings = Self::from_json(&json)?;
        info!(path = %path.display(), "loaded design settings");
        Ok(settings)
    }
}
