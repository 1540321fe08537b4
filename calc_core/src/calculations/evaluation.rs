//! # Section Evaluation Pipeline
//!
//! Runs the four calculation stages in order and assembles the result
//! record:
//!
//! ```text
//! RebarCatalog → section → stress → capacity → design → EvaluationReport
//! ```
//!
//! Each stage takes the immutable results of the stages before it, so there
//! is no hidden call-order dependency. The only shared state is the
//! read-only catalog.
//!
//! ## Request Format
//!
//! [`EvaluationRequest`] mirrors the flat JSON posted by a form front end.
//! Numeric fields accept either JSON numbers or numeric strings:
//!
//! ```json
//! {
//!   "width": 12, "height": 8, "cover": 1.5,
//!   "size": "#4", "spacing": 6,
//!   "f_c": 4, "steelGrade": "60", "concDensity": 150,
//!   "M_u": 8, "M_s": 6, "V_u": 5,
//!   "phi_m": 0.9, "phi_v": 0.9,
//!   "crackClass": 1
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::evaluation::{evaluate_request, EvaluationRequest};
//! use calc_core::materials::RebarCatalog;
//! use calc_core::settings::DesignSettings;
//!
//! let json = r##"{
//!     "width": 12, "height": 8, "cover": 1.5, "size": "#4", "spacing": 6,
//!     "f_c": 4, "steelGrade": "60", "concDensity": 150,
//!     "M_u": 8, "M_s": 6, "V_u": 5, "phi_m": 0.9, "phi_v": 0.9
//! }"##;
//! let request: EvaluationRequest = serde_json::from_str(json).unwrap();
//!
//! let evaluation = evaluate_request(&request, RebarCatalog::standard(), &DesignSettings::default()).unwrap();
//! let report = evaluation.report();
//! assert!(report.cracked);
//! assert_eq!(report.phi_mn, 10.7);
//! assert!(report.moment_capacity);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::calculations::capacity::{self, CapacityResult};
use crate::calculations::design::{self, DesignLoads, DesignResult, ExposureClass};
use crate::calculations::section::{self, BeamSection, SectionProperties};
use crate::calculations::stress::{self, StressState};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{Concrete, RebarCatalog, SteelGrade};
use crate::settings::DesignSettings;

/// A numeric request field sent either as a JSON number or as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    /// Resolve to a finite number, naming `field` in the error.
    pub fn value(&self, field: &str) -> CalcResult<f64> {
        let value = match self {
            Numeric::Number(v) => *v,
            Numeric::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                CalcError::invalid_input(field, s.as_str(), "Value is not a number")
            })?,
        };
        if !value.is_finite() {
            return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
        }
        Ok(value)
    }
}

impl From<f64> for Numeric {
    fn from(v: f64) -> Self {
        Numeric::Number(v)
    }
}

/// Crack-control exposure class as sent by a client (`1`, `"2"`, `"Class 1"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CrackClass {
    Code(u8),
    Text(String),
}

impl CrackClass {
    pub fn resolve(&self) -> CalcResult<ExposureClass> {
        match self {
            CrackClass::Code(code) => ExposureClass::from_code(*code).ok_or_else(|| {
                CalcError::invalid_input("crackClass", code.to_string(), "Exposure class must be 1 or 2")
            }),
            CrackClass::Text(text) => text.parse(),
        }
    }
}

/// Flat evaluation request (units: in, ksi, pcf, k-ft, kips)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub width: Numeric,
    pub height: Numeric,
    pub cover: Numeric,
    #[serde(rename = "size", alias = "bar_size")]
    pub bar_size: String,
    pub spacing: Numeric,
    pub f_c: Numeric,
    /// Steel grade label; takes precedence over `f_y` when both are present
    #[serde(rename = "steelGrade", alias = "steel_grade", default, skip_serializing_if = "Option::is_none")]
    pub steel_grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f_y: Option<Numeric>,
    #[serde(rename = "concDensity", alias = "concrete_density")]
    pub conc_density: Numeric,
    #[serde(rename = "M_u")]
    pub m_u: Numeric,
    #[serde(rename = "M_s")]
    pub m_s: Numeric,
    #[serde(rename = "V_u")]
    pub v_u: Numeric,
    pub phi_m: Numeric,
    pub phi_v: Numeric,
    #[serde(rename = "E_s", default, skip_serializing_if = "Option::is_none")]
    pub e_s: Option<Numeric>,
    #[serde(rename = "crackClass", default, skip_serializing_if = "Option::is_none")]
    pub crack_class: Option<CrackClass>,
    #[serde(rename = "transverseSize", default, skip_serializing_if = "Option::is_none")]
    pub transverse_size: Option<String>,
    #[serde(rename = "edgeOffset", default, skip_serializing_if = "Option::is_none")]
    pub edge_offset: Option<Numeric>,
}

/// Typed inputs resolved from a request
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInputs {
    pub section: BeamSection,
    pub grade: SteelGrade,
    pub loads: DesignLoads,
    pub exposure: ExposureClass,
}

impl EvaluationRequest {
    /// Parse numeric fields and resolve the steel grade and defaults.
    pub fn resolve(&self, catalog: &RebarCatalog, settings: &DesignSettings) -> CalcResult<ResolvedInputs> {
        let grade = match (&self.steel_grade, &self.f_y) {
            (Some(label), _) if !label.trim().is_empty() => catalog.lookup_grade(label)?.clone(),
            (_, Some(f_y)) => SteelGrade::from_yield(f_y.value("f_y")?),
            _ => return Err(CalcError::missing_field("steelGrade or f_y")),
        };

        let section = BeamSection {
            width_in: self.width.value("width")?,
            height_in: self.height.value("height")?,
            cover_in: self.cover.value("cover")?,
            spacing_in: self.spacing.value("spacing")?,
            bar_size: self.bar_size.clone(),
            transverse_bar_size: self
                .transverse_size
                .clone()
                .or_else(|| settings.transverse_bar.clone()),
            edge_offset_in: match &self.edge_offset {
                Some(offset) => offset.value("edgeOffset")?,
                None => 0.0,
            },
            concrete: Concrete::new(self.f_c.value("f_c")?, self.conc_density.value("concDensity")?),
            e_s_ksi: match &self.e_s {
                Some(e_s) => e_s.value("E_s")?,
                None => settings.e_s_ksi,
            },
        };

        let loads = DesignLoads {
            m_u_kft: self.m_u.value("M_u")?,
            m_s_kft: self.m_s.value("M_s")?,
            v_u_kips: self.v_u.value("V_u")?,
            phi_m: self.phi_m.value("phi_m")?,
            phi_v: self.phi_v.value("phi_v")?,
        };

        let exposure = match &self.crack_class {
            Some(class) => class.resolve()?,
            None => settings.default_exposure,
        };

        Ok(ResolvedInputs {
            section,
            grade,
            loads,
            exposure,
        })
    }
}

/// Unrounded results of every pipeline stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub grade: SteelGrade,
    pub exposure: ExposureClass,
    pub section: SectionProperties,
    pub stress: StressState,
    pub capacity: CapacityResult,
    pub design: DesignResult,
}

/// Run the full pipeline on typed inputs.
#[instrument(skip_all, fields(bar = %section.bar_size, grade = %grade.grade_label))]
pub fn evaluate(
    section: &BeamSection,
    grade: &SteelGrade,
    loads: &DesignLoads,
    exposure: ExposureClass,
    catalog: &RebarCatalog,
    settings: &DesignSettings,
) -> CalcResult<Evaluation> {
    loads.validate()?;
    let props = section::calculate(section, catalog)?;
    let stress_state = stress::calculate(&props, loads.m_s_kft)?;
    let capacity_result = capacity::calculate(&props, grade, settings)?;
    let design_result = design::calculate(&props, &stress_state, &capacity_result, grade, loads, exposure, settings)?;

    debug!(passes = design_result.passes(), "evaluation complete");

    Ok(Evaluation {
        grade: grade.clone(),
        exposure,
        section: props,
        stress: stress_state,
        capacity: capacity_result,
        design: design_result,
    })
}

/// Resolve a flat request and run the full pipeline.
pub fn evaluate_request(
    request: &EvaluationRequest,
    catalog: &RebarCatalog,
    settings: &DesignSettings,
) -> CalcResult<Evaluation> {
    let inputs = request.resolve(catalog, settings)?;
    evaluate(&inputs.section, &inputs.grade, &inputs.loads, inputs.exposure, catalog, settings)
}

/// Result record at contracted precision
///
/// ## JSON Example
///
/// ```json
/// {
///   "weight": 0.1, "M_cr": 5.1, "steel_area": 0.4, "steel_area_per_ft": 0.4,
///   "cracked": true, "fConc": 1.358, "fSteel": 31.379,
///   "phiMn": 10.7, "epsilon_st": 0.0241, "phiVn": 8.1,
///   "A_ts": 0.11, "gamma_er": 0.75, "s_max": 12.43,
///   "moment_capacity": true, "shear_capacity": true, "min_reinf": true,
///   "crack_control": true, "ductility": true, "dist_reinf": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Self-weight (k/ft, 2 dp)
    pub weight: f64,
    /// Cracking moment (k-ft, 1 dp)
    #[serde(rename = "M_cr")]
    pub m_cr: f64,
    /// Total tension steel (in², 3 dp)
    pub steel_area: f64,
    /// Tension steel per foot (in²/ft, 3 dp)
    pub steel_area_per_ft: f64,
    pub cracked: bool,
    /// Concrete service stress (ksi, 3 dp)
    #[serde(rename = "fConc")]
    pub f_conc: f64,
    /// Steel service stress (ksi, 3 dp)
    #[serde(rename = "fSteel")]
    pub f_steel: f64,
    /// Factored moment resistance (k-ft, 1 dp)
    #[serde(rename = "phiMn")]
    pub phi_mn: f64,
    /// Net tensile strain (4 dp)
    pub epsilon_st: f64,
    /// Factored shear resistance (kips, 1 dp)
    #[serde(rename = "phiVn")]
    pub phi_vn: f64,
    /// Distribution reinforcement (in²/ft, 2 dp)
    #[serde(rename = "A_ts")]
    pub a_ts: f64,
    /// Excess reinforcement factor (2 dp)
    pub gamma_er: f64,
    /// Crack-control spacing limit (in, 2 dp)
    pub s_max: Option<f64>,
    pub moment_capacity: bool,
    pub shear_capacity: bool,
    pub min_reinf: bool,
    pub crack_control: bool,
    pub ductility: bool,
    pub dist_reinf: bool,
}

/// Round to `decimals` places, ties to even (0.125 -> 0.12).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

impl Evaluation {
    /// Build the rounded result record.
    pub fn report(&self) -> EvaluationReport {
        let checks = &self.design.checks;
        EvaluationReport {
            weight: round_to(self.section.w_dl_klf, 2),
            m_cr: round_to(self.section.m_cr_kft, 1),
            steel_area: round_to(self.section.a_s_in2, 3),
            steel_area_per_ft: round_to(self.section.a_s_per_ft_in2, 3),
            cracked: self.stress.is_cracked(),
            f_conc: round_to(self.stress.f_conc_ksi, 3),
            f_steel: round_to(self.stress.f_steel_ksi, 3),
            phi_mn: round_to(self.design.phi_m_n_kft, 1),
            epsilon_st: round_to(self.capacity.epsilon_t, 4),
            phi_vn: round_to(self.design.phi_v_n_kips, 1),
            a_ts: round_to(self.design.a_ts_in2_per_ft, 2),
            gamma_er: round_to(self.design.gamma_er, 2),
            s_max: self.design.s_max_in.map(|s| round_to(s, 2)),
            moment_capacity: checks.moment_capacity,
            shear_capacity: checks.shear_capacity,
            min_reinf: checks.min_reinf,
            crack_control: checks.crack_control,
            ductility: checks.ductility,
            dist_reinf: checks.dist_reinf,
        }
    }
}
