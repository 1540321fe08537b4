//! # Design Checks
//!
//! Final pipeline stage. Applies resistance factors and evaluates the six
//! AASHTO LRFD checks for a singly reinforced section:
//!
//! | Check            | Passes when                        |
//! |------------------|------------------------------------|
//! | moment_capacity  | φM_n ≥ M_u                         |
//! | shear_capacity   | φV_n ≥ V_u                         |
//! | min_reinf        | φM_n ≥ M_min                       |
//! | crack_control    | s_max governs and s ≤ s_max, or no limit governs |
//! | ductility        | ε_t > ε_tl                         |
//! | dist_reinf       | A_s/ft ≥ A_ts                      |
//!
//! Every check is evaluated and reported; a failing check never hides the
//! others.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::capacity::CapacityResult;
use crate::calculations::section::SectionProperties;
use crate::calculations::stress::StressState;
use crate::equations::lrfd::{
    crack_control_spacing, crack_strain_ratio, demand_ratio, distribution_reinforcement,
    excess_reinforcement_ratio, minimum_reinforcement_moment, tension_controlled_strain_limit,
};
use crate::equations::section::flexural_stress_ksi;
use crate::errors::{require_non_negative, CalcError, CalcResult};
use crate::materials::SteelGrade;
use crate::settings::DesignSettings;

/// Crack-control exposure condition (AASHTO LRFD 5.6.7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExposureClass {
    /// Class 1: cracks tolerable for appearance and corrosion (γ_e = 1.00)
    #[default]
    Class1,
    /// Class 2: water-retaining or corrosive exposure (γ_e = 0.75)
    Class2,
}

impl ExposureClass {
    /// Exposure factor γ_e
    pub fn gamma_e(&self) -> f64 {
        match self {
            ExposureClass::Class1 => 1.00,
            ExposureClass::Class2 => 0.75,
        }
    }

    /// Map a numeric class code (1 or 2)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(ExposureClass::Class1),
            2 => Some(ExposureClass::Class2),
            _ => None,
        }
    }
}

impl FromStr for ExposureClass {
    type Err = CalcError;

    /// Accepts "1", "Class 1", "class1" (and likewise for 2).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let code = lower.strip_prefix("class").unwrap_or(&lower).trim();
        code.parse::<u8>()
            .ok()
            .and_then(ExposureClass::from_code)
            .ok_or_else(|| CalcError::invalid_input("crack_class", s, "Exposure class must be 1 or 2"))
    }
}

impl fmt::Display for ExposureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExposureClass::Class1 => write!(f, "Class 1"),
            ExposureClass::Class2 => write!(f, "Class 2"),
        }
    }
}

/// Factored and service demands with resistance factors
///
/// ## JSON Example
///
/// ```json
/// { "m_u_kft": 8.0, "m_s_kft": 6.0, "v_u_kips": 5.0, "phi_m": 0.9, "phi_v": 0.9 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignLoads {
    /// Factored moment M_u (k-ft)
    pub m_u_kft: f64,
    /// Service moment M_s (k-ft)
    pub m_s_kft: f64,
    /// Factored shear V_u (kips)
    pub v_u_kips: f64,
    /// Flexural resistance factor φ
    pub phi_m: f64,
    /// Shear resistance factor φ
    pub phi_v: f64,
}

impl DesignLoads {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("m_u_kft", self.m_u_kft)?;
        require_non_negative("m_s_kft", self.m_s_kft)?;
        require_non_negative("v_u_kips", self.v_u_kips)?;
        for (field, phi) in [("phi_m", self.phi_m), ("phi_v", self.phi_v)] {
            if !(phi > 0.0 && phi <= 1.0) {
                return Err(CalcError::invalid_input(
                    field,
                    phi.to_string(),
                    "Resistance factor must be greater than 0 and at most 1",
                ));
            }
        }
        Ok(())
    }
}

/// Pass/fail outcome of each design check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignChecks {
    pub moment_capacity: bool,
    pub shear_capacity: bool,
    pub min_reinf: bool,
    pub crack_control: bool,
    pub ductility: bool,
    pub dist_reinf: bool,
}

impl DesignChecks {
    /// All checks paired with their names, in report order
    pub fn entries(&self) -> [(&'static str, bool); 6] {
        [
            ("moment_capacity", self.moment_capacity),
            ("shear_capacity", self.shear_capacity),
            ("min_reinf", self.min_reinf),
            ("crack_control", self.crack_control),
            ("ductility", self.ductility),
            ("dist_reinf", self.dist_reinf),
        ]
    }
}

/// Results of the design stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    // === Factored resistance ===
    /// Factored moment resistance φM_n (k-ft)
    pub phi_m_n_kft: f64,
    /// Factored shear resistance φV_n (kips)
    pub phi_v_n_kips: f64,
    /// M_u / φM_n
    pub moment_ratio: f64,
    /// V_u / φV_n
    pub shear_ratio: f64,

    // === Reinforcement limits ===
    /// Design moment for minimum reinforcement M_min (k-ft)
    pub min_reinf_moment_kft: f64,
    /// Excess reinforcement factor γ_er
    pub gamma_er: f64,
    /// Tension-controlled strain limit ε_tl
    pub epsilon_tl: f64,
    /// Required distribution reinforcement A_ts (in²/ft)
    pub a_ts_in2_per_ft: f64,

    // === Crack control ===
    /// Uncracked tensile stress at the extreme fiber f_ct (ksi)
    pub f_ct_ksi: f64,
    /// Exposure factor γ_e
    pub gamma_e: f64,
    /// Maximum bar spacing (in); `None` when f_ct ≤ 0.8·f_r and no limit governs
    pub s_max_in: Option<f64>,

    /// Pass/fail of each check
    pub checks: DesignChecks,
}

impl DesignResult {
    /// True when every check passes
    pub fn passes(&self) -> bool {
        self.checks.entries().iter().all(|&(_, ok)| ok)
    }

    /// Names of failing checks, in report order
    pub fn failed_checks(&self) -> Vec<&'static str> {
        self.checks
            .entries()
            .iter()
            .filter(|&&(_, ok)| !ok)
            .map(|&(name, _)| name)
            .collect()
    }
}

/// Evaluate the design checks.
///
/// The service moment analyzed by `stress` must be the same `m_s_kft`
/// supplied in `loads`.
pub fn calculate(
    props: &SectionProperties,
    stress: &StressState,
    capacity: &CapacityResult,
    grade: &SteelGrade,
    loads: &DesignLoads,
    exposure: ExposureClass,
    settings: &DesignSettings,
) -> CalcResult<DesignResult> {
    loads.validate()?;
    if stress.m_s_kft != loads.m_s_kft {
        return Err(CalcError::invalid_input(
            "m_s_kft",
            loads.m_s_kft.to_string(),
            format!("Stress state was computed for M_s = {}", stress.m_s_kft),
        ));
    }
    if grade.yield_strength_ksi != capacity.f_y_ksi {
        return Err(CalcError::invalid_input(
            "grade",
            grade.grade_label.as_str(),
            format!("Capacity was computed for f_y = {} ksi", capacity.f_y_ksi),
        ));
    }

    let f_y = capacity.f_y_ksi;
    let h = props.height_in;
    let d_c = props.d_c_in;

    let phi_m_n_kft = loads.phi_m * capacity.m_n_kft;
    let phi_v_n_kips = loads.phi_v * capacity.v_n_kips;

    let a_ts_in2_per_ft = distribution_reinforcement(props.width_in, h, f_y);
    let epsilon_tl = tension_controlled_strain_limit(f_y);
    let min_reinf_moment_kft =
        minimum_reinforcement_moment(settings.gamma_1, grade.gamma_3, props.m_cr_kft, loads.m_u_kft);
    let gamma_er = excess_reinforcement_ratio(loads.m_u_kft, min_reinf_moment_kft, phi_m_n_kft);

    let f_ct_ksi = flexural_stress_ksi(loads.m_s_kft, h / 2.0, props.i_g_in4);
    let gamma_e = exposure.gamma_e();
    let s_max_in = if f_ct_ksi > 0.8 * props.f_r_ksi {
        let beta_s = crack_strain_ratio(d_c, h);
        let f_ss = stress.f_steel_ksi.min(0.6 * f_y);
        Some(crack_control_spacing(gamma_e, beta_s, f_ss, d_c))
    } else {
        None
    };

    let checks = DesignChecks {
        moment_capacity: phi_m_n_kft >= loads.m_u_kft,
        shear_capacity: phi_v_n_kips >= loads.v_u_kips,
        min_reinf: phi_m_n_kft >= min_reinf_moment_kft,
        crack_control: s_max_in.map_or(true, |s_max| props.spacing_in <= s_max),
        ductility: capacity.epsilon_t > epsilon_tl,
        dist_reinf: props.a_s_per_ft_in2 >= a_ts_in2_per_ft,
    };

    debug!(phi_m_n_kft, phi_v_n_kips, gamma_er, ?s_max_in, ?checks, "design checks");

    Ok(DesignResult {
        phi_m_n_kft,
        phi_v_n_kips,
        moment_ratio: demand_ratio(loads.m_u_kft, phi_m_n_kft),
        shear_ratio: demand_ratio(loads.v_u_kips, phi_v_n_kips),
        min_reinf_moment_kft,
        gamma_er,
        epsilon_tl,
        a_ts_in2_per_ft,
        f_ct_ksi,
        gamma_e,
        s_max_in,
        checks,
    })
}
