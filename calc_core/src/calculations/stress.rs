//! # Service Stress Analysis
//!
//! Second pipeline stage. Classifies the section as cracked or uncracked
//! under the service moment and computes elastic concrete and steel stresses
//! for whichever state applies.
//!
//! ```text
//!            M_s < M_cr                     M_s ≥ M_cr
//!   ┌─────────────────────────┐   ┌─────────────────────────┐
//!   │ Uncracked: gross section│   │ Cracked: transformed    │
//!   │ f = M·y/I_g             │   │ section, k and j factors│
//!   └─────────────────────────┘   └─────────────────────────┘
//! ```
//!
//! The boundary M_s = M_cr is classified as cracked.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::section::SectionProperties;
use crate::equations::concrete::{cracked_depth_ratio, lever_arm_ratio};
use crate::equations::section::flexural_stress_ksi;
use crate::errors::{require_non_negative, CalcResult};

/// Which stiffness model governs under service load
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum SectionBehavior {
    /// Tension face below the cracking moment; gross section governs
    Uncracked,
    /// Cracked transformed section
    Cracked {
        /// Reinforcement ratio ρ = A_s/(b·d_s)
        rho: f64,
        /// Neutral axis depth ratio k
        k: f64,
        /// Lever arm ratio j
        j: f64,
    },
}

/// Service-level stress state of the section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressState {
    /// Service moment analyzed (k-ft)
    pub m_s_kft: f64,
    /// Governing section behavior
    pub behavior: SectionBehavior,
    /// Extreme fiber concrete stress (ksi)
    pub f_conc_ksi: f64,
    /// Tension steel stress (ksi)
    pub f_steel_ksi: f64,
}

impl StressState {
    pub fn is_cracked(&self) -> bool {
        matches!(self.behavior, SectionBehavior::Cracked { .. })
    }
}

/// Compute service stresses for a positive service moment `m_s_kft`.
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::{section, stress};
/// use calc_core::calculations::section::BeamSection;
/// use calc_core::materials::{Concrete, RebarCatalog};
///
/// let beam = BeamSection {
///     width_in: 12.0,
///     height_in: 8.0,
///     cover_in: 1.5,
///     spacing_in: 6.0,
///     bar_size: "#4".to_string(),
///     transverse_bar_size: None,
///     edge_offset_in: 0.0,
///     concrete: Concrete::new(4.0, 150.0),
///     e_s_ksi: 29000.0,
/// };
/// let props = section::calculate(&beam, RebarCatalog::standard()).unwrap();
///
/// let state = stress::calculate(&props, 6.0).unwrap();
/// assert!(state.is_cracked());
/// assert!((state.f_steel_ksi - 31.38).abs() < 0.01);
/// ```
pub fn calculate(props: &SectionProperties, m_s_kft: f64) -> CalcResult<StressState> {
    require_non_negative("m_s_kft", m_s_kft)?;

    let b = props.width_in;
    let h = props.height_in;
    let d_s = props.d_s_in;
    let n = props.modular_ratio;

    let state = if m_s_kft >= props.m_cr_kft {
        let rho = props.a_s_in2 / (b * d_s);
        let k = cracked_depth_ratio(rho, n);
        let j = lever_arm_ratio(k);
        let m_kin = m_s_kft * 12.0;
        StressState {
            m_s_kft,
            behavior: SectionBehavior::Cracked { rho, k, j },
            f_conc_ksi: 2.0 * m_kin / (j * k * b * d_s.powi(2)),
            f_steel_ksi: m_kin / (props.a_s_in2 * j * d_s),
        }
    } else {
        StressState {
            m_s_kft,
            behavior: SectionBehavior::Uncracked,
            f_conc_ksi: flexural_stress_ksi(m_s_kft, h / 2.0, props.i_g_in4),
            f_steel_ksi: n * flexural_stress_ksi(m_s_kft, d_s - h / 2.0, props.i_g_in4),
        }
    };

    debug!(
        cracked = state.is_cracked(),
        m_s_kft,
        m_cr_kft = props.m_cr_kft,
        f_conc_ksi = state.f_conc_ksi,
        f_steel_ksi = state.f_steel_ksi,
        "service stresses"
    );
    Ok(state)
}
