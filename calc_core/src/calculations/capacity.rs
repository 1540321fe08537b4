//! # Nominal Capacity
//!
//! Third pipeline stage. Flexural resistance from the rectangular stress
//! block, net tensile strain at nominal resistance, and the simplified
//! (β = 2) concrete shear resistance. Independent of applied load.
//!
//! ## Assumptions
//!
//! - Tension steel yields at nominal resistance
//! - No compression steel
//! - No shear reinforcement contribution (V_s = 0)

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::section::SectionProperties;
use crate::equations::lrfd::{
    concrete_shear_kips, effective_shear_depth, nominal_moment_kft, shear_crushing_limit_kips,
    stress_block_depth, tensile_strain,
};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::materials::SteelGrade;
use crate::settings::{DesignSettings, LambdaMode};

/// Simplified-procedure factor indicating the ability of cracked concrete to transmit tension
const SHEAR_BETA: f64 = 2.0;

/// Nominal flexural and shear capacity of the section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    /// Yield strength used (ksi)
    pub f_y_ksi: f64,

    // === Flexure ===
    /// Stress block depth a (in)
    pub a_in: f64,
    /// Stress block factor β1
    pub beta_1: f64,
    /// Neutral axis depth c = a/β1 (in)
    pub c_in: f64,
    /// Nominal moment resistance M_n (k-ft)
    pub m_n_kft: f64,
    /// Net tensile strain at nominal resistance ε_t
    pub epsilon_t: f64,

    // === Shear ===
    /// Effective shear depth d_v (in)
    pub d_v_in: f64,
    /// Density modification factor λ
    pub lambda: f64,
    /// Concrete shear resistance V_c (kips)
    pub v_c_kips: f64,
    /// Crushing limit 0.25·f'c·b·d_v (kips)
    pub v_n_max_kips: f64,
    /// Nominal shear resistance V_n (kips)
    pub v_n_kips: f64,
}

/// Compute nominal capacity from section properties and steel grade.
pub fn calculate(
    props: &SectionProperties,
    grade: &SteelGrade,
    settings: &DesignSettings,
) -> CalcResult<CapacityResult> {
    let f_y = require_positive("f_y_ksi", grade.yield_strength_ksi)?;
    let concrete = &props.concrete;
    let b = props.width_in;
    let d_s = props.d_s_in;

    let a_in = stress_block_depth(props.a_s_in2, f_y, concrete.f_c_ksi, b);
    let beta_1 = concrete.beta_1();
    let c_in = a_in / beta_1;
    if c_in <= 0.0 || !c_in.is_finite() {
        return Err(CalcError::invalid_input(
            "a_s_in2",
            props.a_s_in2.to_string(),
            "Neutral axis depth is zero; tensile strain is undefined without reinforcement",
        ));
    }

    let m_n_kft = nominal_moment_kft(props.a_s_in2, f_y, d_s, a_in);
    let epsilon_t = tensile_strain(settings.epsilon_cu, d_s, c_in);

    let d_v_in = effective_shear_depth(d_s, c_in, props.height_in);
    let lambda = match settings.lambda_mode {
        LambdaMode::DensityBased => concrete.lambda(),
        LambdaMode::Unity => 1.0,
    };
    let v_c_kips = concrete_shear_kips(SHEAR_BETA, lambda, concrete.f_c_ksi, b, d_v_in);
    let v_n_max_kips = shear_crushing_limit_kips(concrete.f_c_ksi, b, d_v_in);
    let v_s_kips = 0.0;
    let v_n_kips = (v_c_kips + v_s_kips).min(v_n_max_kips);

    debug!(a_in, c_in, m_n_kft, epsilon_t, d_v_in, v_n_kips, "nominal capacity");

    Ok(CapacityResult {
        f_y_ksi: f_y,
        a_in,
        beta_1,
        c_in,
        m_n_kft,
        epsilon_t,
        d_v_in,
        lambda,
        v_c_kips,
        v_n_max_kips,
        v_n_kips,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::section::{self, BeamSection};
    use crate::materials::{Concrete, RebarCatalog};

    fn props_for(f_c_ksi: f64, density_pcf: f64) -> SectionProperties {
        let beam = BeamSection {
            width_in: 12.0,
            height_in: 8.0,
            cover_in: 1.5,
            spacing_in: 6.0,
            bar_size: "#4".to_string(),
            transverse_bar_size: None,
            edge_offset_in: 0.0,
            concrete: Concrete::new(f_c_ksi, density_pcf),
            e_s_ksi: 29000.0,
        };
        section::calculate(&beam, RebarCatalog::standard()).unwrap()
    }

    fn grade_60() -> SteelGrade {
        RebarCatalog::standard().lookup_grade("60").unwrap().clone()
    }

    #[test]
    fn test_flexural_capacity() {
        let cap = calculate(&props_for(4.0, 150.0), &grade_60(), &DesignSettings::default()).unwrap();
        // a = 0.4*60/(0.85*4*12) = 0.5882
        assert!((cap.a_in - 0.58824).abs() < 1e-4, "a = {}", cap.a_in);
        assert_eq!(cap.beta_1, 0.85);
        assert!((cap.c_in - 0.69204).abs() < 1e-4, "c = {}", cap.c_in);
        assert!((cap.m_n_kft - 11.912).abs() < 1e-3, "M_n = {}", cap.m_n_kft);
        assert!((cap.epsilon_t - 0.02409).abs() < 1e-4, "eps_t = {}", cap.epsilon_t);
    }

    #[test]
    fn test_shear_capacity() {
        let cap = calculate(&props_for(4.0, 150.0), &grade_60(), &DesignSettings::default()).unwrap();
        // d_v = max(6.25 - 0.346, 5.625, 5.76) = 5.904
        assert!((cap.d_v_in - 5.904).abs() < 1e-3, "d_v = {}", cap.d_v_in);
        assert_eq!(cap.lambda, 1.0);
        assert!((cap.v_n_kips - 8.955).abs() < 1e-2, "V_n = {}", cap.v_n_kips);
        assert!(cap.v_n_kips <= cap.v_n_max_kips);
    }

    #[test]
    fn test_high_strength_beta1() {
        let cap = calculate(&props_for(6.0, 150.0), &grade_60(), &DesignSettings::default()).unwrap();
        assert!((cap.beta_1 - 0.75).abs() < 1e-12);
        assert!((cap.c_in - cap.a_in / 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_lambda_modes() {
        let props = props_for(4.0, 110.0);
        let density_based = calculate(&props, &grade_60(), &DesignSettings::default()).unwrap();
        let unity_settings = DesignSettings {
            lambda_mode: LambdaMode::Unity,
            ..DesignSettings::default()
        };
        let unity = calculate(&props, &grade_60(), &unity_settings).unwrap();

        assert!((density_based.lambda - 0.825).abs() < 1e-12);
        assert_eq!(unity.lambda, 1.0);
        assert!(density_based.v_c_kips < unity.v_c_kips);
    }

    #[test]
    fn test_crushing_cap_never_exceeded() {
        for f_c in [2.5, 4.0, 6.0, 10.0, 15.0] {
            let props = props_for(f_c, 150.0);
            let cap = calculate(&props, &grade_60(), &DesignSettings::default()).unwrap();
            let limit = 0.25 * f_c * props.width_in * cap.d_v_in;
            assert!(cap.v_n_kips <= limit + 1e-12, "f_c = {}", f_c);
        }
    }

    #[test]
    fn test_invalid_yield_rejected() {
        let grade = SteelGrade {
            grade_label: "bad".to_string(),
            yield_strength_ksi: 0.0,
            gamma_3: 0.67,
        };
        let err = calculate(&props_for(4.0, 150.0), &grade, &DesignSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
