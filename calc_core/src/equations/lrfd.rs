//! # AASHTO LRFD Resistance and Design-Limit Formulas
//!
//! Closed-form provisions for rectangular, singly reinforced sections.
//! Units: inches, kips, ksi, k-ft.
//!
//! ## References
//!
//! - AASHTO LRFD 5.6.3.2 (flexural resistance, rectangular stress block)
//! - AASHTO LRFD 5.6.2.1 (tension-controlled strain limit)
//! - AASHTO LRFD 5.6.3.3 (minimum reinforcement)
//! - AASHTO LRFD 5.6.7 (control of cracking by distribution of reinforcement)
//! - AASHTO LRFD 5.10.6 (shrinkage and temperature reinforcement)
//! - AASHTO LRFD 5.7.3.3 (simplified shear procedure, β = 2)

// =============================================================================
// FLEXURAL RESISTANCE
// =============================================================================

/// Depth of the equivalent rectangular stress block (in)
///
/// # Formula
/// a = A_s·f_y / (0.85·f'c·b)
#[inline]
pub fn stress_block_depth(a_s_in2: f64, f_y_ksi: f64, f_c_ksi: f64, b_in: f64) -> f64 {
    a_s_in2 * f_y_ksi / (0.85 * f_c_ksi * b_in)
}

/// Nominal flexural resistance (k-ft)
///
/// # Formula
/// M_n = A_s·f_y·(d_s − a/2) / 12
///
/// # Example
/// ```rust
/// use calc_core::equations::lrfd::{nominal_moment_kft, stress_block_depth};
///
/// let a = stress_block_depth(0.4, 60.0, 4.0, 12.0);
/// let m_n = nominal_moment_kft(0.4, 60.0, 6.25, a);
/// assert!((m_n - 11.91).abs() < 0.01);
/// ```
#[inline]
pub fn nominal_moment_kft(a_s_in2: f64, f_y_ksi: f64, d_s_in: f64, a_in: f64) -> f64 {
    a_s_in2 * f_y_ksi * (d_s_in - a_in / 2.0) / 12.0
}

/// Net tensile strain in the extreme tension steel
///
/// # Formula
/// ε_t = ε_cu·(d_s − c)/c
#[inline]
pub fn tensile_strain(epsilon_cu: f64, d_s_in: f64, c_in: f64) -> f64 {
    epsilon_cu * (d_s_in - c_in) / c_in
}

/// Tension-controlled strain limit ε_tl
///
/// 0.005 for f_y ≤ 75 ksi, rising linearly to 0.008 at f_y = 100 ksi.
pub fn tension_controlled_strain_limit(f_y_ksi: f64) -> f64 {
    if f_y_ksi <= 75.0 {
        0.005
    } else {
        (f_y_ksi - 75.0) / (100.0 - 75.0) * 0.003 + 0.005
    }
}

// =============================================================================
// SHEAR RESISTANCE
// =============================================================================

/// Effective shear depth d_v (in)
///
/// # Formula
/// d_v = max(d_s − c/2, 0.9·d_s, 0.72·h)
#[inline]
pub fn effective_shear_depth(d_s_in: f64, c_in: f64, h_in: f64) -> f64 {
    (d_s_in - c_in / 2.0).max(0.9 * d_s_in).max(0.72 * h_in)
}

/// Concrete contribution to shear resistance (kips)
///
/// # Formula
/// V_c = 0.0316·β·λ·√f'c·b·d_v
#[inline]
pub fn concrete_shear_kips(beta: f64, lambda: f64, f_c_ksi: f64, b_in: f64, d_v_in: f64) -> f64 {
    0.0316 * beta * lambda * f_c_ksi.sqrt() * b_in * d_v_in
}

/// Upper limit on nominal shear resistance (kips): 0.25·f'c·b·d_v
#[inline]
pub fn shear_crushing_limit_kips(f_c_ksi: f64, b_in: f64, d_v_in: f64) -> f64 {
    0.25 * f_c_ksi * b_in * d_v_in
}

// =============================================================================
// DESIGN LIMITS
// =============================================================================

/// Shrinkage and temperature reinforcement per face (in²/ft)
///
/// # Formula
/// A_ts = 1.3·b·h / (2·(b + h)·f_y), limited to 0.11 ≤ A_ts ≤ 0.60
pub fn distribution_reinforcement(b_in: f64, h_in: f64, f_y_ksi: f64) -> f64 {
    let required = 1.3 * b_in * h_in / (2.0 * (b_in + h_in) * f_y_ksi);
    required.clamp(0.11, 0.60)
}

/// Ratio of yield to ultimate tensile strength factor γ3
///
/// Discrete by yield strength: 0.75 for 75 ksi (A706), 0.76 for 80 ksi
/// (A1035), 0.67 otherwise (A615).
pub fn yield_to_ultimate_factor(f_y_ksi: f64) -> f64 {
    if f_y_ksi == 75.0 {
        0.75
    } else if f_y_ksi == 80.0 {
        0.76
    } else {
        0.67
    }
}

/// Design moment for the minimum reinforcement check (k-ft)
///
/// # Formula
/// M_min = min(γ1·γ3·M_cr, 1.33·M_u)
#[inline]
pub fn minimum_reinforcement_moment(gamma_1: f64, gamma_3: f64, m_cr_kft: f64, m_u_kft: f64) -> f64 {
    (gamma_1 * gamma_3 * m_cr_kft).min(1.33 * m_u_kft)
}

/// Excess reinforcement factor γ_er = max(M_u, M_min) / φM_n
#[inline]
pub fn excess_reinforcement_ratio(m_u_kft: f64, m_min_kft: f64, phi_m_n_kft: f64) -> f64 {
    m_u_kft.max(m_min_kft) / phi_m_n_kft
}

/// Ratio of flexural strain at the tension face to strain at the steel centroid
///
/// # Formula
/// β_s = 1 + d_c / (0.7·(h − d_c))
#[inline]
pub fn crack_strain_ratio(d_c_in: f64, h_in: f64) -> f64 {
    1.0 + d_c_in / (0.7 * (h_in - d_c_in))
}

/// Maximum bar spacing for crack control (in)
///
/// # Formula
/// s_max = 700·γ_e / (β_s·f_ss) − 2·d_c
#[inline]
pub fn crack_control_spacing(gamma_e: f64, beta_s: f64, f_ss_ksi: f64, d_c_in: f64) -> f64 {
    700.0 * gamma_e / (beta_s * f_ss_ksi) - 2.0 * d_c_in
}

/// Load-to-resistance ratio
#[inline]
pub fn demand_ratio(load: f64, resistance: f64) -> f64 {
    load / resistance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strain_limit_interpolation() {
        assert_eq!(tension_controlled_strain_limit(60.0), 0.005);
        assert_eq!(tension_controlled_strain_limit(75.0), 0.005);
        assert!((tension_controlled_strain_limit(80.0) - 0.0056).abs() < 1e-12);
        assert!((tension_controlled_strain_limit(100.0) - 0.008).abs() < 1e-12);
    }

    #[test]
    fn test_distribution_reinforcement_floor_and_cap() {
        // Thin slab strip: 1.3*96/(2*20*60) = 0.052 → floor 0.11
        assert_eq!(distribution_reinforcement(12.0, 8.0, 60.0), 0.11);
        // Massive section: capped at 0.60
        assert_eq!(distribution_reinforcement(120.0, 120.0, 40.0), 0.60);
        // Between limits: 1.3*48*48/(2*96*40) = 0.39
        let mid = distribution_reinforcement(48.0, 48.0, 40.0);
        assert!((mid - 1.3 * 48.0 * 48.0 / (2.0 * 96.0 * 40.0)).abs() < 1e-12);
    }

    #[test]
    fn test_gamma_3_lookup() {
        assert_eq!(yield_to_ultimate_factor(60.0), 0.67);
        assert_eq!(yield_to_ultimate_factor(75.0), 0.75);
        assert_eq!(yield_to_ultimate_factor(80.0), 0.76);
        assert_eq!(yield_to_ultimate_factor(100.0), 0.67);
    }

    #[test]
    fn test_minimum_reinforcement_moment_governed_by_1_33_mu() {
        // 1.6 * 0.67 * 5.12 = 5.489 vs 1.33 * 2 = 2.66
        let m = minimum_reinforcement_moment(1.6, 0.67, 5.12, 2.0);
        assert!((m - 2.66).abs() < 1e-12);
    }

    #[test]
    fn test_effective_shear_depth_floor() {
        // Shallow section: 0.72*h (5.76) governs over 0.9*d_s (5.625) and d_s - c/2 (5.25)
        let d_v = effective_shear_depth(6.25, 2.0, 8.0);
        assert!((d_v - 5.76).abs() < 1e-12, "d_v = {}", d_v);
    }

    #[test]
    fn test_crack_spacing() {
        let beta_s = crack_strain_ratio(1.75, 8.0);
        assert!((beta_s - 1.4).abs() < 1e-12);
        let s_max = crack_control_spacing(1.0, beta_s, 25.0, 1.75);
        assert!((s_max - (20.0 - 3.5)).abs() < 1e-12);
    }
}
