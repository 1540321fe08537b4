//! # Concrete Material and Transformed-Section Formulas
//!
//! Material properties of normal and lightweight concrete (stresses in ksi,
//! unit weight in pcf) and the elastic cracked-section factors `k` and `j`.
//!
//! ## References
//!
//! - AASHTO LRFD 5.4.2.4 (modulus of elasticity)
//! - AASHTO LRFD 5.4.2.6 (modulus of rupture)
//! - AASHTO LRFD 5.4.2.8 (concrete density modification factor)
//! - AASHTO LRFD 5.6.2.2 (stress block factor β1)

/// Modulus of elasticity of concrete (ksi)
///
/// # Formula
/// E_c = 33000 · (w_c/1000)^1.5 · √f'c
///
/// # Example
/// ```rust
/// use calc_core::equations::concrete::modulus_of_elasticity;
///
/// let e_c = modulus_of_elasticity(4.0, 145.0);
/// assert!((e_c - 3644.1).abs() < 0.5);
/// ```
#[inline]
pub fn modulus_of_elasticity(f_c_ksi: f64, density_pcf: f64) -> f64 {
    33000.0 * (density_pcf / 1000.0).powf(1.5) * f_c_ksi.sqrt()
}

/// Modulus of rupture (ksi)
///
/// # Formula
/// f_r = 0.24 · √f'c
#[inline]
pub fn modulus_of_rupture(f_c_ksi: f64) -> f64 {
    0.24 * f_c_ksi.sqrt()
}

/// Modular ratio n = E_s / E_c
#[inline]
pub fn modular_ratio(e_s_ksi: f64, e_c_ksi: f64) -> f64 {
    e_s_ksi / e_c_ksi
}

/// Stress block factor β1
///
/// 0.85 up to 4 ksi, reduced 0.05 per ksi above 4 ksi, floor of 0.65.
///
/// # Example
/// ```rust
/// use calc_core::equations::concrete::stress_block_factor;
///
/// assert_eq!(stress_block_factor(4.0), 0.85);
/// assert!((stress_block_factor(6.0) - 0.75).abs() < 1e-12);
/// assert_eq!(stress_block_factor(12.0), 0.65);
/// ```
pub fn stress_block_factor(f_c_ksi: f64) -> f64 {
    if f_c_ksi <= 4.0 {
        0.85
    } else {
        (0.85 - 0.05 * (f_c_ksi - 4.0)).max(0.65)
    }
}

/// Concrete density modification factor λ
///
/// # Formula
/// λ = 7.5 · w_c/1000, limited to 0.75 ≤ λ ≤ 1.0
#[inline]
pub fn density_modification_factor(density_pcf: f64) -> f64 {
    (7.5 * density_pcf / 1000.0).clamp(0.75, 1.0)
}

// =============================================================================
// CRACKED TRANSFORMED SECTION
// =============================================================================

/// Neutral axis depth ratio k for a singly reinforced cracked section
///
/// # Formula
/// k = −ρn + √((ρn)² + 2ρn)
#[inline]
pub fn cracked_depth_ratio(rho: f64, n: f64) -> f64 {
    let rho_n = rho * n;
    -rho_n + (rho_n.powi(2) + 2.0 * rho_n).sqrt()
}

/// Internal lever arm ratio j = 1 − k/3
#[inline]
pub fn lever_arm_ratio(k: f64) -> f64 {
    1.0 - k / 3.0
}
