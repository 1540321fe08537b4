//! # Gross Section Property Formulas
//!
//! Geometric properties of the uncracked (gross) rectangular concrete
//! section, plus the elastic flexure formula used for service stresses.
//!
//! ## Notation
//!
//! - `b` = Width of section (in)
//! - `h` = Overall height of section (in)
//! - `A_g` = Gross area (in²)
//! - `I_g` = Gross moment of inertia (in⁴)
//! - `S_c` = Section modulus to the extreme tension fiber (in³)
//!
//! ## References
//!
//! - AASHTO LRFD Bridge Design Specifications, Section 5.6.3.3
//! - Any structural mechanics textbook

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Gross area of a rectangular section
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │         │
///     │  • • •  │ ← tension steel
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A_g = b × h
///
/// # Example
/// ```rust
/// use calc_core::equations::section::gross_area;
///
/// let a_g = gross_area(12.0, 8.0);
/// assert!((a_g - 96.0).abs() < 1e-9);
/// ```
#[inline]
pub fn gross_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Gross moment of inertia about the centroidal axis
///
/// # Formula
/// I_g = b·h³/12
///
/// # Example
/// ```rust
/// use calc_core::equations::section::gross_moment_of_inertia;
///
/// // 12" wide x 8" deep slab strip
/// let i_g = gross_moment_of_inertia(12.0, 8.0);
/// assert!((i_g - 512.0).abs() < 1e-9);
/// ```
#[inline]
pub fn gross_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Section modulus for an extreme fiber at distance `c` from the neutral axis
///
/// # Formula
/// S = I / c
///
/// For the gross rectangle the tension face sits at c = h/2, so
/// S_c = I_g / (h/2).
#[inline]
pub fn section_modulus(i: f64, c: f64) -> f64 {
    i / c
}

/// Self-weight of a rectangular concrete section (k/ft)
///
/// # Formula
/// w_DL = (γ_c / 1000) · A_g / 144
///
/// # Arguments
/// * `density_pcf` - Concrete unit weight (pcf)
/// * `a_g_in2` - Gross area (in²)
#[inline]
pub fn self_weight_klf(density_pcf: f64, a_g_in2: f64) -> f64 {
    density_pcf / 1000.0 * a_g_in2 / 144.0
}

// =============================================================================
// ELASTIC FLEXURE
// =============================================================================

/// Elastic bending stress at distance `y` from the neutral axis (ksi)
///
/// Moment is supplied in kip-feet and converted to kip-inches.
///
/// # Formula
/// f = M·12·y / I
///
/// # Example
/// ```rust
/// use calc_core::equations::section::flexural_stress_ksi;
///
/// // 6 k-ft on a 12x8 gross section, extreme fiber (y = 4")
/// let f = flexural_stress_ksi(6.0, 4.0, 512.0);
/// assert!((f - 0.5625).abs() < 1e-9);
/// ```
#[inline]
pub fn flexural_stress_ksi(m_kft: f64, y_in: f64, i_in4: f64) -> f64 {
    m_kft * 12.0 * y_in / i_in4
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_section_modulus_matches_bh2_over_6() {
        let i_g = gross_moment_of_inertia(12.0, 8.0);
        let s_c = section_modulus(i_g, 8.0 / 2.0);
        assert!((s_c - 12.0 * 64.0 / 6.0).abs() < EPSILON, "S_c = {}", s_c);
        assert!((s_c - 128.0).abs() < EPSILON);
    }

    #[test]
    fn test_self_weight() {
        // 150 pcf, 12x8 = 96 in² → 0.15 * 96/144 = 0.1 k/ft
        let w = self_weight_klf(150.0, gross_area(12.0, 8.0));
        assert!((w - 0.1).abs() < EPSILON, "w_DL = {}", w);
    }

    #[test]
    fn test_flexural_stress_linear_in_moment() {
        let f1 = flexural_stress_ksi(3.0, 4.0, 512.0);
        let f2 = flexural_stress_ksi(6.0, 4.0, 512.0);
        assert!((f2 - 2.0 * f1).abs() < EPSILON);
    }
}
