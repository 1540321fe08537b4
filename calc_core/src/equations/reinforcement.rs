//! # Reinforcement Layout Formulas
//!
//! Bar placement within a section of width `b` at uniform center-to-center
//! spacing `s`. Bar counts are continuous ratios (a 12" strip at 5" spacing
//! holds 2.4 bars), which idealizes the reinforcement as uniformly smeared.
//!
//! ```text
//!   offset       s         s        offset
//!  |<--->|<--------->|<--------->|<--->|
//!  ┌─────────────────────────────────────┐
//!  │     •           •           •       │  ─┬─
//!  └─────────────────────────────────────┘   d_c
//!  |<------------------ b -------------->|
//! ```

/// Distance from the tension face to the center of the main bars (in)
///
/// # Formula
/// d_c = cover + d_t/2 + d_b/2
///
/// where `d_t` is the transverse bar diameter (0 when there is none).
#[inline]
pub fn bar_centroid_depth(cover_in: f64, transverse_diameter_in: f64, bar_diameter_in: f64) -> f64 {
    cover_in + transverse_diameter_in / 2.0 + bar_diameter_in / 2.0
}

/// Number of bars across a width at a given spacing
///
/// With no edge offset the count is `b/s`. With an offset to the first bar
/// center the count is `(b - 2·offset)/s + 1`.
///
/// # Example
/// ```rust
/// use calc_core::equations::reinforcement::bars_across_width;
///
/// assert!((bars_across_width(12.0, 6.0, 0.0) - 2.0).abs() < 1e-12);
/// assert!((bars_across_width(12.0, 5.0, 1.0) - 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn bars_across_width(width_in: f64, spacing_in: f64, edge_offset_in: f64) -> f64 {
    if edge_offset_in == 0.0 {
        width_in / spacing_in
    } else {
        (width_in - 2.0 * edge_offset_in) / spacing_in + 1.0
    }
}

/// Spacing that fits `num_bars` across a width (inverse of [`bars_across_width`])
#[inline]
pub fn spacing_for_bar_count(width_in: f64, num_bars: f64, edge_offset_in: f64) -> f64 {
    if edge_offset_in == 0.0 {
        width_in / num_bars
    } else {
        (width_in - 2.0 * edge_offset_in) / (num_bars - 1.0)
    }
}

/// Steel area per foot of width (in²/ft)
///
/// # Formula
/// A_s/ft = A_b / (s/12)
#[inline]
pub fn steel_area_per_foot(bar_area_in2: f64, spacing_in: f64) -> f64 {
    bar_area_in2 / (spacing_in / 12.0)
}

/// Cover-or-spacing dimension c_b used for development length (in)
///
/// # Formula
/// c_b = min(d_b/2 + cover, s/2)
#[inline]
pub fn cover_spacing_dimension(bar_diameter_in: f64, cover_in: f64, spacing_in: f64) -> f64 {
    (bar_diameter_in / 2.0 + cover_in).min(spacing_in / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid_without_transverse_bar() {
        // 1.5" cover, #4 bar
        assert!((bar_centroid_depth(1.5, 0.0, 0.5) - 1.75).abs() < 1e-12);
    }

    #[test]
    fn test_centroid_with_transverse_bar() {
        // #3 stirrup adds half its diameter
        assert!((bar_centroid_depth(1.5, 0.375, 0.5) - 1.9375).abs() < 1e-12);
    }

    #[test]
    fn test_spacing_inverts_bar_count() {
        for &(width, spacing, offset) in &[(12.0, 6.0, 0.0), (36.0, 7.5, 2.0), (48.0, 9.0, 3.0)] {
            let n = bars_across_width(width, spacing, offset);
            let s = spacing_for_bar_count(width, n, offset);
            assert!((s - spacing).abs() < 1e-9, "width={} offset={}", width, offset);
        }
    }

    #[test]
    fn test_area_per_foot_decreases_with_spacing() {
        let tight = steel_area_per_foot(0.31, 6.0);
        let loose = steel_area_per_foot(0.31, 12.0);
        assert!((tight - 0.62).abs() < 1e-12);
        assert!(loose < tight);
    }

    #[test]
    fn test_cover_spacing_dimension() {
        // Cover governs
        assert!((cover_spacing_dimension(0.5, 1.5, 6.0) - 1.75).abs() < 1e-12);
        // Half-spacing governs
        assert!((cover_spacing_dimension(0.5, 3.0, 4.0) - 2.0).abs() < 1e-12);
    }
}
