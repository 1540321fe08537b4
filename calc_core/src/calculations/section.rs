//! # Concrete Section Properties
//!
//! First stage of the evaluation pipeline. Derives the geometric and elastic
//! properties of a singly reinforced rectangular section from its
//! dimensions, bar layout and concrete properties.
//!
//! ## Assumptions
//!
//! - Rectangular section, one layer of tension bars at uniform spacing
//! - Bar count is the continuous ratio width/spacing (not rounded)
//! - Gross (uncracked) properties ignore the reinforcement
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::section::{calculate, BeamSection};
//! use calc_core::materials::{Concrete, RebarCatalog};
//!
//! let section = BeamSection {
//!     width_in: 12.0,
//!     height_in: 8.0,
//!     cover_in: 1.5,
//!     spacing_in: 6.0,
//!     bar_size: "#4".to_string(),
//!     transverse_bar_size: None,
//!     edge_offset_in: 0.0,
//!     concrete: Concrete::new(4.0, 150.0),
//!     e_s_ksi: 29000.0,
//! };
//!
//! let props = calculate(&section, RebarCatalog::standard()).unwrap();
//! assert!((props.d_s_in - 6.25).abs() < 1e-9);
//! assert!((props.m_cr_kft - 5.12).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::concrete::modular_ratio;
use crate::equations::reinforcement::{
    bar_centroid_depth, bars_across_width, cover_spacing_dimension, steel_area_per_foot,
};
use crate::equations::section::{
    gross_area, gross_moment_of_inertia, section_modulus, self_weight_klf,
};
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::materials::{Concrete, RebarCatalog, RebarSpec};
use crate::settings::DEFAULT_E_S_KSI;

fn default_e_s_ksi() -> f64 {
    DEFAULT_E_S_KSI
}

/// Input geometry and materials of a reinforced concrete section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width_in": 12.0,
///   "height_in": 8.0,
///   "cover_in": 1.5,
///   "spacing_in": 6.0,
///   "bar_size": "#4",
///   "concrete": { "f_c_ksi": 4.0, "density_pcf": 150.0 },
///   "e_s_ksi": 29000.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSection {
    /// Section width b (in). For slabs, the design strip width.
    pub width_in: f64,

    /// Overall height h (in)
    pub height_in: f64,

    /// Clear cover from the tension face to the outermost bar (in)
    pub cover_in: f64,

    /// Center-to-center spacing of the main bars (in)
    pub spacing_in: f64,

    /// Main bar designation (e.g., "#4")
    pub bar_size: String,

    /// Transverse bar enclosing the main bars, if any
    #[serde(default)]
    pub transverse_bar_size: Option<String>,

    /// Distance from the section edge to the first bar center (in).
    /// Zero means bars are smeared uniformly across the width.
    #[serde(default)]
    pub edge_offset_in: f64,

    /// Concrete strength and unit weight
    pub concrete: Concrete,

    /// Steel modulus of elasticity (ksi)
    #[serde(default = "default_e_s_ksi")]
    pub e_s_ksi: f64,
}

impl BeamSection {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("width_in", self.width_in)?;
        require_positive("height_in", self.height_in)?;
        require_non_negative("cover_in", self.cover_in)?;
        if self.spacing_in == 0.0 {
            return Err(CalcError::invalid_input(
                "spacing_in",
                self.spacing_in.to_string(),
                "Bar spacing of zero would place infinite bars in the section",
            ));
        }
        require_positive("spacing_in", self.spacing_in)?;
        require_non_negative("edge_offset_in", self.edge_offset_in)?;
        if self.edge_offset_in >= self.width_in / 2.0 {
            return Err(CalcError::invalid_input(
                "edge_offset_in",
                self.edge_offset_in.to_string(),
                "Edge offset must be less than half the section width",
            ));
        }
        self.concrete.validate()?;
        require_positive("e_s_ksi", self.e_s_ksi)?;
        Ok(())
    }
}

/// Derived properties of the section, fixed for the rest of the pipeline.
///
/// Carries a snapshot of the inputs later stages depend on, so the stress,
/// capacity and design stages need nothing but this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    // === Input snapshot ===
    /// Section width b (in)
    pub width_in: f64,
    /// Overall height h (in)
    pub height_in: f64,
    /// Main bar spacing (in)
    pub spacing_in: f64,
    /// Concrete strength and unit weight
    pub concrete: Concrete,
    /// Steel modulus E_s (ksi)
    pub e_s_ksi: f64,
    /// Main bar designation
    pub bar_size: String,

    // === Reinforcement ===
    /// Tension face to bar center d_c (in)
    pub d_c_in: f64,
    /// Number of bars across the width (continuous)
    pub num_bars: f64,
    /// Total tension steel area A_s (in²)
    pub a_s_in2: f64,
    /// Steel area per foot of width (in²/ft)
    pub a_s_per_ft_in2: f64,
    /// Cover-or-spacing dimension c_b (in)
    pub c_b_in: f64,
    /// Effective depth d_s = h − d_c (in)
    pub d_s_in: f64,

    // === Gross section ===
    /// Gross area A_g (in²)
    pub a_g_in2: f64,
    /// Self-weight w_DL (k/ft)
    pub w_dl_klf: f64,
    /// Gross moment of inertia I_g (in⁴)
    pub i_g_in4: f64,
    /// Section modulus to the tension face S_c (in³)
    pub s_c_in3: f64,

    // === Elastic properties ===
    /// Concrete modulus E_c (ksi)
    pub e_c_ksi: f64,
    /// Modular ratio n = E_s/E_c
    pub modular_ratio: f64,
    /// Modulus of rupture f_r (ksi)
    pub f_r_ksi: f64,
    /// Cracking moment M_cr (k-ft)
    pub m_cr_kft: f64,
}

/// Compute section properties, resolving bar sizes through the catalog.
pub fn calculate(section: &BeamSection, catalog: &RebarCatalog) -> CalcResult<SectionProperties> {
    let bar = catalog.lookup(&section.bar_size)?;
    let transverse = match &section.transverse_bar_size {
        Some(label) => Some(catalog.lookup(label)?),
        None => None,
    };
    compute(section, bar, transverse)
}

/// Compute section properties from already-resolved bar properties.
pub fn compute(
    section: &BeamSection,
    bar: &RebarSpec,
    transverse: Option<&RebarSpec>,
) -> CalcResult<SectionProperties> {
    section.validate()?;

    let b = section.width_in;
    let h = section.height_in;

    // Reinforcement layout
    let transverse_diameter = transverse.map_or(0.0, |t| t.diameter_in);
    let d_c_in = bar_centroid_depth(section.cover_in, transverse_diameter, bar.diameter_in);
    let num_bars = bars_across_width(b, section.spacing_in, section.edge_offset_in);
    let a_s_in2 = num_bars * bar.area_in2;
    if a_s_in2 <= 0.0 || !a_s_in2.is_finite() {
        return Err(CalcError::invalid_input(
            "bar_size",
            bar.size_label.clone(),
            "Section has no tension reinforcement",
        ));
    }
    let a_s_per_ft_in2 = steel_area_per_foot(bar.area_in2, section.spacing_in);
    let c_b_in = cover_spacing_dimension(bar.diameter_in, section.cover_in, section.spacing_in);

    let d_s_in = h - d_c_in;
    if d_s_in <= 0.0 {
        return Err(CalcError::invalid_input(
            "cover_in",
            section.cover_in.to_string(),
            format!("Bar centroid depth {:.3} in leaves no effective depth in a {} in section", d_c_in, h),
        ));
    }

    // Gross section
    let a_g_in2 = gross_area(b, h);
    let w_dl_klf = self_weight_klf(section.concrete.density_pcf, a_g_in2);
    let i_g_in4 = gross_moment_of_inertia(b, h);
    let s_c_in3 = section_modulus(i_g_in4, h / 2.0);

    // Elastic properties
    let e_c_ksi = section.concrete.e_c_ksi();
    let n = modular_ratio(section.e_s_ksi, e_c_ksi);
    let f_r_ksi = section.concrete.f_r_ksi();
    let m_cr_kft = f_r_ksi * s_c_in3 / 12.0;

    debug!(d_c_in, d_s_in, a_s_in2, e_c_ksi, n, m_cr_kft, "section properties");

    Ok(SectionProperties {
        width_in: b,
        height_in: h,
        spacing_in: section.spacing_in,
        concrete: section.concrete,
        e_s_ksi: section.e_s_ksi,
        bar_size: bar.size_label.clone(),
        d_c_in,
        num_bars,
        a_s_in2,
        a_s_per_ft_in2,
        c_b_in,
        d_s_in,
        a_g_in2,
        w_dl_klf,
        i_g_in4,
        s_c_in3,
        e_c_ksi,
        modular_ratio: n,
        f_r_ksi,
        m_cr_kft,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn test_section() -> BeamSection {
        BeamSection {
            width_in: 12.0,
            height_in: 8.0,
            cover_in: 1.5,
            spacing_in: 6.0,
            bar_size: "#4".to_string(),
            transverse_bar_size: None,
            edge_offset_in: 0.0,
            concrete: Concrete::new(4.0, 150.0),
            e_s_ksi: 29000.0,
        }
    }

    #[test]
    fn test_reference_section() {
        let props = calculate(&test_section(), RebarCatalog::standard()).unwrap();

        assert!((props.a_g_in2 - 96.0).abs() < EPSILON);
        assert!((props.w_dl_klf - 0.10).abs() < EPSILON);
        assert!((props.d_c_in - 1.75).abs() < EPSILON);
        assert!((props.d_s_in - 6.25).abs() < EPSILON);
        assert!((props.a_s_in2 - 0.40).abs() < EPSILON);
        assert!((props.a_s_per_ft_in2 - 0.40).abs() < EPSILON);
        assert!((props.f_r_ksi - 0.48).abs() < EPSILON);
        assert!((props.i_g_in4 - 512.0).abs() < EPSILON);
        assert!((props.s_c_in3 - 128.0).abs() < EPSILON);
        assert!((props.m_cr_kft - 5.12).abs() < EPSILON);
        // 150 pcf: E_c = 3834 ksi, n = 7.56
        assert!((props.e_c_ksi - 3834.25).abs() < 0.1, "E_c = {}", props.e_c_ksi);
        assert!((props.modular_ratio - 7.563).abs() < 0.001);
    }

    #[test]
    fn test_lighter_concrete_modulus() {
        let mut section = test_section();
        section.concrete.density_pcf = 145.0;
        let props = calculate(&section, RebarCatalog::standard()).unwrap();
        assert!((props.e_c_ksi - 3644.0).abs() < 0.5, "E_c = {}", props.e_c_ksi);
    }

    #[test]
    fn test_transverse_bar_deepens_centroid() {
        let mut section = test_section();
        section.transverse_bar_size = Some("#3".to_string());
        let props = calculate(&section, RebarCatalog::standard()).unwrap();
        assert!((props.d_c_in - (1.75 + 0.1875)).abs() < EPSILON);
    }

    #[test]
    fn test_continuous_bar_count() {
        let mut section = test_section();
        section.spacing_in = 5.0;
        let props = calculate(&section, RebarCatalog::standard()).unwrap();
        assert!((props.num_bars - 2.4).abs() < EPSILON);
        assert!((props.a_s_in2 - 0.48).abs() < EPSILON);
    }

    #[test]
    fn test_edge_offset_layout() {
        let mut section = test_section();
        section.width_in = 36.0;
        section.edge_offset_in = 3.0;
        let props = calculate(&section, RebarCatalog::standard()).unwrap();
        // (36 - 6)/6 + 1 = 6 bars
        assert!((props.num_bars - 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_edge_offset_at_half_width_rejected() {
        let mut section = test_section();
        section.edge_offset_in = section.width_in / 2.0;
        let err = calculate(&section, RebarCatalog::standard()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "edge_offset_in"));
    }

    #[test]
    fn test_zero_spacing_fails_fast() {
        let mut section = test_section();
        section.spacing_in = 0.0;
        let err = calculate(&section, RebarCatalog::standard()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "spacing_in"));
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let mut section = test_section();
        section.spacing_in = -6.0;
        assert!(calculate(&section, RebarCatalog::standard()).is_err());

        let mut section = test_section();
        section.concrete.f_c_ksi = 0.0;
        assert!(calculate(&section, RebarCatalog::standard()).is_err());

        let mut section = test_section();
        section.cover_in = -0.25;
        assert!(calculate(&section, RebarCatalog::standard()).is_err());
    }

    #[test]
    fn test_cover_consumes_depth() {
        let mut section = test_section();
        section.cover_in = 7.9;
        let err = calculate(&section, RebarCatalog::standard()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "cover_in"));
    }

    #[test]
    fn test_zero_area_bar_rejected() {
        let bar = RebarSpec {
            size_label: "#0".to_string(),
            diameter_in: 0.5,
            area_in2: 0.0,
            weight_plf: 0.0,
            perimeter_in: 0.0,
        };
        let err = compute(&test_section(), &bar, None).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_unknown_bar_size() {
        let mut section = test_section();
        section.bar_size = "#13".to_string();
        let err = calculate(&section, RebarCatalog::standard()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_area_per_ft_decreases_with_spacing() {
        let mut last = f64::INFINITY;
        for spacing in [3.0, 4.5, 6.0, 9.0, 12.0, 18.0] {
            let mut section = test_section();
            section.spacing_in = spacing;
            let props = calculate(&section, RebarCatalog::standard()).unwrap();
            assert!(props.a_s_per_ft_in2 < last);
            last = props.a_s_per_ft_in2;
        }
    }
}
