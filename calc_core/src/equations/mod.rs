//! # Structural Engineering Equations
//!
//! This module contains the closed-form equations used by the concrete
//! section calculations. Having equations in one place enables:
//! - Easy verification against code references (AASHTO LRFD)
//! - Documentation of units and assumptions
//! - Consistent implementation across calculation stages
//!
//! ## Modules
//!
//! - [`section`] - Gross section properties and elastic flexure
//! - [`reinforcement`] - Bar layout (centroid depth, bar count, area per foot)
//! - [`concrete`] - Concrete material properties and cracked-section factors
//! - [`lrfd`] - Flexural/shear resistance and design limits
//!
//! ## Sign Conventions
//!
//! - **Moment**: Positive causes tension on the reinforced face
//! - **Stress**: Reported as magnitudes (compression in concrete, tension in steel)
//!
//! ## Units
//!
//! Inches, kips, ksi, k-ft throughout. Concrete unit weight is in pcf.

pub mod concrete;
pub mod lrfd;
pub mod reinforcement;
pub mod section;

// Re-export commonly used items
pub use concrete::{
    cracked_depth_ratio,
    density_modification_factor,
    lever_arm_ratio,
    modular_ratio,
    modulus_of_elasticity,
    modulus_of_rupture,
    stress_block_factor,
};

pub use reinforcement::{
    bar_centroid_depth,
    bars_across_width,
    cover_spacing_dimension,
    spacing_for_bar_count,
    steel_area_per_foot,
};

pub use section::{
    flexural_stress_ksi,
    gross_area,
    gross_moment_of_inertia,
    section_modulus,
    self_weight_klf,
};
