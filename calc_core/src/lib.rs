//! # calc_core - Reinforced Concrete Section Calculation Engine
//!
//! `calc_core` evaluates a singly reinforced rectangular concrete section
//! against AASHTO LRFD: section properties, cracked/uncracked service
//! stresses, nominal flexural and shear resistance, and six pass/fail design
//! checks. All inputs and outputs are JSON-serializable, making it ideal for
//! integration with web front ends and AI assistants.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Staged**: Each stage consumes the immutable results of the previous one
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::{evaluate, BeamSection, DesignLoads, ExposureClass};
//! use calc_core::materials::{Concrete, RebarCatalog};
//! use calc_core::settings::DesignSettings;
//!
//! let catalog = RebarCatalog::standard();
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
//! let loads = DesignLoads { m_u_kft: 8.0, m_s_kft: 6.0, v_u_kips: 5.0, phi_m: 0.9, phi_v: 0.9 };
//! let grade = catalog.lookup_grade("60").unwrap();
//!
//! let evaluation = evaluate(&section, grade, &loads, ExposureClass::Class1, catalog, &DesignSettings::default()).unwrap();
//! assert!(evaluation.design.passes());
//!
//! // Serialize the rounded record for a client
//! let json = serde_json::to_string_pretty(&evaluation.report()).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Section, stress, capacity and design stages
//! - [`equations`] - Closed-form AASHTO LRFD and mechanics formulas
//! - [`materials`] - Concrete properties and the rebar catalog
//! - [`settings`] - Evaluation defaults
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{evaluate, evaluate_request, Evaluation, EvaluationReport, EvaluationRequest};
pub use errors::{CalcError, CalcResult};
pub use materials::{RebarCatalog, RebarSpec, SteelGrade};
pub use settings::DesignSettings;
