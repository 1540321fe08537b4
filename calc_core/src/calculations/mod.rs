//! # Structural Calculations
//!
//! The reinforced concrete section evaluation, split into stages. Each stage
//! follows the pattern:
//!
//! - `*Input` / prior-stage results in (JSON-serializable)
//! - `*Result` out (JSON-serializable)
//! - `calculate(...) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Stages
//!
//! - [`section`] - Geometric and elastic section properties
//! - [`stress`] - Cracked/uncracked service stresses
//! - [`capacity`] - Nominal flexural and shear resistance
//! - [`design`] - Resistance factors and pass/fail checks
//! - [`evaluation`] - The full pipeline and the rounded result record

pub mod capacity;
pub mod design;
pub mod evaluation;
pub mod section;
pub mod stress;

// Re-export commonly used types
pub use capacity::CapacityResult;
pub use design::{DesignChecks, DesignLoads, DesignResult, ExposureClass};
pub use evaluation::{evaluate, evaluate_request, Evaluation, EvaluationReport, EvaluationRequest};
pub use section::{BeamSection, SectionProperties};
pub use stress::{SectionBehavior, StressState};
