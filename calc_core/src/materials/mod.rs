//! # Materials Database
//!
//! Material definitions and property lookups for reinforced concrete.
//!
//! ## Material Types
//!
//! - **Concrete**: Compressive strength and unit weight, with derived
//!   elastic modulus, modulus of rupture and stress-block factor
//! - **Reinforcing steel**: Bar sizes and steel grades from a read-only
//!   [`RebarCatalog`]
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::{Concrete, RebarCatalog};
//!
//! let concrete = Concrete::new(4.0, 150.0);
//! println!("E_c = {:.0} ksi, f_r = {:.3} ksi", concrete.e_c_ksi(), concrete.f_r_ksi());
//!
//! let bar = RebarCatalog::standard().lookup("#4").unwrap();
//! println!("A_b = {} in²", bar.area_in2);
//! ```

pub mod rebar;

// Re-export rebar types
pub use rebar::{RebarCatalog, RebarSpec, SteelGrade};

use serde::{Deserialize, Serialize};

use crate::equations::concrete::{
    density_modification_factor, modulus_of_elasticity, modulus_of_rupture, stress_block_factor,
};
use crate::errors::{require_positive, CalcResult};

/// Normal default unit weight of reinforced concrete (pcf)
pub const NORMAL_WEIGHT_PCF: f64 = 150.0;

/// Concrete material properties
///
/// ## JSON Example
///
/// ```json
/// { "f_c_ksi": 4.0, "density_pcf": 150.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Concrete {
    /// Specified compressive strength f'c (ksi)
    pub f_c_ksi: f64,
    /// Unit weight w_c (pcf)
    pub density_pcf: f64,
}

impl Concrete {
    pub fn new(f_c_ksi: f64, density_pcf: f64) -> Self {
        Concrete { f_c_ksi, density_pcf }
    }

    /// Validate strength and unit weight.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("f_c_ksi", self.f_c_ksi)?;
        require_positive("density_pcf", self.density_pcf)?;
        Ok(())
    }

    /// Modulus of elasticity E_c (ksi)
    pub fn e_c_ksi(&self) -> f64 {
        modulus_of_elasticity(self.f_c_ksi, self.density_pcf)
    }

    /// Modulus of rupture f_r (ksi)
    pub fn f_r_ksi(&self) -> f64 {
        modulus_of_rupture(self.f_c_ksi)
    }

    /// Stress block factor β1
    pub fn beta_1(&self) -> f64 {
        stress_block_factor(self.f_c_ksi)
    }

    /// Density modification factor λ from unit weight
    pub fn lambda(&self) -> f64 {
        density_modification_factor(self.density_pcf)
    }
}

impl Default for Concrete {
    fn default() -> Self {
        Concrete::new(4.0, NORMAL_WEIGHT_PCF)
    }
}
