//! Reinforcing Bar Catalog (ASTM A615 / A706 / A1035)
//!
//! Bar-size geometry and steel-grade properties, looked up by label.
//! The catalog is built once and never mutated afterwards, so a single
//! instance can be shared across threads for unsynchronized reads.
//!
//! ## Data Source
//!
//! The built-in tables carry the standard inch-pound bar designations
//! (#3 through #11, #14, #18) and common grades. Custom tables can be
//! loaded from two CSV files:
//!
//! ```text
//! bar_size,bar_diameter,bar_area,bar_weight,bar_perimeter
//! #4,0.500,0.20,0.668,1.571
//!
//! grade,yield,gamma_3
//! 60,60,0.67
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::rebar::RebarCatalog;
//!
//! let catalog = RebarCatalog::standard();
//! let bar = catalog.lookup("#5").unwrap();
//! assert!((bar.area_in2 - 0.31).abs() < 1e-9);
//!
//! let grade = catalog.lookup_grade("60").unwrap();
//! assert_eq!(grade.yield_strength_ksi, 60.0);
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::equations::lrfd::yield_to_ultimate_factor;
use crate::errors::{CalcError, CalcResult};

/// Geometry and weight of a single deformed bar size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebarSpec {
    /// Bar designation (e.g., "#4")
    pub size_label: String,
    /// Nominal diameter (in)
    pub diameter_in: f64,
    /// Nominal area (in²)
    pub area_in2: f64,
    /// Unit weight (lb/ft)
    pub weight_plf: f64,
    /// Nominal perimeter (in)
    pub perimeter_in: f64,
}

/// Reinforcing steel grade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelGrade {
    /// Grade designation (e.g., "60")
    pub grade_label: String,
    /// Specified minimum yield strength f_y (ksi)
    pub yield_strength_ksi: f64,
    /// Ratio of yield to ultimate tensile strength factor γ3
    pub gamma_3: f64,
}

impl SteelGrade {
    /// Build an ad-hoc grade from a yield strength alone.
    ///
    /// γ3 comes from the discrete AASHTO lookup by yield strength.
    pub fn from_yield(f_y_ksi: f64) -> Self {
        SteelGrade {
            grade_label: format!("{} ksi", f_y_ksi),
            yield_strength_ksi: f_y_ksi,
            gamma_3: yield_to_ultimate_factor(f_y_ksi),
        }
    }
}

// (label, diameter in, area in², weight plf, perimeter in)
const STANDARD_BARS: [(&str, f64, f64, f64, f64); 11] = [
    ("#3", 0.375, 0.11, 0.376, 1.178),
    ("#4", 0.500, 0.20, 0.668, 1.571),
    ("#5", 0.625, 0.31, 1.043, 1.963),
    ("#6", 0.750, 0.44, 1.502, 2.356),
    ("#7", 0.875, 0.60, 2.044, 2.749),
    ("#8", 1.000, 0.79, 2.670, 3.142),
    ("#9", 1.128, 1.00, 3.400, 3.544),
    ("#10", 1.270, 1.27, 4.303, 3.990),
    ("#11", 1.410, 1.56, 5.313, 4.430),
    ("#14", 1.693, 2.25, 7.650, 5.320),
    ("#18", 2.257, 4.00, 13.600, 7.090),
];

// (label, f_y ksi, γ3)
const STANDARD_GRADES: [(&str, f64, f64); 5] = [
    ("40", 40.0, 0.67),
    ("60", 60.0, 0.67),
    ("75", 75.0, 0.75),
    ("80", 80.0, 0.76),
    ("100", 100.0, 0.67),
];

static STANDARD_CATALOG: Lazy<RebarCatalog> = Lazy::new(RebarCatalog::build_standard);

#[derive(Debug, Deserialize)]
struct BarRow {
    bar_size: String,
    bar_diameter: f64,
    bar_area: f64,
    bar_weight: f64,
    bar_perimeter: f64,
}

#[derive(Debug, Deserialize)]
struct GradeRow {
    grade: String,
    #[serde(rename = "yield")]
    yield_strength: f64,
    gamma_3: f64,
}

/// Read-only mapping from labels to bar sizes and steel grades
#[derive(Debug, Clone, Default)]
pub struct RebarCatalog {
    bars: HashMap<String, RebarSpec>,
    grades: HashMap<String, SteelGrade>,
}

impl RebarCatalog {
    /// The built-in catalog, initialized on first use and shared for the
    /// lifetime of the process.
    pub fn standard() -> &'static RebarCatalog {
        &STANDARD_CATALOG
    }

    fn build_standard() -> Self {
        let bars = STANDARD_BARS
            .iter()
            .map(|&(label, diameter_in, area_in2, weight_plf, perimeter_in)| {
                (
                    bar_key(label),
                    RebarSpec {
                        size_label: label.to_string(),
                        diameter_in,
                        area_in2,
                        weight_plf,
                        perimeter_in,
                    },
                )
            })
            .collect();
        let grades = STANDARD_GRADES
            .iter()
            .map(|&(label, yield_strength_ksi, gamma_3)| {
                (
                    grade_key(label),
                    SteelGrade {
                        grade_label: label.to_string(),
                        yield_strength_ksi,
                        gamma_3,
                    },
                )
            })
            .collect();
        debug!("built standard rebar catalog");
        RebarCatalog { bars, grades }
    }

    /// Load a catalog from a bar-size CSV and a steel-grade CSV on disk.
    pub fn load_from_csv(bar_path: impl AsRef<Path>, grade_path: impl AsRef<Path>) -> CalcResult<Self> {
        let bar_path = bar_path.as_ref();
        let grade_path = grade_path.as_ref();
        let bar_name = bar_path.display().to_string();
        let grade_name = grade_path.display().to_string();

        let bar_file = File::open(bar_path)
            .map_err(|e| CalcError::catalog_load(&bar_name, format!("Failed to open: {}", e)))?;
        let grade_file = File::open(grade_path)
            .map_err(|e| CalcError::catalog_load(&grade_name, format!("Failed to open: {}", e)))?;

        let mut catalog = RebarCatalog::default();
        catalog.read_bars(bar_file, &bar_name)?;
        catalog.read_grades(grade_file, &grade_name)?;

        info!(
            bars = catalog.bars.len(),
            grades = catalog.grades.len(),
            bar_table = %bar_name,
            grade_table = %grade_name,
            "loaded rebar catalog"
        );
        Ok(catalog)
    }

    /// Build a catalog from any two CSV readers (files, embedded strings, network bodies).
    pub fn from_csv_readers<B: Read, G: Read>(bars: B, grades: G) -> CalcResult<Self> {
        let mut catalog = RebarCatalog::default();
        catalog.read_bars(bars, "bar table")?;
        catalog.read_grades(grades, "grade table")?;
        info!(bars = catalog.bars.len(), grades = catalog.grades.len(), "loaded rebar catalog");
        Ok(catalog)
    }

    fn read_bars<R: Read>(&mut self, reader: R, source_name: &str) -> CalcResult<()> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        for (index, row) in rdr.deserialize::<BarRow>().enumerate() {
            // Header is line 1
            let line = index + 2;
            let row = row.map_err(|e| CalcError::catalog_load(source_name, format!("Line {}: {}", line, e)))?;
            if row.bar_diameter <= 0.0 || row.bar_area <= 0.0 {
                return Err(CalcError::catalog_load(
                    source_name,
                    format!("Line {}: bar '{}' must have positive diameter and area", line, row.bar_size),
                ));
            }
            let key = bar_key(&row.bar_size);
            if self.bars.contains_key(&key) {
                return Err(CalcError::catalog_load(
                    source_name,
                    format!("Line {}: duplicate bar size '{}'", line, row.bar_size),
                ));
            }
            self.bars.insert(
                key,
                RebarSpec {
                    size_label: row.bar_size,
                    diameter_in: row.bar_diameter,
                    area_in2: row.bar_area,
                    weight_plf: row.bar_weight,
                    perimeter_in: row.bar_perimeter,
                },
            );
        }
        Ok(())
    }

    fn read_grades<R: Read>(&mut self, reader: R, source_name: &str) -> CalcResult<()> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        for (index, row) in rdr.deserialize::<GradeRow>().enumerate() {
            let line = index + 2;
            let row = row.map_err(|e| CalcError::catalog_load(source_name, format!("Line {}: {}", line, e)))?;
            if row.yield_strength <= 0.0 {
                return Err(CalcError::catalog_load(
                    source_name,
                    format!("Line {}: grade '{}' must have positive yield strength", line, row.grade),
                ));
            }
            let key = grade_key(&row.grade);
            if self.grades.contains_key(&key) {
                return Err(CalcError::catalog_load(
                    source_name,
                    format!("Line {}: duplicate grade '{}'", line, row.grade),
                ));
            }
            self.grades.insert(
                key,
                SteelGrade {
                    grade_label: row.grade,
                    yield_strength_ksi: row.yield_strength,
                    gamma_3: row.gamma_3,
                },
            );
        }
        Ok(())
    }

    /// Look up a bar size by label.
    ///
    /// Matching ignores case and surrounding whitespace, and a bare number
    /// resolves like its `#` designation ("5" → "#5").
    pub fn lookup(&self, size_label: &str) -> CalcResult<&RebarSpec> {
        self.bars
            .get(&bar_key(size_label))
            .ok_or_else(|| CalcError::unknown_bar_size(size_label.trim()))
    }

    /// Look up a steel grade by label ("60", "Grade 60").
    pub fn lookup_grade(&self, grade_label: &str) -> CalcResult<&SteelGrade> {
        self.grades
            .get(&grade_key(grade_label))
            .ok_or_else(|| CalcError::unknown_grade(grade_label.trim()))
    }

    /// All bar sizes, smallest diameter first
    pub fn bar_sizes(&self) -> Vec<&RebarSpec> {
        let mut bars: Vec<&RebarSpec> = self.bars.values().collect();
        bars.sort_by(|a, b| a.diameter_in.total_cmp(&b.diameter_in));
        bars
    }

    /// All grades, lowest yield strength first
    pub fn grades(&self) -> Vec<&SteelGrade> {
        let mut grades: Vec<&SteelGrade> = self.grades.values().collect();
        grades.sort_by(|a, b| a.yield_strength_ksi.total_cmp(&b.yield_strength_ksi));
        grades
    }
}

fn bar_key(label: &str) -> String {
    let trimmed = label.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        format!("#{}", trimmed)
    } else {
        trimmed.to_uppercase()
    }
}

fn grade_key(label: &str) -> String {
    let upper = label.trim().to_uppercase();
    match upper.strip_prefix("GRADE") {
        Some(rest) => rest.trim().to_string(),
        None => upper,
    }
}
