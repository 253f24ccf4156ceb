//! Pollution index calculation
//!
//! All indices are computed from the same set of readings:
//!
//! - HPI: weighted mean of sub-indices, weights `1 / S`
//! - HEI: `Σ M / MAC`
//! - MI: `Σ M / S`
//! - Cd: `Σ (M / MAC - 1)`
//! - Nemerow: `sqrt((mean(P)² + max(P)²) / 2)` with `P = M / S`
//!
//! where `M` is the measured concentration, `S` the permissible value and
//! `MAC` the maximum admissible concentration of each metal.

use super::error::CalculationError;
use super::metal::{Metal, Standard};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Caller-supplied mapping of metal identifiers to concentrations (mg/L)
pub type ConcentrationMap = Map<String, Value>;

/// HPI at or above which a sample is classified as unsafe
pub const DEFAULT_CRITICAL_HPI: f64 = 100.0;

/// Overall verdict for a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// HPI below the critical threshold
    Safe,
    /// HPI at or above the critical threshold
    Unsafe,
}

/// Result of a calculation, serialized with the keys clients expect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexReport {
    /// Heavy metal pollution index
    #[serde(rename = "HPI")]
    pub hpi: f64,
    /// Heavy metal evaluation index
    #[serde(rename = "HEI")]
    pub hei: f64,
    /// Metal index
    #[serde(rename = "MI")]
    pub mi: f64,
    /// Degree of contamination
    #[serde(rename = "Cd")]
    pub cd: f64,
    /// Nemerow pollution index
    #[serde(rename = "Nemerow")]
    pub nemerow: f64,
    /// Verdict derived from the HPI
    pub classification: Classification,
    /// Input keys that did not name a known metal
    #[serde(
        rename = "ignoredMetals",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ignored_metals: Vec<String>,
}

/// Calculation collaborator used by the HTTP layer
///
/// The output is opaque to callers: it is returned to clients unchanged.
pub trait IndexCalculator: Send + Sync {
    /// Compute indices for a concentration map
    fn calculate(&self, concentrations: &ConcentrationMap) -> Result<Value, CalculationError>;
}

/// Heavy metal pollution index calculator
#[derive(Debug, Clone, Copy)]
pub struct HmpiCalculator {
    critical_hpi: f64,
}

impl Default for HmpiCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_CRITICAL_HPI)
    }
}

impl HmpiCalculator {
    /// Create a calculator with the given critical HPI threshold
    pub fn new(critical_hpi: f64) -> Self {
        Self { critical_hpi }
    }

    /// HPI at or above which samples are classified as unsafe
    pub fn critical_hpi(&self) -> f64 {
        self.critical_hpi
    }

    /// Compute the full index report for a concentration map
    pub fn evaluate(
        &self,
        concentrations: &ConcentrationMap,
    ) -> Result<IndexReport, CalculationError> {
        let (readings, ignored_metals) = collect_readings(concentrations)?;
        if readings.is_empty() {
            return Err(CalculationError::NoRecognisedMetals(ignored_metals));
        }

        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        let mut hei = 0.0;
        let mut mi = 0.0;
        let mut cd = 0.0;
        let mut ratio_sum = 0.0;
        let mut ratio_max = f64::MIN;

        for (standard, concentration) in &readings {
            let weight = standard.unit_weight();
            weighted_sum += weight * standard.sub_index(*concentration);
            weight_total += weight;

            let mac_ratio = concentration / standard.mac;
            hei += mac_ratio;
            cd += mac_ratio - 1.0;

            let ratio = concentration / standard.permissible;
            mi += ratio;
            ratio_sum += ratio;
            ratio_max = ratio_max.max(ratio);
        }

        let hpi = weighted_sum / weight_total;
        let ratio_mean = ratio_sum / readings.len() as f64;
        let nemerow = ((ratio_mean.powi(2) + ratio_max.powi(2)) / 2.0).sqrt();

        for (name, value) in [
            ("HPI", hpi),
            ("HEI", hei),
            ("MI", mi),
            ("Cd", cd),
            ("Nemerow", nemerow),
        ] {
            if !value.is_finite() {
                return Err(CalculationError::NonFiniteIndex(name));
            }
        }

        let classification = if hpi < self.critical_hpi {
            Classification::Safe
        } else {
            Classification::Unsafe
        };

        Ok(IndexReport {
            hpi,
            hei,
            mi,
            cd,
            nemerow,
            classification,
            ignored_metals,
        })
    }
}

impl IndexCalculator for HmpiCalculator {
    fn calculate(&self, concentrations: &ConcentrationMap) -> Result<Value, CalculationError> {
        let report = self.evaluate(concentrations)?;
        Ok(serde_json::to_value(report)?)
    }
}

/// Compute indices with the default critical threshold
pub fn calculate_indices(
    concentrations: &ConcentrationMap,
) -> Result<IndexReport, CalculationError> {
    HmpiCalculator::default().evaluate(concentrations)
}

/// Split the input into validated readings and unrecognised keys
fn collect_readings(
    concentrations: &ConcentrationMap,
) -> Result<(Vec<(Standard, f64)>, Vec<String>), CalculationError> {
    let mut readings = Vec::with_capacity(concentrations.len());
    let mut seen = BTreeSet::new();
    let mut ignored = Vec::new();

    for (key, value) in concentrations {
        let metal = match key.parse::<Metal>() {
            Ok(metal) => metal,
            Err(_) => {
                tracing::debug!(key = %key, "Ignoring unrecognised metal");
                ignored.push(key.clone());
                continue;
            }
        };

        let concentration = value
            .as_f64()
            .ok_or_else(|| CalculationError::NonNumeric(key.clone()))?;
        if concentration < 0.0 {
            return Err(CalculationError::NegativeConcentration {
                metal: key.clone(),
                value: concentration,
            });
        }
        if !seen.insert(metal) {
            return Err(CalculationError::DuplicateMetal(metal));
        }

        readings.push((metal.standard(), concentration));
    }

    ignored.sort();
    Ok((readings, ignored))
}
