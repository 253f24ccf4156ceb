//! Heavy metal pollution index calculation
//!
//! Computes HPI, HEI, MI, Cd and the Nemerow index from a map of metal
//! concentrations, and exposes the calculator behind a trait so request
//! handlers can be exercised with a stub.

pub mod error;
pub mod indices;
pub mod metal;

pub use error::CalculationError;
pub use indices::{
    calculate_indices, Classification, ConcentrationMap, HmpiCalculator, IndexCalculator,
    IndexReport, DEFAULT_CRITICAL_HPI,
};
pub use metal::{reference_standards, Metal, Standard};
