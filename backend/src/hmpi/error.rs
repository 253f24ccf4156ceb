//! Calculation-specific error types
//!
//! Errors that can occur while turning a concentration map into pollution indices.

use thiserror::Error;

/// Errors that can occur during index calculation
#[derive(Error, Debug)]
pub enum CalculationError {
    /// A recognised metal was given a value that is not a JSON number
    #[error("concentration for '{0}' is not a number")]
    NonNumeric(String),

    /// A recognised metal was given a negative concentration
    #[error("concentration for '{metal}' is negative ({value})")]
    NegativeConcentration {
        /// Key as supplied by the caller
        metal: String,
        /// Offending value
        value: f64,
    },

    /// The same metal was supplied more than once (e.g. by name and by symbol)
    #[error("concentration for {0} supplied more than once")]
    DuplicateMetal(crate::hmpi::Metal),

    /// None of the supplied keys named a known metal
    #[error("no recognised heavy metals in input (ignored: {})", .0.join(", "))]
    NoRecognisedMetals(Vec<String>),

    /// An index overflowed to a non-finite value
    #[error("{0} is not finite for the supplied concentrations")]
    NonFiniteIndex(&'static str),

    /// The report could not be converted to JSON
    #[error("failed to serialize index report: {0}")]
    Serialization(#[from] serde_json::Error),
}
