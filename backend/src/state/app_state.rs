// Application state shared with request handlers
// Holds the index calculator and the loaded configuration; nothing here is mutated per request

use crate::config::Config;
use crate::hmpi::{HmpiCalculator, IndexCalculator};
use std::fmt;
use std::sync::Arc;

/// Main application state
/// Read-only after startup, shared across requests behind an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Calculation collaborator invoked by the calculate endpoint
    pub calculator: Arc<dyn IndexCalculator>,
    /// Configuration the server was started with
    pub config: Config,
}

impl AppState {
    /// Create state using the HMPI calculator configured from `config`
    pub fn new(config: Config) -> Self {
        let calculator = HmpiCalculator::new(config.calculation.critical_hpi);
        Self::with_calculator(config, Arc::new(calculator))
    }

    /// Create state with a custom calculator
    pub fn with_calculator(config: Config, calculator: Arc<dyn IndexCalculator>) -> Self {
        Self { calculator, config }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hmpi::{CalculationError, ConcentrationMap};
    use serde_json::{json, Value};

    struct FixedCalculator;

    impl IndexCalculator for FixedCalculator {
        fn calculate(&self, _: &ConcentrationMap) -> Result<Value, CalculationError> {
            Ok(json!({ "fixed": true }))
        }
    }

    #[test]
    fn test_app_state_uses_configured_threshold() {
        let mut config = Config::default();
        config.calculation.critical_hpi = 1000.0;
        let state = AppState::new(config);

        let mut input = ConcentrationMap::new();
        input.insert("lead".to_string(), json!(0.05));
        let result = state.calculator.calculate(&input).unwrap();
        assert_eq!(result["classification"], "Safe");
    }

    #[test]
    fn test_app_state_with_custom_calculator() {
        let state = AppState::with_calculator(Config::default(), Arc::new(FixedCalculator));
        let result = state.calculator.calculate(&ConcentrationMap::new()).unwrap();
        assert_eq!(result, json!({ "fixed": true }));
    }
}
