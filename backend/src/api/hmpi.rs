//! Heavy metal pollution index API handlers
//!
//! `POST /api/hmpi/calculate` validates the concentration map and hands it to
//! the configured calculator; the calculator's output is returned unchanged.

use crate::error::AppError;
use crate::hmpi::{reference_standards, ConcentrationMap, Standard};
use crate::state::AppState;
use axum::{extract::State, response::Json};
use serde_json::Value;
use std::sync::Arc;

/// Request field holding the concentration map
pub const CONCENTRATIONS_FIELD: &str = "heavyMetalConcentrations";

/// Extract the concentration map from a request body
///
/// # Returns
/// * `Ok(&ConcentrationMap)` - Field is present and a non-empty object
/// * `Err(AppError::InvalidConcentrations)` - Field is missing, empty, or not an object
pub fn extract_concentrations(body: &Value) -> Result<&ConcentrationMap, AppError> {
    match body.get(CONCENTRATIONS_FIELD) {
        Some(Value::Object(map)) if !map.is_empty() => Ok(map),
        _ => Err(AppError::InvalidConcentrations),
    }
}

/// POST /api/hmpi/calculate - Compute pollution indices
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let concentrations = extract_concentrations(&body)?;

    let result = state.calculator.calculate(concentrations)?;
    tracing::info!(metals = concentrations.len(), "Calculated pollution indices");

    Ok(Json(result))
}

/// GET /api/hmpi/standards - Reference standards used by the calculator
pub async fn list_standards() -> Json<Vec<Standard>> {
    Json(reference_standards())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_valid_map() {
        let body = json!({ "heavyMetalConcentrations": { "Pb": 0.05 } });
        let map = extract_concentrations(&body).unwrap();
        assert_eq!(map.get("Pb"), Some(&json!(0.05)));
    }

    #[test]
    fn test_extract_rejects_missing_and_wrong_types() {
        for body in [
            json!({}),
            json!({ "heavyMetalConcentrations": "bad" }),
            json!({ "heavyMetalConcentrations": 42 }),
            json!({ "heavyMetalConcentrations": [0.05] }),
            json!({ "heavyMetalConcentrations": null }),
            json!({ "heavyMetalConcentrations": {} }),
            json!([1, 2, 3]),
            json!("heavyMetalConcentrations"),
        ] {
            assert!(
                matches!(
                    extract_concentrations(&body),
                    Err(AppError::InvalidConcentrations)
                ),
                "expected rejection for {body}"
            );
        }
    }
}
