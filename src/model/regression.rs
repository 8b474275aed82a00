//! The deserialized regression model and its predict path.

use crate::model::error::ModelError;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// A pre-trained linear regression model.
///
/// The model is trained elsewhere and shipped as a bincode-serde file; this
/// crate only deserializes it and calls [`predict`](RegressionModel::predict).
/// Each model names the feature columns it was trained on and carries one
/// coefficient per column plus an intercept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionModel {
    name: String,
    columns: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl RegressionModel {
    /// Assembles a model from its parts, checking the coefficient arity.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CoefficientMismatch`] when the number of
    /// coefficients does not match the number of feature columns.
    pub fn new(
        name: impl Into<String>,
        columns: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if columns.len() != coefficients.len() {
            return Err(ModelError::CoefficientMismatch {
                model: name,
                columns: columns.len(),
                coefficients: coefficients.len(),
            });
        }
        Ok(Self {
            name,
            columns,
            coefficients,
            intercept,
        })
    }

    /// The model's name, used in logs and error context.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The feature columns the model reads, in training order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Predicts from row 0 of the given feature frame.
    ///
    /// The model selects its own columns from the frame, so the frame may
    /// carry more columns than the model reads. Columns are cast to `f64`
    /// before the affine combination.
    ///
    /// # Errors
    ///
    /// Fails when a named column is absent, non-numeric, or holds no value.
    pub fn predict(&self, features: &DataFrame) -> Result<f64, ModelError> {
        let mut prediction = self.intercept;

        for (name, coefficient) in self.columns.iter().zip(&self.coefficients) {
            let column = features
                .column(name)
                .map_err(|e| ModelError::FeatureColumnNotFound {
                    model: self.name.clone(),
                    column: name.clone(),
                    source: e,
                })?;
            let value = column
                .cast(&DataType::Float64)
                .and_then(|cast| cast.f64().map(|ca| ca.get(0)))
                .map_err(|e| ModelError::FeatureCast {
                    model: self.name.clone(),
                    column: name.clone(),
                    source: e,
                })?
                .ok_or_else(|| ModelError::MissingFeatureValue {
                    model: self.name.clone(),
                    column: name.clone(),
                })?;

            prediction += coefficient * value;
        }

        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> RegressionModel {
        RegressionModel::new(
            "ML_1h_Forecast",
            vec!["hour".to_string(), "dayofweek".to_string()],
            vec![2.0, 3.0],
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn test_predict_affine_combination() {
        let features = df!("hour" => [14i32], "dayofweek" => [4i32]).unwrap();
        let prediction = sample_model().predict(&features).unwrap();
        assert_eq!(prediction, 1.0 + 2.0 * 14.0 + 3.0 * 4.0);
    }

    #[test]
    fn test_predict_ignores_extra_columns() {
        let features = df!(
            "hour" => [14i32],
            "dayofweek" => [4i32],
            "condition_24" => ["Sunny"],
        )
        .unwrap();
        assert!(sample_model().predict(&features).is_ok());
    }

    #[test]
    fn test_predict_missing_column() {
        let features = df!("hour" => [14i32]).unwrap();
        let err = sample_model().predict(&features).unwrap_err();
        assert!(matches!(err, ModelError::FeatureColumnNotFound { .. }));
    }

    #[test]
    fn test_predict_empty_frame() {
        let features = df!(
            "hour" => Vec::<i32>::new(),
            "dayofweek" => Vec::<i32>::new(),
        )
        .unwrap();
        let err = sample_model().predict(&features).unwrap_err();
        assert!(matches!(err, ModelError::MissingFeatureValue { .. }));
    }

    #[test]
    fn test_new_rejects_arity_mismatch() {
        let err = RegressionModel::new(
            "ML_1h_Forecast",
            vec!["hour".to_string()],
            vec![2.0, 3.0],
            1.0,
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::CoefficientMismatch { .. }));
    }
}
