//! The bike availability snapshot wrapper.

use crate::error::BikecastError;
use crate::types::weather::{get_column, read_snapshot_csv};
use polars::prelude::*;
use std::path::Path;

/// Column holding the current total of available bikes.
pub const COL_TOTAL_BIKES: &str = "total_num_bikes_available";

/// A snapshot of current bike availability: a single row holding the total
/// number of available bikes in the [`COL_TOTAL_BIKES`] column.
#[derive(Debug, Clone)]
pub struct BikeFrame {
    /// The underlying Polars DataFrame containing the availability row.
    pub frame: DataFrame,
}

impl BikeFrame {
    /// Wraps an existing `DataFrame` holding the availability row.
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// Reads a bike snapshot from a headered CSV file.
    pub fn read_csv(path: &Path) -> Result<Self, BikecastError> {
        Ok(Self::new(read_snapshot_csv(path)?))
    }

    /// Whether the snapshot holds no rows at all.
    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    /// The current total of available bikes, read from row 0.
    ///
    /// # Errors
    ///
    /// Returns [`BikecastError::ColumnNotFound`] when the column is absent and
    /// [`BikecastError::MissingValue`] when it holds no value.
    pub fn total_available(&self) -> Result<i64, BikecastError> {
        get_column(&self.frame, COL_TOTAL_BIKES)?
            .cast(&DataType::Int64)?
            .i64()?
            .get(0)
            .ok_or_else(|| BikecastError::MissingValue {
                column: COL_TOTAL_BIKES.to_string(),
            })
    }
}
