//! On-disk model storage: bincode-serde files, one per horizon, with an
//! in-memory cache of decoded models.

use crate::model::error::ModelError;
use crate::model::regression::RegressionModel;
use crate::types::horizon::Horizon;
use bincode::config::{Configuration, Fixint, LittleEndian};
use log::info;
use std::collections::{hash_map::Entry, HashMap};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tokio::task;

/// Default directory the shipped models live in, relative to the working
/// directory.
pub const DEFAULT_MODEL_DIR: &str = "MLModels";

const MODEL_FILE_EXTENSION: &str = "bin";
const BINCODE_CONFIG: Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_fixed_int_encoding();

/// Loads and caches the regression models backing each [`Horizon`].
pub struct ModelStore {
    model_dir: PathBuf,
    cache: Mutex<HashMap<Horizon, RegressionModel>>,
}

impl ModelStore {
    /// Creates a store reading from the given directory.
    pub fn new(model_dir: &Path) -> Self {
        Self {
            model_dir: model_dir.to_path_buf(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Path of the model file backing the given horizon.
    pub fn model_path(&self, horizon: Horizon) -> PathBuf {
        self.model_dir.join(format!(
            "{}.{}",
            horizon.model_file_stem(),
            MODEL_FILE_EXTENSION
        ))
    }

    /// Gets the model for a horizon, loading it from disk on first use.
    pub async fn get(&self, horizon: Horizon) -> Result<RegressionModel, ModelError> {
        // Fast path: already decoded.
        {
            let cache = self.cache.lock().await;
            if let Some(model) = cache.get(&horizon) {
                return Ok(model.clone());
            }
        } // Lock released before the disk read.

        let loaded = self.load(horizon).await?;

        let mut cache = self.cache.lock().await;
        match cache.entry(horizon) {
            // Someone else loaded it while we were reading; use theirs.
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                entry.insert(loaded.clone());
                Ok(loaded)
            }
        }
    }

    async fn load(&self, horizon: Horizon) -> Result<RegressionModel, ModelError> {
        let path = self.model_path(horizon);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| ModelError::ModelRead(path.clone(), e))?;

        let decode_path = path.clone();
        let model = task::spawn_blocking(move || {
            bincode::serde::decode_from_slice::<RegressionModel, _>(&bytes, BINCODE_CONFIG)
                .map(|(model, _)| model)
                .map_err(|e| ModelError::ModelDecode(decode_path, Box::new(e)))
        })
        .await??;

        info!("Loaded model {} from {:?}", model.name(), path);
        Ok(model)
    }

    /// Encodes and writes a model to this store's directory.
    ///
    /// Training happens elsewhere; this is the write side used by tooling and
    /// test fixtures to lay out a model directory.
    pub async fn save(&self, horizon: Horizon, model: &RegressionModel) -> Result<(), ModelError> {
        let path = self.model_path(horizon);

        let owned = model.clone();
        let encoded = task::spawn_blocking(move || {
            bincode::serde::encode_to_vec(owned, BINCODE_CONFIG)
                .map_err(|e| ModelError::ModelEncode(Box::new(e)))
        })
        .await??;

        tokio::fs::create_dir_all(&self.model_dir)
            .await
            .map_err(|e| ModelError::ModelDirCreation(self.model_dir.clone(), e))?;
        tokio::fs::write(&path, &encoded)
            .await
            .map_err(|e| ModelError::ModelWrite(path.clone(), e))?;

        info!(
            "Wrote model {} ({} bytes) to {:?}",
            model.name(),
            encoded.len(),
            path
        );
        Ok(())
    }
}
