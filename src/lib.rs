mod error;
mod features;
mod forecaster;
mod model;
mod stream;
mod types;

pub use error::BikecastError;

pub use features::*;
pub use forecaster::*;

pub use model::error::ModelError;
pub use model::regression::RegressionModel;
pub use model::store::{ModelStore, DEFAULT_MODEL_DIR};

pub use stream::error::StreamError;
pub use stream::record::{Record, RecordValue};
pub use stream::writer::{JsonLinesStream, MemoryStream, RecordBuffer, Stream, StreamExt};

pub use types::bikes::*;
pub use types::forecast::*;
pub use types::horizon::*;
pub use types::weather::*;
