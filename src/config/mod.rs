pub mod settings;
pub mod weights;

pub use settings::{AppConfig, SourceSettings};
pub use weights::WeightConfig;
