// Service exports
pub mod dataset;
pub mod store;

pub use dataset::{load_dataset, read_dataset, LoadError};
pub use store::{Dataset, DatasetStore};
