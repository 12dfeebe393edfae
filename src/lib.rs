pub mod cli;
pub mod error;
pub mod estimator;
pub mod interface;
pub mod models;
pub mod tables;

pub use error::{ChurrascoError, Result};
pub use estimator::Estimator;
pub use models::{Breakdown, EstimateRequest, EventRequest};
pub use tables::PriceTables;
