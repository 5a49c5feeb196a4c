mod builder;
mod types;

mod cohort;
mod contract;
mod nep171;

pub use cohort::*;
pub use contract::*;
pub use nep171::*;

pub(crate) const STANDARD: &str = "conclavex";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
pub(crate) const COHORT: &str = "COHORT_UPDATE";
