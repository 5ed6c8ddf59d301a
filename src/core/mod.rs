pub mod config;
pub mod error;
pub mod types;

pub use config::{BoutConfig, RoundCount, TraceMode};
pub use error::{BoutError, Result};
pub use types::{Corner, FightClock, FighterId};
