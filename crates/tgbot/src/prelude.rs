//! Commonly used imports and re-exports.
pub use crate::api::types::*;
pub use crate::api::utils::*;
pub use crate::config::{CONFIG, Config, KeyboardConfig, LogConfig, LogFormat};
pub use crate::error::*;
#[cfg(feature = "logging")]
pub use crate::logging;
