pub mod flag;
pub mod keyboard;
pub use crate::api::types::*;
pub use flag::{Truthy, deserialize_truthy};
