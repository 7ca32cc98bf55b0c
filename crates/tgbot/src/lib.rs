#![forbid(unsafe_code)]
//! # Telegram Bot API reply keyboards
//! This crate provides the [`ReplyKeyboardMarkup`] object of the [Telegram Bot API]
//! and its conversion into the plain JSON mapping sent as `reply_markup`.
//! JSON Serialization and Deserialization [`serde_json`].
//! Configuration is read from a TOML file named by `TGBOT_CONFIG`.
//!
//! ```toml
//! [dependencies]
//! tgbot = "0.1"
//! ```
//!
//! ```
//! use tgbot::prelude::*;
//!
//! let markup = ReplyKeyboardMarkup::new(vec![vec!["A", "B"], vec!["C"]])
//!     .with_resize_keyboard(true);
//! let dict = markup.to_dict().unwrap();
//! assert_eq!(dict["keyboard"], serde_json::json!([["A", "B"], ["C"]]));
//! assert_eq!(dict["selective"], serde_json::json!(false));
//! ```
//!
//! [Telegram Bot API]: https://core.telegram.org/bots/api#replykeyboardmarkup
//! [`serde_json`]: https://docs.rs/serde_json

pub mod config;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod prelude;
/// API objects
mod api {
    pub mod types;
    pub mod utils;
}

pub use self::api::types::*;
pub use self::api::utils::flag::{Truthy, deserialize_truthy};
