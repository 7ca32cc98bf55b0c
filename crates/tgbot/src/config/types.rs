use once_cell::sync::Lazy;
use serde::{self, Deserialize, Serialize};
use std::borrow::Cow;

/// Environment variable with the path to the TOML config file
pub static APP_FOLDER: &str = "TGBOT_CONFIG";
pub static CONFIG: Lazy<Config> = Lazy::new(Config::new);
/// Configuration file
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    #[serde(default)]
    pub keyboard: KeyboardConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Keyboard settings.
///
/// The flags are only applied through `ReplyKeyboardOptions::from_config`;
/// `ReplyKeyboardMarkup::new` always starts with every flag `false`.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub struct KeyboardConfig {
    /// `resize_keyboard` used by `ReplyKeyboardOptions::from_config`
    #[serde(default)]
    pub resize_keyboard: bool,
    /// `one_time_keyboard` used by `ReplyKeyboardOptions::from_config`
    #[serde(default)]
    pub one_time_keyboard: bool,
    /// `selective` used by `ReplyKeyboardOptions::from_config`
    #[serde(default)]
    pub selective: bool,
    /// Row length at which `add_button` opens a new row (0 means no limit)
    #[serde(default = "default_max_buttons_per_row")]
    pub max_buttons_per_row: usize,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            resize_keyboard: false,
            one_time_keyboard: false,
            selective: false,
            max_buttons_per_row: default_max_buttons_per_row(),
        }
    }
}

fn default_max_buttons_per_row() -> usize {
    8
}

/// Output format of the `fmt` layer
#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Full,
    Json,
}

/// Logging variables
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct LogConfig {
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_filter_default")]
    pub filter_default: Cow<'static, str>,
    #[serde(default = "default_self_directive")]
    pub self_directive: Cow<'static, str>,
    #[serde(default = "default_ansi")]
    pub ansi: bool,
    #[serde(default)]
    pub directives: Vec<Cow<'static, str>>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter_default: default_filter_default(),
            self_directive: default_self_directive(),
            ansi: default_ansi(),
            directives: Vec::new(),
        }
    }
}

fn default_filter_default() -> Cow<'static, str> {
    Cow::Borrowed("info")
}
fn default_self_directive() -> Cow<'static, str> {
    Cow::Borrowed("debug")
}
fn default_ansi() -> bool {
    true
}
