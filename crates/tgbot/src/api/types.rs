//! API types
use crate::api::utils::flag::deserialize_truthy;
use crate::error::{BotError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire key of the button grid
pub const KEYBOARD: &str = "keyboard";
/// Wire key of the resize flag
pub const RESIZE_KEYBOARD: &str = "resize_keyboard";
/// Wire key of the one-time flag
pub const ONE_TIME_KEYBOARD: &str = "one_time_keyboard";
/// Wire key of the selective flag
pub const SELECTIVE: &str = "selective";
/// Keys owned by [`ReplyKeyboardMarkup`], never accepted as extra fields
pub const RESERVED_KEYS: [&str; 4] = [KEYBOARD, RESIZE_KEYBOARD, ONE_TIME_KEYBOARD, SELECTIVE];
/// Keys owned by [`KeyboardButton`], never accepted as extra fields
pub const BUTTON_RESERVED_KEYS: [&str; 3] = ["text", "request_contact", "request_location"];

/// Plain key/value mapping ready for JSON encoding
pub type Dict = Map<String, Value>;
/// Wire fields not modelled by a markup type
pub type ExtraFields = Map<String, Value>;
/// One row of reply keyboard buttons, left to right
pub type KeyboardRow = Vec<Button>;

/// Common scaffolding for every reply markup variant.
///
/// Markups are sent as the `reply_markup` request parameter, so each one
/// must reduce to a JSON object.
pub trait ReplyMarkup: Serialize {
    /// Convert markup into a plain key/value mapping
    fn to_dict(&self) -> Result<Dict> {
        base_dict(self)
    }
    /// Convert markup into a compact JSON string
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_dict()?)?)
    }
}

/// Serialize a wire object into its key/value mapping.
///
/// Absent optional fields are omitted, boolean flags are always present.
pub fn base_dict<T: Serialize + ?Sized>(value: &T) -> Result<Dict> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(BotError::Validation(format!(
            "Expected a JSON object, got `{}`",
            other
        ))),
    }
}

/// Keyboard button with optional request behaviour.
///
/// `request_contact` and `request_location` are mutually exclusive on the
/// Telegram side; this is not checked here.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct KeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_contact: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_location: Option<bool>,
    #[serde(flatten)]
    pub(crate) extra: ExtraFields,
}

/// Element of a reply keyboard row.
/// One of variants must be set:
/// - `Text` - plain text, sent as a JSON string
/// - `Structured` - [`KeyboardButton`], sent as a JSON object
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum Button {
    Text(String),
    Structured(KeyboardButton),
}

/// Display flags of a reply keyboard, all `false` by default
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReplyKeyboardOptions {
    /// Ask clients to fit the keyboard height to its rows
    pub resize_keyboard: bool,
    /// Ask clients to hide the keyboard after first use
    pub one_time_keyboard: bool,
    /// Show the keyboard to mentioned users and the replied-to sender only
    pub selective: bool,
}

/// Custom keyboard with reply options.
/// [More info](https://core.telegram.org/bots/api#replykeyboardmarkup)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ReplyKeyboardMarkup {
    /// Button rows, top to bottom
    pub keyboard: Vec<KeyboardRow>,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub resize_keyboard: bool,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub one_time_keyboard: bool,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub selective: bool,
    #[serde(flatten)]
    pub(crate) extra: ExtraFields,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_button_text_serde() {
        let b = serde_json::from_str::<Button>(r#""Yes""#);
        assert!(b.is_ok(), "{:?}", b.err());
        assert_eq!(b.unwrap(), Button::Text("Yes".to_string()));
    }

    #[test]
    fn test_button_structured_serde() {
        let json = r#"{ "text": "Share", "request_contact": true }"#;
        let b = serde_json::from_str::<Button>(json);
        assert!(b.is_ok(), "{:?}", b.err());
        match b.unwrap() {
            Button::Structured(kb) => {
                assert_eq!(kb.text, "Share");
                assert_eq!(kb.request_contact, Some(true));
                assert!(kb.request_location.is_none());
            }
            other => panic!("Expected Structured, got {:?}", other),
        }
    }

    #[test]
    fn test_button_invalid_shape() {
        let b = serde_json::from_str::<Button>("42");
        assert!(b.is_err());
    }

    #[test]
    fn test_keyboard_button_optional_fields_omitted() {
        let kb = KeyboardButton {
            text: "ok".to_string(),
            ..Default::default()
        };
        let val = serde_json::to_value(&kb).unwrap();
        assert_eq!(val, json!({ "text": "ok" }));
    }

    #[test]
    fn test_keyboard_button_unknown_fields_captured() {
        let json = r#"{ "text": "Poll", "request_poll": { "type": "quiz" } }"#;
        let kb = serde_json::from_str::<KeyboardButton>(json).unwrap();
        assert_eq!(kb.text, "Poll");
        assert_eq!(kb.extra["request_poll"], json!({ "type": "quiz" }));
        let val = serde_json::to_value(&kb).unwrap();
        assert_eq!(val, json!({ "text": "Poll", "request_poll": { "type": "quiz" } }));
    }

    #[test]
    fn test_markup_flags_default_on_missing() {
        let json = r#"{ "keyboard": [["A"]] }"#;
        let m = serde_json::from_str::<ReplyKeyboardMarkup>(json).unwrap();
        assert!(!m.resize_keyboard);
        assert!(!m.one_time_keyboard);
        assert!(!m.selective);
        assert!(m.extra.is_empty());
    }

    #[test]
    fn test_markup_missing_keyboard_is_error() {
        let json = r#"{ "resize_keyboard": true }"#;
        let m = serde_json::from_str::<ReplyKeyboardMarkup>(json);
        assert!(m.is_err());
    }

    #[test]
    fn test_markup_truthy_flags() {
        let json = r#"{
            "keyboard": [],
            "resize_keyboard": 1,
            "one_time_keyboard": "",
            "selective": "x"
        }"#;
        let m = serde_json::from_str::<ReplyKeyboardMarkup>(json).unwrap();
        assert!(m.resize_keyboard);
        assert!(!m.one_time_keyboard);
        assert!(m.selective);
    }

    #[test]
    fn test_markup_unknown_fields_captured() {
        let json = r#"{
            "keyboard": [["A"]],
            "is_persistent": true,
            "input_field_placeholder": "Pick one"
        }"#;
        let m = serde_json::from_str::<ReplyKeyboardMarkup>(json).unwrap();
        assert_eq!(m.extra.len(), 2);
        assert_eq!(m.extra["is_persistent"], json!(true));
        assert_eq!(m.extra["input_field_placeholder"], json!("Pick one"));
    }

    #[test]
    fn test_base_dict_rejects_non_object() {
        let res = base_dict("plain");
        match res {
            Err(BotError::Validation(msg)) => assert!(msg.contains("JSON object")),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_options_default_all_false() {
        let o = ReplyKeyboardOptions::default();
        assert!(!o.resize_keyboard && !o.one_time_keyboard && !o.selective);
    }
}
