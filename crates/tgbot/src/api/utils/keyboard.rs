//! Constructors and serialization for [`ReplyKeyboardMarkup`] and [`Button`]
use crate::api::types::*;
use crate::api::utils::flag::Truthy;
use crate::config::{CONFIG, KeyboardConfig};
use crate::error::{BotError, Result};
use serde_json::Value;
use tracing::{debug, trace, warn};

impl ReplyMarkup for ReplyKeyboardMarkup {
    /// # Convert [`ReplyKeyboardMarkup`] to a key/value mapping
    /// Flags and extra fields come from the base mapping, `keyboard` is
    /// rebuilt button by button with [`Button::to_value`].
    fn to_dict(&self) -> Result<Dict> {
        let mut data = base_dict(self)?;
        // Rebuilt on purpose: each element goes through `Button::to_value`
        // rather than relying on the untagged serde form.
        let keyboard = self
            .keyboard
            .iter()
            .map(|row| {
                row.iter()
                    .map(Button::to_value)
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Array)
            })
            .collect::<Result<Vec<_>>>()?;
        data.insert(KEYBOARD.to_string(), Value::Array(keyboard));
        debug!(
            rows = self.keyboard.len(),
            extra = self.extra.len(),
            "Reply keyboard serialized"
        );
        Ok(data)
    }
}

impl TryFrom<&ReplyKeyboardMarkup> for String {
    type Error = BotError;
    /// # Convert [`ReplyKeyboardMarkup`] to the `reply_markup` JSON string
    fn try_from(markup: &ReplyKeyboardMarkup) -> Result<Self> {
        markup.to_json()
    }
}

impl ReplyKeyboardMarkup {
    /// # Create new [`ReplyKeyboardMarkup`]
    /// Rows are stored as given, all flags are `false`
    /// ## Parameters
    /// - `keyboard`: rows of anything convertible into [`Button`]
    pub fn new<R, B>(keyboard: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = B>,
        B: Into<Button>,
    {
        Self {
            keyboard: keyboard
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            ..Default::default()
        }
    }
    /// # Create new [`ReplyKeyboardMarkup`] with all flags set at once
    pub fn with_options<R, B>(
        keyboard: impl IntoIterator<Item = R>,
        options: ReplyKeyboardOptions,
    ) -> Self
    where
        R: IntoIterator<Item = B>,
        B: Into<Button>,
    {
        let mut markup = Self::new(keyboard);
        markup.set_options(options);
        markup
    }
    /// # Keyboard with a single button
    pub fn from_button(button: impl Into<Button>) -> Self {
        Self::new([[button]])
    }
    /// # Keyboard with a single row
    pub fn from_row<B: Into<Button>>(buttons: impl IntoIterator<Item = B>) -> Self {
        Self::new([buttons])
    }
    /// # Keyboard with one button per row
    pub fn from_column<B: Into<Button>>(buttons: impl IntoIterator<Item = B>) -> Self {
        Self::new(buttons.into_iter().map(|b| [b]))
    }
    /// Sets the field `resize_keyboard`
    pub fn with_resize_keyboard(mut self, value: impl Truthy) -> Self {
        self.resize_keyboard = value.truthy();
        self
    }
    /// Sets the field `one_time_keyboard`
    pub fn with_one_time_keyboard(mut self, value: impl Truthy) -> Self {
        self.one_time_keyboard = value.truthy();
        self
    }
    /// Sets the field `selective`
    pub fn with_selective(mut self, value: impl Truthy) -> Self {
        self.selective = value.truthy();
        self
    }
    /// Current display flags
    pub fn options(&self) -> ReplyKeyboardOptions {
        ReplyKeyboardOptions {
            resize_keyboard: self.resize_keyboard,
            one_time_keyboard: self.one_time_keyboard,
            selective: self.selective,
        }
    }
    /// Overwrite all display flags
    pub fn set_options(&mut self, options: ReplyKeyboardOptions) {
        self.resize_keyboard = options.resize_keyboard;
        self.one_time_keyboard = options.one_time_keyboard;
        self.selective = options.selective;
    }
    /// # Add a wire field this type does not model
    /// ## Errors
    /// - [`BotError::Validation`] if `key` is one of [`RESERVED_KEYS`]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            warn!(key = %key, "Rejected reserved key as extra field");
            return Err(BotError::Validation(format!(
                "`{}` is a reserved reply keyboard field",
                key
            )));
        }
        self.extra.insert(key, value.into());
        Ok(self)
    }
    /// Extra wire fields, including unknown ones met while deserializing
    pub fn extra(&self) -> &ExtraFields {
        &self.extra
    }
    /// # Append empty row to [`ReplyKeyboardMarkup`]
    pub fn add_row(&mut self) -> &mut Self {
        self.keyboard.push(vec![]);
        self
    }
    /// # Append button to last row of [`ReplyKeyboardMarkup`]
    /// If the row already holds `max_buttons_per_row` buttons from
    /// [`CONFIG`], a new row is added
    pub fn add_button(&mut self, button: impl Into<Button>) -> &mut Self {
        self.add_button_with_limit(button, CONFIG.keyboard.max_buttons_per_row)
    }
    /// # Append button to last row with an explicit row limit
    /// `limit` of 0 never wraps
    pub fn add_button_with_limit(&mut self, button: impl Into<Button>, limit: usize) -> &mut Self {
        let wrap = match self.keyboard.last() {
            None => true,
            Some(row) => limit > 0 && row.len() >= limit,
        };
        if wrap {
            trace!(rows = self.keyboard.len(), limit, "Opening new keyboard row");
            self.add_row();
        }
        if let Some(row) = self.keyboard.last_mut() {
            row.push(button.into());
        }
        self
    }
}

impl ReplyKeyboardOptions {
    /// Flags taken from the `[keyboard]` config section
    pub fn from_config(cfg: &KeyboardConfig) -> Self {
        Self {
            resize_keyboard: cfg.resize_keyboard,
            one_time_keyboard: cfg.one_time_keyboard,
            selective: cfg.selective,
        }
    }
}

impl Button {
    /// # Wire form of the button
    /// - `Text` becomes a JSON string
    /// - `Structured` becomes the mapping from [`KeyboardButton::to_dict`]
    pub fn to_value(&self) -> Result<Value> {
        match self {
            Button::Text(text) => Ok(Value::String(text.clone())),
            Button::Structured(button) => button.to_dict().map(Value::Object),
        }
    }
}

impl From<&str> for Button {
    fn from(text: &str) -> Self {
        Button::Text(text.to_string())
    }
}

impl From<String> for Button {
    fn from(text: String) -> Self {
        Button::Text(text)
    }
}

impl From<KeyboardButton> for Button {
    fn from(button: KeyboardButton) -> Self {
        Button::Structured(button)
    }
}

impl KeyboardButton {
    /// Create new [`KeyboardButton`] sending its text when pressed
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
    /// Create new [`KeyboardButton`] sharing the user's phone number
    pub fn contact(text: impl Into<String>) -> Self {
        Self {
            request_contact: Some(true),
            ..Self::new(text)
        }
    }
    /// Create new [`KeyboardButton`] sharing the user's location
    pub fn location(text: impl Into<String>) -> Self {
        Self {
            request_location: Some(true),
            ..Self::new(text)
        }
    }
    /// # Add a wire field this type does not model
    /// ## Errors
    /// - [`BotError::Validation`] if `key` is one of [`BUTTON_RESERVED_KEYS`]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        let key = key.into();
        if BUTTON_RESERVED_KEYS.contains(&key.as_str()) {
            warn!(key = %key, "Rejected reserved key as extra button field");
            return Err(BotError::Validation(format!(
                "`{}` is a reserved keyboard button field",
                key
            )));
        }
        self.extra.insert(key, value.into());
        Ok(self)
    }
    /// Extra wire fields, including unknown ones met while deserializing
    pub fn extra(&self) -> &ExtraFields {
        &self.extra
    }
    /// Convert button into a key/value mapping
    pub fn to_dict(&self) -> Result<Dict> {
        base_dict(self)
    }
}
