//! Single-field modal form models.
//!
//! The host renders these forms; the models own the input state and the
//! validation that gates the confirm button. A confirmed form yields a
//! [`ModalOutcome`] the host hands back to the editor.

use secrecy::SecretString;
use side_config_sdk::{CollectorKind, CollectorOutput, CollectorRequest, ModalOutcome};

/// Visual state of a form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Normal,
    Invalid,
}

/// Secret entry: value plus confirmation.
///
/// Valid when both inputs are non-empty and equal. While they differ, both
/// inputs are flagged invalid.
pub struct SecretCollector {
    field_name: String,
    value: String,
    confirmation: String,
}

impl SecretCollector {
    #[must_use]
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            value: String::new(),
            confirmation: String::new(),
        }
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_confirmation(&mut self, confirmation: impl Into<String>) {
        self.confirmation = confirmation.into();
    }

    /// State of both inputs; they are always flagged together.
    #[must_use]
    pub fn input_state(&self) -> InputState {
        if self.value == self.confirmation {
            InputState::Normal
        } else {
            InputState::Invalid
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.input_state() == InputState::Normal && !self.value.is_empty()
    }

    /// Confirm the form. Returns `Err(self)` while the confirm button is disabled.
    ///
    /// # Errors
    ///
    /// Returns the unchanged collector when the inputs are empty or differ.
    pub fn confirm(self) -> Result<CollectorOutput, Self> {
        if !self.is_valid() {
            return Err(self);
        }
        Ok(CollectorOutput::Secret(SecretString::from(self.value)))
    }
}

/// Text entry: one non-empty value.
pub struct TextCollector {
    field_name: String,
    value: String,
}

impl TextCollector {
    #[must_use]
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            value: String::new(),
        }
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.value.is_empty()
    }

    /// Confirm the form. Returns `Err(self)` while the confirm button is disabled.
    ///
    /// # Errors
    ///
    /// Returns the unchanged collector when the input is empty.
    pub fn confirm(self) -> Result<CollectorOutput, Self> {
        if !self.is_valid() {
            return Err(self);
        }
        Ok(CollectorOutput::Text(self.value))
    }
}

/// Either form, built from the editor's request.
pub enum Collector {
    Secret(SecretCollector),
    Text(TextCollector),
}

impl Collector {
    #[must_use]
    pub fn for_request(request: &CollectorRequest) -> Self {
        match request.kind {
            CollectorKind::Secret => Self::Secret(SecretCollector::new(request.field_name.as_str())),
            CollectorKind::Text => Self::Text(TextCollector::new(request.field_name.as_str())),
        }
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        match self {
            Self::Secret(c) => c.field_name(),
            Self::Text(c) => c.field_name(),
        }
    }

    /// Whether the confirm button is enabled.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Secret(c) => c.is_valid(),
            Self::Text(c) => c.is_valid(),
        }
    }

    /// Confirm the form into a modal outcome.
    ///
    /// # Errors
    ///
    /// Returns the unchanged collector while the form is invalid.
    pub fn submit(self) -> Result<ModalOutcome, Self> {
        match self {
            Self::Secret(c) => c
                .confirm()
                .map(ModalOutcome::Confirmed)
                .map_err(Self::Secret),
            Self::Text(c) => c.confirm().map(ModalOutcome::Confirmed).map_err(Self::Text),
        }
    }
}
