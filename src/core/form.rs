//! Credential form state
//!
//! Holds the raw text of each field plus the one-way "touched" latch that turns
//! validation on after the first blur.

use derive_more::Display;

use super::validation::{Validity, validate_email, validate_name, validate_password};

/// A named piece of user-entered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display("email")]
    Email,
    #[display("password")]
    Password,
    #[display("name")]
    Name,
}

impl Field {
    /// Warning shown next to the field when it is invalid
    pub fn warning(self) -> &'static str {
        match self {
            Field::Email => "Please enter a valid email address.",
            Field::Password => {
                "Passwords must be at least 10 characters and combine two or more of letters, numbers and symbols."
            }
            Field::Name => "Please enter a valid name.",
        }
    }
}

/// Which operation the form submits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum FormMode {
    #[default]
    #[display("login")]
    Login,
    #[display("sign-up")]
    SignUp,
}

impl FormMode {
    /// Fields that must be valid before this mode can submit
    pub fn required_fields(self) -> &'static [Field] {
        match self {
            FormMode::Login => &[Field::Email, Field::Password],
            FormMode::SignUp => &[Field::Name, Field::Email, Field::Password],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormMode::Login => "Log in",
            FormMode::SignUp => "Sign up",
        }
    }

    /// The mode the "switch" link leads to
    pub fn other(self) -> Self {
        match self {
            FormMode::Login => FormMode::SignUp,
            FormMode::SignUp => FormMode::Login,
        }
    }
}

/// Field values and the touched latch of one form instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    email: String,
    password: String,
    name: String,
    touched: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Name => &self.name,
        }
    }

    /// Overwrite a field. Validation is not triggered.
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Name => &mut self.name,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self, field: Field) {
        self.update(field, String::new());
    }

    /// Set the touched latch. Returns true only on the first call.
    pub fn mark_touched(&mut self) -> bool {
        !std::mem::replace(&mut self.touched, true)
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Current validity of a field; unevaluated until the form is touched
    pub fn validity(&self, field: Field) -> Validity {
        if !self.touched {
            return Validity::Unevaluated;
        }
        match field {
            Field::Email => validate_email(&self.email),
            Field::Password => validate_password(&self.password),
            Field::Name => validate_name(&self.name),
        }
    }

    /// True iff every required field of `mode` is valid
    pub fn can_submit(&self, mode: FormMode) -> bool {
        mode.required_fields()
            .iter()
            .all(|field| self.validity(*field).is_valid())
    }
}
