use leptos::*;
use validator::{Validate, ValidationErrors};

pub const MIN_PASSWORD_LEN: usize = 5;
pub const REGISTERED: &str = "Employee registered successfully";
pub const REGISTER_FAILED: &str = "Failed to register employee";

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct RegistrationInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    // Keep in step with MIN_PASSWORD_LEN.
    #[validate(length(min = 5))]
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooShort(usize),
}

impl FieldError {
    pub fn message(self) -> String {
        match self {
            FieldError::Required => "This field is required.".to_string(),
            FieldError::InvalidEmail => "Enter a valid email address.".to_string(),
            FieldError::TooShort(min) => format!("Must be at least {} characters.", min),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl RegistrationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Field-level errors for `input`. Name and email are judged without
/// surrounding whitespace.
pub fn validate(input: &RegistrationInput) -> RegistrationErrors {
    let trimmed = RegistrationInput {
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        password: input.password.clone(),
    };
    let failed = match trimmed.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };
    let has_error = |field: &str| failed.errors().contains_key(field);

    RegistrationErrors {
        name: has_error("name").then_some(FieldError::Required),
        email: if trimmed.email.is_empty() {
            Some(FieldError::Required)
        } else {
            has_error("email").then_some(FieldError::InvalidEmail)
        },
        password: if trimmed.password.is_empty() {
            Some(FieldError::Required)
        } else {
            has_error("password").then_some(FieldError::TooShort(MIN_PASSWORD_LEN))
        },
    }
}

#[derive(Clone, Copy)]
pub struct RegistrationFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for RegistrationFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl RegistrationFormState {
    pub fn snapshot(&self) -> RegistrationInput {
        RegistrationInput {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        }
    }

    /// Tracked validation of the current values.
    pub fn errors(&self) -> RegistrationErrors {
        validate(&RegistrationInput {
            name: self.name.get(),
            email: self.email.get(),
            password: self.password.get(),
        })
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
    }
}
