//! Login gate guarding the dashboard. Credentials are fixed; there is no lockout.

use thiserror::Error;

pub const VALID_IDENTIFIER: &str = "admin";
pub const VALID_SECRET: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid Username or Password!")]
    InvalidCredentials,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateField {
    Identifier,
    Secret,
}

impl GateField {
    pub fn toggle(self) -> Self {
        match self {
            Self::Identifier => Self::Secret,
            Self::Secret => Self::Identifier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    AwaitingInput,
    ErrorShown,
}

/// Case-sensitive comparison against the fixed credentials.
pub fn verify(identifier: &str, secret: &str) -> Result<(), AuthError> {
    if identifier == VALID_IDENTIFIER && secret == VALID_SECRET {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionGate {
    identifier: String,
    secret: String,
    error: Option<AuthError>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: GateField) -> &str {
        match field {
            GateField::Identifier => &self.identifier,
            GateField::Secret => &self.secret,
        }
    }

    fn field_mut(&mut self, field: GateField) -> &mut String {
        match field {
            GateField::Identifier => &mut self.identifier,
            GateField::Secret => &mut self.secret,
        }
    }

    // Edits leave `error` alone: a failed attempt stays visible until the next submit.
    pub fn push(&mut self, field: GateField, c: char) {
        self.field_mut(field).push(c);
    }

    pub fn pop(&mut self, field: GateField) -> Option<char> {
        self.field_mut(field).pop()
    }

    pub fn state(&self) -> GateState {
        if self.error.is_some() {
            GateState::ErrorShown
        } else {
            GateState::AwaitingInput
        }
    }

    pub fn error(&self) -> Option<AuthError> {
        self.error
    }

    /// Check the current fields. On failure the error is recorded for display.
    pub fn attempt_login(&mut self) -> Result<(), AuthError> {
        match verify(&self.identifier, &self.secret) {
            Ok(()) => {
                self.error = None;
                tracing::info!(user = %self.identifier, "login accepted");
                Ok(())
            }
            Err(e) => {
                self.error = Some(e);
                tracing::warn!(user = %self.identifier, "login rejected");
                Err(e)
            }
        }
    }
}
