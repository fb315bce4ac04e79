//! Explicit session state. A session is created by a successful credential
//! check, handed through the command handlers, and dropped when the command
//! finishes. There is no process-wide login state.

use crate::errors::{AppError, AppResult};
use crate::models::role::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Anonymous,
    Authenticated { email: String, role: Role },
}

impl Session {
    pub fn anonymous() -> Self {
        Session::Anonymous
    }

    pub fn login(email: impl Into<String>, role: Role) -> Self {
        Session::Authenticated {
            email: email.into(),
            role,
        }
    }

    pub fn logout(&mut self) {
        *self = Session::Anonymous;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn identity(&self) -> Option<&str> {
        match self {
            Session::Authenticated { email, .. } => Some(email),
            Session::Anonymous => None,
        }
    }

    /// Return the identity if the session is authenticated with `role`.
    pub fn require(&self, role: Role) -> AppResult<&str> {
        match self {
            Session::Authenticated { email, role: held } if *held == role => Ok(email),
            _ => Err(AppError::NotAuthorized(role.as_str())),
        }
    }
}
