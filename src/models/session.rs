//! Explicit operator context handed to every mutating operation.

use super::role::Role;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub operator: String,
    pub role: Role,
}

impl Session {
    pub fn new(operator: impl Into<String>, role: Role) -> Self {
        Self {
            operator: operator.into(),
            role,
        }
    }

    pub fn require_attendance(&self, action: &str) -> AppResult<()> {
        if self.role.can_record_attendance() {
            Ok(())
        } else {
            Err(self.forbidden(action))
        }
    }

    pub fn require_directory_admin(&self, action: &str) -> AppResult<()> {
        if self.role.can_manage_directory() {
            Ok(())
        } else {
            Err(self.forbidden(action))
        }
    }

    fn forbidden(&self, action: &str) -> AppError {
        AppError::Forbidden {
            operator: format!("{} ({})", self.operator, self.role.to_db_str()),
            action: action.to_string(),
        }
    }
}
