use serde::Serialize;

/// Operator role, mirrors the roles of the front-desk console.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Trainer,
    Member,
}

impl Role {
    /// Convert enum → config/DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Trainer => "trainer",
            Role::Member => "member",
        }
    }

    /// Convert config/CLI string → enum (case-insensitive)
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "trainer" => Some(Role::Trainer),
            "member" => Some(Role::Member),
            _ => None,
        }
    }

    /// Admins and trainers both reach the attendance desk.
    pub fn can_record_attendance(&self) -> bool {
        matches!(self, Role::Admin | Role::Trainer)
    }

    pub fn can_manage_directory(&self) -> bool {
        matches!(self, Role::Admin)
    }
}
