use crate::errors::{AppError, AppResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
    Suspended,
}

impl MemberStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Inactive => "inactive",
            MemberStatus::Suspended => "suspended",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Some(MemberStatus::Active),
            "inactive" => Some(MemberStatus::Inactive),
            "suspended" => Some(MemberStatus::Suspended),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub membership_type: String,
    pub status: MemberStatus,
}

/// The fields a visit copies from the directory at check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSnapshot {
    pub name: String,
    pub membership_type: String,
}

impl From<&Member> for MemberSnapshot {
    fn from(m: &Member) -> Self {
        Self {
            name: m.name.clone(),
            membership_type: m.membership_type.clone(),
        }
    }
}

/// Validated input for the `member add` form.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub id: String,
    pub name: String,
    pub membership_type: String,
}

impl NewMember {
    pub fn parse(id: &str, name: &str, membership_type: &str) -> AppResult<Self> {
        let id = required("member id", id)?;
        let name = required("member name", name)?;
        let membership_type = required("membership type", membership_type)?;
        Ok(Self {
            id,
            name,
            membership_type,
        })
    }
}

pub(crate) fn required(field: &str, value: &str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(v.to_string())
}
