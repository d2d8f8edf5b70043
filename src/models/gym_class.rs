use super::member::required;
use crate::errors::{AppError, AppResult};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GymClass {
    pub id: String,
    pub name: String,
    pub max_capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSnapshot {
    pub name: String,
}

impl From<&GymClass> for ClassSnapshot {
    fn from(c: &GymClass) -> Self {
        Self {
            name: c.name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewGymClass {
    pub id: String,
    pub name: String,
    pub max_capacity: u32,
}

impl NewGymClass {
    pub fn parse(id: &str, name: &str, max_capacity: Option<u32>) -> AppResult<Self> {
        let max_capacity = max_capacity.unwrap_or(20);
        if max_capacity == 0 {
            return Err(AppError::Validation(
                "class capacity must be at least 1".into(),
            ));
        }
        Ok(Self {
            id: required("class id", id)?,
            name: required("class name", name)?,
            max_capacity,
        })
    }
}
