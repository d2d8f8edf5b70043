//! Lookups the ledger needs from the rest of the console: who a member is,
//! and what a class is called. Visits copy these values at check-in.

use crate::errors::AppResult;
use crate::models::gym_class::{ClassSnapshot, GymClass};
use crate::models::member::{Member, MemberSnapshot};
use std::collections::HashMap;

pub trait MemberDirectory {
    fn resolve(&self, member_id: &str) -> AppResult<Option<MemberSnapshot>>;
}

pub trait ClassCatalog {
    fn resolve(&self, class_id: &str) -> AppResult<Option<ClassSnapshot>>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryDirectory {
    members: HashMap<String, Member>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, member: Member) {
        self.members.insert(member.id.clone(), member);
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Member> {
        self.members.get_mut(id)
    }
}

impl FromIterator<Member> for InMemoryDirectory {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().map(|m| (m.id.clone(), m)).collect(),
        }
    }
}

impl MemberDirectory for InMemoryDirectory {
    fn resolve(&self, member_id: &str) -> AppResult<Option<MemberSnapshot>> {
        Ok(self.members.get(member_id).map(MemberSnapshot::from))
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    classes: HashMap<String, GymClass>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, class: GymClass) {
        self.classes.insert(class.id.clone(), class);
    }
}

impl FromIterator<GymClass> for InMemoryCatalog {
    fn from_iter<I: IntoIterator<Item = GymClass>>(iter: I) -> Self {
        Self {
            classes: iter.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }
}

impl ClassCatalog for InMemoryCatalog {
    fn resolve(&self, class_id: &str) -> AppResult<Option<ClassSnapshot>> {
        Ok(self.classes.get(class_id).map(ClassSnapshot::from))
    }
}
