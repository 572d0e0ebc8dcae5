//! User model.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use chrono::Utc;

use super::Model;
use crate::domain::User;
use crate::infrastructure::Collection;

/// Live user bound to the user collection
#[derive(Debug, Clone)]
pub struct UserModel {
    record: User,
    users: Arc<Collection<User>>,
}

impl UserModel {
    /// Wrap `data`, stamping fresh timestamps when it is unsaved
    pub fn new(mut data: User, users: Arc<Collection<User>>) -> Self {
        if data.id.is_none() {
            let now = Utc::now();
            data.created_at = now;
            data.updated_at = now;
        }
        Self { record: data, users }
    }

    /// Find a user by email address
    pub fn by_email(&self, email: &str) -> Option<User> {
        self.users.find(|user| user.email == email)
    }

    /// Unwrap the working copy
    pub fn into_record(self) -> User {
        self.record
    }
}

impl Model for UserModel {
    type Record = User;

    fn store(&self) -> &Arc<Collection<User>> {
        &self.users
    }

    fn record(&self) -> &User {
        &self.record
    }

    fn record_mut(&mut self) -> &mut User {
        &mut self.record
    }
}

impl Deref for UserModel {
    type Target = User;

    fn deref(&self) -> &User {
        &self.record
    }
}

impl DerefMut for UserModel {
    fn deref_mut(&mut self) -> &mut User {
        &mut self.record
    }
}
