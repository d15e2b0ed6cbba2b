//! In-memory state container for the campus dashboard.
//!
//! `CampusStore` owns the session user, the course catalog, and the
//! managed-user list, and exposes the mutations the UI is allowed to
//! perform. There is no ambient global state; callers own the store and
//! pass it to the view-model projections.

use core_types::{seed_courses, seed_session_user, seed_users, Course, ManagedUser, SessionUser};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from store mutations.
///
/// The `Display` strings double as the user-facing notification texts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Please fill in both the title and the description.")]
    MissingFields,

    #[error("A course with this title already exists. Please use a different title.")]
    DuplicateTitle(String),
}

/// Result type for store mutations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// The application's single in-memory data set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusStore {
    /// The signed-in user; immutable during a session.
    pub session: SessionUser,
    pub courses: Vec<Course>,
    pub users: Vec<ManagedUser>,
}

impl CampusStore {
    /// Create a store populated with the built-in seed data.
    pub fn seeded() -> Self {
        Self {
            session: seed_session_user(),
            courses: seed_courses(),
            users: seed_users(),
        }
    }

    /// Create a store from explicit parts.
    pub fn new(session: SessionUser, courses: Vec<Course>, users: Vec<ManagedUser>) -> Self {
        Self {
            session,
            courses,
            users,
        }
    }

    /// The identifier the next added course will receive.
    ///
    /// Max existing id + 1, or 1 for an empty catalog.
    pub fn next_course_id(&self) -> u32 {
        self.courses.iter().map(|c| c.id).max().map_or(1, |id| id + 1)
    }

    /// Add a course to the catalog.
    ///
    /// New courses start at progress 0 and are enrolled immediately.
    /// Fails if either field is empty or the title is already taken;
    /// titles are checked by exact match, at creation time only.
    pub fn add_course(&mut self, title: &str, description: &str) -> Result<&Course> {
        if title.is_empty() || description.is_empty() {
            return Err(StoreError::MissingFields);
        }
        if self.courses.iter().any(|c| c.title == title) {
            return Err(StoreError::DuplicateTitle(title.to_string()));
        }

        let course = Course {
            id: self.next_course_id(),
            title: title.to_string(),
            description: description.to_string(),
            progress: 0,
            enrolled: true,
        };
        self.courses.push(course);

        // Just pushed, so the last element exists.
        Ok(&self.courses[self.courses.len() - 1])
    }

    /// Remove a course by id, returning it.
    ///
    /// An absent id is a silent no-op.
    pub fn delete_course(&mut self, id: u32) -> Option<Course> {
        let index = self.courses.iter().position(|c| c.id == id)?;
        Some(self.courses.remove(index))
    }

    /// Flip a managed user between Active and Blocked, returning the
    /// updated user.
    ///
    /// An absent id is a silent no-op.
    pub fn toggle_user_status(&mut self, id: u32) -> Option<&ManagedUser> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        user.status = user.status.toggled();
        Some(user)
    }
}
