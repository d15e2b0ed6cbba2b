//! Core types for the campus dashboard.
//!
//! This crate defines the domain data model shared by the state store,
//! the view-model projections, and the web frontend, plus the seed data
//! the application boots with.

use serde::{Deserialize, Serialize};

/// Role of a platform user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access, including the admin views
    Admin,
    /// Regular learner
    Student,
    /// Course instructor
    Teacher,
}

impl Role {
    /// Display label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Student => "Student",
            Role::Teacher => "Teacher",
        }
    }
}

/// Account status of a managed user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Blocked,
}

impl UserStatus {
    /// The complement of this status.
    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Blocked,
            UserStatus::Blocked => UserStatus::Active,
        }
    }
}

/// The user signed in for the current session.
///
/// A singleton; immutable for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// A course offered on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier, monotonically assigned
    pub id: u32,
    /// Unique among courses
    pub title: String,
    pub description: String,
    /// Completion percentage, 0-100
    pub progress: u8,
    /// Whether the session user has joined this course
    pub enrolled: bool,
}

/// A registered user as seen by the administrator views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

/// The session user the application boots with.
pub fn seed_session_user() -> SessionUser {
    SessionUser {
        id: 1,
        name: "Juan Pérez".to_string(),
        email: "juan@example.com".to_string(),
        role: Role::Admin,
    }
}

/// The course catalog the application boots with.
pub fn seed_courses() -> Vec<Course> {
    vec![
        Course {
            id: 1,
            title: "Learn Python".to_string(),
            description: "Master the fundamentals of Python.".to_string(),
            progress: 75,
            enrolled: true,
        },
        Course {
            id: 2,
            title: "JavaScript Basics".to_string(),
            description: "Build interactive web applications.".to_string(),
            progress: 30,
            enrolled: true,
        },
        Course {
            id: 3,
            title: "HTML and CSS".to_string(),
            description: "Design modern web pages.".to_string(),
            progress: 90,
            enrolled: false,
        },
    ]
}

/// The registered users the application boots with.
pub fn seed_users() -> Vec<ManagedUser> {
    let user = |id: u32, name: &str, email: &str, role: Role, status: UserStatus| ManagedUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
    };

    vec![
        user(1, "Juan Pérez", "juan@example.com", Role::Student, UserStatus::Active),
        user(2, "María Gómez", "maria@example.com", Role::Admin, UserStatus::Active),
        user(3, "Carlos López", "carlos@example.com", Role::Student, UserStatus::Blocked),
        user(4, "Ana Martínez", "ana@example.com", Role::Student, UserStatus::Active),
        user(5, "Pedro Sánchez", "pedro@example.com", Role::Teacher, UserStatus::Active),
        user(6, "Lucía Ramírez", "lucia@example.com", Role::Student, UserStatus::Blocked),
        user(7, "José García", "jose@example.com", Role::Admin, UserStatus::Active),
        user(8, "Sofía Díaz", "sofia@example.com", Role::Student, UserStatus::Active),
        user(9, "Miguel Torres", "miguel@example.com", Role::Student, UserStatus::Blocked),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_toggled_is_complement() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Blocked);
        assert_eq!(UserStatus::Blocked.toggled(), UserStatus::Active);
    }

    #[test]
    fn test_status_toggled_twice_restores() {
        for status in [UserStatus::Active, UserStatus::Blocked] {
            assert_eq!(status.toggled().toggled(), status);
        }
    }

    #[test]
    fn test_seed_session_user_is_admin() {
        let user = seed_session_user();

        assert_eq!(user.id, 1);
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_seed_courses_shape() {
        let courses = seed_courses();

        assert_eq!(courses.len(), 3);
        assert_eq!(courses.iter().filter(|c| c.enrolled).count(), 2);
        assert!(courses.iter().all(|c| c.progress <= 100));

        // Ids are unique
        let mut ids: Vec<u32> = courses.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_seed_users_shape() {
        let users = seed_users();

        assert_eq!(users.len(), 9);
        assert_eq!(
            users.iter().filter(|u| u.status == UserStatus::Active).count(),
            6
        );
        assert_eq!(
            users.iter().filter(|u| u.status == UserStatus::Blocked).count(),
            3
        );
    }

    #[test]
    fn test_course_serialization() {
        let course = seed_courses().remove(0);

        let json = serde_json::to_string(&course).unwrap();
        let parsed: Course = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, course);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Admin.label(), "Admin");
        assert_eq!(Role::Student.label(), "Student");
        assert_eq!(Role::Teacher.label(), "Teacher");
    }

    #[test]
    fn test_role_serializes_snake_case() {
        let json = serde_json::to_string(&Role::Student).unwrap();
        assert_eq!(json, "\"student\"");
    }
}
