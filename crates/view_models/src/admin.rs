//! Projections for the administrator views.

use chrono::{DateTime, Utc};
use core_types::UserStatus;
use serde::Serialize;
use store::CampusStore;

use crate::charts::{PieChart, PieSlice, COLOR_DANGER, COLOR_PRIMARY};

/// One row of the user-management table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRow {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role_label: String,
    pub status: UserStatus,
    /// Label of the row's toggle button.
    pub action_label: &'static str,
    /// Style variant of the toggle button.
    pub action_class: &'static str,
}

/// One card in the admin course list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminCourseCard {
    pub id: u32,
    pub title: String,
    pub description: String,
}

/// The admin statistics panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminStats {
    pub total_users: u32,
    pub active_users: u32,
    pub blocked_users: u32,
    pub total_courses: u32,
    /// Derived metric: sum(progress/100 * 10) over all courses, times 50.
    pub completed_lessons: u32,
    pub chart: PieChart,
    /// When these statistics were produced, formatted for display.
    pub updated_at: String,
}

/// The user-management table, one row per managed user.
pub fn user_rows(store: &CampusStore) -> Vec<UserRow> {
    store
        .users
        .iter()
        .map(|u| {
            let (action_label, action_class) = match u.status {
                UserStatus::Active => ("Block", "block-btn active"),
                UserStatus::Blocked => ("Unblock", "block-btn blocked"),
            };
            UserRow {
                id: u.id,
                name: u.name.clone(),
                email: u.email.clone(),
                role_label: u.role.label().to_string(),
                status: u.status,
                action_label,
                action_class,
            }
        })
        .collect()
}

/// The admin course list: every course, enrolled or not.
pub fn admin_course_cards(store: &CampusStore) -> Vec<AdminCourseCard> {
    store
        .courses
        .iter()
        .map(|c| AdminCourseCard {
            id: c.id,
            title: c.title.clone(),
            description: c.description.clone(),
        })
        .collect()
}

/// The admin statistics panel.
///
/// The caller supplies the clock so the projection stays deterministic.
pub fn admin_stats(store: &CampusStore, now: DateTime<Utc>) -> AdminStats {
    let active_users = store
        .users
        .iter()
        .filter(|u| u.status == UserStatus::Active)
        .count() as u32;
    let blocked_users = store.users.len() as u32 - active_users;

    // sum(progress/100 * 10) * 50 reduces to sum(progress) * 5, which
    // keeps the arithmetic exact.
    let progress_sum: u32 = store.courses.iter().map(|c| u32::from(c.progress)).sum();

    let chart = PieChart {
        slices: vec![
            PieSlice {
                label: "Active users".to_string(),
                value: active_users,
                color: COLOR_PRIMARY,
            },
            PieSlice {
                label: "Blocked users".to_string(),
                value: blocked_users,
                color: COLOR_DANGER,
            },
        ],
    };

    AdminStats {
        total_users: store.users.len() as u32,
        active_users,
        blocked_users,
        total_courses: store.courses.len() as u32,
        completed_lessons: progress_sum * 5,
        chart,
        updated_at: now.format("%B %-d, %Y %H:%M").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use core_types::{seed_session_user, Course, ManagedUser, Role};

    fn user(id: u32, status: UserStatus) -> ManagedUser {
        ManagedUser {
            id,
            name: format!("User {id}"),
            email: format!("user{id}@example.com"),
            role: Role::Student,
            status,
        }
    }

    fn course(id: u32, progress: u8) -> Course {
        Course {
            id,
            title: format!("Course {id}"),
            description: String::new(),
            progress,
            enrolled: id % 2 == 0,
        }
    }

    #[test]
    fn test_user_rows_button_follows_status() {
        let store = CampusStore::new(
            seed_session_user(),
            vec![],
            vec![user(1, UserStatus::Active), user(2, UserStatus::Blocked)],
        );

        let rows = user_rows(&store);

        assert_eq!(rows[0].action_label, "Block");
        assert_eq!(rows[0].action_class, "block-btn active");
        assert_eq!(rows[0].role_label, "Student");
        assert_eq!(rows[1].action_label, "Unblock");
        assert_eq!(rows[1].action_class, "block-btn blocked");
    }

    #[test]
    fn test_admin_course_cards_include_unenrolled() {
        let store = CampusStore::seeded();

        let cards = admin_course_cards(&store);

        assert_eq!(cards.len(), store.courses.len());
    }

    #[test]
    fn test_admin_stats_counts() {
        let store = CampusStore::new(
            seed_session_user(),
            vec![course(1, 75), course(2, 30), course(3, 90)],
            vec![
                user(1, UserStatus::Active),
                user(2, UserStatus::Active),
                user(3, UserStatus::Blocked),
            ],
        );
        let now = Utc.with_ymd_and_hms(2026, 8, 25, 14, 30, 0).unwrap();

        let stats = admin_stats(&store, now);

        assert_eq!(stats.total_users, 3);
        assert_eq!(stats.active_users, 2);
        assert_eq!(stats.blocked_users, 1);
        assert_eq!(stats.total_courses, 3);
        // (195 / 100 * 10) * 50
        assert_eq!(stats.completed_lessons, 975);
        assert_eq!(stats.updated_at, "August 25, 2026 14:30");
    }

    #[test]
    fn test_admin_stats_pie_matches_user_counts() {
        let store = CampusStore::seeded();

        let stats = admin_stats(&store, Utc::now());

        assert_eq!(stats.chart.slices.len(), 2);
        assert_eq!(stats.chart.slices[0].value, stats.active_users);
        assert_eq!(stats.chart.slices[1].value, stats.blocked_users);
        assert_eq!(stats.chart.total(), stats.total_users);
    }

    #[test]
    fn test_admin_stats_on_empty_store() {
        let store = CampusStore::new(seed_session_user(), vec![], vec![]);

        let stats = admin_stats(&store, Utc::now());

        assert_eq!(stats.total_users, 0);
        assert_eq!(stats.completed_lessons, 0);
        assert_eq!(stats.chart.total(), 0);
    }
}
