//! Projections for the student-facing views.

use serde::Serialize;
use store::CampusStore;

use crate::charts::BarChart;

/// A course card in the enrolled-courses grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseCard {
    pub id: u32,
    pub title: String,
    pub description: String,
}

/// Per-course entry in the progress panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseProgress {
    pub title: String,
    pub progress: u8,
}

/// The progress panel: overall average plus per-course breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressOverview {
    /// Average progress over enrolled courses; 0.0 when none are enrolled.
    pub average: f64,
    /// Rounded percentage for display, e.g. "35%".
    pub display_percent: String,
    pub courses: Vec<CourseProgress>,
    pub chart: BarChart,
}

/// The three stat tiles on the student dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentStats {
    /// Enrolled courses at 100% progress.
    pub completed_courses: u32,
    /// Estimated study hours: round of sum(progress/100 * 10) over all
    /// courses, enrolled or not.
    pub study_hours: u32,
    /// Points earned: sum(progress * 10) over all courses.
    pub points_earned: u32,
}

/// Courses the session user is enrolled in, as title+description cards.
pub fn enrolled_courses(store: &CampusStore) -> Vec<CourseCard> {
    store
        .courses
        .iter()
        .filter(|c| c.enrolled)
        .map(|c| CourseCard {
            id: c.id,
            title: c.title.clone(),
            description: c.description.clone(),
        })
        .collect()
}

/// The progress panel over enrolled courses.
pub fn progress_overview(store: &CampusStore) -> ProgressOverview {
    let enrolled: Vec<_> = store.courses.iter().filter(|c| c.enrolled).collect();

    let average = if enrolled.is_empty() {
        0.0
    } else {
        let total: u32 = enrolled.iter().map(|c| u32::from(c.progress)).sum();
        f64::from(total) / enrolled.len() as f64
    };

    let chart = BarChart {
        labels: enrolled.iter().map(|c| c.title.clone()).collect(),
        values: enrolled.iter().map(|c| c.progress).collect(),
        max: 100,
    };

    ProgressOverview {
        average,
        display_percent: format!("{}%", average.round() as u32),
        courses: enrolled
            .iter()
            .map(|c| CourseProgress {
                title: c.title.clone(),
                progress: c.progress,
            })
            .collect(),
        chart,
    }
}

/// The student dashboard stat tiles.
///
/// Study hours and points aggregate over the whole catalog, not just
/// enrolled courses. That asymmetry with the progress panel is the
/// observed product behavior and is kept as is.
pub fn student_stats(store: &CampusStore) -> StudentStats {
    let completed_courses = store
        .courses
        .iter()
        .filter(|c| c.enrolled && c.progress == 100)
        .count() as u32;

    let progress_sum: u32 = store.courses.iter().map(|c| u32::from(c.progress)).sum();

    StudentStats {
        completed_courses,
        // sum(progress/100 * 10) == progress_sum / 10
        study_hours: (f64::from(progress_sum) / 10.0).round() as u32,
        points_earned: progress_sum * 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{seed_session_user, seed_users, Course};

    fn course(id: u32, progress: u8, enrolled: bool) -> Course {
        Course {
            id,
            title: format!("Course {id}"),
            description: format!("Description {id}"),
            progress,
            enrolled,
        }
    }

    fn store_with(courses: Vec<Course>) -> CampusStore {
        CampusStore::new(seed_session_user(), courses, seed_users())
    }

    #[test]
    fn test_enrolled_courses_filters_out_unenrolled() {
        let store = store_with(vec![
            course(1, 75, true),
            course(2, 30, true),
            course(3, 90, false),
        ]);

        let cards = enrolled_courses(&store);

        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|c| c.id != 3));
    }

    #[test]
    fn test_progress_average_over_enrolled() {
        let store = store_with(vec![
            course(1, 75, true),
            course(2, 30, true),
            course(3, 0, true),
        ]);

        let overview = progress_overview(&store);

        assert!((overview.average - 35.0).abs() < f64::EPSILON);
        assert_eq!(overview.display_percent, "35%");
        assert_eq!(overview.courses.len(), 3);
    }

    #[test]
    fn test_progress_with_no_enrolled_courses_is_zero() {
        let store = store_with(vec![course(1, 90, false)]);

        let overview = progress_overview(&store);

        assert_eq!(overview.average, 0.0);
        assert_eq!(overview.display_percent, "0%");
        assert!(overview.courses.is_empty());
        assert!(overview.chart.is_empty());
    }

    #[test]
    fn test_progress_chart_one_bar_per_enrolled_course() {
        let store = store_with(vec![course(1, 75, true), course(2, 30, true)]);

        let chart = progress_overview(&store).chart;

        assert_eq!(chart.values, vec![75, 30]);
        assert_eq!(chart.labels, vec!["Course 1", "Course 2"]);
        assert_eq!(chart.max, 100);
    }

    #[test]
    fn test_completed_counts_enrolled_at_hundred_only() {
        let store = store_with(vec![
            course(1, 100, true),
            course(2, 100, false),
            course(3, 99, true),
        ]);

        assert_eq!(student_stats(&store).completed_courses, 1);
    }

    #[test]
    fn test_study_hours_and_points_cover_all_courses() {
        // 75 + 30 + 90 = 195 over the whole catalog, including the
        // unenrolled course.
        let store = store_with(vec![
            course(1, 75, true),
            course(2, 30, true),
            course(3, 90, false),
        ]);

        let stats = student_stats(&store);

        assert_eq!(stats.study_hours, 20); // round(19.5)
        assert_eq!(stats.points_earned, 1950);
    }

    #[test]
    fn test_stats_on_empty_catalog() {
        let stats = student_stats(&store_with(vec![]));

        assert_eq!(stats.completed_courses, 0);
        assert_eq!(stats.study_hours, 0);
        assert_eq!(stats.points_earned, 0);
    }
}
