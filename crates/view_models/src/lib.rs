//! View models for the campus dashboard.
//!
//! Pure projections from `CampusStore` state to the data each rendering
//! region needs. Nothing here touches the DOM; the frontend applies
//! these models. Each projection fully describes its region, so applying
//! one replaces whatever was rendered before.

mod admin;
mod charts;
mod student;

pub use admin::{
    admin_course_cards, admin_stats, user_rows, AdminCourseCard, AdminStats, UserRow,
};
pub use charts::{BarChart, PieChart, PieSlice, COLOR_DANGER, COLOR_PRIMARY, COLOR_PRIMARY_DARK};
pub use student::{
    enrolled_courses, progress_overview, student_stats, CourseCard, CourseProgress,
    ProgressOverview, StudentStats,
};
