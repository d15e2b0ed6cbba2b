//! Page components.

mod admin_courses;
mod admin_stats;
mod admin_users;
mod courses;
mod dashboard;
mod login;
mod progress;

pub use admin_courses::AdminCoursesPage;
pub use admin_stats::AdminStatsPage;
pub use admin_users::AdminUsersPage;
pub use courses::CoursesPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use progress::ProgressPage;
