//! Reusable UI components.

mod bar_chart;
mod course_card;
mod notice;
mod pie_chart;
mod progress_bar;
mod role_gate;
mod stat_card;

pub use bar_chart::BarChartView;
pub use course_card::CourseCardView;
pub use notice::NoticeBanner;
pub use pie_chart::PieChartView;
pub use progress_bar::ProgressBarView;
pub use role_gate::RoleGate;
pub use stat_card::StatCard;
