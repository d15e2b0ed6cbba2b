//! Student dashboard page with the stat tiles.

use view_models::student_stats;
use yew::prelude::*;

use crate::components::StatCard;
use crate::state::StoreHandle;

/// Student dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let store = use_context::<StoreHandle>().expect("store context");
    let stats = student_stats(&store.store);

    html! {
        <div>
            <h1>{ format!("Welcome, {}", store.store.session.name) }</h1>

            <div class="stats-grid">
                <StatCard
                    value={stats.completed_courses.to_string()}
                    label={"Completed Courses"}
                />
                <StatCard
                    value={stats.study_hours.to_string()}
                    label={"Study Hours"}
                />
                <StatCard
                    value={stats.points_earned.to_string()}
                    label={"Points Earned"}
                />
            </div>
        </div>
    }
}
