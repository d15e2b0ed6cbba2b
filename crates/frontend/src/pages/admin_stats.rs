//! Aggregate statistics page for administrators.

use chrono::Utc;
use view_models::admin_stats;
use yew::prelude::*;

use crate::components::{PieChartView, StatCard};
use crate::state::StoreHandle;

/// Admin statistics page component.
#[function_component(AdminStatsPage)]
pub fn admin_stats_page() -> Html {
    let store = use_context::<StoreHandle>().expect("store context");
    let stats = admin_stats(&store.store, Utc::now());

    html! {
        <div>
            <h1>{"Overall Statistics"}</h1>

            <div class="stats-grid">
                <StatCard
                    value={stats.total_users.to_string()}
                    label={"Total Users"}
                />
                <StatCard
                    value={stats.active_users.to_string()}
                    label={"Active Users"}
                />
                <StatCard
                    value={stats.blocked_users.to_string()}
                    label={"Blocked Users"}
                />
                <StatCard
                    value={stats.total_courses.to_string()}
                    label={"Active Courses"}
                />
                <StatCard
                    value={stats.completed_lessons.to_string()}
                    label={"Completed Lessons"}
                />
            </div>

            <div class="card">
                <PieChartView chart={stats.chart.clone()} title={"User Distribution"} />
            </div>

            <p class="stats-date">{ format!("Last updated: {}", stats.updated_at) }</p>
        </div>
    }
}
