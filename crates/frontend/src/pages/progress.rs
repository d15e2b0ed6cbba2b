//! Progress page: overall bar, per-course cards, and the bar chart.

use view_models::progress_overview;
use yew::prelude::*;

use crate::components::{BarChartView, ProgressBarView};
use crate::state::StoreHandle;

/// Progress page component.
#[function_component(ProgressPage)]
pub fn progress_page() -> Html {
    let store = use_context::<StoreHandle>().expect("store context");
    let overview = progress_overview(&store.store);

    html! {
        <div>
            <h1>{"Your Progress"}</h1>

            <div class="card">
                <ProgressBarView percent={overview.average} />
                <p class="progress-text">
                    { format!("Progress: {}", overview.display_percent) }
                </p>
            </div>

            <div class="progress-details">
                { for overview.courses.iter().map(|course| html! {
                    <div class="progress-card">
                        <h3>{ &course.title }</h3>
                        <ProgressBarView percent={f64::from(course.progress)} />
                        <p>{ format!("Progress: {}%", course.progress) }</p>
                    </div>
                })}
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Progress by Course"}</h2>
                </div>
                <BarChartView chart={overview.chart.clone()} />
            </div>
        </div>
    }
}
