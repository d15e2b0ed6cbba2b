//! Stat tile component.

use yew::prelude::*;

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: String,
    pub label: String,
}

/// A single stat tile: a large value over a caption.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat-card">
            <h3 class="stat-value">{ &props.value }</h3>
            <p class="stat-label">{ &props.label }</p>
        </div>
    }
}
