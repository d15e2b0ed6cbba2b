//! Horizontal progress bar component.

use yew::prelude::*;

/// Properties for ProgressBar component.
#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Fill percentage, 0-100.
    pub percent: f64,
}

/// Horizontal progress bar.
#[function_component(ProgressBarView)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div class="progress-bar">
            <div
                class="progress-bar-fill"
                style={format!("width: {}%", props.percent)}
            />
        </div>
    }
}
