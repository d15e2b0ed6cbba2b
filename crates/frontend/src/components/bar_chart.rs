//! Bar chart rendered as inline SVG.

use view_models::{BarChart, COLOR_PRIMARY, COLOR_PRIMARY_DARK};
use yew::prelude::*;

const CHART_WIDTH: f64 = 400.0;
const CHART_HEIGHT: f64 = 200.0;
const BAR_GAP: f64 = 16.0;
const LABEL_BAND: f64 = 24.0;

/// Properties for BarChartView.
#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub chart: BarChart,
}

/// Bar chart component: one bar per entry on the chart's 0..=max scale.
#[function_component(BarChartView)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let chart = &props.chart;

    if chart.is_empty() {
        return html! { <p class="chart-empty">{"Nothing to chart yet."}</p> };
    }

    let count = chart.values.len();
    let bar_width = bar_width_for(count);
    let scale_max = f64::from(chart.max.max(1));

    let bars = chart
        .values
        .iter()
        .zip(&chart.labels)
        .enumerate()
        .map(|(i, (&value, label))| {
            let height = f64::from(value) / scale_max * CHART_HEIGHT;
            let x = BAR_GAP + (bar_width + BAR_GAP) * i as f64;
            let y = CHART_HEIGHT - height;

            html! {
                <g>
                    <rect
                        x={x.to_string()}
                        y={y.to_string()}
                        width={bar_width.to_string()}
                        height={height.to_string()}
                        fill={COLOR_PRIMARY}
                        stroke={COLOR_PRIMARY_DARK}
                    >
                        <title>{ format!("{label}: {value}%") }</title>
                    </rect>
                    <text
                        x={(x + bar_width / 2.0).to_string()}
                        y={(CHART_HEIGHT + 16.0).to_string()}
                        text-anchor="middle"
                        class="chart-label"
                    >
                        { label.clone() }
                    </text>
                </g>
            }
        });

    let view_box = format!("0 0 {CHART_WIDTH} {}", CHART_HEIGHT + LABEL_BAND);

    html! {
        <svg class="bar-chart" viewBox={view_box} role="img">
            { for bars }
        </svg>
    }
}

/// Width of one bar. Fills the chart for small catalogs; bottoms out at
/// 1.0 so a large catalog never produces negative-width rects.
fn bar_width_for(count: usize) -> f64 {
    let count = count.max(1) as f64;
    ((CHART_WIDTH - BAR_GAP * (count + 1.0)) / count).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_fills_chart_for_small_catalogs() {
        assert!(bar_width_for(3) > BAR_GAP);
    }

    #[test]
    fn test_bar_width_stays_positive_for_large_catalogs() {
        for count in 1..200 {
            assert!(bar_width_for(count) >= 1.0, "count {count}");
        }
    }
}
