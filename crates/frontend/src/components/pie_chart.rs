//! Pie chart rendered as inline SVG, with a legend.

use std::f64::consts::PI;

use view_models::PieChart;
use yew::prelude::*;

const RADIUS: f64 = 90.0;
const CENTER: f64 = 100.0;

/// Properties for PieChartView.
#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub chart: PieChart,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

/// Pie chart component.
#[function_component(PieChartView)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    let chart = &props.chart;
    let total = chart.total();

    if total == 0 {
        return html! { <p class="chart-empty">{"Nothing to chart yet."}</p> };
    }

    // Slices start at twelve o'clock and run clockwise.
    let mut angle = -PI / 2.0;
    let slices: Vec<Html> = chart
        .slices
        .iter()
        .filter(|s| s.value > 0)
        .map(|slice| {
            let fraction = f64::from(slice.value) / f64::from(total);
            let sweep = fraction * 2.0 * PI;
            let (x0, y0) = point_on_circle(angle);
            angle += sweep;
            let (x1, y1) = point_on_circle(angle);

            // A lone slice covers the full disc; an arc path would
            // collapse onto itself, so draw a circle instead.
            if (fraction - 1.0).abs() < 1e-9 {
                return html! {
                    <circle
                        cx={CENTER.to_string()}
                        cy={CENTER.to_string()}
                        r={RADIUS.to_string()}
                        fill={slice.color}
                    />
                };
            }

            let large_arc = u8::from(sweep > PI);
            let path = format!(
                "M {CENTER} {CENTER} L {x0} {y0} A {RADIUS} {RADIUS} 0 {large_arc} 1 {x1} {y1} Z"
            );

            html! {
                <path d={path} fill={slice.color}>
                    <title>{ format!("{}: {}", slice.label, slice.value) }</title>
                </path>
            }
        })
        .collect();

    let legend = chart.slices.iter().map(|slice| {
        html! {
            <li>
                <span
                    class="legend-swatch"
                    style={format!("background: {}", slice.color)}
                />
                { format!("{}: {}", slice.label, slice.value) }
            </li>
        }
    });

    html! {
        <div class="pie-chart">
            if let Some(title) = &props.title {
                <h3>{ title }</h3>
            }
            <svg viewBox="0 0 200 200" role="img">
                { for slices.into_iter() }
            </svg>
            <ul class="chart-legend">
                { for legend }
            </ul>
        </div>
    }
}

fn point_on_circle(angle: f64) -> (f64, f64) {
    (CENTER + RADIUS * angle.cos(), CENTER + RADIUS * angle.sin())
}
