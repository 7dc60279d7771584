//! Inline-SVG line chart of monthly user engagement.

use leptos::prelude::*;

use crate::util::chart::{
    ENGAGEMENT_LABELS, ENGAGEMENT_SERIES, PlotArea, X_AXIS_TITLE, Y_AXIS_TITLE, layout,
};

fn px(v: f64) -> String {
    format!("{v:.2}")
}

#[component]
pub fn EngagementChart() -> impl IntoView {
    let area = PlotArea::default();
    let series = ENGAGEMENT_SERIES;
    let geometry = layout(&series, &ENGAGEMENT_LABELS, area);
    let mid_x = (area.left() + area.right()) / 2.0;
    let mid_y = (area.top() + area.bottom()) / 2.0;

    let grid = geometry
        .y_ticks
        .iter()
        .map(|tick| {
            view! {
                <line class="chart__grid" x1=px(area.left()) x2=px(area.right()) y1=px(tick.pos) y2=px(tick.pos)></line>
                <text class="chart__tick" x=px(area.left() - 8.0) y=px(tick.pos + 4.0) text-anchor="end">
                    {tick.label.clone()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let x_ticks = geometry
        .x_ticks
        .iter()
        .map(|tick| {
            view! {
                <text class="chart__tick" x=px(tick.pos) y=px(area.bottom() + 18.0) text-anchor="middle">
                    {tick.label.clone()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let points = geometry
        .points
        .iter()
        .map(|p| {
            view! { <circle class="chart__point" cx=px(p.x) cy=px(p.y) r="3" fill=series.stroke></circle> }
        })
        .collect::<Vec<_>>();

    let y_title_x = area.left() - 40.0;

    view! {
        <svg
            class="chart"
            role="img"
            aria-label=series.label
            viewBox=format!("0 0 {} {}", area.width, area.height)
        >
            <g class="chart__legend">
                <rect x=px(mid_x - 60.0) y="10" width="28" height="10" fill=series.fill stroke=series.stroke></rect>
                <text class="chart__legend-label" x=px(mid_x - 26.0) y="19">{series.label}</text>
            </g>
            {grid}
            <path class="chart__area" d=geometry.area_path.clone() fill=series.fill stroke="none"></path>
            <path class="chart__line" d=geometry.line_path.clone() fill="none" stroke=series.stroke stroke-width="2"></path>
            {points}
            {x_ticks}
            <text class="chart__axis-title" x=px(mid_x) y=px(area.height - 8.0) text-anchor="middle">
                {X_AXIS_TITLE}
            </text>
            <text
                class="chart__axis-title"
                x=px(y_title_x)
                y=px(mid_y)
                text-anchor="middle"
                transform=format!("rotate(-90 {} {})", px(y_title_x), px(mid_y))
            >
                {Y_AXIS_TITLE}
            </text>
        </svg>
    }
}
