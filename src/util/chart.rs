//! Line-chart geometry for the dashboard engagement chart.
//!
//! Computes scales, tick positions and a smoothed SVG path so the component
//! only has to emit elements. Smoothing follows the usual spline-with-tension
//! construction: each point's control handles lie along the line joining its
//! neighbours, scaled by the relative segment lengths and `tension`.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::fmt::Write;

/// One data series drawn as a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub values: &'static [f64],
    pub stroke: &'static str,
    pub fill: &'static str,
    pub tension: f64,
}

pub const ENGAGEMENT_LABELS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub const ENGAGEMENT_SERIES: Series = Series {
    label: "User Engagement",
    values: &[12.0, 19.0, 3.0, 5.0, 2.0, 3.0],
    stroke: "#4F46E5",
    fill: "rgba(79, 70, 229, 0.2)",
    tension: 0.4,
};

pub const X_AXIS_TITLE: &str = "Months";
pub const Y_AXIS_TITLE: &str = "Engagement";

const MAX_Y_TICKS: usize = 5;

/// Drawing surface and the padding reserved for legend and axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self { width: 480.0, height: 300.0, pad_left: 56.0, pad_right: 16.0, pad_top: 40.0, pad_bottom: 52.0 }
    }
}

impl PlotArea {
    #[must_use]
    pub fn left(&self) -> f64 {
        self.pad_left
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.width - self.pad_right
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.pad_top
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.height - self.pad_bottom
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub label: String,
    pub pos: f64,
}

/// Everything the chart component needs to render one series.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub points: Vec<Point>,
    pub line_path: String,
    pub area_path: String,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub y_max: f64,
}

/// Round `range / max_ticks` up to 1, 2 or 5 times a power of ten.
#[must_use]
pub fn nice_step(range: f64, max_ticks: usize) -> f64 {
    if !range.is_finite() || range <= 0.0 || max_ticks == 0 {
        return 1.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let raw = range / max_ticks as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Lay out `series` over `labels` inside `area`. The y axis starts at zero.
#[must_use]
pub fn layout(series: &Series, labels: &[&str], area: PlotArea) -> ChartGeometry {
    let data_max = series.values.iter().copied().filter(|v| v.is_finite()).fold(0.0_f64, f64::max);
    let step = nice_step(data_max, MAX_Y_TICKS);
    let y_max = ((data_max / step).ceil() * step).max(step);

    let count = series.values.len().max(labels.len());
    let x_at = |i: usize| -> f64 {
        if count <= 1 {
            return (area.left() + area.right()) / 2.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let frac = i as f64 / (count - 1) as f64;
        area.left() + frac * (area.right() - area.left())
    };
    let y_at = |v: f64| area.bottom() - (v / y_max) * (area.bottom() - area.top());

    let points: Vec<Point> =
        series.values.iter().enumerate().map(|(i, v)| Point { x: x_at(i), y: y_at(v.max(0.0)) }).collect();

    let x_ticks = labels.iter().enumerate().map(|(i, label)| Tick { label: (*label).to_owned(), pos: x_at(i) }).collect();

    let mut y_ticks = Vec::new();
    let mut value = 0.0;
    while value <= y_max + step / 2.0 {
        y_ticks.push(Tick { label: format_tick(value), pos: y_at(value) });
        value += step;
    }

    let line_path = smooth_path(&points, series.tension, area);
    let area_path = match (points.first(), points.last()) {
        (Some(first), Some(last)) => format!(
            "{line_path} L {:.2} {:.2} L {:.2} {:.2} Z",
            last.x,
            area.bottom(),
            first.x,
            area.bottom()
        ),
        _ => String::new(),
    };

    ChartGeometry { points, line_path, area_path, x_ticks, y_ticks, y_max }
}

/// Control points `(before, after)` for each point.
#[must_use]
pub fn control_points(points: &[Point], tension: f64, area: PlotArea) -> Vec<(Point, Point)> {
    let clamp = |p: Point| Point {
        x: p.x.clamp(area.left(), area.right()),
        y: p.y.clamp(area.top(), area.bottom()),
    };
    points
        .iter()
        .enumerate()
        .map(|(i, &current)| {
            let prev = if i == 0 { current } else { points[i - 1] };
            let next = points.get(i + 1).copied().unwrap_or(current);
            let d01 = distance(prev, current);
            let d12 = distance(current, next);
            let total = d01 + d12;
            let (s01, s12) = if total > 0.0 { (d01 / total, d12 / total) } else { (0.0, 0.0) };
            let fa = tension * s01;
            let fb = tension * s12;
            let dx = next.x - prev.x;
            let dy = next.y - prev.y;
            (
                clamp(Point { x: current.x - fa * dx, y: current.y - fa * dy }),
                clamp(Point { x: current.x + fb * dx, y: current.y + fb * dy }),
            )
        })
        .collect()
}

/// SVG path through `points` using cubic segments.
#[must_use]
pub fn smooth_path(points: &[Point], tension: f64, area: PlotArea) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };
    let controls = control_points(points, tension, area);
    let mut path = format!("M {:.2} {:.2}", first.x, first.y);
    for i in 1..points.len() {
        let (_, c1) = controls[i - 1];
        let (c2, _) = controls[i];
        let p = points[i];
        // Writing to a String cannot fail.
        let _ = write!(path, " C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}", c1.x, c1.y, c2.x, c2.y, p.x, p.y);
    }
    path
}

fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 { format!("{value:.0}") } else { format!("{value:.1}") }
}
