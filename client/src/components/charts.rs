//! Inline SVG charts: bar, line, and pie.
//!
//! DESIGN
//! ======
//! Geometry is computed by plain functions over `f64` values in a fixed
//! viewBox; the components only map the results onto SVG elements. All
//! charts scale to their container through `viewBox` + `preserveAspectRatio`.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use leptos::prelude::*;

/// Slice palette, cycled when there are more slices than colours.
pub const COLORS: [&str; 8] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8", "#82CA9D", "#FFC658", "#FF7C7C",
];

const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 260.0;
const PADDING: f64 = 32.0;

/// One labelled sample.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
    pub start: f64,
    pub end: f64,
}

/// Largest value, or 1.0 when every value is zero or negative.
fn scale_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().filter(|v| v.is_finite()).fold(0.0_f64, f64::max);
    if max > 0.0 { max } else { 1.0 }
}

/// Bars spread evenly across `width` with bottoms on the baseline at `height`.
#[allow(clippy::cast_precision_loss)]
pub fn bar_layout(values: &[f64], width: f64, height: f64) -> Vec<Rect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = scale_max(values);
    let slot = width / values.len() as f64;
    let bar_width = slot * 0.7;
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let bar_height = (value.max(0.0) / max) * height;
            Rect {
                x: slot * i as f64 + (slot - bar_width) / 2.0,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

/// Points of a line chart; a single sample sits in the middle.
#[allow(clippy::cast_precision_loss)]
pub fn line_points(values: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    let max = scale_max(values);
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if values.len() == 1 { width / 2.0 } else { step * i as f64 };
            (x, height - (value.max(0.0) / max) * height)
        })
        .collect()
}

/// SVG `points` attribute for a polyline.
pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Angular extents (radians, clockwise from 12 o'clock) proportional to each value.
pub fn pie_slices(values: &[f64]) -> Vec<Slice> {
    let total = values.iter().map(|v| v.max(0.0)).sum::<f64>();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|value| {
            let end = start + value.max(0.0) / total * TAU;
            let slice = Slice { start, end };
            start = end;
            slice
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * (angle - FRAC_PI_2).cos(), cy + r * (angle - FRAC_PI_2).sin())
}

/// SVG path for one pie slice. A full circle is drawn as two half arcs.
pub fn arc_path(cx: f64, cy: f64, r: f64, slice: Slice) -> String {
    let sweep = slice.end - slice.start;
    if sweep >= TAU - 1e-9 {
        return format!(
            "M {:.2} {:.2} A {r} {r} 0 1 1 {:.2} {:.2} A {r} {r} 0 1 1 {:.2} {:.2} Z",
            cx,
            cy - r,
            cx,
            cy + r,
            cx,
            cy - r
        );
    }
    let (sx, sy) = polar(cx, cy, r, slice.start);
    let (ex, ey) = polar(cx, cy, r, slice.end);
    let large = u8::from(sweep > std::f64::consts::PI);
    format!("M {cx:.2} {cy:.2} L {sx:.2} {sy:.2} A {r} {r} 0 {large} 1 {ex:.2} {ey:.2} Z")
}

fn num(value: f64) -> String {
    format!("{value:.2}")
}

fn view_box() -> String {
    format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
}

fn translate() -> String {
    format!("translate({PADDING},{PADDING})")
}

fn plot_width() -> f64 {
    VIEW_WIDTH - PADDING * 2.0
}

fn plot_height() -> f64 {
    VIEW_HEIGHT - PADDING * 2.0
}

#[component]
pub fn BarChart(
    #[prop(into)] title: String,
    #[prop(into)] points: Signal<Vec<ChartPoint>>,
    #[prop(into)] color: String,
    format: fn(f64) -> String,
) -> impl IntoView {
    let bars = move || {
        points.with(|points| {
            let values = points.iter().map(|p| p.value).collect::<Vec<_>>();
            bar_layout(&values, plot_width(), plot_height())
                .into_iter()
                .zip(points.iter().cloned())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <figure class="chart chart--bar">
            <figcaption class="chart__title">{title}</figcaption>
            <svg class="chart__svg" viewBox=view_box() preserveAspectRatio="xMidYMid meet">
                <g transform=translate()>
                    <line class="chart__axis" x1="0" y1=num(plot_height()) x2=num(plot_width()) y2=num(plot_height()) />
                    {move || {
                        bars()
                            .into_iter()
                            .map(|(rect, point)| {
                                let label_x = rect.x + rect.width / 2.0;
                                view! {
                                    <g class="chart__bar">
                                        <rect x=num(rect.x) y=num(rect.y) width=num(rect.width) height=num(rect.height) fill=color.clone() />
                                        <text class="chart__value" x=num(label_x) y=num(rect.y - 4.0) text-anchor="middle">
                                            {format(point.value)}
                                        </text>
                                        <text class="chart__label" x=num(label_x) y=num(plot_height() + 14.0) text-anchor="middle">
                                            {point.label.clone()}
                                        </text>
                                    </g>
                                }
                            })
                            .collect_view()
                    }}
                </g>
            </svg>
        </figure>
    }
}

#[component]
pub fn LineChart(
    #[prop(into)] title: String,
    #[prop(into)] points: Signal<Vec<ChartPoint>>,
    #[prop(into)] color: String,
    format: fn(f64) -> String,
) -> impl IntoView {
    let coords = move || {
        points.with(|points| {
            let values = points.iter().map(|p| p.value).collect::<Vec<_>>();
            line_points(&values, plot_width(), plot_height())
        })
    };
    let stroke = color.clone();

    view! {
        <figure class="chart chart--line">
            <figcaption class="chart__title">{title}</figcaption>
            <svg class="chart__svg" viewBox=view_box() preserveAspectRatio="xMidYMid meet">
                <g transform=translate()>
                    <line class="chart__axis" x1="0" y1=num(plot_height()) x2=num(plot_width()) y2=num(plot_height()) />
                    <polyline class="chart__line" fill="none" stroke=stroke stroke-width="2" points=move || polyline(&coords()) />
                    {move || {
                        coords()
                            .into_iter()
                            .zip(points.get())
                            .map(|((x, y), point)| {
                                view! {
                                    <g class="chart__point">
                                        <circle cx=num(x) cy=num(y) r="3" fill=color.clone() />
                                        <text class="chart__value" x=num(x) y=num(y - 6.0) text-anchor="middle">
                                            {format(point.value)}
                                        </text>
                                        <text class="chart__label" x=num(x) y=num(plot_height() + 14.0) text-anchor="middle">
                                            {point.label.clone()}
                                        </text>
                                    </g>
                                }
                            })
                            .collect_view()
                    }}
                </g>
            </svg>
        </figure>
    }
}

#[component]
pub fn PieChart(#[prop(into)] title: String, #[prop(into)] points: Signal<Vec<ChartPoint>>) -> impl IntoView {
    let radius = plot_height() / 2.0;
    let cx = VIEW_WIDTH / 3.0;
    let cy = VIEW_HEIGHT / 2.0;

    view! {
        <figure class="chart chart--pie">
            <figcaption class="chart__title">{title}</figcaption>
            <svg class="chart__svg" viewBox=view_box() preserveAspectRatio="xMidYMid meet">
                {move || {
                    let points = points.get();
                    let values = points.iter().map(|p| p.value).collect::<Vec<_>>();
                    let total = values.iter().map(|v| v.max(0.0)).sum::<f64>();
                    pie_slices(&values)
                        .into_iter()
                        .zip(points)
                        .enumerate()
                        .map(|(i, (slice, point))| {
                            let fill = COLORS[i % COLORS.len()];
                            let share = point.value.max(0.0) / total * 100.0;
                            #[allow(clippy::cast_precision_loss)]
                            let legend_y = PADDING + i as f64 * 20.0;
                            view! {
                                <path d=arc_path(cx, cy, radius, slice) fill=fill stroke="#fff" />
                                <rect x=num(VIEW_WIDTH * 0.62) y=num(legend_y - 10.0) width="12" height="12" fill=fill />
                                <text class="chart__legend" x=num(VIEW_WIDTH * 0.62 + 18.0) y=num(legend_y)>
                                    {format!("{} ({share:.0}%)", point.label)}
                                </text>
                            }
                        })
                        .collect_view()
                }}
            </svg>
        </figure>
    }
}
