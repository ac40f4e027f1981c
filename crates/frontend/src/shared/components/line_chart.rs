//! Minimal SVG line chart primitive for dashboard pages.
//!
//! Plots one or more numeric series over a shared category axis. Gaps
//! (missing or non-numeric points) are skipped, not drawn as zero.

use leptos::prelude::*;

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 70.0;
const Y_TICKS: usize = 5;

/// One plotted line: display name, stroke color, per-category points.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: &'static str,
    pub points: Vec<Option<f64>>,
}

#[component]
pub fn LineChart(
    /// Category labels along the x-axis, one per data row
    categories: Vec<String>,
    /// Series to plot; point vectors are aligned with `categories`
    series: Vec<ChartSeries>,
    #[prop(default = 800.0)] width: f64,
    #[prop(default = 400.0)] height: f64,
) -> impl IntoView {
    let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;
    let (min, max) = value_bounds(&series);
    let count = categories.len();

    let y_ticks = (0..=Y_TICKS)
        .map(|i| {
            let value = min + (max - min) * (i as f64) / (Y_TICKS as f64);
            let y = MARGIN_TOP + y_position(value, min, max, plot_h);
            view! {
                <g>
                    <line
                        x1=format!("{:.1}", MARGIN_LEFT)
                        y1=format!("{:.1}", y)
                        x2=format!("{:.1}", MARGIN_LEFT + plot_w)
                        y2=format!("{:.1}", y)
                        stroke="#ddd"
                        stroke-dasharray="3 3"
                    />
                    <text
                        x=format!("{:.1}", MARGIN_LEFT - 8.0)
                        y=format!("{:.1}", y + 4.0)
                        text-anchor="end"
                        font-size="11"
                        fill="#666"
                    >
                        {format_tick(value, max - min)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let x_labels = categories
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = MARGIN_LEFT + x_position(i, count, plot_w);
            let y = MARGIN_TOP + plot_h + 14.0;
            view! {
                <text
                    x=format!("{:.1}", x)
                    y=format!("{:.1}", y)
                    text-anchor="end"
                    font-size="11"
                    fill="#666"
                    transform=format!("rotate(-35 {:.1} {:.1})", x, y)
                >
                    {label.clone()}
                </text>
            }
        })
        .collect_view();

    let lines = series
        .iter()
        .map(|s| {
            view! {
                <polyline
                    points=polyline_points(&s.points, min, max, plot_w, plot_h)
                    fill="none"
                    stroke=s.color
                    stroke-width="2"
                    transform=format!("translate({:.1} {:.1})", MARGIN_LEFT, MARGIN_TOP)
                />
            }
        })
        .collect_view();

    let legend = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let y = MARGIN_TOP + 6.0 + (i as f64) * 16.0;
            view! {
                <g>
                    <rect
                        x=format!("{:.1}", MARGIN_LEFT + 10.0)
                        y=format!("{:.1}", y)
                        width="12"
                        height="3"
                        fill=s.color
                    />
                    <text
                        x=format!("{:.1}", MARGIN_LEFT + 28.0)
                        y=format!("{:.1}", y + 5.0)
                        font-size="11"
                        fill="#333"
                    >
                        {s.name.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg
            class="line-chart"
            width=format!("{:.0}", width)
            height=format!("{:.0}", height)
            viewBox=format!("0 0 {:.0} {:.0}", width, height)
        >
            {y_ticks}
            {x_labels}
            <line
                x1=format!("{:.1}", MARGIN_LEFT)
                y1=format!("{:.1}", MARGIN_TOP)
                x2=format!("{:.1}", MARGIN_LEFT)
                y2=format!("{:.1}", MARGIN_TOP + plot_h)
                stroke="#333"
            />
            <line
                x1=format!("{:.1}", MARGIN_LEFT)
                y1=format!("{:.1}", MARGIN_TOP + plot_h)
                x2=format!("{:.1}", MARGIN_LEFT + plot_w)
                y2=format!("{:.1}", MARGIN_TOP + plot_h)
                stroke="#333"
            />
            {lines}
            {legend}
        </svg>
    }
}

/// Value range over all plottable points, extended to include zero.
/// Falls back to 0..1 when there is nothing to plot.
fn value_bounds(series: &[ChartSeries]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for s in series {
        for value in s.points.iter().flatten() {
            if value.is_finite() {
                min = min.min(*value);
                max = max.max(*value);
            }
        }
    }
    if min > max {
        return (0.0, 1.0);
    }
    min = min.min(0.0);
    max = max.max(0.0);
    if min == max {
        max = min + 1.0;
    }
    (min, max)
}

/// Even spacing across the plot width; a single category sits centered.
fn x_position(index: usize, count: usize, plot_w: f64) -> f64 {
    if count <= 1 {
        return plot_w / 2.0;
    }
    (index as f64) * plot_w / ((count - 1) as f64)
}

fn y_position(value: f64, min: f64, max: f64, plot_h: f64) -> f64 {
    plot_h - (value - min) / (max - min) * plot_h
}

/// SVG `points` attribute in plot coordinates; unplottable points leave
/// a gap in the polyline.
fn polyline_points(points: &[Option<f64>], min: f64, max: f64, plot_w: f64, plot_h: f64) -> String {
    let count = points.len();
    points
        .iter()
        .enumerate()
        .filter_map(|(i, point)| {
            let value = (*point)?;
            if !value.is_finite() {
                return None;
            }
            Some(format!(
                "{:.1},{:.1}",
                x_position(i, count, plot_w),
                y_position(value, min, max, plot_h)
            ))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_tick(value: f64, span: f64) -> String {
    if span >= 10.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: Vec<Option<f64>>) -> ChartSeries {
        ChartSeries {
            name: "test".to_string(),
            color: "#000",
            points,
        }
    }

    #[test]
    fn test_value_bounds_includes_zero_baseline() {
        let (min, max) = value_bounds(&[series(vec![Some(5.0), Some(12.0)])]);
        assert_eq!((min, max), (0.0, 12.0));
    }

    #[test]
    fn test_value_bounds_empty() {
        assert_eq!(value_bounds(&[]), (0.0, 1.0));
        assert_eq!(value_bounds(&[series(vec![None, None])]), (0.0, 1.0));
    }

    #[test]
    fn test_value_bounds_degenerate_range() {
        let (min, max) = value_bounds(&[series(vec![Some(0.0)])]);
        assert!(max > min);
    }

    #[test]
    fn test_x_position_spacing() {
        assert_eq!(x_position(0, 3, 100.0), 0.0);
        assert_eq!(x_position(2, 3, 100.0), 100.0);
        assert_eq!(x_position(0, 1, 100.0), 50.0);
    }

    #[test]
    fn test_polyline_skips_gaps() {
        let pts = polyline_points(&[Some(0.0), None, Some(10.0)], 0.0, 10.0, 100.0, 100.0);
        assert_eq!(pts, "0.0,100.0 100.0,0.0");
    }

    #[test]
    fn test_polyline_skips_nan() {
        let pts = polyline_points(&[Some(f64::NAN), Some(10.0)], 0.0, 10.0, 100.0, 100.0);
        assert_eq!(pts, "100.0,0.0");
    }
}
