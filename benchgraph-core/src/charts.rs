use std::path::Path;

use charming::{
    Chart, ImageFormat, ImageRenderer,
    component::{Axis, Legend, Title},
    datatype::DataPointItem,
    element::{AxisLabel, AxisType, ItemStyle},
    series::Bar,
};

use crate::report::{Method, Report};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("render chart: {0}")]
    Render(#[from] charming::EchartsError),
}

pub const BASIC_SERIES: &str = "Basic (100 connections)";
pub const HIGH_CONCURRENCY_SERIES: &str = "High Concurrency (1000 connections)";

const BASIC_CONFIG_PART: &str = "Basic";
const HIGH_CONCURRENCY_CONFIG_PART: &str = "High Concurrency";

/// Pixel sizes match the original report layouts: wide comparison, square-ish
/// single bar, extra-wide timeline.
pub const HTTP_COMPARISON_SIZE: (u32, u32) = (1200, 600);
pub const WEBSOCKET_SIZE: (u32, u32) = (800, 600);
pub const TIMELINE_SIZE: (u32, u32) = (1500, 600);

fn method_color(method: Method) -> &'static str {
    match method {
        Method::Get => "blue",
        Method::Post => "green",
        Method::WebSocket => "red",
    }
}

/// Grouped bars comparing GET and POST means for the two standard
/// configurations. A configuration with no matching samples charts as zero.
#[must_use]
pub fn http_comparison(report: &Report) -> Chart {
    let (basic, high) = http_series_means(report);
    let methods: Vec<String> = Method::HTTP.into_iter().map(|m| m.to_string()).collect();

    Chart::new()
        .title(Title::new().text("HTTP Performance Comparison"))
        .legend(Legend::new())
        .x_axis(Axis::new().type_(AxisType::Category).data(methods))
        .y_axis(Axis::new().type_(AxisType::Value).name("Requests per Second"))
        .series(Bar::new().name(BASIC_SERIES).data(basic))
        .series(Bar::new().name(HIGH_CONCURRENCY_SERIES).data(high))
}

fn http_series_means(report: &Report) -> (Vec<f64>, Vec<f64>) {
    let mut basic = Vec::with_capacity(Method::HTTP.len());
    let mut high = Vec::with_capacity(Method::HTTP.len());

    for method in Method::HTTP {
        let series = report.series(method);
        basic.push(series.mean_matching(BASIC_CONFIG_PART).unwrap_or(0.0));
        high.push(
            series
                .mean_matching(HIGH_CONCURRENCY_CONFIG_PART)
                .unwrap_or(0.0),
        );
    }

    (basic, high)
}

/// Single mean-rate bar for the WebSocket series; `None` when the report has
/// no WebSocket samples, in which case the chart is skipped entirely.
#[must_use]
pub fn websocket_performance(report: &Report) -> Option<Chart> {
    let mean = report.series(Method::WebSocket).mean()?;

    Some(
        Chart::new()
            .title(Title::new().text("WebSocket Performance"))
            .x_axis(
                Axis::new()
                    .type_(AxisType::Category)
                    .data(vec![Method::WebSocket.to_string()]),
            )
            .y_axis(Axis::new().type_(AxisType::Value).name("Messages per Second"))
            .series(
                Bar::new()
                    .data(vec![DataPointItem::new(mean).item_style(ItemStyle::new().color("blue"))]),
            ),
    )
}

struct TimelineBar {
    label: String,
    value: f64,
    color: &'static str,
}

fn timeline_bars(report: &Report) -> Vec<TimelineBar> {
    report
        .iter()
        .map(|(method, sample)| TimelineBar {
            label: format!("{method}\n{}", sample.config),
            value: sample.value,
            color: method_color(method),
        })
        .collect()
}

/// One bar per sample across every method, colored by method, with labels
/// rotated so long configuration names stay readable.
#[must_use]
pub fn performance_timeline(report: &Report) -> Chart {
    let bars = timeline_bars(report);
    let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();
    let points: Vec<DataPointItem> = bars
        .iter()
        .map(|b| DataPointItem::new(b.value).item_style(ItemStyle::new().color(b.color)))
        .collect();

    Chart::new()
        .title(Title::new().text("Performance Timeline"))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels)
                .axis_label(AxisLabel::new().rotate(45)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Requests/Messages per Second"),
        )
        .series(Bar::new().data(points))
}

/// Rasterizes `chart` to a PNG at `path`, overwriting any existing file.
pub fn save_png(chart: &Chart, size: (u32, u32), path: &Path) -> Result<()> {
    let (width, height) = size;
    let mut renderer = ImageRenderer::new(width, height);
    renderer.save_format(ImageFormat::Png, chart, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample_report() -> Report {
        let mut report = Report::default();
        report.series_mut(Method::Get).push(100.0, "Basic");
        report.series_mut(Method::Get).push(200.0, "Basic");
        report.series_mut(Method::Get).push(900.0, "High Concurrency");
        report.series_mut(Method::Post).push(80.0, "Basic");
        report.series_mut(Method::WebSocket).push(300.0, "Basic");
        report
    }

    #[test]
    fn http_series_means_average_by_config_substring() {
        let (basic, high) = http_series_means(&sample_report());

        assert_eq!(basic.len(), 2);
        assert_eq!(high.len(), 2);
        assert!(close(basic[0], 150.0));
        assert!(close(high[0], 900.0));
        assert!(close(basic[1], 80.0));
    }

    #[test]
    fn http_series_means_chart_missing_configs_as_zero() {
        let (basic, high) = http_series_means(&Report::default());

        assert_eq!(basic, vec![0.0, 0.0]);
        assert_eq!(high, vec![0.0, 0.0]);
    }

    #[test]
    fn websocket_chart_is_skipped_without_samples() {
        assert!(websocket_performance(&Report::default()).is_none());
        assert!(websocket_performance(&sample_report()).is_some());
    }

    #[test]
    fn timeline_bars_follow_report_order_and_method_colors() {
        let bars = timeline_bars(&sample_report());

        let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "GET\nBasic",
                "GET\nBasic",
                "GET\nHigh Concurrency",
                "POST\nBasic",
                "WebSocket\nBasic",
            ]
        );

        let colors: Vec<&str> = bars.iter().map(|b| b.color).collect();
        assert_eq!(colors, vec!["blue", "blue", "blue", "green", "red"]);

        assert!(close(bars[2].value, 900.0));
    }

    #[test]
    fn timeline_bars_keep_empty_configs_visible() {
        let mut report = Report::default();
        report.series_mut(Method::WebSocket).push(5.0, "");

        let bars = timeline_bars(&report);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].label, "WebSocket\n");
    }
}
