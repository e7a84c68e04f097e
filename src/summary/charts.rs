//! Bar charts of the period totals.
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with a matching HTML container and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, JsFunction, Tooltip, Trigger,
    },
    series::bar,
};
use maud::{Markup, PreEscaped, html};

use crate::{html::HeadElement, summary::aggregation::PeriodTotal};

/// A chart with its HTML container ID and ECharts configuration.
pub(super) struct SummaryChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// The look of a summary chart.
pub(super) struct ChartStyle {
    pub title: &'static str,
    pub x_axis_name: &'static str,
    pub bar_color: &'static str,
}

/// Renders the HTML container for a chart.
pub(super) fn chart_view(chart: &SummaryChart) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div
                id=(chart.id)
                class="min-h-[420px] rounded dark:bg-gray-100"
            {}
        }
    )
}

/// Generates JavaScript initialization code for `chart`.
///
/// The chart follows the browser's dark mode setting and resizes with the window.
pub(super) fn chart_script(chart: &SummaryChart) -> HeadElement {
    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chartDom = document.getElementById("{}");
            const chart = echarts.init(chartDom);
            const option = {};
            chart.setOption(option);

            window.addEventListener('resize', chart.resize);

            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const updateTheme = () => {{
                const isDarkMode = darkModeMediaQuery.matches;
                chart.setTheme(isDarkMode ? 'dark' : 'default');
            }}
            darkModeMediaQuery.addEventListener('change', updateTheme);
            updateTheme();
        }});"#,
        chart.id, chart.options
    );

    HeadElement::ScriptSource(PreEscaped(script))
}

/// One bar per period in the given order, with negative totals drawn below the axis.
pub(super) fn totals_chart(style: &ChartStyle, totals: &[PeriodTotal]) -> Chart {
    let labels = totals
        .iter()
        .map(|total| total.period.clone())
        .collect::<Vec<_>>();
    let values = totals.iter().map(|total| total.total).collect::<Vec<_>>();

    Chart::new()
        .title(Title::new().text(style.title))
        .tooltip(amount_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name(style.x_axis_name)
                .axis_label(AxisLabel::new().rotate(45.0))
                .data(labels),
        )
        .y_axis(Axis::new().type_(AxisType::Value).name("Amount"))
        .series(
            bar::Bar::new()
                .name("Amount")
                .item_style(ItemStyle::new().color(style.bar_color))
                .data(values),
        )
}

#[inline]
fn amount_formatter() -> JsFunction {
    JsFunction::new_with_args("number", "return Number(number).toFixed(2);")
}

fn amount_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(amount_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
