//! The category breakdown chart.
//!
//! The chart is generated as an ECharts configuration with `charming` and
//! initialised by an inline script, so it is also drawn when the page content
//! is swapped in by htmx after a form submission.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisPointer, AxisPointerType, AxisType, Tooltip, Trigger},
    series::bar,
};
use maud::{Markup, PreEscaped, html};

use crate::expense::summary::CategoryTotal;

/// The URL of the ECharts library the chart script depends on.
pub const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

const CHART_ID: &str = "category-chart";

/// Build the bar chart of spending per category.
pub fn category_chart(by_category: &[CategoryTotal]) -> Chart {
    let (labels, values): (Vec<String>, Vec<f64>) = by_category
        .iter()
        .map(|category_total| {
            (
                category_total.category.clone(),
                // Round to cents so the tooltip does not show float noise.
                (category_total.total * 100.0).round() / 100.0,
            )
        })
        .unzip();

    Chart::new()
        .title(Title::new().text("Category Breakdown"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(bar::Bar::new().name("Spent").data(values))
}

/// Render the chart container and the script that draws `chart` into it.
pub fn chart_view(chart: &Chart) -> Markup {
    let script = format!(
        r#"(function() {{
            if (typeof echarts === "undefined") {{
                return;
            }}
            const chart = echarts.init(document.getElementById("{CHART_ID}"));
            chart.setOption({chart});
            window.addEventListener('resize', chart.resize);

            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const updateTheme = () => {{
                chart.setTheme(darkModeMediaQuery.matches ? 'dark' : 'default');
            }};
            darkModeMediaQuery.addEventListener('change', updateTheme);
            updateTheme();
        }})();"#
    );

    html!(
        div id=(CHART_ID) class="min-h-[320px] w-full rounded dark:bg-gray-100" {}
        script { (PreEscaped(script)) }
    )
}
