mod category;
pub mod decimal_truncator;
pub mod dimension;
pub mod element_id;
mod layout;
pub mod percentage_renderer;
mod report;
pub mod scale;
pub mod value;

use crate::category::CategoryExtractor;
use crate::layout::LayoutPlanner;
use crate::report::ReportRenderer;
use schema::ChartSpec;
use schema::Output;

pub fn prepare(spec: ChartSpec) -> anyhow::Result<Output> {
    if spec.entries.is_empty() {
        anyhow::bail!("No data entry in the input")
    }

    let categories = CategoryExtractor.extract_categories(&spec.entries);
    let layout = LayoutPlanner.plan(&spec, &categories);
    let legend = ReportRenderer::default().render(&categories, layout.plot_width);
    Ok(Output { layout, legend })
}
