use crate::category::Category;
use crate::dimension::resolve_span;
use crate::scale::extent;
use crate::scale::range;
use schema::AxisDomain;
use schema::ChartSpec;
use schema::LayoutReport;

pub struct LayoutPlanner;

impl LayoutPlanner {
    pub fn plan(&self, spec: &ChartSpec, categories: &[Category]) -> LayoutReport {
        let plot_width = resolve_span(&spec.width, spec.viewport);
        let bands: Vec<[f64; 2]> = categories
            .iter()
            .filter_map(|category| {
                category
                    .band
                    .or_else(|| category.value.map(|value| [value; 2]))
            })
            .collect();

        let bounds = extent(&bands);
        if bounds.is_empty() {
            // Nothing numeric came in; there is no domain to draw.
            return LayoutReport {
                plot_width,
                domain: None,
                tick_positions: Vec::new(),
            };
        }
        LayoutReport {
            plot_width,
            domain: Some(AxisDomain {
                min: bounds.min,
                max: bounds.max,
            }),
            tick_positions: tick_positions(bounds.min, bounds.max, spec.tick_count),
        }
    }
}

fn tick_positions(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        count => {
            let step = (max - min) / (count - 1) as f64;
            range(0, count as i64)
                .into_iter()
                .map(|index| min + step * index as f64)
                .collect()
        }
    }
}
