use crate::category::Category;
use crate::element_id::ElementIdAllocator;
use crate::scale::max_by;
use derive_more::Add;
use derive_more::From;
use derive_more::Mul;
use itertools::Itertools;
use schema::SegmentReport;

#[mockall_double::double]
use crate::percentage_renderer::PercentageRenderer;

/// Length along the plot axis, in viewport units.
#[derive(Debug, From, PartialEq, Add, Clone, Copy, Default, Mul)]
pub struct Span {
    pub value: f64,
}

#[derive(Default)]
pub struct ReportRenderer {
    percentage_renderer: PercentageRenderer,
    ids: ElementIdAllocator,
}

impl ReportRenderer {
    /// Builds the legend: one stacked segment per category, largest share
    /// first, with the single dominant category flagged.
    pub fn render(&self, categories: &[Category], plot_width: f64) -> Vec<SegmentReport> {
        let total: f64 = categories.iter().filter_map(|category| category.value).sum();
        // Names can repeat, so the winner is tracked by position.
        let dominant = categories
            .iter()
            .enumerate()
            .reduce(|a, b| max_by(|(_, category)| sort_key(category), a, b))
            .filter(|(_, category)| category.value.is_some())
            .map(|(index, _)| index);

        let mut offset = Span::default();
        categories
            .iter()
            .enumerate()
            .sorted_unstable_by(|(_, a), (_, b)| sort_key(b).total_cmp(&sort_key(a)))
            .map(|(index, category)| {
                let segment = self.render_segment(
                    category,
                    total,
                    plot_width,
                    offset,
                    dominant == Some(index),
                );
                offset = offset + Span::from(segment.length);
                segment
            })
            .collect()
    }

    fn render_segment(
        &self,
        category: &Category,
        total: f64,
        plot_width: f64,
        start: Span,
        dominant: bool,
    ) -> SegmentReport {
        // Shares are undefined against a zero total.
        let ratio = category
            .value
            .filter(|_| total != 0.0)
            .map_or(f64::NAN, |value| value / total);
        let length = if ratio.is_nan() {
            Span::default()
        } else {
            Span::from(ratio) * plot_width
        };
        SegmentReport {
            name: category.label.to_string(),
            share: self.percentage_renderer.render(ratio),
            start: start.value,
            length: length.value,
            element_id: self.ids.allocate("segment-"),
            dominant,
        }
    }
}

fn sort_key(category: &Category) -> f64 {
    category.value.unwrap_or(f64::NEG_INFINITY)
}
