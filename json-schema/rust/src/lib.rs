use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Chart description consumed by the preparation pipeline.
#[derive(Deserialize, Debug)]
pub struct ChartSpec {
    /// Width of the container the plot lives in.
    pub viewport: f64,
    /// Requested plot width: a number or a percent string such as `"60%"`.
    #[serde(default)]
    pub width: Value,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    pub entries: Vec<EntrySpec>,
}

#[derive(Deserialize, Debug)]
pub struct EntrySpec {
    pub name: String,
    /// A number, a list of samples, or an object holding one of those.
    pub value: Value,
}

#[derive(Serialize, Debug)]
pub struct Output {
    pub layout: LayoutReport,
    pub legend: Vec<SegmentReport>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct LayoutReport {
    pub plot_width: f64,
    /// Absent when no entry carried numeric data.
    pub domain: Option<AxisDomain>,
    pub tick_positions: Vec<f64>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct SegmentReport {
    pub name: String,
    /// Share of the total as a display string, `"-"` for unreadable entries.
    pub share: String,
    pub start: f64,
    pub length: f64,
    pub element_id: String,
    pub dominant: bool,
}

fn default_tick_count() -> usize {
    5
}
