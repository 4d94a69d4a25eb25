use crate::value::ValueKind;
use crate::value::classify;
use crate::value::first_member;
use derive_more::Display;
use schema::EntrySpec;
use serde_json::Value;
use std::rc::Rc;

/// Display name of a category.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct Label {
    value: Rc<str>,
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub label: Label,
    /// `None` when the entry's value could not be read as numeric.
    pub value: Option<f64>,
    /// `[min, max]` swept by a sample list, when the entry carried one.
    pub band: Option<[f64; 2]>,
}

pub struct CategoryExtractor;

impl CategoryExtractor {
    pub fn extract_categories(&self, entries: &[EntrySpec]) -> Vec<Category> {
        entries
            .iter()
            .map(|entry| {
                let (value, band) = read_value(&entry.value);
                Category {
                    label: entry.name.as_str().into(),
                    value,
                    band,
                }
            })
            .collect()
    }
}

fn read_value(value: &Value) -> (Option<f64>, Option<[f64; 2]>) {
    match classify(value) {
        ValueKind::Numeric => (value.as_f64(), None),
        ValueKind::List => value
            .as_array()
            .map_or((None, None), |samples| read_samples(samples)),
        // An object is read through its first member.
        ValueKind::Map => first_member(value).map_or((None, None), read_value),
        ValueKind::Text | ValueKind::Other => (None, None),
    }
}

/// The last sample is the category value; the band spans all samples. One
/// unreadable sample invalidates the whole list.
fn read_samples(samples: &[Value]) -> (Option<f64>, Option<[f64; 2]>) {
    let numbers: Option<Vec<f64>> = samples.iter().map(Value::as_f64).collect();
    match numbers.as_deref() {
        Some(numbers) if !numbers.is_empty() => {
            let low = numbers.iter().copied().fold(f64::INFINITY, f64::min);
            let high = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (numbers.last().copied(), Some([low, high]))
        }
        _ => (None, None),
    }
}
