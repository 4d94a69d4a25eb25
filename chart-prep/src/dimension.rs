use serde_json::Value;

/// Requested size of a plot region: an absolute span or a percentage of
/// the containing total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Absolute(f64),
    Relative(f64),
}

impl Dimension {
    /// Reads a number or a `"60%"`-style string. Anything else, including
    /// a string whose `%` comes first, is unreadable.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => number.as_f64().map(Self::Absolute),
            Value::String(text) => match text.find('%') {
                Some(index) if index > 0 => text[..index].parse().ok().map(Self::Relative),
                _ => None,
            },
            _ => None,
        }
    }

    /// Resolves against `total`. An unreadable or oversized result clamps
    /// to `total` itself; negative spans pass through.
    pub fn resolve(&self, total: f64) -> f64 {
        let value = match self {
            Self::Absolute(value) => *value,
            Self::Relative(percent) => total * percent / 100.0,
        };
        if value.is_nan() || value > total {
            total
        } else {
            value
        }
    }
}

/// Boundary convenience: a value that never parsed into a dimension
/// resolves to the whole total.
pub fn resolve_span(value: &Value, total: f64) -> f64 {
    Dimension::from_value(value).map_or(total, |dimension| dimension.resolve(total))
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use test_case::case;

    #[case(json!("50%") => Some(Dimension::Relative(50.0))    ; "Percent string")]
    #[case(json!(120) => Some(Dimension::Absolute(120.0))     ; "Number")]
    #[case(json!("12.5%") => Some(Dimension::Relative(12.5))  ; "Fractional percent")]
    #[case(json!("%50") => None                               ; "Leading percent sign")]
    #[case(json!("half") => None                              ; "Plain text")]
    #[case(json!("50") => None                                ; "Numeric text without unit")]
    #[case(json!(null) => None                                ; "Null")]
    fn from_value(value: Value) -> Option<Dimension> {
        Dimension::from_value(&value)
    }

    #[test]
    fn resolve_percent_of_total() {
        assert_eq!(100.0, Dimension::Relative(50.0).resolve(200.0));
    }

    #[test]
    fn resolve_clamps_to_total() {
        assert_eq!(200.0, Dimension::Absolute(250.0).resolve(200.0));
    }

    #[test]
    fn resolve_keeps_values_in_range() {
        assert_eq!(120.0, Dimension::Absolute(120.0).resolve(200.0));
        assert_eq!(-20.0, Dimension::Absolute(-20.0).resolve(200.0));
    }

    #[test]
    fn resolve_span_falls_back_to_total() {
        // Given
        let unreadable = json!(true);

        // Then
        assert_eq!(640.0, resolve_span(&unreadable, 640.0));
        assert_eq!(320.0, resolve_span(&json!("50%"), 640.0));
    }
}
