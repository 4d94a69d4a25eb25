use crate::decimal_truncator::DecimalTruncator;

/// Turns a ratio into a percentage label, truncated to two fractional
/// digits. Ratios beyond `cap` collapse into a `">{cap}"` marker and
/// unreadable ratios into a bare `"-"`.
pub struct PercentageRenderer {
    truncator: DecimalTruncator,
    unit: String,
    cap: f64,
}

impl Default for PercentageRenderer {
    fn default() -> Self {
        Self {
            truncator: DecimalTruncator,
            unit: "%".into(),
            cap: 99_999.0,
        }
    }
}

#[mockall::automock]
impl PercentageRenderer {
    pub fn render(&self, ratio: f64) -> String {
        if ratio.is_nan() {
            return "-".into();
        }
        let fixed = self.truncator.truncate(ratio * 100.0, 2);
        let float_value: f64 = fixed.parse().unwrap_or(0.0);
        let integer_value: f64 = fixed
            .split('.')
            .next()
            .unwrap_or("0")
            .parse()
            .unwrap_or(0.0);

        let displayed = if float_value > self.cap {
            format!(">{}", self.cap)
        } else if float_value == integer_value {
            // The fraction truncated away entirely; drop the ".00".
            integer_value.to_string()
        } else {
            fixed
        };
        format!("{displayed}{}", self.unit)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::case;

    #[case(f64::NAN => "-"        ; "Unreadable ratio")]
    #[case(1.0 => "100%"          ; "Zero fraction collapses to the integer")]
    #[case(0.12345 => "12.34%"    ; "Truncated, not rounded")]
    #[case(0.284513 => "28.45%"   ; "Full decimal")]
    #[case(1000.0 => ">99999%"    ; "Beyond the cap")]
    #[case(1e17 => ">99999%"      ; "Far beyond the cap")]
    #[case(0.0 => "0%"            ; "Zero")]
    #[case(-0.1234 => "-12.34%"   ; "Negative ratio")]
    fn render(ratio: f64) -> String {
        PercentageRenderer::default().render(ratio)
    }

    #[test]
    fn render_with_custom_unit_and_cap() {
        // Given
        let renderer = PercentageRenderer {
            truncator: DecimalTruncator,
            unit: " pt".into(),
            cap: 500.0,
        };

        // Then
        assert_eq!("250 pt", renderer.render(2.5));
        assert_eq!(">500 pt", renderer.render(6.0));
    }
}
