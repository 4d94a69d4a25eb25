/// Renders a number with a fixed count of fractional digits, discarding the
/// remainder instead of rounding it.
pub struct DecimalTruncator;

impl DecimalTruncator {
    /// The fractional part, when present, always has exactly `precision`
    /// digits. The only way the output can exceed the true value is the
    /// carry into the integer part when the digit block floors to a full
    /// extra digit.
    pub fn truncate(&self, value: f64, precision: usize) -> String {
        // One guard digit beyond the requested precision, only to tell a
        // zero fraction from a non-zero one.
        let rendered = format!("{:.*}", precision + 1, value);
        let (integer_text, fraction) = match rendered.split_once('.') {
            Some((integer_text, fraction)) => (integer_text, Some(fraction)),
            None => (rendered.as_str(), None),
        };
        // An integer part too wide for i64 keeps its rendered digits; a
        // value that wide has no fraction, so the carry below never needs
        // it as a number. In range, parsing normalizes "-0".
        let integer_part: Option<i64> = integer_text.parse().ok();
        let integer_text = match integer_part {
            Some(number) => number.to_string(),
            None => integer_text.to_string(),
        };

        let Some(digits) = fraction.filter(|digits| digits.bytes().any(|b| b != b'0')) else {
            return if precision != 0 && integer_text != "0" {
                format!("{integer_text}.{}", "0".repeat(precision))
            } else {
                // A zero integer part stays bare: "0", never "0.00".
                integer_text
            };
        };
        if precision == 0 {
            return integer_text;
        }

        let block: f64 = format!("0.{digits}").parse().unwrap_or(0.0);
        let floored = (block * 10f64.powi(precision as i32)).floor().to_string();
        if floored.len() == precision + 1 {
            // The digit block parsed up to 1.0 and floored to a full extra
            // digit, so the excess carries into the integer part.
            format!(
                "{}.{}",
                integer_part.unwrap_or(0) + 1,
                "0".repeat(precision)
            )
        } else if floored.len() < precision {
            format!(
                "{integer_text}.{}{floored}",
                "0".repeat(precision - floored.len())
            )
        } else {
            format!("{integer_text}.{}", &floored[..precision])
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::case;

    #[case(12.345, 2 => "12.34"    ; "Discards the remainder")]
    #[case(0.994, 2 => "0.99"      ; "Never rounds up")]
    #[case(0.123456, 3 => "0.123"  ; "Guard digit does not leak into the output")]
    #[case(0.999999, 2 => "1.00"   ; "Carries into the integer part")]
    #[case(0.042, 2 => "0.04"      ; "Restores a leading zero")]
    #[case(0.005, 2 => "0.00"      ; "Fraction below the precision")]
    #[case(12.0, 2 => "12.00"      ; "Pads a zero fraction")]
    #[case(0.0, 2 => "0"           ; "A zero value stays bare")]
    #[case(7.9, 0 => "7"           ; "Zero precision discards the fraction")]
    #[case(0.5, 0 => "0"           ; "Zero precision never carries")]
    #[case(-1.25, 1 => "-1.2"      ; "Negative values truncate the fraction")]
    #[case(1e19, 2 => "10000000000000000000.00" ; "Wide values keep their digits")]
    fn truncate(value: f64, precision: usize) -> String {
        DecimalTruncator.truncate(value, precision)
    }
}
