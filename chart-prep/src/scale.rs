/// Overall `[min, max]` swept by a set of ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesBounds {
    pub min: f64,
    pub max: f64,
}

impl SeriesBounds {
    /// True for the sentinel an empty `extent` produces. Callers check
    /// this before treating the bounds as a real domain.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for SeriesBounds {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

/// Bounds of the whole set of `[min, max]` pairs. Each pair is reduced
/// element-wise, so a reversed pair still contributes correctly.
pub fn extent(pairs: &[[f64; 2]]) -> SeriesBounds {
    pairs.iter().fold(SeriesBounds::default(), |bounds, pair| {
        let low = pair[0].min(pair[1]);
        let high = pair[0].max(pair[1]);
        SeriesBounds {
            min: bounds.min.min(low),
            max: bounds.max.max(high),
        }
    })
}

/// Integers `from..to`; empty when `from >= to`.
pub fn range(from: i64, to: i64) -> Vec<i64> {
    (from..to).collect()
}

/// Whichever of `a` and `b` has the greater key; ties and incomparable
/// keys go to `b`.
pub fn max_by<T, K: PartialOrd>(key: impl Fn(&T) -> K, a: T, b: T) -> T {
    if key(&a) > key(&b) { a } else { b }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::case;

    #[case(3, 3 => Vec::<i64>::new() ; "Empty when equal")]
    #[case(4, 3 => Vec::<i64>::new() ; "Empty when reversed")]
    #[case(0, 3 => vec![0, 1, 2]     ; "Half open")]
    #[case(-2, 1 => vec![-2, -1, 0]  ; "Negative start")]
    fn range_of(from: i64, to: i64) -> Vec<i64> {
        range(from, to)
    }

    #[test]
    fn extent_of_pairs() {
        // Given
        let pairs = [[0.0, 10.0], [5.0, 2.0], [-3.0, 4.0]];

        // When
        let bounds = extent(&pairs);

        // Then
        assert_eq!(SeriesBounds { min: -3.0, max: 10.0 }, bounds);
        assert!(!bounds.is_empty());
    }

    #[test]
    fn extent_of_nothing() {
        // When
        let bounds = extent(&[]);

        // Then
        assert_eq!(f64::INFINITY, bounds.min);
        assert_eq!(f64::NEG_INFINITY, bounds.max);
        assert!(bounds.is_empty());
    }

    #[test]
    fn max_by_key() {
        assert_eq!(("b", 3), max_by(|pair: &(&str, i32)| pair.1, ("a", 2), ("b", 3)));
        assert_eq!(("a", 4), max_by(|pair: &(&str, i32)| pair.1, ("a", 4), ("b", 3)));
    }

    #[test]
    fn max_by_tie_favors_the_second() {
        assert_eq!(("b", 3), max_by(|pair: &(&str, i32)| pair.1, ("a", 3), ("b", 3)));
    }
}
