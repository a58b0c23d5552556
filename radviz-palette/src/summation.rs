//! Exactly-rounded floating point summation.
//!
//! Every projection accumulates through [`fsum`], so results do not depend on
//! the order of the terms and match reference outputs bit-for-bit.

/// Running exact sum kept as a list of non-overlapping partials
/// (Shewchuk's algorithm).
#[derive(Debug, Clone, Default)]
pub struct ExactSum {
    partials: Vec<f64>,
    /// Sum of non-finite terms; once set it decides the result.
    special: Option<f64>,
    /// A finite input overflowed the partials.
    overflowed: bool,
}

impl ExactSum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one term to the running sum.
    pub fn add(&mut self, value: f64) {
        if !value.is_finite() {
            self.special = Some(self.special.map_or(value, |s| s + value));
            return;
        }

        let mut x = value;
        let mut kept = 0;
        for j in 0..self.partials.len() {
            let mut y = self.partials[j];
            if x.abs() < y.abs() {
                std::mem::swap(&mut x, &mut y);
            }
            let hi = x + y;
            let lo = y - (hi - x);
            if lo != 0.0 {
                self.partials[kept] = lo;
                kept += 1;
            }
            x = hi;
        }
        self.partials.truncate(kept);

        if x != 0.0 {
            if x.is_finite() {
                self.partials.push(x);
            } else {
                self.overflowed = true;
                self.special = Some(self.special.map_or(x, |s| s + x));
                self.partials.clear();
            }
        }
    }

    /// Round the partials to the nearest representable double.
    pub fn value(&self) -> f64 {
        if let Some(special) = self.special {
            return special;
        }

        let p = &self.partials;
        let mut n = p.len();
        if n == 0 {
            return 0.0;
        }

        n -= 1;
        let mut hi = p[n];
        let mut lo = 0.0;
        while n > 0 {
            let x = hi;
            n -= 1;
            let y = p[n];
            hi = x + y;
            lo = y - (hi - x);
            if lo != 0.0 {
                break;
            }
        }

        // Half-way case: the discarded partials decide the rounding direction.
        if n > 0 && ((lo < 0.0 && p[n - 1] < 0.0) || (lo > 0.0 && p[n - 1] > 0.0)) {
            let y = lo * 2.0;
            let x = hi + y;
            if y == x - hi {
                hi = x;
            }
        }
        hi
    }

    /// Finite terms summed past `f64::MAX`; [`Self::value`] is then infinite.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }
}

impl Extend<f64> for ExactSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

/// Exactly-rounded sum of an iterator of doubles, or `None` when finite
/// terms overflow the double range.
pub fn fsum<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let mut sum = ExactSum::new();
    sum.extend(values);
    (!sum.overflowed()).then(|| sum.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sum_is_zero() {
        assert_eq!(fsum(std::iter::empty()), Some(0.0));
    }

    #[test]
    fn recovers_cancelled_terms() {
        // Naive left-to-right summation returns 0.0 here.
        assert_eq!(fsum([1e100, 1.0, -1e100]), Some(1.0));
        assert_eq!(fsum([1e16, 1.0, 1e-16]), Some(10000000000000002.0));
    }

    #[test]
    fn tenths_sum_exactly() {
        assert_eq!(fsum(vec![0.1; 10]), Some(1.0));
        let naive: f64 = vec![0.1; 10].iter().sum();
        assert_ne!(naive, 1.0);
    }

    #[test]
    fn order_independent() {
        let forward = [0.3, 1e-17, 2.5e15, -0.7, 1e-3, -2.5e15];
        let mut backward = forward;
        backward.reverse();
        assert_eq!(fsum(forward), fsum(backward));
    }

    #[test]
    fn half_way_rounding_uses_trailing_partials() {
        // 1 + 2^-53 + 2^-106 rounds up, not to even.
        let tiny = 2f64.powi(-53);
        assert_eq!(fsum([1.0, tiny, tiny * tiny]), Some(1.0 + 2f64.powi(-52)));
    }

    #[test]
    fn non_finite_terms_dominate() {
        assert_eq!(fsum([1.0, f64::INFINITY]), Some(f64::INFINITY));
        assert!(fsum([f64::INFINITY, f64::NEG_INFINITY]).is_some_and(f64::is_nan));
    }

    #[test]
    fn overflow_is_reported() {
        let mut sum = ExactSum::new();
        sum.extend([f64::MAX, f64::MAX]);
        assert!(sum.overflowed());
        assert_eq!(sum.value(), f64::INFINITY);
        assert_eq!(fsum([f64::MAX, f64::MAX]), None);
        // Cancelling back into range does not undo the overflow.
        assert_eq!(fsum([f64::MAX, f64::MAX, -f64::MAX]), None);
    }
}
