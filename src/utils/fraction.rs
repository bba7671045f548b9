use std::cmp::Ordering;

/// A non-negative ratio of two integers. The denominator must not be zero.
#[derive(Debug, Copy, Clone)]
pub struct Fraction {
    numerator: u32,
    denominator: u32,
}

impl Fraction {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        debug_assert!(denominator != 0);
        Fraction {
            numerator,
            denominator,
        }
    }

    /// Computes `floor(value * self)` without going through floating point,
    /// so that e.g. `7 * (3000/7)` is exactly 3000 and not 2999.
    pub fn scale_floor(&self, value: u32) -> u64 {
        u64::from(value) * u64::from(self.numerator) / u64::from(self.denominator)
    }

    pub fn to_float(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = self.cross_multiply(other);
        a == b
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.cross_multiply(other);
        a.cmp(&b)
    }
}

impl Fraction {
    /// Cross-multiplication to compare fractions without using floating-point arithmetic
    /// `a/b < c/d` is equivalent to `a * d < c * b`
    fn cross_multiply(&self, other: &Self) -> (u64, u64) {
        (
            u64::from(self.numerator) * u64::from(other.denominator),
            u64::from(other.numerator) * u64::from(self.denominator),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_equality() {
        let frac1 = Fraction::new(1, 2);
        let frac2 = Fraction::new(2, 4);
        assert_eq!(frac1, frac2);

        let frac3 = Fraction::new(3, 4);
        assert_ne!(frac1, frac3);
    }

    #[test]
    fn test_fraction_min_picks_smaller_ratio() {
        // 3000/4000 vs 3000/2000
        let width_ratio = Fraction::new(3000, 4000);
        let height_ratio = Fraction::new(3000, 2000);
        assert!(width_ratio < height_ratio);
        assert_eq!(width_ratio.min(height_ratio), Fraction::new(3, 4));
    }

    #[test]
    fn test_scale_floor() {
        let ratio = Fraction::new(3000, 4000);
        assert_eq!(ratio.scale_floor(4000), 3000);
        assert_eq!(ratio.scale_floor(2000), 1500);
        // rounds down
        assert_eq!(Fraction::new(1, 3).scale_floor(10), 3);
    }

    #[test]
    fn test_scale_floor_is_exact_where_floats_are_not() {
        let ratio = Fraction::new(3000, 7);
        assert_eq!(ratio.scale_floor(7), 3000);
        let ratio = Fraction::new(3000, 49);
        assert_eq!(ratio.scale_floor(49), 3000);
    }

    #[test]
    fn test_scale_floor_does_not_overflow() {
        let ratio = Fraction::new(u32::MAX, 1);
        let max = u64::from(u32::MAX);
        assert_eq!(ratio.scale_floor(u32::MAX), max * max);
    }

    #[test]
    fn test_to_float() {
        assert_eq!(Fraction::new(3, 4).to_float(), 0.75);
    }
}
