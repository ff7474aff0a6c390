//! Lazily evaluated value distributions over an ordered domain.
//!
//! A [`Distribution`] is built bottom-up from [`Distribution::constant`]
//! leaves with `+`, `*`, [`Distribution::restrict`] and
//! [`Distribution::defaulting_to`]. Nothing is materialised: every query walks
//! the composition tree and recomputes from the leaves.

use super::error::{Error, Result};
use super::ordered::{Ordered, Scalable};
use super::range::Range;
use std::ops::{Add, Mul};
use std::sync::Arc;

/// A composable mapping from points of `D` to values of `V` over a declared
/// range.
#[derive(Debug, Clone)]
pub enum Distribution<D, V> {
    /// The same value at every point of the domain.
    Constant(V),
    /// Pointwise sum of two distributions.
    Sum(Sum<D, V>),
    /// A distribution multiplied by an integer.
    Product(Product<D, V>),
    /// A distribution restricted to part of its range.
    Subset(Subset<D, V>),
    /// A distribution that falls back to another outside its own range.
    Defaulting(Defaulting<D, V>),
}

#[derive(Debug, Clone)]
pub struct Sum<D, V> {
    left: Arc<Distribution<D, V>>,
    right: Arc<Distribution<D, V>>,
    range: Range<D>,
}

impl<D, V> Sum<D, V> {
    pub fn left(&self) -> &Distribution<D, V> {
        &self.left
    }

    pub fn right(&self) -> &Distribution<D, V> {
        &self.right
    }
}

#[derive(Debug, Clone)]
pub struct Product<D, V> {
    inner: Arc<Distribution<D, V>>,
    multiplier: i64,
}

impl<D, V> Product<D, V> {
    pub fn inner(&self) -> &Distribution<D, V> {
        &self.inner
    }

    pub fn multiplier(&self) -> i64 {
        self.multiplier
    }
}

/// Invariant: `inner`'s range surrounds `range`.
#[derive(Debug, Clone)]
pub struct Subset<D, V> {
    inner: Arc<Distribution<D, V>>,
    range: Range<D>,
}

impl<D, V> Subset<D, V> {
    pub fn inner(&self) -> &Distribution<D, V> {
        &self.inner
    }
}

/// Invariant: the primary and backup ranges are near each other, and `range`
/// is their union.
#[derive(Debug, Clone)]
pub struct Defaulting<D, V> {
    primary: Arc<Distribution<D, V>>,
    backup: Arc<Distribution<D, V>>,
    range: Range<D>,
}

impl<D, V> Defaulting<D, V> {
    pub fn primary(&self) -> &Distribution<D, V> {
        &self.primary
    }

    pub fn backup(&self) -> &Distribution<D, V> {
        &self.backup
    }
}

impl<D: Ordered, V: Scalable> Distribution<D, V> {
    /// A distribution with `value` at every point.
    pub fn constant(value: V) -> Self {
        Distribution::Constant(value)
    }

    /// The range this distribution is declared valid over.
    pub fn range(&self) -> Range<D> {
        match self {
            Distribution::Constant(_) => Range::universal(),
            Distribution::Sum(sum) => sum.range.clone(),
            Distribution::Product(product) => product.inner.range(),
            Distribution::Subset(subset) => subset.range.clone(),
            Distribution::Defaulting(defaulting) => defaulting.range.clone(),
        }
    }

    /// Whether `point` lies in the declared range.
    pub fn contains(&self, point: &D) -> bool {
        self.range().contains(point)
    }

    /// Returns the value at `point`.
    ///
    /// Subsets reject points outside their range. Constants, sums and
    /// products answer for any point their children answer for.
    pub fn value(&self, point: &D) -> Result<V> {
        match self {
            Distribution::Constant(value) => Ok(value.clone()),
            Distribution::Sum(sum) => Ok(sum.left.value(point)? + sum.right.value(point)?),
            Distribution::Product(product) => scaled(product.inner.value(point)?, product.multiplier),
            Distribution::Subset(subset) => {
                if !subset.range.contains(point) {
                    return Err(Error::PointOutOfRange {
                        point: point.to_string(),
                        range: subset.range.to_string(),
                    });
                }
                subset.inner.value(point)
            }
            Distribution::Defaulting(defaulting) => {
                if defaulting.primary.contains(point) {
                    defaulting.primary.value(point)
                } else {
                    defaulting.backup.value(point)
                }
            }
        }
    }

    /// Returns the average value over `range`.
    ///
    /// `range` must be surrounded by the declared range. Only constants are
    /// true leaves, so sums and products distribute over the average the same
    /// way they do over [`value`](Self::value).
    ///
    /// A defaulting distribution can only average a range lying wholly on one
    /// side of its primary range's edge; a range straddling that edge yields
    /// [`Error::UnsupportedStraddle`]. The backup answers whenever the query
    /// shares no point with the primary range, including a query that merely
    /// touches it (`[5, 8)` against a primary of `[3, 5)`), rather than only
    /// when the two ranges are not [`near`](Range::near).
    ///
    /// Products whose value overflows yield [`Error::ScaleOverflow`].
    pub fn average(&self, range: &Range<D>) -> Result<V> {
        match self {
            Distribution::Constant(value) => Ok(value.clone()),
            Distribution::Sum(sum) => Ok(sum.left.average(range)? + sum.right.average(range)?),
            Distribution::Product(product) => scaled(product.inner.average(range)?, product.multiplier),
            Distribution::Subset(subset) => {
                check_surrounds(&subset.range, range)?;
                subset.inner.average(range)
            }
            Distribution::Defaulting(defaulting) => {
                check_surrounds(&defaulting.range, range)?;
                let primary = defaulting.primary.range();
                if primary.surrounds(range) {
                    defaulting.primary.average(range)
                } else if !primary.overlaps(range) {
                    defaulting.backup.average(range)
                } else {
                    Err(Error::UnsupportedStraddle {
                        query: range.to_string(),
                        primary: primary.to_string(),
                    })
                }
            }
        }
    }

    /// Point indexing: same as [`value`](Self::value).
    pub fn at(&self, point: &D) -> Result<V> {
        self.value(point)
    }

    /// Range indexing: same as [`restrict`](Self::restrict) on a copy of this
    /// distribution. Children are shared, not cloned.
    pub fn over(&self, range: Range<D>) -> Result<Self> {
        self.clone().restrict(range)
    }

    /// The pointwise sum of this distribution and `other`, declared over the
    /// intersection of their ranges.
    pub fn sum(self, other: Self) -> Self {
        let range = self.range().intersection(&other.range());
        Distribution::Sum(Sum {
            left: Arc::new(self),
            right: Arc::new(other),
            range,
        })
    }

    /// This distribution multiplied by an integer.
    pub fn scale(self, multiplier: i64) -> Self {
        Distribution::Product(Product {
            inner: Arc::new(self),
            multiplier,
        })
    }

    /// Restricts this distribution to `range`, which must lie within the
    /// declared range.
    pub fn restrict(self, range: Range<D>) -> Result<Self> {
        let outer = self.range();
        if !outer.surrounds(&range) {
            return Err(Error::NotSurrounded {
                outer: outer.to_string(),
                inner: range.to_string(),
            });
        }
        Ok(Distribution::Subset(Subset {
            inner: Arc::new(self),
            range,
        }))
    }

    /// Uses this distribution inside its range and `backup` everywhere else.
    ///
    /// The two ranges must overlap or touch; the result is declared over their
    /// union.
    pub fn defaulting_to(self, backup: Self) -> Result<Self> {
        let primary = self.range();
        let fallback = backup.range();
        if !primary.near(&fallback) {
            return Err(Error::NotNear {
                primary: primary.to_string(),
                backup: fallback.to_string(),
            });
        }
        Ok(Distribution::Defaulting(Defaulting {
            range: primary.union(&fallback),
            primary: Arc::new(self),
            backup: Arc::new(backup),
        }))
    }
}

fn scaled<V: Scalable>(value: V, multiplier: i64) -> Result<V> {
    value.checked_times(multiplier).ok_or_else(|| Error::ScaleOverflow {
        value: value.to_string(),
        multiplier,
    })
}

fn check_surrounds<D: Ordered>(declared: &Range<D>, query: &Range<D>) -> Result<()> {
    if declared.surrounds(query) {
        Ok(())
    } else {
        Err(Error::RangeOutOfRange {
            query: query.to_string(),
            range: declared.to_string(),
        })
    }
}

impl<D: Ordered, V: Scalable> Add for Distribution<D, V> {
    type Output = Distribution<D, V>;

    fn add(self, rhs: Distribution<D, V>) -> Self::Output {
        self.sum(rhs)
    }
}

impl<D: Ordered, V: Scalable> Add for &Distribution<D, V> {
    type Output = Distribution<D, V>;

    fn add(self, rhs: &Distribution<D, V>) -> Self::Output {
        self.clone().sum(rhs.clone())
    }
}

impl<D: Ordered, V: Scalable> Mul<i64> for Distribution<D, V> {
    type Output = Distribution<D, V>;

    fn mul(self, multiplier: i64) -> Self::Output {
        self.scale(multiplier)
    }
}

impl<D: Ordered, V: Scalable> Mul<i64> for &Distribution<D, V> {
    type Output = Distribution<D, V>;

    fn mul(self, multiplier: i64) -> Self::Output {
        self.clone().scale(multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::range::Bound;
    use crate::money::Money;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn r(start: i64, end: i64) -> Range<i64> {
        Range::between(start, end).unwrap()
    }

    fn constant(value: i64) -> Distribution<i64, i64> {
        Distribution::constant(value)
    }

    #[test]
    fn constant_is_the_same_everywhere() {
        let dist = Distribution::<i32, f64>::constant(3.14159);
        assert_eq!(dist.value(&-3).unwrap(), 3.14159);
        assert_eq!(dist.value(&9999999).unwrap(), 3.14159);
        assert_eq!(dist.value(&0).unwrap(), 3.14159);
        assert_eq!(dist.average(&Range::between(-1, 1).unwrap()).unwrap(), 3.14159);
        assert_eq!(dist.average(&Range::universal()).unwrap(), 3.14159);
        assert_eq!(dist.average(&Range::between(0, 0).unwrap()).unwrap(), 3.14159);
        assert_eq!(dist.range(), Range::universal());
    }

    #[test]
    fn sum_of_constants() {
        let sum = constant(-99) + constant(101);
        assert_eq!(sum.value(&0).unwrap(), 2);
        assert_eq!(sum.value(&i64::MAX).unwrap(), 2);
        assert_eq!(sum.average(&r(-5, 5)).unwrap(), 2);
        assert_eq!(sum.range(), Range::universal());
    }

    #[test]
    fn sum_range_is_intersection() {
        let left = constant(1).restrict(r(0, 10)).unwrap();
        let right = constant(2).restrict(r(5, 20)).unwrap();
        let sum = &left + &right;
        assert_eq!(sum.range(), r(5, 10));
        assert_eq!(sum.value(&7).unwrap(), 3);
        // a child subset still rejects points outside its own range
        assert!(matches!(sum.value(&2), Err(Error::PointOutOfRange { .. })));
    }

    #[test]
    fn product_scales_by_integer() {
        let product = constant(7) * -3;
        assert_eq!(product.value(&100).unwrap(), -21);
        assert_eq!(product.average(&r(0, 1)).unwrap(), -21);
        assert_eq!(product.range(), Range::universal());

        let restricted = constant(7).restrict(r(0, 4)).unwrap();
        assert_eq!((&restricted * 2).range(), r(0, 4));
    }

    #[test]
    fn product_overflow_is_an_error() {
        let product = constant(i64::MAX / 2) * 3;
        assert_eq!(
            product.value(&0),
            Err(Error::ScaleOverflow {
                value: (i64::MAX / 2).to_string(),
                multiplier: 3,
            })
        );
        assert!(matches!(product.average(&r(0, 1)), Err(Error::ScaleOverflow { .. })));

        let yearly = Distribution::<i64, Money>::constant(Money::from_cents(10_000)) * 9_000_000_000_000_000_000;
        assert!(matches!(yearly.value(&2025), Err(Error::ScaleOverflow { multiplier: 9_000_000_000_000_000_000, .. })));
    }

    #[test]
    fn product_of_money() {
        let monthly = Distribution::<i32, Money>::constant(Money::of(250, 50).unwrap());
        let yearly = monthly * 12;
        assert_eq!(yearly.value(&2024).unwrap(), Money::of(3006, 0).unwrap());
    }

    #[test]
    fn subset_of_constant() {
        let dist = Distribution::<f64, i64>::constant(26)
            .restrict(Range::between(-100.5, 67.8).unwrap())
            .unwrap();
        assert_eq!(dist.average(&Range::between(64.1, 64.8).unwrap()).unwrap(), 26);
        assert_eq!(dist.value(&-100.5).unwrap(), 26);
        assert_eq!(dist.range(), Range::between(-100.5, 67.8).unwrap());

        let err = dist.value(&68.0).unwrap_err();
        assert_eq!(
            err,
            Error::PointOutOfRange {
                point: "68".to_string(),
                range: "[-100.5, 67.8)".to_string(),
            }
        );
        assert!(matches!(dist.value(&67.8), Err(Error::PointOutOfRange { .. })));
    }

    #[test]
    fn subset_average_outside_range_fails() {
        let dist = constant(26).restrict(r(0, 10)).unwrap();
        assert!(matches!(
            dist.average(&r(5, 11)),
            Err(Error::RangeOutOfRange { .. })
        ));
        assert!(matches!(
            dist.average(&Range::universal()),
            Err(Error::RangeOutOfRange { .. })
        ));
    }

    #[test]
    fn restrict_must_be_surrounded() {
        let dist = constant(1).restrict(r(0, 10)).unwrap();
        let err = dist.clone().restrict(r(5, 15)).unwrap_err();
        assert_eq!(
            err,
            Error::NotSurrounded {
                outer: "[0, 10)".to_string(),
                inner: "[5, 15)".to_string(),
            }
        );
        assert!(dist.restrict(r(2, 3)).is_ok());
    }

    #[test]
    fn restrict_to_own_range_is_identity() {
        let dist = constant(4) + constant(5).restrict(r(-10, 10)).unwrap();
        let same = dist.over(dist.range()).unwrap();
        for point in -10..10 {
            assert_eq!(same.value(&point).unwrap(), dist.value(&point).unwrap());
        }
    }

    #[test]
    fn indexing_sugar() {
        let dist = constant(8);
        assert_eq!(dist.at(&3).unwrap(), 8);
        let sub = dist.over(r(0, 5)).unwrap();
        assert_eq!(sub.range(), r(0, 5));
        assert_eq!(dist.range(), Range::universal());
    }

    #[test]
    fn defaulting_value() {
        let primary = constant(0).restrict(r(-15, -10)).unwrap();
        let dist = primary.defaulting_to(constant(5)).unwrap();
        assert_eq!(dist.value(&-13).unwrap(), 0);
        assert_eq!(dist.value(&-15).unwrap(), 0);
        assert_eq!(dist.value(&-10).unwrap(), 5);
        assert_eq!(dist.value(&300).unwrap(), 5);
        assert_eq!(dist.value(&-300).unwrap(), 5);
        assert_eq!(dist.range(), Range::universal());
    }

    #[test]
    fn defaulting_requires_near_ranges() {
        let primary = constant(0).restrict(r(-15, -10)).unwrap();
        let backup = constant(5).restrict(r(-5, 0)).unwrap();
        let err = primary.defaulting_to(backup).unwrap_err();
        assert_eq!(
            err,
            Error::NotNear {
                primary: "[-15, -10)".to_string(),
                backup: "[-5, 0)".to_string(),
            }
        );
    }

    #[test]
    fn defaulting_adjacent_ranges() {
        let primary = constant(1).restrict(r(0, 10)).unwrap();
        let backup = constant(2).restrict(r(10, 20)).unwrap();
        let dist = primary.defaulting_to(backup).unwrap();
        assert_eq!(dist.range(), r(0, 20));
        assert_eq!(dist.value(&9).unwrap(), 1);
        assert_eq!(dist.value(&10).unwrap(), 2);
        assert!(matches!(dist.value(&20), Err(Error::PointOutOfRange { .. })));
    }

    #[test]
    fn defaulting_average() {
        let primary = constant(0).restrict(r(-15, -10)).unwrap();
        let dist = primary.defaulting_to(constant(5)).unwrap();

        assert_eq!(dist.average(&r(-14, -11)).unwrap(), 0);
        assert_eq!(dist.average(&r(-15, -10)).unwrap(), 0);
        assert_eq!(dist.average(&r(0, 100)).unwrap(), 5);
        // touching the primary range is not overlapping it
        assert_eq!(dist.average(&r(-10, 0)).unwrap(), 5);
        assert_eq!(dist.average(&Range::ending_at(-15).unwrap()).unwrap(), 5);
    }

    #[test]
    fn defaulting_average_straddling_edge_is_unsupported() {
        let primary = constant(0).restrict(r(-15, -10)).unwrap();
        let dist = primary.defaulting_to(constant(5)).unwrap();
        let err = dist.average(&r(-12, 0)).unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedStraddle {
                query: "[-12, 0)".to_string(),
                primary: "[-15, -10)".to_string(),
            }
        );
        assert!(matches!(
            dist.average(&Range::universal()),
            Err(Error::UnsupportedStraddle { .. })
        ));
    }

    #[test]
    fn defaulting_average_outside_declared_range_fails() {
        let primary = constant(1).restrict(r(0, 10)).unwrap();
        let backup = constant(2).restrict(r(5, 20)).unwrap();
        let dist = primary.defaulting_to(backup).unwrap();
        assert!(matches!(
            dist.average(&r(15, 25)),
            Err(Error::RangeOutOfRange { .. })
        ));
        assert_eq!(dist.average(&r(12, 18)).unwrap(), 2);
    }

    #[test]
    fn shared_children() {
        let base = constant(3).restrict(r(0, 100)).unwrap();
        let doubled = &base + &base;
        let tripled = &doubled + &base;
        assert_eq!(doubled.value(&50).unwrap(), 6);
        assert_eq!(tripled.value(&50).unwrap(), 9);
        assert_eq!(base.value(&50).unwrap(), 3);
    }

    #[test]
    fn decimal_values_over_dates() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let inflation = Distribution::<NaiveDate, rust_decimal::Decimal>::constant(dec!(0.031))
            .restrict(Range::new(Bound::Finite(date(2022, 1, 1)), Bound::Finite(date(2023, 1, 1))).unwrap())
            .unwrap()
            .defaulting_to(Distribution::constant(dec!(0.02)))
            .unwrap();
        assert_eq!(inflation.value(&date(2022, 6, 30)).unwrap(), dec!(0.031));
        assert_eq!(inflation.value(&date(2023, 1, 1)).unwrap(), dec!(0.02));
        assert_eq!((inflation * 2).value(&date(2021, 1, 1)).unwrap(), dec!(0.04));
    }

    #[test]
    fn exhaustive_match_over_variants() {
        fn depth(dist: &Distribution<i64, i64>) -> usize {
            match dist {
                Distribution::Constant(_) => 1,
                Distribution::Sum(sum) => 1 + depth(sum.left()).max(depth(sum.right())),
                Distribution::Product(product) => 1 + depth(product.inner()),
                Distribution::Subset(subset) => 1 + depth(subset.inner()),
                Distribution::Defaulting(d) => 1 + depth(d.primary()).max(depth(d.backup())),
            }
        }

        let dist = (constant(1).restrict(r(0, 5)).unwrap() * 2)
            .defaulting_to(constant(0))
            .unwrap()
            + constant(1);
        assert_eq!(depth(&dist), 5);
    }

    #[test]
    fn distributions_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Distribution<NaiveDate, Money>>();
        assert_send_sync::<Distribution<f64, f64>>();
    }
}
