use super::error::{Error, Result};
use super::ordered::Ordered;
use std::cmp::Ordering;
use std::fmt;

/// One end of a [`Range`]: either a finite value or one of the two infinities.
///
/// Ordered `NegativeInfinity < Finite(_) < PositiveInfinity`. Comparisons that
/// involve an infinity never look at the finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound<T> {
    NegativeInfinity,
    Finite(T),
    PositiveInfinity,
}

impl<T> Bound<T> {
    fn rank(&self) -> u8 {
        match self {
            Bound::NegativeInfinity => 0,
            Bound::Finite(_) => 1,
            Bound::PositiveInfinity => 2,
        }
    }

    /// Returns the finite value, if any.
    pub fn finite(&self) -> Option<&T> {
        match self {
            Bound::Finite(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: PartialOrd> Bound<T> {
    /// Compares this bound with a point of the domain.
    fn cmp_point(&self, point: &T) -> Option<Ordering> {
        match self {
            Bound::NegativeInfinity => Some(Ordering::Less),
            Bound::Finite(value) => value.partial_cmp(point),
            Bound::PositiveInfinity => Some(Ordering::Greater),
        }
    }
}

impl<T: PartialOrd> PartialOrd for Bound<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Bound::Finite(a), Bound::Finite(b)) => a.partial_cmp(b),
            _ => Some(self.rank().cmp(&other.rank())),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Bound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::NegativeInfinity => write!(f, "-inf"),
            Bound::Finite(value) => write!(f, "{}", value),
            Bound::PositiveInfinity => write!(f, "+inf"),
        }
    }
}

/// An interval over an ordered domain.
///
/// Start is inclusive and end is exclusive. Either side may be unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
    start: Bound<T>,
    end: Bound<T>,
}

impl<T: Ordered> Range<T> {
    /// Creates a range, checking that `start <= end`.
    ///
    /// The start may not be positive infinity, the end may not be negative
    /// infinity, and finite bounds must be comparable with themselves.
    pub fn new(start: Bound<T>, end: Bound<T>) -> Result<Self> {
        match validate(&start, &end) {
            Ok(()) => Ok(Range { start, end }),
            Err(reason) => Err(Error::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
                reason,
            }),
        }
    }

    /// Creates a range with two finite bounds.
    pub fn between(start: T, end: T) -> Result<Self> {
        Range::new(Bound::Finite(start), Bound::Finite(end))
    }

    /// Creates a range from `start` onwards, forever.
    pub fn starting_at(start: T) -> Result<Self> {
        Range::new(Bound::Finite(start), Bound::PositiveInfinity)
    }

    /// Creates a range from the beginning of time until `end`.
    pub fn ending_at(end: T) -> Result<Self> {
        Range::new(Bound::NegativeInfinity, Bound::Finite(end))
    }

    /// The range covering the whole domain.
    pub fn universal() -> Self {
        Range {
            start: Bound::NegativeInfinity,
            end: Bound::PositiveInfinity,
        }
    }

    pub fn start(&self) -> &Bound<T> {
        &self.start
    }

    pub fn end(&self) -> &Bound<T> {
        &self.end
    }

    /// Whether this range is a single finite boundary with no points in it.
    pub fn is_empty(&self) -> bool {
        match (&self.start, &self.end) {
            (Bound::Finite(start), Bound::Finite(end)) => start == end,
            _ => false,
        }
    }

    /// Returns whether this range contains the given point.
    pub fn contains(&self, point: &T) -> bool {
        matches!(
            self.start.cmp_point(point),
            Some(Ordering::Less | Ordering::Equal)
        ) && matches!(self.end.cmp_point(point), Some(Ordering::Greater))
    }

    /// Returns whether this range covers the entirety of `other`.
    pub fn surrounds(&self, other: &Range<T>) -> bool {
        le(&self.start, &other.start) && le(&other.end, &self.end)
    }

    /// Returns whether this range overlaps or is adjacent to `other`.
    pub fn near(&self, other: &Range<T>) -> bool {
        le(&self.start, &other.end) && le(&other.start, &self.end)
    }

    /// Returns whether this range shares at least one boundary-exclusive
    /// stretch with `other`. Adjacent ranges do not overlap.
    pub fn overlaps(&self, other: &Range<T>) -> bool {
        lt(&self.start, &other.end) && lt(&other.start, &self.end)
    }

    /// Returns the smallest range covering both this range and `other`.
    pub fn union(&self, other: &Range<T>) -> Range<T> {
        let start = match (&self.start, &other.start) {
            (Bound::Finite(a), Bound::Finite(b)) => Bound::Finite(lesser(a, b).clone()),
            _ => Bound::NegativeInfinity,
        };
        let end = match (&self.end, &other.end) {
            (Bound::Finite(a), Bound::Finite(b)) => Bound::Finite(greater(a, b).clone()),
            _ => Bound::PositiveInfinity,
        };
        Range { start, end }
    }

    /// Returns the intersection of this range and `other`.
    ///
    /// Disjoint ranges intersect in the empty range sitting at the later of
    /// the two starts.
    pub fn intersection(&self, other: &Range<T>) -> Range<T> {
        let start = match (&self.start, &other.start) {
            (Bound::Finite(a), Bound::Finite(b)) => Bound::Finite(greater(a, b).clone()),
            (Bound::NegativeInfinity, bound) | (bound, Bound::NegativeInfinity) => bound.clone(),
            (bound, _) => bound.clone(),
        };
        let mut end = match (&self.end, &other.end) {
            (Bound::Finite(a), Bound::Finite(b)) => Bound::Finite(lesser(a, b).clone()),
            (Bound::PositiveInfinity, bound) | (bound, Bound::PositiveInfinity) => bound.clone(),
            (bound, _) => bound.clone(),
        };

        if let (Bound::Finite(s), Bound::Finite(e)) = (&start, &end) {
            if s > e {
                end = Bound::Finite(s.clone());
            }
        }

        Range { start, end }
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if matches!(self.start, Bound::Finite(_)) { '[' } else { '(' };
        write!(f, "{}{}, {})", open, self.start, self.end)
    }
}

fn validate<T: PartialOrd>(start: &Bound<T>, end: &Bound<T>) -> std::result::Result<(), &'static str> {
    if matches!(start, Bound::PositiveInfinity) {
        return Err("start cannot be positive infinity");
    }
    if matches!(end, Bound::NegativeInfinity) {
        return Err("end cannot be negative infinity");
    }
    for bound in [start, end] {
        if let Bound::Finite(value) = bound {
            if value.partial_cmp(value).is_none() {
                return Err("bound is not comparable");
            }
        }
    }
    match start.partial_cmp(end) {
        Some(Ordering::Greater) => Err("start is after end"),
        _ => Ok(()),
    }
}

fn le<T: PartialOrd>(a: &Bound<T>, b: &Bound<T>) -> bool {
    matches!(a.partial_cmp(b), Some(Ordering::Less | Ordering::Equal))
}

fn lt<T: PartialOrd>(a: &Bound<T>, b: &Bound<T>) -> bool {
    matches!(a.partial_cmp(b), Some(Ordering::Less))
}

fn lesser<'a, T: PartialOrd>(a: &'a T, b: &'a T) -> &'a T {
    if b < a {
        b
    } else {
        a
    }
}

fn greater<'a, T: PartialOrd>(a: &'a T, b: &'a T) -> &'a T {
    if b > a {
        b
    } else {
        a
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_range() -> impl Strategy<Value = Range<i32>> {
        (
            proptest::option::of(-1000_i32..1000),
            proptest::option::of(-1000_i32..1000),
        )
            .prop_map(|bounds| {
                let (start, end) = match bounds {
                    (Some(a), Some(b)) if a > b => (Some(b), Some(a)),
                    other => other,
                };
                Range::new(
                    start.map_or(Bound::NegativeInfinity, Bound::Finite),
                    end.map_or(Bound::PositiveInfinity, Bound::Finite),
                )
                .unwrap()
            })
    }

    fn ordered_triple() -> impl Strategy<Value = (i32, i32, i32)> {
        proptest::collection::vec(-1000_i32..1000, 3).prop_map(|mut v| {
            v.sort();
            (v[0], v[1], v[2])
        })
    }

    proptest! {
        #[test]
        fn outer_range_surrounds_its_halves((a, b, c) in ordered_triple()) {
            let outer = Range::between(a, c).unwrap();
            prop_assert!(outer.surrounds(&Range::between(a, b).unwrap()));
            prop_assert!(outer.surrounds(&Range::between(b, c).unwrap()));
        }

        #[test]
        fn every_range_is_near_itself(range in arb_range()) {
            prop_assert!(range.near(&range));
            prop_assert!(Range::universal().surrounds(&range));
        }

        #[test]
        fn near_is_symmetric(a in arb_range(), b in arb_range()) {
            prop_assert_eq!(a.near(&b), b.near(&a));
        }

        #[test]
        fn union_is_commutative_and_surrounds_both(a in arb_range(), b in arb_range()) {
            let union = a.union(&b);
            prop_assert_eq!(&union, &b.union(&a));
            prop_assert!(union.surrounds(&a));
            prop_assert!(union.surrounds(&b));
        }

        #[test]
        fn intersection_is_commutative_and_surrounded(a in arb_range(), b in arb_range()) {
            let intersection = a.intersection(&b);
            prop_assert_eq!(&intersection, &b.intersection(&a));
            if a.near(&b) {
                prop_assert!(a.surrounds(&intersection));
                prop_assert!(b.surrounds(&intersection));
            } else {
                prop_assert!(intersection.is_empty());
            }
        }

        #[test]
        fn range_surrounds_unit_step_at_contained_point(a in arb_range(), point in -1000_i32..1000) {
            if a.contains(&point) {
                prop_assert!(a.surrounds(&Range::between(point, point + 1).unwrap()));
            }
        }
    }
}
