//! Comparators: the total order a map keeps its keys in.
//!
//! A map never looks inside its keys. All it needs is something that says
//! whether one key is less than, equal to, or greater than another. That
//! capability is the [`Compare`] trait, supplied once at construction.
//!
//! ```
//! use std::cmp::Ordering;
//! use skipmap::compare::{ByKey, Compare, Natural, Reverse};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reverse(Natural).compare(&1, &2), Ordering::Greater);
//!
//! // Any closure with the right shape is a comparator.
//! let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
//! assert_eq!(by_abs.compare(&-3, &2), Ordering::Greater);
//!
//! // Order people by age, reusing the comparator for u32.
//! let by_age = ByKey::new(Natural, |p: &(&str, u32)| p.1);
//! assert_eq!(by_age.compare(&("ann", 40), &("bob", 30)), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over `K`.
///
/// Implementations must be consistent: transitive and antisymmetric, with
/// `Equal` meaning the two keys are interchangeable. A map built with an
/// inconsistent comparator does not detect it; its lookups silently return
/// wrong answers.
pub trait Compare<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their own [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord + ?Sized> Compare<K> for Natural {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        return a.cmp(b);
    }
}

impl<K: ?Sized, F> Compare<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        return self(a, b);
    }
}

/// Flips the order of the wrapped comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<K: ?Sized, C: Compare<K>> Compare<K> for Reverse<C> {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        return self.0.compare(b, a);
    }
}

/// Orders `B` by projecting each value to an `A` and comparing those.
///
/// The projection runs twice per comparison, so it should be cheap.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<C, F> {
    inner: C,
    project: F,
}

impl<C, F> ByKey<C, F> {
    pub fn new(inner: C, project: F) -> ByKey<C, F> {
        return ByKey { inner, project };
    }
}

impl<A, B: ?Sized, C, F> Compare<B> for ByKey<C, F>
where
    C: Compare<A>,
    F: Fn(&B) -> A,
{
    fn compare(&self, a: &B, b: &B) -> Ordering {
        return self.inner.compare(&(self.project)(a), &(self.project)(b));
    }
}

/// Uses a comparator owned elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct Borrowed<'a, C>(pub &'a C);

impl<K: ?Sized, C: Compare<K>> Compare<K> for Borrowed<'_, C> {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        return self.0.compare(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_orders_ints_and_strings() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare(&2, &2), Ordering::Equal);
        assert_eq!(Natural.compare(&3, &2), Ordering::Greater);
        assert_eq!(Natural.compare("apple", "banana"), Ordering::Less);
    }

    #[test]
    fn reverse_flips_order() {
        let cmp = Reverse(Natural);
        assert_eq!(cmp.compare(&1, &2), Ordering::Greater);
        assert_eq!(cmp.compare(&2, &2), Ordering::Equal);
        assert_eq!(Reverse(cmp).compare(&1, &2), Ordering::Less);
    }

    #[test]
    fn closure_is_a_comparator() {
        let cmp = |a: &i64, b: &i64| a.abs().cmp(&b.abs());
        assert_eq!(cmp.compare(&-5, &3), Ordering::Greater);
        assert_eq!(cmp.compare(&-3, &3), Ordering::Equal);
    }

    #[test]
    fn by_key_projects_before_comparing() {
        let cmp = ByKey::new(Natural, |s: &String| s.len());
        assert_eq!(cmp.compare(&"zz".to_string(), &"aaa".to_string()), Ordering::Less);
        assert_eq!(cmp.compare(&"ab".to_string(), &"cd".to_string()), Ordering::Equal);
    }

    #[test]
    fn borrowed_delegates() {
        let cmp = Reverse(Natural);
        let borrowed = Borrowed(&cmp);
        assert_eq!(borrowed.compare(&1, &2), Ordering::Greater);
    }
}
