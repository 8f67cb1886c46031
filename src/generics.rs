//! Generics
//!
//! Generic functions, a generic enum, and `where` clauses that tie the
//! element types of two sequences together.

use itertools::Itertools;

// ============================================================================
// Generic function
// ============================================================================

/// Builds a vector holding `number_of_times` copies of `item`.
pub fn make_array<Item: Clone>(item: Item, number_of_times: usize) -> Vec<Item> {
    let mut result = Vec::with_capacity(number_of_times);
    for _ in 0..number_of_times {
        result.push(item.clone());
    }
    result
}

// ============================================================================
// Generic enum: a hand-rolled Option
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalValue<Wrapped> {
    None,
    Some(Wrapped),
}

// Hand-written so `Wrapped` needs no `Default` bound.
impl<Wrapped> Default for OptionalValue<Wrapped> {
    fn default() -> Self {
        OptionalValue::None
    }
}

impl<Wrapped> OptionalValue<Wrapped> {
    pub fn is_some(&self) -> bool {
        matches!(self, OptionalValue::Some(_))
    }

    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    pub fn as_ref(&self) -> OptionalValue<&Wrapped> {
        match self {
            OptionalValue::None => OptionalValue::None,
            OptionalValue::Some(value) => OptionalValue::Some(value),
        }
    }

    pub fn map<U, F: FnOnce(Wrapped) -> U>(self, f: F) -> OptionalValue<U> {
        match self {
            OptionalValue::None => OptionalValue::None,
            OptionalValue::Some(value) => OptionalValue::Some(f(value)),
        }
    }

    pub fn unwrap_or(self, default: Wrapped) -> Wrapped {
        match self {
            OptionalValue::None => default,
            OptionalValue::Some(value) => value,
        }
    }
}

impl<Wrapped> From<Option<Wrapped>> for OptionalValue<Wrapped> {
    fn from(value: Option<Wrapped>) -> Self {
        match value {
            Some(value) => OptionalValue::Some(value),
            None => OptionalValue::None,
        }
    }
}

impl<Wrapped> From<OptionalValue<Wrapped>> for Option<Wrapped> {
    fn from(value: OptionalValue<Wrapped>) -> Self {
        match value {
            OptionalValue::Some(value) => Some(value),
            OptionalValue::None => None,
        }
    }
}

// ============================================================================
// Where clauses
// ============================================================================

/// Returns `true` if any element of `lhs` equals any element of `rhs`.
///
/// Both sequences must yield the same item type, and `rhs` is walked once per
/// `lhs` element, so its iterator has to be cloneable.
pub fn any_common_elements<T, U>(lhs: T, rhs: U) -> bool
where
    T: IntoIterator,
    T::Item: PartialEq + Clone,
    U: IntoIterator<Item = T::Item>,
    U::IntoIter: Clone,
{
    lhs.into_iter()
        .cartesian_product(rhs)
        .any(|(lhs_item, rhs_item)| lhs_item == rhs_item)
}

/// Collects every `lhs` element that equals some `rhs` element, once per
/// matching pair, in `lhs` order.
pub fn show_common_elements<T, U>(lhs: T, rhs: U) -> Vec<T::Item>
where
    T: IntoIterator,
    T::Item: PartialEq + Clone,
    U: IntoIterator<Item = T::Item>,
    U::IntoIter: Clone,
{
    lhs.into_iter()
        .cartesian_product(rhs)
        .filter(|(lhs_item, rhs_item)| lhs_item == rhs_item)
        .map(|(lhs_item, _)| lhs_item)
        .collect()
}
