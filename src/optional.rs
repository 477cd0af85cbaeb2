use std::fmt;

use crate::error::{Error, Result};

/// A container that holds either exactly one value or no value at all.
///
/// An `Optional` is immutable: every operation borrows or consumes the
/// receiver and produces a new value, nothing is ever changed in place.
/// Two `Optional`s compare equal when both are empty, or when both are
/// present with values that compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    /// An empty `Optional`.
    pub fn empty() -> Self {
        Optional { value: None }
    }

    /// A present `Optional` holding `value`.
    ///
    /// The value is never inspected, so `of` on a `T` that is itself an
    /// `Option` holding `None` still produces a present `Optional`. Use
    /// [`Optional::of_nillable`] or the `From<Option<T>>` impl when absence
    /// of the input should mean an empty result.
    pub fn of(value: T) -> Self {
        Optional { value: Some(value) }
    }

    /// Returns true if a value is present.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns true if no value is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Calls `action` with the value if one is present, does nothing
    /// otherwise.
    pub fn if_present(&self, action: impl FnOnce(&T)) {
        if let Some(value) = &self.value {
            action(value);
        }
    }

    /// Calls `action` with the value if one is present, or `empty_action`
    /// otherwise. Exactly one of the two runs.
    pub fn if_present_or_else(&self, action: impl FnOnce(&T), empty_action: impl FnOnce()) {
        match &self.value {
            Some(value) => action(value),
            None => empty_action(),
        }
    }

    /// Keeps the value only if one is present and `predicate` accepts it.
    ///
    /// The predicate is not invoked on an empty `Optional`.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self.value {
            Some(value) if predicate(&value) => Optional::of(value),
            _ => Optional::empty(),
        }
    }

    /// Applies `mapper` to the value if one is present and wraps the result;
    /// propagates emptiness otherwise.
    ///
    /// The result is always present when the input was: the mapper's output
    /// is wrapped as if by [`Optional::of`], with no absence check. Use
    /// [`Optional::map_nillable`] for mappers whose result may be absent.
    pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> Optional<U> {
        match self.value {
            Some(value) => Optional::of(mapper(value)),
            None => Optional::empty(),
        }
    }

    /// Like [`Optional::map`], but the mapper's result may itself be absent:
    /// a mapper returning `None` collapses a present input to empty.
    pub fn map_nillable<U>(self, mapper: impl FnOnce(T) -> Option<U>) -> Optional<U> {
        match self.value {
            Some(value) => Optional::from(mapper(value)),
            None => Optional::empty(),
        }
    }

    /// Applies a mapper that itself returns an `Optional` and returns its
    /// result directly, without re-wrapping. Propagates emptiness.
    pub fn flat_map<U>(self, mapper: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self.value {
            Some(value) => mapper(value),
            None => Optional::empty(),
        }
    }

    /// Returns `self` if a value is present, or the supplier's `Optional`
    /// otherwise. The supplier's result may itself be empty.
    pub fn or(self, supplier: impl FnOnce() -> Optional<T>) -> Optional<T> {
        if self.value.is_some() {
            self
        } else {
            supplier()
        }
    }

    /// Returns the value if present, or `other` otherwise.
    pub fn or_else(self, other: T) -> T {
        self.value.unwrap_or(other)
    }

    /// Returns the value if present, or the supplier's result otherwise.
    /// The supplier is not invoked when a value is present.
    pub fn or_else_get(self, supplier: impl FnOnce() -> T) -> T {
        self.value.unwrap_or_else(supplier)
    }

    /// Returns the value if present.
    ///
    /// # Panics
    ///
    /// Panics with the message `no value present` if the `Optional` is
    /// empty. This is the escape hatch for call sites where emptiness is a
    /// programming error; prefer [`Optional::or_else_error`] when emptiness
    /// is recoverable.
    pub fn or_else_panic(self) -> T {
        match self.value {
            Some(value) => value,
            None => panic!("no value present"),
        }
    }

    /// Returns the value if present, or [`Error::NoValuePresent`] otherwise.
    pub fn or_else_error(self) -> Result<T> {
        self.value.ok_or(Error::NoValuePresent)
    }

    /// Returns the value if present, or the supplier's error otherwise.
    /// The supplier is invoked exactly once, and only when empty.
    pub fn or_else_supply_error<E>(
        self,
        error_supplier: impl FnOnce() -> E,
    ) -> std::result::Result<T, E> {
        self.value.ok_or_else(error_supplier)
    }

    /// Returns a vec holding the value if present, or an empty vec
    /// otherwise.
    pub fn to_vec(self) -> Vec<T> {
        match self.value {
            Some(value) => vec![value],
            None => Vec::new(),
        }
    }
}

impl<T: Clone> Optional<T> {
    /// A present `Optional` holding a clone of the referenced value, or an
    /// empty one when no reference is given.
    ///
    /// The clone means the result never aliases the caller's storage.
    pub fn of_nillable(value: Option<&T>) -> Self {
        Optional {
            value: value.cloned(),
        }
    }
}

// no `T: Default` bound, the empty state needs no value
impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional { value }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Optional[{}]", value),
            None => f.write_str("Optional.empty"),
        }
    }
}
