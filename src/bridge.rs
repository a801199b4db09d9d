//! Conversions between [`Optional`], [`Result`] and their `std` counterparts.
//!
//! `Optional` carries no error data, so going through it is lossy:
//!
//! ```rust
//! use optres::Result;
//!
//! let original = Result::<i32, &str>::err("first");
//! let again = original.to_optional().to_result("second");
//! assert_eq!(again.unwrap_err(), "second");
//! ```

use crate::{optional::Optional, result::Result};

/// Conversion into an [`Optional`] holding the `Ok` value of a result,
/// discarding any error.
pub trait ToOptional {
    type Value;

    fn to_optional(self) -> Optional<Self::Value>;
}

impl<T, E> ToOptional for Result<T, E> {
    type Value = T;

    fn to_optional(self) -> Optional<Self::Value> {
        match self {
            Result::Ok(value) => Optional::Present(value),
            Result::Err(_) => Optional::Empty,
        }
    }
}

impl<'a, T, E> ToOptional for &'a Result<T, E> {
    type Value = &'a T;

    fn to_optional(self) -> Optional<Self::Value> {
        self.as_ref().to_optional()
    }
}

impl<'a, T, E> ToOptional for &'a mut Result<T, E> {
    type Value = &'a mut T;

    fn to_optional(self) -> Optional<Self::Value> {
        self.as_mut().to_optional()
    }
}

impl<T> Optional<T> {
    /// Creates a `Present` optional from an `Ok` result, or an `Empty` one
    /// from an `Err` result. The error is discarded.
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        ToOptional::to_optional(result)
    }

    /// Converts into `Ok(value)` if present, or `Err(err_if_empty)` if empty.
    pub fn to_result<E>(self, err_if_empty: E) -> Result<T, E> {
        Result::from_optional(self, err_if_empty)
    }
}

impl<T, E> Result<T, E> {
    /// Creates `Ok(value)` from a present optional, or `Err(err_if_empty)`
    /// from an empty one.
    pub fn from_optional(optional: Optional<T>, err_if_empty: E) -> Self {
        match optional {
            Optional::Present(value) => Self::Ok(value),
            Optional::Empty => Self::Err(err_if_empty),
        }
    }

    /// Converts into a `Present` optional holding the `Ok` value, or an
    /// `Empty` one. The error is discarded.
    pub fn to_optional(self) -> Optional<T> {
        ToOptional::to_optional(self)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.unwrap_or_null()
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(error),
        }
    }
}
