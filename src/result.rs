use crate::{
    error::InvalidUnwrap,
    util::{self, Panic},
};

/// The outcome of a computation: a success value or an error.
///
/// A `Result` is either [`Ok`][Result::Ok] or [`Err`][Result::Err], never
/// both. It mirrors the fluent surface of [`Optional`][crate::Optional]:
/// combinators consume the receiver, callbacks only run in the state they
/// apply to, and every transforming combinator has an `*_async` twin.
///
/// This is a distinct type from [`std::result::Result`]; `From` conversions
/// exist in both directions.
///
/// # Examples
///
/// ```rust
/// use optres::Result;
///
/// let doubled = Result::<i32, String>::ok(21)
///     .map(|v| v * 2)
///     .flat_map(|v| if v > 0 { Result::ok(v) } else { Result::err("negative".to_owned()) });
/// assert_eq!(doubled.unwrap(), 42);
///
/// let failed = Result::<i32, &str>::err("boom").map_err(str::len);
/// assert_eq!(failed.unwrap_err(), 4);
/// ```
#[derive(Clone, Copy, Debug)]
#[must_use = "combinators return a new `Result` instead of changing the receiver"]
pub enum Result<T, E> {
    Ok(T),
    Err(E),
}

impl<T> Result<T, Panic> {
    /// Runs `f` and wraps its return value in `Ok`. If `f` panics, the panic
    /// is caught and returned as the `Err` payload.
    pub fn from_thrower<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match util::catch(f) {
            Ok(value) => Self::Ok(value),
            Err(panic) => {
                util::diagnostics::captured(&panic);
                Self::Err(panic)
            }
        }
    }
}

impl<T, E> Result<T, E> {
    /// Creates an `Ok` result.
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates an `Err` result.
    pub const fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Returns `true` if the result is `Ok`.
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the result is `Err`.
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Returns the `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics with the message of [`InvalidUnwrap::ErrResult`] if the result
    /// is `Err`. The payload is that message as a `String`; use
    /// [`try_unwrap`][Result::try_unwrap] to get the typed error.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => panic!("{}", InvalidUnwrap::ErrResult),
        }
    }

    /// Returns the `Err` value.
    ///
    /// # Panics
    ///
    /// Panics with the message of [`InvalidUnwrap::OkResult`] if the result
    /// is `Ok`. The payload is that message as a `String`; use
    /// [`try_unwrap_err`][Result::try_unwrap_err] to get the typed error.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(_) => panic!("{}", InvalidUnwrap::OkResult),
            Self::Err(error) => error,
        }
    }

    /// Returns the `Ok` value, or [`InvalidUnwrap::ErrResult`].
    pub fn try_unwrap(self) -> std::result::Result<T, InvalidUnwrap> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(InvalidUnwrap::ErrResult),
        }
    }

    /// Returns the `Err` value, or [`InvalidUnwrap::OkResult`].
    pub fn try_unwrap_err(self) -> std::result::Result<E, InvalidUnwrap> {
        match self {
            Self::Ok(_) => Err(InvalidUnwrap::OkResult),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the `Ok` value, or `fallback` if the result is `Err`.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => fallback,
        }
    }

    /// Returns the `Err` value, or `fallback` if the result is `Ok`.
    pub fn unwrap_err_or(self, fallback: E) -> E {
        match self {
            Self::Ok(_) => fallback,
            Self::Err(error) => error,
        }
    }

    /// Wraps `f(value)` in `Ok`; an `Err` passes through and `f` is not called.
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(f(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Wraps `f(error)` in `Err`; an `Ok` passes through and `f` is not called.
    pub fn map_err<U, F>(self, f: F) -> Result<T, U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(f(error)),
        }
    }

    /// Returns `f(value)` for an `Ok`; an `Err` short-circuits unchanged.
    pub fn flat_map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Returns `f(error)` for an `Err`; an `Ok` short-circuits unchanged.
    pub fn flat_map_err<U, F>(self, f: F) -> Result<T, U>
    where
        F: FnOnce(E) -> Result<T, U>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    /// Calls `f` with the `Ok` value and returns the result unchanged.
    pub fn if_ok<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with the `Err` value and returns the result unchanged.
    pub fn if_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            f(error);
        }
        self
    }

    /// Runs [`if_ok`][Result::if_ok] with `f_ok`, then
    /// [`if_err`][Result::if_err] with `f_err` when one is given.
    pub fn when<F, G>(self, f_ok: F, f_err: Option<G>) -> Self
    where
        F: FnOnce(&T),
        G: FnOnce(&E),
    {
        let this = self.if_ok(f_ok);
        match f_err {
            Some(f_err) => this.if_err(f_err),
            None => this,
        }
    }
}
