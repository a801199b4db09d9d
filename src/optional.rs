use crate::{error::InvalidUnwrap, util};

/// A value that may or may not be present.
///
/// An `Optional` is either [`Present`][Optional::Present], wrapping a value,
/// or [`Empty`][Optional::Empty]. Combinators consume the receiver and return
/// a new `Optional`; callbacks are only invoked in the state they apply to.
/// Every transforming combinator has an `*_async` twin that awaits its
/// callback.
///
/// # Examples
///
/// ```rust
/// use optres::Optional;
///
/// let port = Optional::of_nullable(Some("8080"))
///     .map(|port| port.parse::<u16>())
///     .flat_map(|parsed| Optional::from(parsed.ok()))
///     .filter(|port| *port >= 1024);
/// assert_eq!(port.unwrap(), 8080);
///
/// let missing = Optional::<u16>::empty().map(|port| port + 1);
/// assert!(missing.is_empty());
/// assert_eq!(missing.unwrap_or(80), 80);
/// ```
#[derive(Clone, Copy, Debug)]
#[must_use = "combinators return a new `Optional` instead of changing the receiver"]
pub enum Optional<T> {
    Present(T),
    Empty,
}

impl<T> Optional<T> {
    /// Wraps `value` in a `Present` optional. `Optional::of(None)` is present:
    /// only [`of_nullable`][Optional::of_nullable] treats `None` as absence.
    pub const fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an `Empty` optional.
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Creates an `Empty` optional for `None`, otherwise a `Present` one.
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }

    /// Runs `f` and wraps its return value. If `f` panics, the panic is
    /// caught and discarded and an `Empty` optional is returned.
    pub fn from_thrower<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match util::catch(f) {
            Ok(value) => Self::Present(value),
            Err(panic) => {
                util::diagnostics::discarded(&panic);
                Self::Empty
            }
        }
    }

    /// Returns `true` if a value is present.
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrows the wrapped value.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Mutably borrows the wrapped value.
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Returns the wrapped value.
    ///
    /// # Panics
    ///
    /// Panics with the message of [`InvalidUnwrap::EmptyOptional`] if the
    /// optional is empty. The panic payload is that message as a `String`, so
    /// a captured [`Panic`][crate::Panic] exposes it through
    /// [`message`][crate::Panic::message]; use
    /// [`try_unwrap`][Optional::try_unwrap] to get the typed error.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => panic!("{}", InvalidUnwrap::EmptyOptional),
        }
    }

    /// Returns the wrapped value, or [`InvalidUnwrap::EmptyOptional`].
    pub fn try_unwrap(self) -> Result<T, InvalidUnwrap> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => Err(InvalidUnwrap::EmptyOptional),
        }
    }

    /// Returns the wrapped value as `Some`, or `None` if empty.
    pub fn unwrap_or_null(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Returns the wrapped value, or `fallback` if empty.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => fallback,
        }
    }

    /// Wraps `f(value)` if present. `f` is not called on an empty optional.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(f(value)),
            Self::Empty => Optional::Empty,
        }
    }

    /// Returns `f(value)` if present, without re-wrapping it. `f` is not called
    /// on an empty optional.
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Keeps the value only if `predicate` holds for it. `predicate` is not
    /// called on an empty optional.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Empty
                }
            }
            Self::Empty => Self::Empty,
        }
    }

    /// Calls `f` with the value if present and returns the optional unchanged.
    pub fn if_present<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` if empty and returns the optional unchanged.
    pub fn if_empty<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_empty() {
            f();
        }
        self
    }

    /// Runs [`if_present`][Optional::if_present] with `f_present`, then
    /// [`if_empty`][Optional::if_empty] with `f_empty` when one is given. Only
    /// the handler matching the current state fires.
    ///
    /// ```rust
    /// use optres::Optional;
    ///
    /// let mut seen = Vec::new();
    /// let _ = Optional::of(3).when(|v| seen.push(*v), None::<fn()>);
    /// assert_eq!(seen, [3]);
    /// ```
    pub fn when<F, G>(self, f_present: F, f_empty: Option<G>) -> Self
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        let this = self.if_present(f_present);
        match f_empty {
            Some(f_empty) => this.if_empty(f_empty),
            None => this,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Empty
    }
}
