use std::future::Future;

use crate::{optional::Optional, result::Result, util};

impl<T> Optional<T> {
    /// Runs `f`, awaits the returned future and wraps its output. A panic in
    /// either step is caught and discarded, yielding an `Empty` optional.
    pub async fn from_thrower_async<F, Fut>(f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match util::catch_async(f).await {
            Ok(value) => Self::Present(value),
            Err(panic) => {
                util::diagnostics::discarded(&panic);
                Self::Empty
            }
        }
    }

    /// Awaits `task` through [`from_thrower_async`][Optional::from_thrower_async].
    pub async fn from_task<Fut>(task: Fut) -> Self
    where
        Fut: Future<Output = T>,
    {
        Self::from_thrower_async(|| task).await
    }

    /// Awaits a fallible `task`, keeping the `Ok` value and discarding the
    /// error. Panics inside the task are not caught.
    pub async fn from_try_task<Fut, E>(task: Fut) -> Self
    where
        Fut: Future<Output = std::result::Result<T, E>>,
    {
        Self::from_result(Result::from_try_task(task).await)
    }

    /// Async twin of [`map`][Optional::map].
    pub async fn map_async<U, F, Fut>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Present(value) => Optional::Present(f(value).await),
            Self::Empty => Optional::Empty,
        }
    }

    /// Async twin of [`flat_map`][Optional::flat_map].
    pub async fn flat_map_async<U, F, Fut>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Optional<U>>,
    {
        match self {
            Self::Present(value) => f(value).await,
            Self::Empty => Optional::Empty,
        }
    }

    /// Async twin of [`filter`][Optional::filter].
    ///
    /// The future returned by `predicate` cannot borrow the value it is
    /// handed; compute or copy what it needs before the `async` block.
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use optres::Optional;
    ///
    /// let name = block_on(Optional::of(String::from("optres")).filter_async(|name| {
    ///     let long = name.len() > 3;
    ///     async move { long }
    /// }));
    /// assert_eq!(name.unwrap(), "optres");
    /// ```
    pub async fn filter_async<P, Fut>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value).await {
                    Self::Present(value)
                } else {
                    Self::Empty
                }
            }
            Self::Empty => Self::Empty,
        }
    }

    /// Async twin of [`if_present`][Optional::if_present]. As with
    /// [`filter_async`][Optional::filter_async], the future returned by `f`
    /// cannot borrow the value; clone it first.
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use std::cell::RefCell;
    /// use optres::Optional;
    ///
    /// let seen = RefCell::new(Vec::new());
    /// let name = block_on(Optional::of(String::from("optres")).if_present_async(|name| {
    ///     let name = name.clone();
    ///     let seen = &seen;
    ///     async move { seen.borrow_mut().push(name) }
    /// }));
    /// assert!(name.is_present());
    /// assert_eq!(*seen.borrow(), ["optres"]);
    /// ```
    pub async fn if_present_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Present(value) = &self {
            f(value).await;
        }
        self
    }

    /// Async twin of [`if_empty`][Optional::if_empty].
    pub async fn if_empty_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.is_empty() {
            f().await;
        }
        self
    }

    /// Async twin of [`when`][Optional::when]. The present handler is awaited
    /// before the empty handler is considered; like
    /// [`if_present_async`][Optional::if_present_async], its future cannot
    /// borrow the value.
    pub async fn when_async<F, FFut, G, GFut>(self, f_present: F, f_empty: Option<G>) -> Self
    where
        F: FnOnce(&T) -> FFut,
        FFut: Future<Output = ()>,
        G: FnOnce() -> GFut,
        GFut: Future<Output = ()>,
    {
        let this = self.if_present_async(f_present).await;
        match f_empty {
            Some(f_empty) => this.if_empty_async(f_empty).await,
            None => this,
        }
    }
}
