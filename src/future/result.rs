use std::future::Future;

use crate::{
    result::Result,
    util::{self, Panic},
};

impl<T> Result<T, Panic> {
    /// Runs `f`, awaits the returned future and wraps its output in `Ok`. A
    /// panic in either step is caught and returned as the `Err` payload; a
    /// panic without a payload gets a synthesized message.
    pub async fn from_thrower_async<F, Fut>(f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match util::catch_async(f).await {
            Ok(value) => Self::Ok(value),
            Err(panic) => {
                util::diagnostics::captured(&panic);
                Self::Err(panic)
            }
        }
    }

    /// Awaits `task` through [`from_thrower_async`][Result::from_thrower_async].
    pub async fn from_task<Fut>(task: Fut) -> Self
    where
        Fut: Future<Output = T>,
    {
        Self::from_thrower_async(|| task).await
    }
}

impl<T, E> Result<T, E> {
    /// Awaits a fallible `task`, keeping its error verbatim as the `Err`
    /// payload. Panics inside the task are not caught.
    ///
    /// ```rust
    /// use optres::Result;
    ///
    /// let task = async { "42".parse::<i32>() };
    /// let result = futures::executor::block_on(Result::from_try_task(task));
    /// assert_eq!(result.unwrap(), 42);
    /// ```
    pub async fn from_try_task<Fut>(task: Fut) -> Self
    where
        Fut: Future<Output = std::result::Result<T, E>>,
    {
        Self::from(task.await)
    }

    /// Async twin of [`map`][Result::map].
    pub async fn map_async<U, F, Fut>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Ok(value) => Result::Ok(f(value).await),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Async twin of [`map_err`][Result::map_err].
    pub async fn map_err_async<U, F, Fut>(self, f: F) -> Result<T, U>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(f(error).await),
        }
    }

    /// Async twin of [`flat_map`][Result::flat_map].
    pub async fn flat_map_async<U, F, Fut>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        match self {
            Self::Ok(value) => f(value).await,
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Async twin of [`flat_map_err`][Result::flat_map_err].
    pub async fn flat_map_err_async<U, F, Fut>(self, f: F) -> Result<T, U>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Result<T, U>>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => f(error).await,
        }
    }

    /// Async twin of [`if_ok`][Result::if_ok].
    ///
    /// The future returned by `f` cannot borrow the value it is handed;
    /// clone what it needs before the `async` block.
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use std::cell::RefCell;
    /// use optres::Result;
    ///
    /// let sent = RefCell::new(Vec::new());
    /// let result = block_on(Result::<String, ()>::ok(String::from("ready")).if_ok_async(|status| {
    ///     let status = status.clone();
    ///     let sent = &sent;
    ///     async move { sent.borrow_mut().push(status) }
    /// }));
    /// assert!(result.is_ok());
    /// assert_eq!(*sent.borrow(), ["ready"]);
    /// ```
    pub async fn if_ok_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Ok(value) = &self {
            f(value).await;
        }
        self
    }

    /// Async twin of [`if_err`][Result::if_err]. The future returned by `f`
    /// cannot borrow the error; see [`if_ok_async`][Result::if_ok_async].
    pub async fn if_err_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&E) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Err(error) = &self {
            f(error).await;
        }
        self
    }

    /// Async twin of [`when`][Result::when]. Neither handler's future can
    /// borrow the value it is handed.
    pub async fn when_async<F, FFut, G, GFut>(self, f_ok: F, f_err: Option<G>) -> Self
    where
        F: FnOnce(&T) -> FFut,
        FFut: Future<Output = ()>,
        G: FnOnce(&E) -> GFut,
        GFut: Future<Output = ()>,
    {
        let this = self.if_ok_async(f_ok).await;
        match f_err {
            Some(f_err) => this.if_err_async(f_err).await,
            None => this,
        }
    }
}
