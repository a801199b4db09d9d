use futures::{future, FutureExt};
use parking_lot::Mutex;
use std::{
    any::Any,
    fmt,
    future::Future,
    panic::{self, AssertUnwindSafe},
};
use triomphe::Arc;

use crate::util::diagnostics::CaptureScope;

/// Payload carried by an unwinding panic.
pub type Payload = Box<dyn Any + Send + 'static>;

const NO_PAYLOAD: &str =
    "caught a panic without a payload; this may indicate a task that failed without passing any error";
const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

/// A panic captured by one of the thrower adapters.
///
/// A `Panic` is immutable once captured. Clones share the original payload,
/// which can be inspected through any of them with
/// [`downcast_payload`][Panic::downcast_payload] and moved out by the last
/// remaining holder with [`into_payload`][Panic::into_payload] or
/// [`resume`][Panic::resume].
///
/// # Examples
///
/// ```rust
/// use optres::Result;
///
/// let result = Result::from_thrower(|| -> i32 { panic!("oh no") });
/// assert_eq!(result.unwrap_err().message(), "oh no");
/// ```
#[derive(Clone, thiserror::Error)]
#[error("{}", .inner.message)]
pub struct Panic {
    inner: Arc<Inner>,
}

struct Inner {
    message: String,
    synthesized: bool,
    payload: Mutex<Payload>,
}

impl Panic {
    /// Wraps a raw panic payload. `&str` and `String` payloads provide the
    /// message; a `()` payload counts as "no payload" and gets a synthesized
    /// diagnostic message.
    pub fn from_payload(payload: Payload) -> Self {
        let (message, synthesized) = if let Some(message) = payload.downcast_ref::<&'static str>()
        {
            ((*message).to_owned(), false)
        } else if let Some(message) = payload.downcast_ref::<String>() {
            (message.clone(), false)
        } else if payload.is::<()>() {
            (NO_PAYLOAD.to_owned(), true)
        } else {
            (OPAQUE_PAYLOAD.to_owned(), false)
        };

        Self {
            inner: Arc::new(Inner {
                message,
                synthesized,
                payload: Mutex::new(payload),
            }),
        }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// Returns `true` if the panic carried no payload and the message was
    /// synthesized.
    pub fn is_synthesized(&self) -> bool {
        self.inner.synthesized
    }

    /// Returns `true` if the original payload is of type `P`.
    pub fn payload_is<P: Any>(&self) -> bool {
        self.inner.payload.lock().is::<P>()
    }

    /// Returns a copy of the original payload if it is of type `P`.
    pub fn downcast_payload<P: Any + Clone>(&self) -> Option<P> {
        self.inner.payload.lock().downcast_ref::<P>().cloned()
    }

    /// Moves the original payload out. Fails with `self` while clones of this
    /// panic are still alive.
    pub fn into_payload(self) -> Result<Payload, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => Ok(inner.payload.into_inner()),
            Err(inner) => Err(Self { inner }),
        }
    }

    /// Resumes unwinding with the original payload. While clones of this
    /// panic are still alive the payload stays with them and unwinding
    /// resumes with the message instead.
    pub fn resume(self) -> ! {
        match self.into_payload() {
            Ok(payload) => panic::resume_unwind(payload),
            Err(shared) => panic::resume_unwind(Box::new(shared.inner.message.clone())),
        }
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panic")
            .field("message", &self.inner.message)
            .field("synthesized", &self.inner.synthesized)
            .finish()
    }
}

impl From<Payload> for Panic {
    fn from(payload: Payload) -> Self {
        Self::from_payload(payload)
    }
}

/// Runs `f`, capturing an unwinding panic.
pub(crate) fn catch<T, F>(f: F) -> Result<T, Panic>
where
    F: FnOnce() -> T,
{
    let _scope = CaptureScope::enter();
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(Panic::from_payload)
}

/// Runs `f` and awaits the future it returns, capturing a panic raised by
/// either step.
pub(crate) async fn catch_async<F, Fut>(f: F) -> Result<Fut::Output, Panic>
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    let task = AssertUnwindSafe(catch(f)?).catch_unwind();
    futures::pin_mut!(task);
    future::poll_fn(|cx| {
        let _scope = CaptureScope::enter();
        task.as_mut().poll(cx)
    })
    .await
    .map_err(Panic::from_payload)
}
