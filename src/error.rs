/// Extraction attempted against the wrong variant.
///
/// Returned by the `try_unwrap*` methods. The `unwrap*` methods panic with
/// its `Display` text as a `String` payload, so a captured unwrap panic is
/// recognized by [`Panic::message`][crate::Panic::message], never by a
/// downcast to this type.
#[derive(Clone, Copy, Debug, thiserror::Error)]
pub enum InvalidUnwrap {
    #[error("called `Optional::unwrap()` on an `Empty` value")]
    EmptyOptional,
    #[error("called `Result::unwrap()` on an `Err` value")]
    ErrResult,
    #[error("called `Result::unwrap_err()` on an `Ok` value")]
    OkResult,
}
