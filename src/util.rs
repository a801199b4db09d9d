pub mod diagnostics;
pub mod panic;

pub(crate) use panic::{catch, catch_async};
pub use panic::{Panic, Payload};
