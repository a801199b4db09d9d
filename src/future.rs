//! Asynchronous twins of the combinators and the task adapters.
//!
//! Every method here is an `async fn` with a single suspension point: the
//! supplied callback or task is awaited exactly once, and the returned
//! wrapper is only produced after it settles. No executor is spawned; the
//! caller drives the returned future.
//!
//! Handlers and predicates that are handed a reference return futures that
//! cannot borrow it; they clone or copy what they need first.

mod optional;
mod result;
