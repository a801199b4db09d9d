//! Explicit presence and failure wrappers.
//!
//! [`Optional`] models a value that may be absent and [`Result`] models a
//! computation that succeeded or failed. Both offer the same fluent surface
//! (`map`, `flat_map`, `filter`, conditional handlers) in a synchronous form
//! and an `*_async` form, convert into each other, and adapt panicking
//! closures and futures through the `from_thrower*` and `from_task`
//! constructors.
//!
//! ```rust
//! use optres::{Optional, Result};
//!
//! let config = Optional::of_nullable(Some("3"));
//! let retries = config
//!     .to_result("missing retries")
//!     .flat_map(|raw| Result::from(raw.parse::<u32>()).map_err(|_| "invalid retries"));
//! assert_eq!(retries.unwrap(), 3);
//!
//! let caught = Result::from_thrower(|| -> u32 { panic!("disk on fire") });
//! assert!(caught.is_err());
//! assert!(caught.to_optional().is_empty());
//! ```

mod bridge;
mod error;
mod future;
mod optional;
mod result;
mod util;

pub use bridge::ToOptional;
pub use error::InvalidUnwrap;
pub use optional::Optional;
pub use result::Result;
pub use util::{diagnostics, Panic, Payload};
