//! Process-wide switch controlling whether captured errors are logged.
//!
//! The effective value is resolved in this order:
//!
//! 1. an override installed with [`set_log_captured`],
//! 2. the `OPTRES_LOG_CAPTURED` environment variable, read once,
//! 3. the build profile: enabled with `debug_assertions`, disabled otherwise.
//!
//! The same switch governs the panic hook output for panics raised while a
//! thrower adapter is capturing: the first capture installs a hook that
//! stays quiet for those panics when logging is off and defers to the
//! previously installed hook otherwise.

use parking_lot::Once;
use std::{
    cell::{Cell, UnsafeCell},
    env,
    mem::MaybeUninit,
    panic,
    sync::atomic::{AtomicU8, Ordering},
    thread,
};

use crate::util::Panic;

/// Environment variable consulted when no override is installed.
pub const ENV_VAR: &str = "OPTRES_LOG_CAPTURED";

const UNSET: u8 = 0;
const OFF: u8 = 1;
const ON: u8 = 2;

static OVERRIDE: AtomicU8 = AtomicU8::new(UNSET);

/// Returns `true` if errors captured by the thrower adapters are logged.
pub fn log_captured() -> bool {
    match OVERRIDE.load(Ordering::Relaxed) {
        OFF => false,
        ON => true,
        _ => from_env(),
    }
}

/// Forces captured-error logging on or off for the whole process, taking
/// precedence over the environment and the build profile.
pub fn set_log_captured(enabled: bool) {
    OVERRIDE.store(if enabled { ON } else { OFF }, Ordering::Relaxed);
}

/// Removes an override installed with [`set_log_captured`].
pub fn reset() {
    OVERRIDE.store(UNSET, Ordering::Relaxed);
}

pub(crate) fn captured(panic: &Panic) {
    if log_captured() {
        tracing::warn!(
            error = panic.message(),
            synthesized = panic.is_synthesized(),
            "creating error result from a captured panic"
        );
    }
}

pub(crate) fn discarded(panic: &Panic) {
    if log_captured() {
        tracing::debug!(
            error = panic.message(),
            "discarding captured panic into an empty optional"
        );
    }
}

thread_local! {
    static CAPTURE_DEPTH: Cell<usize> = Cell::new(0);
}

/// Marks the current thread as capturing panics until dropped.
pub(crate) struct CaptureScope(());

impl CaptureScope {
    pub(crate) fn enter() -> Self {
        install_hook();
        CAPTURE_DEPTH.with(|depth| depth.set(depth.get() + 1));
        Self(())
    }
}

impl Drop for CaptureScope {
    fn drop(&mut self) {
        CAPTURE_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

fn capturing() -> bool {
    CAPTURE_DEPTH
        .try_with(|depth| depth.get() > 0)
        .unwrap_or(false)
}

fn install_hook() {
    static HOOK: Once = Once::new();

    // Swapping hooks panics on a thread that is already unwinding.
    if thread::panicking() {
        return;
    }

    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !capturing() || log_captured() {
                previous(info);
            }
        }));
    });
}

fn from_env() -> bool {
    struct Cache(UnsafeCell<MaybeUninit<bool>>);

    unsafe impl Sync for Cache {}

    static CACHE: Cache = Cache(UnsafeCell::new(MaybeUninit::uninit()));
    static ONCE: Once = Once::new();

    ONCE.call_once(|| {
        let enabled = env::var(ENV_VAR)
            .ok()
            .and_then(|value| parse_flag(&value))
            .unwrap_or(cfg!(debug_assertions));
        unsafe {
            (*CACHE.0.get()).write(enabled);
        }
    });

    unsafe { (*CACHE.0.get()).assume_init_read() }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
