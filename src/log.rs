//! Crate-internal logging.
//!
//! `debug!` and `warn!` forward to `tracing` when the `tracing` feature is
//! on. Otherwise they swallow their arguments, so the rasterization loops pay
//! nothing and downstream crates never see the macros.
//!
//! The fallbacks are defined under other names and renamed on import: a
//! `macro_rules!` called `warn` cannot be re-exported by path, since the name
//! collides with the built-in `#[warn]` lint attribute.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {log_debug as debug, log_warn as warn};
