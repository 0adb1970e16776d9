//! Revenue Stream core: turns an annual revenue figure into a live,
//! once-per-second earnings counter plus fixed daily/hourly/minute shares.
//!
//! Front ends drive a `Session` with `Message`s and render its
//! `DisplaySnapshot`. Timers come from any `Scheduler`; `ManualClock`
//! is the deterministic one.

pub mod clock;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod format;
pub mod normalizer;
pub mod rates;
pub mod session;
pub mod snapshot;
pub mod theme;
pub mod types;
