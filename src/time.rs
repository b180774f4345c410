//! Sleep abstraction for platform-agnostic frame pacing.

use core::time::Duration;

/// Trait for abstracting blocking sleeps between frames.
///
/// The cycler only ever blocks through this trait, so tests can swap in
/// a recording mock and run the full animation instantly.
pub trait Sleeper {
    /// Blocks the calling thread for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// [`Sleeper`] backed by [`std::thread::sleep`].
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

#[cfg(feature = "std")]
impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
