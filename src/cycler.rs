//! Rainbow animator with frame pacing and deliberate-crash support.
//!
//! Provides [`RainbowCycler`] which drives a whole LED strip through a
//! continuously rotating rainbow, handling frame rendering, pacing, and
//! the optional crash-test shutdown. Also defines the [`LedStrip`] trait
//! for hardware abstraction.

use core::time::Duration;

use crate::COLOR_OFF;
use crate::time::Sleeper;
use crate::wheel::wheel;
use smart_leds::RGB8;

/// Frames per rainbow cycle (one full trip around the wheel).
pub const FRAMES_PER_CYCLE: u16 = 255;

/// Rainbow cycles per run. In crash mode the shutdown branch is taken
/// after this many cycles; otherwise the count is purely cosmetic.
pub const CYCLES_PER_RUN: u16 = 10;

/// Delay between frames in normal mode.
pub const FRAME_DELAY: Duration = Duration::from_millis(10);

/// Delay between frames in crash mode.
pub const CRASH_FRAME_DELAY: Duration = Duration::from_millis(1);

/// Hold time after the blackout, so the dark strip can be seen before
/// the process dies.
pub const SHUTDOWN_HOLD: Duration = Duration::from_secs(2);

/// Trait for abstracting addressable LED strip hardware.
///
/// Implement this for your strip transport (SPI, PWM/DMA, etc.) to let
/// the cycler drive it. Writes are buffered: `set_pixel` only stages a
/// color, nothing reaches the wire until `show`.
pub trait LedStrip {
    /// Transport error surfaced by [`show`](LedStrip::show).
    type Error: core::fmt::Debug;

    /// Number of pixels on the strip.
    fn len(&self) -> usize;

    /// Returns `true` if the strip has no pixels.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stages `color` for the pixel at `index`.
    ///
    /// # Panics
    /// May panic if `index >= self.len()`.
    fn set_pixel(&mut self, index: usize, color: RGB8);

    /// Flushes all staged pixel state to the physical strip, blocking
    /// until the transfer completes.
    fn show(&mut self) -> Result<(), Self::Error>;
}

/// Cycler configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CyclerConfig {
    /// When enabled, the cycler blacks out the strip after
    /// [`CYCLES_PER_RUN`] cycles and returns, letting the process
    /// terminate abnormally to exercise an external supervisor.
    pub crash_mode: bool,
}

impl Default for CyclerConfig {
    fn default() -> Self {
        CyclerConfig { crash_mode: false }
    }
}

impl CyclerConfig {
    /// Delay between frames for this configuration.
    pub fn frame_delay(&self) -> Duration {
        if self.crash_mode {
            CRASH_FRAME_DELAY
        } else {
            FRAME_DELAY
        }
    }
}

/// Drives an LED strip through a rotating rainbow animation.
///
/// Each frame assigns every pixel a color from the wheel, spreading the
/// N pixels evenly around it, then flushes once. The cycler owns the
/// strip for its lifetime; all blocking goes through a [`Sleeper`] so
/// the loop is testable with mocks.
pub struct RainbowCycler<S: LedStrip> {
    strip: S,
    config: CyclerConfig,
}

impl<S: LedStrip> RainbowCycler<S> {
    /// Creates a cycler owning `strip`.
    pub fn new(strip: S, config: CyclerConfig) -> Self {
        Self { strip, config }
    }

    /// Returns the owned strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Returns the configuration.
    pub fn config(&self) -> CyclerConfig {
        self.config
    }

    /// Renders one frame at wheel offset `frame`.
    ///
    /// Each pixel's wheel position is `(i * 256 / N) + frame`, reduced
    /// modulo 256. For N not dividing 256 the phase offsets come out
    /// slightly uneven; that is long-standing visual behavior, kept
    /// as-is. Issues exactly N `set_pixel` calls and one `show`.
    pub fn render_frame(&mut self, frame: u16) -> Result<(), S::Error> {
        let n = self.strip.len();
        for i in 0..n {
            let pos = (i * 256 / n + frame as usize) & 255;
            self.strip.set_pixel(i, wheel(pos as i16));
        }
        self.strip.show()
    }

    /// Runs one full rainbow cycle: [`FRAMES_PER_CYCLE`] frames, each
    /// followed by the configured frame delay.
    pub fn run_cycle<T: Sleeper>(&mut self, sleeper: &mut T) -> Result<(), S::Error> {
        let delay = self.config.frame_delay();
        for frame in 0..FRAMES_PER_CYCLE {
            self.render_frame(frame)?;
            sleeper.sleep(delay);
        }
        Ok(())
    }

    /// Blacks out the strip, flushes once, and holds for
    /// [`SHUTDOWN_HOLD`] so the dark strip is visible before exit.
    pub fn shutdown<T: Sleeper>(&mut self, sleeper: &mut T) -> Result<(), S::Error> {
        for i in 0..self.strip.len() {
            self.strip.set_pixel(i, COLOR_OFF);
        }
        self.strip.show()?;
        sleeper.sleep(SHUTDOWN_HOLD);
        Ok(())
    }

    /// Runs the animation.
    ///
    /// Repeats groups of [`CYCLES_PER_RUN`] cycles. With crash mode
    /// enabled, the first group is followed by [`shutdown`] and an
    /// `Ok(())` return — the caller is expected to terminate the
    /// process with its distinguished exit status. With crash mode
    /// disabled this never returns except on a strip error.
    pub fn run<T: Sleeper>(&mut self, sleeper: &mut T) -> Result<(), S::Error> {
        loop {
            for _ in 0..CYCLES_PER_RUN {
                self.run_cycle(sleeper)?;
            }
            if self.config.crash_mode {
                return self.shutdown(sleeper);
            }
        }
    }
}
