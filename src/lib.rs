#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`wheel`**: Pure position-to-color mapping producing a smooth, cyclic rainbow
//! - **`LedStrip`**: Trait to implement for your strip hardware (`set_pixel` + `show`)
//! - **`RainbowCycler`**: Drives a strip through the rotating rainbow animation
//! - **`CyclerConfig`**: Animation options, notably the crash-test mode toggle
//! - **`Sleeper`**: Trait abstracting the blocking frame delays
//! - **`Arch`** / **`Config`**: Platform selection and crash flag from the environment
//! - **`backend`** (feature `hardware`): SPI and PWM/DMA strip implementations
//!
//! Colors are `smart_leds::RGB8`. The wheel caps every channel at 31 of
//! 255; implementations of `LedStrip` should pass values through
//! unscaled.

// Re-export RGB8 from smart-leds for user convenience
pub use smart_leds::RGB8;

pub mod config;
pub mod cycler;
pub mod time;
pub mod wheel;

#[cfg(feature = "hardware")]
pub mod backend;

pub use config::{Arch, crash_mode_from_value};
pub use cycler::{
    CRASH_FRAME_DELAY, CYCLES_PER_RUN, CyclerConfig, FRAME_DELAY, FRAMES_PER_CYCLE, LedStrip,
    RainbowCycler, SHUTDOWN_HOLD,
};
pub use time::Sleeper;
pub use wheel::wheel;

#[cfg(feature = "std")]
pub use config::{ARCH_VAR, Config, ConfigError, DO_CRASH_VAR};
#[cfg(feature = "std")]
pub use time::ThreadSleeper;

/// Black, used for the crash-mode blackout.
pub const COLOR_OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Default strip length; set this to match your pixel strip.
pub const DEFAULT_NUM_PIXELS: usize = 1;

#[cfg(test)]
mod tests {
    use super::*;

    // Basic compilation tests - actual functionality tests live in tests/
    #[test]
    fn types_compile() {
        let _ = CyclerConfig::default();
        let _ = Arch::from_value("arm64");
        let _ = wheel(0);
    }

    #[test]
    fn crash_mode_picks_the_short_frame_delay() {
        assert_eq!(CyclerConfig { crash_mode: false }.frame_delay(), FRAME_DELAY);
        assert_eq!(CyclerConfig { crash_mode: true }.frame_delay(), CRASH_FRAME_DELAY);
    }
}
