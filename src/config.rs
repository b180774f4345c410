//! Startup configuration from the process environment.
//!
//! The only startup inputs are two environment variables: `ARCH`
//! selects the hardware backend, `DO_CRASH` toggles crash-test mode.
//! An unrecognized `ARCH` is a fatal configuration error, never
//! retried.

/// Platform selector, read from the `ARCH` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Arch {
    /// NVIDIA Jetson class device; NeoPixel control wire on the SPI0
    /// MOSI pin, driven through the SPI character device.
    Arm64,
    /// Raspberry Pi class device; NeoPixel control wire on GPIO 18,
    /// driven through the PWM/DMA WS281x driver.
    Arm,
}

impl Arch {
    /// Parses an `ARCH` value. Recognizes exactly `"arm64"` and
    /// `"arm"`, case-sensitive.
    pub fn from_value(value: &str) -> Option<Arch> {
        match value {
            "arm64" => Some(Arch::Arm64),
            "arm" => Some(Arch::Arm),
            _ => None,
        }
    }
}

/// Returns whether a `DO_CRASH` value enables crash-test mode.
///
/// Unset and empty are off, as are the explicit `"0"` and `"false"`.
/// Anything else turns the mode on.
pub fn crash_mode_from_value(value: Option<&str>) -> bool {
    !matches!(value, None | Some("") | Some("0") | Some("false"))
}

#[cfg(feature = "std")]
mod env_config {
    use super::{Arch, crash_mode_from_value};

    /// Environment variable naming the target platform.
    pub const ARCH_VAR: &str = "ARCH";

    /// Environment variable toggling crash-test mode.
    pub const DO_CRASH_VAR: &str = "DO_CRASH";

    /// Resolved startup configuration.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Config {
        /// Selected hardware backend.
        pub arch: Arch,
        /// Crash-test mode toggle.
        pub crash_mode: bool,
    }

    impl Config {
        /// Reads configuration from the process environment.
        ///
        /// A missing `ARCH` is treated the same as an empty one and
        /// reported with the empty value in the error.
        pub fn from_env() -> Result<Config, ConfigError> {
            let arch_value = std::env::var(ARCH_VAR).unwrap_or_default();
            let arch = Arch::from_value(&arch_value)
                .ok_or(ConfigError::UnsupportedArch { value: arch_value })?;
            let crash_mode =
                crash_mode_from_value(std::env::var(DO_CRASH_VAR).ok().as_deref());
            Ok(Config { arch, crash_mode })
        }
    }

    /// Fatal configuration errors.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ConfigError {
        /// `ARCH` named a platform no backend exists for.
        UnsupportedArch {
            /// The offending value, possibly empty.
            value: String,
        },
    }

    impl core::fmt::Display for ConfigError {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            match self {
                ConfigError::UnsupportedArch { value } => {
                    write!(f, "unsupported architecture: \"{}\"", value)
                }
            }
        }
    }

    impl std::error::Error for ConfigError {}
}

#[cfg(feature = "std")]
pub use env_config::{ARCH_VAR, Config, ConfigError, DO_CRASH_VAR};
