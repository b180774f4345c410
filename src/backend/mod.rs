//! Concrete [`LedStrip`] backends and the platform factory.
//!
//! Two mutually exclusive transports exist: [`SpiStrip`] encodes the
//! WS2812 waveform onto a Linux SPI character device (Jetson-style
//! wiring on SPI0 MOSI) and [`Ws281xStrip`] drives the strip through
//! the PWM/DMA WS281x kernel interface (Raspberry Pi wiring on
//! GPIO 18). [`open`] selects between them from the parsed [`Arch`].

pub mod spi;
pub mod ws281x;

pub use spi::{MAX_PIXELS, PixelOrder, SPI_DEVICE, SpiStrip};
pub use ws281x::{GPIO_PIN, Ws281xStrip};

use crate::config::Arch;
use crate::cycler::LedStrip;
use smart_leds::RGB8;

/// Opens the LED strip backend for `arch` with `num_pixels` pixels.
///
/// The SPI backend uses the device's native RGB channel order; the
/// GPIO backend lets the WS281x driver handle channel ordering.
pub fn open(arch: Arch, num_pixels: usize) -> Result<Backend, BackendError> {
    match arch {
        Arch::Arm64 => Ok(Backend::Spi(SpiStrip::open(
            SPI_DEVICE,
            num_pixels,
            PixelOrder::Rgb,
        )?)),
        Arch::Arm => Ok(Backend::Ws281x(Ws281xStrip::open(GPIO_PIN, num_pixels)?)),
    }
}

/// An opened strip, one of the two concrete transports.
pub enum Backend {
    /// SPI-encoded WS2812 transport.
    Spi(SpiStrip),
    /// PWM/DMA WS281x transport.
    Ws281x(Ws281xStrip),
}

impl LedStrip for Backend {
    type Error = BackendError;

    fn len(&self) -> usize {
        match self {
            Backend::Spi(strip) => strip.len(),
            Backend::Ws281x(strip) => strip.len(),
        }
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        match self {
            Backend::Spi(strip) => strip.set_pixel(index, color),
            Backend::Ws281x(strip) => strip.set_pixel(index, color),
        }
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        match self {
            Backend::Spi(strip) => strip.show(),
            Backend::Ws281x(strip) => strip.show(),
        }
    }
}

/// Errors raised while opening or flushing a backend.
#[derive(Debug)]
pub enum BackendError {
    /// SPI character device I/O failure.
    Io(std::io::Error),
    /// WS281x driver failure.
    Ws281x(rs_ws281x::WS2811Error),
    /// Requested strip length exceeds the buffered backend's capacity.
    TooManyPixels {
        /// Requested strip length.
        requested: usize,
        /// Maximum supported strip length.
        max: usize,
    },
}

impl core::fmt::Display for BackendError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BackendError::Io(err) => write!(f, "spi device error: {}", err),
            BackendError::Ws281x(err) => write!(f, "ws281x driver error: {:?}", err),
            BackendError::TooManyPixels { requested, max } => {
                write!(f, "strip length {} exceeds the supported maximum {}", requested, max)
            }
        }
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BackendError::Io(err) => Some(err),
            BackendError::Ws281x(_) | BackendError::TooManyPixels { .. } => None,
        }
    }
}

impl From<std::io::Error> for BackendError {
    fn from(err: std::io::Error) -> Self {
        BackendError::Io(err)
    }
}

impl From<rs_ws281x::WS2811Error> for BackendError {
    fn from(err: rs_ws281x::WS2811Error) -> Self {
        BackendError::Ws281x(err)
    }
}
