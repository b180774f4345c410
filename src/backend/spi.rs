//! WS2812 over a Linux SPI character device.
//!
//! The strip's one-wire protocol is emulated by clocking the SPI bus at
//! 2.5 MHz and expanding every data bit into three SPI bits: `100` for
//! a zero, `110` for a one. That puts the high pulse at 0.4 µs or
//! 0.8 µs inside a 1.2 µs bit period, within WS2812 timing tolerances.
//! A tail of zero bytes holds the line low long enough to latch.

use std::io::Write;

use super::BackendError;
use crate::cycler::LedStrip;
use smart_leds::RGB8;
use spidev::{SpiModeFlags, Spidev, SpidevOptions};

/// SPI character device the strip's control wire hangs off.
pub const SPI_DEVICE: &str = "/dev/spidev0.0";

/// Maximum strip length for this backend.
pub const MAX_PIXELS: usize = 64;

/// 3 SPI bits per data bit at this clock gives a 1.2 µs bit period.
const SPI_CLOCK_HZ: u32 = 2_500_000;

/// Trailing low bytes appended to every transfer. 40 bytes at 2.5 MHz
/// is 128 µs, comfortably past the 80 µs latch threshold.
const RESET_BYTES: usize = 40;

/// SPI bytes per 8-bit color channel.
const SPI_BYTES_PER_CHANNEL: usize = 3;

/// Channel order expected by the attached strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelOrder {
    /// Red, green, blue.
    Rgb,
    /// Green, red, blue (the common WS2812 order).
    Grb,
}

impl PixelOrder {
    fn channels(self, color: RGB8) -> [u8; 3] {
        match self {
            PixelOrder::Rgb => [color.r, color.g, color.b],
            PixelOrder::Grb => [color.g, color.r, color.b],
        }
    }
}

/// Write-buffered [`LedStrip`] over a Linux SPI device.
///
/// `set_pixel` only stages colors; [`show`](LedStrip::show) encodes the
/// whole buffer and pushes it out in one blocking transfer.
pub struct SpiStrip {
    spi: Spidev,
    order: PixelOrder,
    pixels: heapless::Vec<RGB8, MAX_PIXELS>,
    wire: Vec<u8>,
}

impl SpiStrip {
    /// Opens and configures the SPI device at `path` for a strip of
    /// `num_pixels` pixels in `order`.
    pub fn open(path: &str, num_pixels: usize, order: PixelOrder) -> Result<Self, BackendError> {
        let mut spi = Spidev::open(path)?;
        let options = SpidevOptions::new()
            .bits_per_word(8)
            .max_speed_hz(SPI_CLOCK_HZ)
            .mode(SpiModeFlags::SPI_MODE_0)
            .build();
        spi.configure(&options)?;

        let mut pixels = heapless::Vec::new();
        for _ in 0..num_pixels {
            pixels
                .push(RGB8::default())
                .map_err(|_| BackendError::TooManyPixels {
                    requested: num_pixels,
                    max: MAX_PIXELS,
                })?;
        }

        let wire = Vec::with_capacity(num_pixels * 3 * SPI_BYTES_PER_CHANNEL + RESET_BYTES);
        Ok(Self {
            spi,
            order,
            pixels,
            wire,
        })
    }
}

impl LedStrip for SpiStrip {
    type Error = BackendError;

    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        self.pixels[index] = color;
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.wire.clear();
        for pixel in &self.pixels {
            for channel in self.order.channels(*pixel) {
                self.wire.extend_from_slice(&encode_channel(channel));
            }
        }
        self.wire.resize(self.wire.len() + RESET_BYTES, 0);
        self.spi.write_all(&self.wire)?;
        Ok(())
    }
}

/// Expands one color byte, MSB first, into its SPI waveform.
fn encode_channel(channel: u8) -> [u8; SPI_BYTES_PER_CHANNEL] {
    let mut bits: u32 = 0;
    for i in 0..8 {
        bits <<= 3;
        bits |= if channel & (0x80 >> i) != 0 { 0b110 } else { 0b100 };
    }
    [(bits >> 16) as u8, (bits >> 8) as u8, bits as u8]
}
