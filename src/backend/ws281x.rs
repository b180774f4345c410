//! WS2812 through the Raspberry Pi PWM/DMA WS281x driver.

use super::BackendError;
use crate::cycler::LedStrip;
use rs_ws281x::{ChannelBuilder, Controller, ControllerBuilder, StripType};
use smart_leds::RGB8;

/// GPIO pin the NeoPixel control wire is attached to (board pin D18).
pub const GPIO_PIN: i32 = 18;

/// WS2812 data rate.
const LED_FREQ_HZ: u32 = 800_000;

/// DMA channel used by the driver.
const DMA_CHANNEL: i32 = 10;

/// [`LedStrip`] over the WS281x PWM/DMA controller.
///
/// The controller keeps the pixel buffer; `set_pixel` writes straight
/// into it and [`show`](LedStrip::show) triggers a render.
pub struct Ws281xStrip {
    controller: Controller,
    len: usize,
}

impl Ws281xStrip {
    /// Initializes the WS281x controller for `num_pixels` pixels on
    /// `pin`.
    ///
    /// Brightness is left at full; the animation's own /8 intensity cap
    /// is the only dimming policy.
    pub fn open(pin: i32, num_pixels: usize) -> Result<Self, BackendError> {
        let controller = ControllerBuilder::new()
            .freq(LED_FREQ_HZ)
            .dma(DMA_CHANNEL)
            .channel(
                0,
                ChannelBuilder::new()
                    .pin(pin)
                    .count(num_pixels as i32)
                    .strip_type(StripType::Ws2812)
                    .brightness(255)
                    .build(),
            )
            .build()?;
        Ok(Self {
            controller,
            len: num_pixels,
        })
    }
}

impl LedStrip for Ws281xStrip {
    type Error = BackendError;

    fn len(&self) -> usize {
        self.len
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        // Driver colors are 0xWWRRGGBB words, [B, G, R, W] as bytes.
        self.controller.leds_mut(0)[index] = [color.b, color.g, color.r, 0];
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.controller.render()?;
        Ok(())
    }
}
