//! Rainbow color wheel.
//!
//! Maps a scalar position on a cyclic [0, 256) domain to an RGB color,
//! sweeping red → blue → green and back to red. Output intensity is
//! capped at 31 per channel to keep current draw down on bare strips.

use smart_leds::RGB8;

/// Divisor applied to every channel after the wheel math.
///
/// Caps the effective range at 0-31 out of 255. This is an intensity
/// policy, independent of the color math itself.
const BRIGHTNESS_DIVISOR: u16 = 8;

/// Returns the rainbow color at `pos`.
///
/// The domain splits into three bands of width 85, each ramping one
/// channel up by 3 per step while another ramps down:
///
/// * `[0, 85)` — rising red, falling green
/// * `[85, 170)` — falling red, rising blue
/// * `[170, 256)` — rising green, falling blue
///
/// Positions outside `[0, 255]` yield black. Callers normally sanitize
/// with `pos & 255` first; the function stays total regardless.
pub fn wheel(pos: i16) -> RGB8 {
    let (r, g, b): (u16, u16, u16) = if !(0..=255).contains(&pos) {
        (0, 0, 0)
    } else if pos < 85 {
        let pos = pos as u16;
        (pos * 3, 255 - pos * 3, 0)
    } else if pos < 170 {
        let pos = (pos - 85) as u16;
        (255 - pos * 3, 0, pos * 3)
    } else {
        let pos = (pos - 170) as u16;
        (0, pos * 3, 255 - pos * 3)
    };

    RGB8::new(
        (r / BRIGHTNESS_DIVISOR) as u8,
        (g / BRIGHTNESS_DIVISOR) as u8,
        (b / BRIGHTNESS_DIVISOR) as u8,
    )
}
