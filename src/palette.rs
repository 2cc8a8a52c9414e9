// Height -> colour. Water below 0.5, a blue-to-green ramp up to 0.8,
// then green fading into red peaks.

use image::Rgb;

pub const WATER_LEVEL: f64 = 0.5;
pub const PEAK_LEVEL: f64 = 0.8;

const WATER: Rgb<u8> = Rgb([0, 0, 255]);
const LOWLAND_GAIN: f64 = 2.0; // green gained per unit of height above water, x255
const PEAK_GAIN: f64 = 5.0;    // red gained per unit of height above PEAK_LEVEL, x255

#[inline]
fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

// Green/blue split for a height in (WATER_LEVEL, PEAK_LEVEL].
#[inline]
fn lowland(h: f64) -> (u8, u8) {
    let g = channel((h - WATER_LEVEL) * LOWLAND_GAIN * 255.0);
    (g, 255 - g)
}

/// Colour for a terrain height. Out-of-range heights are clamped to [0,1] first.
pub fn height_color(height: f64) -> Rgb<u8> {
    let h = if height.is_nan() { 0.0 } else { height.clamp(0.0, 1.0) };

    if h <= WATER_LEVEL {
        WATER
    } else if h <= PEAK_LEVEL {
        let (g, b) = lowland(h);
        Rgb([0, g, b])
    } else {
        // Start from the lowland colour at the breakpoint so the ramps meet.
        let (g0, b0) = lowland(PEAK_LEVEL);
        let ramp = (h - PEAK_LEVEL) * PEAK_GAIN * 255.0;
        Rgb([
            channel(ramp),
            channel(g0 as f64 - ramp),
            // Blue falls with green; only green's fall is fixed by the colour rules.
            channel(b0 as f64 - ramp),
        ])
    }
}

/// Pack into minifb's 0x00RRGGBB.
#[inline]
pub fn pack_rgb(c: Rgb<u8>) -> u32 {
    let [r, g, b] = c.0;
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}
