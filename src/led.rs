//! LED layout of the badge and the handful of color primitives the
//! animations are built from.

use palette::{Mix, Srgb};

pub type Color = Srgb<u8>;

/// Number of LEDs in the bar on the front of the badge
pub const EFBAR_NUM: usize = 11;

/// Number of LEDs in the dragon head
pub const DRAGON_NUM: usize = 6;

pub const TOTAL_NUM: usize = DRAGON_NUM + EFBAR_NUM;

pub const BLACK: Color = Color::new(0, 0, 0);

/// Ticks spent on each palette slot while rotating a flag through the dragon head
pub const ROTATION_TICKS: u32 = 20;

/// Linear interpolation between two colors. `factor` is clamped to `0.0..=1.0`,
/// and the endpoints are returned unchanged.
pub fn lerp(from: Color, to: Color, factor: f32) -> Color {
    if factor <= 0.0 {
        return from;
    }
    if factor >= 1.0 {
        return to;
    }

    from.into_format::<f32>()
        .mix(to.into_format(), factor)
        .into_format()
}

/// Blend `from` towards `to` by `amount` out of 255.
pub fn blend(from: Color, to: Color, amount: u8) -> Color {
    lerp(from, to, amount as f32 / 255.0)
}

/// Scale every channel by `scale / 255`.
pub fn scale8(color: Color, scale: u8) -> Color {
    let scale_channel = |c: u8| ((c as u16 * scale as u16) / 255) as u8;
    Color::new(
        scale_channel(color.red),
        scale_channel(color.green),
        scale_channel(color.blue),
    )
}

/// Dim a color by `amount` out of 255. An amount of 128 roughly halves it.
pub fn fade_light_by(color: Color, amount: u8) -> Color {
    scale8(color, 255 - amount)
}

/// Sample `palette` as a closed loop at `index` (0..=255 covers the whole
/// palette once), blending linearly between neighbouring entries.
pub fn color_from_palette(palette: &[Color], index: u8, brightness: u8) -> Color {
    if palette.is_empty() {
        return BLACK;
    }

    let position = index as f32 * palette.len() as f32 / 256.0;
    let slot = position.floor() as usize % palette.len();
    let next = (slot + 1) % palette.len();
    let color = lerp(palette[slot], palette[next], position.fract());
    scale8(color, brightness)
}

/// Spread one full loop of `palette` over `out`, starting at `start_index`.
/// With `reversed` the loop runs from the last LED to the first.
pub fn fill_palette_circular(
    out: &mut [Color],
    start_index: u8,
    palette: &[Color],
    brightness: u8,
    reversed: bool,
) {
    let len = out.len();
    if len == 0 {
        return;
    }

    for i in 0..len {
        let offset = ((i * 256) / len) as u8;
        let index = start_index.wrapping_add(offset);
        let led = if reversed { len - 1 - i } else { i };
        out[led] = color_from_palette(palette, index, brightness);
    }
}

/// Rotate a bar-sized flag left by one slot every `ROTATION_TICKS` ticks.
pub fn rotate_flag(flag: &[Color; EFBAR_NUM], tick: u32) -> [Color; EFBAR_NUM] {
    let shift = (tick % (EFBAR_NUM as u32 * ROTATION_TICKS)) / ROTATION_TICKS;
    let mut rotated = *flag;
    rotated.rotate_left(shift as usize);
    rotated
}

/// Everything the badge can show at one instant. LED indices used by
/// `set_all` and `pixels` run over the dragon head first, then the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedFrame {
    pub dragon: [Color; DRAGON_NUM],
    pub efbar: [Color; EFBAR_NUM],
}

impl Default for LedFrame {
    fn default() -> Self {
        Self {
            dragon: [BLACK; DRAGON_NUM],
            efbar: [BLACK; EFBAR_NUM],
        }
    }
}

impl LedFrame {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn set_dragon(&mut self, colors: &[Color; DRAGON_NUM]) {
        self.dragon = *colors;
    }

    pub fn set_efbar(&mut self, colors: &[Color; EFBAR_NUM]) {
        self.efbar = *colors;
    }

    pub fn set_all(&mut self, colors: &[Color; TOTAL_NUM]) {
        self.dragon.copy_from_slice(&colors[..DRAGON_NUM]);
        self.efbar.copy_from_slice(&colors[DRAGON_NUM..]);
    }

    pub fn set_all_solid(&mut self, color: Color) {
        self.dragon = [color; DRAGON_NUM];
        self.efbar = [color; EFBAR_NUM];
    }

    pub fn pixels(&self) -> [Color; TOTAL_NUM] {
        let mut pixels = [BLACK; TOTAL_NUM];
        pixels[..DRAGON_NUM].copy_from_slice(&self.dragon);
        pixels[DRAGON_NUM..].copy_from_slice(&self.efbar);
        pixels
    }

    #[cfg(test)]
    pub fn is_dark(&self) -> bool {
        self.pixels().iter().all(|c| *c == BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0);
    const BLUE: Color = Color::new(0, 0, 255);

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Color::new(6, 255, 161);
        let b = Color::new(255, 58, 26);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, -3.0), a);
        assert_eq!(lerp(a, b, 7.0), b);
    }

    #[test]
    fn lerp_midpoint() {
        let mid = lerp(BLACK, Color::new(200, 100, 0), 0.5);
        assert_eq!(mid, Color::new(100, 50, 0));
    }

    #[test]
    fn fade_light_by_half() {
        let faded = fade_light_by(Color::new(255, 128, 0), 128);
        assert_eq!(faded, Color::new(127, 63, 0));
        assert_eq!(fade_light_by(RED, 0), RED);
        assert_eq!(fade_light_by(RED, 255), BLACK);
    }

    #[test]
    fn rotate_flag_steps_every_rotation_period() {
        let mut flag = [BLACK; EFBAR_NUM];
        flag[1] = RED;

        assert_eq!(rotate_flag(&flag, 0)[1], RED);
        assert_eq!(rotate_flag(&flag, ROTATION_TICKS - 1)[1], RED);
        assert_eq!(rotate_flag(&flag, ROTATION_TICKS)[0], RED);
        // Full loop comes back to the start
        let period = EFBAR_NUM as u32 * ROTATION_TICKS;
        assert_eq!(rotate_flag(&flag, period), flag);
    }

    #[test]
    fn palette_sampling_wraps_around() {
        let palette = [RED, BLUE];
        assert_eq!(color_from_palette(&palette, 0, 255), RED);
        assert_eq!(color_from_palette(&palette, 128, 255), BLUE);
        // Between the last entry and the first we blend back towards red
        let back = color_from_palette(&palette, 192, 255);
        assert!(back.red > 100 && back.blue > 100);
        assert_eq!(color_from_palette(&[], 10, 255), BLACK);
    }

    #[test]
    fn fill_palette_circular_reversed_mirrors() {
        let palette = [RED, BLUE];
        let mut forward = [BLACK; 4];
        let mut backward = [BLACK; 4];
        fill_palette_circular(&mut forward, 0, &palette, 255, false);
        fill_palette_circular(&mut backward, 0, &palette, 255, true);

        assert_eq!(forward[0], RED);
        assert_eq!(forward[2], BLUE);
        let mut mirrored = forward;
        mirrored.reverse();
        assert_eq!(backward, mirrored);
    }

    #[test]
    fn frame_layout_is_dragon_then_bar() {
        let mut frame = LedFrame::default();
        assert!(frame.is_dark());

        let mut all = [BLACK; TOTAL_NUM];
        all[0] = RED;
        all[DRAGON_NUM] = BLUE;
        frame.set_all(&all);
        assert_eq!(frame.dragon[0], RED);
        assert_eq!(frame.efbar[0], BLUE);
        assert_eq!(frame.pixels(), all);

        frame.clear();
        assert!(frame.is_dark());
    }
}
