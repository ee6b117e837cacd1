use rand::RngCore;

use crate::effects::LightingEffect;
use crate::led::{fill_palette_circular, Color, LedFrame, BLACK, TOTAL_NUM};

/// A palette spread around the whole badge and spun one notch per tick.
pub struct CircularPalette {
    palette: &'static [Color],
    brightness: u8,
}

impl CircularPalette {
    pub fn new(palette: &'static [Color], brightness: u8) -> CircularPalette {
        CircularPalette {
            palette,
            brightness,
        }
    }

    fn start_index(tick: u32) -> u8 {
        ((tick % 128) * 2) as u8
    }
}

impl LightingEffect for CircularPalette {
    fn step(&mut self, tick: u32, frame: &mut LedFrame, _: &mut dyn RngCore) {
        let mut data = [BLACK; TOTAL_NUM];
        fill_palette_circular(
            &mut data,
            Self::start_index(tick),
            self.palette,
            self.brightness,
            true,
        );
        frame.set_all(&data);
    }
}
