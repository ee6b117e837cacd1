use rand::RngCore;

use crate::effects::LightingEffect;
use crate::led::{Color, LedFrame};

/// Whole badge in one color, stepping through a palette once per tick.
pub struct SolidCycle {
    palette: &'static [Color],
}

impl SolidCycle {
    pub fn new(palette: &'static [Color]) -> SolidCycle {
        SolidCycle { palette }
    }
}

impl LightingEffect for SolidCycle {
    fn step(&mut self, tick: u32, frame: &mut LedFrame, _: &mut dyn RngCore) {
        if let Some(color) = self.palette.get(tick as usize % self.palette.len().max(1)) {
            frame.set_all_solid(*color);
        }
    }
}
