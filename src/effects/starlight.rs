use rand::RngCore;

use crate::effects::LightingEffect;
use crate::led::{LedFrame, BLACK, TOTAL_NUM};
use crate::twinkle::{PixelTransitionTable, TwinkleConfig, TwinklePalette};

/// Every LED rests on one color and now and then swells to the other,
/// lingers there and sinks back.
pub struct Starlight {
    table: PixelTransitionTable,
}

impl Starlight {
    pub fn new(config: TwinkleConfig, palette: TwinklePalette) -> Starlight {
        Starlight {
            table: PixelTransitionTable::new(TOTAL_NUM, config, palette),
        }
    }

    #[cfg(test)]
    pub fn table(&self) -> &PixelTransitionTable {
        &self.table
    }
}

impl LightingEffect for Starlight {
    fn entry(&mut self) {
        self.table.reset();
    }

    fn step(&mut self, _tick: u32, frame: &mut LedFrame, rng: &mut dyn RngCore) {
        self.table.tick(rng);

        let mut data = [BLACK; TOTAL_NUM];
        for (index, led) in data.iter_mut().enumerate().take(self.table.len()) {
            *led = self.table.color_for(index);
        }
        frame.set_all(&data);
    }
}
