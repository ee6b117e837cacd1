use rand::RngCore;

use crate::effects::LightingEffect;
use crate::led::{
    blend, fade_light_by, rotate_flag, Color, LedFrame, DRAGON_NUM, EFBAR_NUM, ROTATION_TICKS,
};

/// How much the dragon head is dimmed relative to the bar
const DRAGON_FADE: u8 = 128;

/// Dragon head colors for `tick`: the flag rotated one slot per rotation
/// period, cross-faded towards the next slot in between.
pub(crate) fn dragon_head(flag: &[Color; EFBAR_NUM], tick: u32) -> [Color; DRAGON_NUM] {
    let rotated = rotate_flag(flag, tick);
    let amount = ((tick % ROTATION_TICKS) * 255 / ROTATION_TICKS) as u8;

    let mut dragon = [Color::new(0, 0, 0); DRAGON_NUM];
    for (i, led) in dragon.iter_mut().enumerate() {
        let blended = blend(rotated[i], rotated[i + 1], amount);
        *led = fade_light_by(blended, DRAGON_FADE);
    }
    dragon
}

/// Static flag on the bar with its colors rotating through the dragon head.
pub struct RotatingDragonHead {
    flag: &'static [Color; EFBAR_NUM],
    refresh_every: u32,
}

impl RotatingDragonHead {
    pub fn new(flag: &'static [Color; EFBAR_NUM], refresh_every: u32) -> RotatingDragonHead {
        RotatingDragonHead {
            flag,
            refresh_every,
        }
    }
}

impl LightingEffect for RotatingDragonHead {
    fn step(&mut self, tick: u32, frame: &mut LedFrame, _: &mut dyn RngCore) {
        frame.set_dragon(&dragon_head(self.flag, tick));

        if tick % self.refresh_every == 0 {
            frame.set_efbar(self.flag);
        }
    }
}
