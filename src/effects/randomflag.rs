use palette::{FromColor, Hsv, Srgb};
use rand::{Rng, RngCore};

use crate::effects::dragonhead::dragon_head;
use crate::effects::LightingEffect;
use crate::led::{Color, LedFrame, BLACK, EFBAR_NUM};

/// A flag of random fully saturated colors, rolled again at every bar refresh
/// and rotated through the dragon head in between.
pub struct RandomFlag {
    flag: [Color; EFBAR_NUM],
    refresh_every: u32,
}

impl RandomFlag {
    pub fn new(refresh_every: u32) -> RandomFlag {
        RandomFlag {
            flag: [BLACK; EFBAR_NUM],
            refresh_every,
        }
    }

    fn random_color(rng: &mut dyn RngCore) -> Color {
        let hue = rng.gen_range(0.0..360.0f32);
        let hsv = Hsv::new(hue, 1.0, 1.0);
        Srgb::from_color(hsv).into_format()
    }

    fn roll(&mut self, rng: &mut dyn RngCore) {
        for led in self.flag.iter_mut() {
            *led = Self::random_color(rng);
        }
    }
}

impl LightingEffect for RandomFlag {
    fn step(&mut self, tick: u32, frame: &mut LedFrame, rng: &mut dyn RngCore) {
        if tick % self.refresh_every == 0 {
            self.roll(rng);
            frame.set_efbar(&self.flag);
        }

        frame.set_dragon(&dragon_head(&self.flag, tick));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn flag_is_rolled_on_refresh_ticks_only() {
        let mut effect = RandomFlag::new(25);
        let mut frame = LedFrame::default();
        let mut rng = StdRng::seed_from_u64(11);

        effect.step(0, &mut frame, &mut rng);
        let first = frame.efbar;
        assert_ne!(first, [BLACK; EFBAR_NUM]);

        for tick in 1..25 {
            effect.step(tick, &mut frame, &mut rng);
            assert_eq!(frame.efbar, first);
        }

        effect.step(25, &mut frame, &mut rng);
        assert_ne!(frame.efbar, first);
    }

    #[test]
    fn colors_are_fully_saturated() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let color = RandomFlag::random_color(&mut rng);
            let channels = [color.red, color.green, color.blue];
            assert_eq!(channels.iter().max(), Some(&255));
            assert_eq!(channels.iter().min(), Some(&0));
        }
    }

    #[test]
    fn dragon_follows_the_flag() {
        let mut effect = RandomFlag::new(25);
        let mut frame = LedFrame::default();
        let mut rng = StdRng::seed_from_u64(2);

        effect.step(0, &mut frame, &mut rng);
        assert_eq!(frame.dragon, dragon_head(&frame.efbar, 0));
    }
}
