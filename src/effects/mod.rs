pub(crate) mod circular;
pub(crate) mod dragonhead;
pub(crate) mod randomflag;
pub(crate) mod solidcycle;
pub(crate) mod starlight;

use rand::RngCore;

use crate::led::{Color, LedFrame, EFBAR_NUM};
use crate::twinkle::{TwinkleConfig, TwinklePalette};

use circular::CircularPalette;
use dragonhead::RotatingDragonHead;
use randomflag::RandomFlag;
use solidcycle::SolidCycle;
use starlight::Starlight;

pub trait LightingEffect {
    /// Called whenever the effect becomes active, before the first step.
    fn entry(&mut self) {}

    fn step(&mut self, tick: u32, frame: &mut LedFrame, rng: &mut dyn RngCore);
}

/// Which animation a display mode plays and with what colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationKind {
    DragonHead(&'static [Color; EFBAR_NUM]),
    Circular(&'static [Color]),
    Starlight,
    RandomFlag,
    SolidCycle(&'static [Color]),
}

/// One entry of a display state's mode table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSlot {
    pub kind: AnimationKind,
    pub tick_rate_ms: u32,
}

/// Values shared by every animation of a display state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    /// Period at which static parts of a pattern (the bar) get redrawn
    pub switch_delay_ms: u32,
    pub twinkle: TwinkleConfig,
    pub twinkle_palette: TwinklePalette,
}

impl AnimationSettings {
    /// Number of ticks between bar refreshes at the given tick rate.
    pub fn refresh_every(&self, tick_rate_ms: u32) -> u32 {
        (self.switch_delay_ms / tick_rate_ms.max(1)).max(1)
    }
}

pub enum Animation {
    DragonHead(RotatingDragonHead),
    Circular(CircularPalette),
    Starlight(Starlight),
    RandomFlag(RandomFlag),
    SolidCycle(SolidCycle),
}

impl Animation {
    pub fn new(slot: &AnimationSlot, settings: &AnimationSettings, brightness: u8) -> Animation {
        let refresh_every = settings.refresh_every(slot.tick_rate_ms);
        match slot.kind {
            AnimationKind::DragonHead(flag) => {
                Animation::DragonHead(RotatingDragonHead::new(flag, refresh_every))
            }
            AnimationKind::Circular(palette) => {
                Animation::Circular(CircularPalette::new(palette, brightness))
            }
            AnimationKind::Starlight => {
                Animation::Starlight(Starlight::new(settings.twinkle, settings.twinkle_palette))
            }
            AnimationKind::RandomFlag => Animation::RandomFlag(RandomFlag::new(refresh_every)),
            AnimationKind::SolidCycle(palette) => Animation::SolidCycle(SolidCycle::new(palette)),
        }
    }

    fn effect(&mut self) -> &mut dyn LightingEffect {
        match self {
            Animation::DragonHead(effect) => effect,
            Animation::Circular(effect) => effect,
            Animation::Starlight(effect) => effect,
            Animation::RandomFlag(effect) => effect,
            Animation::SolidCycle(effect) => effect,
        }
    }

    pub fn entry(&mut self) {
        self.effect().entry();
    }

    pub fn step(&mut self, tick: u32, frame: &mut LedFrame, rng: &mut dyn RngCore) {
        self.effect().step(tick, frame, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palettes;

    fn settings() -> AnimationSettings {
        AnimationSettings {
            switch_delay_ms: 5000,
            twinkle: TwinkleConfig::default(),
            twinkle_palette: TwinklePalette {
                rest: palettes::STARLIGHT_BLUE,
                peak: palettes::STARLIGHT_ORANGE,
            },
        }
    }

    #[test]
    fn refresh_period_follows_tick_rate() {
        let settings = settings();
        assert_eq!(settings.refresh_every(20), 250);
        assert_eq!(settings.refresh_every(200), 25);
        assert_eq!(settings.refresh_every(0), 5000);
        assert_eq!(settings.refresh_every(10_000), 1);
    }

    #[test]
    fn slots_build_matching_variants() {
        let settings = settings();
        let slot = |kind| AnimationSlot {
            kind,
            tick_rate_ms: 20,
        };

        assert!(matches!(
            Animation::new(&slot(AnimationKind::DragonHead(&palettes::DIEGOTEKI)), &settings, 255),
            Animation::DragonHead(_)
        ));
        assert!(matches!(
            Animation::new(&slot(AnimationKind::Circular(&palettes::CIRCULAR_FULL)), &settings, 255),
            Animation::Circular(_)
        ));
        assert!(matches!(
            Animation::new(&slot(AnimationKind::Starlight), &settings, 255),
            Animation::Starlight(_)
        ));
        assert!(matches!(
            Animation::new(&slot(AnimationKind::RandomFlag), &settings, 255),
            Animation::RandomFlag(_)
        ));
        assert!(matches!(
            Animation::new(&slot(AnimationKind::SolidCycle(&palettes::DIEGOTEKI_CIRCULAR)), &settings, 255),
            Animation::SolidCycle(_)
        ));
    }
}
