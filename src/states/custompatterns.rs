use crate::effects::{AnimationKind, AnimationSettings, AnimationSlot};
use crate::palettes;
use crate::states::animated::{AnimatedDisplay, ModeSetting};

pub const NAME: &str = "CustomPattern";

pub static ANIMATIONS: [AnimationSlot; 4] = [
    AnimationSlot {
        kind: AnimationKind::DragonHead(&palettes::CIRCULAR_DRAGON_HEAD),
        tick_rate_ms: 20,
    },
    AnimationSlot {
        kind: AnimationKind::Circular(&palettes::CIRCULAR_FULL),
        tick_rate_ms: 20,
    },
    AnimationSlot {
        kind: AnimationKind::Starlight,
        tick_rate_ms: 20,
    },
    AnimationSlot {
        kind: AnimationKind::RandomFlag,
        tick_rate_ms: 200,
    },
];

pub fn custom_patterns_display(settings: AnimationSettings) -> AnimatedDisplay {
    AnimatedDisplay::new(NAME, &ANIMATIONS, ModeSetting::CstPatternsIdx, settings)
}
