use crate::effects::{AnimationKind, AnimationSettings, AnimationSlot};
use crate::palettes;
use crate::states::animated::{AnimatedDisplay, ModeSetting};

pub const NAME: &str = "CustomDiegoTeki";

pub static ANIMATIONS: [AnimationSlot; 4] = [
    AnimationSlot {
        kind: AnimationKind::DragonHead(&palettes::DIEGOTEKI),
        tick_rate_ms: 20,
    },
    AnimationSlot {
        kind: AnimationKind::Circular(&palettes::DIEGOTEKI_CIRCULAR),
        tick_rate_ms: 20,
    },
    AnimationSlot {
        kind: AnimationKind::SolidCycle(&palettes::DIEGOTEKI_CIRCULAR),
        tick_rate_ms: 100,
    },
    AnimationSlot {
        kind: AnimationKind::SolidCycle(&palettes::DIEGOTEKI_CIRCULAR),
        tick_rate_ms: 20,
    },
];

pub fn diegoteki_display(settings: AnimationSettings) -> AnimatedDisplay {
    AnimatedDisplay::new(NAME, &ANIMATIONS, ModeSetting::CustomIdx, settings)
}
