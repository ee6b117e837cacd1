use rand::RngCore;

use crate::effects::{Animation, AnimationSettings, AnimationSlot};
use crate::led::LedFrame;
use crate::states::{DisplayState, Globals, Transition};

/// Which entry of `Globals` selects the animation of a display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSetting {
    /// Counts up freely and is reduced modulo the mode count on use
    CustomIdx,
    /// Always kept within the mode count
    CstPatternsIdx,
}

impl ModeSetting {
    fn get(self, globals: &Globals) -> u8 {
        match self {
            ModeSetting::CustomIdx => globals.custom_idx,
            ModeSetting::CstPatternsIdx => globals.cst_patterns_idx,
        }
    }

    fn advance(self, globals: &mut Globals, modes: usize) {
        match self {
            ModeSetting::CustomIdx => globals.custom_idx = globals.custom_idx.wrapping_add(1),
            ModeSetting::CstPatternsIdx => {
                globals.cst_patterns_idx = ((globals.cst_patterns_idx as usize + 1) % modes) as u8
            }
        }
    }
}

/// A display state that plays one animation out of a fixed mode table and
/// moves to the next one whenever the fingerprint sensor is released.
pub struct AnimatedDisplay {
    name: &'static str,
    slots: &'static [AnimationSlot],
    mode: ModeSetting,
    settings: AnimationSettings,
    tick: u32,
    /// The running animation and the mode it was built for
    animation: Option<(usize, Animation)>,
}

impl AnimatedDisplay {
    /// `slots` is a fixed mode table; a table needs at least one mode.
    pub fn new<const N: usize>(
        name: &'static str,
        slots: &'static [AnimationSlot; N],
        mode: ModeSetting,
        settings: AnimationSettings,
    ) -> AnimatedDisplay {
        AnimatedDisplay {
            name,
            slots,
            mode,
            settings,
            tick: 0,
            animation: None,
        }
    }

    pub fn mode_index(&self, globals: &Globals) -> usize {
        self.mode.get(globals) as usize % self.slots.len()
    }

    #[cfg(test)]
    pub fn tick(&self) -> u32 {
        self.tick
    }

    #[cfg(test)]
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref().map(|(_, animation)| animation)
    }

    fn activate(&mut self, globals: &Globals) {
        let index = self.mode_index(globals);
        let mut animation = Animation::new(&self.slots[index], &self.settings, globals.brightness());
        animation.entry();
        log::debug!("({}) Playing animation mode {}", self.name, index);
        self.animation = Some((index, animation));
    }
}

impl DisplayState for AnimatedDisplay {
    fn name(&self) -> &'static str {
        self.name
    }

    fn should_be_remembered(&self) -> bool {
        true
    }

    fn tick_rate_ms(&self, globals: &Globals) -> u32 {
        self.slots[self.mode_index(globals)].tick_rate_ms
    }

    fn entry(&mut self, globals: &Globals) {
        self.tick = 0;
        self.activate(globals);
    }

    fn run(&mut self, globals: &Globals, frame: &mut LedFrame, rng: &mut dyn RngCore) {
        let index = self.mode_index(globals);
        if !matches!(self.animation, Some((active, _)) if active == index) {
            self.activate(globals);
        }

        if let Some((_, animation)) = self.animation.as_mut() {
            animation.step(self.tick, frame, rng);
        }
        self.tick = self.tick.wrapping_add(1);
    }

    fn touch_event_fingerprint_shortpress(
        &mut self,
        globals: &mut Globals,
        _frame: &mut LedFrame,
    ) -> Option<Transition> {
        if globals.is_locked() {
            return None;
        }

        Some(Transition::MenuMain)
    }

    fn touch_event_fingerprint_release(
        &mut self,
        globals: &mut Globals,
        frame: &mut LedFrame,
    ) -> Option<Transition> {
        if globals.is_locked() {
            return None;
        }

        self.mode.advance(globals, self.slots.len());
        globals.mark_dirty();
        self.tick = 0;
        frame.clear();
        self.activate(globals);

        log::info!(
            "({}) Changed animation mode to: {}",
            self.name,
            self.mode_index(globals)
        );

        None
    }
}
