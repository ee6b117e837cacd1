//! Display states: what the badge shows while it is not in a menu, and how it
//! reacts to the touch sensors.

pub(crate) mod animated;
pub(crate) mod custompatterns;
pub(crate) mod diegoteki;

use rand::RngCore;

use crate::led::LedFrame;

/// State the host should switch to after a touch event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    MenuMain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEvent {
    FingerprintShortpress,
    FingerprintLongpress,
    FingerprintRelease,
    AllLongpress,
}

/// Settings shared between display states. Changes are flagged as dirty so
/// the host knows to persist them.
#[derive(Debug, Clone, PartialEq)]
pub struct Globals {
    /// Selected DiegoTeki animation, wraps around on use
    pub custom_idx: u8,
    /// Selected custom pattern
    pub cst_patterns_idx: u8,
    /// Global LED brightness as a fraction in `0.0..=1.0`
    pub led_brightness_percent: f32,
    locked: bool,
    dirty: bool,
}

impl Globals {
    pub fn new(custom_idx: u8, cst_patterns_idx: u8, led_brightness_percent: f32) -> Globals {
        Globals {
            custom_idx,
            cst_patterns_idx,
            led_brightness_percent: led_brightness_percent.clamp(0.0, 1.0),
            locked: false,
            dirty: false,
        }
    }

    pub fn brightness(&self) -> u8 {
        (self.led_brightness_percent.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn toggle_lock(&mut self) {
        self.locked = !self.locked;
        log::info!(
            "Touch controls {}",
            if self.locked { "locked" } else { "unlocked" }
        );
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl Default for Globals {
    fn default() -> Self {
        Globals::new(0, 0, 0.5)
    }
}

pub trait DisplayState {
    fn name(&self) -> &'static str;

    /// Whether the host should return to this state after a restart.
    fn should_be_remembered(&self) -> bool;

    fn tick_rate_ms(&self, globals: &Globals) -> u32;

    fn entry(&mut self, globals: &Globals);

    fn run(&mut self, globals: &Globals, frame: &mut LedFrame, rng: &mut dyn RngCore);

    fn touch_event_fingerprint_shortpress(
        &mut self,
        globals: &mut Globals,
        frame: &mut LedFrame,
    ) -> Option<Transition>;

    fn touch_event_fingerprint_longpress(
        &mut self,
        globals: &mut Globals,
        frame: &mut LedFrame,
    ) -> Option<Transition> {
        self.touch_event_fingerprint_shortpress(globals, frame)
    }

    fn touch_event_fingerprint_release(
        &mut self,
        globals: &mut Globals,
        frame: &mut LedFrame,
    ) -> Option<Transition>;

    fn touch_event_all_longpress(
        &mut self,
        globals: &mut Globals,
        _frame: &mut LedFrame,
    ) -> Option<Transition> {
        globals.toggle_lock();
        None
    }

    fn handle_touch(
        &mut self,
        event: TouchEvent,
        globals: &mut Globals,
        frame: &mut LedFrame,
    ) -> Option<Transition> {
        match event {
            TouchEvent::FingerprintShortpress => {
                self.touch_event_fingerprint_shortpress(globals, frame)
            }
            TouchEvent::FingerprintLongpress => {
                self.touch_event_fingerprint_longpress(globals, frame)
            }
            TouchEvent::FingerprintRelease => self.touch_event_fingerprint_release(globals, frame),
            TouchEvent::AllLongpress => self.touch_event_all_longpress(globals, frame),
        }
    }
}
