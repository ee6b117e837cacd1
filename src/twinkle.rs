//! Per-pixel twinkle state machine behind the starlight effect.
//!
//! Every pixel owns a `PixelRecord` of two counters. The phase of a pixel
//! (resting, ramping up, holding at peak, fading) is derived from those
//! counters on demand:
//!
//! * `step == 0`                    resting, shows the rest color
//! * `0 < step < max_steps`         ramping towards the peak color
//! * `step == max_steps`            holding at peak for `hold_frames` ticks
//! * `step > max_steps`             fading back to rest
//!
//! A resting pixel starts a cycle when its random draw lands in the trigger
//! window. Once triggered a cycle takes exactly
//! `max_steps + hold_frames + max_steps` ticks, the trigger tick being the
//! first ramp tick. The tick that would bring `step` to `2 * max_steps`
//! resets the pixel to rest.

use std::fmt;

use rand::Rng;

use crate::led::{lerp, Color};

/// Random draws are taken from `1..=DRAW_MAX`.
pub const DRAW_MAX: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwinkleConfigError {
    ZeroMaxSteps,
    ZeroHoldFrames,
    TriggerOutOfRange(u8),
}

impl fmt::Display for TwinkleConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwinkleConfigError::ZeroMaxSteps => write!(f, "max_steps must be at least 1"),
            TwinkleConfigError::ZeroHoldFrames => write!(f, "hold_frames must be at least 1"),
            TwinkleConfigError::TriggerOutOfRange(percent) => write!(
                f,
                "trigger_percent must be within 1..={}, got {}",
                DRAW_MAX, percent
            ),
        }
    }
}

impl std::error::Error for TwinkleConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwinkleConfig {
    max_steps: u32,
    hold_frames: u32,
    trigger_percent: u8,
}

impl TwinkleConfig {
    pub fn new(
        max_steps: u16,
        hold_frames: u16,
        trigger_percent: u8,
    ) -> Result<Self, TwinkleConfigError> {
        if max_steps == 0 {
            return Err(TwinkleConfigError::ZeroMaxSteps);
        }
        if hold_frames == 0 {
            return Err(TwinkleConfigError::ZeroHoldFrames);
        }
        if trigger_percent == 0 || trigger_percent > DRAW_MAX {
            return Err(TwinkleConfigError::TriggerOutOfRange(trigger_percent));
        }

        Ok(TwinkleConfig {
            max_steps: max_steps.into(),
            hold_frames: hold_frames.into(),
            trigger_percent,
        })
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    pub fn hold_frames(&self) -> u32 {
        self.hold_frames
    }

    /// Whether a draw from `1..=DRAW_MAX` starts a new cycle. The top
    /// `trigger_percent` values of the range trigger.
    pub fn triggers(&self, draw: u8) -> bool {
        draw > DRAW_MAX - self.trigger_percent
    }

    /// Ticks from the trigger tick until the pixel is resting again.
    #[cfg(test)]
    pub fn cycle_len(&self) -> u32 {
        2 * self.max_steps + self.hold_frames
    }
}

impl Default for TwinkleConfig {
    fn default() -> Self {
        TwinkleConfig {
            max_steps: 75,
            hold_frames: 50,
            trigger_percent: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwinklePalette {
    pub rest: Color,
    pub peak: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Resting,
    RampingUp,
    Holding,
    Fading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRecord {
    pub step: u32,
    pub hold_count: u32,
}

impl PixelRecord {
    pub const REST: PixelRecord = PixelRecord {
        step: 0,
        hold_count: 0,
    };

    pub fn phase(&self, config: &TwinkleConfig) -> Phase {
        let max_steps = config.max_steps();
        if self.step == 0 {
            Phase::Resting
        } else if self.step < max_steps {
            Phase::RampingUp
        } else if self.step == max_steps {
            Phase::Holding
        } else {
            Phase::Fading
        }
    }

    pub fn color(&self, config: &TwinkleConfig, palette: &TwinklePalette) -> Color {
        let max_steps = config.max_steps() as f32;
        match self.phase(config) {
            Phase::Resting => palette.rest,
            Phase::RampingUp => lerp(palette.rest, palette.peak, self.step as f32 / max_steps),
            Phase::Holding => palette.peak,
            Phase::Fading => {
                let faded = (self.step - config.max_steps()) as f32 / max_steps;
                lerp(palette.rest, palette.peak, 1.0 - faded)
            }
        }
    }
}

/// Advance one pixel by one tick given its random draw for this tick.
pub fn twinkle_step(
    record: PixelRecord,
    draw: u8,
    config: &TwinkleConfig,
    palette: &TwinklePalette,
) -> (PixelRecord, Color) {
    let next = match record.phase(config) {
        Phase::Resting if config.triggers(draw) => PixelRecord {
            step: 1,
            hold_count: 0,
        },
        Phase::Resting => record,
        Phase::RampingUp => PixelRecord {
            step: record.step + 1,
            ..record
        },
        Phase::Holding if record.hold_count < config.hold_frames() => PixelRecord {
            hold_count: record.hold_count + 1,
            ..record
        },
        Phase::Holding | Phase::Fading => {
            let step = record.step + 1;
            if step >= 2 * config.max_steps() {
                PixelRecord::REST
            } else {
                PixelRecord { step, ..record }
            }
        }
    };

    (next, next.color(config, palette))
}

/// One transition record per LED, all sharing the same config and palette.
pub struct PixelTransitionTable {
    records: Vec<PixelRecord>,
    config: TwinkleConfig,
    palette: TwinklePalette,
}

impl PixelTransitionTable {
    pub fn new(pixel_count: usize, config: TwinkleConfig, palette: TwinklePalette) -> Self {
        PixelTransitionTable {
            records: vec![PixelRecord::REST; pixel_count],
            config,
            palette,
        }
    }

    pub fn reset(&mut self) {
        self.records.fill(PixelRecord::REST);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn record(&self, index: usize) -> PixelRecord {
        self.records[index]
    }

    #[cfg(test)]
    pub fn phase(&self, index: usize) -> Phase {
        self.records[index].phase(&self.config)
    }

    pub fn color_for(&self, index: usize) -> Color {
        self.records[index].color(&self.config, &self.palette)
    }

    pub fn advance(&mut self, index: usize, draw: u8) -> Color {
        let (next, color) = twinkle_step(self.records[index], draw, &self.config, &self.palette);
        self.records[index] = next;
        color
    }

    /// Advance every pixel once, in index order, with one draw each.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for index in 0..self.records.len() {
            let draw = rng.gen_range(1..=DRAW_MAX);
            self.advance(index, draw);
        }
    }

    #[cfg(test)]
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.records
            .iter()
            .map(move |record| record.color(&self.config, &self.palette))
    }
}
