use std::path::Path;

use anyhow::Context;
use config_file::FromConfigFile;
use serde::Deserialize;

use crate::effects::AnimationSettings;
use crate::led::Color;
use crate::palettes;
use crate::states::Globals;
use crate::twinkle::{TwinkleConfig, TwinkleConfigError, TwinklePalette};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StarlightOptions {
    pub max_steps: u16,
    pub hold_frames: u16,
    pub trigger_percent: u8,
    pub rest_color: [u8; 3],
    pub peak_color: [u8; 3],
}

impl Default for StarlightOptions {
    fn default() -> Self {
        let rest = palettes::STARLIGHT_BLUE;
        let peak = palettes::STARLIGHT_ORANGE;
        StarlightOptions {
            max_steps: 75,
            hold_frames: 50,
            trigger_percent: 2,
            rest_color: [rest.red, rest.green, rest.blue],
            peak_color: [peak.red, peak.green, peak.blue],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeOptions {
    /// Global LED brightness as a fraction in `0.0..=1.0`
    pub led_brightness_percent: f32,
    /// How often static parts of a pattern are redrawn
    pub switch_delay_ms: u32,
    /// Initially selected custom pattern
    pub cst_patterns_idx: u8,
    /// Initially selected DiegoTeki animation
    pub custom_idx: u8,
    pub starlight: StarlightOptions,
}

impl Default for BadgeOptions {
    fn default() -> Self {
        BadgeOptions {
            led_brightness_percent: 0.5,
            switch_delay_ms: 5000,
            cst_patterns_idx: 0,
            custom_idx: 0,
            starlight: StarlightOptions::default(),
        }
    }
}

impl BadgeOptions {
    /// Read options from `path`, or fall back to the defaults without one.
    pub fn load(path: Option<&Path>) -> anyhow::Result<BadgeOptions> {
        match path {
            Some(path) => {
                let options = BadgeOptions::from_config_file(path)
                    .with_context(|| format!("Cannot read config file {}", path.display()))?;
                log::info!("Loaded options from {}", path.display());
                Ok(options)
            }
            None => {
                log::info!("No config file given, using defaults");
                Ok(BadgeOptions::default())
            }
        }
    }

    pub fn twinkle_config(&self) -> Result<TwinkleConfig, TwinkleConfigError> {
        TwinkleConfig::new(
            self.starlight.max_steps,
            self.starlight.hold_frames,
            self.starlight.trigger_percent,
        )
    }

    pub fn twinkle_palette(&self) -> TwinklePalette {
        let [r, g, b] = self.starlight.rest_color;
        let rest = Color::new(r, g, b);
        let [r, g, b] = self.starlight.peak_color;
        let peak = Color::new(r, g, b);
        TwinklePalette { rest, peak }
    }

    pub fn animation_settings(&self) -> Result<AnimationSettings, TwinkleConfigError> {
        Ok(AnimationSettings {
            switch_delay_ms: self.switch_delay_ms,
            twinkle: self.twinkle_config()?,
            twinkle_palette: self.twinkle_palette(),
        })
    }

    pub fn globals(&self) -> Globals {
        Globals::new(self.custom_idx, self.cst_patterns_idx, self.led_brightness_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_are_valid() {
        let options = BadgeOptions::default();
        let settings = options.animation_settings().unwrap();
        assert_eq!(settings.twinkle, TwinkleConfig::default());
        assert_eq!(settings.twinkle_palette.rest, palettes::STARLIGHT_BLUE);
        assert_eq!(settings.twinkle_palette.peak, palettes::STARLIGHT_ORANGE);
        assert_eq!(options.globals(), Globals::default());
    }

    #[test]
    fn invalid_starlight_is_rejected() {
        let mut options = BadgeOptions::default();
        options.starlight.hold_frames = 0;
        assert_eq!(
            options.animation_settings(),
            Err(TwinkleConfigError::ZeroHoldFrames)
        );
    }

    #[test]
    fn loads_partial_toml() {
        let path = std::env::temp_dir().join(format!("badgelight-{}.toml", std::process::id()));
        fs::write(
            &path,
            "led_brightness_percent = 0.25\n\
             cst_patterns_idx = 2\n\
             \n\
             [starlight]\n\
             max_steps = 10\n\
             peak_color = [255, 255, 255]\n",
        )
        .unwrap();

        let options = BadgeOptions::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(options.led_brightness_percent, 0.25);
        assert_eq!(options.globals().brightness(), 64);
        assert_eq!(options.cst_patterns_idx, 2);
        assert_eq!(options.switch_delay_ms, 5000);
        assert_eq!(options.starlight.max_steps, 10);
        assert_eq!(options.starlight.hold_frames, 50);
        assert_eq!(options.twinkle_palette().peak, Color::new(255, 255, 255));
    }

    fn load_str(name: &str, contents: &str) -> anyhow::Result<BadgeOptions> {
        let path = std::env::temp_dir().join(format!(
            "badgelight-{}-{}.toml",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        let options = BadgeOptions::load(Some(&path));
        fs::remove_file(&path).unwrap();
        options
    }

    #[test]
    fn documented_brightness_key_is_read() {
        let options = load_str("brightness", "led_brightness_percent = 0.1\n").unwrap();
        assert_eq!(options.led_brightness_percent, 0.1);
        assert_eq!(options.globals().led_brightness_percent, 0.1);
        assert_eq!(options.globals().brightness(), 26);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(load_str("top-typo", "led_brightness = 0.1\n").is_err());
        assert!(load_str("starlight-typo", "[starlight]\nmax_step = 3\n").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("badgelight-does-not-exist.toml");
        assert!(BadgeOptions::load(Some(&path)).is_err());
    }
}
