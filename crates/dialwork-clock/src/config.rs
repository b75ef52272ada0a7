//! Construction-time configuration.
//!
//! A [`ClockConfig`] can be built in code, from host attribute pairs, or from
//! the `[clock]` table of a TOML theme. Attribute names are camelCase and are
//! the same in every form:
//!
//! | attribute                                           | value                          |
//! |-----------------------------------------------------|--------------------------------|
//! | `secondHandColor`, `minuteHandColor`, `hourHandColor` | color                        |
//! | `dialColor`, `tickColor`, `centerColor`             | color                          |
//! | `secondHandLength`, `minuteHandLength`, `hourHandLength` | length                    |
//! | `dialStrokeWidth`, `tickStrokeWidth`, `handStrokeWidth` | number                     |
//! | `tickMarkLength`, `centerDotRadius`                 | number                         |
//! | `redrawMode`                                        | `both`, `immediate`, `periodic` |
//! | `redrawIntervalMs`                                  | number                         |
//!
//! Lengths: `unset` keeps the default; a number in `(0, 1]` or `NN%` is a
//! fraction of the dial radius; a number above 1 or `NNpx` is absolute.
//! In TOML an integer length is always absolute (`hourHandLength = 1` is one
//! pixel); write a float (`1.0`) or `"100%"` for the full radius.
//!
//! `redrawIntervalMs` must be at least one microsecond.

use std::collections::BTreeMap;
use std::time::Duration;

use dialwork_engine::paint::Color;
use serde::Deserialize;

use crate::cadence::{RedrawMode, RedrawPolicy};
use crate::error::ConfigError;
use crate::geometry::{
    HandKind, HandLength, HandLengths, DEFAULT_CENTER_DOT_RADIUS, DEFAULT_TICK_MARK_LENGTH,
};
use crate::style::StyleConfig;

/// Everything a `ClockRenderer` reads at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    pub style: StyleConfig,
    pub hand_lengths: HandLengths,
    pub tick_mark_length: f32,
    pub center_dot_radius: f32,
    pub redraw: RedrawPolicy,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            style: StyleConfig::default(),
            hand_lengths: HandLengths::default(),
            tick_mark_length: DEFAULT_TICK_MARK_LENGTH,
            center_dot_radius: DEFAULT_CENTER_DOT_RADIUS,
            redraw: RedrawPolicy::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ThemeFile {
    #[serde(default)]
    clock: BTreeMap<String, toml::Value>,
}

impl ClockConfig {
    pub fn with_hand_color(mut self, kind: HandKind, color: Color) -> Self {
        self.style.set_hand_color(kind, color);
        self
    }

    pub fn with_hand_length(mut self, kind: HandKind, length: HandLength) -> Self {
        self.hand_lengths.set(kind, length);
        self
    }

    pub fn with_redraw(mut self, policy: RedrawPolicy) -> Self {
        self.redraw = policy;
        self
    }

    /// Builds a config from `(name, value)` attribute pairs over the defaults.
    pub fn from_attributes<'a, I>(attrs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (name, value) in attrs {
            config.set_attribute(name, value)?;
        }
        Ok(config)
    }

    /// Builds a config from the `[clock]` table of a TOML theme.
    ///
    /// A theme without a `[clock]` table yields the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let theme: ThemeFile = toml::from_str(source)?;

        let mut config = Self::default();
        for (name, value) in &theme.clock {
            let text = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) if name.ends_with("HandLength") => format!("{i}px"),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                other => {
                    return Err(ConfigError::Unsupported {
                        attribute: name.clone(),
                        kind: other.type_str(),
                    });
                }
            };
            config.set_attribute(name, &text)?;
        }
        Ok(config)
    }

    /// Applies one attribute. Unknown names are ignored.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        match name {
            "secondHandColor" => self.style.second_color = parse_color(name, value)?,
            "minuteHandColor" => self.style.minute_color = parse_color(name, value)?,
            "hourHandColor" => self.style.hour_color = parse_color(name, value)?,
            "dialColor" => self.style.dial_color = parse_color(name, value)?,
            "tickColor" => self.style.tick_color = parse_color(name, value)?,
            "centerColor" => self.style.center_color = parse_color(name, value)?,

            "secondHandLength" => self.hand_lengths.second = parse_length(name, value)?,
            "minuteHandLength" => self.hand_lengths.minute = parse_length(name, value)?,
            "hourHandLength" => self.hand_lengths.hour = parse_length(name, value)?,

            "dialStrokeWidth" => self.style.dial_stroke_width = parse_number(name, value)?,
            "tickStrokeWidth" => self.style.tick_stroke_width = parse_number(name, value)?,
            "handStrokeWidth" => self.style.hand_stroke_width = parse_number(name, value)?,
            "tickMarkLength" => self.tick_mark_length = parse_number(name, value)?,
            "centerDotRadius" => self.center_dot_radius = parse_number(name, value)?,

            "redrawMode" => {
                self.redraw.mode = RedrawMode::parse(value).ok_or_else(|| ConfigError::RedrawMode {
                    attribute: name.to_string(),
                    value: value.to_string(),
                })?;
            }
            "redrawIntervalMs" => {
                let ms = parse_number(name, value)?;
                let micros = (ms * 1000.0).round() as u64;
                if micros == 0 {
                    return Err(ConfigError::Number { attribute: name.to_string(), value: value.to_string() });
                }
                self.redraw.interval = Duration::from_micros(micros);
            }

            _ => log::debug!("ignoring unknown clock attribute `{name}`"),
        }
        Ok(())
    }
}

fn parse_color(name: &str, value: &str) -> Result<Color, ConfigError> {
    Color::parse(value).map_err(|source| ConfigError::Color { attribute: name.to_string(), source })
}

fn parse_number(name: &str, value: &str) -> Result<f32, ConfigError> {
    match value.trim().parse::<f32>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ConfigError::Number { attribute: name.to_string(), value: value.to_string() }),
    }
}

fn parse_length(name: &str, value: &str) -> Result<HandLength, ConfigError> {
    let v = value.trim();
    if v.eq_ignore_ascii_case("unset") || v.eq_ignore_ascii_case("auto") {
        return Ok(HandLength::Unset);
    }

    let invalid = || ConfigError::Length { attribute: name.to_string(), value: value.to_string() };
    let positive = |s: &str| s.trim().parse::<f32>().ok().filter(|n| n.is_finite() && *n > 0.0);

    if let Some(pct) = v.strip_suffix('%') {
        return positive(pct).map(|p| HandLength::Fraction(p / 100.0)).ok_or_else(invalid);
    }
    if let Some(px) = v.strip_suffix("px") {
        return positive(px).map(HandLength::Absolute).ok_or_else(invalid);
    }

    let n = positive(v).ok_or_else(invalid)?;
    Ok(if n <= 1.0 { HandLength::Fraction(n) } else { HandLength::Absolute(n) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_attributes() {
        let config = ClockConfig::from_attributes(Vec::<(&str, &str)>::new()).unwrap();
        assert_eq!(config, ClockConfig::default());
        assert_eq!(config.style.second_color, Color::RED);
        assert_eq!(config.style.minute_color, Color::BLUE);
        assert_eq!(config.style.hour_color, Color::GREEN);
        assert_eq!(config.hand_lengths, HandLengths::default());
    }

    #[test]
    fn hour_color_override_is_used_verbatim() {
        let config = ClockConfig::from_attributes([("hourHandColor", "#123456")]).unwrap();
        assert_eq!(config.style.hour_color, Color::from_rgba8(0x12, 0x34, 0x56, 0xff));
        assert_eq!(config.style.minute_color, Color::BLUE);
    }

    #[test]
    fn length_forms() {
        let attrs = [
            ("secondHandLength", "0.9"),
            ("minuteHandLength", "60%"),
            ("hourHandLength", "120px"),
        ];
        let config = ClockConfig::from_attributes(attrs).unwrap();
        assert_eq!(config.hand_lengths.second, HandLength::Fraction(0.9));
        assert_eq!(config.hand_lengths.minute, HandLength::Fraction(0.6));
        assert_eq!(config.hand_lengths.hour, HandLength::Absolute(120.0));

        let config = ClockConfig::from_attributes([("hourHandLength", "80"), ("secondHandLength", "unset")]).unwrap();
        assert_eq!(config.hand_lengths.hour, HandLength::Absolute(80.0));
        assert_eq!(config.hand_lengths.second, HandLength::Unset);
    }

    #[test]
    fn rejects_non_positive_lengths() {
        for bad in ["0", "-3", "0%", "px", "long"] {
            let err = ClockConfig::from_attributes([("hourHandLength", bad)]).unwrap_err();
            assert!(matches!(err, ConfigError::Length { .. }), "{bad} gave {err:?}");
        }
    }

    #[test]
    fn rejects_bad_colors_and_numbers() {
        let err = ClockConfig::from_attributes([("secondHandColor", "#zzz")]).unwrap_err();
        assert!(matches!(err, ConfigError::Color { .. }));

        let err = ClockConfig::from_attributes([("handStrokeWidth", "-1")]).unwrap_err();
        assert!(matches!(err, ConfigError::Number { .. }));
    }

    #[test]
    fn unknown_attributes_are_ignored() {
        let config = ClockConfig::from_attributes([("layout_width", "match_parent")]).unwrap();
        assert_eq!(config, ClockConfig::default());
    }

    #[test]
    fn redraw_attributes() {
        let config =
            ClockConfig::from_attributes([("redrawMode", "periodic"), ("redrawIntervalMs", "250")]).unwrap();
        assert_eq!(config.redraw, RedrawPolicy::periodic(Duration::from_millis(250)));

        let err = ClockConfig::from_attributes([("redrawMode", "never")]).unwrap_err();
        assert!(matches!(err, ConfigError::RedrawMode { .. }));
    }

    #[test]
    fn zero_redraw_interval_is_rejected() {
        for bad in ["0", "0.0", "0.0004"] {
            let attrs = [("redrawMode", "periodic"), ("redrawIntervalMs", bad)];
            let err = ClockConfig::from_attributes(attrs).unwrap_err();
            assert!(matches!(err, ConfigError::Number { .. }), "{bad} gave {err:?}");
        }

        let config = ClockConfig::from_attributes([("redrawIntervalMs", "0.001")]).unwrap();
        assert_eq!(config.redraw.interval, Duration::from_micros(1));
    }

    #[test]
    fn toml_theme() {
        let source = r##"
            [clock]
            hourHandColor = "#00ff00"
            secondHandColor = "black"
            hourHandLength = 0.5
            minuteHandLength = 150
            handStrokeWidth = 8
            redrawMode = "immediate"
        "##;
        let config = ClockConfig::from_toml_str(source).unwrap();
        assert_eq!(config.style.hour_color, Color::GREEN);
        assert_eq!(config.style.second_color, Color::BLACK);
        assert_eq!(config.hand_lengths.hour, HandLength::Fraction(0.5));
        assert_eq!(config.hand_lengths.minute, HandLength::Absolute(150.0));
        assert_eq!(config.style.hand_stroke_width, 8.0);
        assert_eq!(config.redraw.mode, RedrawMode::Immediate);
    }

    #[test]
    fn toml_integer_lengths_are_absolute() {
        let source = "[clock]\nhourHandLength = 1\nminuteHandLength = 1.0\nsecondHandLength = \"1\"";
        let config = ClockConfig::from_toml_str(source).unwrap();
        assert_eq!(config.hand_lengths.hour, HandLength::Absolute(1.0));
        assert_eq!(config.hand_lengths.minute, HandLength::Fraction(1.0));
        assert_eq!(config.hand_lengths.second, HandLength::Fraction(1.0));
    }

    #[test]
    fn toml_without_clock_table_is_default() {
        assert_eq!(ClockConfig::from_toml_str("").unwrap(), ClockConfig::default());
    }

    #[test]
    fn toml_rejects_tables_and_syntax_errors() {
        let err = ClockConfig::from_toml_str("[clock]\nhourHandColor = [1, 2]").unwrap_err();
        assert!(matches!(err, ConfigError::Unsupported { kind: "array", .. }));

        let err = ClockConfig::from_toml_str("[clock\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn builder_setters() {
        let config = ClockConfig::default()
            .with_hand_color(HandKind::Hour, Color::WHITE)
            .with_hand_length(HandKind::Second, HandLength::Absolute(10.0));
        assert_eq!(config.style.hour_color, Color::WHITE);
        assert_eq!(config.hand_lengths.second, HandLength::Absolute(10.0));
    }
}
