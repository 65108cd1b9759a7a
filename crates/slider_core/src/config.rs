//! Slider configuration and its resolution from layered option sources.
//!
//! Every option is looked up in three places, highest priority first:
//! caller-supplied [`SliderOptions`], declarative attributes on the host
//! element (any [`AttributeSource`]), and the per-instance [`SliderDefaults`].

use crate::error::ConfigError;
use crate::normalize::normalize;
use crate::precision::{MAX_VALUE_PRECISION, decimal_digits, derive_precision};
use crate::state::SliderState;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Axis along which the thumb travels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    /// CSS property that carries the progress length along this axis.
    pub fn dimension(self) -> &'static str {
        match self {
            Orientation::Horizontal => "width",
            Orientation::Vertical => "height",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("horizontal") {
            Ok(Orientation::Horizontal)
        } else if t.eq_ignore_ascii_case("vertical") {
            Ok(Orientation::Vertical)
        } else {
            Err(ConfigError::UnknownOrientation(s.to_string()))
        }
    }
}

/// Caller-supplied overrides. `None` fields fall through to attributes.
///
/// Deserializes from the same keys a declarative host uses, e.g.
/// `{"min": 0, "max": 1, "step": 0.05, "orientation": "vertical"}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub value: Option<f64>,
    pub orientation: Option<Orientation>,
    pub thumbs: Option<u32>,
}

/// Built-in defaults, owned per slider instance.
///
/// `step` and `value` are derived from the resolved range when left unset:
/// the step becomes `range / steps_per_range` and the value becomes `min`.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderDefaults {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
    pub value: Option<f64>,
    pub orientation: Orientation,
    pub thumbs: u32,
    pub steps_per_range: f64,
}

impl Default for SliderDefaults {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: None,
            value: None,
            orientation: Orientation::Horizontal,
            thumbs: 1,
            steps_per_range: 100.0,
        }
    }
}

/// Read-only view over declarative attributes of a host element.
///
/// Names are matched ASCII case-insensitively, like HTML attribute names.
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<&str>;
}

/// Immutable numeric configuration of one slider.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    min: f64,
    max: f64,
    step: f64,
    precision: u32,
    value_precision: u32,
    orientation: Orientation,
    thumbs: u32,
}

impl SliderConfig {
    /// Horizontal single-thumb config; precision is derived from `step`.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        Self::build(min, max, step, Orientation::Horizontal, 1)
    }

    fn build(
        min: f64,
        max: f64,
        step: f64,
        orientation: Orientation,
        thumbs: u32,
    ) -> Result<Self, ConfigError> {
        check_finite("min", min)?;
        check_finite("max", max)?;
        if min >= max {
            return Err(ConfigError::EmptyRange { min, max });
        }
        if step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(step));
        }
        let sp = derive_precision(step)?;
        if thumbs == 0 {
            return Err(ConfigError::InvalidThumbs(thumbs.to_string()));
        }

        // Grid points are `min + k * step`, so they carry min's digits too.
        let value_precision = sp.precision.max(decimal_digits(min)).min(MAX_VALUE_PRECISION);

        Ok(Self {
            min,
            max,
            step: sp.step,
            precision: sp.precision,
            value_precision,
            orientation,
            thumbs,
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Fraction digits of `step`.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Fraction digits a normalized value may carry: the step's precision,
    /// widened to cover the digits of `min`.
    pub fn value_precision(&self) -> u32 {
        self.value_precision
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn thumbs(&self) -> u32 {
        self.thumbs
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Slack used when comparing values that went through float arithmetic.
    pub(crate) fn tolerance(&self) -> f64 {
        self.step * 1e-9
    }

    /// Shorthand for [`normalize`](crate::normalize) with this config.
    pub fn normalize(&self, raw: f64) -> f64 {
        normalize(raw, self)
    }
}

/// Output of [`resolve`]: the immutable config and the normalized initial state.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    pub config: SliderConfig,
    pub state: SliderState,
}

/// Resolve a slider configuration from defaults, attributes and overrides.
///
/// Blank or value-less attributes count as absent. The initial value goes
/// through the normalizer, so an off-step `value` attribute is snapped.
pub fn resolve<A>(
    defaults: &SliderDefaults,
    attributes: &A,
    overrides: &SliderOptions,
) -> Result<Resolved, ConfigError>
where
    A: AttributeSource + ?Sized,
{
    let min = pick_number("min", overrides.min, attributes)?.unwrap_or(defaults.min);
    let max = pick_number("max", overrides.max, attributes)?.unwrap_or(defaults.max);

    let orientation = match overrides.orientation {
        Some(o) => o,
        None => match attr_value(attributes, "orientation") {
            Some(raw) => raw.parse()?,
            None => defaults.orientation,
        },
    };

    let thumbs = match overrides.thumbs {
        Some(n) => n,
        None => match attr_value(attributes, "thumbs") {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidThumbs(raw.to_string()))?,
            None => defaults.thumbs,
        },
    };

    let step = match pick_number("step", overrides.step, attributes)? {
        Some(step) => step,
        None => defaults
            .step
            .unwrap_or((max - min) / defaults.steps_per_range),
    };

    let config = SliderConfig::build(min, max, step, orientation, thumbs)?;

    let raw_value = pick_number("value", overrides.value, attributes)?
        .or(defaults.value)
        .unwrap_or(config.min);
    let state = SliderState::new(config.normalize(raw_value));

    Ok(Resolved { config, state })
}

fn attr_value<'a, A>(attributes: &'a A, name: &str) -> Option<&'a str>
where
    A: AttributeSource + ?Sized,
{
    attributes
        .attribute(name)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn pick_number<A>(
    option: &'static str,
    explicit: Option<f64>,
    attributes: &A,
) -> Result<Option<f64>, ConfigError>
where
    A: AttributeSource + ?Sized,
{
    if explicit.is_some() {
        return Ok(explicit);
    }
    let Some(raw) = attr_value(attributes, option) else {
        return Ok(None);
    };
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| ConfigError::NotNumeric {
            option,
            raw: raw.to_string(),
        })
}

fn check_finite(option: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { option, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl AttributeSource for [(String, Option<String>)] {
        fn attribute(&self, name: &str) -> Option<&str> {
            self.iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .and_then(|(_, v)| v.as_deref())
        }
    }

    const NO_ATTRS: &[(String, Option<String>)] = &[];

    fn attrs(pairs: &[(&str, &str)]) -> Vec<(String, Option<String>)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect()
    }

    #[test]
    fn defaults_apply_without_attributes_or_overrides() {
        let r = resolve(&SliderDefaults::default(), NO_ATTRS, &SliderOptions::default())
            .unwrap();
        assert_eq!(r.config.min(), 0.0);
        assert_eq!(r.config.max(), 100.0);
        assert_eq!(r.config.step(), 1.0);
        assert_eq!(r.config.precision(), 0);
        assert_eq!(r.config.orientation(), Orientation::Horizontal);
        assert_eq!(r.config.thumbs(), 1);
        assert_eq!(r.state.value(), 0.0);
    }

    #[test]
    fn default_step_is_one_hundredth_of_range() {
        let a = attrs(&[("min", "0"), ("max", "5")]);
        let r = resolve(&SliderDefaults::default(), a.as_slice(), &SliderOptions::default())
            .unwrap();
        assert_eq!(r.config.step(), 0.05);
        assert_eq!(r.config.precision(), 2);
    }

    #[test]
    fn attributes_override_defaults_and_are_coerced() {
        let a = attrs(&[
            ("min", " -10 "),
            ("max", "10"),
            ("step", "0.5"),
            ("value", "3.3"),
            ("orientation", "Vertical"),
            ("thumbs", "2"),
        ]);
        let r = resolve(&SliderDefaults::default(), a.as_slice(), &SliderOptions::default())
            .unwrap();
        assert_eq!(r.config.min(), -10.0);
        assert_eq!(r.config.max(), 10.0);
        assert_eq!(r.config.step(), 0.5);
        assert_eq!(r.config.precision(), 1);
        assert_eq!(r.config.orientation(), Orientation::Vertical);
        assert_eq!(r.config.thumbs(), 2);
        // 3.3 is snapped to the step grid.
        assert_eq!(r.state.value(), 3.5);
    }

    #[test]
    fn initial_value_keeps_fractional_min() {
        let a = attrs(&[("min", "0.05"), ("max", "1"), ("step", "0.1")]);
        let r = resolve(&SliderDefaults::default(), a.as_slice(), &SliderOptions::default())
            .unwrap();
        assert_eq!(r.config.precision(), 1);
        assert_eq!(r.config.value_precision(), 2);
        assert_eq!(r.state.value(), 0.05);
    }

    #[test]
    fn overrides_beat_attributes() {
        let a = attrs(&[("min", "5"), ("max", "50"), ("orientation", "vertical")]);
        let opts = SliderOptions {
            min: Some(0.0),
            orientation: Some(Orientation::Horizontal),
            ..SliderOptions::default()
        };
        let r = resolve(&SliderDefaults::default(), a.as_slice(), &opts).unwrap();
        // An override equal to the built-in default still wins over the attribute.
        assert_eq!(r.config.min(), 0.0);
        assert_eq!(r.config.max(), 50.0);
        assert_eq!(r.config.orientation(), Orientation::Horizontal);
    }

    #[test]
    fn blank_and_valueless_attributes_are_absent() {
        let a = vec![
            ("min".to_string(), Some("   ".to_string())),
            ("max".to_string(), None),
        ];
        let r = resolve(&SliderDefaults::default(), a.as_slice(), &SliderOptions::default())
            .unwrap();
        assert_eq!(r.config.min(), 0.0);
        assert_eq!(r.config.max(), 100.0);
    }

    #[test]
    fn attribute_names_match_case_insensitively() {
        let a = attrs(&[("MAX", "20")]);
        let r = resolve(&SliderDefaults::default(), a.as_slice(), &SliderOptions::default())
            .unwrap();
        assert_eq!(r.config.max(), 20.0);
    }

    #[test]
    fn defaults_are_per_instance() {
        let custom = SliderDefaults {
            max: 1.0,
            value: Some(0.5),
            ..SliderDefaults::default()
        };
        let r = resolve(&custom, NO_ATTRS, &SliderOptions::default()).unwrap();
        assert_eq!(r.config.step(), 0.01);
        assert_eq!(r.state.value(), 0.5);

        // The stock defaults are untouched by the custom table above.
        let stock = resolve(&SliderDefaults::default(), NO_ATTRS, &SliderOptions::default())
            .unwrap();
        assert_eq!(stock.config.max(), 100.0);
    }

    #[test]
    fn non_numeric_attribute_fails_fast() {
        let a = attrs(&[("max", "lots")]);
        let err = resolve(&SliderDefaults::default(), a.as_slice(), &SliderOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotNumeric {
                option: "max",
                raw: "lots".to_string()
            }
        );
    }

    #[test]
    fn nan_step_is_a_type_error() {
        let a = attrs(&[("step", "NaN")]);
        let err = resolve(&SliderDefaults::default(), a.as_slice(), &SliderOptions::default())
            .unwrap_err();
        assert_eq!(err, ConfigError::NonNumericStep);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let opts = SliderOptions {
            min: Some(10.0),
            max: Some(10.0),
            ..SliderOptions::default()
        };
        let err = resolve(&SliderDefaults::default(), NO_ATTRS, &opts).unwrap_err();
        assert_eq!(err, ConfigError::EmptyRange { min: 10.0, max: 10.0 });
    }

    #[test]
    fn negative_step_is_rejected() {
        let opts = SliderOptions {
            step: Some(-1.0),
            ..SliderOptions::default()
        };
        let err = resolve(&SliderDefaults::default(), NO_ATTRS, &opts).unwrap_err();
        assert_eq!(err, ConfigError::NonPositiveStep(-1.0));
    }

    #[test]
    fn bad_orientation_and_thumbs_are_rejected() {
        let a = attrs(&[("orientation", "diagonal")]);
        assert_eq!(
            resolve(&SliderDefaults::default(), a.as_slice(), &SliderOptions::default()),
            Err(ConfigError::UnknownOrientation("diagonal".to_string()))
        );

        let a = attrs(&[("thumbs", "0")]);
        assert_eq!(
            resolve(&SliderDefaults::default(), a.as_slice(), &SliderOptions::default()),
            Err(ConfigError::InvalidThumbs("0".to_string()))
        );
    }

    #[test]
    fn options_deserialize_from_json() {
        let opts: SliderOptions =
            serde_json::from_str(r#"{"min": 1, "step": 0.25, "orientation": "vertical"}"#)
                .unwrap();
        assert_eq!(opts.min, Some(1.0));
        assert_eq!(opts.step, Some(0.25));
        assert_eq!(opts.orientation, Some(Orientation::Vertical));
        assert_eq!(opts.max, None);

        let unknown = serde_json::from_str::<SliderOptions>(r#"{"colour": "red"}"#);
        assert!(unknown.is_err());
    }
}
