//! # slider_core
//!
//! UI-agnostic value model for range sliders.
//!
//! This crate provides the numeric core that keeps a slider's displayed
//! position and its stored value consistent:
//! - [`resolve`]: layered configuration (defaults, attributes, overrides)
//! - [`normalize`]: clamping, step quantization and precision rounding
//! - [`pixels_per_unit`] / [`value_from_offset`]: pointer coordinate mapping
//! - [`ValueController`]: keyboard stepping and pointer drag on top of the above
//!
//! ## Design Principles
//!
//! Like the input layer it sits next to, this crate knows nothing about the
//! DOM, layout or painting. Hosts hand it attribute lookups through
//! [`AttributeSource`] and pixel measurements as plain `f64`s.

mod config;
mod controller;
mod coords;
mod drag;
mod error;
mod normalize;
mod precision;
mod state;
mod step;

pub use config::{
    AttributeSource, Orientation, Resolved, SliderConfig, SliderDefaults, SliderOptions, resolve,
};
pub use controller::ValueController;
pub use coords::{offset_from_value, pixels_per_unit, value_from_offset};
pub use drag::{DragState, PointerId};
pub use error::ConfigError;
pub use normalize::normalize;
pub use precision::{
    MAX_PRECISION, MAX_VALUE_PRECISION, StepPrecision, decimal_digits, derive_precision,
    format_value, round_to,
};
pub use state::SliderState;
pub use step::{first, last, next, prev};
