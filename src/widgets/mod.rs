//! The widget catalog: switches, checkboxes, buttons, toggle groups, inputs,
//! sliders, counters, progress/loading indicators, typography and layout
//! helpers.

pub mod button;
pub mod checkbox;
pub mod counters;
pub mod inputs;
pub mod misc;
pub mod progress;
pub mod slider;
pub mod switch;
pub mod toggle;
pub mod typography;
