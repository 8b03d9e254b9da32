//! flim-widgets crate root: re-exports and module wiring.
//!
//! Reusable egui/eframe GUI components standardizing the look-and-feel of
//! the FLIM instrument-control application family:
//! - `widgets`: switches, checkboxes, buttons, toggle groups, inputs,
//!   sliders, counters, progress/loading indicators, typography
//! - `plot`: the `FlimPlot` wrapper around `egui_plot` with lin/log
//!   presentation, decorations and an x-range region of interest
//! - `flim`: the numeric layer (tick math, phasor geometry, quantization)
//! - `theme` / `style` / `persistence`: visual themes, typed looks and
//!   their on-disk representation
//! - `dialogs` / `popups` / `snapshot`: file pickers, message boxes and
//!   background plot-image saving

mod error;

pub mod assets;
pub mod config;
pub mod convert;
pub mod datetime;
pub mod dialogs;
pub mod flim;
pub mod format;
pub mod persistence;
pub mod plot;
pub mod popups;
pub mod snapshot;
pub mod style;
pub mod theme;
pub mod validate;
pub mod widgets;

// Public re-exports for a compact external API
pub use config::{LabelPosition, Orientation, Toggleable};
pub use error::{Result, WidgetError};
pub use plot::{Axis, ColormapKind, FlimPlot, FlimPlotResponse, SemicircleOrientation, SeriesOptions};
pub use style::{AxisLook, GridLook, LineLook, PlotSize, ScatterLook, TextLook};
pub use theme::{alloc_channel_color, global_palette, install_icon_font, Theme};
pub use widgets::button::{ActionButton, CollapseButton, TimeTaggerToggle};
pub use widgets::checkbox::{FancyCheckbox, LabeledCheckbox, WrappedCheckbox};
pub use widgets::counters::{ChannelCps, CounterMode, CpsCounter, SbrLabel, TimeCounter};
pub use widgets::inputs::{NumericInput, OptionList, SelectInput, TextArea, TextInput};
pub use widgets::misc::{CheckCard, LayoutSeparator, WatermarkOverlay};
pub use widgets::progress::{LoadingIndicator, LoadingOverlay, ProgressBar};
pub use widgets::slider::{LabeledSlider, SliderWithInput};
pub use widgets::switch::{DualLabelSwitch, Switch, SwitchBox, SwitchResponse};
pub use widgets::toggle::{SelectButtonGroup, Tabs, ToggleButtonRow, ToggleColors};
pub use widgets::typography::{FlimTitle, GradientText};
