//! Visual themes for the widget family.
//!
//! A [`Theme`] standardizes the egui visuals and the accent palette used for
//! channel-colored widgets (plots, CPS counters, checkboxes). Applying a
//! theme refreshes the global palette so channel color allocation stays
//! consistent across every widget in the host application.

use egui::{Color32, Context, FontDefinitions, Visuals};
use once_cell::sync::Lazy;
use std::sync::Mutex;

// Global accent palette used for channel color allocation. Updated whenever
// a theme is applied; cloned on read so callers may mutate freely.
static GLOBAL_PALETTE: Lazy<Mutex<Vec<Color32>>> =
    Lazy::new(|| Mutex::new(Theme::FlimDark.channel_colors()));

/// Get a copy of the current global channel color palette.
pub fn global_palette() -> Vec<Color32> {
    GLOBAL_PALETTE.lock().unwrap().clone()
}

/// Replace the global channel palette. Called automatically by
/// [`Theme::apply`]; exposed for host applications with their own palettes.
pub fn set_global_palette(new: Vec<Color32>) {
    let mut guard = GLOBAL_PALETTE.lock().unwrap();
    *guard = new;
}

/// Pick the color for channel `index`, cycling through the global palette.
pub fn alloc_channel_color(index: usize) -> Color32 {
    let palette = GLOBAL_PALETTE.lock().unwrap();
    if palette.is_empty() {
        Color32::WHITE
    } else {
        palette[index % palette.len()]
    }
}

/// User-defined theme.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomTheme {
    /// Visuals for the egui context; `None` falls back to dark.
    pub visuals: Option<Visuals>,
    /// Channel accent palette.
    pub palette: Vec<Color32>,
    /// Optional label for UI display.
    pub label: Option<String>,
}

/// Visual theme for the widget family.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Theme {
    /// Near-black instrument theme with the FLIM red accent.
    #[default]
    FlimDark,
    /// Plain egui dark.
    Dark,
    /// Plain egui light.
    Light,
    /// High-contrast: pure black background, white text.
    HighContrast,
    /// User-defined theme.
    Custom(CustomTheme),
}

impl Theme {
    /// All built-in themes (useful for combo-box UIs).
    pub fn all() -> &'static [Theme] {
        &[
            Theme::FlimDark,
            Theme::Dark,
            Theme::Light,
            Theme::HighContrast,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> String {
        match self {
            Theme::FlimDark => "FLIM Dark".to_string(),
            Theme::Dark => "Dark".to_string(),
            Theme::Light => "Light".to_string(),
            Theme::HighContrast => "High Contrast".to_string(),
            Theme::Custom(custom) => custom.label.clone().unwrap_or_else(|| "Custom".to_string()),
        }
    }

    /// Apply this theme's visuals to an egui context and refresh the global
    /// channel palette.
    pub fn apply(&self, ctx: &Context) {
        match self {
            Theme::FlimDark => {
                let mut v = Visuals::dark();
                let bg = Color32::from_rgb(10, 10, 10);
                let panel = Color32::from_rgb(28, 28, 28);
                let fg = Color32::from_rgb(248, 248, 248);
                v.panel_fill = bg;
                v.window_fill = panel;
                v.extreme_bg_color = bg;
                v.faint_bg_color = panel;
                v.override_text_color = Some(fg);
                v.widgets.noninteractive.bg_fill = panel;
                v.widgets.noninteractive.fg_stroke.color = fg;
                v.widgets.inactive.bg_fill = Color32::from_rgb(37, 37, 37);
                v.widgets.hovered.bg_fill = Color32::from_rgb(59, 59, 59);
                v.widgets.active.bg_fill = Color32::from_rgb(59, 59, 59);
                ctx.set_visuals(v);
            }
            Theme::Dark => ctx.set_visuals(Visuals::dark()),
            Theme::Light => ctx.set_visuals(Visuals::light()),
            Theme::HighContrast => {
                let mut v = Visuals::dark();
                v.panel_fill = Color32::BLACK;
                v.window_fill = Color32::from_rgb(10, 10, 10);
                v.extreme_bg_color = Color32::BLACK;
                v.faint_bg_color = Color32::from_rgb(20, 20, 20);
                v.override_text_color = Some(Color32::WHITE);
                v.widgets.noninteractive.bg_fill = Color32::from_rgb(20, 20, 20);
                v.widgets.noninteractive.fg_stroke.color = Color32::WHITE;
                ctx.set_visuals(v);
            }
            Theme::Custom(custom) => {
                if let Some(visuals) = &custom.visuals {
                    ctx.set_visuals(visuals.clone());
                } else {
                    ctx.set_visuals(Visuals::dark());
                }
            }
        }

        set_global_palette(self.channel_colors());
    }

    /// Default channel accent palette for this theme (8 colors).
    pub fn channel_colors(&self) -> Vec<Color32> {
        match self {
            Theme::FlimDark | Theme::HighContrast => vec![
                Color32::from_rgb(247, 40, 40),
                Color32::from_rgb(30, 144, 255),
                Color32::from_rgb(49, 201, 20),
                Color32::from_rgb(250, 189, 47),
                Color32::from_rgb(19, 182, 180),
                Color32::from_rgb(170, 0, 255),
                Color32::from_rgb(255, 127, 14),
                Color32::from_rgb(227, 119, 194),
            ],
            Theme::Dark => vec![
                Color32::from_rgb(31, 119, 180),
                Color32::from_rgb(255, 127, 14),
                Color32::from_rgb(44, 160, 44),
                Color32::from_rgb(214, 39, 40),
                Color32::from_rgb(148, 103, 189),
                Color32::from_rgb(140, 86, 75),
                Color32::from_rgb(227, 119, 194),
                Color32::from_rgb(127, 127, 127),
            ],
            Theme::Light => vec![
                Color32::from_rgb(228, 26, 28),
                Color32::from_rgb(55, 126, 184),
                Color32::from_rgb(77, 175, 74),
                Color32::from_rgb(152, 78, 163),
                Color32::from_rgb(255, 127, 0),
                Color32::from_rgb(166, 86, 40),
                Color32::from_rgb(247, 129, 191),
                Color32::from_rgb(153, 153, 153),
            ],
            Theme::Custom(custom) => custom.palette.clone(),
        }
    }

    /// Primary accent color (button fills, active toggles).
    pub fn accent(&self) -> Color32 {
        self.channel_colors()
            .first()
            .copied()
            .unwrap_or(Color32::WHITE)
    }
}

/// Install the phosphor icon font so widgets can render their glyph icons.
/// Call once at startup before the first frame.
pub fn install_icon_font(ctx: &Context) {
    let mut fonts = FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}
