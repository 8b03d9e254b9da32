//! Exclusive selection groups: segmented toggle rows, tab strips and select
//! button groups. All operate on a shared slice of [`Toggleable`] records,
//! keeping exactly one entry active.

use egui::{Color32, CornerRadius, CursorIcon, Response, RichText, Stroke, Ui, Vec2};

use crate::config::Toggleable;

/// Response of an exclusive group: the union response plus the key that was
/// activated this frame, if any.
pub struct ToggleResponse {
    pub response: Option<Response>,
    pub activated: Option<String>,
}

/// The key of the currently active entry.
pub fn active_key(items: &[Toggleable]) -> Option<&str> {
    items.iter().find(|t| t.active).map(|t| t.key.as_str())
}

fn activate(items: &mut [Toggleable], key: &str) {
    for item in items.iter_mut() {
        item.active = item.key == key;
    }
}

/// Per-state colors of an exclusive group button.
#[derive(Debug, Clone)]
pub struct ToggleColors {
    pub fg_active: Color32,
    pub fg_inactive: Color32,
    pub bg_active: Color32,
    pub bg_inactive: Color32,
    pub bg_hover: Color32,
    pub border_inactive: Color32,
}

impl Default for ToggleColors {
    fn default() -> Self {
        Self {
            fg_active: Color32::WHITE,
            fg_inactive: Color32::from_rgb(0x8c, 0x8b, 0x8b),
            bg_active: Color32::from_rgb(0xda, 0x12, 0x12),
            bg_inactive: Color32::from_rgb(0x3b, 0x3b, 0x3b),
            bg_hover: Color32::from_rgb(0xe2, 0x3b, 0x3b),
            border_inactive: Color32::from_rgb(0x3b, 0x3b, 0x3b),
        }
    }
}

fn group_button(
    ui: &mut Ui,
    item: &Toggleable,
    colors: &ToggleColors,
    corner: CornerRadius,
    min_size: Vec2,
    enabled: bool,
) -> Response {
    let (fg, bg) = if item.active {
        (colors.fg_active, colors.bg_active)
    } else {
        (colors.fg_inactive, colors.bg_inactive)
    };
    ui.add_enabled_ui(enabled, |ui| {
        let v = ui.visuals_mut();
        v.widgets.inactive.weak_bg_fill = bg;
        v.widgets.hovered.weak_bg_fill = colors.bg_hover;
        v.widgets.active.weak_bg_fill = colors.bg_active;
        if !item.active {
            v.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border_inactive);
        }
        ui.add(
            egui::Button::new(RichText::new(&item.text).color(fg))
                .corner_radius(corner)
                .min_size(min_size),
        )
        .on_hover_cursor(CursorIcon::PointingHand)
    })
    .inner
}

/// Segmented row of buttons where exactly one is active; the outer corners
/// of the first and last segment are rounded.
pub struct ToggleButtonRow<'a> {
    items: &'a mut [Toggleable],
    colors: ToggleColors,
    enabled: bool,
    min_size: Vec2,
}

impl<'a> ToggleButtonRow<'a> {
    pub fn new(items: &'a mut [Toggleable]) -> Self {
        Self {
            items,
            colors: ToggleColors::default(),
            enabled: true,
            min_size: Vec2::new(60.0, 28.0),
        }
    }

    pub fn colors(mut self, colors: ToggleColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn min_size(mut self, size: Vec2) -> Self {
        self.min_size = size;
        self
    }

    pub fn show(self, ui: &mut Ui) -> ToggleResponse {
        let mut activated = None;
        let mut union: Option<Response> = None;
        let last = self.items.len().saturating_sub(1);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for i in 0..self.items.len() {
                let mut corner = CornerRadius::ZERO;
                if i == 0 {
                    corner.nw = 4;
                    corner.sw = 4;
                }
                if i == last {
                    corner.ne = 4;
                    corner.se = 4;
                }
                let resp = group_button(
                    ui,
                    &self.items[i],
                    &self.colors,
                    corner,
                    self.min_size,
                    self.enabled,
                );
                if resp.clicked() {
                    activated = Some(self.items[i].key.clone());
                }
                union = Some(match union.take() {
                    Some(u) => u.union(resp),
                    None => resp,
                });
            }
        });
        if let Some(key) = &activated {
            activate(self.items, key);
        }
        ToggleResponse {
            response: union,
            activated,
        }
    }
}

/// Tab strip with one active tab. Same mechanics as the toggle row with tab
/// styling and per-tab enablement.
pub struct Tabs<'a> {
    items: &'a mut [Toggleable],
    colors: ToggleColors,
    enabled: bool,
    /// Keys of individually disabled tabs.
    disabled_keys: Vec<String>,
    min_size: Vec2,
}

impl<'a> Tabs<'a> {
    pub fn new(items: &'a mut [Toggleable]) -> Self {
        Self {
            items,
            colors: ToggleColors {
                bg_inactive: Color32::TRANSPARENT,
                border_inactive: Color32::from_rgb(0xd0, 0x1b, 0x1b),
                fg_inactive: Color32::WHITE,
                ..Default::default()
            },
            enabled: true,
            disabled_keys: Vec::new(),
            min_size: Vec2::new(80.0, 30.0),
        }
    }

    pub fn colors(mut self, colors: ToggleColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn disable_tab(mut self, key: impl Into<String>) -> Self {
        self.disabled_keys.push(key.into());
        self
    }

    pub fn show(self, ui: &mut Ui) -> ToggleResponse {
        let mut activated = None;
        let mut union: Option<Response> = None;
        ui.horizontal(|ui| {
            for item in self.items.iter() {
                let enabled = self.enabled && !self.disabled_keys.contains(&item.key);
                let resp = group_button(
                    ui,
                    item,
                    &self.colors,
                    CornerRadius::same(4),
                    self.min_size,
                    enabled,
                );
                if resp.clicked() {
                    activated = Some(item.key.clone());
                }
                union = Some(match union.take() {
                    Some(u) => u.union(resp),
                    None => resp,
                });
            }
        });
        if let Some(key) = &activated {
            activate(self.items, key);
        }
        ToggleResponse {
            response: union,
            activated,
        }
    }
}

/// Layout of a [`SelectButtonGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupLayout {
    Horizontal,
    Vertical,
    Grid { columns: usize },
}

/// Selectable buttons in a horizontal, vertical or grid arrangement.
pub struct SelectButtonGroup<'a> {
    items: &'a mut [Toggleable],
    colors: ToggleColors,
    layout: GroupLayout,
    enabled: bool,
    min_size: Vec2,
}

impl<'a> SelectButtonGroup<'a> {
    pub fn new(items: &'a mut [Toggleable]) -> Self {
        Self {
            items,
            colors: ToggleColors {
                bg_active: Color32::from_rgb(0x11, 0x46, 0x8f),
                bg_hover: Color32::from_rgb(0x00, 0x53, 0xa4),
                bg_inactive: Color32::TRANSPARENT,
                fg_inactive: Color32::WHITE,
                ..Default::default()
            },
            layout: GroupLayout::Horizontal,
            enabled: true,
            min_size: Vec2::new(80.0, 30.0),
        }
    }

    pub fn colors(mut self, colors: ToggleColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn layout(mut self, layout: GroupLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(self, ui: &mut Ui) -> ToggleResponse {
        let mut activated = None;
        let mut union: Option<Response> = None;
        let mut render = |ui: &mut Ui, item: &Toggleable| {
            let resp = group_button(
                ui,
                item,
                &self.colors,
                CornerRadius::same(4),
                self.min_size,
                self.enabled,
            );
            if resp.clicked() {
                activated = Some(item.key.clone());
            }
            union = Some(match union.take() {
                Some(u) => u.union(resp.clone()),
                None => resp.clone(),
            });
        };
        match self.layout {
            GroupLayout::Horizontal => {
                ui.horizontal(|ui| {
                    for item in self.items.iter() {
                        render(ui, item);
                    }
                });
            }
            GroupLayout::Vertical => {
                ui.vertical(|ui| {
                    for item in self.items.iter() {
                        render(ui, item);
                    }
                });
            }
            GroupLayout::Grid { columns } => {
                let columns = columns.max(1);
                egui::Grid::new(ui.id().with("select_group")).show(ui, |ui| {
                    for (i, item) in self.items.iter().enumerate() {
                        render(ui, item);
                        if (i + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
            }
        }
        if let Some(key) = &activated {
            activate(self.items, key);
        }
        ToggleResponse {
            response: union,
            activated,
        }
    }
}
