//! `FlimPlot`: a decay/phasor plot widget wrapping `egui_plot`.
//!
//! The widget keeps a registry of named data sets plus decorations (scatter
//! markers, text items, guide lines, a colorbar, an x-range region of
//! interest) and renders them each frame. Raw samples are cached per key so
//! lin/log presentation can be re-derived without resupplying data.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use egui::{Align2, Color32, Stroke};
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoint, Points, Polygon, Text, VLine};

use crate::error::{Result, WidgetError};
use crate::flim::{self, Tick};
use crate::style::{AxisLook, GridLook, LineLook, PlotSize, ScatterLook, TextLook};

/// Which axis an operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    X,
    #[default]
    Y,
}

/// Colormap used by the colorbar legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColormapKind {
    Hot,
    #[default]
    Cool,
}

/// Orientation for [`FlimPlot::draw_semicircle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SemicircleOrientation {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

/// Per-call presentation options for [`FlimPlot::init_series`] and
/// [`FlimPlot::update_series`].
#[derive(Debug, Clone)]
pub struct SeriesOptions {
    /// Present the scale axis in log10.
    pub log_mode: bool,
    /// Axis the lin/log transform applies to.
    pub scale_axis: Axis,
    /// Install computed tick labels on the scale axis.
    pub format_ticks: bool,
    /// Tick budget for linear mode.
    pub max_ticks: usize,
    /// Rotate samples by this many positions on `shift_axis`.
    pub shift: i64,
    pub shift_axis: Axis,
    /// Fit the range axis to the data after the update.
    pub auto_range: bool,
    pub range_axis: Axis,
    /// Overrides for the fitted range.
    pub min_val: Option<f64>,
    pub max_val: Option<f64>,
    /// Fractional padding applied around the fitted range.
    pub padding: f64,
    /// Legend entry; `None` keeps the series out of the legend.
    pub legend_name: Option<String>,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            log_mode: false,
            scale_axis: Axis::Y,
            format_ticks: false,
            max_ticks: 10,
            shift: 0,
            shift_axis: Axis::Y,
            auto_range: true,
            range_axis: Axis::Y,
            min_val: None,
            max_val: None,
            padding: 0.0,
            legend_name: None,
        }
    }
}

struct Series {
    raw_x: Vec<f64>,
    raw_y: Vec<f64>,
    display: Vec<[f64; 2]>,
    look: LineLook,
    legend_name: Option<String>,
    /// Extra straight segment drawn with the series (semicircle base line).
    base_segment: Option<[[f64; 2]; 2]>,
}

struct Scatter {
    points: Vec<[f64; 2]>,
    look: ScatterLook,
}

struct GuideLine {
    x: Option<f64>,
    y: Option<f64>,
    look: LineLook,
}

struct Colorbar {
    min_value: f64,
    max_value: f64,
    kind: ColormapKind,
}

/// X-range region of interest with draggable edges.
struct Region {
    start: f64,
    end: f64,
    fill: Color32,
    dragging_edge: Option<usize>,
}

/// Response returned by [`FlimPlot::show`].
pub struct FlimPlotResponse {
    pub response: egui::Response,
    /// The region-of-interest bounds changed this frame.
    pub region_changed: bool,
}

pub struct FlimPlot {
    id: String,
    title: String,
    x_axis: AxisLook,
    y_axis: AxisLook,
    grid: GridLook,
    size: PlotSize,
    background: Option<Color32>,
    visible: bool,
    show_legend: bool,

    series: HashMap<String, Series>,
    series_order: Vec<String>,
    scatters: HashMap<String, Scatter>,
    texts: HashMap<String, TextLook>,
    guides: HashMap<String, GuideLine>,
    colorbar: Option<Colorbar>,
    region: Option<Region>,

    x_ticks: Option<Vec<Tick>>,
    y_ticks: Option<Vec<Tick>>,
    pending_x_bounds: Option<(f64, f64)>,
    pending_y_bounds: Option<(f64, f64)>,
}

impl FlimPlot {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            x_axis: AxisLook::new("X Axis"),
            y_axis: AxisLook::new("Y Axis"),
            grid: GridLook::default(),
            size: PlotSize::default(),
            background: None,
            visible: true,
            show_legend: false,
            series: HashMap::new(),
            series_order: Vec::new(),
            scatters: HashMap::new(),
            texts: HashMap::new(),
            guides: HashMap::new(),
            colorbar: None,
            region: None,
            x_ticks: None,
            y_ticks: None,
            pending_x_bounds: None,
            pending_y_bounds: None,
        }
    }

    // ── Configuration ────────────────────────────────────────────────────────

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn x_axis(mut self, look: AxisLook) -> Self {
        self.x_axis = look;
        self
    }

    pub fn y_axis(mut self, look: AxisLook) -> Self {
        self.y_axis = look;
        self
    }

    pub fn grid(mut self, grid: GridLook) -> Self {
        self.grid = grid;
        self
    }

    pub fn dimensions(mut self, size: PlotSize) -> Self {
        self.size = size;
        self
    }

    pub fn background(mut self, color: Color32) -> Self {
        self.background = Some(color);
        self
    }

    pub fn legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_grid(&mut self, grid: GridLook) {
        self.grid = grid;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    // ── Data sets ────────────────────────────────────────────────────────────

    /// Register a data set under `key` and derive its presentation.
    pub fn init_series(&mut self, key: &str, x: &[f64], y: &[f64], look: LineLook, opts: &SeriesOptions) {
        if opts.legend_name.is_some() {
            self.show_legend = true;
        }
        let (display, ticks) = derive_display(x, y, opts);
        self.install_ticks(opts, ticks);
        if !self.series.contains_key(key) {
            self.series_order.push(key.to_string());
        }
        self.series.insert(
            key.to_string(),
            Series {
                raw_x: x.to_vec(),
                raw_y: y.to_vec(),
                display,
                look,
                legend_name: opts.legend_name.clone(),
                base_segment: None,
            },
        );
        if opts.auto_range {
            self.fit_range(opts);
        }
    }

    /// Replace (or append to) the data of an existing series.
    ///
    /// With `clear_prev` the cached samples are replaced; otherwise the new
    /// samples are appended to the cache before re-deriving the display.
    pub fn update_series(
        &mut self,
        key: &str,
        x: &[f64],
        y: &[f64],
        clear_prev: bool,
        opts: &SeriesOptions,
    ) -> Result<()> {
        let series = self
            .series
            .get_mut(key)
            .ok_or_else(|| WidgetError::UnknownKey(key.to_string()))?;
        if clear_prev {
            series.raw_x = x.to_vec();
            series.raw_y = y.to_vec();
        } else {
            series.raw_x.extend_from_slice(x);
            series.raw_y.extend_from_slice(y);
        }
        let (display, ticks) = derive_display(&series.raw_x, &series.raw_y, opts);
        series.display = display;
        self.install_ticks(opts, ticks);
        if opts.auto_range {
            self.fit_range(opts);
        }
        Ok(())
    }

    /// The display-space samples of a series.
    pub fn series(&self, key: &str) -> Result<Vec<[f64; 2]>> {
        self.series
            .get(key)
            .map(|s| s.display.clone())
            .ok_or_else(|| WidgetError::UnknownKey(key.to_string()))
    }

    /// The cached raw samples of a series.
    pub fn cached_series(&self, key: &str) -> Result<(Vec<f64>, Vec<f64>)> {
        self.series
            .get(key)
            .map(|s| (s.raw_x.clone(), s.raw_y.clone()))
            .ok_or_else(|| WidgetError::UnknownKey(key.to_string()))
    }

    /// Remove a series and its cached data.
    pub fn remove_series(&mut self, key: &str) -> Result<()> {
        self.series
            .remove(key)
            .ok_or_else(|| WidgetError::UnknownKey(key.to_string()))?;
        self.series_order.retain(|k| k != key);
        Ok(())
    }

    /// Remove a decoration item (scatter, text or guide line).
    pub fn remove_item(&mut self, key: &str) -> Result<()> {
        let removed = self.scatters.remove(key).is_some()
            | self.texts.remove(key).is_some()
            | self.guides.remove(key).is_some();
        if removed {
            Ok(())
        } else {
            Err(WidgetError::UnknownKey(key.to_string()))
        }
    }

    /// Remove all data sets, decorations and the region of interest.
    pub fn clear(&mut self) {
        self.series.clear();
        self.series_order.clear();
        self.scatters.clear();
        self.texts.clear();
        self.guides.clear();
        self.colorbar = None;
        self.region = None;
        self.x_ticks = None;
        self.y_ticks = None;
    }

    // ── Decorations ──────────────────────────────────────────────────────────

    /// Add scatter markers, optionally with a text annotation stored under
    /// `text_key`.
    pub fn add_scatter(
        &mut self,
        key: &str,
        points: &[(f64, f64)],
        look: ScatterLook,
        text_key: Option<&str>,
        text: Option<TextLook>,
    ) -> Result<()> {
        if text.is_some() && text_key.is_none() {
            return Err(WidgetError::UnknownKey(
                "a text_key is required when a text item is supplied".to_string(),
            ));
        }
        self.scatters.insert(
            key.to_string(),
            Scatter {
                points: points.iter().map(|&(x, y)| [x, y]).collect(),
                look,
            },
        );
        if let (Some(tk), Some(t)) = (text_key, text) {
            self.texts.insert(tk.to_string(), t);
        }
        Ok(())
    }

    /// Add a text annotation.
    pub fn add_text(&mut self, key: &str, text: TextLook) {
        self.texts.insert(key.to_string(), text);
    }

    /// Add a horizontal (`y`) or vertical (`x`) guide line. Dashed by default
    /// through the [`LineLook`] style.
    pub fn add_line(&mut self, key: &str, x: Option<f64>, y: Option<f64>, look: LineLook) {
        self.guides.insert(key.to_string(), GuideLine { x, y, look });
    }

    /// Show a gradient colorbar legend for the given value range.
    pub fn add_colorbar(&mut self, min_value: f64, max_value: f64, kind: ColormapKind) {
        self.colorbar = Some(Colorbar {
            min_value,
            max_value,
            kind,
        });
    }

    /// Remove the colorbar legend.
    pub fn remove_colorbar(&mut self) {
        self.colorbar = None;
    }

    /// Generate and register a semicircle series (plus its base chord), used
    /// for the universal phasor semicircle.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_semicircle(
        &mut self,
        key: &str,
        center_x: f64,
        center_y: f64,
        radius: f64,
        num_points: usize,
        look: LineLook,
        orientation: SemicircleOrientation,
    ) {
        let n = num_points.max(2);
        let mut pts = Vec::with_capacity(n);
        let base;
        match orientation {
            SemicircleOrientation::Up | SemicircleOrientation::Down => {
                for i in 0..n {
                    let x = center_x - radius + 2.0 * radius * i as f64 / (n - 1) as f64;
                    let dy = (radius * radius - (x - center_x) * (x - center_x))
                        .max(0.0)
                        .sqrt();
                    let y = if orientation == SemicircleOrientation::Down {
                        center_y - dy
                    } else {
                        center_y + dy
                    };
                    pts.push([x, y]);
                }
                base = [
                    [center_x - radius, center_y],
                    [center_x + radius, center_y],
                ];
            }
            SemicircleOrientation::Left | SemicircleOrientation::Right => {
                for i in 0..n {
                    let y = center_y - radius + 2.0 * radius * i as f64 / (n - 1) as f64;
                    let dx = (radius * radius - (y - center_y) * (y - center_y))
                        .max(0.0)
                        .sqrt();
                    let x = if orientation == SemicircleOrientation::Left {
                        center_x - dx
                    } else {
                        center_x + dx
                    };
                    pts.push([x, y]);
                }
                base = [
                    [center_x, center_y - radius],
                    [center_x, center_y + radius],
                ];
            }
        }
        if !self.series.contains_key(key) {
            self.series_order.push(key.to_string());
        }
        self.series.insert(
            key.to_string(),
            Series {
                raw_x: pts.iter().map(|p| p[0]).collect(),
                raw_y: pts.iter().map(|p| p[1]).collect(),
                display: pts,
                look,
                legend_name: None,
                base_segment: Some(base),
            },
        );
    }

    // ── Ranges ───────────────────────────────────────────────────────────────

    /// Explicitly set the visible range of one or both axes.
    pub fn set_range(&mut self, x_range: Option<(f64, f64)>, y_range: Option<(f64, f64)>) {
        if let Some(r) = x_range {
            self.pending_x_bounds = Some(r);
        }
        if let Some(r) = y_range {
            self.pending_y_bounds = Some(r);
        }
    }

    /// Fit the x axis to the data, with optional overrides and padding.
    pub fn auto_range_x(&mut self, min: Option<f64>, max: Option<f64>, padding: f64) {
        self.fit_range(&SeriesOptions {
            range_axis: Axis::X,
            min_val: min,
            max_val: max,
            padding,
            ..Default::default()
        });
    }

    /// Fit the y axis to the data, with optional overrides and padding.
    pub fn auto_range_y(&mut self, min: Option<f64>, max: Option<f64>, padding: f64) {
        self.fit_range(&SeriesOptions {
            range_axis: Axis::Y,
            min_val: min,
            max_val: max,
            padding,
            ..Default::default()
        });
    }

    fn fit_range(&mut self, opts: &SeriesOptions) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for s in self.series.values() {
            for p in &s.display {
                let v = match opts.range_axis {
                    Axis::X => p[0],
                    Axis::Y => p[1],
                };
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        if !(lo.is_finite() && hi.is_finite()) {
            return;
        }
        let lo = opts.min_val.unwrap_or(lo);
        let hi = opts.max_val.unwrap_or(hi);
        let pad = (hi - lo).abs() * opts.padding;
        let bounds = (lo - pad, hi + pad);
        match opts.range_axis {
            Axis::X => self.pending_x_bounds = Some(bounds),
            Axis::Y => self.pending_y_bounds = Some(bounds),
        }
    }

    fn install_ticks(&mut self, opts: &SeriesOptions, ticks: Option<Vec<Tick>>) {
        if !opts.format_ticks {
            return;
        }
        match opts.scale_axis {
            Axis::X => self.x_ticks = ticks,
            Axis::Y => self.y_ticks = ticks,
        }
    }

    // ── Region of interest ───────────────────────────────────────────────────

    /// Add an x-range region of interest (no-op when one is already active).
    pub fn add_region(&mut self, start: f64, end: f64, fill: Color32) {
        if self.region.is_none() {
            self.region = Some(Region {
                start,
                end,
                fill,
                dragging_edge: None,
            });
        }
    }

    /// The current region bounds, if a region is active.
    pub fn region_bounds(&self) -> Option<(f64, f64)> {
        self.region.as_ref().map(|r| {
            let (a, b) = (r.start, r.end);
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        })
    }

    /// The cached samples of `key` that fall inside the region.
    pub fn region_series(&self, key: &str) -> Result<(Vec<f64>, Vec<f64>)> {
        let (min_x, max_x) = self
            .region_bounds()
            .ok_or_else(|| WidgetError::UnknownKey("no active region".to_string()))?;
        let s = self
            .series
            .get(key)
            .ok_or_else(|| WidgetError::UnknownKey(key.to_string()))?;
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for (&x, &y) in s.raw_x.iter().zip(s.raw_y.iter()) {
            if x >= min_x && x <= max_x {
                xs.push(x);
                ys.push(y);
            }
        }
        Ok((xs, ys))
    }

    /// Remove the active region of interest.
    pub fn remove_region(&mut self) {
        self.region = None;
    }

    // ── Rendering ────────────────────────────────────────────────────────────

    /// Render the plot. Returns a response carrying the `region_changed`
    /// flag for the active region of interest.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<FlimPlotResponse> {
        if !self.visible {
            return None;
        }

        let avail = ui.available_size();
        let width = clamp_dim(
            self.size.width.unwrap_or(avail.x),
            self.size.min_width,
            self.size.max_width,
        );
        let height = clamp_dim(
            self.size.height.unwrap_or(avail.y),
            self.size.min_height,
            self.size.max_height,
        );

        if !self.title.is_empty() {
            ui.strong(&self.title);
        }

        if let Some(bg) = self.background {
            ui.style_mut().visuals.extreme_bg_color = bg;
        }
        if self.grid.show_x || self.grid.show_y {
            // Grid lines derive from this stroke; scale it by the grid alpha.
            let stroke = &mut ui.style_mut().visuals.widgets.noninteractive.bg_stroke;
            stroke.color = stroke.color.gamma_multiply(self.grid.alpha);
        }

        let x_ticks = self.x_ticks.clone();
        let y_ticks = self.y_ticks.clone();
        let grid = self.grid;

        let mut plot = Plot::new(self.id.clone())
            .width(width)
            .height(height)
            .show_grid([grid.show_x, grid.show_y])
            .x_axis_label(self.x_axis.title())
            .y_axis_label(self.y_axis.title());
        if self.show_legend {
            plot = plot.legend(Legend::default());
        }
        if self.region.is_some() {
            // Pointer drags move the region edges instead of panning.
            plot = plot.allow_drag(false);
        }
        if let Some(ticks) = x_ticks.clone() {
            plot = plot
                .x_grid_spacer(tick_grid_spacer(ticks.clone()))
                .x_axis_formatter(tick_formatter(ticks));
        }
        if let Some(ticks) = y_ticks.clone() {
            plot = plot
                .y_grid_spacer(tick_grid_spacer(ticks.clone()))
                .y_axis_formatter(tick_formatter(ticks));
        }

        let pending_x = self.pending_x_bounds.take();
        let pending_y = self.pending_y_bounds.take();

        // Collect draw data up front so the plot closure does not borrow self.
        struct SeriesDraw {
            name: String,
            legend_name: Option<String>,
            points: Vec<[f64; 2]>,
            base: Option<[[f64; 2]; 2]>,
            look: LineLook,
        }
        let series_draws: Vec<SeriesDraw> = self
            .series_order
            .iter()
            .filter_map(|key| {
                self.series.get(key).map(|s| SeriesDraw {
                    name: key.clone(),
                    legend_name: s.legend_name.clone(),
                    points: s.display.clone(),
                    base: s.base_segment,
                    look: s.look.clone(),
                })
            })
            .collect();
        let scatter_draws: Vec<(String, Vec<[f64; 2]>, ScatterLook)> = self
            .scatters
            .iter()
            .map(|(k, s)| (k.clone(), s.points.clone(), s.look.clone()))
            .collect();
        let text_draws: Vec<TextLook> = self.texts.values().cloned().collect();
        let guide_draws: Vec<(Option<f64>, Option<f64>, LineLook)> = self
            .guides
            .values()
            .map(|g| (g.x, g.y, g.look.clone()))
            .collect();
        let region_draw = self.region.as_ref().map(|r| (r.start, r.end, r.fill));

        let plot_resp = plot.show(ui, |plot_ui| {
            if let Some((lo, hi)) = pending_x {
                plot_ui.set_plot_bounds_x(lo..=hi);
            }
            if let Some((lo, hi)) = pending_y {
                plot_ui.set_plot_bounds_y(lo..=hi);
            }

            for draw in &series_draws {
                let mut line = Line::new(draw.name.clone(), draw.points.clone())
                    .color(draw.look.color)
                    .width(draw.look.width)
                    .style(draw.look.style);
                if let Some(legend) = &draw.legend_name {
                    line = line.name(legend.clone());
                } else {
                    line = line.name("");
                }
                plot_ui.line(line);
                if let Some(base) = draw.base {
                    plot_ui.line(
                        Line::new(format!("{}:base", draw.name), base.to_vec())
                            .color(draw.look.color)
                            .width(draw.look.width)
                            .name(""),
                    );
                }
            }

            for (key, points, look) in &scatter_draws {
                let markers = Points::new(key.clone(), points.clone())
                    .radius(look.size * 0.5)
                    .shape(look.marker)
                    .color(look.color)
                    .name("");
                plot_ui.points(markers);
                if let Some(outline) = &look.outline {
                    // Outline pass: same markers, unfilled, slightly larger.
                    plot_ui.points(
                        Points::new(format!("{key}:outline"), points.clone())
                            .radius(look.size * 0.5 + outline.width)
                            .shape(look.marker)
                            .color(outline.color)
                            .filled(false)
                            .name(""),
                    );
                }
            }

            for (x, y, look) in &guide_draws {
                if let Some(x) = x {
                    plot_ui.vline(
                        VLine::new("", *x)
                            .color(look.color)
                            .width(look.width)
                            .style(look.style)
                            .name(""),
                    );
                }
                if let Some(y) = y {
                    plot_ui.hline(
                        egui_plot::HLine::new("", *y)
                            .color(look.color)
                            .width(look.width)
                            .style(look.style)
                            .name(""),
                    );
                }
            }

            for text in &text_draws {
                let (x, y) = text.position.unwrap_or((0.0, 0.0));
                let rich = egui::RichText::new(text.text.clone())
                    .size(text.size)
                    .color(text.color);
                plot_ui.text(
                    Text::new("", PlotPoint::new(x, y), rich)
                        .anchor(text.anchor)
                        .name(""),
                );
            }

            if let Some((start, end, fill)) = region_draw {
                let yb = plot_ui.plot_bounds();
                let yr = yb.range_y();
                let (ymin, ymax) = (*yr.start(), *yr.end());
                let poly = vec![
                    [start, ymin],
                    [end, ymin],
                    [end, ymax],
                    [start, ymax],
                ];
                plot_ui.polygon(
                    Polygon::new("", poly)
                        .fill_color(fill)
                        .stroke(Stroke::new(0.0, Color32::TRANSPARENT))
                        .name(""),
                );
                for edge in [start, end] {
                    plot_ui.vline(VLine::new("", edge).color(fill.to_opaque()).width(1.5).name(""));
                }
            }
        });

        // Region edge dragging happens in plot coordinates via the response
        // transform.
        let mut region_changed = false;
        if let Some(region) = &mut self.region {
            let response = &plot_resp.response;
            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let plot_pos = plot_resp.transform.value_from_position(pos);
                    let tol = plot_resp.transform.bounds().width() * 0.02;
                    if (plot_pos.x - region.start).abs() <= tol {
                        region.dragging_edge = Some(0);
                    } else if (plot_pos.x - region.end).abs() <= tol {
                        region.dragging_edge = Some(1);
                    }
                }
            }
            if response.dragged() {
                if let (Some(edge), Some(pos)) =
                    (region.dragging_edge, response.interact_pointer_pos())
                {
                    let plot_pos = plot_resp.transform.value_from_position(pos);
                    let target = if edge == 0 {
                        &mut region.start
                    } else {
                        &mut region.end
                    };
                    if *target != plot_pos.x {
                        *target = plot_pos.x;
                        region_changed = true;
                    }
                }
            }
            if response.drag_stopped() {
                region.dragging_edge = None;
            }
        }

        if let Some(bar) = &self.colorbar {
            paint_colorbar(ui, plot_resp.response.rect, bar);
        }

        Some(FlimPlotResponse {
            response: plot_resp.response,
            region_changed,
        })
    }
}

fn clamp_dim(value: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    let mut v = value;
    if let Some(min) = min {
        v = v.max(min);
    }
    if let Some(max) = max {
        v = v.min(max);
    }
    v
}

/// Derive display samples (and optional ticks) from raw data per the options.
fn derive_display(x: &[f64], y: &[f64], opts: &SeriesOptions) -> (Vec<[f64; 2]>, Option<Vec<Tick>>) {
    let mut xs: Vec<f64> = x.to_vec();
    let mut ys: Vec<f64> = y.to_vec();

    let ticks = if opts.log_mode {
        let (log, ticks) = flim::calc_log_mode_values_and_ticks(match opts.scale_axis {
            Axis::X => &xs,
            Axis::Y => &ys,
        });
        match opts.scale_axis {
            Axis::X => xs = log.values,
            Axis::Y => ys = log.values,
        }
        Some(ticks)
    } else {
        let values = match opts.scale_axis {
            Axis::X => &xs,
            Axis::Y => &ys,
        };
        Some(flim::calc_lin_mode_values_and_ticks(values, opts.max_ticks))
    };

    if opts.shift != 0 {
        match opts.shift_axis {
            Axis::X => rotate(&mut xs, opts.shift),
            Axis::Y => rotate(&mut ys, opts.shift),
        }
    }

    let display = xs
        .iter()
        .zip(ys.iter())
        .map(|(&x, &y)| [x, y])
        .collect();
    (display, ticks)
}

/// Rotate samples in place: positive shifts move samples toward the end,
/// wrapping around.
fn rotate(values: &mut [f64], shift: i64) {
    let n = values.len();
    if n == 0 {
        return;
    }
    let by = shift.rem_euclid(n as i64) as usize;
    values.rotate_right(by);
}

fn tick_grid_spacer(ticks: Vec<Tick>) -> impl Fn(egui_plot::GridInput) -> Vec<GridMark> {
    move |_input| {
        let step = if ticks.len() > 1 {
            (ticks[1].0 - ticks[0].0).abs().max(f64::EPSILON)
        } else {
            1.0
        };
        ticks
            .iter()
            .map(|&(value, _)| GridMark {
                value,
                step_size: step,
            })
            .collect()
    }
}

fn tick_formatter(ticks: Vec<Tick>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let step = if ticks.len() > 1 {
            (ticks[1].0 - ticks[0].0).abs()
        } else {
            1.0
        };
        let tol = step * 1e-6 + 1e-12;
        ticks
            .iter()
            .find(|(v, _)| (v - mark.value).abs() <= tol)
            .map(|(_, label)| label.clone())
            .unwrap_or_default()
    }
}

fn paint_colorbar(ui: &mut egui::Ui, plot_rect: egui::Rect, bar: &Colorbar) {
    let stops = match bar.kind {
        ColormapKind::Hot => flim::hot_colormap(),
        ColormapKind::Cool => flim::cool_colormap(0.0, 1.0),
    };
    let bar_width = 10.0;
    let margin = 8.0;
    let bar_rect = egui::Rect::from_min_max(
        egui::pos2(
            plot_rect.right() - bar_width - margin,
            plot_rect.top() + margin * 3.0,
        ),
        egui::pos2(
            plot_rect.right() - margin,
            plot_rect.bottom() - margin * 3.0,
        ),
    );
    let painter = ui.painter_at(plot_rect);
    let steps = 64;
    for i in 0..steps {
        let t0 = i as f32 / steps as f32;
        let t1 = (i + 1) as f32 / steps as f32;
        // Bottom of the bar is the colormap start.
        let seg = egui::Rect::from_min_max(
            egui::pos2(bar_rect.left(), bar_rect.bottom() - t1 * bar_rect.height()),
            egui::pos2(bar_rect.right(), bar_rect.bottom() - t0 * bar_rect.height()),
        );
        painter.rect_filled(seg, egui::CornerRadius::ZERO, flim::sample_colormap(&stops, t0));
    }
    let font = egui::FontId::proportional(10.0);
    let text_color = ui.visuals().text_color();
    painter.text(
        egui::pos2(bar_rect.center().x, bar_rect.bottom() + 2.0),
        Align2::CENTER_TOP,
        format!("{}", bar.min_value),
        font.clone(),
        text_color,
    );
    painter.text(
        egui::pos2(bar_rect.center().x, bar_rect.top() - 2.0),
        Align2::CENTER_BOTTOM,
        format!("{}", bar.max_value),
        font,
        text_color,
    );
}
