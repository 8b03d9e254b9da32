use egui::Color32;
use flim_widgets::theme::{alloc_channel_color, global_palette, set_global_palette, Theme};

// Palette state is process-global, so everything lives in one test.
#[test]
fn applying_a_theme_refreshes_the_global_palette() {
    let ctx = egui::Context::default();

    Theme::FlimDark.apply(&ctx);
    assert_eq!(global_palette(), Theme::FlimDark.channel_colors());
    assert_eq!(alloc_channel_color(0), Theme::FlimDark.channel_colors()[0]);
    // Allocation cycles past the palette length.
    let n = global_palette().len();
    assert_eq!(alloc_channel_color(n), alloc_channel_color(0));

    Theme::Light.apply(&ctx);
    assert_eq!(global_palette(), Theme::Light.channel_colors());

    let custom = vec![Color32::RED, Color32::GREEN];
    set_global_palette(custom.clone());
    assert_eq!(global_palette(), custom);
    assert_eq!(alloc_channel_color(3), Color32::GREEN);
}

#[test]
fn theme_labels_are_distinct() {
    let labels: Vec<String> = Theme::all().iter().map(Theme::label).collect();
    let mut dedup = labels.clone();
    dedup.sort();
    dedup.dedup();
    assert_eq!(labels.len(), dedup.len());
}

#[test]
fn accent_is_first_palette_entry() {
    assert_eq!(
        Theme::FlimDark.accent(),
        Theme::FlimDark.channel_colors()[0]
    );
}
