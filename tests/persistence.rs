use egui::Color32;
use egui_plot::{LineStyle, MarkerShape};
use flim_widgets::persistence::*;
use flim_widgets::style::{LineLook, ScatterLook};

fn sample_line() -> LineLook {
    LineLook {
        color: Color32::from_rgba_unmultiplied(10, 20, 30, 200),
        width: 2.5,
        style: LineStyle::Dashed { length: 6.0 },
    }
}

#[test]
fn line_look_round_trip() {
    let look = sample_line();
    let serde: LineLookSerde = (&look).into();
    let restored = serde.into_look();
    assert_eq!(restored, look);
}

#[test]
fn scatter_look_round_trip() {
    let look = ScatterLook {
        size: 14.0,
        color: Color32::RED,
        outline: Some(sample_line()),
        marker: MarkerShape::Diamond,
    };
    let serde: ScatterLookSerde = (&look).into();
    let restored = serde.into_look();
    assert_eq!(restored, look);
}

#[test]
fn style_sheet_json_round_trip() {
    let mut styles = StyleSheet::default();
    styles.lines.push(("decay".to_string(), (&sample_line()).into()));
    let json = styles_to_json(&styles).unwrap();
    let restored = styles_from_json(&json).unwrap();
    assert_eq!(restored.lines.len(), 1);
    assert_eq!(restored.lines[0].0, "decay");
    assert_eq!(restored.lines[0].1.clone().into_look(), sample_line());
}

#[test]
fn style_sheet_file_round_trip_json_and_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let mut styles = StyleSheet::default();
    styles.lines.push(("decay".to_string(), (&sample_line()).into()));

    for name in ["styles.json", "styles.yaml"] {
        let path = dir.path().join(name);
        save_styles_to_path(&styles, &path).unwrap();
        let restored = load_styles_from_path(&path).unwrap();
        assert_eq!(
            restored.lines[0].1.clone().into_look(),
            sample_line(),
            "round trip through {name}"
        );
    }
}
