use flim_widgets::validate::*;
use serde_json::json;

#[test]
fn spectroscopy_accepts_valid_parameters() {
    assert!(check_spectroscopy(1000, 80.0, &[0, 1]).is_ok());
}

#[test]
fn spectroscopy_rejects_small_bin_width() {
    assert_eq!(
        check_spectroscopy(999, 80.0, &[0]),
        Err(ValidationError::BinWidthTooSmall)
    );
}

#[test]
fn spectroscopy_rejects_zero_frequency() {
    assert_eq!(
        check_spectroscopy(1000, 0.0, &[0]),
        Err(ValidationError::FrequencyNotDetected)
    );
}

#[test]
fn spectroscopy_rejects_empty_channels() {
    assert_eq!(
        check_spectroscopy(1000, 80.0, &[]),
        Err(ValidationError::NoChannelsSelected)
    );
}

#[test]
fn phasor_requires_reference_file() {
    assert!(check_phasor(Some("reference.json")).is_ok());
    assert_eq!(check_phasor(None), Err(ValidationError::NoReferenceFile));
    assert_eq!(check_phasor(Some("")), Err(ValidationError::NoReferenceFile));
}

fn valid_reference() -> serde_json::Value {
    json!({
        "channels": [0, 1],
        "harmonics": 1,
        "curves": [[1, 2, 3], [4, 5, 6]],
        "laser_period_ns": 12.5,
        "tau_ns": 2.0,
    })
}

#[test]
fn reference_accepts_valid_file() {
    assert!(check_phasor_reference(&valid_reference(), &[0, 1]).is_ok());
}

#[test]
fn reference_rejects_missing_keys() {
    let mut reference = valid_reference();
    reference.as_object_mut().unwrap().remove("harmonics");
    assert_eq!(
        check_phasor_reference(&reference, &[0, 1]),
        Err(ValidationError::ReferenceMissingHarmonics)
    );

    let mut reference = valid_reference();
    reference.as_object_mut().unwrap().remove("laser_period_ns");
    assert_eq!(
        check_phasor_reference(&reference, &[0, 1]),
        Err(ValidationError::ReferenceMissingLaserPeriod)
    );

    let mut reference = valid_reference();
    reference.as_object_mut().unwrap().remove("tau_ns");
    assert_eq!(
        check_phasor_reference(&reference, &[0, 1]),
        Err(ValidationError::ReferenceMissingTau)
    );
}

#[test]
fn reference_rejects_channel_mismatch() {
    assert_eq!(
        check_phasor_reference(&valid_reference(), &[0]),
        Err(ValidationError::ReferenceChannelsMismatch)
    );
}

#[test]
fn reference_rejects_curve_mismatch() {
    let mut reference = valid_reference();
    reference["curves"] = json!([[1, 2, 3]]);
    assert_eq!(
        check_phasor_reference(&reference, &[0, 1]),
        Err(ValidationError::ReferenceCurvesMismatch)
    );
}

#[test]
fn error_messages_match_the_dialog_text() {
    assert_eq!(
        ValidationError::FrequencyNotDetected.to_string(),
        "Frequency not detected"
    );
    assert_eq!(
        ValidationError::ReferenceMissingChannels.to_string(),
        "Invalid reference file (missing channels)"
    );
}
