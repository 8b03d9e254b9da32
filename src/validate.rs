//! Guard-clause validation for experiment parameters.
//!
//! Each check returns the first failure it finds; callers surface it with
//! [`crate::popups::warning`] and abort the action. There is no retry or
//! recovery path.

use serde_json::Value;
use thiserror::Error;

/// A parameter validation failure. The display text is the exact message
/// shown to the user in the warning box.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Bin width value cannot be less than 1000\u{3bc}s")]
    BinWidthTooSmall,
    #[error("Frequency not detected")]
    FrequencyNotDetected,
    #[error("No channels selected")]
    NoChannelsSelected,
    #[error("No reference file selected")]
    NoReferenceFile,
    #[error("Invalid reference file (missing channels)")]
    ReferenceMissingChannels,
    #[error("Invalid reference file (channels mismatch)")]
    ReferenceChannelsMismatch,
    #[error("Invalid reference file (missing harmonics)")]
    ReferenceMissingHarmonics,
    #[error("Invalid reference file (missing curves)")]
    ReferenceMissingCurves,
    #[error("Invalid reference file (curves mismatch)")]
    ReferenceCurvesMismatch,
    #[error("Invalid reference file (missing laser period)")]
    ReferenceMissingLaserPeriod,
    #[error("Invalid reference file (missing tau)")]
    ReferenceMissingTau,
}

/// Validate spectroscopy acquisition parameters: bin width at least 1000 µs,
/// a detected laser frequency and at least one selected channel.
pub fn check_spectroscopy(
    bin_width_us: u32,
    frequency_mhz: f64,
    selected_channels: &[usize],
) -> Result<(), ValidationError> {
    if bin_width_us < 1000 {
        return Err(ValidationError::BinWidthTooSmall);
    }
    if frequency_mhz == 0.0 {
        return Err(ValidationError::FrequencyNotDetected);
    }
    if selected_channels.is_empty() {
        return Err(ValidationError::NoChannelsSelected);
    }
    Ok(())
}

/// Validate that a phasor experiment has a reference file selected.
pub fn check_phasor(reference_file: Option<&str>) -> Result<(), ValidationError> {
    match reference_file {
        Some(path) if !path.is_empty() => Ok(()),
        _ => Err(ValidationError::NoReferenceFile),
    }
}

/// Validate the JSON contents of a phasor reference file against the
/// channels selected for the experiment.
pub fn check_phasor_reference(
    reference: &Value,
    selected_channels: &[usize],
) -> Result<(), ValidationError> {
    let channels = reference
        .get("channels")
        .and_then(Value::as_array)
        .ok_or(ValidationError::ReferenceMissingChannels)?;
    if channels.len() != selected_channels.len() {
        return Err(ValidationError::ReferenceChannelsMismatch);
    }
    if reference.get("harmonics").is_none() {
        return Err(ValidationError::ReferenceMissingHarmonics);
    }
    let curves = reference
        .get("curves")
        .and_then(Value::as_array)
        .ok_or(ValidationError::ReferenceMissingCurves)?;
    if curves.len() != selected_channels.len() {
        return Err(ValidationError::ReferenceCurvesMismatch);
    }
    if reference.get("laser_period_ns").is_none() {
        return Err(ValidationError::ReferenceMissingLaserPeriod);
    }
    if reference.get("tau_ns").is_none() {
        return Err(ValidationError::ReferenceMissingTau);
    }
    Ok(())
}
