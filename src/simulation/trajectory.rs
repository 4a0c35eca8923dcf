//! Trajectory records and derived quantities.
//!
//! A [`Track`] is the per-body ordered sequence of (time, position, velocity)
//! samples appended once per step and read-only after the run. The free
//! functions compute the derived series handed to the plotting collaborator:
//! a central-difference velocity estimate and residuals against a reference
//! series.

use super::error::SimError;

/// Per-body sample record for the fall demos. `positions` holds the fall-axis
/// coordinate, `velocities` the instantaneous fall-axis velocity at the same
/// times.
#[derive(Debug, Clone, Default)]
pub struct Track {
    pub times: Vec<f64>,
    pub positions: Vec<f64>,
    pub velocities: Vec<f64>,
}

impl Track {
    pub fn push(&mut self, t: f64, y: f64, vy: f64) {
        self.times.push(t);
        self.positions.push(y);
        self.velocities.push(vy);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Velocity series obtained by differentiating the recorded positions,
    /// independent of the velocities tracked during the run.
    pub fn derived_velocities(&self, dt: f64) -> Result<Vec<f64>, SimError> {
        central_gradient(&self.positions, dt)
    }
}

/// Discrete derivative of a uniformly spaced series.
///
/// Central differences in the interior, one-sided differences at the two
/// ends. Needs at least two samples.
pub fn central_gradient(values: &[f64], dt: f64) -> Result<Vec<f64>, SimError> {
    if values.len() < 2 {
        return Err(SimError::InvalidParameter(format!(
            "gradient needs at least 2 samples, got {}",
            values.len()
        )));
    }
    if !(dt > 0.0) || !dt.is_finite() {
        return Err(SimError::InvalidParameter(format!(
            "gradient step must be positive and finite, got {dt}"
        )));
    }

    let n = values.len();
    let mut out = Vec::with_capacity(n);

    out.push((values[1] - values[0]) / dt);
    for i in 1..n - 1 {
        out.push((values[i + 1] - values[i - 1]) / (2.0 * dt));
    }
    out.push((values[n - 1] - values[n - 2]) / dt);

    Ok(out)
}

/// Element-wise `|estimate - reference|`.
pub fn absolute_residuals(estimate: &[f64], reference: &[f64]) -> Result<Vec<f64>, SimError> {
    if estimate.len() != reference.len() {
        return Err(SimError::LengthMismatch {
            left: estimate.len(),
            right: reference.len(),
        });
    }
    Ok(estimate
        .iter()
        .zip(reference.iter())
        .map(|(e, r)| (e - r).abs())
        .collect())
}

/// Element-wise `|estimate - reference| / |reference|`.
///
/// Samples where the reference is zero (the very first instants of a fall)
/// are reported as zero rather than dividing through.
pub fn relative_residuals(estimate: &[f64], reference: &[f64]) -> Result<Vec<f64>, SimError> {
    if estimate.len() != reference.len() {
        return Err(SimError::LengthMismatch {
            left: estimate.len(),
            right: reference.len(),
        });
    }
    Ok(estimate
        .iter()
        .zip(reference.iter())
        .map(|(e, r)| if *r == 0.0 { 0.0 } else { (e - r).abs() / r.abs() })
        .collect())
}
