use crate::constants::MAX_PROFILE_POINTS;
use crate::errors::AtmosphereError;
use crate::model::atmosphere::{AtmosphereModel, AtmosphereState};

/// Evenly spaced altitudes from `start` to `end`, end inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    start: f64,
    end: f64,
    step: f64,
    steps: usize,
}

impl Profile {
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, AtmosphereError> {
        if !(start.is_finite() && end.is_finite() && step.is_finite()) {
            return Err(AtmosphereError::InvalidProfile(format!(
                "bounds and step must be finite (start = {}, end = {}, step = {})",
                start, end, step
            )));
        }
        if step <= 0.0 {
            return Err(AtmosphereError::InvalidProfile(format!(
                "step must be positive, got {}",
                step
            )));
        }
        if end < start {
            return Err(AtmosphereError::InvalidProfile(format!(
                "end {} is below start {}",
                end, start
            )));
        }

        let steps = ((end - start) / step).floor();
        // One extra point for the start and one for a partial last step.
        if !steps.is_finite() || steps + 2.0 > MAX_PROFILE_POINTS as f64 {
            return Err(AtmosphereError::InvalidProfile(format!(
                "{} to {} in steps of {} exceeds {} points",
                start, end, step, MAX_PROFILE_POINTS
            )));
        }

        Ok(Profile {
            start,
            end,
            step,
            steps: steps as usize,
        })
    }

    pub fn altitudes(&self) -> Vec<f64> {
        let mut altitudes: Vec<f64> = (0..=self.steps)
            .map(|i| self.start + i as f64 * self.step)
            .collect();

        if let Some(&last) = altitudes.last() {
            if self.end - last > self.step * 1e-9 {
                altitudes.push(self.end);
            }
        }
        altitudes
    }

    pub fn evaluate(&self, model: &AtmosphereModel) -> Vec<(f64, AtmosphereState)> {
        self.altitudes()
            .into_iter()
            .map(|altitude| (altitude, model.at_altitude(altitude)))
            .collect()
    }
}
