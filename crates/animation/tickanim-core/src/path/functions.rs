//! Path curves and fixed-point helpers:
//! - Linear (identity)
//! - Step (single jump on the final sample)
//! - TablePath (lookup table of samples, linearly interpolated)
//! - lerp_value (maps a path output onto an i32 range)

use std::fmt;

use crate::error::AnimError;

/// Progress of a leg in fixed point: 0 = start, `PROGRESS_MAX` = complete.
pub const PROGRESS_MAX: u16 = 1024;

/// Upper bound of a path's output: 0 maps to the leg's `from`, `PATH_MAX` to its `to`.
pub const PATH_MAX: u16 = 1024;

/// A stateless curve mapping normalized progress to normalized output.
///
/// Implementations must accept every progress in `0..=PROGRESS_MAX` and should
/// return `0` at `0` and `PATH_MAX` at `PROGRESS_MAX` so that a completed leg
/// lands on its end value. Outputs above `PATH_MAX` are clamped by the engine.
pub trait PathFunction: fmt::Debug {
    fn sample(&self, progress: u16) -> u16;

    fn name(&self) -> &str;
}

/// Output proportional to progress.
#[derive(Copy, Clone, Debug, Default)]
pub struct Linear;

impl PathFunction for Linear {
    #[inline]
    fn sample(&self, progress: u16) -> u16 {
        progress.min(PROGRESS_MAX)
    }

    fn name(&self) -> &str {
        "linear"
    }
}

/// Minimum output until the leg completes, then the maximum.
#[derive(Copy, Clone, Debug, Default)]
pub struct Step;

impl PathFunction for Step {
    #[inline]
    fn sample(&self, progress: u16) -> u16 {
        if progress >= PROGRESS_MAX {
            PATH_MAX
        } else {
            0
        }
    }

    fn name(&self) -> &str {
        "step"
    }
}

/// Curve described by evenly spaced samples; progress between two samples is
/// interpolated linearly.
#[derive(Clone, Debug)]
pub struct TablePath {
    name: String,
    samples: Vec<u16>,
}

impl TablePath {
    /// Build from at least two samples, each within `0..=PATH_MAX`.
    pub fn new(name: impl Into<String>, samples: Vec<u16>) -> Result<Self, AnimError> {
        let name = name.into();
        if samples.len() < 2 {
            return Err(AnimError::InvalidConfig {
                reason: format!("path '{name}' needs at least 2 samples"),
            });
        }
        if let Some(bad) = samples.iter().find(|s| **s > PATH_MAX) {
            return Err(AnimError::InvalidConfig {
                reason: format!("path '{name}' sample {bad} exceeds {PATH_MAX}"),
            });
        }
        Ok(Self { name, samples })
    }

    pub fn samples(&self) -> &[u16] {
        &self.samples
    }
}

impl PathFunction for TablePath {
    fn sample(&self, progress: u16) -> u16 {
        let segments = (self.samples.len() - 1) as u32;
        let pos = progress.min(PROGRESS_MAX) as u32 * segments;
        let idx = (pos / PROGRESS_MAX as u32) as usize;
        let frac = (pos % PROGRESS_MAX as u32) as i32;
        if idx >= self.samples.len() - 1 {
            return self.samples[self.samples.len() - 1];
        }
        let a = self.samples[idx] as i32;
        let b = self.samples[idx + 1] as i32;
        (a + (b - a) * frac / PROGRESS_MAX as i32) as u16
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Fixed-point progress of `elapsed` within `duration`, rounded to nearest.
///
/// Non-positive durations are complete by definition.
#[inline]
pub fn progress_of(elapsed: i16, duration: i16) -> u16 {
    if duration <= 0 {
        return PROGRESS_MAX;
    }
    let e = elapsed.clamp(0, duration) as i32;
    let d = duration as i32;
    ((e * PROGRESS_MAX as i32 + d / 2) / d) as u16
}

/// Map a path output onto `[from, to]`, rounding half away from zero so a
/// playback leg mirrors its forward leg. Computed in i64 so full-range i32
/// endpoints cannot overflow.
#[inline]
pub fn lerp_value(from: i32, to: i32, out: u16) -> i32 {
    let out = out.min(PATH_MAX) as i64;
    let scaled = (to as i64 - from as i64) * out;
    let half = PATH_MAX as i64 / 2;
    let step = if scaled < 0 {
        (scaled - half) / PATH_MAX as i64
    } else {
        (scaled + half) / PATH_MAX as i64
    };
    (from as i64 + step) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_is_identity() {
        for p in [0, 1, 256, 512, 1000, PROGRESS_MAX] {
            assert_eq!(Linear.sample(p), p);
        }
    }

    #[test]
    fn step_jumps_only_at_end() {
        assert_eq!(Step.sample(0), 0);
        assert_eq!(Step.sample(PROGRESS_MAX - 1), 0);
        assert_eq!(Step.sample(PROGRESS_MAX), PATH_MAX);
    }

    #[test]
    fn table_interpolates_between_samples() {
        let ease = TablePath::new("ease", vec![0, 256, 1024]).unwrap();
        assert_eq!(ease.sample(0), 0);
        assert_eq!(ease.sample(256), 128);
        assert_eq!(ease.sample(512), 256);
        assert_eq!(ease.sample(768), 640);
        assert_eq!(ease.sample(PROGRESS_MAX), 1024);
    }

    #[test]
    fn table_rejects_bad_samples() {
        assert!(TablePath::new("short", vec![0]).is_err());
        assert!(TablePath::new("big", vec![0, PATH_MAX + 1]).is_err());
    }

    #[test]
    fn progress_clamps_and_handles_zero_duration() {
        assert_eq!(progress_of(100, 200), 512);
        assert_eq!(progress_of(500, 200), PROGRESS_MAX);
        assert_eq!(progress_of(-5, 200), 0);
        // 10/100 * 1024 = 102.4, 90/100 * 1024 = 921.6
        assert_eq!(progress_of(10, 100), 102);
        assert_eq!(progress_of(90, 100), 922);
        assert_eq!(progress_of(0, 0), PROGRESS_MAX);
        assert_eq!(progress_of(0, -10), PROGRESS_MAX);
    }

    #[test]
    fn lerp_value_handles_extremes() {
        assert_eq!(lerp_value(0, 100, 512), 50);
        assert_eq!(lerp_value(100, 0, 512), 50);
        assert_eq!(lerp_value(i32::MIN, i32::MAX, PATH_MAX), i32::MAX);
        assert_eq!(lerp_value(i32::MAX, i32::MIN, PATH_MAX), i32::MIN);
        assert_eq!(lerp_value(-40, 40, 0), -40);
        assert_eq!(lerp_value(i32::MIN, i32::MAX, 512), 0);
    }

    #[test]
    fn lerp_value_rounds_symmetrically() {
        // 100 * 102 / 1024 = 9.96
        assert_eq!(lerp_value(0, 100, 102), 10);
        assert_eq!(lerp_value(100, 0, 102), 90);
        // 255 * 512 / 1024 = 127.5
        assert_eq!(lerp_value(0, 255, 512), 128);
        assert_eq!(lerp_value(0, -255, 512), -128);
        for out in [0, 1, 102, 333, 512, 700, 922, PATH_MAX] {
            let forward = lerp_value(0, 100, out);
            let back = lerp_value(100, 0, PATH_MAX - out);
            assert!((forward - back).abs() <= 1, "out {out}");
        }
    }
}
