use crate::animation::ease::Ease;
use crate::foundation::error::{FlowError, FlowResult};

/// Interpolation contract for track value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;

    /// Return `false` for values that would poison interpolation (NaN, infinities).
    fn is_finite(&self) -> bool {
        true
    }
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

/// What happens when a cycle ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    /// Jump back to `from` and play forward again.
    #[default]
    Restart,
    /// Alternate direction every cycle (ping-pong).
    Reverse,
}

/// How many extra cycles follow the first one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    /// Never stop.
    #[default]
    Infinite,
    /// Play `n` additional cycles, then hold the final value.
    Count(u32),
}

/// A value tween driven by wall-clock milliseconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Track<T> {
    /// Value at the start of a forward cycle.
    pub from: T,
    /// Value at the end of a forward cycle.
    pub to: T,
    /// Length of one cycle in milliseconds (`> 0`).
    pub duration_ms: f64,
    /// Cycle-to-cycle direction policy.
    pub mode: RepeatMode,
    /// Number of extra cycles.
    pub repeat: Repeat,
    /// Easing applied within each cycle.
    pub ease: Ease,
}

impl<T> Track<T>
where
    T: Lerp + Clone,
{
    /// Linear tween that restarts forever.
    pub fn looping(from: T, to: T, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            mode: RepeatMode::Restart,
            repeat: Repeat::Infinite,
            ease: Ease::Linear,
        }
    }

    /// Linear tween that ping-pongs forever.
    pub fn ping_pong(from: T, to: T, duration_ms: f64) -> Self {
        Self {
            mode: RepeatMode::Reverse,
            ..Self::looping(from, to, duration_ms)
        }
    }

    /// Replace the repeat policy.
    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Replace the easing function.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Validate static invariants.
    pub fn validate(&self) -> FlowResult<()> {
        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            return Err(FlowError::animation("Track duration_ms must be finite and > 0"));
        }
        if !(self.from.is_finite() && self.to.is_finite()) {
            return Err(FlowError::animation("Track endpoints must be finite"));
        }
        Ok(())
    }

    /// Sample the track `elapsed_ms` after it started.
    ///
    /// Negative elapsed time clamps to the start. Finite tracks hold their final value.
    pub fn sample(&self, elapsed_ms: f64) -> FlowResult<T> {
        self.validate()?;
        let progress = elapsed_ms.max(0.0) / self.duration_ms;
        let (cycle, frac) = self.cycle_position(progress);
        let forward = match self.mode {
            RepeatMode::Restart => true,
            RepeatMode::Reverse => cycle % 2 == 0,
        };
        let t = if forward { frac } else { 1.0 - frac };
        Ok(T::lerp(&self.from, &self.to, self.ease.apply(t)))
    }

    fn cycle_position(&self, progress: f64) -> (u64, f64) {
        if let Repeat::Count(n) = self.repeat {
            let cycles = u64::from(n) + 1;
            if progress >= cycles as f64 {
                return (cycles - 1, 1.0);
            }
        }
        let cycle = progress.floor();
        (cycle as u64, progress - cycle)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
