//! Noise gate engine.
//!
//! The gate tracks two values per stream: an instantaneous control signal
//! (`1.0` while the input magnitude sits at or above the threshold, `0.0`
//! below it) and a one-pole smoothed envelope chasing that control. A
//! counter of consecutive below-threshold samples delays closing until the
//! sustain period has elapsed, which is what keeps the gate from
//! chattering when the signal hovers around the threshold.

use crate::config::{ConfigError, GateConfig, GateParams};
use crate::effect::Effect;
use crate::math::flush_denormal;

/// Per-stream engine state, zeroed at construction and on [`Effect::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct GateState {
    /// Instantaneous control signal: `1.0` at/above threshold, else `0.0`.
    control: f32,
    /// Smoothed envelope in `[0.0, 1.0]`, multiplied into the output.
    envelope: f32,
    /// Length of the current below-threshold run, in samples.
    sustain_count: u32,
}

/// Hysteresis noise gate.
///
/// Attenuates the signal once its magnitude has stayed below the threshold
/// for the configured sustain period, closing along an exponential attack
/// ramp; as soon as a sample crosses back over the threshold the envelope
/// re-opens along the release ramp. Separate close and open conditions
/// keep the gate stable when the signal hovers near the threshold.
///
/// One instance serves one logical audio stream: state persists across
/// calls, so a stream may be fed in blocks of any size without changing
/// the result. Use one instance per stream and [`Effect::reset`] between
/// unrelated streams.
///
/// # Example
///
/// ```rust
/// use umbral_core::{Effect, GateConfig, NoiseGate};
///
/// let mut config = GateConfig::new(44100);
/// config.threshold_db = -40.0;
///
/// let mut gate = NoiseGate::new(config)?;
///
/// // Quiet input through a fresh (closed) gate stays silenced.
/// assert_eq!(gate.process(0.001), 0.0);
/// # Ok::<(), umbral_core::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NoiseGate {
    config: GateConfig,
    params: GateParams,
    state: GateState,
}

impl NoiseGate {
    /// Build an engine for `config`, envelope fully closed.
    ///
    /// Parameter resolution happens here; processing itself cannot fail.
    pub fn new(config: GateConfig) -> Result<Self, ConfigError> {
        let params = GateParams::derive(&config)?;
        Ok(Self {
            config,
            params,
            state: GateState::default(),
        })
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// The resolved parameters the engine runs on.
    pub fn params(&self) -> &GateParams {
        &self.params
    }

    /// Current envelope value: `0.0` is fully closed, `1.0` fully open.
    pub fn envelope(&self) -> f32 {
        self.state.envelope
    }
}

impl Effect for NoiseGate {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let above = input.abs() >= self.params.threshold_amp;

        if above {
            // A crossing from below starts a fresh above-threshold run.
            if self.state.control == 0.0 {
                self.state.sustain_count = 0;
            }
            self.state.control = 1.0;
        } else {
            // Saturating: past sustain_samples only "elapsed" matters.
            self.state.sustain_count = self.state.sustain_count.saturating_add(1);
            self.state.control = 0.0;
        }

        let gc = self.state.control;
        let gs = self.state.envelope;
        if self.state.sustain_count > self.params.sustain_samples && gc <= gs {
            // Grace period over: close toward the control signal.
            let a = self.params.attack_factor;
            self.state.envelope = flush_denormal(a * gs + (1.0 - a) * gc);
        } else if self.state.sustain_count <= self.params.sustain_samples && gc > gs {
            // Signal is back: open toward the control signal.
            let r = self.params.release_factor;
            self.state.envelope = r * gs + (1.0 - r) * gc;
        }
        // Otherwise the envelope has converged and holds.

        input * self.state.envelope
    }

    fn reset(&mut self) {
        self.state = GateState::default();
    }
}
