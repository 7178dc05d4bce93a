//! Gate configuration and parameter resolution.
//!
//! [`GateConfig`] holds the settings users reason about: a threshold in
//! decibels and attack/sustain/release times in milliseconds. The engine
//! never touches those units. [`GateParams::derive`] resolves them once
//! into linear amplitude, whole sample counts, and per-sample smoothing
//! factors, failing with [`ConfigError`] on settings the gate cannot run
//! with. Resolution is pure: same config in, same params out, no side
//! effects.

use libm::expf;

use crate::math::{db_to_linear, ms_to_samples};

/// Default threshold in dBFS.
pub const DEFAULT_THRESHOLD_DB: f32 = -40.0;
/// Default attack (closing) time in milliseconds.
pub const DEFAULT_ATTACK_MS: f32 = 20.0;
/// Default sustain (grace period) time in milliseconds.
pub const DEFAULT_SUSTAIN_MS: f32 = 30.0;
/// Default release (opening) time in milliseconds.
pub const DEFAULT_RELEASE_MS: f32 = 30.0;

/// Thresholds at or below this resolve to a linear amplitude of exactly
/// `0.0`, which no sample magnitude can fall under — the gate stays open.
/// Lowering the threshold this far is the supported way to disable gating.
pub const THRESHOLD_FLOOR_DB: f32 = -80.0;

/// ln(9). A one-pole section takes ln(9) time constants to traverse the
/// 10%-to-90% span of its transition, so dividing by the sample count
/// makes the configured time cover that span.
const LN_9: f32 = 2.197_224_6;

/// User-facing gate settings.
///
/// Plain data: build one, adjust fields, then hand it to
/// [`NoiseGate::new`](crate::NoiseGate::new) (or resolve it directly with
/// [`GateParams::derive`]). An engine keeps the config it was built with;
/// changing settings afterwards means building a new engine, which is also
/// where invalid combinations are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateConfig {
    /// Sample rate in Hz. Must be non-zero; used only to convert the
    /// millisecond durations into sample counts.
    pub sample_rate: u32,
    /// Amplitude below which the gate begins closing, in dBFS. Values at
    /// or below [`THRESHOLD_FLOOR_DB`] disable gating entirely.
    pub threshold_db: f32,
    /// Time budget for the envelope to close once sustain has elapsed.
    pub attack_ms: f32,
    /// Grace period of below-threshold signal before closing begins.
    pub sustain_ms: f32,
    /// Time budget for the envelope to re-open once the signal returns.
    pub release_ms: f32,
}

impl GateConfig {
    /// Create a config with the default threshold and timing settings at
    /// the given sample rate.
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            threshold_db: DEFAULT_THRESHOLD_DB,
            attack_ms: DEFAULT_ATTACK_MS,
            sustain_ms: DEFAULT_SUSTAIN_MS,
            release_ms: DEFAULT_RELEASE_MS,
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::new(48000)
    }
}

/// Invalid gate configuration, reported when parameters are resolved.
///
/// Processing itself is infallible; every way a config can be unusable is
/// caught here, before an engine exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The sample rate was zero.
    ZeroSampleRate,
    /// A duration resolved to zero whole samples at the configured rate.
    ///
    /// The smoothing factors divide by the sample count, so attack and
    /// release must span at least one sample; sustain is held to the same
    /// rule for uniformity.
    ZeroDuration {
        /// Which setting: `"attack"`, `"sustain"`, or `"release"`.
        which: &'static str,
        /// Sample rate the duration was resolved against, in Hz.
        sample_rate: u32,
    },
}

#[cfg(feature = "std")]
impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroSampleRate => write!(f, "sample rate must be positive"),
            Self::ZeroDuration { which, sample_rate } => write!(
                f,
                "{which} time resolves to zero samples at {sample_rate} Hz; \
                 it must span at least one sample"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Gate settings resolved to the units the engine runs on.
///
/// Produced once by [`GateParams::derive`]; the engine reads these every
/// sample and never recomputes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateParams {
    /// Linear amplitude of the threshold; `0.0` means the gate never
    /// closes.
    pub threshold_amp: f32,
    /// Attack time in whole samples (≥ 1).
    pub attack_samples: u32,
    /// Sustain grace period in whole samples (≥ 1).
    pub sustain_samples: u32,
    /// Release time in whole samples (≥ 1).
    pub release_samples: u32,
    /// One-pole coefficient for the closing ramp, in (0, 1).
    pub attack_factor: f32,
    /// One-pole coefficient for the opening ramp, in (0, 1).
    pub release_factor: f32,
}

impl GateParams {
    /// Resolve a [`GateConfig`] into engine units.
    ///
    /// Fails if the sample rate is zero or any duration rounds down to
    /// zero samples. Negative and non-finite durations resolve to zero
    /// samples and are rejected by the same rule.
    pub fn derive(config: &GateConfig) -> Result<Self, ConfigError> {
        if config.sample_rate == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }

        let attack_samples = require_samples("attack", config.attack_ms, config.sample_rate)?;
        let sustain_samples = require_samples("sustain", config.sustain_ms, config.sample_rate)?;
        let release_samples = require_samples("release", config.release_ms, config.sample_rate)?;

        let params = Self {
            threshold_amp: threshold_amp(config.threshold_db),
            attack_samples,
            sustain_samples,
            release_samples,
            attack_factor: smoothing_factor(attack_samples),
            release_factor: smoothing_factor(release_samples),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            threshold_amp = params.threshold_amp,
            attack_samples = params.attack_samples,
            sustain_samples = params.sustain_samples,
            release_samples = params.release_samples,
            "gate_config: resolved"
        );

        Ok(params)
    }
}

/// Linear threshold amplitude, with the disable floor applied.
#[inline]
fn threshold_amp(threshold_db: f32) -> f32 {
    if threshold_db > THRESHOLD_FLOOR_DB {
        db_to_linear(threshold_db)
    } else {
        0.0
    }
}

/// Resolve one duration to samples, rejecting zero-length results.
fn require_samples(which: &'static str, ms: f32, sample_rate: u32) -> Result<u32, ConfigError> {
    let samples = ms_to_samples(ms, sample_rate as f32);
    if samples == 0 {
        return Err(ConfigError::ZeroDuration { which, sample_rate });
    }
    Ok(samples)
}

/// One-pole coefficient reaching within 1/9 of the target over `samples`
/// steps. Callers guarantee `samples >= 1`.
#[inline]
fn smoothing_factor(samples: u32) -> f32 {
    expf(-LN_9 / samples as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GateConfig::new(44100);
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.threshold_db, -40.0);
        assert_eq!(config.attack_ms, 20.0);
        assert_eq!(config.sustain_ms, 30.0);
        assert_eq!(config.release_ms, 30.0);

        assert_eq!(GateConfig::default().sample_rate, 48000);
    }

    #[test]
    fn test_derive_default_at_44100() {
        let params = GateParams::derive(&GateConfig::new(44100)).unwrap();

        // -40 dB → 0.01 linear
        assert!((params.threshold_amp - 0.01).abs() < 1e-6);
        // 20 ms / 30 ms / 30 ms at 44.1 kHz
        assert_eq!(params.attack_samples, 882);
        assert_eq!(params.sustain_samples, 1323);
        assert_eq!(params.release_samples, 1323);
        // e^(-ln9/882) and e^(-ln9/1323)
        assert!((params.attack_factor - 0.997512).abs() < 1e-5);
        assert!((params.release_factor - 0.998341).abs() < 1e-5);
    }

    #[test]
    fn test_factor_is_one_ninth_for_single_sample() {
        // 1 ms at 1 kHz is exactly one sample, so the envelope must cover
        // all but 1/9 of the distance in a single step.
        let config = GateConfig {
            sample_rate: 1000,
            threshold_db: -40.0,
            attack_ms: 1.0,
            sustain_ms: 1.0,
            release_ms: 1.0,
        };
        let params = GateParams::derive(&config).unwrap();
        assert_eq!(params.attack_samples, 1);
        assert!((params.attack_factor - 1.0 / 9.0).abs() < 1e-4);
        assert!((params.release_factor - 1.0 / 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_factors_stay_in_unit_interval() {
        for rate in [8000, 44100, 48000, 192000] {
            let params = GateParams::derive(&GateConfig::new(rate)).unwrap();
            assert!(params.attack_factor > 0.0 && params.attack_factor < 1.0);
            assert!(params.release_factor > 0.0 && params.release_factor < 1.0);
        }
    }

    #[test]
    fn test_threshold_floor_disables_gate() {
        let mut config = GateConfig::new(48000);

        config.threshold_db = -80.0;
        let params = GateParams::derive(&config).unwrap();
        assert_eq!(params.threshold_amp, 0.0);

        config.threshold_db = -90.0;
        let params = GateParams::derive(&config).unwrap();
        assert_eq!(params.threshold_amp, 0.0);

        // Just above the floor still resolves to a real amplitude
        config.threshold_db = -79.9;
        let params = GateParams::derive(&config).unwrap();
        assert!(params.threshold_amp > 0.0);
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        let config = GateConfig::new(0);
        assert_eq!(GateParams::derive(&config), Err(ConfigError::ZeroSampleRate));
    }

    #[test]
    fn test_zero_durations_rejected() {
        for (attack, sustain, release, which) in [
            (0.0, 30.0, 30.0, "attack"),
            (20.0, 0.0, 30.0, "sustain"),
            (20.0, 30.0, 0.0, "release"),
        ] {
            let config = GateConfig {
                sample_rate: 44100,
                threshold_db: -40.0,
                attack_ms: attack,
                sustain_ms: sustain,
                release_ms: release,
            };
            assert_eq!(
                GateParams::derive(&config),
                Err(ConfigError::ZeroDuration {
                    which,
                    sample_rate: 44100
                })
            );
        }
    }

    #[test]
    fn test_subsample_duration_rejected() {
        // 0.01 ms at 44.1 kHz is 0.441 samples: rounds down to zero
        let mut config = GateConfig::new(44100);
        config.attack_ms = 0.01;
        assert!(matches!(
            GateParams::derive(&config),
            Err(ConfigError::ZeroDuration {
                which: "attack",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let mut config = GateConfig::new(44100);
        config.release_ms = -5.0;
        assert!(matches!(
            GateParams::derive(&config),
            Err(ConfigError::ZeroDuration {
                which: "release",
                ..
            })
        ));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_error_display() {
        assert!(
            ConfigError::ZeroSampleRate
                .to_string()
                .contains("sample rate")
        );
        let err = ConfigError::ZeroDuration {
            which: "attack",
            sample_rate: 44100,
        };
        let msg = err.to_string();
        assert!(msg.contains("attack"), "unexpected message: {msg}");
        assert!(msg.contains("44100"), "unexpected message: {msg}");
    }
}
