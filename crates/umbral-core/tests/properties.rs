//! Property-based tests for the gate engine.
//!
//! Uses proptest to verify the invariants block-based callers lean on:
//! buffer size never changes results, the envelope stays inside [0, 1],
//! and the gate only ever attenuates.

use proptest::prelude::*;
use umbral_core::{Effect, GateConfig, NoiseGate};

const SAMPLE_RATES: &[u32] = &[8000, 44100, 48000];

fn make_gate(sample_rate: u32, threshold_db: f32) -> NoiseGate {
    let mut config = GateConfig::new(sample_rate);
    config.threshold_db = threshold_db;
    NoiseGate::new(config).expect("valid test config")
}

/// Run a whole buffer through the gate, collecting the output.
fn run(gate: &mut NoiseGate, input: &[f32]) -> Vec<f32> {
    let mut output = vec![0.0; input.len()];
    gate.process_block(input, &mut output);
    output
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Output length always equals input length, for any buffer content.
    #[test]
    fn length_preserved(
        input in prop::collection::vec(-1.5f32..=1.5f32, 0..512),
        rate_idx in 0usize..3,
    ) {
        let mut gate = make_gate(SAMPLE_RATES[rate_idx], -40.0);
        let output = run(&mut gate, &input);
        prop_assert_eq!(output.len(), input.len());
    }

    /// Feeding a stream in chunks of any size produces bit-identical
    /// output to processing it in one call. This is what makes the engine
    /// safe for arbitrary block-based hosts.
    #[test]
    fn chunking_invariance(
        input in prop::collection::vec(-1.5f32..=1.5f32, 0..400),
        chunk_len in 1usize..=97,
        rate_idx in 0usize..3,
        threshold_db in -60.0f32..-10.0,
    ) {
        let rate = SAMPLE_RATES[rate_idx];

        let mut whole = make_gate(rate, threshold_db);
        let expected = run(&mut whole, &input);

        let mut chunked = make_gate(rate, threshold_db);
        let mut produced = vec![0.0f32; input.len()];
        for (inp, out) in input.chunks(chunk_len).zip(produced.chunks_mut(chunk_len)) {
            chunked.process_block(inp, out);
        }

        for (i, (a, b)) in expected.iter().zip(produced.iter()).enumerate() {
            prop_assert_eq!(
                a.to_bits(),
                b.to_bits(),
                "sample {} diverged: whole={}, chunked={} (chunk_len={})",
                i, a, b, chunk_len
            );
        }
    }

    /// The envelope is a convex combination of itself and a {0, 1} control
    /// signal, so it can never leave [0, 1] — even for inputs well outside
    /// the nominal [-1, 1] range.
    #[test]
    fn envelope_stays_in_unit_interval(
        input in prop::collection::vec(-10.0f32..=10.0, 1..600),
        rate_idx in 0usize..3,
        threshold_db in -60.0f32..-10.0,
    ) {
        let mut gate = make_gate(SAMPLE_RATES[rate_idx], threshold_db);
        for &sample in &input {
            gate.process(sample);
            let env = gate.envelope();
            prop_assert!(
                (0.0..=1.0).contains(&env),
                "envelope {} escaped [0, 1] after input {}",
                env, sample
            );
        }
    }

    /// A gate only attenuates: every output magnitude is bounded by the
    /// corresponding input magnitude.
    #[test]
    fn output_never_exceeds_input(
        input in prop::collection::vec(-2.0f32..=2.0, 1..600),
        rate_idx in 0usize..3,
    ) {
        let mut gate = make_gate(SAMPLE_RATES[rate_idx], -40.0);
        for &sample in &input {
            let out = gate.process(sample);
            prop_assert!(
                out.abs() <= sample.abs(),
                "output {} louder than input {}",
                out, sample
            );
        }
    }

    /// With the threshold at the disable floor every sample counts as
    /// above, so after the envelope has opened the gate passes any signal
    /// essentially unchanged.
    #[test]
    fn disabled_gate_passes_signal(
        input in prop::collection::vec(-1.0f32..=1.0, 1..256),
        rate_idx in 0usize..3,
    ) {
        let mut gate = make_gate(SAMPLE_RATES[rate_idx], -90.0);

        // Open fully; silence counts as above a zero threshold.
        for _ in 0..20_000 {
            gate.process(0.0);
        }
        prop_assert!(gate.envelope() > 1.0 - 1e-4);

        for &sample in &input {
            let out = gate.process(sample);
            prop_assert!(
                (out - sample).abs() <= sample.abs() * 1e-3,
                "disabled gate altered {} into {}",
                sample, out
            );
        }
    }
}
