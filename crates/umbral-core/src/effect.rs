//! Core Effect trait.
//!
//! The [`Effect`] trait is the processing interface of this crate: a
//! consistent surface for single-sample and block-based processing.
//!
//! ## Design Decisions
//!
//! - **Mono processing**: Single `f32` input/output. The gate operates on
//!   one channel; multi-channel material is mixed down or run through
//!   independent instances.
//!
//! - **Object-safe**: `dyn Effect` works for runtime composition, though
//!   static dispatch is preferred for maximum performance.
//!
//! - **No allocations**: All methods are designed to be called in real-time
//!   audio contexts with zero heap allocations.
//!
//! - **Fixed sample rate**: An effect is constructed for one sample rate.
//!   Changing rates means deriving a new configuration and building a new
//!   instance, so every rate-dependent coefficient is validated up front.

/// Core trait for stateful audio processors.
///
/// Implementors process audio samples, either one at a time or in blocks,
/// advancing their internal state by one sample per input sample.
///
/// # Example
///
/// ```rust
/// use umbral_core::Effect;
///
/// struct Attenuator {
///     gain: f32,
/// }
///
/// impl Effect for Attenuator {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.gain
///     }
///
///     fn reset(&mut self) {
///         // No internal state
///     }
/// }
/// ```
pub trait Effect {
    /// Process a single sample.
    ///
    /// This is the core processing function. For effects with internal
    /// state, this advances the state by one sample.
    ///
    /// # Arguments
    /// * `input` - Input sample, typically in range [-1.0, 1.0]
    ///
    /// # Returns
    /// Processed output sample
    fn process(&mut self, input: f32) -> f32;

    /// Process a block of samples.
    ///
    /// Default implementation calls `process()` for each sample in order,
    /// so the result is identical to feeding the samples one at a time.
    /// Effects may override this for more efficient block processing, but
    /// must preserve that equivalence.
    ///
    /// # Arguments
    /// * `input` - Input sample buffer
    /// * `output` - Output sample buffer (must be same length as input)
    ///
    /// # Panics
    /// Default implementation panics in debug builds if
    /// `input.len() != output.len()`
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in-place.
    ///
    /// Convenience method for when input and output are the same buffer.
    /// Default implementation processes each sample in place.
    ///
    /// # Arguments
    /// * `buffer` - Buffer to process in-place
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Reset internal state.
    ///
    /// Clears all internal state without changing parameters, returning the
    /// effect to the condition it was in immediately after construction.
    /// Call between unrelated streams to prevent state leaking across them.
    fn reset(&mut self);
}
