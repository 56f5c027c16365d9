//! Random source abstraction and the bounded perturbations built on it.
//!
//! Everything in the scene that needs randomness takes a `&mut impl RandomSource`
//! so tests can substitute scripted or seeded sequences for `Math.random()`.

/// A source of uniform values in `[0, 1)`.
pub trait RandomSource {
	/// Next uniform sample in `[0, 1)`.
	fn next_f64(&mut self) -> f64;

	/// Uniform sample in `[min, max)`.
	fn range(&mut self, min: f64, max: f64) -> f64 {
		min + self.next_f64() * (max - min)
	}

	/// Symmetric perturbation in `[-amplitude, amplitude)`.
	fn jitter(&mut self, amplitude: f64) -> f64 {
		(self.next_f64() - 0.5) * 2.0 * amplitude
	}

	/// Uniform index into a collection of `len` items. `len` must be non-zero.
	fn pick_index(&mut self, len: usize) -> usize {
		let idx = (self.next_f64() * len as f64) as usize;
		idx.min(len.saturating_sub(1))
	}
}

impl<F: FnMut() -> f64> RandomSource for F {
	fn next_f64(&mut self) -> f64 {
		self()
	}
}

/// Browser-backed source using `Math.random()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
	fn next_f64(&mut self) -> f64 {
		js_sys::Math::random()
	}
}
