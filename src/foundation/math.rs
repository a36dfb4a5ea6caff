/// Smallest span accepted as a ratio denominator.
pub const SPAN_EPSILON: f64 = 1e-4;

/// Clamp into `[0, 1]`, mapping `NaN` to `0`.
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Position of `v` inside `[start, end]` as a `[0, 1]` fraction.
///
/// Zero or negative spans are guarded with [`SPAN_EPSILON`], so the result is a step at `start`
/// instead of `NaN`.
pub fn normalize(v: f64, start: f64, end: f64) -> f64 {
    clamp01((v - start) / (end - start).max(SPAN_EPSILON))
}

/// Ratio `num / den` that resolves to `fallback` when the span is empty.
pub fn ratio_or(num: f64, den: f64, fallback: f64) -> f64 {
    if den > 0.0 && den.is_finite() {
        num / den
    } else {
        fallback
    }
}

/// Linear interpolation.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Deterministic SplitMix64 generator for particle spawn positions and densities.
#[derive(Clone, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seeded generator; equal seeds produce equal sequences.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform sample in `[0, 1)` with 53 bits of precision.
    pub fn next_f64_01(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform sample in `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64_01()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
