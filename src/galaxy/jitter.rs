use fastrand::Rng;

/// Source of the vertical jitter applied to each planet.
///
/// This is the only non-deterministic input of the layout. Production code
/// uses a [`fastrand::Rng`]; tests either seed it or use [`FixedJitter`].
pub trait JitterSource {
    /// A sample from `[0, 1]`.
    fn unit(&mut self) -> f64;
}

impl JitterSource for Rng {
    fn unit(&mut self) -> f64 {
        self.f64()
    }
}

/// Always returns the same sample. `FixedJitter(0.5)` puts every planet on y = 0.
/// Non-finite samples are treated as 0.5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn unit(&mut self) -> f64 {
        if self.0.is_finite() {
            self.0.clamp(0.0, 1.0)
        } else {
            0.5
        }
    }
}

pub fn seeded_rng(seed: Option<u64>) -> Rng {
    if let Some(s) = seed {
        Rng::with_seed(s)
    } else {
        Rng::new()
    }
}

/// Maps a unit sample onto `[-half_height, half_height]`.
#[inline]
pub fn vertical_offset<R: JitterSource + ?Sized>(rng: &mut R, half_height: f64) -> f64 {
    (rng.unit() * 2.0 - 1.0) * half_height
}
