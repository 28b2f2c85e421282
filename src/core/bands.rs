//! Ordered table of scroll-progress bands, each with its own pose policy.
//!
//! Bands are half-open `[lower, upper)` and evaluated in order; the first one
//! containing the progress wins. The last band also accepts `progress == upper`
//! so that a fully scrolled section still maps to a band.

use super::motion::Transform;
use smallvec::SmallVec;

/// Inputs handed to a band policy.
#[derive(Clone, Copy, Debug)]
pub struct BandInput {
    /// Progress renormalized into [0, 1] within the band.
    pub local: f32,
    /// Seconds since the animator started.
    pub time: f32,
    /// Rest pose of the object.
    pub base: Transform,
}

pub type BandPolicy = fn(&BandInput, &mut Transform);

#[derive(Clone, Copy)]
pub struct Band {
    pub name: &'static str,
    pub lower: f32,
    pub upper: f32,
    pub policy: BandPolicy,
}

impl std::fmt::Debug for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Band")
            .field("name", &self.name)
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

impl Band {
    #[inline]
    pub fn local(&self, progress: f32) -> f32 {
        let span = self.upper - self.lower;
        if span <= 0.0 {
            return 0.0;
        }
        ((progress - self.lower) / span).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct BandTable {
    bands: SmallVec<[Band; 4]>,
}

impl BandTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_band(mut self, name: &'static str, lower: f32, upper: f32, policy: BandPolicy) -> Self {
        self.bands.push(Band {
            name,
            lower,
            upper,
            policy,
        });
        self
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Index of the band covering `progress`, if any.
    pub fn select(&self, progress: f32) -> Option<usize> {
        let last = self.bands.len().checked_sub(1)?;
        self.bands.iter().enumerate().find_map(|(i, b)| {
            let below_upper = progress < b.upper || (i == last && progress <= b.upper);
            (progress >= b.lower && below_upper).then_some(i)
        })
    }

    /// Apply the covering band's policy. Returns the chosen index, or `None`
    /// (transform untouched) when no band covers `progress`.
    pub fn apply(&self, progress: f32, time: f32, base: Transform, out: &mut Transform) -> Option<usize> {
        let i = self.select(progress)?;
        let band = &self.bands[i];
        let input = BandInput {
            local: band.local(progress),
            time,
            base,
        };
        (band.policy)(&input, out);
        Some(i)
    }
}
