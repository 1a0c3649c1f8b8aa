//! Reproducible random shape parameters (replay tokens).
//!
//! Purpose
//! - Provide deterministic parameter streams for benchmarks, scans, and
//!   randomized tests. Every draw is keyed by a replay token so a sample
//!   can be regenerated exactly.
//!
//! Model
//! - Breakpoints are built as a random origin plus positive gaps; gaps get
//!   a bounded shrink/stretch jitter. Shapes with strict ordering draw
//!   gaps bounded away from zero; weakly ordered shapes may draw
//!   zero-width regions.
//! - Heights and offsets are drawn inside each shape's own valid ranges,
//!   so samples are valid by construction.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shape::{Heptagonal, Hexagonal, Octagonal, Trapezoidal, Triangular};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Sampler configuration shared by all shapes.
#[derive(Clone, Copy, Debug)]
pub struct DrawCfg {
    /// Range for the leftmost breakpoint.
    pub origin_min: f64,
    pub origin_max: f64,
    /// Base gap between adjacent breakpoints before jitter. `gap_min` is
    /// the floor for strictly ordered edges; weakly ordered regions draw
    /// from zero instead.
    pub gap_min: f64,
    pub gap_max: f64,
    /// Probability of shrinking a gap (by 0.4–0.9) instead of stretching
    /// it (by 1.0–1.8).
    pub shrink_prob: f64,
}

impl Default for DrawCfg {
    fn default() -> Self {
        Self {
            origin_min: 0.0,
            origin_max: 5.0,
            gap_min: 0.1,
            gap_max: 5.0,
            shrink_prob: 0.4,
        }
    }
}

impl DrawCfg {
    /// Leftmost breakpoint. An empty or inverted range degenerates to
    /// `origin_min` instead of panicking inside `gen_range`.
    fn origin<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.origin_max > self.origin_min {
            rng.gen_range(self.origin_min..self.origin_max)
        } else {
            self.origin_min
        }
    }

    /// One jittered gap; `strict` keeps the width bounded away from zero.
    /// Inverted gap ranges degenerate to the floor.
    fn gap<R: Rng>(&self, rng: &mut R, strict: bool) -> f64 {
        let lo = if strict { self.gap_min.max(1e-9) } else { 0.0 };
        let base = if self.gap_max > lo {
            rng.gen_range(lo..self.gap_max)
        } else {
            lo
        };
        let factor = if rng.gen::<f64>() < self.shrink_prob {
            rng.gen_range(0.4..0.9)
        } else {
            rng.gen_range(1.0..1.8)
        };
        base * factor
    }

    fn breakpoints<R: Rng, const N: usize>(&self, rng: &mut R, strict: bool) -> [f64; N] {
        let mut h = [self.origin(rng); N];
        for i in 1..N {
            h[i] = h[i - 1] + self.gap(rng, strict);
        }
        h
    }
}

/// Draw triangular parameters (`a < b1 < c`).
pub fn draw_triangular(cfg: DrawCfg, tok: ReplayToken) -> Triangular {
    let mut rng = tok.to_std_rng();
    let [a, b1, c] = cfg.breakpoints(&mut rng, true);
    Triangular::new(a, b1, c)
}

/// Draw trapezoidal parameters; the plateau gap may come out zero-width.
pub fn draw_trapezoidal(cfg: DrawCfg, tok: ReplayToken) -> Trapezoidal {
    let mut rng = tok.to_std_rng();
    let a = cfg.origin(&mut rng);
    let b1 = a + cfg.gap(&mut rng, true);
    let b2 = b1 + cfg.gap(&mut rng, false);
    let c = b2 + cfg.gap(&mut rng, true);
    Trapezoidal::new(a, b1, b2, c)
}

/// Draw hexagonal parameters: strict breakpoints, shoulders strictly below
/// the peak.
pub fn draw_hexagonal(cfg: DrawCfg, tok: ReplayToken) -> Hexagonal {
    let mut rng = tok.to_std_rng();
    let h = cfg.breakpoints(&mut rng, true);
    let u = rng.gen_range(0.5..1.5);
    let ul = u * rng.gen_range(0.0..0.9);
    let ur = u * rng.gen_range(0.0..0.9);
    Hexagonal::new(h, ul, ur, u)
}

/// Draw heptagonal parameters: weak ordering, offsets within `[0, k]`.
pub fn draw_heptagonal(cfg: DrawCfg, tok: ReplayToken) -> Heptagonal {
    let mut rng = tok.to_std_rng();
    let h = cfg.breakpoints(&mut rng, false);
    let k1 = rng.gen_range(0.5..1.5);
    let k2 = rng.gen_range(0.5..1.5);
    let omega1 = k1 * rng.gen_range(0.0..1.0);
    let omega2 = k2 * rng.gen_range(0.0..1.0);
    Heptagonal::new(h, k1, k2, omega1, omega2)
}

/// Draw octagonal parameters: weak ordering, normalized heights, offsets
/// kept within `[0, k]` so shoulder levels stay non-negative.
pub fn draw_octagonal(cfg: DrawCfg, tok: ReplayToken) -> Octagonal {
    let mut rng = tok.to_std_rng();
    let h = cfg.breakpoints(&mut rng, false);
    let k1 = rng.gen_range(0.1..1.0);
    let k2 = rng.gen_range(0.1..1.0);
    let omega1 = k1 * rng.gen_range(0.0..1.0);
    let omega2 = k2 * rng.gen_range(0.0..1.0);
    Octagonal::new(h, k1, k2, omega1, omega2)
}
