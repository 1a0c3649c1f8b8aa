//! Heptagonal shape: seven breakpoints, two humps with independent heights
//! and offsets.
//!
//! The offsets produce partial steps instead of pure linear edges: with
//! `omega1 > 0` the curve reaches only `k1 - omega1` at `h2`, then jumps to
//! `k1` and eases back down to `k1 - omega1` at `h3`. The jump at `h2` is
//! part of the shape, not an artifact.

use super::piecewise::{eval_spans, Piece, Span};
use super::{InvalidParameters, Shape};

/// Heptagonal membership parameters.
///
/// Breakpoints `h[0] <= h[1] <= ... <= h[6]` (weak ordering: zero-width
/// regions are legal), hump heights `k1`, `k2 >= 0`, offsets
/// `omega1 in [0, k1]` and `omega2 in [0, k2]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heptagonal {
    pub h: [f64; 7],
    pub k1: f64,
    pub k2: f64,
    pub omega1: f64,
    pub omega2: f64,
}

impl Heptagonal {
    pub fn new(h: [f64; 7], k1: f64, k2: f64, omega1: f64, omega2: f64) -> Self {
        Self {
            h,
            k1,
            k2,
            omega1,
            omega2,
        }
    }

    /// Unit heights and zero offsets: a plain flat-topped outline.
    pub fn with_unit_heights(h: [f64; 7]) -> Self {
        Self::new(h, 1.0, 1.0, 0.0, 0.0)
    }

    fn spans(&self) -> [Span; 6] {
        let [h1, h2, h3, h4, h5, h6, h7] = self.h;
        let Self {
            k1,
            k2,
            omega1,
            omega2,
            ..
        } = *self;
        [
            Span::open_closed(
                h1,
                h2,
                Piece::Ramp {
                    x0: h1,
                    y0: 0.0,
                    x1: h2,
                    y1: k1 - omega1,
                },
            ),
            Span::open_closed(
                h2,
                h3,
                Piece::Ramp {
                    x0: h2,
                    y0: k1,
                    x1: h3,
                    y1: k1 - omega1,
                },
            ),
            Span::open_closed(h3, h4, Piece::Level(k1)),
            Span::open_closed(
                h4,
                h5,
                Piece::Ramp {
                    x0: h4,
                    y0: k2 - omega2,
                    x1: h5,
                    y1: k2,
                },
            ),
            Span::open_closed(
                h5,
                h6,
                Piece::Ramp {
                    x0: h5,
                    y0: k2,
                    x1: h6,
                    y1: omega2,
                },
            ),
            Span::open_closed(
                h6,
                h7,
                Piece::Ramp {
                    x0: h6,
                    y0: omega2,
                    x1: h7,
                    y1: 0.0,
                },
            ),
        ]
    }
}

impl Shape for Heptagonal {
    fn validate(&self) -> Result<(), InvalidParameters> {
        if !(self.h.iter().all(|v| v.is_finite())
            && [self.k1, self.k2, self.omega1, self.omega2]
                .iter()
                .all(|v| v.is_finite()))
        {
            return Err(InvalidParameters::new("parameters must be finite"));
        }
        if !self.h.windows(2).all(|w| w[0] <= w[1]) {
            return Err(InvalidParameters::new(format!(
                "breakpoints must satisfy h1 <= h2 <= ... <= h7, got h={:?}",
                self.h
            )));
        }
        if self.k1 < 0.0 || self.k2 < 0.0 {
            return Err(InvalidParameters::new(format!(
                "height parameters k1 and k2 must be non-negative, got k1={}, k2={}",
                self.k1, self.k2
            )));
        }
        if self.omega1 < 0.0 || self.omega1 > self.k1 {
            return Err(InvalidParameters::new(format!(
                "omega1 must be in [0, k1], got omega1={}, k1={}",
                self.omega1, self.k1
            )));
        }
        if self.omega2 < 0.0 || self.omega2 > self.k2 {
            return Err(InvalidParameters::new(format!(
                "omega2 must be in [0, k2], got omega2={}, k2={}",
                self.omega2, self.k2
            )));
        }
        Ok(())
    }

    fn piecewise(&self, x: f64) -> f64 {
        eval_spans(&self.spans(), x)
    }
}

/// Check the heptagonal ordering and range constraints without evaluating.
pub fn validate_heptagonal(
    h: [f64; 7],
    k1: f64,
    k2: f64,
    omega1: f64,
    omega2: f64,
) -> Result<(), InvalidParameters> {
    Heptagonal::new(h, k1, k2, omega1, omega2).validate()
}

/// Heptagonal membership degree of `x`; validates on every call.
pub fn heptagonal_fuzzer(
    x: f64,
    h: [f64; 7],
    k1: f64,
    k2: f64,
    omega1: f64,
    omega2: f64,
) -> Result<f64, InvalidParameters> {
    Heptagonal::new(h, k1, k2, omega1, omega2).membership(x)
}
