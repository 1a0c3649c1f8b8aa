//! Octagonal shape: eight breakpoints, normalized dual plateaus with
//! symmetric offsets.
//!
//! Unlike the other shapes this one is defined only over normalized
//! heights: `k1`, `k2`, `omega1`, `omega2` all live in `[0, 1]` and the
//! membership value stays in `[0, 1]`. Failure signaling is unified with
//! the rest of the family: validation raises instead of reporting a
//! boolean flag.

use super::piecewise::{eval_spans, Piece, Span};
use super::{InvalidParameters, Shape};

/// Octagonal membership parameters.
///
/// Breakpoints `h[0] <= h[1] <= ... <= h[7]` (weak ordering, degenerate
/// widths legal); heights and offsets in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Octagonal {
    pub h: [f64; 8],
    pub k1: f64,
    pub k2: f64,
    pub omega1: f64,
    pub omega2: f64,
}

impl Octagonal {
    pub fn new(h: [f64; 8], k1: f64, k2: f64, omega1: f64, omega2: f64) -> Self {
        Self {
            h,
            k1,
            k2,
            omega1,
            omega2,
        }
    }

    fn spans(&self) -> [Span; 7] {
        let [h0, h1, h2, h3, h4, h5, h6, h7] = self.h;
        let shoulder1 = self.k1 - self.omega1;
        let shoulder2 = self.k2 - self.omega2;
        [
            Span::open_closed(
                h0,
                h1,
                Piece::Ramp {
                    x0: h0,
                    y0: 0.0,
                    x1: h1,
                    y1: shoulder1,
                },
            ),
            Span::open_closed(h1, h2, Piece::Level(shoulder1)),
            Span::open_closed(
                h2,
                h3,
                Piece::Ramp {
                    x0: h2,
                    y0: shoulder1,
                    x1: h3,
                    y1: self.k1,
                },
            ),
            Span::open_closed(h3, h4, Piece::Level(self.k1)),
            Span::open_closed(
                h4,
                h5,
                Piece::Ramp {
                    x0: h4,
                    y0: self.k1,
                    x1: h5,
                    y1: shoulder2,
                },
            ),
            Span::open_closed(h5, h6, Piece::Level(shoulder2)),
            Span::open_closed(
                h6,
                h7,
                Piece::Ramp {
                    x0: h6,
                    y0: shoulder2,
                    x1: h7,
                    y1: 0.0,
                },
            ),
        ]
    }
}

impl Shape for Octagonal {
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
                "breakpoints must satisfy h0 <= h1 <= ... <= h7, got h={:?}",
                self.h
            )));
        }
        if !(0.0..=1.0).contains(&self.k1) || !(0.0..=1.0).contains(&self.k2) {
            return Err(InvalidParameters::new(format!(
                "height parameters k1 and k2 must be in [0, 1], got k1={}, k2={}",
                self.k1, self.k2
            )));
        }
        if !(0.0..=1.0).contains(&self.omega1) || !(0.0..=1.0).contains(&self.omega2) {
            return Err(InvalidParameters::new(format!(
                "weight parameters omega1 and omega2 must be in [0, 1], got omega1={}, omega2={}",
                self.omega1, self.omega2
            )));
        }
        Ok(())
    }

    fn piecewise(&self, x: f64) -> f64 {
        eval_spans(&self.spans(), x)
    }
}

/// Check the octagonal ordering and normalized ranges without evaluating.
pub fn validate_octagonal(
    h: [f64; 8],
    k1: f64,
    k2: f64,
    omega1: f64,
    omega2: f64,
) -> Result<(), InvalidParameters> {
    Octagonal::new(h, k1, k2, omega1, omega2).validate()
}

/// Octagonal membership degree of `x`; validates on every call.
pub fn octagonal_fuzzer(
    x: f64,
    h: [f64; 8],
    k1: f64,
    k2: f64,
    omega1: f64,
    omega2: f64,
) -> Result<f64, InvalidParameters> {
    Octagonal::new(h, k1, k2, omega1, omega2).membership(x)
}
