//! Hexagonal shape: six breakpoints, shoulders at `ul`/`ur` around a peak
//! plateau at `u`.
//!
//! Boundary convention
//! - The rising side uses left-closed spans `[h_i, h_{i+1})`, the falling
//!   side right-closed spans `(h_i, h_{i+1}]`, matching the shape's inherent
//!   left/right asymmetry (`ul` vs `ur`).

use super::piecewise::{eval_spans, Piece, Span};
use super::{InvalidParameters, Shape};

/// Hexagonal membership parameters.
///
/// Breakpoints `h[0] < h[1] < ... < h[5]` (strict on every adjacent pair:
/// the shape requires non-zero-width edges), shoulder heights `ul` (left)
/// and `ur` (right), peak height `u` dominating both shoulders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hexagonal {
    pub h: [f64; 6],
    pub ul: f64,
    pub ur: f64,
    pub u: f64,
}

impl Hexagonal {
    pub fn new(h: [f64; 6], ul: f64, ur: f64, u: f64) -> Self {
        Self { h, ul, ur, u }
    }

    fn spans(&self) -> [Span; 5] {
        let [h1, h2, h3, h4, h5, h6] = self.h;
        [
            Span::closed_open(
                h1,
                h2,
                Piece::Ramp {
                    x0: h1,
                    y0: 0.0,
                    x1: h2,
                    y1: self.ul,
                },
            ),
            Span::closed_open(
                h2,
                h3,
                Piece::Ramp {
                    x0: h2,
                    y0: self.ul,
                    x1: h3,
                    y1: self.u,
                },
            ),
            Span::closed(h3, h4, Piece::Level(self.u)),
            Span::open_closed(
                h4,
                h5,
                Piece::Ramp {
                    x0: h4,
                    y0: self.u,
                    x1: h5,
                    y1: self.ur,
                },
            ),
            Span::open_closed(
                h5,
                h6,
                Piece::Ramp {
                    x0: h5,
                    y0: self.ur,
                    x1: h6,
                    y1: 0.0,
                },
            ),
        ]
    }
}

impl Shape for Hexagonal {
    fn validate(&self) -> Result<(), InvalidParameters> {
        if !(self.h.iter().all(|v| v.is_finite())
            && self.ul.is_finite()
            && self.ur.is_finite()
            && self.u.is_finite())
        {
            return Err(InvalidParameters::new("parameters must be finite"));
        }
        if !self.h.windows(2).all(|w| w[0] < w[1]) {
            return Err(InvalidParameters::new(format!(
                "breakpoints must be strictly increasing, got h={:?}",
                self.h
            )));
        }
        if !(self.ul < self.u && self.u > self.ur) {
            return Err(InvalidParameters::new(format!(
                "heights must satisfy ul < u > ur, got ul={}, u={}, ur={}",
                self.ul, self.u, self.ur
            )));
        }
        Ok(())
    }

    fn piecewise(&self, x: f64) -> f64 {
        eval_spans(&self.spans(), x)
    }
}

/// Check the strict breakpoint ordering and `ul < u > ur` without evaluating.
pub fn validate_hexagonal(
    h: [f64; 6],
    ul: f64,
    ur: f64,
    u: f64,
) -> Result<(), InvalidParameters> {
    Hexagonal::new(h, ul, ur, u).validate()
}

/// Hexagonal membership degree of `x`; validates on every call.
pub fn hexagonal_fuzzer(
    h: [f64; 6],
    ul: f64,
    ur: f64,
    u: f64,
    x: f64,
) -> Result<f64, InvalidParameters> {
    Hexagonal::new(h, ul, ur, u).membership(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Hexagonal {
        Hexagonal::new([0.0, 1.0, 2.0, 3.0, 4.0, 5.0], 0.2, 0.3, 1.0)
    }

    #[test]
    fn plateau_region_is_peak_height() {
        assert_eq!(
            hexagonal_fuzzer([0.0, 1.0, 2.0, 3.0, 4.0, 5.0], 0.2, 0.3, 1.0, 2.5).unwrap(),
            1.0
        );
        assert_eq!(unit().membership(2.0).unwrap(), 1.0);
        assert_eq!(unit().membership(3.0).unwrap(), 1.0);
    }

    #[test]
    fn shoulder_ramps_hit_their_heights() {
        let s = unit();
        assert_eq!(s.membership(0.5).unwrap(), 0.1); // halfway up to ul
        assert_eq!(s.membership(1.0).unwrap(), 0.2); // ul at h2
        // Halfway from ul to u; 0.2 + 0.8/2 is not exactly representable.
        assert!((s.membership(1.5).unwrap() - 0.6).abs() < 1e-12);
        assert_eq!(s.membership(4.0).unwrap(), 0.3); // ur at h5
        assert_eq!(s.membership(4.5).unwrap(), 0.15); // halfway down from ur
    }

    #[test]
    fn outside_support_is_zero() {
        let s = unit();
        assert_eq!(s.membership(-0.1).unwrap(), 0.0);
        assert_eq!(s.membership(0.0).unwrap(), 0.0);
        assert_eq!(s.membership(5.0).unwrap(), 0.0);
        assert_eq!(s.membership(5.1).unwrap(), 0.0);
    }

    #[test]
    fn rejects_non_strict_breakpoints() {
        let err = validate_hexagonal([0.0, 1.0, 1.0, 3.0, 4.0, 5.0], 0.2, 0.3, 1.0).unwrap_err();
        assert!(err.reason().contains("strictly increasing"));
    }

    #[test]
    fn rejects_peak_not_dominating_shoulders() {
        let err = validate_hexagonal([0.0, 1.0, 2.0, 3.0, 4.0, 5.0], 1.0, 0.3, 1.0).unwrap_err();
        assert!(err.reason().contains("ul < u > ur"));
        assert!(validate_hexagonal([0.0, 1.0, 2.0, 3.0, 4.0, 5.0], 0.2, 1.5, 1.0).is_err());
    }
}
