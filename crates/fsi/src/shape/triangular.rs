//! Triangular shape: three breakpoints, single unit peak.

use super::piecewise::{eval_spans, Piece, Span};
use super::{InvalidParameters, Shape};

/// Triangular membership parameters `a < b1 < c`.
///
/// Rises linearly from 0 at `a` to 1 at the peak `b1`, then falls back to 0
/// at `c`. The peak value is an explicit point span, not a consequence of
/// either linear branch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangular {
    pub a: f64,
    pub b1: f64,
    pub c: f64,
}

impl Triangular {
    pub fn new(a: f64, b1: f64, c: f64) -> Self {
        Self { a, b1, c }
    }

    fn spans(&self) -> [Span; 3] {
        [
            // Peak first: at x == b1 the value is exactly 1.
            Span::closed(self.b1, self.b1, Piece::Level(1.0)),
            Span::closed_open(
                self.a,
                self.b1,
                Piece::Ramp {
                    x0: self.a,
                    y0: 0.0,
                    x1: self.b1,
                    y1: 1.0,
                },
            ),
            Span::open_closed(
                self.b1,
                self.c,
                Piece::Ramp {
                    x0: self.b1,
                    y0: 1.0,
                    x1: self.c,
                    y1: 0.0,
                },
            ),
        ]
    }
}

impl Shape for Triangular {
    fn validate(&self) -> Result<(), InvalidParameters> {
        if !(self.a.is_finite() && self.b1.is_finite() && self.c.is_finite()) {
            return Err(InvalidParameters::new("parameters must be finite"));
        }
        if !(self.a < self.b1 && self.b1 < self.c) {
            return Err(InvalidParameters::new(format!(
                "breakpoints must satisfy a < b1 < c, got a={}, b1={}, c={}",
                self.a, self.b1, self.c
            )));
        }
        Ok(())
    }

    fn piecewise(&self, x: f64) -> f64 {
        eval_spans(&self.spans(), x)
    }
}

/// Check `a < b1 < c` without evaluating.
pub fn validate_triangular(a: f64, b1: f64, c: f64) -> Result<(), InvalidParameters> {
    Triangular::new(a, b1, c).validate()
}

/// Triangular membership degree of `x`; validates on every call.
pub fn triangular_fuzzer(a: f64, b1: f64, c: f64, x: f64) -> Result<f64, InvalidParameters> {
    Triangular::new(a, b1, c).membership(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_triangle_scenario() {
        assert_eq!(triangular_fuzzer(0.0, 1.0, 2.0, 0.5).unwrap(), 0.5);
        assert_eq!(triangular_fuzzer(0.0, 1.0, 2.0, 1.0).unwrap(), 1.0);
        assert_eq!(triangular_fuzzer(0.0, 1.0, 2.0, 1.5).unwrap(), 0.5);
        assert_eq!(triangular_fuzzer(0.0, 1.0, 2.0, 2.5).unwrap(), 0.0);
        assert_eq!(triangular_fuzzer(0.0, 1.0, 2.0, -0.5).unwrap(), 0.0);
    }

    #[test]
    fn peak_is_exactly_one_even_for_awkward_breakpoints() {
        // 0.1 and 0.3 are not exactly representable; the point span still
        // pins the peak to 1.0 exactly.
        let t = Triangular::new(0.1, 0.3, 0.7);
        assert_eq!(t.membership(0.3).unwrap(), 1.0);
    }

    #[test]
    fn endpoints_evaluate_to_zero() {
        let t = Triangular::new(-1.0, 0.0, 3.0);
        assert_eq!(t.membership(-1.0).unwrap(), 0.0);
        assert_eq!(t.membership(3.0).unwrap(), 0.0);
    }

    #[test]
    fn rejects_non_strict_ordering() {
        let err = triangular_fuzzer(1.0, 1.0, 2.0, 0.0).unwrap_err();
        assert!(err.reason().contains("a < b1 < c"));
        assert!(validate_triangular(0.0, 2.0, 1.0).is_err());
        assert!(validate_triangular(0.0, f64::NAN, 1.0).is_err());
    }
}
