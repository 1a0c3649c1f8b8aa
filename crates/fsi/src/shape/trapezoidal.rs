//! Trapezoidal shape: four breakpoints, flat-top plateau at 1.

use super::piecewise::{eval_spans, Piece, Span};
use super::{InvalidParameters, Shape};

/// Trapezoidal membership parameters `a < b1 <= b2 < c`.
///
/// The plateau `[b1, b2]` may have zero width, degenerating to a triangle
/// with no discontinuity at the shared point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trapezoidal {
    pub a: f64,
    pub b1: f64,
    pub b2: f64,
    pub c: f64,
}

impl Trapezoidal {
    pub fn new(a: f64, b1: f64, b2: f64, c: f64) -> Self {
        Self { a, b1, b2, c }
    }

    fn spans(&self) -> [Span; 3] {
        [
            Span::closed(self.b1, self.b2, Piece::Level(1.0)),
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
                self.b2,
                self.c,
                Piece::Ramp {
                    x0: self.b2,
                    y0: 1.0,
                    x1: self.c,
                    y1: 0.0,
                },
            ),
        ]
    }
}

impl Shape for Trapezoidal {
    fn validate(&self) -> Result<(), InvalidParameters> {
        if ![self.a, self.b1, self.b2, self.c]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(InvalidParameters::new("parameters must be finite"));
        }
        if !(self.a < self.b1 && self.b1 <= self.b2 && self.b2 < self.c) {
            return Err(InvalidParameters::new(format!(
                "breakpoints must satisfy a < b1 <= b2 < c, got a={}, b1={}, b2={}, c={}",
                self.a, self.b1, self.b2, self.c
            )));
        }
        Ok(())
    }

    fn piecewise(&self, x: f64) -> f64 {
        eval_spans(&self.spans(), x)
    }
}

/// Check `a < b1 <= b2 < c` without evaluating.
pub fn validate_trapezoidal(a: f64, b1: f64, b2: f64, c: f64) -> Result<(), InvalidParameters> {
    Trapezoidal::new(a, b1, b2, c).validate()
}

/// Trapezoidal membership degree of `x`; validates on every call.
pub fn trapezoidal_fuzzer(
    a: f64,
    b1: f64,
    b2: f64,
    c: f64,
    x: f64,
) -> Result<f64, InvalidParameters> {
    Trapezoidal::new(a, b1, b2, c).membership(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_trapezoid_scenario() {
        assert_eq!(trapezoidal_fuzzer(0.0, 1.0, 2.0, 3.0, 1.5).unwrap(), 1.0);
        assert_eq!(trapezoidal_fuzzer(0.0, 1.0, 2.0, 3.0, 0.5).unwrap(), 0.5);
        assert_eq!(trapezoidal_fuzzer(0.0, 1.0, 2.0, 3.0, 2.5).unwrap(), 0.5);
        assert_eq!(trapezoidal_fuzzer(0.0, 1.0, 2.0, 3.0, 3.5).unwrap(), 0.0);
    }

    #[test]
    fn plateau_endpoints_are_one() {
        let t = Trapezoidal::new(0.0, 1.0, 2.0, 3.0);
        assert_eq!(t.membership(1.0).unwrap(), 1.0);
        assert_eq!(t.membership(2.0).unwrap(), 1.0);
    }

    #[test]
    fn zero_width_plateau_degenerates_to_triangle() {
        let t = Trapezoidal::new(0.0, 1.0, 1.0, 2.0);
        assert_eq!(t.membership(1.0).unwrap(), 1.0);
        assert_eq!(t.membership(0.5).unwrap(), 0.5);
        assert_eq!(t.membership(1.5).unwrap(), 0.5);
    }

    #[test]
    fn rejects_bad_orderings() {
        let err = validate_trapezoidal(1.0, 1.0, 2.0, 3.0).unwrap_err();
        assert!(err.reason().contains("a < b1 <= b2 < c"));
        assert!(validate_trapezoidal(0.0, 2.0, 1.0, 3.0).is_err());
        assert!(validate_trapezoidal(0.0, 1.0, 3.0, 3.0).is_err());
    }
}
