//! Span tables for piecewise-linear membership curves.
//!
//! Purpose
//! - Make region dispatch an explicit, ordered list of spans with per-endpoint
//!   closedness, so each shape's boundary convention (which side of a
//!   breakpoint is closed) can be read off and tested in isolation.
//!
//! Degenerate-width policy
//! - A `Ramp` over a zero-width span short-circuits to its left endpoint
//!   value instead of dividing by zero. Under the half-open conventions used
//!   by the shapes, a zero-width `(lo, hi]` span is simply empty and the
//!   query falls through to the neighbouring span.

/// Value of one region of a piecewise-linear curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Piece {
    /// Constant plateau.
    Level(f64),
    /// Linear interpolation between `(x0, y0)` and `(x1, y1)`.
    Ramp { x0: f64, y0: f64, x1: f64, y1: f64 },
}

impl Piece {
    #[inline]
    pub(crate) fn eval(self, x: f64) -> f64 {
        match self {
            Piece::Level(y) => y,
            Piece::Ramp { x0, y0, x1, y1 } => {
                let width = x1 - x0;
                if width == 0.0 {
                    y0
                } else {
                    y0 + (y1 - y0) * (x - x0) / width
                }
            }
        }
    }
}

/// One region: an interval with explicit endpoint closedness and its value.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Span {
    pub lo: f64,
    pub lo_closed: bool,
    pub hi: f64,
    pub hi_closed: bool,
    pub piece: Piece,
}

impl Span {
    /// `[lo, hi)` — closed on the left (rising-side convention).
    #[inline]
    pub(crate) fn closed_open(lo: f64, hi: f64, piece: Piece) -> Self {
        Self {
            lo,
            lo_closed: true,
            hi,
            hi_closed: false,
            piece,
        }
    }

    /// `(lo, hi]` — closed on the right (falling-side convention).
    #[inline]
    pub(crate) fn open_closed(lo: f64, hi: f64, piece: Piece) -> Self {
        Self {
            lo,
            lo_closed: false,
            hi,
            hi_closed: true,
            piece,
        }
    }

    /// `[lo, hi]` — closed on both sides (plateaus and point spans).
    #[inline]
    pub(crate) fn closed(lo: f64, hi: f64, piece: Piece) -> Self {
        Self {
            lo,
            lo_closed: true,
            hi,
            hi_closed: true,
            piece,
        }
    }

    #[inline]
    pub(crate) fn contains(&self, x: f64) -> bool {
        let above = if self.lo_closed { x >= self.lo } else { x > self.lo };
        let below = if self.hi_closed { x <= self.hi } else { x < self.hi };
        above && below
    }
}

/// Evaluate the first span containing `x`; outside every span the curve is 0.
///
/// Spans are expected non-overlapping, so ordering only matters where two
/// spans share a closed endpoint; listing order is then the tie-break.
#[inline]
pub(crate) fn eval_spans(spans: &[Span], x: f64) -> f64 {
    spans
        .iter()
        .find(|s| s.contains(x))
        .map_or(0.0, |s| s.piece.eval(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_interpolates_endpoints() {
        let r = Piece::Ramp {
            x0: 0.0,
            y0: 0.0,
            x1: 2.0,
            y1: 1.0,
        };
        assert_eq!(r.eval(0.0), 0.0);
        assert_eq!(r.eval(1.0), 0.5);
        assert_eq!(r.eval(2.0), 1.0);
    }

    #[test]
    fn zero_width_ramp_returns_left_value() {
        let r = Piece::Ramp {
            x0: 1.0,
            y0: 0.7,
            x1: 1.0,
            y1: 1.0,
        };
        assert_eq!(r.eval(1.0), 0.7);
    }

    #[test]
    fn endpoint_closedness_is_honoured() {
        let s = Span::closed_open(0.0, 1.0, Piece::Level(0.5));
        assert!(s.contains(0.0));
        assert!(!s.contains(1.0));
        let s = Span::open_closed(0.0, 1.0, Piece::Level(0.5));
        assert!(!s.contains(0.0));
        assert!(s.contains(1.0));
        // Zero-width half-open span is empty; zero-width closed span is a point.
        let s = Span::open_closed(1.0, 1.0, Piece::Level(0.5));
        assert!(!s.contains(1.0));
        let s = Span::closed(1.0, 1.0, Piece::Level(0.5));
        assert!(s.contains(1.0));
    }

    #[test]
    fn first_matching_span_wins_and_outside_is_zero() {
        let spans = [
            Span::closed(1.0, 1.0, Piece::Level(1.0)),
            Span::closed_open(0.0, 1.0, Piece::Level(0.25)),
            Span::open_closed(1.0, 2.0, Piece::Level(0.75)),
        ];
        assert_eq!(eval_spans(&spans, 1.0), 1.0);
        assert_eq!(eval_spans(&spans, 0.5), 0.25);
        assert_eq!(eval_spans(&spans, 1.5), 0.75);
        assert_eq!(eval_spans(&spans, -0.1), 0.0);
        assert_eq!(eval_spans(&spans, 2.1), 0.0);
    }
}
