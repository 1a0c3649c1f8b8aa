//! Polygonal membership shapes (the core evaluators).
//!
//! Purpose
//! - One module per shape, each carrying a params struct with a `validate`
//!   and a piecewise evaluator, plus thin free-function wrappers
//!   (`*_fuzzer`, `validate_*`) for callers that prefer flat arguments.
//!
//! Why this design
//! - The five shapes share only a pattern (ordered breakpoints + span
//!   dispatch), not code paths: ordering strictness and boundary sides are
//!   per-shape constants and deliberately not generalized across shapes.
//! - All failures go through [`InvalidParameters`]; no shape reports
//!   validity as a boolean, and `membership` never trusts a prior
//!   validation.

mod error;
pub mod heptagonal;
pub mod hexagonal;
pub mod octagonal;
mod piecewise;
pub mod trapezoidal;
pub mod triangular;

pub use error::InvalidParameters;
pub use heptagonal::{heptagonal_fuzzer, validate_heptagonal, Heptagonal};
pub use hexagonal::{hexagonal_fuzzer, validate_hexagonal, Hexagonal};
pub use octagonal::{octagonal_fuzzer, validate_octagonal, Octagonal};
pub use trapezoidal::{trapezoidal_fuzzer, validate_trapezoidal, Trapezoidal};
pub use triangular::{triangular_fuzzer, validate_triangular, Triangular};

/// Common surface of every membership shape.
///
/// `membership` is the checked entry point: it re-validates the parameters
/// on every call and only then evaluates. `piecewise` is the raw evaluator
/// and assumes `validate` has passed; with malformed parameters its region
/// table may be inconsistent (it still never divides by zero).
pub trait Shape {
    /// Check the shape's ordering and range invariants.
    fn validate(&self) -> Result<(), InvalidParameters>;

    /// Evaluate the piecewise-linear curve at `x`, assuming valid parameters.
    fn piecewise(&self, x: f64) -> f64;

    /// Validate, then evaluate the membership degree at `x`.
    fn membership(&self, x: f64) -> Result<f64, InvalidParameters> {
        self.validate()?;
        Ok(self.piecewise(x))
    }

    /// Convenience batch evaluation: validate once, then map the inputs.
    ///
    /// Same results as calling `membership` per point, minus the repeated
    /// validation. Not a vectorization contract.
    fn scan<I>(&self, xs: I) -> Result<Vec<(f64, f64)>, InvalidParameters>
    where
        I: IntoIterator<Item = f64>,
        Self: Sized,
    {
        self.validate()?;
        Ok(xs.into_iter().map(|x| (x, self.piecewise(x))).collect())
    }
}
