//! Closed-form membership evaluators for polygonal fuzzy sets.
//!
//! Purpose
//! - Provide pure `{validate, membership}` pairs for five piecewise-linear
//!   shapes: triangular, trapezoidal, hexagonal, heptagonal, octagonal.
//! - Each shape encodes its own parameter-ordering invariant and boundary
//!   policy; evaluation is a fixed number of comparisons plus at most one
//!   division, with no shared state between calls.
//!
//! Design
//! - Region dispatch goes through an explicit ordered span table
//!   (`shape::piecewise`) so the closed/open side of every breakpoint is
//!   auditable per shape instead of being buried in nested conditionals.
//! - Validation failures surface as [`shape::InvalidParameters`] with a
//!   reason naming the violated constraint; `membership` re-validates on
//!   every call.

pub mod sample;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::sample::{
        draw_heptagonal, draw_hexagonal, draw_octagonal, draw_trapezoidal, draw_triangular,
        DrawCfg, ReplayToken,
    };
    pub use crate::shape::{
        heptagonal_fuzzer, hexagonal_fuzzer, octagonal_fuzzer, trapezoidal_fuzzer,
        triangular_fuzzer, validate_heptagonal, validate_hexagonal, validate_octagonal,
        validate_trapezoidal, validate_triangular, Heptagonal, Hexagonal, InvalidParameters,
        Octagonal, Shape, Trapezoidal, Triangular,
    };
}
