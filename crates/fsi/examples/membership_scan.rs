//! Text scan of a randomly drawn shape.
//!
//! Purpose
//! - Draw random parameters, scan `x` across the support, and print
//!   `x value` pairs plus a parameter header, ready for gnuplot or a
//!   spreadsheet. No plotting stack involved.
//!
//! Usage
//! - `cargo run -p fsi --example membership_scan -- <shape> [seed] [index]`
//!   where `<shape>` is one of triangular, trapezoidal, hexagonal,
//!   heptagonal, octagonal.

use fsi::sample::{
    draw_heptagonal, draw_hexagonal, draw_octagonal, draw_trapezoidal, draw_triangular, DrawCfg,
    ReplayToken,
};
use fsi::shape::Shape;

const POINTS: usize = 200;

fn main() {
    let mut args = std::env::args().skip(1);
    let shape = args.next().unwrap_or_else(|| "hexagonal".to_string());
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let index: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    let cfg = DrawCfg::default();
    let tok = ReplayToken { seed, index };

    match shape.as_str() {
        "triangular" => {
            let s = draw_triangular(cfg, tok);
            println!("shape=triangular a={} b1={} c={}", s.a, s.b1, s.c);
            dump(&s, s.a, s.c);
        }
        "trapezoidal" => {
            let s = draw_trapezoidal(cfg, tok);
            println!(
                "shape=trapezoidal a={} b1={} b2={} c={}",
                s.a, s.b1, s.b2, s.c
            );
            dump(&s, s.a, s.c);
        }
        "hexagonal" => {
            let s = draw_hexagonal(cfg, tok);
            println!(
                "shape=hexagonal h={:?} ul={} ur={} u={}",
                s.h, s.ul, s.ur, s.u
            );
            dump(&s, s.h[0], s.h[5]);
        }
        "heptagonal" => {
            let s = draw_heptagonal(cfg, tok);
            println!(
                "shape=heptagonal h={:?} k1={} k2={} omega1={} omega2={}",
                s.h, s.k1, s.k2, s.omega1, s.omega2
            );
            dump(&s, s.h[0], s.h[6]);
        }
        "octagonal" => {
            let s = draw_octagonal(cfg, tok);
            println!(
                "shape=octagonal h={:?} k1={} k2={} omega1={} omega2={}",
                s.h, s.k1, s.k2, s.omega1, s.omega2
            );
            dump(&s, s.h[0], s.h[7]);
        }
        other => {
            eprintln!("unknown shape: {other}");
            std::process::exit(2);
        }
    }
}

fn dump(shape: &impl Shape, lo: f64, hi: f64) {
    let margin = (hi - lo) * 0.05;
    let (lo, hi) = (lo - margin, hi + margin);
    let xs = (0..POINTS).map(|i| lo + (hi - lo) * (i as f64) / ((POINTS - 1) as f64));
    let pairs = shape.scan(xs).expect("drawn parameters are valid");
    for (x, v) in pairs {
        println!("{x:.6} {v:.6}");
    }
}
