//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `sidenote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from the desktop host runtime setup.
    println!("sidenote_core ping={}", sidenote_core::ping());
    println!("sidenote_core version={}", sidenote_core::core_version());
}
