//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `questlog_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("questlog_core ping={}", questlog_core::ping());
    println!("questlog_core version={}", questlog_core::core_version());
}
