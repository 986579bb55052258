//! Computes a ham-sandwich cut for a small red/blue point set and prints how
//! the cut splits each color.
//!
//! Usage:
//! ```text
//! cargo run --example cut
//! RUST_LOG=hamcut=trace cargo run --example cut   # show every bisection step
//! ```

use hamcut::{BalanceCheck, Color, Cut, HamSandwichCut, HamCutError, PointSet};

fn main() -> Result<(), HamCutError> {
    // Default: WARN for everything, INFO for hamcut.
    // Override with RUST_LOG env var (e.g. RUST_LOG=hamcut=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hamcut=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let red = PointSet::from_coords(
        Color::Red,
        &[(-1.0, 0.0), (1.0, 2.0), (3.0, -1.0), (0.5, 4.0), (2.5, 1.5)],
    )?;
    let blue = PointSet::from_coords(
        Color::Blue,
        &[(-2.0, 3.0), (0.0, -2.0), (2.0, 1.0), (4.0, 0.5)],
    )?;

    let op = HamSandwichCut::new(red, blue);
    let cut = op.execute()?;
    match cut {
        Cut::Vertical { x } => tracing::info!(x, "vertical cut"),
        Cut::NonVertical { slope, intercept } => tracing::info!(slope, intercept, "cut"),
    }

    let report = BalanceCheck::new(cut, 1e-9).execute(op.red(), op.blue());
    for (color, counts) in [(Color::Red, report.red), (Color::Blue, report.blue)] {
        println!(
            "{color}: {} positive, {} on, {} negative (at most {} per side)",
            counts.positive,
            counts.on,
            counts.negative,
            counts.max_allowed()
        );
    }
    println!("bisects both sets: {}", report.is_bisecting());
    Ok(())
}
