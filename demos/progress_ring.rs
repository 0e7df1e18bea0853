//! Progress Ring Example - A signal-driven spritesheet
//!
//! This example demonstrates:
//! - Loading a grid config from a JSON descriptor
//! - Binding a spritesheet to a progress signal
//! - Receiving crop updates as the signal changes
//!
//! Run with: cargo run --example progress_ring
//! Set RUST_LOG=spark_spritesheet=trace to see binding logs.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Print, Stylize},
    terminal::{Clear, ClearType},
};
use spark_signals::signal;
use spark_spritesheet::{spritesheet, GridConfig, SpritesheetProps};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const RING_JSON: &str = r#"{
    "size": 64,
    "count": 60,
    "columns": 6,
    "rows": 6,
    "images": ["ring-page-0.png", "ring-page-1.png"]
}"#;

/// Pass-through props a real host image element would receive.
#[derive(Debug, Clone)]
struct HostImage {
    label: &'static str,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = GridConfig::from_json(RING_JSON)?;
    println!(
        "=== spark-spritesheet Progress Ring ({} cells, {} per page) ===\n",
        config.cell_count(),
        config.cells_per_page()
    );

    let progress = signal(-1.0f64);
    let binding = spritesheet(
        SpritesheetProps::new(config, progress.clone()).with_rest(HostImage { label: "download" }),
    );

    let label = binding.props.label;
    let alpha = progress.clone();

    // Every progress change re-renders one status line
    let stop = binding.subscribe(move |frame| {
        let mut out = io::stdout();
        let drawn = queue!(
            out,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(format!("{label} {:>6.1}%  ", alpha.get().max(0.0) * 100.0).bold()),
            Print(format!("image={} ", frame.image).cyan()),
            Print(format!("offset={} size={}", frame.offset, frame.size)),
        )
        .and_then(|()| out.flush());
        if let Err(err) = drawn {
            warn!(%err, "failed to draw status line");
        }
    });

    thread::sleep(Duration::from_millis(400));
    for step in 0..=60 {
        progress.set(f64::from(step) / 60.0);
        thread::sleep(Duration::from_millis(50));
    }

    stop();
    println!("\n\n=== Done ===");
    Ok(())
}
