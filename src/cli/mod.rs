// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;

pub use args::Args;
pub use output::{format_json, format_report, print_json, print_report};

use anyhow::Context;
use log::{info, warn};

use crate::core::visualization::{save_dashboard, show_image};
use crate::core::SimilarityAnalyzer;

/// Run one comparison: analyse, report, then render
pub fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.feature_config().context("Invalid feature configuration")?;
    let analyzer = SimilarityAnalyzer::with_config(&config)?;

    info!(
        "Comparing {} and {} at {} Hz",
        args.first.display(),
        args.second.display(),
        config.sample_rate
    );

    let result = analyzer
        .compare_files(&args.first, &args.second)
        .with_context(|| {
            format!(
                "Failed to compare {} with {}",
                args.first.display(),
                args.second.display()
            )
        })?;

    if args.json {
        print_json(&result.summary())?;
    } else {
        print_report(&result.similarity)?;
    }

    if args.no_dashboard {
        return Ok(());
    }

    save_dashboard(&result, &args.dashboard_config(), &args.output)
        .with_context(|| format!("Failed to write dashboard to {}", args.output.display()))?;
    if !args.json {
        println!("Dashboard saved to: {}", args.output.display());
    }

    // Best effort: a missing display only warns
    if args.show_dashboard() {
        if let Err(err) = show_image(&args.output) {
            warn!("Dashboard not displayed: {}", err);
        }
    }

    Ok(())
}
