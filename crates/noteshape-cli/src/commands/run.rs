//! Run command implementation.

use crate::batch::{run_batch, BatchOptions};
use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the run command.
pub fn execute_run(args: RunArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let options = BatchOptions {
        input_dir: args.input_dir.unwrap_or_else(|| config.input_dir.clone()),
        output_dir: args.output_dir.unwrap_or_else(|| config.output_dir.clone()),
        output_suffix: config.output_suffix.clone(),
        recursive: args.recursive || config.recursive,
    };

    let registry = super::build_registry(config)?;
    let report = run_batch(&registry, &options)?;

    if report.total() == 0 {
        println!(
            "{}",
            formatter.warning(&format!(
                "No JSON files found in '{}'",
                options.input_dir.display()
            ))
        );
        return Ok(());
    }

    println!("{}", formatter.format_report(&report)?);
    if !formatter.is_quiet() {
        let summary = report.summary();
        if report.processed() == report.total() {
            println!("{}", formatter.success(&summary));
        } else {
            println!("{}", formatter.warning(&summary));
        }
        println!(
            "{}",
            formatter.info(&format!("Results saved to '{}'", options.output_dir.display()))
        );
    }

    Ok(())
}
