use crate::classifier::{
    self, Classification, BULKY_DIMENSION_THRESHOLD, BULKY_VOLUME_THRESHOLD, HEAVY_MASS_THRESHOLD,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::{debug, info, LevelFilter};
use std::io::{self, Write};

#[derive(Parser, Debug, Clone)]
#[command(name = "pkgsort")]
#[command(version, about = "Sort packages into standard, special and rejected stacks", long_about = None)]
pub struct Args {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Classify a single package
    Classify {
        /// Width of the package
        #[arg(allow_negative_numbers = true)]
        width: f64,

        /// Height of the package
        #[arg(allow_negative_numbers = true)]
        height: f64,

        /// Length of the package
        #[arg(allow_negative_numbers = true)]
        length: f64,

        /// Mass of the package
        #[arg(allow_negative_numbers = true)]
        mass: f64,

        /// Show which rules decided the category
        #[arg(long)]
        explain: bool,
    },

    /// Show the bulky and heavy thresholds
    Thresholds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Set up `env_logger` from the verbosity flags, falling back to `RUST_LOG`.
pub fn init_logging(args: &Args) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if args.verbose {
        builder.filter_level(LevelFilter::Debug);
    } else if args.quiet {
        builder.filter_level(LevelFilter::Error);
    }

    // A logger may already be installed when running under tests
    let _ = builder.try_init();
}

pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&args, &mut out)
}

/// Run the selected command, writing its result to `out`.
pub fn execute(args: &Args, out: &mut dyn Write) -> Result<()> {
    match &args.command {
        Commands::Classify {
            width,
            height,
            length,
            mass,
            explain,
        } => {
            debug!(
                "Classifying width={}, height={}, length={}, mass={}",
                width, height, length, mass
            );

            let classification = classifier::explain(*width, *height, *length, *mass)
                .context("Failed to classify package")?;

            info!("Package sorted into {}", classification.category);

            match args.format {
                OutputFormat::Text => write_text(out, &classification, *explain)?,
                OutputFormat::Json => {
                    serde_json::to_writer(&mut *out, &classification)
                        .context("Failed to serialize classification")?;
                    writeln!(out)?;
                }
            }
        }
        Commands::Thresholds => show_thresholds(out, args.format)?,
    }

    Ok(())
}

fn write_text(out: &mut dyn Write, classification: &Classification, explain: bool) -> Result<()> {
    writeln!(out, "{}", classification.category)?;

    if explain {
        match &classification.bulky {
            Some(reason) => writeln!(out, "  {} {}", "bulky:".yellow(), reason)?,
            None => writeln!(out, "  {} no", "bulky:".green())?,
        }

        if classification.heavy {
            writeln!(
                out,
                "  {} mass {} >= {}",
                "heavy:".yellow(),
                classification.mass,
                HEAVY_MASS_THRESHOLD
            )?;
        } else {
            writeln!(out, "  {} no", "heavy:".green())?;
        }
    }

    Ok(())
}

fn show_thresholds(out: &mut dyn Write, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{:<18} {}", "bulky dimension:", BULKY_DIMENSION_THRESHOLD)?;
            writeln!(out, "{:<18} {}", "bulky volume:", BULKY_VOLUME_THRESHOLD)?;
            writeln!(out, "{:<18} {}", "heavy mass:", HEAVY_MASS_THRESHOLD)?;
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "bulky_dimension": BULKY_DIMENSION_THRESHOLD,
                "bulky_volume": BULKY_VOLUME_THRESHOLD,
                "heavy_mass": HEAVY_MASS_THRESHOLD,
            });
            writeln!(out, "{}", value)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(argv)?;
        let mut buf = Vec::new();
        execute(&args, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn test_classify_prints_bare_category() {
        let output = run_to_string(&["pkgsort", "classify", "150", "50", "50", "10"]).unwrap();
        assert_eq!(output, "SPECIAL\n");
    }

    #[test]
    fn test_negative_input_is_parsed_then_rejected() {
        let err = run_to_string(&["pkgsort", "classify", "-1", "10", "10", "5"]).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("must be non-negative"));
        assert!(message.contains("width = -1"));
    }

    #[test]
    fn test_json_output() {
        let output = run_to_string(&[
            "pkgsort", "--format", "json", "classify", "100", "100", "100", "20",
        ])
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["category"], "REJECTED");
        assert_eq!(value["heavy"], true);
        assert_eq!(value["bulky"]["rule"], "volume");
    }

    #[test]
    fn test_explain_lists_rules() {
        colored::control::set_override(false);
        let output =
            run_to_string(&["pkgsort", "classify", "50", "50", "50", "20", "--explain"]).unwrap();
        assert_eq!(output, "SPECIAL\n  bulky: no\n  heavy: mass 20 >= 20\n");
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let result = Args::try_parse_from(["pkgsort", "-v", "-q", "thresholds"]);
        assert!(result.is_err());
    }
}
