//! Command-line interface for the content parser.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{ParserOptions, StepNumbering};
use crate::error::{ParserError, Result};
use crate::output::{output_path, render, save_document, OutputFormat};
use crate::parser::ContentParser;
use crate::types::Document;

/// Sopwise content parser - Convert SOP rich-text HTML into structured sections.
#[derive(Parser)]
#[command(name = "sopwise-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse SOP HTML files into flow data.
    Parse {
        /// HTML files to parse
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Output directory (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Number procedure steps across the whole document instead of
        /// restarting after each title section
        #[arg(long)]
        continuous_steps: bool,
    },

    /// Print section and component counts for an SOP HTML file.
    Stats {
        /// HTML file to inspect
        input: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            inputs,
            format,
            output,
            pretty,
            continuous_steps,
        } => {
            let numbering = if continuous_steps {
                StepNumbering::Continuous
            } else {
                StepNumbering::PerTitleSection
            };
            let parser = ContentParser::new()
                .with_options(ParserOptions::new().with_step_numbering(numbering));
            parse_command(&parser, &inputs, format, output.as_deref(), pretty)
        }
        Commands::Stats { input } => stats_command(&input),
    }
}

/// Read and parse one input file.
fn parse_file(parser: &ContentParser, input: &Path) -> Result<Document> {
    let html = fs::read_to_string(input)?;
    parser.parse(&html)
}

/// Check that an output directory exists, creating nothing.
fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    if !output_dir.exists() {
        return Err(ParserError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", output_dir.display()),
        )));
    }
    if !output_dir.is_dir() {
        return Err(ParserError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Output path is not a directory: {}", output_dir.display()),
        )));
    }
    Ok(())
}

/// Execute the parse command.
fn parse_command(
    parser: &ContentParser,
    inputs: &[PathBuf],
    format: OutputFormat,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let Some(output_dir) = output else {
        // Without an output directory, documents go to stdout one after another
        let mut stdout = std::io::stdout().lock();
        for input in inputs {
            let document = parse_file(parser, input)?;
            writeln!(stdout, "{}", render(&document, format, pretty)?)?;
        }
        return Ok(());
    };

    ensure_output_dir(output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let mut failures = 0usize;
    for input in inputs {
        pb.set_message(input.display().to_string());

        let result = parse_file(parser, input).and_then(|document| {
            let path = output_path(output_dir, input, format);
            save_document(&document, &path, format)?;
            Ok((document, path))
        });

        match result {
            Ok((document, path)) => pb.println(format!(
                "{} {} ({} sections) -> {}",
                style("Parsed").green().bold(),
                input.display(),
                document.len(),
                path.display()
            )),
            Err(e) => {
                failures += 1;
                tracing::warn!(input = %input.display(), error = %e, "Failed to parse SOP file");
                pb.println(format!(
                    "{} {}: {e}",
                    style("Failed").red().bold(),
                    input.display()
                ));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!();
    println!(
        "{} {} of {} files to {}",
        style("Saved").green().bold(),
        inputs.len() - failures,
        inputs.len(),
        output_dir.display()
    );
    if failures > 0 {
        println!("  Failures: {}", style(failures).yellow().bold());
    }

    Ok(())
}

/// Execute the stats command.
fn stats_command(input: &Path) -> Result<()> {
    let document = parse_file(&ContentParser::new(), input)?;

    println!("{} {}", style("Stats for").bold(), style(input.display()).cyan());
    println!();
    println!("  Sections: {}", document.len());
    for (index, section) in document.iter().enumerate() {
        println!(
            "    {}. {} ({} components)",
            index + 1,
            style(section.title_text().unwrap_or("(untitled)")).green(),
            section.components.len()
        );
    }

    println!("  Components:");
    for (kind, count) in document.component_counts() {
        println!("    {kind}: {count}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["sopwise-parser", "parse", "sop.html"]);

        let Commands::Parse {
            inputs,
            format,
            output,
            pretty,
            continuous_steps,
        } = cli.command
        else {
            unreachable!("expected parse command");
        };
        assert_eq!(inputs, vec![PathBuf::from("sop.html")]);
        assert_eq!(format, OutputFormat::Json);
        assert!(output.is_none());
        assert!(!pretty);
        assert!(!continuous_steps);
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "sopwise-parser",
            "parse",
            "a.html",
            "b.html",
            "--format",
            "yaml",
            "--output",
            "out",
            "--continuous-steps",
        ]);

        let Commands::Parse {
            inputs,
            format,
            output,
            continuous_steps,
            ..
        } = cli.command
        else {
            unreachable!("expected parse command");
        };
        assert_eq!(inputs.len(), 2);
        assert_eq!(format, OutputFormat::Yaml);
        assert_eq!(output, Some(PathBuf::from("out")));
        assert!(continuous_steps);
    }

    #[test]
    fn test_cli_parse_requires_input() {
        assert!(Cli::try_parse_from(["sopwise-parser", "parse"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["sopwise-parser", "parse", "a.html", "-f", "xml"]).is_err());
    }

    #[test]
    fn test_cli_stats() {
        let cli = Cli::parse_from(["sopwise-parser", "stats", "sop.html"]);
        let Commands::Stats { input } = cli.command else {
            unreachable!("expected stats command");
        };
        assert_eq!(input, PathBuf::from("sop.html"));
    }

    #[test]
    fn test_ensure_output_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(ensure_output_dir(temp_dir.path()).is_ok());
        assert!(ensure_output_dir(&temp_dir.path().join("missing")).is_err());
    }
}
