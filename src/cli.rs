//! Command-line interface for codelens.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::{Settings, DEFAULT_TEMPLATE};
use crate::report::{self, Outcome};
use crate::runner::Runner;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Heuristic source analyzer.
///
/// Detects the language of each input, counts its structure, estimates
/// complexity, explains it in plain words and produces a commented copy.
#[derive(Parser)]
#[command(name = "codelens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze files, directories or standard input
    Analyze(AnalyzeArgs),
    /// Write a settings file from the default template
    Init(InitArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Files or directories to analyze
    #[arg(required_unless_present = "stdin")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,

    /// Path to settings YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also print the documented code (pretty format)
    #[arg(short, long)]
    pub documented: bool,

    /// Read content from standard input
    #[arg(long, conflicts_with = "paths")]
    pub stdin: bool,

    /// File name to use for detection when reading standard input
    #[arg(long, requires = "stdin")]
    pub filename: Option<String>,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "codelens.yaml")]
    pub output: PathBuf,
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    let settings = match Settings::load(args.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error parsing settings: {}", e);
            return Ok(EXIT_ERROR);
        }
    };
    let runner = Runner::new(settings);

    let outcomes: Vec<Outcome> = if args.stdin {
        let mut content = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut content) {
            eprintln!("Error: failed to read standard input: {}", e);
            return Ok(EXIT_ERROR);
        }
        let label = args.filename.clone().unwrap_or_else(|| "<stdin>".to_string());
        let result = runner.analyze_content(args.filename.as_deref(), &content);
        vec![(PathBuf::from(label), result)]
    } else {
        let mut files = Vec::new();
        for path in &args.paths {
            if !path.exists() {
                eprintln!("Error: cannot access path {:?}", path);
                return Ok(EXIT_ERROR);
            }
            files.extend(runner.collect_files(path)?);
        }
        if files.is_empty() {
            eprintln!("Warning: no files to analyze");
            return Ok(EXIT_SUCCESS);
        }
        runner.analyze_paths(&files)
    };

    match args.format {
        OutputFormat::Json => report::write_json(&outcomes)?,
        OutputFormat::Pretty => report::write_pretty(&outcomes, args.documented),
    }

    if outcomes.iter().any(|(_, o)| o.is_err()) {
        Ok(EXIT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    // Check if output already exists
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    // Create output directory if needed
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, DEFAULT_TEMPLATE) {
        eprintln!("Error: failed to write settings: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to adjust limits and exclusions", args.output.display());
    println!("  2. Run: codelens analyze . --config {}", args.output.display());

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_analyze_args() {
        let cli = Cli::try_parse_from(["codelens", "analyze", "src", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.paths, vec![PathBuf::from("src")]);
                assert_eq!(args.format, OutputFormat::Json);
                assert!(!args.stdin);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_stdin_needs_no_paths() {
        let cli = Cli::try_parse_from(["codelens", "analyze", "--stdin", "--filename", "a.py"]);
        assert!(cli.is_ok());
        assert!(Cli::try_parse_from(["codelens", "analyze"]).is_err());
        assert!(Cli::try_parse_from(["codelens", "analyze", "x", "--filename", "a.py"]).is_err());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("nested").join("codelens.yaml");
        let args = InitArgs {
            output: output.clone(),
        };
        assert_eq!(run_init(&args).unwrap(), EXIT_SUCCESS);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), DEFAULT_TEMPLATE);
        assert_eq!(run_init(&args).unwrap(), EXIT_ERROR);
    }

    #[test]
    fn test_analyze_exit_codes() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("ok.py");
        std::fs::write(&good, "print('hi')\n").unwrap();
        let bad = dir.path().join("bad.py");
        std::fs::write(&bad, [0xff, 0xfe]).unwrap();
        let config = dir.path().join("codelens.yaml");
        std::fs::write(&config, "cache:\n  capacity: 0\n").unwrap();

        let args = AnalyzeArgs {
            paths: vec![good.clone()],
            format: OutputFormat::Json,
            config: Some(config.clone()),
            documented: false,
            stdin: false,
            filename: None,
        };
        assert_eq!(run_analyze(&args).unwrap(), EXIT_SUCCESS);

        let args = AnalyzeArgs {
            paths: vec![good, bad],
            ..args
        };
        assert_eq!(run_analyze(&args).unwrap(), EXIT_FAILED);

        let args = AnalyzeArgs {
            paths: vec![dir.path().join("missing.py")],
            ..args
        };
        assert_eq!(run_analyze(&args).unwrap(), EXIT_ERROR);
    }
}
