//! resume-grader: score a résumé and suggest improvements.
//!
//! Input is an uploaded file (PDF, DOCX, TXT or MD) or pasted text:
//! - `resume-grader cv.pdf --keywords "React, AWS"`
//! - `resume-grader --text "..." --format json`

mod report;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};

use grader_analyzer::ResumeAnalyzer;
use grader_core::document::FileInput;
use grader_core::options::{parse_keywords, GradeOptions, OutputFormat};
use grader_core::pipeline::{GradeRequest, Pipeline, PipelineBuilder};

#[derive(Parser, Debug)]
#[command(
    name = "resume-grader",
    version,
    about = "Heuristic résumé scoring and suggestions"
)]
struct Cli {
    /// Résumé file (.pdf, .docx, .txt or .md)
    file: Option<PathBuf>,

    /// Pasted résumé text, used when no file is given
    #[arg(long, conflicts_with = "text_file")]
    text: Option<String>,

    /// Read pasted résumé text from a file
    #[arg(long)]
    text_file: Option<PathBuf>,

    /// Comma-separated target keywords, e.g. "React, AWS"
    #[arg(long)]
    keywords: Option<String>,

    /// Output format: text or json (default: text)
    #[arg(long)]
    format: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Dump effective merged config as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

/// Read one TOML config file. Missing files yield `None`; parse errors are
/// logged and ignored.
fn read_config(path: &Path) -> Option<GradeOptions> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<GradeOptions>(&contents) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::warn!("Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}

/// Load config from the global file, then the project-local one.
/// A project-local file fully overrides the global one.
fn load_config() -> GradeOptions {
    let global = dirs::config_dir()
        .map(|dir| dir.join("resume-grader").join("config.toml"))
        .and_then(|path| read_config(&path));
    let local = read_config(Path::new(".resume-grader.toml"));

    local.or(global).unwrap_or_default()
}

/// Apply CLI flags on top of config-loaded options.
/// Only overrides when the CLI flag was explicitly provided.
fn apply_cli_overrides(opts: &mut GradeOptions, cli: &Cli, matches: &ArgMatches) -> Result<()> {
    if matches.value_source("verbose") == Some(ValueSource::CommandLine) {
        opts.verbose = cli.verbose;
    }

    if let Some(ref keywords) = cli.keywords {
        opts.keywords = parse_keywords(keywords);
    }

    if let Some(ref name) = cli.format {
        opts.output = OutputFormat::from_name(name)
            .with_context(|| format!("Unknown output format '{}'. Use text or json.", name))?;
    }

    if cli.pretty {
        opts.pretty = true;
    }

    Ok(())
}

fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(cli.verbose)))
        .init();

    let mut opts = load_config();
    if let Err(e) = apply_cli_overrides(&mut opts, &cli, &matches) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    // Handle --dump-config
    if cli.dump_config {
        match toml::to_string_pretty(&opts) {
            Ok(s) => {
                println!("{}", s);
                process::exit(0);
            }
            Err(e) => {
                eprintln!("Error serializing config: {}", e);
                process::exit(1);
            }
        }
    }

    match run(&cli, &opts) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Grade the requested résumé and render the report.
fn run(cli: &Cli, opts: &GradeOptions) -> Result<String> {
    let request = build_request(cli)?;
    let pipeline = build_pipeline()?;
    let result = pipeline.grade(&request, opts)?;

    let output = match opts.output {
        OutputFormat::Json if opts.pretty => serde_json::to_string_pretty(&result)? + "\n",
        OutputFormat::Json => serde_json::to_string(&result)? + "\n",
        OutputFormat::Text => report::render_text(&result, opts.verbose > 0),
    };
    Ok(output)
}

fn build_request(cli: &Cli) -> Result<GradeRequest> {
    let mut request = GradeRequest::default();

    if let Some(ref path) = cli.file {
        let bytes =
            std::fs::read(path).with_context(|| format!("Cannot read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        log::info!("Grading {} ({} bytes)", name, bytes.len());
        request.file = Some(FileInput::new(name, bytes));
    }

    if let Some(ref text) = cli.text {
        request.pasted_text = Some(text.clone());
    } else if let Some(ref path) = cli.text_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        request.pasted_text = Some(text);
    }

    if let Some(ref keywords) = cli.keywords {
        request = request.with_keywords(keywords.as_str());
    }

    Ok(request)
}

fn build_pipeline() -> Result<Pipeline> {
    let pipeline = PipelineBuilder::new()
        .extractor(Box::new(grader_input_pdf::PdfExtractor))
        .extractor(Box::new(grader_input_docx::DocxExtractor))
        .extractor(Box::new(grader_input_txt::TxtExtractor))
        .analyzer(Box::new(ResumeAnalyzer::new()))
        .progress_reporter(Box::new(|frac, msg| {
            log::debug!("[{:3.0}%] {}", frac * 100.0, msg);
        }))
        .build()?;
    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> (Cli, ArgMatches) {
        let matches = Cli::command().try_get_matches_from(args).unwrap();
        let cli = Cli::from_arg_matches(&matches).unwrap();
        (cli, matches)
    }

    fn grade(args: &[&str]) -> Result<String> {
        let (cli, matches) = parse(args);
        let mut opts = GradeOptions::default();
        apply_cli_overrides(&mut opts, &cli, &matches)?;
        run(&cli, &opts)
    }

    #[test]
    fn test_text_and_text_file_conflict() {
        let result = Cli::command().try_get_matches_from([
            "resume-grader",
            "--text",
            "x",
            "--text-file",
            "y.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let (cli, matches) = parse(&[
            "resume-grader",
            "--keywords",
            "React, ,AWS",
            "--format",
            "JSON",
            "--pretty",
            "-vv",
        ]);
        let mut opts = GradeOptions {
            keywords: vec!["Go".to_string()],
            ..GradeOptions::default()
        };
        apply_cli_overrides(&mut opts, &cli, &matches).unwrap();
        assert_eq!(opts.keywords, vec!["React", "AWS"]);
        assert_eq!(opts.output, OutputFormat::Json);
        assert!(opts.pretty);
        assert_eq!(opts.verbose, 2);
    }

    #[test]
    fn test_config_verbose_kept_without_flag() {
        let (cli, matches) = parse(&["resume-grader"]);
        let mut opts = GradeOptions {
            verbose: 1,
            ..GradeOptions::default()
        };
        apply_cli_overrides(&mut opts, &cli, &matches).unwrap();
        assert_eq!(opts.verbose, 1);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let (cli, matches) = parse(&["resume-grader", "--format", "xml"]);
        let mut opts = GradeOptions::default();
        assert!(apply_cli_overrides(&mut opts, &cli, &matches).is_err());
    }

    #[test]
    fn test_read_config() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.toml");
        std::fs::write(&good, "keywords = [\"Rust\"]\noutput = \"json\"\n").unwrap();
        let opts = read_config(&good).unwrap();
        assert_eq!(opts.keywords, vec!["Rust"]);
        assert_eq!(opts.output, OutputFormat::Json);
        assert!(!opts.pretty);

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "keywords = 3\n").unwrap();
        assert!(read_config(&bad).is_none());
        assert!(read_config(&dir.path().join("missing.toml")).is_none());
    }

    #[test]
    fn test_grade_pasted_text() {
        let output = grade(&[
            "resume-grader",
            "--text",
            "Contact: jane@example.com see https://github.com/jane",
        ])
        .unwrap();
        assert!(output.contains("Contact/Links: 12 — Contact + links"));
        assert!(output.contains("Detected: email ✓ · links ✓ · 4 words · 0 bullets"));
    }

    #[test]
    fn test_grade_txt_file_as_json() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "EXPERIENCE\n- Built React apps\n- Led AWS migration").unwrap();
        let path = file.path().to_str().unwrap();

        let output = grade(&["resume-grader", path, "--keywords", "React, AWS", "--format", "json"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["detected"]["bullets"], 2);
        assert_eq!(json["breakdown"][4]["label"], "Keywords");
        assert_eq!(json["breakdown"][4]["score"], 6);
        assert_eq!(json["typography"]["available"], false);
    }

    #[test]
    fn test_grade_text_file_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pasted.txt");
        std::fs::write(&path, "Skills: Rust").unwrap();
        let output = grade(&["resume-grader", "--text-file", path.to_str().unwrap()]).unwrap();
        assert!(output.contains("Structure: 18 — Has standard sections"));
    }

    #[test]
    fn test_unsupported_file_type() {
        let file = tempfile::Builder::new().suffix(".rtf").tempfile().unwrap();
        let err = grade(&["resume-grader", file.path().to_str().unwrap()]).unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "Unsupported file type '.rtf'. Upload PDF, DOCX, TXT, or MD."
        );
    }

    #[test]
    fn test_nothing_to_grade() {
        let err = grade(&["resume-grader"]).unwrap_err();
        assert_eq!(format!("{:#}", err), "Provide a resume file or paste text.");
    }

    #[test]
    fn test_missing_file() {
        let err = grade(&["resume-grader", "/nonexistent/cv.pdf"]).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Cannot read /nonexistent/cv.pdf"));
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter(0), "warn");
        assert_eq!(log_filter(1), "info");
        assert_eq!(log_filter(5), "debug");
    }
}
