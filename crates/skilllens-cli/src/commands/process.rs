//! Process command - extract fields from a single resume.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info};

use skilllens_core::{
    DocumentDecoder, DocumentFormat, ExtractionResult, Field, ResumeParser, SkillLensConfig,
    SkillStrategy,
};

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF, DOCX or text), or `-` for text on stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Declared MIME type (default: guessed from extension or content)
    #[arg(long)]
    mime: Option<String>,

    /// Skill matching strategy: section or document
    #[arg(long)]
    strategy: Option<SkillStrategy>,

    /// JSON skill vocabulary replacing the built-in list
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Report fields that could not be found
    #[arg(long)]
    show_missing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// Extraction result together with what was uploaded.
#[derive(Debug, Serialize)]
pub struct ProcessReport {
    pub file_name: String,
    pub format: DocumentFormat,
    pub size_bytes: usize,
    pub page_count: Option<u32>,
    pub result: ExtractionResult,
    #[serde(skip)]
    missing: Vec<Field>,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(strategy) = args.strategy {
        config.extraction.skill_strategy = strategy;
    }
    if let Some(vocabulary) = &args.vocabulary {
        config.extraction.vocabulary_path = Some(vocabulary.clone());
    }

    let (file_name, data, mime) = read_input(&args)?;
    info!("Processing {} ({} bytes)", file_name, data.len());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")?
            .progress_chars("##-"),
    );

    pb.set_message("Decoding document...");
    pb.set_position(10);

    let report = tokio::task::spawn_blocking(move || extract(file_name, data, &mime, &config)).await??;

    pb.finish_with_message("Done");

    if args.show_missing && !report.missing.is_empty() {
        eprintln!("{}", style("Missing fields:").yellow());
        for field in &report.missing {
            eprintln!("  - {}", field);
        }
    }

    let output = format_report(&report, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read the input and work out its declared MIME type.
fn read_input(args: &ProcessArgs) -> anyhow::Result<(String, Vec<u8>, String)> {
    if args.input == Path::new("-") {
        let mut data = Vec::new();
        std::io::stdin().read_to_end(&mut data)?;
        let mime = args
            .mime
            .clone()
            .unwrap_or_else(|| DocumentFormat::PlainText.mime_type().to_string());
        return Ok(("stdin".to_string(), data, mime));
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let data = fs::read(&args.input)?;
    let mime = match &args.mime {
        Some(mime) => mime.clone(),
        None => DocumentFormat::from_path(&args.input)
            .map(|f| f.mime_type().to_string())
            .unwrap_or_default(),
    };
    let file_name = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.display().to_string());

    Ok((file_name, data, mime))
}

/// Decode the upload and run the extraction pipeline.
fn extract(
    file_name: String,
    data: Vec<u8>,
    mime: &str,
    config: &SkillLensConfig,
) -> anyhow::Result<ProcessReport> {
    let decoder = DocumentDecoder::from_config(&config.document);
    let document = decoder.decode_to_text(&data, mime)?;

    if document.is_empty() {
        anyhow::bail!("No text could be extracted from {}", file_name);
    }

    let parser = ResumeParser::from_config(&config.extraction)?;
    let parsed = parser.parse(&document.text);

    debug!("Extraction took {}ms", parsed.processing_time_ms);

    Ok(ProcessReport {
        file_name,
        format: document.format,
        size_bytes: data.len(),
        page_count: document.page_count,
        result: parsed.fields,
        missing: parsed.missing,
    })
}

fn format_report(report: &ProcessReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

fn format_csv(report: &ProcessReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    let result = &report.result;

    wtr.write_record(["file_name", "format", "name", "email", "phone", "skills"])?;
    wtr.write_record([
        report.file_name.as_str(),
        report.format.to_string().as_str(),
        result.name.as_deref().unwrap_or_default(),
        result.email.as_deref().unwrap_or_default(),
        result.phone.as_deref().unwrap_or_default(),
        result.skills.join("; ").as_str(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &ProcessReport) -> String {
    let result = &report.result;
    let mut output = String::new();

    output.push_str(&format!(
        "File: {} ({}, {} bytes)\n",
        report.file_name, report.format, report.size_bytes
    ));
    if let Some(pages) = report.page_count {
        output.push_str(&format!("Pages: {}\n", pages));
    }
    output.push('\n');

    output.push_str(&format!("Name:  {}\n", result.name.as_deref().unwrap_or("-")));
    output.push_str(&format!("Email: {}\n", result.email.as_deref().unwrap_or("-")));
    output.push_str(&format!("Phone: {}\n", result.phone.as_deref().unwrap_or("-")));

    if result.skills.is_empty() {
        output.push_str("Skills: -\n");
    } else {
        output.push_str("Skills:\n");
        for skill in &result.skills {
            output.push_str(&format!("  - {}\n", skill));
        }
    }

    output
}
