//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};

use cvdok_extract::{extract_text, FileKind};
use cvdok_llm::GeminiClient;
use cvdok_model::ResumeRecord;
use cvdok_ooxml::{ResumeRenderer, Theme};

#[derive(Parser)]
#[command(name = "cvdok")]
#[command(author, version, about = "Standardize resumes into a fixed DOCX layout", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert resume files (.pdf, .docx) into standardized DOCX documents
    Convert {
        /// Input resume files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Directory for the generated documents
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Logo image placed at the top of the sidebar
        #[arg(long)]
        logo: Option<PathBuf>,

        /// Extra style/voice instructions forwarded to the model
        #[arg(long)]
        instructions: Option<String>,
    },

    /// Render a structured record JSON file to DOCX (no model call)
    Render {
        /// Input record JSON file
        input: PathBuf,

        /// Output DOCX file (defaults to the input with a .docx extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Logo image placed at the top of the sidebar
        #[arg(long)]
        logo: Option<PathBuf>,
    },

    /// Extract raw text from a resume file (debugging aid)
    ExtractText {
        /// Input resume file
        input: PathBuf,

        /// Output text file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            inputs,
            output_dir,
            logo,
            instructions,
        } => {
            convert_command(&inputs, &output_dir, logo.as_deref(), instructions.as_deref())?;
        }
        Commands::Render {
            input,
            output,
            logo,
        } => {
            render_command(&input, output.as_deref(), logo.as_deref())?;
        }
        Commands::ExtractText { input, output } => {
            extract_text_command(&input, output.as_deref())?;
        }
    }

    Ok(())
}

/// Execute the convert command: the full pipeline for each input file
///
/// Files are processed independently; a failure on one is reported and the
/// loop moves on to the next.
pub fn convert_command(
    inputs: &[PathBuf],
    output_dir: &Path,
    logo: Option<&Path>,
    instructions: Option<&str>,
) -> Result<()> {
    let client = GeminiClient::from_env()
        .context("A Gemini API key is required for conversion (set GEMINI_API_KEY)")?;

    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let mut converted = 0usize;
    let mut failed = 0usize;

    for input in inputs {
        println!("Processing: {}", input.display());
        match convert_file(&client, input, output_dir, logo, instructions) {
            Ok(path) => {
                converted += 1;
                println!("  Created: {}", path.display());
            }
            Err(e) => {
                failed += 1;
                eprintln!("  Failed: {:#}", e);
            }
        }
    }

    println!();
    println!("Converted {} file(s), {} failure(s)", converted, failed);

    if converted == 0 && failed > 0 {
        anyhow::bail!("No input could be converted");
    }
    Ok(())
}

/// Run one file through extract -> structure -> render and write the result
fn convert_file(
    client: &GeminiClient,
    input: &Path,
    output_dir: &Path,
    logo: Option<&Path>,
    instructions: Option<&str>,
) -> Result<PathBuf> {
    let kind = file_kind(input)?;
    let bytes =
        fs::read(input).with_context(|| format!("Failed to read input: {}", input.display()))?;

    let text = extract_text(&bytes, kind)
        .with_context(|| format!("Failed to extract text from {}", input.display()))?;

    let record = client
        .parse_resume(&text, instructions)
        .context("Failed to structure resume text")?;

    let docx = render_record(&record, logo).context("Failed to render document")?;

    let output_path = output_name(output_dir);
    fs::write(&output_path, &docx)
        .with_context(|| format!("Failed to write output: {}", output_path.display()))?;

    Ok(output_path)
}

/// Execute the render command: record JSON in, DOCX out
pub fn render_command(input: &Path, output: Option<&Path>, logo: Option<&Path>) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let record: ResumeRecord =
        serde_json::from_str(&json).context("Input is not a valid resume record")?;

    let docx = render_record(&record, logo).context("Failed to render document")?;

    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => input.with_extension("docx"),
    };
    fs::write(&output_path, &docx)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("Render complete!");
    println!("  Output: {}", output_path.display());
    println!("  Size: {} bytes", docx.len());

    Ok(())
}

/// Execute the extract-text command
pub fn extract_text_command(input: &Path, output: Option<&Path>) -> Result<()> {
    let kind = file_kind(input)?;
    let bytes =
        fs::read(input).with_context(|| format!("Failed to read input: {}", input.display()))?;

    let text = extract_text(&bytes, kind)
        .with_context(|| format!("Failed to extract text from {}", input.display()))?;

    match output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            println!("  Created: {}", path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}

/// Determine the file kind from the input's extension
fn file_kind(input: &Path) -> Result<FileKind> {
    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    Ok(FileKind::from_tag(&ext)?)
}

/// Render a record, optionally overriding the theme's logo path
fn render_record(record: &ResumeRecord, logo: Option<&Path>) -> cvdok_ooxml::Result<Vec<u8>> {
    let mut theme = Theme::default();
    if let Some(logo) = logo {
        theme.logo_path = logo.to_path_buf();
    }
    ResumeRenderer::new(theme).render(record)
}

/// Pick a timestamped output name, avoiding collisions within the batch
fn output_name(output_dir: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let base = format!("standard_resume_{}", stamp);

    let candidate = output_dir.join(format!("{}.docx", base));
    if !candidate.exists() {
        return candidate;
    }
    let mut n = 1;
    loop {
        let candidate = output_dir.join(format!("{}_{}.docx", base, n));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}
