//! mallard CLI - renders parsed documents to Mallard pages

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use mallard_backend::{
    parse_json, ConverterRegistry, Document, RenderOptions, RenderResult, RenderStats,
};

const DEFAULT_BACKEND: &str = "mallard";

#[derive(Parser)]
#[command(name = "mallard")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render parsed AsciiDoc documents (JSON) to Mallard pages", long_about = None)]
struct Cli {
    /// Input document as JSON ("-" reads stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    render: RenderArgs,

    /// Raise log verbosity
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args, Clone, Default)]
struct RenderArgs {
    /// Output file (defaults to the input name with the backend suffix)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Render only the body, without the page envelope
    #[arg(long)]
    embedded: bool,

    /// Omit checked/unchecked glyphs on checklist items
    #[arg(long)]
    no_checklist_markers: bool,

    /// Print node statistics after rendering
    #[arg(long)]
    stats: bool,

    /// Write the output to stdout instead of a file
    #[arg(long)]
    stdout: bool,

    /// Backend to render with
    #[arg(short, long, env = "MALLARD_BACKEND", default_value = DEFAULT_BACKEND)]
    backend: String,
}

impl RenderArgs {
    fn options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_standalone(!self.embedded)
            .with_checklist_markers(!self.no_checklist_markers)
            .with_stats(self.stats)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document (the default command)
    Convert {
        /// Input document as JSON ("-" reads stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Show document information
    Info {
        /// Input document as JSON ("-" reads stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available backends
    Backends,

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Some(Commands::Convert { input, render }) => cmd_convert(&input, &render),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Backends) => {
            cmd_backends();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, &cli.render)
            } else {
                println!("{}", "Usage: mallard <FILE.json> [-o OUTPUT]".yellow());
                println!("       mallard --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_document(input: &Path) -> mallard_backend::Result<Document> {
    let json = if input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(input)?
    };
    let doc = parse_json(&json)?;
    log::debug!(
        "Loaded {} top-level blocks and {} attributes from {}",
        doc.blocks.len(),
        doc.attributes.len(),
        input.display()
    );
    Ok(doc)
}

/// Output path for an input: the input stem plus the backend suffix.
fn default_output(input: &Path, suffix: &str) -> PathBuf {
    if input.as_os_str() == "-" {
        return PathBuf::from(format!("stdin{}", suffix));
    }
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{}{}", stem, suffix))
}

fn render_document(
    registry: &ConverterRegistry,
    doc: &Document,
    args: &RenderArgs,
) -> mallard_backend::Result<RenderResult> {
    log::debug!("Rendering with backend '{}'", args.backend);
    registry.convert(&args.backend, doc, &args.options())
}

fn cmd_convert(input: &Path, args: &RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ConverterRegistry::with_defaults();
    let converter = registry
        .get(&args.backend)
        .ok_or_else(|| mallard_backend::Error::UnknownBackend(args.backend.clone()))?;

    let doc = load_document(input)?;
    let result = render_document(&registry, &doc, args)?;

    // Each warning was already logged as it was raised.
    if result.has_warnings() {
        eprintln!(
            "{}: {} rendering warning(s)",
            "Warning".yellow().bold(),
            result.warnings.len()
        );
    }

    if args.stdout {
        println!("{}", result.content);
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output(input, converter.outfilesuffix()));
        fs::write(&path, &result.content)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    }

    if let Some(stats) = &result.stats {
        print_stats(stats);
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let result = mallard_backend::render(&doc, &RenderOptions::new().with_stats(true));

    if json {
        let summary = info_summary(input, &doc, &result);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {}",
        "Header".bold(),
        if doc.has_header { "Yes" } else { "No" }
    );
    if let Some(author) = doc.attr("author") {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(revnumber) = doc.attr("revnumber") {
        println!("{}: {}", "Revision".bold(), revnumber);
    }
    println!("{}: {}", "Attributes".bold(), doc.attributes.len());
    println!("{}: {}", "Top-level blocks".bold(), doc.blocks.len());
    println!("{}: {}", "Warnings".bold(), result.warnings.len());

    if let Some(stats) = &result.stats {
        println!();
        print_stats(stats);
    }

    Ok(())
}

fn info_summary(input: &Path, doc: &Document, result: &RenderResult) -> serde_json::Value {
    serde_json::json!({
        "file": input.display().to_string(),
        "has_header": doc.has_header,
        "author": doc.attr("author"),
        "revision": doc.attr("revnumber"),
        "attributes": doc.attributes.len(),
        "blocks": doc.blocks.len(),
        "warnings": result.warnings,
        "stats": result.stats,
    })
}

fn print_stats(stats: &RenderStats) {
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Lists".bold(), stats.list_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!("{}: {}", "Listings".bold(), stats.listing_count);
    println!("{}: {}", "Skipped".bold(), stats.skipped_count);
}

fn cmd_backends() {
    let registry = ConverterRegistry::with_defaults();
    for name in registry.backends() {
        if let Some(converter) = registry.get(name) {
            println!(
                "{} {} {}",
                name.cyan().bold(),
                converter.outfilesuffix(),
                converter.mime_type().dimmed()
            );
        }
    }
}

fn cmd_version() {
    println!("{} {}", "mallard".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Mallard page renderer for parsed AsciiDoc documents");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "title": [{"type": "text", "text": "Sample"}],
        "has_header": true,
        "blocks": [
            {"type": "paragraph", "text": [{"type": "text", "text": "Hello"}]},
            {"type": "table", "head": [{"cells": [{"text": [{"type": "text", "text": "A"}]}]}]}
        ]
    }"#;

    fn args() -> RenderArgs {
        RenderArgs {
            backend: DEFAULT_BACKEND.to_string(),
            ..RenderArgs::default()
        }
    }

    #[test]
    fn test_default_output() {
        assert_eq!(
            default_output(Path::new("docs/guide.json"), ".page"),
            PathBuf::from("docs/guide.page")
        );
        assert_eq!(default_output(Path::new("-"), ".page"), PathBuf::from("stdin.page"));
    }

    #[test]
    fn test_render_args_options() {
        let args = RenderArgs {
            embedded: true,
            no_checklist_markers: true,
            stats: true,
            ..args()
        };
        let options = args.options();
        assert!(!options.standalone);
        assert!(!options.checklist_markers);
        assert!(options.collect_stats);
    }

    #[test]
    fn test_convert_writes_page() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sample.json");
        fs::write(&input, SAMPLE).unwrap();

        cmd_convert(&input, &args()).unwrap();

        let page = fs::read_to_string(dir.path().join("sample.page")).unwrap();
        assert!(page.starts_with("<?xml"));
        assert!(page.contains("<title>Sample</title>"));
        assert!(page.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_convert_explicit_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sample.json");
        let output = dir.path().join("out.page");
        fs::write(&input, SAMPLE).unwrap();

        let args = RenderArgs {
            output: Some(output.clone()),
            embedded: true,
            ..args()
        };
        cmd_convert(&input, &args).unwrap();

        let body = fs::read_to_string(output).unwrap();
        assert!(body.starts_with("<p>Hello</p>"));
    }

    #[test]
    fn test_table_warning_is_not_an_error() {
        let doc = parse_json(SAMPLE).unwrap();
        let registry = ConverterRegistry::with_defaults();
        let result = render_document(&registry, &doc, &args()).unwrap();
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_info_summary_json() {
        let doc = parse_json(SAMPLE).unwrap();
        let result = mallard_backend::render(&doc, &RenderOptions::new().with_stats(true));
        let summary = info_summary(Path::new("sample.json"), &doc, &result);

        assert_eq!(summary["file"], "sample.json");
        assert_eq!(summary["has_header"], true);
        assert!(summary["author"].is_null());
        assert_eq!(summary["blocks"], 2);
        assert_eq!(summary["warnings"][0]["kind"], "table_without_body");
        assert_eq!(summary["stats"]["table_count"], 1);
        assert_eq!(summary["stats"]["paragraph_count"], 1);
    }

    #[test]
    fn test_top_level_array_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("list.json");
        fs::write(&input, "[]").unwrap();
        assert!(cmd_convert(&input, &args()).is_err());
    }

    #[test]
    fn test_invalid_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.json");
        fs::write(&input, "{ not json").unwrap();
        assert!(cmd_convert(&input, &args()).is_err());
    }

    #[test]
    fn test_unknown_backend_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sample.json");
        fs::write(&input, SAMPLE).unwrap();
        let args = RenderArgs {
            backend: "docbook5".to_string(),
            ..args()
        };
        assert!(cmd_convert(&input, &args).is_err());
    }
}
