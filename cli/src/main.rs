//! figstyle CLI - design snapshot style extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use figstyle::{
    DesignHost, DocumentSnapshot, ExtractOptions, ExtractionStats, JsonFormat, StyleExtractor,
};

#[derive(Parser)]
#[command(name = "figstyle")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract CSS-like styles and SVG from design snapshots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the style tree of a node as JSON
    Styles {
        /// Snapshot JSON file
        #[arg(value_name = "SNAPSHOT")]
        input: PathBuf,

        /// Target node identifier
        #[arg(value_name = "NODE_ID")]
        node_id: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Depth below the target at which children are truncated
        #[arg(
            long,
            env = "FIGSTYLE_MAX_DEPTH",
            default_value_t = figstyle::style::DEFAULT_MAX_DEPTH
        )]
        max_depth: usize,

        /// Omit export hint strings
        #[arg(long)]
        no_hints: bool,
    },

    /// Export a node as SVG
    Svg {
        /// Snapshot JSON file
        #[arg(value_name = "SNAPSHOT")]
        input: PathBuf,

        /// Target node identifier
        #[arg(value_name = "NODE_ID")]
        node_id: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show snapshot information
    Info {
        /// Snapshot JSON file
        #[arg(value_name = "SNAPSHOT")]
        input: PathBuf,

        /// Node to collect statistics for (document root if not specified)
        #[arg(value_name = "NODE_ID")]
        node_id: Option<String>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Styles {
            input,
            node_id,
            output,
            compact,
            max_depth,
            no_hints,
        }) => cmd_styles(
            &input,
            &node_id,
            output.as_deref(),
            json_format(compact),
            max_depth,
            !no_hints,
        ),
        Some(Commands::Svg {
            input,
            node_id,
            output,
            compact,
        }) => cmd_svg(&input, &node_id, output.as_deref(), json_format(compact)),
        Some(Commands::Info {
            input,
            node_id,
            json,
        }) => cmd_info(&input, node_id.as_deref(), json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: figstyle <COMMAND> <SNAPSHOT> [NODE_ID]".yellow());
            println!("       figstyle --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_styles(
    input: &Path,
    node_id: &str,
    output: Option<&Path>,
    format: JsonFormat,
    max_depth: usize,
    include_hints: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = DocumentSnapshot::open(input)?;
    log::debug!("extracting {} from {}", node_id, input.display());

    let mut extractor = StyleExtractor::new(&snapshot)
        .with_max_depth(max_depth)
        .with_hints(include_hints);
    if format == JsonFormat::Compact {
        extractor = extractor.compact();
    }

    // Extraction failures come back as an error payload, not as Err
    let json = extractor.style_json(node_id)?;
    write_output(output, &json)
}

fn cmd_svg(
    input: &Path,
    node_id: &str,
    output: Option<&Path>,
    format: JsonFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = DocumentSnapshot::open(input)?;

    let rt = tokio::runtime::Runtime::new()?;
    let response = rt.block_on(figstyle::export_response(&snapshot, node_id));

    let json = response.to_json(format)?;
    write_output(output, &json)
}

fn cmd_info(
    input: &Path,
    node_id: Option<&str>,
    as_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = DocumentSnapshot::open(input)?;
    let target = node_id.unwrap_or(snapshot.root().id.as_str());

    let response = figstyle::style_response(&snapshot, target, &ExtractOptions::default());
    let Some(record) = response.value() else {
        println!("{}", response.to_json(JsonFormat::Pretty)?);
        return Ok(());
    };
    let stats = ExtractionStats::from_record(record);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Snapshot Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let root = snapshot.root();
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {} ({})", "Root".bold(), root.name, root.node_type);
    println!("{}: {}", "Nodes".bold(), snapshot.len());
    println!("{}: {}", "Variables".bold(), snapshot.variable_count());
    println!("{}: {}", "SVG exports".bold(), snapshot.svg_export_count());

    if let Some(node) = snapshot.node_by_id(target) {
        println!();
        println!(
            "{} {}",
            "Style Statistics for".cyan().bold(),
            format!("{} \"{}\"", node.id, node.name).cyan()
        );
        println!("{}", "─".repeat(40).dimmed());
    }

    println!("{}: {}", "Records".bold(), stats.node_count);
    println!("{}: {}", "Truncated".bold(), stats.truncated_count);
    println!("{}: {}", "Max depth".bold(), stats.max_depth);
    println!("{}: {}", "Text nodes".bold(), stats.text_count);
    println!("{}: {}", "Instances".bold(), stats.instance_count);
    println!("{}: {}", "SVG candidates".bold(), stats.svg_candidate_count);
    println!("{}: {}", "Image fills".bold(), stats.image_fill_count);
    println!("{}: {}", "Hidden".bold(), stats.hidden_count);

    Ok(())
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "figstyle".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Design snapshot style extraction tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "document": {"id": "0:1", "name": "Page", "type": "PAGE", "children": [
            {"id": "1:2", "name": "Card", "type": "FRAME", "width": 120, "height": 80}
        ]},
        "svgExports": {"1:2": "<svg></svg>"}
    }"#;

    fn write_snapshot(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("snapshot.json");
        fs::write(&path, SNAPSHOT).unwrap();
        path
    }

    #[test]
    fn test_styles_writes_record() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_snapshot(&dir);
        let output = dir.path().join("styles.json");

        cmd_styles(&input, "1:2", Some(&output), JsonFormat::Compact, 8, true).unwrap();

        let json = fs::read_to_string(&output).unwrap();
        assert!(json.starts_with(r#"{"id":"1:2","name":"Card","type":"FRAME""#));
    }

    #[test]
    fn test_styles_missing_node_is_payload() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_snapshot(&dir);
        let output = dir.path().join("styles.json");

        cmd_styles(&input, "9:9", Some(&output), JsonFormat::Compact, 8, true).unwrap();

        let json = fs::read_to_string(&output).unwrap();
        assert_eq!(json, r#"{"error":"Node not found: 9:9"}"#);
    }

    #[test]
    fn test_svg_writes_export() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_snapshot(&dir);
        let output = dir.path().join("card.json");

        cmd_svg(&input, "1:2", Some(&output), JsonFormat::Compact).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["svg"], "<svg></svg>");
        assert_eq!(value["width"], 120);
    }

    #[test]
    fn test_info_missing_node_is_payload() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_snapshot(&dir);

        assert!(cmd_info(&input, Some("9:9"), false).is_ok());
        assert!(cmd_info(&input, Some("1:2"), true).is_ok());
    }

    #[test]
    fn test_missing_snapshot_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(cmd_styles(&missing, "1:2", None, JsonFormat::Pretty, 8, true).is_err());
    }
}
