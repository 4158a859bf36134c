//! Math scanner example
//!
//! Scans a file (or stdin) for `\( … \)` and `\[ … \]` math and prints the
//! recognized items with their event streams.

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use math_syntax::{math_constructs, MathOptions};
use scan_framework::{DefaultContext, Item, Phase, ScanContext, Scanner};

#[derive(Parser)]
#[command(name = "math-scan")]
#[command(about = "Scan text for bracket-delimited math", long_about = None)]
struct Cli {
    /// Input file; reads stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// How the input is scanned
    #[arg(long, value_enum, default_value_t = Mode::Flow)]
    mode: Mode,

    /// JSON file holding math options
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Line number to treat as a lazy continuation (repeatable)
    #[arg(long = "lazy", value_name = "LINE")]
    lazy: Vec<usize>,

    /// Print items as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Inline content: `\( … \)`, escapes and text
    Text,
    /// Block content: `\[ … \]` and paragraph lines
    Flow,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let input = read_input(cli.path.as_ref())?;
    let options = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<MathOptions>(&raw)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => MathOptions::default(),
    };
    log::debug!("options: {options:?}");

    let table = math_constructs(&options)?;
    let lazy: BTreeSet<usize> = cli.lazy.iter().copied().collect();
    let context = DefaultContext::new(input.as_str()).with_laziness(lazy);
    let mut scanner = Scanner::new(context, table);

    let items = match cli.mode {
        Mode::Text => scanner.scan_text(),
        Mode::Flow => scanner.scan_flow(),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        let source = scanner.context().cursor().source();
        for item in &items {
            print_item(item, source);
        }
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            Ok(buffer)
        }
    }
}

fn print_item(item: &Item, source: &str) {
    match item {
        Item::Construct(recognized) => {
            println!("{}", recognized.name);
            let mut depth = 1;
            for event in &recognized.events {
                match event.phase {
                    Phase::Enter => {
                        println!(
                            "{:indent$}{:?} {}-{} {:?}",
                            "",
                            event.kind(),
                            event.span.start,
                            event.span.end,
                            event.span.slice(source),
                            indent = depth * 2
                        );
                        depth += 1;
                    }
                    Phase::Exit => depth -= 1,
                }
            }
        }
        Item::Escape(extent) => println!("escape {:?}", extent.slice(source)),
        Item::Text(extent) => println!("text {:?}", extent.slice(source)),
        Item::Line(extent) => println!("line {:?}", extent.slice(source)),
        Item::Blank(_) => println!("blank"),
    }
}
