//! undraft CLI - draft extraction and correction tool

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;

use undraft::typo::CorrectionResponse;
use undraft::{
    apply_basic_fixes, apply_suggestions, find_typos, parse_html, render, Block, Dictionary,
    JsonFormat, RenderOptions,
};

#[derive(Parser)]
#[command(name = "undraft")]
#[command(version)]
#[command(about = "Extract and correct rich-text regulation drafts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an HTML draft to plain text
    Text {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Run the typography fix pipeline
        #[arg(long)]
        fix: bool,
    },

    /// Convert an HTML draft to document-model JSON
    Json {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show draft block statistics
    Info {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Scan a plain-text file against a correction dictionary
    Typos {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Dictionary JSON (backend payload or a word-to-suggestion object)
        #[arg(short, long, value_name = "JSON")]
        dictionary: PathBuf,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,

        /// Apply every suggestion and print the corrected text
        #[arg(long)]
        apply: bool,

        /// Output file for corrected text (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Run the typography fix pipeline on plain text
    Fix {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> undraft::Result<()> {
    match cli.command {
        Commands::Text { input, output, fix } => {
            let html = fs::read_to_string(&input)?;
            let doc = parse_html(&html);
            let options = RenderOptions::new().with_fixes(fix);
            let text = render::to_text(&doc, &options)?;
            write_output(output.as_deref(), &text)
        }

        Commands::Json {
            input,
            output,
            compact,
        } => {
            let html = fs::read_to_string(&input)?;
            let doc = parse_html(&html);
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = render::to_json(&doc, format)?;
            write_output(output.as_deref(), &json)
        }

        Commands::Info { input } => {
            let html = fs::read_to_string(&input)?;
            let doc = parse_html(&html);
            print_info(&input, &doc.blocks);
            Ok(())
        }

        Commands::Typos {
            input,
            dictionary,
            json,
            apply,
            output,
        } => {
            let text = fs::read_to_string(&input)?;
            let dict = load_dictionary(&dictionary)?;
            log::info!("dictionary loaded with {} entries", dict.len());

            let matches = find_typos(&text, &dict);

            if apply {
                let corrected = apply_suggestions(&text, &matches);
                return write_output(output.as_deref(), &corrected);
            }

            if json {
                let payload = serde_json::to_string_pretty(&matches)
                    .map_err(|e| undraft::Error::Render(e.to_string()))?;
                return write_output(output.as_deref(), &payload);
            }

            print_matches(&matches);
            Ok(())
        }

        Commands::Fix { input, output } => {
            let text = fs::read_to_string(&input)?;
            let fixed = apply_basic_fixes(&text);
            write_output(output.as_deref(), &fixed)
        }
    }
}

fn write_output(output: Option<&Path>, content: &str) -> undraft::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            println!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn print_info(input: &Path, blocks: &[Block]) {
    let headings = blocks.iter().filter(|b| b.is_heading()).count();
    let paragraphs = blocks.iter().filter(|b| b.is_paragraph()).count();
    let breaks = blocks.len() - headings - paragraphs;

    println!("{}", input.display().to_string().bold());
    println!("  blocks:      {}", blocks.len());
    println!("  headings:    {}", headings);
    println!("  paragraphs:  {}", paragraphs);
    println!("  line breaks: {}", breaks);
}

fn print_matches(matches: &[undraft::TypoMatch]) {
    if matches.is_empty() {
        println!("{}", "No corrections found.".green());
        return;
    }

    for (idx, m) in matches.iter().enumerate() {
        println!(
            "{} {} {} {}",
            format!("{}.", idx + 1).bold(),
            m.original.red().strikethrough(),
            "→".dimmed(),
            m.suggestion.green()
        );
        println!("   {}", m.context.dimmed().italic());
    }
    println!(
        "\n{} correction{} suggested",
        matches.len(),
        if matches.len() == 1 { "" } else { "s" }
    );
}

/// Load a dictionary from either the backend list payload or a plain
/// word-to-suggestion JSON object.
fn load_dictionary(path: &Path) -> undraft::Result<Dictionary> {
    let raw = fs::read_to_string(path)?;

    if let Ok(response) = serde_json::from_str::<CorrectionResponse>(&raw) {
        return Ok(Dictionary::from_corrections(&response.data));
    }

    let map: HashMap<String, String> = serde_json::from_str(&raw)?;
    Ok(map.into_iter().collect())
}
