//! codelight - highlight and auto-indent C#/Java sources from the terminal

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::Level;

use codelight::buffer::Buffer;
use codelight::config::Config;
use codelight::display::{visible_whitespace, write_span_columns, write_styled_line};
use codelight::hooks::{EditorHooks, LineContext};
use codelight::host::{BuildRunner, FsStore, JavaRunner};
use codelight::syntax::{Grammar, GrammarRegistry};
use codelight::{Error, Result};

#[derive(Debug, Parser)]
#[command(name = "codelight", version, about = "Line highlighting and auto-indent for C#/Java")]
struct Cli {
    /// Config file (defaults to ~/.codelight.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a source file with syntax colors
    Highlight {
        file: PathBuf,
        /// Language to use instead of detecting it from the extension
        #[arg(short, long)]
        language: Option<String>,
        /// List spans with their columns instead of coloring the text
        #[arg(long)]
        spans: bool,
    },
    /// Show the indent that follows LINE when Enter is pressed at its end
    Indent {
        #[arg(short, long)]
        language: String,
        line: String,
    },
    /// List known languages
    Languages,
    /// Compile and run a Java source file
    Run { file: PathBuf },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let registry = config.registry()?;

    match cli.command {
        Command::Highlight {
            file,
            language,
            spans,
        } => {
            let grammar = resolve_grammar(&registry, &file, language.as_deref())?;
            highlight_file(&file, grammar, config.indent_width, spans)?;
        }
        Command::Indent { language, line } => {
            let hooks = EditorHooks::new(registry.require(&language)?, config.indent_width);
            let indent = hooks.on_line_break(&LineContext::new(&line, 0, line.len()));
            println!("{}", visible_whitespace(&indent));
        }
        Command::Languages => {
            for name in registry.list_languages() {
                let extensions = registry
                    .get(name)
                    .map(|g| g.extensions().join(", "))
                    .unwrap_or_default();
                println!("{:<12} {}", name, extensions);
            }
        }
        Command::Run { file } => {
            let output = JavaRunner::new().run(&file)?;
            print!("{}", output.stdout);
            eprint!("{}", output.stderr);
            if !output.success() {
                return Ok(output.status.unwrap_or(1).max(1));
            }
        }
    }

    Ok(0)
}

fn resolve_grammar(
    registry: &GrammarRegistry,
    file: &Path,
    language: Option<&str>,
) -> Result<Arc<Grammar>> {
    match language {
        Some(name) => registry.require(name),
        None => registry
            .detect(file)
            .ok_or_else(|| Error::UnknownLanguage(file.display().to_string())),
    }
}

fn highlight_file(
    file: &Path,
    grammar: Arc<Grammar>,
    indent_width: usize,
    list_spans: bool,
) -> Result<()> {
    let buffer = Buffer::open(&FsStore, file)?;
    let hooks = EditorHooks::new(grammar, indent_width);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (idx, line) in buffer.lines().iter().enumerate() {
        let spans = buffer.highlight_line(&hooks, idx);
        if list_spans {
            write_span_columns(&mut out, idx, line, &spans)?;
        } else {
            write_styled_line(&mut out, line, &spans)?;
        }
    }
    out.flush()?;
    Ok(())
}
