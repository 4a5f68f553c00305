//! glint CLI - headless syntax checker
//!
//! Usage:
//!   glint <FILE>                 Check a file
//!   glint -e <CODE>              Check inline source
//!   glint --tokens <FILE>        Also print a highlight range per token
//!   glint --ast <FILE>           Also print the AST as JSON
//!   glint -o json <FILE>         Print one JSON report
//!   cat file | glint             Read source from stdin

mod output;

use clap::Parser;
use output::{format_json_report, render_ast, render_tokens, render_underline, OutputMode};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lang::{Analysis, LexerConfig};

/// Tokenize and parse a glint buffer, reporting the first syntax error.
#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(version, about = "Syntax checker for the glint language", long_about = None)]
struct Args {
    /// The file to check (optional if using -e or stdin)
    file: Option<PathBuf>,

    /// Check inline source instead of a file
    #[arg(short = 'e', long = "eval")]
    eval: Option<String>,

    /// Print one highlight range per token
    #[arg(long = "tokens")]
    tokens: bool,

    /// Include whitespace and comment tokens (with --tokens)
    #[arg(long = "trivia")]
    trivia: bool,

    /// Print the AST as JSON when the buffer is valid
    #[arg(long = "ast")]
    ast: bool,

    /// Treat `/* ... */` as operators instead of a comment
    #[arg(long = "no-block-comments")]
    no_block_comments: bool,

    /// Output format: text (default), json
    #[arg(short = 'o', long = "output", value_name = "FORMAT")]
    output: Option<String>,
}

impl Args {
    fn lexer_config(&self) -> LexerConfig {
        LexerConfig {
            block_comments: !self.no_block_comments,
            keep_trivia: self.trivia,
        }
    }
}

/// Where the buffer came from.
enum Source {
    File { path: PathBuf, content: String },
    Inline { content: String },
}

impl Source {
    fn content(&self) -> &str {
        match self {
            Source::File { content, .. } => content,
            Source::Inline { content } => content,
        }
    }

    fn name(&self) -> String {
        match self {
            Source::File { path, .. } => path.display().to_string(),
            Source::Inline { .. } => "<input>".to_string(),
        }
    }
}

fn parse_output_mode(args: &Args) -> Result<OutputMode, String> {
    match args.output.as_deref() {
        None | Some("text") => Ok(OutputMode::Text),
        Some("json") => Ok(OutputMode::Json),
        Some(other) => Err(format!("Invalid output format: '{}'. Use: text, json", other)),
    }
}

fn get_source(args: &Args) -> Result<Source, String> {
    // Priority: -e flag > file argument > stdin
    if let Some(ref code) = args.eval {
        return Ok(Source::Inline {
            content: code.clone(),
        });
    }

    if let Some(ref path) = args.file {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("Error reading file {:?}: {}", path, e))?;
        return Ok(Source::File {
            path: path.clone(),
            content,
        });
    }

    if !atty::is(atty::Stream::Stdin) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| format!("Error reading from stdin: {}", e))?;
        return Ok(Source::Inline { content });
    }

    Err("No input provided. Use: glint <FILE>, glint -e <CODE>, or pipe to stdin".to_string())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let output_mode = match parse_output_mode(&args) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let source = match get_source(&args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let analysis = Analysis::run(source.content(), &args.lexer_config());
    debug!(source = %source.name(), valid = analysis.is_valid(), "checked buffer");

    match output_mode {
        OutputMode::Text => report_text(&args, &source, &analysis),
        OutputMode::Json => report_json(&args, &analysis),
    }
}

fn exit_code(analysis: &Analysis) -> ExitCode {
    if analysis.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}

fn report_text(args: &Args, source: &Source, analysis: &Analysis) -> ExitCode {
    if args.tokens {
        print!("{}", render_tokens(&analysis.tokens));
    }

    match &analysis.outcome {
        Ok(program) => {
            if args.ast {
                match render_ast(program) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error serializing AST: {}", e);
                        return ExitCode::from(1);
                    }
                }
            }
            println!("{}", analysis.status().line());
        }
        Err(diagnostic) => {
            eprintln!("{}", analysis.status().line());
            if let Some(underline) = diagnostic.underline() {
                eprint!("{}", render_underline(source.content(), &underline));
            }
        }
    }

    exit_code(analysis)
}

fn report_json(args: &Args, analysis: &Analysis) -> ExitCode {
    match format_json_report(analysis, args.tokens, args.ast) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing report: {}", e);
            return ExitCode::from(1);
        }
    }

    exit_code(analysis)
}
