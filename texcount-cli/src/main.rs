//! Command-line interface for texcount
//! Counts the prose words of a TeX/LaTeX document, or dumps its tokens or syntax tree.
//!
//! Usage:
//!   texcount [`<path>`]                       - Count the words of a file (stdin if absent or `-`)
//!   texcount `<path>` --format ast-treeviz    - Print the parsed tree
//!   texcount --list-formats                   - List all available output formats

use clap::parser::ValuesRef;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{IsTerminal, Read};
use texcount::tex::counting::CountOptions;
use texcount::tex::formats::{render, FormatError, OutputFormat};
use texcount_config::Loader;
use tracing::Level;

fn main() {
    let matches = Command::new("texcount")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count the words of a TeX/LaTeX document, ignoring markup")
        .arg(
            Arg::new("path")
                .help("Path to the TeX file (reads standard input if absent or '-')")
                .index(1),
        )
        .arg(
            Arg::new("include-macro")
                .long("include-macro")
                .short('i')
                .value_name("LIST")
                .help("Comma-separated macros whose arguments are counted")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("exclude-env")
                .long("exclude-env")
                .short('e')
                .value_name("LIST")
                .help("Comma-separated environments whose content is not counted")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("macro-as-word")
                .long("macro-as-word")
                .short('w')
                .value_name("LIST")
                .help("Comma-separated macros that count as one word")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: count, see --list-formats)"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (repeat for more detail); logs go to stderr")
                .action(ArgAction::Count),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    init_logging(matches.get_count("verbose"));
    handle_count_command(&matches);
}

/// Install the stderr subscriber: warn by default, then info, debug, trace
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Could not install logger: {}", e);
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}

/// Names from repeated, comma-separated flag values; empty entries are dropped
fn split_names(values: Option<ValuesRef<'_, String>>) -> Vec<String> {
    values
        .into_iter()
        .flatten()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Handle the default command: read, render, print
fn handle_count_command(matches: &ArgMatches) {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(name) = matches.get_one::<String>("format") {
        loader = loader
            .set_override("output.format", name.as_str())
            .unwrap_or_else(|e| fail(format!("Configuration error: {}", e)));
    }
    let config = loader
        .build()
        .unwrap_or_else(|e| fail(format!("Configuration error: {}", e)));

    let options: CountOptions = config
        .counting
        .to_options()
        .include_arguments_of(split_names(matches.get_many("include-macro")))
        .exclude_environments(split_names(matches.get_many("exclude-env")))
        .macros_as_words(split_names(matches.get_many("macro-as-word")));
    tracing::debug!(?options, "counting options");

    let format = config
        .output
        .format()
        .unwrap_or_else(|e| fail(format!("Error: {}", e)));

    let path = matches.get_one::<String>("path").map(String::as_str);
    let source = read_source(path);

    match render(&source, format, &options) {
        Ok(output) => print!("{}", output),
        Err(FormatError::Syntax(e)) => {
            if let Some(path) = path {
                eprintln!("In {}:", path);
            }
            fail(e.render(&source))
        }
        Err(e) => fail(format!("Error: {}", e)),
    }
}

fn read_source(path: Option<&str>) -> String {
    match path {
        None | Some("-") => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .unwrap_or_else(|e| fail(format!("Could not read standard input: {}", e)));
            source
        }
        Some(path) => std::fs::read_to_string(path)
            .unwrap_or_else(|e| fail(format!("Could not read {}: {}", path, e))),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");

    for format in OutputFormat::all() {
        println!("  {}", format.name());
        println!("    {}", format.description());
        println!();
    }
}
