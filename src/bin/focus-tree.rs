//! Command-line interface for focus-tree
//! This binary reads focus tree documents and re-emits them in canonical form or as a model.
//!
//! Usage:
//!   focus-tree `<path>` [--format `<format>`] [--config `<file>`]  - Process a focus tree document
//!   focus-tree --from-json `<path>`                                - Serialize a JSON model back to script
//!   focus-tree --list-formats                                      - List all available output formats
//!
//! Settings come from the built-in defaults, then `./focus-tree.toml` if present, then
//! `--config`, then `FOCUS_TREE__*` environment variables, then the flags above.

use clap::{Arg, ArgAction, ArgMatches, Command};
use focus_tree::processor::{process_file, render_model, OutputFormat, ProcessingSpec};
use focus_tree::settings::{FocusTreeConfig, Loader};

fn main() {
    let matches = Command::new("focus-tree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for reading and writing focus tree scripts")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the focus tree document")
                .index(1)
                .required_unless_present_any(["from-json", "list-formats"]),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'script', 'order', 'json')"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("satisfaction")
                .long("satisfaction")
                .help("How prerequisite blocks combine: 'all-sets' or 'any-set'"),
        )
        .arg(
            Arg::new("from-json")
                .long("from-json")
                .value_name("PATH")
                .help("Serialize a JSON model back to focus tree text")
                .conflicts_with("path"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    init_tracing(&config);

    if let Some(path) = matches.get_one::<String>("from-json") {
        handle_from_json_command(path, &config);
    } else if let Some(path) = matches.get_one::<String>("path") {
        handle_process_command(path, &config);
    }
}

fn load_config(matches: &ArgMatches) -> Result<FocusTreeConfig, config::ConfigError> {
    let mut loader = Loader::new().with_optional_file("focus-tree.toml");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader = loader.with_environment();
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(satisfaction) = matches.get_one::<String>("satisfaction") {
        loader = loader.set_override("ordering.satisfaction", satisfaction.as_str())?;
    }
    loader.build()
}

/// RUST_LOG wins over the configured level
fn init_tracing(config: &FocusTreeConfig) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();
}

/// Handle processing a document
fn handle_process_command(path: &str, config: &FocusTreeConfig) {
    let spec = ProcessingSpec::from_config(config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Run with --list-formats to see the available formats");
        std::process::exit(1);
    });

    match process_file(path, &spec) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the --from-json command
fn handle_from_json_command(path: &str, config: &FocusTreeConfig) {
    match render_model(path, &config.ordering) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the --list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in OutputFormat::ALL {
        println!("  {:<10} {}", format.name(), format.description());
    }
}
