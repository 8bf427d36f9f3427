// Command-line interface for mdtree
//
// This binary exposes the mdtree library on markdown files: inspecting the element tree a file
// parses into, and re-emitting its tables as normalized markdown.
//
// Usage:
//  mdtree inspect <path> [<transform>]          - Execute a transform (defaults to "element-treeviz")
//  mdtree tables <input> [--output <file>]      - Re-emit every table as normalized markdown
//  mdtree --list-transforms                     - List available transforms
//
// Configuration:
//
// Defaults come from mdtree-config. A `mdtree.toml` in the working directory is layered on top
// when present, and `--config <path>` layers an explicit file on top of that.
//
// Extra Parameters:
//
// Settings can be overridden per run using --extra-<parameter-name> [value].
// The CLI layer strips the "extra-" prefix; known keys update the configuration, the rest are
// passed on to the transform.
// Example:
//  mdtree inspect notes.md --extra-custom-ids --extra-show-bold true

mod transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use mdtree::ParseOptions;
use mdtree_config::{Loader, MdTreeConfig};
use std::collections::HashMap;
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .map(|next| !next.starts_with('-'))
                .unwrap_or(false);

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("mdtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting markdown element trees")
        .long_about(
            "mdtree parses markdown files into typed element trees.\n\n\
            Commands:\n  \
            - inspect: View the element tree a file parses into\n  \
            - tables:  Re-emit every table of a file as normalized markdown\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override settings for a single run.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mdtree inspect notes.md                          # Tree visualization\n  \
            mdtree inspect notes.md element-json             # Element tree as JSON\n  \
            mdtree inspect notes.md custom-ids --extra-custom-ids\n  \
            mdtree tables notes.md -o tables.md              # Normalized tables",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdtree.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the element tree of a markdown file")
                .long_about(
                    "View the element tree a markdown file parses into.\n\n\
                    Transforms:\n  \
                    - element-treeviz: Tree visualization (default)\n  \
                    - element-json:    Element tree as JSON\n  \
                    - custom-ids:      Custom identifiers, one per line\n  \
                    - tables:          Tables as tab separated text\n\n\
                    Extra Parameters:\n  \
                    --extra-wrap-paragraphs   Keep paragraphs as elements\n  \
                    --extra-custom-ids        Lift {token} markers out of text\n  \
                    --extra-strip-custom-ids  Remove custom identifiers before rendering\n  \
                    --extra-show-bold         Mark bold text in the tree visualization",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'element-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("tables")
                .about("Re-emit every table of a markdown file as normalized markdown")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let matches = build_cli()
        .try_get_matches_from(&cleaned_args)
        .unwrap_or_else(|e| e.exit());

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                eprintln!("Error: a path is required");
                std::process::exit(1);
            };
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("tables", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                eprintln!("Error: an input file is required");
                std::process::exit(1);
            };
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_tables_command(input, output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &MdTreeConfig,
) {
    let source = read_source(path);
    let options = ParseOptions::from(&config.parse);
    let params = build_inspect_params(config, extra_params);
    debug!(path, transform, ?options, "inspecting");

    let output = transforms::execute_transform(&source, transform, &options, &params)
        .unwrap_or_else(|e| {
            eprintln!("Execution error: {e}");
            std::process::exit(1);
        });

    print!("{output}");
}

fn handle_tables_command(input: &str, output: Option<&str>, config: &MdTreeConfig) {
    let source = read_source(input);
    let options = ParseOptions::from(&config.parse);
    let markdown = transforms::tables_to_markdown(&source, &options, &config.builder.line_break);

    match output {
        Some(path) => {
            if let Err(e) = markdown.write_to(path) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        None => print!("{markdown}"),
    }
}

fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MdTreeConfig {
    let loader = Loader::new().with_optional_file("mdtree.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut MdTreeConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["wrap-paragraphs", "wrap-into-paragraphs"]) {
        config.parse.wrap_into_paragraphs = parse_bool_arg("wrap-paragraphs", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["custom-ids", "parse-custom-ids"]) {
        config.parse.parse_custom_id_tokens = parse_bool_arg("custom-ids", &raw);
    }
    if let Some(raw) = extra_params.remove("strip-custom-ids") {
        config.inspect.strip_custom_ids = parse_bool_arg("strip-custom-ids", &raw);
    }
    if let Some(raw) = extra_params.remove("show-bold") {
        config.inspect.show_bold = parse_bool_arg("show-bold", &raw);
    }
}

fn build_inspect_params(
    config: &MdTreeConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();

    if config.inspect.show_bold {
        params.insert("show-bold".to_string(), "true".to_string());
    }
    if config.inspect.strip_custom_ids {
        params.insert("strip-custom-ids".to_string(), "true".to_string());
    }

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
