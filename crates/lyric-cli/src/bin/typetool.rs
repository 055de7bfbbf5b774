use std::io;
use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use lyric_cli::commands::{check_ops, compile_ops, config_ops, replay_ops};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "typetool", about = "Lyric typing engine diagnostics")]
struct Cli {
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Custom kana → romaji pattern table TOML
    #[arg(long, global = true)]
    patterns: Option<String>,
    /// Custom kana keyboard layout TOML
    #[arg(long, global = true)]
    keymap: Option<String>,
    /// Directory for JSON trace output (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the chunks and keystroke patterns of a lyric line
    Compile {
        line: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Judge a key sequence against a lyric line step by step
    Replay {
        line: String,
        /// Romaji keys, or whitespace-separated key codes with --kana
        keys: String,
        /// Judge as kana-layout input ("KeyT BracketLeft KeyZ+shift")
        #[arg(long)]
        kana: bool,
    },
    /// Compile every line of a lyrics file and report keystroke counts
    Check {
        /// Lyrics text file, one line per lyric line
        file: String,
    },
    /// Export the default pattern table as TOML
    PatternsExport,
    /// Validate a custom pattern table TOML file
    PatternsValidate { file: String },
    /// Export the default kana layout as TOML
    KeymapExport,
    /// Validate a custom kana layout TOML file
    KeymapValidate { file: String },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate { file: String },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        lyric_engine::trace_init::init_tracing(Path::new(dir));
    }
    die!(
        config_ops::install(
            cli.settings.as_deref(),
            cli.patterns.as_deref(),
            cli.keymap.as_deref(),
        ),
        "Error loading configuration: {}"
    );

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Compile { line, json } => {
            die!(compile_ops::compile(&line, json, &mut out), "Error: {}")
        }
        Command::Replay { line, keys, kana } => {
            let summary = die!(
                replay_ops::replay(&line, &keys, kana, &mut out),
                "Error: {}"
            );
            if !summary.completed {
                process::exit(2);
            }
        }
        Command::Check { file } => {
            let summary = die!(check_ops::check(&file, &mut out), "Error: {}");
            if summary.untypable > 0 {
                process::exit(2);
            }
        }
        Command::PatternsExport => die!(config_ops::patterns_export(&mut out), "Error: {}"),
        Command::PatternsValidate { file } => {
            die!(config_ops::patterns_validate(&file, &mut out), "Error: {}")
        }
        Command::KeymapExport => die!(config_ops::keymap_export(&mut out), "Error: {}"),
        Command::KeymapValidate { file } => {
            die!(config_ops::keymap_validate(&file, &mut out), "Error: {}")
        }
        Command::SettingsExport => die!(config_ops::settings_export(&mut out), "Error: {}"),
        Command::SettingsValidate { file } => {
            die!(config_ops::settings_validate(&file, &mut out), "Error: {}")
        }
    }
}
