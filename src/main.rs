//! Add or remove glyphs in every master of a UFO font family.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use glyphreg::command::USAGE;
use glyphreg::{BatchReport, Command, Config, Error, FileSink, MemorySink, UsageError};

/// How much of each document a dry run prints.
const DRY_RUN_TAIL: usize = 1000;

/// Add or remove glyphs in every master of a UFO font family.
#[derive(Parser, Debug)]
#[command(version, after_help = USAGE)]
struct Args {
    /// A font master directory. May be repeated; replaces the configured list.
    #[arg(short, long = "master", value_name = "DIR")]
    masters: Vec<PathBuf>,

    /// A plist file listing the font masters.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory that relative master paths are resolved against.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// The indentation unit for appended entries, e.g. four spaces or a tab.
    #[arg(long)]
    indent: Option<String>,

    /// Print the files that would be rewritten instead of writing them.
    #[arg(long)]
    dry_run: bool,

    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,

    /// The command (+G, -G, +L, -L) followed by glyph names.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    command: Vec<String>,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let command = match Command::parse(&args.command) {
        Ok(command) => command,
        Err(e) => abort(&e),
    };

    match run(&args, &command) {
        Ok(report) => {
            let action = if command.is_add() { "adding" } else { "removing" };
            log::info!(
                "Done {action} glyphs: {} file(s) rewritten, {} warning(s).",
                report.modified_files(),
                report.warnings()
            );
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}

fn abort(error: &UsageError) -> ! {
    if *error != UsageError::MissingCommand {
        println!("{error}");
    }
    println!("{USAGE}");
    std::process::exit(-1);
}

fn run(args: &Args, command: &Command) -> Result<BatchReport, Error> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if !args.masters.is_empty() {
        config.masters = args.masters.clone();
    }
    if let Some(indent) = &args.indent {
        config.indent = indent.clone();
    }
    let editor = config.resolve(&args.root).editor()?;

    if !args.dry_run {
        return editor.run(command, &mut FileSink);
    }

    let mut sink = MemorySink::default();
    let report = editor.run(command, &mut sink)?;
    for (path, data) in sink.iter() {
        let tail = &data[data.len().saturating_sub(DRY_RUN_TAIL)..];
        println!("Test output for '{}':", path.display());
        println!("{}", String::from_utf8_lossy(tail));
    }
    Ok(report)
}
