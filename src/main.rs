use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use keygen::config::resolve_settings;
use keygen::{GenerationConfig, Generator, Preset};

#[derive(Debug, Parser)]
#[command(name = "keygen", version, about = "Generate random passwords and PINs")]
struct Cli {
    /// Number of characters to generate
    #[arg(short = 'L', long)]
    length: Option<usize>,

    #[arg(short = 'l', long)]
    no_lowercase: bool,

    #[arg(short = 'u', long)]
    no_uppercase: bool,

    #[arg(short = 'n', long)]
    no_numbers: bool,

    #[arg(short = 's', long)]
    no_specials: bool,

    /// Use a fixed character selection; class flags are ignored
    #[arg(short, long, value_enum)]
    preset: Option<Preset>,

    /// How many values to print, one per line
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    #[arg(long)]
    json: bool,

    /// JSON file with generation defaults
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    config: &'a GenerationConfig,
    values: &'a [String],
}

impl Cli {
    fn generation_config(&self, defaults: GenerationConfig) -> GenerationConfig {
        match self.preset {
            Some(preset) => preset.config(self.length.unwrap_or(preset.default_length())),
            None => GenerationConfig {
                length: self.length.unwrap_or(defaults.length),
                include_lowercase: defaults.include_lowercase && !self.no_lowercase,
                include_uppercase: defaults.include_uppercase && !self.no_uppercase,
                include_numbers: defaults.include_numbers && !self.no_numbers,
                include_symbols: defaults.include_symbols && !self.no_specials,
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("keygen: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let defaults = resolve_settings(cli.config.as_deref())?;
    let config = cli.generation_config(defaults);
    debug!(?config, count = cli.count, "resolved generation request");

    // Validated up front so an empty selection fails even with `--count 0`.
    let pool = config.pool()?;
    let mut generator = Generator::new();
    let values: Vec<String> = (0..cli.count)
        .map(|_| generator.sample(&pool, config.length))
        .collect();

    if cli.json {
        let output = Output { config: &config, values: &values };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        for value in &values {
            writeln!(out, "{value}")?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
