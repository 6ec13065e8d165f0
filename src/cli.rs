// src/cli.rs
use std::io::{ self, BufRead, Write };
use std::path::PathBuf;

use clap::{ Parser, Subcommand };
use color_eyre::eyre::{ Result, WrapErr };
use rand::{ SeedableRng, rngs::StdRng };

use crate::config::DbConfig;
use crate::config::consts::{ BINARY_DIGITS, DEFAULT_INPUT, FIB_TERMS, SEARCH_LIST_LEN };
use crate::demos::{ self, SearchDemo };
use crate::runner;
use crate::store::{ FrequencySink, Store };

#[derive(Debug, Parser)]
#[command(
    name = "color_analysis",
    version,
    about = "Weekly color statistics from an HTML table",
    disable_help_subcommand = true,
    after_help = "Database settings come from DB_NAME, DB_USER, DB_PASSWORD, DB_HOST, DB_DIR and\n\
DB_BACKEND (sqlite or postgres), read from the environment or a .env file.\n\
A non-local DB_HOST selects PostgreSQL unless DB_BACKEND says otherwise."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract colors, print the five statistics and store the frequencies
    Analyze {
        #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
        file: PathBuf,
        #[arg(long = "no-save", help = "Skip the database step")]
        no_save: bool,
    },
    /// Print the stored color frequencies
    Stored,
    /// Recursive binary search over a sorted random list
    Search {
        #[arg(long, default_value_t = SEARCH_LIST_LEN)]
        len: usize,
        #[arg(long, help = "Deterministic seed for the list")]
        seed: Option<u64>,
        #[arg(long, help = "Value to look up; prompts on stdin when absent")]
        target: Option<u32>,
    },
    /// Random binary string and its decimal value
    Binary {
        #[arg(long, default_value_t = BINARY_DIGITS)]
        digits: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Sum of the first N Fibonacci numbers
    Fib {
        #[arg(value_name = "N", default_value_t = FIB_TERMS)]
        n: u32,
    },
}

pub fn run() -> Result<()> {
    // before anything reads the environment, RUST_LOG included
    let env_file = dotenvy::dotenv().ok();
    color_eyre::install()?;
    if let Err(e) = crate::log::init() {
        eprintln!("Warning: logging disabled: {e}");
    }
    if let Some(path) = &env_file {
        logd!("Loaded settings from {}", path.display());
    }
    let cli = Cli::parse();
    dispatch(cli.command)
}

pub fn dispatch(command: Command) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Analyze { file, no_save } => {
            let mut store = Store::from_config(DbConfig::from_env());
            let sink: Option<&mut dyn FrequencySink> = if no_save {
                None
            } else {
                Some(&mut store as &mut dyn FrequencySink)
            };
            let report = runner::analyze_path(&file, sink)
                .wrap_err_with(|| format!("analysis of {} failed", file.display()))?;
            runner::write_report(&mut out, &report)?;
        }
        Command::Stored => {
            let store = Store::from_config(DbConfig::from_env());
            let rows = store.load()?;
            if rows.is_empty() {
                writeln!(out, "No stored frequencies in {}", store.location())?;
            }
            for (color, frequency) in rows {
                writeln!(out, "{color},{frequency}")?;
            }
        }
        Command::Search { len, seed, target } => {
            let mut rng = make_rng(seed);
            let demo = SearchDemo::generate(&mut rng, len)?;
            writeln!(out, "Numbers: {:?}", demo.numbers)?;
            writeln!(out, "Searching for: {}", demo.target)?;
            writeln!(out, "Found at index: {}", fmt_index(demo.find(demo.target)))?;

            let wanted = match target {
                Some(t) => t,
                None => prompt_target(&mut out)?,
            };
            match demo.find(wanted) {
                Some(i) => writeln!(out, "Found {wanted} at index {i}")?,
                None => writeln!(out, "{wanted} not found in the list")?,
            }
        }
        Command::Binary { digits, seed } => {
            let mut rng = make_rng(seed);
            let draw = demos::random_binary(&mut rng, digits)?;
            writeln!(out, "Random {digits}-digit binary: {}", draw.bits)?;
            writeln!(out, "Converted to decimal: {}", draw.value)?;
        }
        Command::Fib { n } => {
            let sum = demos::fibonacci_sum(n)?;
            writeln!(out, "Sum of first {n} Fibonacci numbers: {sum}")?;
        }
    }
    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

fn fmt_index(i: Option<usize>) -> String {
    i.map_or(s!("-1"), |i| i.to_string())
}

fn prompt_target<W: Write>(out: &mut W) -> Result<u32> {
    write!(out, "Enter a number to search for: ")?;
    out.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(demos::parse_target(&line)?)
}
