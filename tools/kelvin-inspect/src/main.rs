//! Inspector for power-model element tables.
//!
//! Loads the JSON element table a platform would hand to the power-model
//! module, validates it the same way the module does, and answers
//! questions about the resulting model from the command line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use kelvin_power_model::{ApiIdx, Level, Power, PowerModel, PowerModelConfig};

#[derive(Parser)]
#[command(name = "kelvin-inspect", version, about = "Inspect power-model element tables")]
struct Cli {
    /// Path to the element table (JSON)
    #[arg(short, long, value_name = "FILE")]
    table: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the table and list its elements
    Show,

    /// Print a level-to-power table for every element
    Table(TableArgs),

    /// Convert one value for one element
    Convert(ConvertArgs),
}

#[derive(Args)]
struct TableArgs {
    /// First level in the table
    #[arg(long, default_value_t = 0)]
    from: u32,

    /// Last level in the table (inclusive)
    #[arg(long, default_value_t = 10)]
    to: u32,
}

#[derive(Args)]
struct ConvertArgs {
    /// Element label to convert for
    label: String,

    /// Convert this performance level to power
    #[arg(long, conflicts_with = "power")]
    level: Option<u32>,

    /// Convert this power value to a level
    #[arg(long)]
    power: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let model = load_model(&cli.table)?;

    match cli.command {
        Command::Show => cmd_show(&model),
        Command::Table(args) => cmd_table(&model, &args),
        Command::Convert(args) => cmd_convert(&model, &args),
    }
}

/// Parse and validate an element table the way the module itself does.
fn load_model(path: &Path) -> Result<PowerModel> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read element table {}", path.display()))?;
    let config: PowerModelConfig = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse element table {}", path.display()))?;

    tracing::debug!("Loaded table with {} element(s)", config.elements.len());

    PowerModel::new(config).context("Element table failed validation")
}

/// Print the validated element table.
fn cmd_show(model: &PowerModel) -> Result<()> {
    println!("{} element(s):", model.element_count());
    for element in model.elements() {
        println!("  [{}] {:<16} coeff {}", element.id, element.label, element.coeff);
    }

    Ok(())
}

/// Print modeled power over a level range, one block per element.
fn cmd_table(model: &PowerModel, args: &TableArgs) -> Result<()> {
    if args.to < args.from {
        bail!("Table range is empty ({}..={})", args.from, args.to);
    }

    let driver = model.api(ApiIdx::ThermalDriver);

    for element in model.elements() {
        println!("{} (coeff {}):", element.label, element.coeff);
        for raw in args.from..=args.to {
            match driver.level_to_power(element.id, Level(raw)) {
                Ok(power) => println!("  level {:>10} -> power {:>10}", raw, power),
                Err(e) => {
                    // Power grows with level, so everything past the
                    // first overflow overflows too.
                    println!("  level {:>10} -> {}", raw, e);
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Convert a single level or power value for one element.
fn cmd_convert(model: &PowerModel, args: &ConvertArgs) -> Result<()> {
    let id = model
        .element_by_label(&args.label)
        .with_context(|| format!("No element labeled {}", args.label))?;
    let driver = model.api(ApiIdx::ThermalDriver);

    match (args.level, args.power) {
        (Some(level), None) => {
            let power = driver.level_to_power(id, Level(level))?;
            println!("{}", power);
        }
        (None, Some(power)) => {
            let level = driver.power_to_level(id, Power(power))?;
            println!("{}", level);
        }
        _ => bail!("Pass exactly one of --level or --power"),
    }

    Ok(())
}
