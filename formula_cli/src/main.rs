//! # Formulary CLI
//!
//! Command line shell over `formula_core`. Each calculator is a
//! subcommand; results print as text, or as JSON with `--json`.
//!
//! ```text
//! formulary watts-to-amps --circuit ac --power 2000 --voltage 230 --pf 0.85
//! formulary relative-humidity --dew-point 15 --rh 60 --strategy fixed-step
//! formulary run job.json
//! formulary convert pressure 1 bar psi
//! ```

mod args;
mod render;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::Deserialize;
use tracing::{debug, Level};

use formula_core::calculations::{relative_humidity, CalculationItem, CalculationOutput, CALCULATORS};
use formula_core::equations::{generate_equations_markdown, Equation, EquationCategory};
use formula_core::format::format_value;
use formula_core::settings::Settings;
use formula_core::units::UnitFamily;
use formula_core::CalcError;

use args::*;

#[derive(Parser)]
#[command(name = "formulary", about = "Physics and math calculators", version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Settings file (TOML). Defaults to ./formulary.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Golden sections, rectangles and ratio check
    #[command(allow_negative_numbers = true)]
    GoldenRatio(GoldenRatioArgs),
    /// Relative change from an original value
    #[command(allow_negative_numbers = true)]
    PercentageChange(PercentageChangeArgs),
    /// Difference relative to the average of two values
    #[command(allow_negative_numbers = true)]
    PercentageDifference(PercentageDifferenceArgs),
    /// Grade, ratio and angle of a slope
    #[command(allow_negative_numbers = true)]
    SlopePercentage(SlopeArgs),
    /// Capacitor energy, charge and voltage
    CapacitorEnergy(CapacitorEnergyArgs),
    /// Thin-wall pressure vessel stress, strain and sizing
    HoopStress(HoopStressArgs),
    /// Kepler's third law
    OrbitalPeriod(OrbitalPeriodArgs),
    /// Any one of dry bulb, dew point and relative humidity
    #[command(allow_negative_numbers = true)]
    RelativeHumidity(RelativeHumidityArgs),
    /// LC circuit or spring-mass natural frequency
    ResonantFrequency(ResonantFrequencyArgs),
    /// Cord tension at rest or under vertical acceleration
    Tension(TensionArgs),
    /// Viscosity and density of liquid water
    #[command(allow_negative_numbers = true)]
    WaterViscosity(WaterViscosityArgs),
    /// DC and single-phase AC load current
    WattsToAmps(WattsToAmpsArgs),
    /// Conductor resistance, length, diameter or resistivity
    #[command(allow_negative_numbers = true)]
    WireResistance(WireResistanceArgs),
    /// Swept volume of a piston engine
    EngineDisplacement(EngineDisplacementArgs),
    /// Engineering strain from lengths
    #[command(allow_negative_numbers = true)]
    Elongation(ElongationArgs),
    /// Work done by a constant force
    #[command(allow_negative_numbers = true)]
    Work(WorkArgs),

    /// Run calculations from a JSON file ("-" for stdin)
    Run {
        /// A calculation object, or an array of them
        file: String,
    },
    /// Convert a value between units of one quantity
    #[command(allow_negative_numbers = true)]
    Convert {
        /// Quantity family, e.g. "pressure" or "spring-constant"
        family: String,
        value: f64,
        from: String,
        to: String,
    },
    /// List unit families, or the units of one family
    Units { family: Option<String> },
    /// List the registered equations
    Equations {
        /// Print the full Markdown reference instead
        #[arg(long)]
        markdown: bool,
    },
    /// List the calculators
    List,
}

/// Input accepted by `run`
#[derive(Deserialize)]
#[serde(untagged)]
enum RunDocument {
    One(CalculationItem),
    Many(Vec<CalculationItem>),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load_or_default(cli.config.as_deref()).context("loading settings")?;
    debug!(?settings, "settings loaded");
    let json = cli.json;

    let item: CalculationItem = match cli.command {
        Commands::GoldenRatio(a) => a.into(),
        Commands::PercentageChange(a) => a.into(),
        Commands::PercentageDifference(a) => a.into(),
        Commands::SlopePercentage(a) => a.into(),
        Commands::CapacitorEnergy(a) => a.into(),
        Commands::HoopStress(a) => a.into(),
        Commands::OrbitalPeriod(a) => a.into(),
        Commands::RelativeHumidity(a) => {
            let mut solver = settings.humidity_solver.clone();
            if let Some(strategy) = a.strategy {
                solver.strategy = strategy.into();
            }
            let result = relative_humidity::calculate(&a.input(), &solver);
            return report(result.map(CalculationOutput::RelativeHumidity), &settings, json);
        }
        Commands::ResonantFrequency(a) => a.into(),
        Commands::Tension(a) => a.into(),
        Commands::WaterViscosity(a) => a.into(),
        Commands::WattsToAmps(a) => a.into(),
        Commands::WireResistance(a) => a.into(),
        Commands::EngineDisplacement(a) => a.into(),
        Commands::Elongation(a) => a.into(),
        Commands::Work(a) => a.into(),

        Commands::Run { file } => return run_file(&file, &settings, json),
        Commands::Convert { family, value, from, to } => {
            let converted = formula_core::units::convert(&family, value, &from, &to)?;
            if json {
                println!("{}", serde_json::json!({ "value": converted, "unit": to }));
            } else {
                println!(
                    "{} {} = {} {}",
                    format_value(value, &settings.format),
                    from,
                    format_value(converted, &settings.format),
                    to
                );
            }
            return Ok(());
        }
        Commands::Units { family } => return list_units(family.as_deref()),
        Commands::Equations { markdown } => {
            if markdown {
                print!("{}", generate_equations_markdown());
            } else {
                list_equations();
            }
            return Ok(());
        }
        Commands::List => {
            for info in CALCULATORS {
                println!("{:<24} {:<24} {}", info.key.replace('_', "-"), info.name, info.summary);
            }
            return Ok(());
        }
    };

    report(item.calculate(&settings), &settings, json)
}

/// Print one result, or its error. Errors also go to stderr as JSON in
/// JSON mode.
fn report(result: Result<CalculationOutput, CalcError>, settings: &Settings, json: bool) -> Result<()> {
    match result {
        Ok(output) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", render::render_output(&output, &settings.format));
            }
            Ok(())
        }
        Err(e) => {
            if json {
                if let Ok(text) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", text);
                }
            }
            Err(e.into())
        }
    }
}

/// Every item runs even when an earlier one fails; the exit status
/// reports whether any failed.
fn run_file(file: &str, settings: &Settings, json: bool) -> Result<()> {
    let text = if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(file).with_context(|| format!("reading {}", file))?
    };

    let items = match serde_json::from_str::<RunDocument>(&text).with_context(|| format!("parsing {}", file))? {
        RunDocument::One(item) => vec![item],
        RunDocument::Many(items) => items,
    };

    let mut failures = 0;
    for (i, item) in items.iter().enumerate() {
        if i > 0 && !json {
            println!();
        }
        if let Err(e) = report(item.calculate(settings), settings, json) {
            eprintln!("Error in item {} ({}): {}", i + 1, item.key(), e);
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} calculations failed", failures, items.len());
    }
    Ok(())
}

fn list_units(family: Option<&str>) -> Result<()> {
    match family {
        Some(name) => {
            let family = UnitFamily::from_str_flexible(name)?;
            println!("{}: {}", family, family.symbols().join(", "));
        }
        None => {
            for family in UnitFamily::ALL {
                println!("{:<20} {}", family.name(), family.symbols().join(", "));
            }
        }
    }
    Ok(())
}

fn list_equations() {
    for category in Equation::all_categories() {
        println!("{}", category_heading(category));
        for equation in Equation::in_category(category) {
            let meta = equation.metadata();
            println!("  {:<36} {:<36} [{}]", meta.name, meta.formula_plain, meta.reference.short_form());
        }
        println!();
    }
}

fn category_heading(category: EquationCategory) -> String {
    let name = category.display_name();
    format!("{}\n{}", name, "-".repeat(name.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use formula_core::calculations::capacitor_energy::CapacitorMode;
    use formula_core::calculations::wire_resistance::WireMode;
    use formula_core::materials::WireMaterial;
    use formula_core::units::{CapacitanceUnit, VoltageUnit};

    fn parse(argv: &[&str]) -> Cli {
        let mut full = vec!["formulary"];
        full.extend_from_slice(argv);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_units_parse_from_symbols_and_aliases() {
        let cli = parse(&["capacitor-energy", "--capacitance", "100", "--capacitance-unit", "uF", "--voltage", "12"]);
        match cli.command {
            Commands::CapacitorEnergy(a) => {
                assert_eq!(a.mode, CapacitorMode::EnergyFromCv);
                assert_eq!(a.capacitance_unit, CapacitanceUnit::Microfarad);
                assert_eq!(a.voltage_unit, VoltageUnit::Volt);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_modes_and_materials_parse_loosely() {
        let cli = parse(&["wire-resistance", "--mode", "Diameter", "--material", "Al"]);
        match cli.command {
            Commands::WireResistance(a) => {
                assert_eq!(a.mode, WireMode::Diameter);
                assert_eq!(a.material, WireMaterial::Aluminum);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_negative_numbers_and_verbosity() {
        let cli = parse(&["-vv", "percentage-change", "--old", "-50", "--new", "25"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::PercentageChange(a) => assert_eq!(a.old_value, Some(-50.0)),
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_bad_unit_is_rejected() {
        let argv = ["formulary", "watts-to-amps", "--power", "60", "--power-unit", "horsepower"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_blank_fields_stay_blank() {
        let cli = parse(&["elongation", "--original", "100", "--final", "102"]);
        let item: CalculationItem = match cli.command {
            Commands::Elongation(a) => a.into(),
            _ => panic!("wrong subcommand"),
        };
        match item {
            CalculationItem::Elongation(input) => assert!(input.elongation.is_none()),
            other => panic!("unexpected {}", other.calc_type()),
        }
    }

    #[test]
    fn test_run_document_accepts_one_or_many() {
        let one = r#"{ "calculator": "work", "force": 10, "distance": 2 }"#;
        assert!(matches!(serde_json::from_str::<RunDocument>(one).unwrap(), RunDocument::One(_)));

        let many = r#"[{ "calculator": "work", "force": 10, "distance": 2 }, { "calculator": "golden_ratio", "value": 1 }]"#;
        match serde_json::from_str::<RunDocument>(many).unwrap() {
            RunDocument::Many(items) => assert_eq!(items.len(), 2),
            RunDocument::One(_) => panic!("expected an array"),
        }
    }
}
