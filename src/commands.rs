//! The command line interface for the planner.
use crate::demand::aggregate_demand;
use crate::input::{load_inputs, Inputs};
use crate::log;
use crate::output::{
    create_output_directory, get_output_dir, write_schedule, write_single_crop_proposals,
};
use crate::recommendation::monoculture::propose_single_crops;
use crate::recommendation::recommend_rotation;
use crate::settings::Settings;
use crate::units::MoneyPerMass;
use ::log::info;
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// The command line interface for the planner.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Recommend a planting schedule for a farm.
    Run {
        /// Path to the farm directory.
        farm_dir: PathBuf,
        /// Rank single-crop proposals instead of solving the rotation.
        #[arg(long)]
        single: bool,
        /// Directory for output files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Check that a farm directory's input files are valid.
    Validate {
        /// Path to the farm directory.
        farm_dir: PathBuf,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Run {
                farm_dir,
                single,
                output_dir,
            } => handle_run_command(&farm_dir, single, output_dir.as_deref()),
            Self::Validate { farm_dir } => handle_validate_command(&farm_dir),
        }
    }
}

/// Parse CLI arguments and start the planner
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // Output program help when invoked without a command
        let help_str = Cli::command().render_long_help().to_string();
        println!("{help_str}");
        return Ok(());
    };

    command.execute()
}

/// Initialise the program logger, if it is not running already
fn init_logger(settings: &Settings) -> Result<()> {
    if !log::is_logger_initialised() {
        log::init(Some(settings.log_level.as_str())).context("Failed to initialise logging.")?;
    }

    Ok(())
}

/// Handle the `run` command.
pub fn handle_run_command(farm_dir: &Path, single: bool, output_dir: Option<&Path>) -> Result<()> {
    let settings = Settings::from_path(farm_dir).context("Failed to load settings.")?;
    init_logger(&settings)?;

    let inputs = load_inputs(farm_dir).context("Failed to load farm inputs.")?;
    info!("Loaded farm inputs from {}", farm_dir.display());

    // Get path to output folder
    let pathbuf: PathBuf;
    let output_path = if let Some(p) = output_dir {
        p
    } else {
        pathbuf = get_output_dir(farm_dir)?;
        &pathbuf
    };

    create_output_directory(output_path).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_path.display()
        )
    })?;
    info!("Output folder: {}", output_path.display());

    let unit_cost = MoneyPerMass(settings.unit_cost_per_kg);
    if single {
        run_single(&inputs, unit_cost, output_path)
    } else {
        run_rotation(&inputs, unit_cost, output_path)
    }
}

/// Solve the rotation problem and write the planting schedule
fn run_rotation(inputs: &Inputs, unit_cost: MoneyPerMass, output_path: &Path) -> Result<()> {
    let recommendation =
        recommend_rotation(&inputs.crops, &inputs.demand, &inputs.farm, unit_cost);
    info!(
        "Rotation solve finished: {} ({} plantings, total profit {:.2} €)",
        recommendation.status,
        recommendation.schedule.len(),
        recommendation.total_profit
    );

    write_schedule(output_path, &recommendation.schedule)
        .context("Failed to write planting schedule.")?;

    Ok(())
}

/// Rank single-crop projections and write the proposals
fn run_single(inputs: &Inputs, unit_cost: MoneyPerMass, output_path: &Path) -> Result<()> {
    let demand = aggregate_demand(&inputs.demand);
    let proposals = propose_single_crops(&inputs.crops, &demand, &inputs.farm, unit_cost);
    info!("Projected {} single-crop proposals", proposals.len());

    write_single_crop_proposals(output_path, &proposals)
        .context("Failed to write single-crop proposals.")?;

    Ok(())
}

/// Handle the `validate` command.
pub fn handle_validate_command(farm_dir: &Path) -> Result<()> {
    let settings = Settings::from_path(farm_dir).context("Failed to load settings.")?;
    init_logger(&settings)?;

    // Load/validate the inputs
    load_inputs(farm_dir).context("Failed to validate farm inputs.")?;
    info!("Farm input validation successful!");

    Ok(())
}
