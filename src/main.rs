//! Command-line planner: load a scenario, run A*, render the result.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use marga_grid::render::{SvgConfig, SvgRenderer, render_ascii, save_pgm};
use marga_grid::{AStarPlanner, Scenario};

/// Grid path planner with static visualization
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario YAML file (built-in demo scenario when omitted)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Output directory for rendered files
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Write an SVG rendering
    #[arg(long)]
    svg: bool,

    /// Write a PGM rendering
    #[arg(long)]
    pgm: bool,

    /// Suppress the ASCII grid on stdout
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = match &args.scenario {
        Some(path) => {
            log::info!("Loading scenario from {}", path.display());
            Scenario::from_file(path)?
        }
        None => {
            log::info!("No scenario file given, using built-in demo");
            Scenario::demo()
        }
    };

    let counts = scenario.grid.cell_counts();
    log::info!("Scenario '{}'", scenario.name);
    log::info!(
        "  Grid: {}x{}, {} wall cells",
        scenario.grid.rows(),
        scenario.grid.cols(),
        counts.wall
    );
    log::info!("  Start: ({}, {})", scenario.start.row, scenario.start.col);
    log::info!("  Goal: ({}, {})", scenario.goal.row, scenario.goal.col);

    let planner = AStarPlanner::new(&scenario.grid);
    let result = planner.find_path(scenario.start, scenario.goal);

    if result.success {
        log::info!(
            "Path found: cost={} cells={} expanded={}",
            result.cost,
            result.length_cells(),
            result.nodes_expanded
        );
    } else if let Some(reason) = &result.failure_reason {
        log::warn!(
            "Planning failed: {:?} (expanded {} nodes)",
            reason,
            result.nodes_expanded
        );
    }

    if !args.quiet {
        println!("{}", render_ascii(&scenario, &result));
    }

    if args.svg || args.pgm {
        std::fs::create_dir_all(&args.output)?;
    }

    let file_stem = scenario.name.to_lowercase().replace(' ', "_");

    if args.svg {
        let path = args.output.join(format!("{}.svg", file_stem));
        SvgRenderer::new(&scenario, SvgConfig::default())
            .with_result(&result)
            .save(&path)?;
        log::info!("Wrote {}", path.display());
    }

    if args.pgm {
        let path = args.output.join(format!("{}.pgm", file_stem));
        save_pgm(&scenario, &result, &path)?;
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}
