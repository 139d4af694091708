use anyhow::{Context, Result};
use clap::Parser;
use hoops::simulation::constants::{HZ, WINDOW_HEIGHT, WINDOW_WIDTH};
use hoops::simulation::params::Params;
use hoops::simulation::solver::Solver;
use macroquad::prelude::*;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod graphics;
mod ui;

/// Evolve basketball shots towards the hoop.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON file with evolution parameters.
    #[arg(long)]
    params: Option<PathBuf>,
    /// Balls per generation.
    #[arg(long)]
    population: Option<usize>,
    /// Chance that an inherited direction or strength is redrawn.
    #[arg(long)]
    mutation_chance: Option<f32>,
    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Genetic Algorithm Hoops".to_owned(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn resolve_params(args: &Args) -> Result<Params> {
    let mut params = match &args.params {
        Some(path) => Params::load(path)
            .with_context(|| format!("loading params from {}", path.display()))?,
        None => Params::default(),
    };

    if let Some(population) = args.population {
        params.population_size = population;
    }
    if let Some(mutation_chance) = args.mutation_chance {
        params.mutation_chance = mutation_chance;
    }
    if args.seed.is_some() {
        params.seed = args.seed;
    }

    params.validate()?;
    Ok(params)
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let params = match resolve_params(&Args::parse()) {
        Ok(params) => params,
        Err(err) => {
            error!("{err:#}");
            return;
        }
    };

    info!(
        population = params.population_size,
        mutation_chance = params.mutation_chance,
        seed = ?params.seed,
        "Starting basketball evolution"
    );

    let mut solver = Solver::from_params(&params);
    let mut ui_state = ui::UIState::new(&solver);
    let mut spin = graphics::BallSpin::default();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Tab) {
            ui_state.panel_open = !ui_state.panel_open;
        }

        solver.update(HZ);

        clear_background(WHITE);

        graphics::draw_balls(&solver, &mut spin);
        graphics::draw_hoop();
        graphics::draw_labels(&solver);

        ui::draw_ui(&mut ui_state, &mut solver);
        ui::process_egui();

        next_frame().await
    }
}
