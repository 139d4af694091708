use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use hoops::simulation::constants::GENE_COUNT;
use hoops::simulation::solver::Solver;

use super::ui::UIState;

pub(super) fn draw_stats_window(egui_ctx: &egui::Context, state: &mut UIState, solver: &Solver) {
    egui::Window::new("Evolution")
        .open(&mut state.panel_open)
        .default_pos([5.0, 100.0])
        .default_width(260.0)
        .resizable(true)
        .show(egui_ctx, |ui| {
            let generation = solver.generation();
            let schedule = generation.schedule();

            ui.label(format!("Generation: {}", solver.generation_count()));
            ui.label(format!("Population: {}", solver.population_size()));
            ui.label(format!("Fitness: {:.3}", generation.highest_fitness()));
            ui.label(format!(
                "Shot {} / {} (tick {})",
                schedule.shots_fired(),
                GENE_COUNT,
                schedule.timer()
            ));

            if let Some(best) = solver.history().best() {
                ui.label(format!(
                    "Best so far: {:.3} (generation {})",
                    best.highest_fitness, best.generation
                ));
            }

            ui.separator();

            ui.label("Mutation chance");
            ui.add(egui::Slider::new(&mut state.mutation_chance, 0.0..=1.0));

            ui.separator();

            ui.label("Highest fitness per generation");
            if solver.history().is_empty() {
                ui.label("Waiting for the first generation...");
                return;
            }

            let points: PlotPoints = solver.history().points().into_iter().collect();
            let line = Line::new(points);

            Plot::new("fitness_plot")
                .height(150.0)
                .show_axes([true, true])
                .include_y(0.0)
                .include_y(1.0)
                .allow_drag(false)
                .allow_zoom(false)
                .show(ui, |plot_ui| {
                    plot_ui.line(line);
                });
        });
}
