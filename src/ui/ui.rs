use egui_macroquad::egui;
use hoops::simulation::solver::Solver;

pub struct UIState {
    pub panel_open: bool,
    /// Mutation chance as edited in the panel; applied to the solver when it changes.
    pub mutation_chance: f32,
}

impl UIState {
    pub fn new(solver: &Solver) -> Self {
        Self {
            panel_open: true,
            mutation_chance: solver.mutation_chance(),
        }
    }
}

pub fn draw_ui(state: &mut UIState, solver: &mut Solver) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::light();
        visuals.window_fill = egui::Color32::from_rgba_unmultiplied(250, 250, 250, 230);
        egui_ctx.set_visuals(visuals);

        super::stats::draw_stats_window(egui_ctx, state, solver);
    });

    if (state.mutation_chance - solver.mutation_chance()).abs() > f32::EPSILON {
        solver.set_mutation_chance(state.mutation_chance);
    }
}

pub fn process_egui() {
    egui_macroquad::draw();
}
