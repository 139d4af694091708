use hoops::simulation::basketball::Basketball;
use hoops::simulation::constants::{RIM_MIN_X, RIM_RADIUS, RIM_Y, TARGET_POSITION, UNIT, WINDOW_WIDTH};
use hoops::simulation::locatable::Locatable;
use hoops::simulation::solver::Solver;
use macroquad::prelude::*;

/// Frames in one full ball rotation.
const SPIN_FRAMES: i64 = 165;

const TEXT_COLOR: Color = Color::new(27.0 / 255.0, 30.0 / 255.0, 41.0 / 255.0, 1.0);
const BALL_COLOR: Color = Color::new(0.91, 0.45, 0.13, 1.0);
const RIM_COLOR: Color = Color::new(0.85, 0.25, 0.05, 1.0);

trait ToScreen {
    fn to_screen(&self) -> Vec2;
}

impl<T: Locatable> ToScreen for T {
    fn to_screen(&self) -> Vec2 {
        let pos = self.pos();
        vec2(pos[0] * UNIT, pos[1] * UNIT)
    }
}

/// Per-ball rotation accumulators, advanced by horizontal velocity each frame.
#[derive(Default)]
pub struct BallSpin {
    spins: Vec<f32>,
    generation: u32,
}

impl BallSpin {
    fn sync(&mut self, generation: u32, balls: usize) {
        if self.generation != generation || self.spins.len() != balls {
            self.generation = generation;
            self.spins.clear();
            self.spins.resize(balls, 0.0);
        }
    }

    fn advance(&mut self, i: usize, velocity_x: f32) -> f32 {
        let frame = (self.spins[i].trunc() as i64).rem_euclid(SPIN_FRAMES);
        self.spins[i] += velocity_x;
        frame as f32 / SPIN_FRAMES as f32 * std::f32::consts::TAU
    }
}

fn fitness_color(fitness: f32) -> Color {
    let t = fitness.clamp(0.0, 1.0);
    Color::new(1.0 - t, t, 0.0, 1.0)
}

fn draw_ball(ball: &Basketball, angle: f32) {
    let center = ball.to_screen();
    let radius = ball.radius() * UNIT;

    // glow
    draw_circle(
        center.x + 1.0,
        center.y + 1.0,
        radius + 5.0,
        fitness_color(ball.fitness()),
    );
    draw_circle(center.x, center.y, radius, BALL_COLOR);

    for seam in 0..2 {
        let a = angle + seam as f32 * std::f32::consts::FRAC_PI_2;
        let offset = vec2(a.cos(), a.sin()) * radius;
        draw_line(
            center.x - offset.x,
            center.y - offset.y,
            center.x + offset.x,
            center.y + offset.y,
            2.0,
            BLACK,
        );
    }
    draw_circle_lines(center.x, center.y, radius, 2.0, BLACK);
}

pub fn draw_hoop() {
    let rim_y = RIM_Y * UNIT;
    let rim_x = RIM_MIN_X * UNIT;
    let rim_thickness = RIM_RADIUS * UNIT * 0.2;

    // backboard
    draw_rectangle(WINDOW_WIDTH - 12.0, rim_y - 110.0, 12.0, 140.0, DARKGRAY);

    // net
    let net_depth = 70.0;
    let strands = 6;
    let span = WINDOW_WIDTH - 12.0 - rim_x;
    for i in 0..=strands {
        let top = rim_x + span * i as f32 / strands as f32;
        let bottom = rim_x + span * 0.2 + span * 0.6 * i as f32 / strands as f32;
        draw_line(top, rim_y, bottom, rim_y + net_depth, 1.5, LIGHTGRAY);
    }
    draw_line(
        rim_x + span * 0.2,
        rim_y + net_depth,
        rim_x + span * 0.8,
        rim_y + net_depth,
        1.5,
        LIGHTGRAY,
    );

    draw_line(rim_x, rim_y, WINDOW_WIDTH - 12.0, rim_y, rim_thickness, RIM_COLOR);

    // fitness target
    let target = vec2(TARGET_POSITION.0 * UNIT, TARGET_POSITION.1 * UNIT);
    draw_circle_lines(target.x, target.y, 6.0, 1.0, GRAY);
}

pub fn draw_balls(solver: &Solver, spin: &mut BallSpin) {
    let balls = solver.generation().balls();
    spin.sync(solver.generation_count(), balls.len());

    for (i, ball) in balls.iter().enumerate() {
        let angle = spin.advance(i, ball.velocity[0]);
        draw_ball(ball, angle);
    }
}

pub fn draw_labels(solver: &Solver) {
    let font_size = 24.0;
    let labels = [
        format!("Generation: {}", solver.generation_count()),
        format!("Population: {}", solver.population_size()),
        format!("Fitness:    {:.3}", solver.generation().highest_fitness()),
    ];

    for (i, label) in labels.iter().enumerate() {
        draw_text(label, 5.0, 22.0 + i as f32 * 25.0, font_size, TEXT_COLOR);
    }

    let fps = format!("@{}FPS", get_fps());
    let fps_size = measure_text(&fps, None, font_size as u16, 1.0);
    draw_text(
        &fps,
        WINDOW_WIDTH - fps_size.width - 5.0,
        22.0,
        font_size,
        TEXT_COLOR,
    );
}
