//! # Hoops - Evolving Basketball Shots
//!
//! Populations of basketballs are launched under gravity and air drag towards a
//! hoop. Every ball fires three shots, each a (direction, strength) gene. When a
//! generation's shots are spent, the ball that ended closest to the target
//! becomes the parent of the next generation.
//!
//! ## Features
//!
//! - Fixed-timestep 2D ball physics with wall and rim bounces
//! - Lockstep shot schedule shared by the whole generation
//! - Winner-takes-all inheritance with optional mutation
//! - Injectable, seedable random source for reproducible runs
//! - Real-time visualization with egui/macroquad
//!
//! ## Core Modules
//!
//! - [`simulation::basketball`] - Ball physics, genes and fitness
//! - [`simulation::generation`] - Population and shot schedule
//! - [`simulation::solver`] - Generational loop and inheritance
//! - [`simulation::gene`] - Gene representation and the inheritance rule

/// Core simulation logic and data structures.
pub mod simulation {
    /// A single ball with physical and genetic state.
    pub mod basketball;
    /// Fixed world, physics and schedule constants.
    pub mod constants;
    /// Launch genes and inheritance.
    pub mod gene;
    /// A population of balls on a shared shot schedule.
    pub mod generation;
    /// 2D vector helpers.
    pub mod geometric_utils;
    /// Per-generation outcome tracking.
    pub mod history;
    /// Trait for locatable entities that can be updated.
    ///
    /// The [`locatable::Locatable`] trait is implemented by
    /// [`basketball::Basketball`] so drawing code can stay agnostic of ball internals.
    pub mod locatable;
    /// Runtime evolution parameters.
    pub mod params;
    /// Generational evolutionary loop.
    pub mod solver;
}
