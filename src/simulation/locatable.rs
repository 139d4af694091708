//! Trait for entities that have a position and can be updated.

use ndarray::Array1;

/// Trait for entities with a position that can be updated over time.
///
/// The presentation layer only needs this view of a ball: where it is and how to
/// advance it.
pub trait Locatable {
    /// Returns a reference to the entity's position in meters.
    fn pos(&self) -> &Array1<f32>;

    /// Updates the entity's state based on the time delta.
    ///
    /// # Arguments
    ///
    /// * `dt` - Time delta since the last update in seconds.
    fn update(&mut self, dt: f32);
}
