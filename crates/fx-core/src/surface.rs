use crate::particle::Rgb;

/// A 2D drawable region sized to the viewport.
///
/// The browser frontend backs this with a canvas 2D context; tests use a
/// recording implementation.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Resize the backing store. Drawn content is not preserved.
    fn resize(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: f32);
}
