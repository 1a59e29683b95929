use crate::ring::Ring;

/// Drawing target for one puzzle frame. Implementations must scope any
/// transform state to a single `draw_ring` call.
pub trait RenderSurface {
    type Image;

    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn clear(&mut self);
    fn draw_ring(&mut self, ring: &Ring<Self::Image>);
}
