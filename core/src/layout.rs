use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum LayoutError {
    #[error("ring count must be at least 1")]
    ZeroRingCount,
    #[error("no drawable area for a {viewport_w}x{viewport_h} viewport and {image_w}x{image_h} image")]
    EmptyViewport {
        viewport_w: f32,
        viewport_h: f32,
        image_w: f32,
        image_h: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingLayout {
    pub center_x: f32,
    pub center_y: f32,
    pub max_radius: f32,
    pub radius_step: f32,
    pub ring_count: usize,
}

impl RingLayout {
    pub fn compute(
        viewport_w: f32,
        viewport_h: f32,
        image_w: f32,
        image_h: f32,
        ring_count: usize,
    ) -> Result<Self, LayoutError> {
        if ring_count == 0 {
            return Err(LayoutError::ZeroRingCount);
        }
        let max_radius = viewport_w.min(viewport_h).min(image_w).min(image_h) * 0.5;
        if max_radius <= 0.0 {
            return Err(LayoutError::EmptyViewport {
                viewport_w,
                viewport_h,
                image_w,
                image_h,
            });
        }
        Ok(Self {
            center_x: viewport_w * 0.5,
            center_y: viewport_h * 0.5,
            max_radius,
            radius_step: max_radius / ring_count as f32,
            ring_count,
        })
    }

    pub fn radius_of(&self, index: usize) -> f32 {
        self.max_radius - self.radius_step * index as f32
    }
}
