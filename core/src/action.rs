#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoreAction {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
}
