use web_sys::{DomRect, HtmlCanvasElement, Touch, TouchEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ClientRect {
    pub(crate) fn from_dom(rect: &DomRect) -> Self {
        Self {
            left: rect.left() as f32,
            top: rect.top() as f32,
            width: rect.width() as f32,
            height: rect.height() as f32,
        }
    }
}

pub(crate) trait HasClientRect {
    fn client_rect(&self) -> ClientRect;
}

impl HasClientRect for HtmlCanvasElement {
    fn client_rect(&self) -> ClientRect {
        ClientRect::from_dom(&self.get_bounding_client_rect())
    }
}

// Client coordinates map into surface pixels by removing the element offset
// and undoing any CSS scaling. This runs before every hit-test and drag
// delta computation.
pub(crate) fn screen_to_surface_coords(
    screen_x: f32,
    screen_y: f32,
    rect: ClientRect,
    surface_w: f32,
    surface_h: f32,
) -> Option<(f32, f32)> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let x = (screen_x - rect.left) * surface_w / rect.width;
    let y = (screen_y - rect.top) * surface_h / rect.height;
    Some((x, y))
}

pub(crate) fn first_touch(event: &TouchEvent) -> Option<Touch> {
    event.touches().item(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_removed_before_hit_testing() {
        let rect = ClientRect {
            left: 20.0,
            top: 40.0,
            width: 400.0,
            height: 400.0,
        };
        assert_eq!(
            screen_to_surface_coords(220.0, 240.0, rect, 400.0, 400.0),
            Some((200.0, 200.0))
        );
    }

    #[test]
    fn css_scaling_is_undone() {
        let rect = ClientRect {
            left: 0.0,
            top: 0.0,
            width: 200.0,
            height: 100.0,
        };
        assert_eq!(
            screen_to_surface_coords(100.0, 50.0, rect, 400.0, 400.0),
            Some((200.0, 200.0))
        );
    }

    #[test]
    fn collapsed_element_maps_nothing() {
        let rect = ClientRect {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 400.0,
        };
        assert_eq!(screen_to_surface_coords(10.0, 10.0, rect, 400.0, 400.0), None);
    }
}
