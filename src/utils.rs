use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::types::Point;

/// Canvas-local coordinates for a mouse event, relative to the element's
/// content box. `get_bounding_client_rect` is border-box, so the border
/// width comes off to keep labels under the cursor on a bordered canvas.
pub fn client_to_canvas_coords(event: &MouseEvent, canvas: &HtmlCanvasElement) -> Point {
    let rect = canvas.get_bounding_client_rect();

    let x = event.client_x() as f64 - rect.left() - canvas.client_left() as f64;
    let y = event.client_y() as f64 - rect.top() - canvas.client_top() as f64;

    Point::new(x, y)
}
