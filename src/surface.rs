use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use crate::types::{PlacementError, Point};

/// Drawing primitives the placement logic needs from its surface.
///
/// `Canvas2dSurface` is the browser backend; tests substitute a recording
/// implementation so draw order can be asserted without a DOM.
pub trait DrawSurface {
    /// Blit the background image at the surface origin, at its natural size.
    fn draw_image_at_origin(&mut self);

    /// Draw a text label at a surface-local point with the surface's current
    /// font and fill style.
    fn draw_label(&mut self, text: &str, at: Point);
}

/// A 2d canvas plus the background image it exclusively owns.
pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    image: HtmlImageElement,
}

impl Canvas2dSurface {
    /// Look up the canvas element by id and take its 2d context. Fails if the
    /// element is missing, is not a canvas, or refuses a 2d context.
    pub fn acquire(document: &Document, id: &str) -> Result<Self, PlacementError> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(id)
            .ok_or_else(|| PlacementError::SurfaceNotFound { id: id.to_string() })?
            .dyn_into()
            .map_err(|_| PlacementError::SurfaceNotFound { id: id.to_string() })?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into().ok())
            .ok_or_else(|| PlacementError::ContextUnavailable { id: id.to_string() })?;

        let image = HtmlImageElement::new().expect("failed to create image element");

        Ok(Self { canvas, ctx, image })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// The owned background image. Load listeners attach here before the
    /// source is assigned.
    pub fn image(&self) -> &HtmlImageElement {
        &self.image
    }

    /// Start the asynchronous background image load.
    pub fn begin_image_load(&self, url: &str) {
        self.image.set_src(url);
    }
}

impl DrawSurface for Canvas2dSurface {
    fn draw_image_at_origin(&mut self) {
        self.ctx
            .draw_image_with_html_image_element(&self.image, 0.0, 0.0)
            .ok();
    }

    fn draw_label(&mut self, text: &str, at: Point) {
        self.ctx.fill_text(text, at.x, at.y).ok();
    }
}
