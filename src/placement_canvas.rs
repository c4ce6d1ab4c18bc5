use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo_utils::document;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::placement::Placement;
use crate::surface::Canvas2dSurface;
use crate::utils::client_to_canvas_coords;

/// Well-known id the host page contract names for the drawing surface.
pub const DEFAULT_SURFACE_ID: &str = "templateCanvas";

/// Placeholder path; the real uploaded template is served by an external
/// collaborator.
pub const DEFAULT_TEMPLATE_URL: &str = "/path/to/uploaded/template";

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 600;

#[derive(Properties, Clone, PartialEq)]
pub struct PlacementCanvasProps {
    /// Element id of the drawing surface.
    #[prop_or(AttrValue::Static(DEFAULT_SURFACE_ID))]
    pub surface_id: AttrValue,

    /// URL of the template image to render beneath the placed labels.
    #[prop_or(AttrValue::Static(DEFAULT_TEMPLATE_URL))]
    pub image_url: AttrValue,
}

/// Canvas the administrator clicks on to place the "Name" field. Renders the
/// template image once it loads and drops a placeholder label at every click
/// point. Placements are visual-only; nothing is persisted.
#[function_component(PlacementCanvas)]
pub fn placement_canvas(props: &PlacementCanvasProps) -> Html {
    {
        let surface_id = props.surface_id.clone();
        let image_url = props.image_url.clone();

        use_effect_with((), move |_| -> Box<dyn FnOnce()> {
            let placement = match Canvas2dSurface::acquire(&document(), &surface_id) {
                Ok(surface) => Rc::new(RefCell::new(Placement::new(surface))),
                Err(err) => {
                    // Fatal: without a surface there is nothing to place on,
                    // so no listeners are registered at all.
                    log::error!("placement disabled: {err}");
                    return Box::new(|| ());
                }
            };

            let image = placement.borrow().surface().image().clone();
            let canvas = placement.borrow().surface().canvas().clone();

            let load_listener = {
                let placement = placement.clone();
                let image_url = image_url.clone();
                EventListener::new(&image, "load", move |_| {
                    log::info!("template image loaded from {image_url}");
                    placement.borrow_mut().image_loaded();
                })
            };

            // Non-fatal: the surface simply stays blank.
            let error_listener = {
                let image_url = image_url.clone();
                EventListener::new(&image, "error", move |_| {
                    log::warn!("template image failed to load from {image_url}");
                })
            };

            let click_listener = {
                let placement = placement.clone();
                let canvas_for_coords = canvas.clone();
                EventListener::new(&canvas, "click", move |event| {
                    if let Some(mouse_event) = event.dyn_ref::<MouseEvent>() {
                        let point = client_to_canvas_coords(mouse_event, &canvas_for_coords);
                        placement.borrow_mut().click(point);
                    }
                })
            };

            placement.borrow().surface().begin_image_load(&image_url);

            Box::new(move || {
                drop(load_listener);
                drop(error_listener);
                drop(click_listener);
            })
        });
    }

    html! {
        <canvas
            id={props.surface_id.clone()}
            width={CANVAS_WIDTH.to_string()}
            height={CANVAS_HEIGHT.to_string()}
            style="border: 1px solid #ccc; background-color: white; cursor: crosshair;"
        />
    }
}
