use yew::prelude::*;

use crate::placement_canvas::PlacementCanvas;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="flex flex-col w-full h-screen items-center justify-center gap-4 bg-gray-100">
            <p class="text-sm text-gray-600">
                {"Click the template where the recipient name should appear."}
            </p>
            <PlacementCanvas />
        </div>
    }
}
