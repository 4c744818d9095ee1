#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

// Simulation core is target-independent so host `cargo test` covers it;
// only the canvas glue below is wasm-specific.

pub mod assign;
pub mod field;
pub mod particle;
pub mod sampler;
pub mod sequencer;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id("universe")
            .ok_or("canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        // The loop runs for the life of the page; the handle's cancel path
        // exists for embedders that tear the effect down.
        let _handle = render::start(canvas)?;
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
