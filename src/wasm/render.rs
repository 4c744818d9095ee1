#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::field::StarField;
use crate::particle::STAR_COLORS;
use crate::sampler::TextRaster;

/// Translucent per-frame fill; a hard clear would kill the motion trails.
const FADE_FILL: &str = "rgba(5, 5, 5, 0.2)";

/// Cancels the scheduled animation-frame chain: once the flag drops, the
/// frame callback returns without re-registering itself.
pub struct RenderHandle {
    running: Rc<Cell<bool>>,
}

impl RenderHandle {
    pub fn cancel(&self) {
        self.running.set(false);
    }
}

/// Rasterizes a text line through a throwaway off-screen canvas and reads
/// back per-pixel alpha. Any canvas failure degrades to empty coverage so
/// the caller just scatters the pool instead of crashing.
struct CanvasTextRaster;

impl TextRaster for CanvasTextRaster {
    fn coverage(&self, text: &str, font_px: f64, width: u32, height: u32) -> Vec<u8> {
        match raster_coverage(text, font_px, width, height) {
            Ok(buf) => buf,
            Err(err) => {
                web_sys::console::warn_1(&err);
                Vec::new()
            }
        }
    }
}

fn raster_coverage(text: &str, font_px: f64, width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    let document = window()
        .ok_or("no window")?
        .document()
        .ok_or("no document")?;
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("no 2d context")?
        .dyn_into()?;

    ctx.set_font(&format!("bold {font_px}px Verdana"));
    ctx.set_fill_style_str("white");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(text, width as f64 / 2.0, height as f64 / 2.0)?;

    let image = ctx.get_image_data(0.0, 0.0, width as f64, height as f64)?;
    let rgba = image.data();
    Ok(rgba.chunks_exact(4).map(|px| px[3]).collect())
}

fn fit_canvas(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let win = window().ok_or("no window")?;
    let w = win.inner_width()?.as_f64().unwrap_or(0.0);
    let h = win.inner_height()?.as_f64().unwrap_or(0.0);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    Ok(())
}

/// Wire up the star field: size the canvas, hook resize and pointer
/// triggers, and start the frame loop.
pub fn start(canvas: HtmlCanvasElement) -> Result<RenderHandle, JsValue> {
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d canvas not supported")?
        .dyn_into()?;

    // Size the backing store before the pool spawns so initial positions
    // land inside the visible area.
    fit_canvas(&canvas)?;

    let field = Rc::new(RefCell::new(StarField::new(
        canvas.width() as f64,
        canvas.height() as f64,
    )));

    // Keep the backing store matched to the window.
    let resize_closure = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            let _ = fit_canvas(&canvas);
        }) as Box<dyn FnMut()>)
    };
    window()
        .ok_or("no window")?
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Pointer triggers advance the morph playlist, sampling against the
    // canvas size at trigger time. Filtering taps on page chrome is the
    // page's responsibility, not ours.
    for event in ["mousedown", "touchstart"] {
        let trigger = {
            let field = field.clone();
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move || {
                let w = canvas.width() as f64;
                let h = canvas.height() as f64;
                field.borrow_mut().advance_pattern(&CanvasTextRaster, w, h);
            }) as Box<dyn FnMut()>)
        };
        window()
            .ok_or("no window")?
            .add_event_listener_with_callback(event, trigger.as_ref().unchecked_ref())?;
        trigger.forget();
    }

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let running = Rc::new(Cell::new(true));
    let flag = running.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !flag.get() {
            return;
        }
        let w = canvas.width() as f64;
        let h = canvas.height() as f64;

        ctx.set_fill_style_str(FADE_FILL);
        ctx.fill_rect(0.0, 0.0, w, h);

        let mut field = field.borrow_mut();
        field.step(w, h);
        for star in field.particles() {
            ctx.set_fill_style_str(STAR_COLORS[star.color]);
            ctx.begin_path();
            // Draw faults are cosmetic; rescheduling below must still run.
            let _ = ctx.arc(star.x, star.y, star.size, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
        drop(field);

        // schedule next
        if let Some(win) = window() {
            let _ =
                win.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));

    window()
        .ok_or("no window")?
        .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;

    Ok(RenderHandle { running })
}
