//! Browser host for the wave-line background.
//!
//! Exposes [`mount`] and [`mount_canvas`], which attach a
//! [`ShaderRenderer`] to a canvas, track window resizes, and drive it
//! from `requestAnimationFrame` for the lifetime of the page.

// glow exposes the WebGL2 wrapper only on wasm32.
#![cfg(target_arch = "wasm32")]
#![deny(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wavelines_core::glow;
use wavelines_core::render::{RendererError, ShaderRenderer};
use wavelines_core::{BackingSize, Viewport};
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

/// Mounts the background on the canvas with the given element id.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<(), JsValue> {
    let win = window()?;
    let document = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document on window"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id {canvas_id:?}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("element {canvas_id:?} is not a canvas")))?;
    mount_canvas(canvas)
}

/// Mounts the background on an existing canvas element.
///
/// Acquires a WebGL2 context, sizes the canvas to the window, builds the
/// renderer, subscribes to resize events, and starts the frame loop. If
/// WebGL2 is unavailable or construction fails, the error is reported to
/// the console once and the page is otherwise left alone.
///
/// Mount a canvas at most once; there is no unmount, and a second call
/// would race two frame loops over one context.
#[wasm_bindgen]
pub fn mount_canvas(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let win = window()?;

    let context = canvas
        .get_context("webgl2")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<WebGl2RenderingContext>().ok());
    let context = match context {
        Some(ctx) => ctx,
        None => {
            return Err(report(RendererError::Context(
                "WebGL2 is not supported by this environment".into(),
            )))
        }
    };

    let viewport = current_viewport(&win);
    let backing = apply_viewport(&canvas, &viewport);

    let gl = glow::Context::from_webgl2_context(context);
    let renderer = ShaderRenderer::new(gl, backing, now_ms(&win)).map_err(report)?;
    let renderer = Rc::new(RefCell::new(renderer));

    subscribe_resize(&win, canvas, Rc::clone(&renderer))?;
    start_frame_loop(win, renderer)
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// Reads the current window size and device pixel ratio.
fn current_viewport(win: &web_sys::Window) -> Viewport {
    let width = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width, height, win.device_pixel_ratio())
}

/// Sizes the canvas backing store and CSS box to the viewport.
fn apply_viewport(canvas: &HtmlCanvasElement, viewport: &Viewport) -> BackingSize {
    let backing = viewport.backing();
    canvas.set_width(backing.width);
    canvas.set_height(backing.height);
    let style = canvas.style();
    let _ = style.set_property("width", &viewport.css_width());
    let _ = style.set_property("height", &viewport.css_height());
    backing
}

fn now_ms(win: &web_sys::Window) -> f64 {
    win.performance().map(|p| p.now()).unwrap_or(0.0)
}

/// Logs a renderer error to the console and converts it for the caller.
fn report(e: RendererError) -> JsValue {
    let message = format!("wavelines: {e}");
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn subscribe_resize(
    win: &web_sys::Window,
    canvas: HtmlCanvasElement,
    renderer: Rc<RefCell<ShaderRenderer>>,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut()>::new(move || {
        let Ok(win) = window() else { return };
        let viewport = current_viewport(&win);
        let backing = apply_viewport(&canvas, &viewport);
        renderer.borrow_mut().resize(backing);
    });
    win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    // The background runs for the page lifetime; the listener is never removed.
    closure.forget();
    Ok(())
}

fn start_frame_loop(
    win: web_sys::Window,
    renderer: Rc<RefCell<ShaderRenderer>>,
) -> Result<(), JsValue> {
    let callback_slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let slot_for_closure = Rc::clone(&callback_slot);
    let win_for_closure = win.clone();

    *callback_slot.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        renderer.borrow_mut().frame_tick(now_ms(&win_for_closure));
        if let Some(callback) = slot_for_closure.borrow().as_ref() {
            // A failed reschedule ends the animation; there is nothing to retry.
            let _ = request_frame(&win_for_closure, callback);
        }
    }));

    if let Some(callback) = callback_slot.borrow().as_ref() {
        request_frame(&win, callback)?;
    }
    Ok(())
}

fn request_frame(win: &web_sys::Window, callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    win.request_animation_frame(callback.as_ref().unchecked_ref())
}
