//! Animation frame and timer scheduling
//!
//! One-shot callbacks use `Closure::once_into_js`, which frees itself after the
//! browser calls it. Intervals live for the page and are leaked on purpose.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::dom::window;
use crate::error::FxResult;

/// Schedule `callback` for the next display refresh; returns the frame handle
pub fn request_frame(callback: impl FnOnce(f64) + 'static) -> FxResult<i32> {
    let closure = Closure::once_into_js(callback);
    Ok(window()?.request_animation_frame(closure.unchecked_ref())?)
}

pub fn cancel_frame(handle: i32) {
    if let Ok(window) = window() {
        let _ = window.cancel_animation_frame(handle);
    }
}

/// Run `callback` once after `delay_ms`; returns the timer handle
pub fn set_timeout(delay_ms: u32, callback: impl FnOnce() + 'static) -> FxResult<i32> {
    let closure = Closure::once_into_js(callback);
    Ok(window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref(),
        delay_ms as i32,
    )?)
}

pub fn clear_timeout(handle: i32) {
    if let Ok(window) = window() {
        window.clear_timeout_with_handle(handle);
    }
}

/// Run `callback` every `period_ms` for the rest of the page's life
pub fn set_interval(period_ms: u32, callback: impl FnMut() + 'static) -> FxResult<i32> {
    let closure = Closure::<dyn FnMut()>::new(callback);
    let handle = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        period_ms as i32,
    )?;
    closure.forget();
    Ok(handle)
}

/// Milliseconds since the Unix epoch
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
