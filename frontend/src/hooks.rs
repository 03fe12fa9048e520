use std::{cell::Cell, rc::Rc};

use byline_shared::article_feed::near_bottom;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;
use yew::prelude::*;

use crate::config::SCROLL_THROTTLE_MS;

/// Emit `on_near_bottom` when the viewport gets within 100px of the end of
/// the document.
///
/// Scroll events are throttled: the first event in a burst arms a
/// [`SCROLL_THROTTLE_MS`] timeout and the position is measured once when it
/// fires. The listener is removed when the component unmounts.
#[hook]
pub fn use_infinite_scroll(on_near_bottom: Callback<()>) {
    use_effect_with((), move |_| {
        let armed = Rc::new(Cell::new(false));
        let mounted = Rc::new(Cell::new(true));

        let closure = {
            let armed = armed.clone();
            let mounted = mounted.clone();
            Closure::wrap(Box::new(move || {
                if armed.replace(true) {
                    return;
                }
                let armed = armed.clone();
                let mounted = mounted.clone();
                let on_near_bottom = on_near_bottom.clone();
                Timeout::new(SCROLL_THROTTLE_MS, move || {
                    armed.set(false);
                    if mounted.get() && viewport_near_bottom() {
                        on_near_bottom.emit(());
                    }
                })
                .forget();
            }) as Box<dyn Fn()>)
        };

        if let Some(win) = window() {
            let _ = win.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }

        move || {
            mounted.set(false);
            if let Some(win) = window() {
                let _ = win
                    .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            }
            drop(closure);
        }
    });
}

fn viewport_near_bottom() -> bool {
    let Some(win) = window() else {
        return false;
    };
    let inner_height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let body_height = win
        .document()
        .and_then(|doc| doc.body())
        .map(|body| body.offset_height() as f64)
        .unwrap_or(0.0);
    near_bottom(inner_height, scroll_y, body_height)
}
