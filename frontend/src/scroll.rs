use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::error::DomError;

/// A `scroll` listener on the window, removed again when dropped.
struct ScrollListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ScrollListener {
    fn attach(on_offset: Callback<f64>) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;

        let callback = Closure::<dyn Fn()>::new({
            let window = window.clone();
            let on_offset = on_offset.clone();
            move || {
                if let Ok(offset) = window.scroll_y() {
                    on_offset.emit(offset);
                }
            }
        });
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|err| DomError::listener("add", "scroll", err))?;

        // Initial check, a reload can restore a scroll position without firing `scroll`.
        if let Ok(offset) = window.scroll_y() {
            on_offset.emit(offset);
        }

        Ok(ScrollListener { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            warn!("{}", DomError::listener("remove", "scroll", err));
        }
    }
}

/// Reports the window's vertical offset on every scroll event.
///
/// Registers once on mount and deregisters on unmount. If the listener
/// cannot be attached the callback simply never fires.
#[hook]
pub fn use_scroll_offset(on_offset: Callback<f64>) {
    use_effect_with_deps(
        move |_| {
            let listener = match ScrollListener::attach(on_offset) {
                Ok(listener) => Some(listener),
                Err(err) => {
                    warn!("scroll observer disabled: {}", err);
                    None
                }
            };
            move || drop(listener)
        },
        (),
    );
}
