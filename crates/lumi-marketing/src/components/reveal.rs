//! Scroll reveal binding
//!
//! Bridges the DOM to the core reveal engine: one controller per app,
//! an IntersectionObserver per region for the one-shot latch, and a shared
//! window scroll listener for parallax progress. Off-wasm (server render)
//! the intersection primitive does not exist, so regions render fully
//! visible.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use lumi_core::reveal::{RevealState, ScrollRevealController};

#[derive(Clone)]
pub struct RevealContext {
    controller: Rc<RefCell<ScrollRevealController>>,
}

/// Installs the app-wide controller and, on wasm, the viewport listeners
/// that drive parallax progress.
pub fn provide_reveal_context() {
    let ctx = RevealContext {
        controller: Rc::new(RefCell::new(ScrollRevealController::new())),
    };
    #[cfg(target_arch = "wasm32")]
    dom::install_viewport_listeners(&ctx);
    provide_context(ctx);
}

/// Observes the element with DOM id `id` and returns its reveal state.
///
/// Registration happens in an effect after mount and the handle is
/// released on cleanup. On the server the state starts (and stays)
/// revealed, which doubles as the no-JS fallback.
pub fn use_reveal(id: &'static str, threshold: f64, parallax: bool) -> ReadSignal<RevealState> {
    let initial = if cfg!(target_arch = "wasm32") {
        RevealState::hidden(id)
    } else {
        RevealState::revealed(id)
    };
    let (state, set_state) = create_signal(initial);

    #[cfg(target_arch = "wasm32")]
    {
        let ctx = expect_context::<RevealContext>();
        create_effect(move |_| {
            dom::bind_region(ctx.clone(), id, threshold, parallax, set_state);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (threshold, parallax, set_state);
    }

    state
}

/// Entrance-animation class pair used by most sections.
pub fn reveal_class(state: &RevealState) -> &'static str {
    if state.visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-6"
    }
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use std::rc::Rc;

    use leptos::*;
    use lumi_core::reveal::{Rect, Region, RevealState};
    use lumi_core::{CoreError, CoreResult, RegionHandle};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use super::RevealContext;

    fn viewport_height() -> f64 {
        web_sys::window()
            .and_then(|win| win.inner_height().ok())
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0)
    }

    pub(super) fn install_viewport_listeners(ctx: &RevealContext) {
        let Some(win) = web_sys::window() else {
            return;
        };
        let controller = Rc::clone(&ctx.controller);
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            controller.borrow_mut().on_scroll(viewport_height());
        });
        for event in ["scroll", "resize"] {
            if win
                .add_event_listener_with_callback(event, on_scroll.as_ref().unchecked_ref())
                .is_err()
            {
                tracing::debug!(event, "could not attach viewport listener");
            }
        }
        // lives as long as the app does
        on_scroll.forget();
    }

    pub(super) fn bind_region(
        ctx: RevealContext,
        id: &'static str,
        threshold: f64,
        parallax: bool,
        set_state: WriteSignal<RevealState>,
    ) {
        let element = match lookup(id) {
            Ok(element) => Some(element),
            Err(err) => {
                tracing::debug!(id, %err, "region not measurable");
                None
            }
        };

        let bounds: Box<dyn Fn() -> CoreResult<Rect>> = match element.clone() {
            Some(element) => Box::new(move || {
                let rect = element.get_bounding_client_rect();
                Ok(Rect::new(rect.top(), rect.height()))
            }),
            None => Box::new(move || Err(CoreError::Bounds(format!("no element with id {id}")))),
        };
        let mut region = Region::new(id, bounds).with_threshold(threshold);
        if parallax {
            region = region.with_parallax();
        }

        let handle = ctx
            .controller
            .borrow_mut()
            .register(region, move |state| set_state.set(state.clone()));

        let observation = element.and_then(|element| {
            match observe(&ctx, handle, threshold, &element) {
                Ok(observation) => Some(observation),
                Err(err) => {
                    tracing::debug!(id, %err, "intersection observer unavailable, failing open");
                    ctx.controller.borrow_mut().mark_visible(handle);
                    None
                }
            }
        });

        // parallax sections need a progress sample before the first scroll
        if parallax {
            ctx.controller.borrow_mut().on_scroll(viewport_height());
        }

        on_cleanup(move || {
            if let Some((observer, callback)) = observation {
                observer.disconnect();
                drop(callback);
            }
            ctx.controller.borrow_mut().unregister(handle);
        });
    }

    fn lookup(id: &str) -> CoreResult<web_sys::Element> {
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(id))
            .ok_or_else(|| CoreError::Bounds(format!("no element with id {id}")))
    }

    type Observation = (
        web_sys::IntersectionObserver,
        Closure<dyn FnMut(js_sys::Array)>,
    );

    fn observe(
        ctx: &RevealContext,
        handle: RegionHandle,
        threshold: f64,
        element: &web_sys::Element,
    ) -> CoreResult<Observation> {
        let controller = Rc::clone(&ctx.controller);
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    controller
                        .borrow_mut()
                        .on_intersection(handle, entry.intersection_ratio());
                }
            }
        });

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|err| CoreError::Observer(format!("{err:?}")))?;
        observer.observe(element);
        Ok((observer, callback))
    }
}
