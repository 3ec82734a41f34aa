//! Reveal binding for dashboard panels
//!
//! The dashboard only uses the one-shot latch (no parallax), so this
//! binder is a slimmer cousin of the marketing one: one controller in
//! context, one IntersectionObserver per observed panel, fail-open when
//! the observer cannot be built.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use lumi_core::reveal::{RevealState, ScrollRevealController};

#[derive(Clone)]
pub struct RevealContext(Rc<RefCell<ScrollRevealController>>);

pub fn provide_reveal_context() {
    provide_context(RevealContext(Rc::new(RefCell::new(
        ScrollRevealController::new(),
    ))));
}

/// Latch-only reveal for the element with DOM id `id`.
pub fn use_reveal(id: &'static str, threshold: f64) -> ReadSignal<RevealState> {
    let (state, set_state) = create_signal(RevealState::hidden(id));

    #[cfg(target_arch = "wasm32")]
    {
        let ctx = expect_context::<RevealContext>();
        create_effect(move |_| {
            wire::observe_panel(ctx.clone(), id, threshold, set_state);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // never reached at runtime: the dashboard only ships as wasm
        let _ = (threshold, set_state);
    }

    state
}

#[cfg(target_arch = "wasm32")]
mod wire {
    use std::rc::Rc;

    use leptos::*;
    use lumi_core::reveal::{Rect, Region, RevealState};
    use lumi_core::{CoreError, CoreResult};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use super::RevealContext;

    pub(super) fn observe_panel(
        ctx: RevealContext,
        id: &'static str,
        threshold: f64,
        set_state: WriteSignal<RevealState>,
    ) {
        let element = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(id));

        let bounds: Box<dyn Fn() -> CoreResult<Rect>> = match element.clone() {
            Some(element) => Box::new(move || {
                let rect = element.get_bounding_client_rect();
                Ok(Rect::new(rect.top(), rect.height()))
            }),
            None => Box::new(move || Err(CoreError::Bounds(format!("no element with id {id}")))),
        };

        let handle = ctx.0.borrow_mut().register(
            Region::new(id, bounds).with_threshold(threshold),
            move |state| set_state.set(state.clone()),
        );

        let observation = element.and_then(|element| {
            let controller = Rc::clone(&ctx.0);
            let callback =
                Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
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
            match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => {
                    observer.observe(&element);
                    Some((observer, callback))
                }
                Err(err) => {
                    tracing::debug!(id, ?err, "intersection observer unavailable, failing open");
                    ctx.0.borrow_mut().mark_visible(handle);
                    None
                }
            }
        });

        on_cleanup(move || {
            if let Some((observer, callback)) = observation {
                observer.disconnect();
                drop(callback);
            }
            ctx.0.borrow_mut().unregister(handle);
        });
    }
}
