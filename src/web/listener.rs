use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::api::HttpTransport;
use crate::app::RowActions;
use crate::config::RowActionsConfig;
use crate::events::Dispatch;
use crate::ui::Deferred;

use super::dom::WebPage;

type WebRowActions = RowActions<WebPage, HttpTransport>;

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<WebRowActions>>> = const { RefCell::new(None) };
    static CLICK_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
    static LOAD_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
}

/// Attach the single document-level click listener. Later calls are no-ops.
pub(super) fn install(config: RowActionsConfig) -> Result<()> {
    if CLICK_HANDLER.with(|slot| slot.borrow().is_some()) {
        return Ok(());
    }

    let window = web_sys::window().context("window is unavailable")?;
    let document = window.document().context("document is unavailable")?;
    let transport = HttpTransport::new().context("failed to build HTTP client")?;

    let page = WebPage::new(window, document.clone());
    let controller = Rc::new(RowActions::new(config, page, transport));
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));

    let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(on_click));
    document
        .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        .map_err(|error| anyhow!("failed to attach click listener: {error:?}"))?;
    CLICK_HANDLER.with(|slot| *slot.borrow_mut() = Some(callback));

    log::info!("Row actions listener installed");
    Ok(())
}

/// Wait for `DOMContentLoaded` so the config element has been parsed.
pub(super) fn install_after_load(document: &web_sys::Document) -> Result<()> {
    let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(|_event: web_sys::Event| {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        if let Err(error) = install(super::read_config(&document)) {
            log::error!("{error:#}");
        }
    }));
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())
        .map_err(|error| anyhow!("failed to wait for DOMContentLoaded: {error:?}"))?;
    LOAD_HANDLER.with(|slot| *slot.borrow_mut() = Some(callback));
    Ok(())
}

fn controller() -> Option<Rc<WebRowActions>> {
    CONTROLLER.with(|slot| slot.borrow().clone())
}

fn on_click(event: web_sys::Event) {
    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return;
    };
    let Some(controller) = controller() else {
        return;
    };

    let dispatch = controller.dispatch(&target);
    if dispatch.prevents_default() {
        event.prevent_default();
    }
    if let Dispatch::Run(pending) = dispatch {
        spawn_local(async move {
            controller.execute(pending).await;
        });
    }
}

pub(super) fn run_deferred(task: Deferred<Element>) {
    if let Some(controller) = controller() {
        controller.run_deferred(task);
    }
}
