use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Node, Window};

use crate::ui::fragment::Markup;
use crate::ui::{Deferred, Page, Selector};

use super::listener;

/// [`Page`] over the live browser document.
#[derive(Debug, Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// Build a detached node for `markup`. Text becomes a text node, never parsed HTML.
    fn build(&self, markup: &Markup) -> Option<Node> {
        match markup {
            Markup::Text(text) => Some(self.document.create_text_node(text).into()),
            Markup::Element {
                tag,
                attributes,
                children,
            } => {
                let element = self.document.create_element(tag).ok()?;
                for (name, value) in attributes {
                    let _ = element.set_attribute(name, value);
                }
                for child in children {
                    if let Some(child) = self.build(child) {
                        let _ = element.append_child(&child);
                    }
                }
                Some(element.into())
            }
        }
    }
}

impl Page for WebPage {
    type Node = Element;

    fn closest(&self, node: &Element, selector: &Selector<'_>) -> Option<Element> {
        node.closest(&selector.to_css()).ok().flatten()
    }

    fn find_within(&self, node: &Element, selector: &Selector<'_>) -> Option<Element> {
        node.query_selector(&selector.to_css()).ok().flatten()
    }

    fn query(&self, selector: &Selector<'_>) -> Option<Element> {
        self.document.query_selector(&selector.to_css()).ok().flatten()
    }

    fn query_all(&self, selector: &Selector<'_>) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(&selector.to_css()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn value(&self, node: &Element) -> Option<String> {
        match node.dyn_ref::<HtmlInputElement>() {
            Some(input) => Some(input.value()),
            None => node.get_attribute("value"),
        }
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_class(&mut self, node: &Element, class: &str) {
        node.set_class_name(class);
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            let _ = element.style().set_property(property, value);
        }
    }

    fn replace_content(&mut self, node: &Element, content: &[Markup]) {
        node.set_text_content(None);
        for markup in content {
            if let Some(child) = self.build(markup) {
                let _ = node.append_child(&child);
            }
        }
    }

    fn append(&mut self, parent: &Element, element: &Markup) -> Option<Element> {
        let Some(created) = self.build(element).and_then(|node| node.dyn_into::<Element>().ok())
        else {
            log::warn!("Only element markup can be appended");
            return None;
        };
        parent.append_child(&created).ok()?;
        Some(created)
    }

    fn append_to_body(&mut self, element: &Markup) -> Option<Element> {
        let body: Element = self.document.body()?.into();
        self.append(&body, element)
    }

    fn remove(&mut self, node: &Element) {
        node.remove();
    }

    fn child_count(&self, node: &Element) -> usize {
        node.child_element_count() as usize
    }

    fn is_connected(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn reload(&mut self) {
        if let Err(error) = self.window.location().reload() {
            log::error!("Reload failed: {error:?}");
        }
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        // navigator.clipboard is missing on insecure origins; skip quietly.
        let navigator = self.window.navigator();
        let Ok(clipboard) = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")) else {
            return;
        };
        if clipboard.is_undefined() || clipboard.is_null() {
            return;
        }
        let Ok(write_text) = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        else {
            return;
        };
        let Some(write_text) = write_text.dyn_ref::<js_sys::Function>() else {
            return;
        };
        if let Ok(promise) = write_text.call1(&clipboard, &JsValue::from_str(text)) {
            if let Ok(promise) = promise.dyn_into::<js_sys::Promise>() {
                wasm_bindgen_futures::spawn_local(async move {
                    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
                });
            }
        }
    }

    fn base_url(&self) -> Option<String> {
        self.window.location().href().ok()
    }

    fn schedule(&mut self, delay: Duration, task: Deferred<Element>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || listener::run_deferred(task)).forget();
    }
}
