use std::collections::{BTreeMap, VecDeque};
use std::time::Duration;

use super::fragment::Markup;
use super::page::{Deferred, Page, Selector};

const TEXT_TAG: &str = "#text";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct NodeData {
    tag: String,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Scheduled {
    pub delay: Duration,
    pub task: Deferred<NodeId>,
}

/// In-memory document implementing [`Page`].
///
/// Confirmation answers are scripted, timers are recorded instead of run and
/// reloads and clipboard writes are counted, so a host can drive the whole
/// click-to-reconcile cycle without a browser.
#[derive(Debug, Clone)]
pub struct HeadlessPage {
    nodes: Vec<NodeData>,
    root: NodeId,
    body: NodeId,
    base_url: Option<String>,
    confirm_answers: VecDeque<bool>,
    default_answer: bool,
    prompts: Vec<String>,
    scheduled: Vec<Scheduled>,
    reloads: usize,
    clipboard: Option<String>,
}

impl Default for HeadlessPage {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessPage {
    pub fn new() -> Self {
        let mut page = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
            base_url: None,
            confirm_answers: VecDeque::new(),
            default_answer: true,
            prompts: Vec::new(),
            scheduled: Vec::new(),
            reloads: 0,
            clipboard: None,
        };
        page.root = page.create_element("html");
        page.body = page.create_element("body");
        page.append_child(page.root, page.body);
        page
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    // Building

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(NodeData {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Create `<tag attr..>` under `parent`.
    pub fn element(&mut self, parent: NodeId, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        let node = self.create_element(tag);
        for (name, value) in attributes {
            self.nodes[node.0]
                .attributes
                .insert(name.to_string(), value.to_string());
        }
        self.append_child(parent, node);
        node
    }

    pub fn add_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let node = self.create_element(TEXT_TAG);
        self.nodes[node.0].text = text.to_string();
        self.append_child(parent, node);
        node
    }

    // Scripting and inspection

    /// Queue the answer for the next confirmation prompt.
    pub fn answer_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }

    /// Answer used once the scripted queue is empty.
    pub fn set_default_answer(&mut self, answer: bool) {
        self.default_answer = answer;
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn scheduled(&self) -> &[Scheduled] {
        &self.scheduled
    }

    pub fn take_scheduled(&mut self) -> Vec<Scheduled> {
        std::mem::take(&mut self.scheduled)
    }

    pub fn reload_count(&self) -> usize {
        self.reloads
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes[node.0].style.get(property).map(String::as_str)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes[node.0]
            .children
            .iter()
            .copied()
            .filter(|child| self.nodes[child.0].tag != TEXT_TAG)
            .collect()
    }

    // Internals

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|child| *child != node);
        }
    }

    fn matches(&self, node: NodeId, selector: &Selector<'_>) -> bool {
        let data = &self.nodes[node.0];
        if data.tag == TEXT_TAG {
            return false;
        }
        match selector {
            Selector::Class(class) => data
                .attributes
                .get("class")
                .is_some_and(|classes| classes.split_whitespace().any(|c| c == *class)),
            Selector::Attribute(attribute) => data.attributes.contains_key(*attribute),
            Selector::Tag(tag) => data.tag.eq_ignore_ascii_case(tag),
            Selector::Named { tag, name } => {
                data.tag.eq_ignore_ascii_case(tag)
                    && data.attributes.get("name").is_some_and(|value| value == name)
            }
        }
    }

    /// Descendants of `node` in document order, excluding `node` itself.
    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[node.0].children.iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.nodes[current.0].children.iter().rev().copied());
        }
        out
    }

    fn build(&mut self, markup: &Markup) -> NodeId {
        match markup {
            Markup::Text(text) => {
                let node = self.create_element(TEXT_TAG);
                self.nodes[node.0].text = text.clone();
                node
            }
            Markup::Element {
                tag,
                attributes,
                children,
            } => {
                let node = self.create_element(tag);
                for (name, value) in attributes {
                    self.nodes[node.0]
                        .attributes
                        .insert(name.clone(), value.clone());
                }
                for child in children {
                    let built = self.build(child);
                    self.append_child(node, built);
                }
                node
            }
        }
    }

    fn clear_children(&mut self, node: NodeId) {
        for child in std::mem::take(&mut self.nodes[node.0].children) {
            self.nodes[child.0].parent = None;
        }
    }
}

impl Page for HeadlessPage {
    type Node = NodeId;

    fn closest(&self, node: &NodeId, selector: &Selector<'_>) -> Option<NodeId> {
        let mut current = Some(*node);
        while let Some(candidate) = current {
            if self.matches(candidate, selector) {
                return Some(candidate);
            }
            current = self.nodes[candidate.0].parent;
        }
        None
    }

    fn find_within(&self, node: &NodeId, selector: &Selector<'_>) -> Option<NodeId> {
        self.descendants(*node)
            .into_iter()
            .find(|candidate| self.matches(*candidate, selector))
    }

    fn query(&self, selector: &Selector<'_>) -> Option<NodeId> {
        self.find_within(&self.root, selector)
    }

    fn query_all(&self, selector: &Selector<'_>) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|candidate| self.matches(*candidate, selector))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root).into_iter().find(|candidate| {
            self.nodes[candidate.0]
                .attributes
                .get("id")
                .is_some_and(|value| value == id)
        })
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes[node.0].attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn value(&self, node: &NodeId) -> Option<String> {
        self.attribute(node, "value")
    }

    fn text(&self, node: &NodeId) -> String {
        if self.nodes[node.0].tag == TEXT_TAG {
            return self.nodes[node.0].text.clone();
        }
        self.descendants(*node)
            .into_iter()
            .filter(|candidate| self.nodes[candidate.0].tag == TEXT_TAG)
            .map(|candidate| self.nodes[candidate.0].text.as_str())
            .collect()
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        self.clear_children(*node);
        self.add_text(*node, text);
    }

    fn set_class(&mut self, node: &NodeId, class: &str) {
        self.set_attribute(node, "class", class);
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        self.nodes[node.0]
            .style
            .insert(property.to_string(), value.to_string());
    }

    fn replace_content(&mut self, node: &NodeId, content: &[Markup]) {
        self.clear_children(*node);
        for markup in content {
            let built = self.build(markup);
            self.append_child(*node, built);
        }
    }

    fn append(&mut self, parent: &NodeId, element: &Markup) -> Option<NodeId> {
        let built = self.build(element);
        self.append_child(*parent, built);
        Some(built)
    }

    fn append_to_body(&mut self, element: &Markup) -> Option<NodeId> {
        let body = self.body;
        self.append(&body, element)
    }

    fn remove(&mut self, node: &NodeId) {
        self.detach(*node);
    }

    fn child_count(&self, node: &NodeId) -> usize {
        self.children(*node).len()
    }

    fn is_connected(&self, node: &NodeId) -> bool {
        let mut current = *node;
        loop {
            if current == self.root {
                return true;
            }
            match self.nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.confirm_answers
            .pop_front()
            .unwrap_or(self.default_answer)
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        self.clipboard = Some(text.to_string());
    }

    fn base_url(&self) -> Option<String> {
        self.base_url.clone()
    }

    fn schedule(&mut self, delay: Duration, task: Deferred<NodeId>) {
        self.scheduled.push(Scheduled { delay, task });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_page() -> (HeadlessPage, NodeId, NodeId, NodeId) {
        let mut page = HeadlessPage::new();
        let body = page.body();
        let table = page.element(body, "table", &[]);
        let tbody = page.element(table, "tbody", &[("id", "table-body")]);
        let row = page.element(tbody, "tr", &[]);
        let cell = page.element(row, "td", &[]);
        let link = page.element(cell, "a", &[("class", "dropdown-item delete-action")]);
        let icon = page.element(link, "i", &[("class", "fas fa-trash")]);
        page.add_text(link, "Delete");
        (page, row, link, icon)
    }

    #[test]
    fn test_closest_walks_from_child() {
        let (page, row, link, icon) = row_page();
        assert_eq!(page.closest(&icon, &Selector::Class("delete-action")), Some(link));
        assert_eq!(page.closest(&icon, &Selector::Tag("tr")), Some(row));
        assert_eq!(page.closest(&icon, &Selector::Attribute("data-confirm")), None);
    }

    #[test]
    fn test_text_collects_descendants() {
        let (page, row, link, _) = row_page();
        assert_eq!(page.text(&link), "Delete");
        assert_eq!(page.text(&row), "Delete");
    }

    #[test]
    fn test_remove_disconnects_subtree() {
        let (mut page, row, link, _) = row_page();
        let tbody = page.element_by_id("table-body").unwrap();
        assert_eq!(page.child_count(&tbody), 1);

        page.remove(&row);
        assert!(!page.is_connected(&row));
        assert!(!page.is_connected(&link));
        assert_eq!(page.child_count(&tbody), 0);
        assert_eq!(page.query(&Selector::Class("delete-action")), None);
    }

    #[test]
    fn test_replace_content_builds_markup() {
        let (mut page, _, link, icon) = row_page();
        page.replace_content(
            &link,
            &[Markup::element("i").class("fas fa-check"), Markup::text("Approve")],
        );

        assert!(!page.is_connected(&icon));
        assert_eq!(page.text(&link), "Approve");
        let new_icon = page.find_within(&link, &Selector::Tag("i")).unwrap();
        assert_eq!(page.attribute(&new_icon, "class").as_deref(), Some("fas fa-check"));
    }

    #[test]
    fn test_confirm_uses_script_then_default() {
        let mut page = HeadlessPage::new();
        page.answer_confirm(false);
        page.set_default_answer(true);

        assert!(!page.confirm("first"));
        assert!(page.confirm("second"));
        assert_eq!(page.prompts(), ["first".to_string(), "second".to_string()]);
    }
}
