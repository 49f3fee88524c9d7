use std::fmt::Debug;
use std::time::Duration;
use uuid::Uuid;

use super::fragment::Markup;

/// Element lookup understood by every page backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Class(&'a str),
    Attribute(&'a str),
    Tag(&'a str),
    /// `tag[name="value"]`, used for token sources.
    Named { tag: &'a str, name: &'a str },
}

impl Selector<'_> {
    pub fn to_css(&self) -> String {
        match self {
            Selector::Class(class) => format!(".{class}"),
            Selector::Attribute(attribute) => format!("[{attribute}]"),
            Selector::Tag(tag) => tag.to_string(),
            Selector::Named { tag, name } => format!("{tag}[name=\"{name}\"]"),
        }
    }
}

/// Work that runs after a timer fires.
#[derive(Debug, Clone)]
pub enum Deferred<N> {
    FadeNotification(Uuid),
    RemoveNotification(Uuid),
    DetachRow(N),
    Reload,
}

/// The DOM capabilities row actions need.
///
/// `WebPage` implements this over `web_sys` in the browser and `HeadlessPage`
/// over an in-memory tree everywhere else.
pub trait Page {
    type Node: Clone + Debug;

    /// Nearest inclusive ancestor matching `selector`.
    fn closest(&self, node: &Self::Node, selector: &Selector<'_>) -> Option<Self::Node>;

    /// First descendant matching `selector`.
    fn find_within(&self, node: &Self::Node, selector: &Selector<'_>) -> Option<Self::Node>;

    fn query(&self, selector: &Selector<'_>) -> Option<Self::Node>;

    fn query_all(&self, selector: &Selector<'_>) -> Vec<Self::Node>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Current value of a form field.
    fn value(&self, node: &Self::Node) -> Option<String>;

    /// Concatenated text content.
    fn text(&self, node: &Self::Node) -> String;

    fn set_text(&mut self, node: &Self::Node, text: &str);

    fn set_class(&mut self, node: &Self::Node, class: &str);

    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    /// Replace the children of `node`.
    fn replace_content(&mut self, node: &Self::Node, content: &[Markup]);

    fn append(&mut self, parent: &Self::Node, element: &Markup) -> Option<Self::Node>;

    fn append_to_body(&mut self, element: &Markup) -> Option<Self::Node>;

    fn remove(&mut self, node: &Self::Node);

    /// Number of element children.
    fn child_count(&self, node: &Self::Node) -> usize;

    fn is_connected(&self, node: &Self::Node) -> bool;

    /// Blocking yes/no prompt.
    fn confirm(&mut self, message: &str) -> bool;

    fn reload(&mut self);

    /// Best effort; failures are swallowed by the backend.
    fn copy_to_clipboard(&mut self, text: &str);

    /// URL of the current document, used to resolve relative action URLs.
    fn base_url(&self) -> Option<String>;

    fn schedule(&mut self, delay: Duration, task: Deferred<Self::Node>);
}
