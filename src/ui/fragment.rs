use crate::state::NotificationLevel;

/// Class every notification carries; eviction looks for it.
pub const NOTIFICATION_CLASS: &str = "notification-toast";

const NOTIFICATION_STYLE: &str =
    "top: 20px; right: 20px; z-index: 9999; min-width: 300px; max-width: 400px;";

/// Markup written into the page. Pages build it node by node, so `Text` is never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        children: Vec<Markup>,
    },
    Text(String),
}

impl Markup {
    pub fn element(tag: &str) -> Self {
        Markup::Element {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: &str) -> Self {
        Markup::Text(text.to_string())
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        if let Markup::Element { attributes, .. } = &mut self {
            attributes.push((name.to_string(), value.to_string()));
        }
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, child: Markup) -> Self {
        if let Markup::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }
}

/// `<i class="..."></i>Label`, the content of action links and badges.
pub fn icon_label(icon: &str, label: &str) -> Vec<Markup> {
    vec![Markup::element("i").class(icon), Markup::text(label)]
}

pub fn notification(level: NotificationLevel, message: &str) -> Markup {
    let class = format!(
        "{NOTIFICATION_CLASS} alert {} alert-dismissible fade show position-fixed",
        level.alert_class()
    );
    Markup::element("div")
        .class(&class)
        .attr("role", "alert")
        .attr("style", NOTIFICATION_STYLE)
        .child(
            Markup::element("div")
                .class("d-flex align-items-center")
                .child(Markup::element("i").class(&format!("{} me-2", level.icon_class())))
                .child(Markup::element("span").child(Markup::text(message)))
                .child(
                    Markup::element("button")
                        .attr("type", "button")
                        .class("btn-close ms-auto")
                        .attr("data-bs-dismiss", "alert"),
                ),
        )
}

/// Placeholder row shown once the table body runs out of rows.
pub fn empty_row() -> Markup {
    Markup::element("tr").class("empty-row").child(
        Markup::element("td")
            .attr("colspan", "100%")
            .class("text-center py-5")
            .child(
                Markup::element("div")
                    .class("text-600")
                    .child(Markup::element("span").class("fas fa-inbox fs-1 mb-3 d-block"))
                    .child(
                        Markup::element("h5")
                            .class("mb-2")
                            .child(Markup::text("No items found")),
                    )
                    .child(
                        Markup::element("p")
                            .class("mb-0 text-muted")
                            .child(Markup::text("No data available at the moment.")),
                    ),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{HeadlessPage, Page, Selector};

    #[test]
    fn test_icon_label_shape() {
        let content = icon_label("fas fa-toggle-on me-2 text-warning", "Deactivate");
        assert_eq!(
            content,
            [
                Markup::element("i").class("fas fa-toggle-on me-2 text-warning"),
                Markup::text("Deactivate"),
            ]
        );
    }

    #[test]
    fn test_server_text_stays_text() {
        let mut page = HeadlessPage::new();
        let toast = page
            .append_to_body(&notification(
                NotificationLevel::Error,
                "<img src=x onerror=alert(1)>",
            ))
            .unwrap();

        assert_eq!(page.text(&toast), "<img src=x onerror=alert(1)>");
        assert!(page.query(&Selector::Tag("img")).is_none());
    }

    #[test]
    fn test_notification_classes() {
        let mut page = HeadlessPage::new();
        let toast = page
            .append_to_body(&notification(NotificationLevel::Warning, "Careful"))
            .unwrap();

        let class = page.attribute(&toast, "class").unwrap();
        assert!(class.starts_with("notification-toast alert alert-warning"));
        let icon = page.find_within(&toast, &Selector::Tag("i")).unwrap();
        assert_eq!(
            page.attribute(&icon, "class").as_deref(),
            Some("fas fa-exclamation-triangle me-2")
        );
        let message = page.find_within(&toast, &Selector::Tag("span")).unwrap();
        assert_eq!(page.text(&message), "Careful");
    }

    #[test]
    fn test_empty_row_text() {
        let mut page = HeadlessPage::new();
        let body = page.body();
        let row = page.append(&body, &empty_row()).unwrap();

        assert_eq!(page.attribute(&row, "class").as_deref(), Some("empty-row"));
        let heading = page.find_within(&row, &Selector::Tag("h5")).unwrap();
        assert_eq!(page.text(&heading), "No items found");
    }
}
