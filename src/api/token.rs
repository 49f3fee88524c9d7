use crate::config::Selectors;
use crate::ui::{Page, Selector};

/// Find the anti-forgery token: hidden form field first, then the meta tag.
pub fn resolve_token<P: Page>(page: &P, selectors: &Selectors) -> Option<String> {
    let from_input = page
        .query(&Selector::Named {
            tag: "input",
            name: &selectors.token_input_name,
        })
        .and_then(|input| page.value(&input));

    let from_meta = || {
        page.query(&Selector::Named {
            tag: "meta",
            name: &selectors.token_meta_name,
        })
        .and_then(|meta| page.attribute(&meta, "content"))
    };

    non_blank(from_input).or_else(|| non_blank(from_meta()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::HeadlessPage;

    #[test]
    fn test_prefers_hidden_input() {
        let mut page = HeadlessPage::new();
        let body = page.body();
        page.element(body, "meta", &[("name", "csrf-token"), ("content", "from-meta")]);
        page.element(
            body,
            "input",
            &[
                ("type", "hidden"),
                ("name", "csrfmiddlewaretoken"),
                ("value", "from-input"),
            ],
        );

        let token = resolve_token(&page, &Selectors::default());
        assert_eq!(token.as_deref(), Some("from-input"));
    }

    #[test]
    fn test_falls_back_to_meta_when_input_blank() {
        let mut page = HeadlessPage::new();
        let body = page.body();
        page.element(body, "input", &[("name", "csrfmiddlewaretoken"), ("value", " ")]);
        page.element(body, "meta", &[("name", "csrf-token"), ("content", "from-meta")]);

        let token = resolve_token(&page, &Selectors::default());
        assert_eq!(token.as_deref(), Some("from-meta"));
    }

    #[test]
    fn test_absent_token() {
        let page = HeadlessPage::new();
        assert_eq!(resolve_token(&page, &Selectors::default()), None);
    }
}
