//! View handles — the only way operations change what the user sees.
//!
//! Operations never look anything up globally; they receive a `View` and
//! mutate it. `PageView` is the in-memory implementation returned to the
//! front end as JSON; test builds also keep an ordered event log.

use serde::Serialize;

/// Fixed client-side destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Main,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Index => "index.html",
            Page::Main => "main.html",
        }
    }
}

/// A single mutation applied to a view, in the order it happened.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Loading(bool),
    Cleared,
    Appended(String),
    Replaced(String),
    Navigated(Page),
}

pub trait View {
    fn set_loading(&mut self, visible: bool);
    fn clear(&mut self);
    fn append(&mut self, html: String);
    fn replace(&mut self, html: String);
    fn navigate(&mut self, page: Page);
}

#[derive(Debug, Default, Serialize)]
pub struct PageView {
    loading: bool,
    html: String,
    redirect: Option<&'static str>,
    #[cfg(test)]
    #[serde(skip)]
    events: Vec<ViewEvent>,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl PageView {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn redirect(&self) -> Option<&'static str> {
        self.redirect
    }

    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }
}

impl View for PageView {
    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
        #[cfg(test)]
        self.events.push(ViewEvent::Loading(visible));
    }

    fn clear(&mut self) {
        self.html.clear();
        #[cfg(test)]
        self.events.push(ViewEvent::Cleared);
    }

    fn append(&mut self, html: String) {
        self.html.push_str(&html);
        #[cfg(test)]
        self.events.push(ViewEvent::Appended(html));
    }

    fn replace(&mut self, html: String) {
        self.html.clone_from(&html);
        #[cfg(test)]
        self.events.push(ViewEvent::Replaced(html));
    }

    fn navigate(&mut self, page: Page) {
        self.redirect = Some(page.path());
        #[cfg(test)]
        self.events.push(ViewEvent::Navigated(page));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_accumulates_and_clear_resets() {
        let mut view = PageView::new();
        view.append("<p>a</p>".to_string());
        view.append("<p>b</p>".to_string());
        assert_eq!(view.html(), "<p>a</p><p>b</p>");

        view.clear();
        assert!(view.html().is_empty());
        assert_eq!(view.events().last(), Some(&ViewEvent::Cleared));
    }

    #[test]
    fn test_replace_overwrites_content() {
        let mut view = PageView::new();
        view.append("old".to_string());
        view.replace("new".to_string());
        assert_eq!(view.html(), "new");
    }

    #[test]
    fn test_navigate_sets_redirect_path() {
        let mut view = PageView::new();
        view.navigate(Page::Main);
        assert_eq!(view.redirect(), Some("main.html"));
    }

    #[test]
    fn test_serialized_view_omits_event_log() {
        let mut view = PageView::new();
        view.set_loading(true);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["loading"], true);
        assert!(json.get("events").is_none());
    }
}
