use crate::adapters::document::AnchorDocument;
use crate::adapters::sink::TracingSink;
use crate::adapters::viewport::RecordingViewport;
use crate::core::contact_form::{ContactField, ContactForm, FieldView, SubmitOutcome};
use crate::core::navigation::Navigator;
use crate::domain::model::{PortfolioContent, Profile, SectionKind, SectionView};
use crate::domain::ports::{Document, SubmissionSink, Viewport};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub id: String,
    pub title: String,
}

/// Everything the template layer needs to render the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub profile: Profile,
    pub navigation: Vec<NavLink>,
    pub sections: Vec<SectionView>,
    pub contact: Vec<FieldView>,
    pub submitted: bool,
    pub menu_open: bool,
}

impl PageView {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The portfolio page component: content, contact form and navigation state.
pub struct PortfolioPage<D: Document, V: Viewport, S: SubmissionSink> {
    content: PortfolioContent,
    navigator: Navigator<D, V>,
    form: ContactForm<S>,
}

impl PortfolioPage<AnchorDocument, RecordingViewport, TracingSink> {
    pub fn new(content: PortfolioContent) -> Self {
        let document = AnchorDocument::from_content(&content);
        Self::with_parts(content, document, RecordingViewport::new(), TracingSink)
    }
}

impl<D: Document, V: Viewport, S: SubmissionSink> PortfolioPage<D, V, S> {
    pub fn with_parts(content: PortfolioContent, document: D, viewport: V, sink: S) -> Self {
        Self {
            content,
            navigator: Navigator::new(document, viewport),
            form: ContactForm::with_sink(sink),
        }
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    pub fn form(&self) -> &ContactForm<S> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm<S> {
        &mut self.form
    }

    pub fn navigator(&self) -> &Navigator<D, V> {
        &self.navigator
    }

    pub fn is_menu_open(&self) -> bool {
        self.navigator.is_menu_open()
    }

    pub fn is_contact_submitted(&self) -> bool {
        self.form.is_submitted()
    }

    pub fn scroll_to_section(&mut self, section_id: &str) -> bool {
        self.navigator.scroll_to_section(section_id)
    }

    pub fn scroll_to_top(&mut self) {
        self.navigator.scroll_to_top()
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.navigator.toggle_mobile_menu()
    }

    pub fn set_contact_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set_field(field, value)
    }

    pub fn submit_contact(&mut self) -> SubmitOutcome {
        self.form.submit()
    }

    pub fn view(&self) -> PageView {
        PageView {
            profile: self.content.profile.clone(),
            navigation: self
                .content
                .navigation_links()
                .into_iter()
                .map(|(id, title)| NavLink { id, title })
                .collect(),
            sections: SectionKind::ALL
                .iter()
                .map(|kind| self.content.section_view(*kind))
                .collect(),
            contact: ContactField::ALL
                .iter()
                .map(|field| self.form.field_view(*field))
                .collect(),
            submitted: self.form.is_submitted(),
            menu_open: self.navigator.is_menu_open(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_exposes_content_and_state() {
        let mut page = PortfolioPage::new(PortfolioContent::default());
        page.toggle_mobile_menu();
        page.set_contact_field(ContactField::Name, "Al");

        let view = page.view();
        assert_eq!(view.profile.name, "Jodel Fokou");
        assert_eq!(view.navigation.len(), 6);
        assert_eq!(view.navigation[0].id, "about");
        assert_eq!(view.sections.len(), 6);
        assert_eq!(view.contact.len(), 4);
        assert_eq!(view.contact[0].value, "Al");
        assert!(view.contact[0].valid);
        assert!(view.menu_open);
        assert!(!view.submitted);
    }

    #[test]
    fn test_view_serializes_tagged_items() {
        let page = PortfolioPage::new(PortfolioContent::default());
        let json: serde_json::Value = serde_json::from_str(&page.view().to_json().unwrap()).unwrap();

        assert_eq!(json["sections"][3]["kind"], "projects");
        assert_eq!(json["sections"][3]["items"][0]["kind"], "project");
        assert_eq!(json["sections"][5]["items"][0]["kind"], "testimonial");
        assert_eq!(json["contact"][1]["field"], "email");
    }

    #[test]
    fn test_navigation_to_fixed_anchor() {
        let mut page = PortfolioPage::new(PortfolioContent::default());
        page.toggle_mobile_menu();
        assert!(page.scroll_to_section("contact"));
        assert!(!page.is_menu_open());
    }
}
