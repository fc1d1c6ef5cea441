use crate::domain::ports::{Document, ScrollBehavior, ScrollBlock, ScrollOptions, Viewport};

const SECTION_SCROLL: ScrollOptions = ScrollOptions {
    behavior: ScrollBehavior::Smooth,
    block: ScrollBlock::Start,
};

/// Anchor navigation and the mobile menu flag.
///
/// `menu_open` is written only by the three handlers below.
pub struct Navigator<D: Document, V: Viewport> {
    document: D,
    viewport: V,
    menu_open: bool,
}

impl<D: Document, V: Viewport> Navigator<D, V> {
    pub fn new(document: D, viewport: V) -> Self {
        Self {
            document,
            viewport,
            menu_open: false,
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Smooth-scrolls the section to the top of the viewport and closes the menu.
    /// Unknown ids are ignored. Returns whether the element was found.
    pub fn scroll_to_section(&mut self, section_id: &str) -> bool {
        match self.document.element_by_id(section_id) {
            Some(element) => {
                self.viewport.scroll_into_view(&element, SECTION_SCROLL);
                self.menu_open = false;
                true
            }
            None => {
                tracing::debug!("No element with id '{}', ignoring navigation", section_id);
                false
            }
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.viewport.scroll_to(0, ScrollBehavior::Smooth);
        self.menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::document::AnchorDocument;
    use crate::adapters::viewport::{RecordingViewport, ScrollCommand};
    use crate::domain::ports::ElementHandle;

    fn navigator() -> Navigator<AnchorDocument, RecordingViewport> {
        Navigator::new(
            AnchorDocument::new(["about", "projects"]),
            RecordingViewport::new(),
        )
    }

    #[test]
    fn test_scroll_to_known_section_closes_menu() {
        let mut nav = navigator();
        nav.toggle_mobile_menu();

        assert!(nav.scroll_to_section("projects"));
        assert!(!nav.is_menu_open());
        assert_eq!(
            nav.viewport().last(),
            Some(&ScrollCommand::IntoView {
                element: ElementHandle {
                    id: "projects".to_string()
                },
                options: SECTION_SCROLL,
            })
        );
    }

    #[test]
    fn test_scroll_to_unknown_section_is_noop() {
        let mut nav = navigator();
        nav.toggle_mobile_menu();

        assert!(!nav.scroll_to_section("nonexistent-id"));
        assert!(nav.is_menu_open());
        assert!(nav.viewport().commands().is_empty());
    }

    #[test]
    fn test_scroll_to_top() {
        let mut nav = navigator();
        nav.toggle_mobile_menu();
        nav.scroll_to_top();

        assert!(!nav.is_menu_open());
        assert_eq!(
            nav.viewport().last(),
            Some(&ScrollCommand::To {
                top: 0,
                behavior: ScrollBehavior::Smooth
            })
        );
    }

    #[test]
    fn test_toggle_mobile_menu_parity() {
        let mut nav = navigator();
        let initial = nav.is_menu_open();

        for calls in 1..=5 {
            nav.toggle_mobile_menu();
            assert_eq!(nav.is_menu_open(), if calls % 2 == 1 { !initial } else { initial });
        }
    }
}
