use crate::domain::ports::{ElementHandle, ScrollBehavior, ScrollOptions, Viewport};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ScrollCommand {
    IntoView {
        element: ElementHandle,
        options: ScrollOptions,
    },
    To {
        top: u32,
        behavior: ScrollBehavior,
    },
}

/// Viewport that records every scroll request it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingViewport {
    commands: Vec<ScrollCommand>,
}

impl RecordingViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[ScrollCommand] {
        &self.commands
    }

    pub fn last(&self) -> Option<&ScrollCommand> {
        self.commands.last()
    }
}

impl Viewport for RecordingViewport {
    fn scroll_into_view(&mut self, element: &ElementHandle, options: ScrollOptions) {
        tracing::debug!("Scrolling #{} into view ({:?})", element.id, options);
        self.commands.push(ScrollCommand::IntoView {
            element: element.clone(),
            options,
        });
    }

    fn scroll_to(&mut self, top: u32, behavior: ScrollBehavior) {
        tracing::debug!("Scrolling viewport to {} ({:?})", top, behavior);
        self.commands.push(ScrollCommand::To { top, behavior });
    }
}
