use crate::domain::model::ContactSubmission;
use serde::Serialize;

/// Handle to an element the host document resolved by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementHandle {
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

pub trait Document {
    fn element_by_id(&self, id: &str) -> Option<ElementHandle>;
}

pub trait Viewport {
    fn scroll_into_view(&mut self, element: &ElementHandle, options: ScrollOptions);
    fn scroll_to(&mut self, top: u32, behavior: ScrollBehavior);
}

/// Receives contact submissions. Replace the default logging sink to wire a real endpoint.
pub trait SubmissionSink: Send + Sync {
    fn report(&self, submission: &ContactSubmission);
}
