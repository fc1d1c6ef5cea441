pub mod contact_form;
pub mod content;
pub mod default_content;
pub mod navigation;
pub mod page;

pub use crate::domain::model::{PortfolioContent, Section, SectionItem, SectionKind};
pub use crate::domain::ports::{Document, SubmissionSink, Viewport};
pub use crate::utils::error::Result;

/// Page anchors that exist outside the content sections.
pub const FIXED_ANCHORS: [&str; 2] = ["home", "contact"];
