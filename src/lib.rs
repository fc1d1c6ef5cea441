pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{document::AnchorDocument, sink::TracingSink, viewport::RecordingViewport};
pub use crate::core::contact_form::{
    ContactField, ContactForm, FieldError, SubmitOutcome, SubmitState, CONFIRMATION_RESET_DELAY,
};
pub use crate::core::navigation::Navigator;
pub use crate::core::page::{PageView, PortfolioPage};
pub use crate::domain::model::{ContactSubmission, PortfolioContent, SectionItem, SectionKind};
pub use crate::utils::error::{PortfolioError, Result};
