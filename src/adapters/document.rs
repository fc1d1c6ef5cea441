use crate::core::FIXED_ANCHORS;
use crate::domain::model::PortfolioContent;
use crate::domain::ports::{Document, ElementHandle};
use std::collections::BTreeSet;

/// In-memory document holding the anchor ids a rendered page exposes.
#[derive(Debug, Clone, Default)]
pub struct AnchorDocument {
    ids: BTreeSet<String>,
}

impl AnchorDocument {
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// 由內容區塊與固定錨點 (home, contact) 建立
    pub fn from_content(content: &PortfolioContent) -> Self {
        let mut ids: BTreeSet<String> = content
            .section_ids()
            .into_iter()
            .map(str::to_string)
            .collect();
        ids.extend(FIXED_ANCHORS.iter().map(|id| id.to_string()));
        Self { ids }
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl Document for AnchorDocument {
    fn element_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.ids.get(id).map(|id| ElementHandle { id: id.clone() })
    }
}
