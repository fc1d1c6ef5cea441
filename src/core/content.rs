use crate::domain::model::{
    AboutItem, ExperienceEntry, PortfolioContent, Project, Section, SectionDescriptor, SectionItem,
    SectionKind, SectionView, Service, SkillGroup, Testimonial,
};
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{
    validate_anchor_id, validate_link, validate_non_empty_string, validate_unique_ids, Validate,
};

/// Per-variant rules for the items a section holds.
pub trait ContentItem {
    /// `path` is the dotted location used in error messages, e.g. `skills.items[2]`.
    fn validate_item(&self, path: &str) -> Result<()>;
    fn to_section_item(&self) -> SectionItem;
}

impl ContentItem for AboutItem {
    fn validate_item(&self, path: &str) -> Result<()> {
        validate_non_empty_string(&format!("{}.content", path), &self.content)
    }

    fn to_section_item(&self) -> SectionItem {
        SectionItem::About(self.clone())
    }
}

impl ContentItem for SkillGroup {
    fn validate_item(&self, path: &str) -> Result<()> {
        validate_non_empty_string(&format!("{}.heading", path), &self.heading)?;
        validate_list(path, &self.list)
    }

    fn to_section_item(&self) -> SectionItem {
        SectionItem::Skill(self.clone())
    }
}

impl ContentItem for ExperienceEntry {
    fn validate_item(&self, path: &str) -> Result<()> {
        validate_non_empty_string(&format!("{}.heading", path), &self.heading)?;
        validate_non_empty_string(&format!("{}.content", path), &self.content)?;
        validate_list(path, &self.list)
    }

    fn to_section_item(&self) -> SectionItem {
        SectionItem::Experience(self.clone())
    }
}

impl ContentItem for Project {
    fn validate_item(&self, path: &str) -> Result<()> {
        validate_non_empty_string(&format!("{}.heading", path), &self.heading)?;
        validate_non_empty_string(&format!("{}.content", path), &self.content)?;
        for (i, tech) in self.technologies.iter().enumerate() {
            validate_non_empty_string(&format!("{}.technologies[{}]", path, i), tech)?;
        }
        if let Some(link) = &self.link {
            validate_link(&format!("{}.link", path), link)?;
        }
        Ok(())
    }

    fn to_section_item(&self) -> SectionItem {
        SectionItem::Project(self.clone())
    }
}

impl ContentItem for Service {
    fn validate_item(&self, path: &str) -> Result<()> {
        validate_non_empty_string(&format!("{}.heading", path), &self.heading)?;
        validate_non_empty_string(&format!("{}.content", path), &self.content)?;
        validate_non_empty_string(&format!("{}.icon", path), &self.icon)
    }

    fn to_section_item(&self) -> SectionItem {
        SectionItem::Service(self.clone())
    }
}

impl ContentItem for Testimonial {
    fn validate_item(&self, path: &str) -> Result<()> {
        validate_non_empty_string(&format!("{}.name", path), &self.name)?;
        validate_non_empty_string(&format!("{}.role", path), &self.role)?;
        validate_non_empty_string(&format!("{}.company", path), &self.company)?;
        validate_non_empty_string(&format!("{}.content", path), &self.content)
    }

    fn to_section_item(&self) -> SectionItem {
        SectionItem::Testimonial(self.clone())
    }
}

fn validate_list(path: &str, list: &[String]) -> Result<()> {
    if list.is_empty() {
        return Err(PortfolioError::ContentError {
            section: path.to_string(),
            message: "list must contain at least one entry".to_string(),
        });
    }
    for (i, entry) in list.iter().enumerate() {
        validate_non_empty_string(&format!("{}.list[{}]", path, i), entry)?;
    }
    Ok(())
}

impl<T: ContentItem> Section<T> {
    pub fn validate_section(&self, kind: SectionKind) -> Result<()> {
        validate_anchor_id(&format!("{}.id", kind), &self.id)?;
        validate_non_empty_string(&format!("{}.title", kind), &self.title)?;
        for (i, item) in self.items.iter().enumerate() {
            item.validate_item(&format!("{}.items[{}]", kind, i))?;
        }
        Ok(())
    }

    pub fn descriptor(&self, kind: SectionKind) -> SectionDescriptor {
        SectionDescriptor {
            id: self.id.clone(),
            title: self.title.clone(),
            kind,
            item_count: self.items.len(),
        }
    }

    pub fn to_view(&self, kind: SectionKind) -> SectionView {
        SectionView {
            id: self.id.clone(),
            title: self.title.clone(),
            kind,
            items: self.items.iter().map(ContentItem::to_section_item).collect(),
        }
    }
}

impl PortfolioContent {
    /// 依頁面順序列出所有區塊
    pub fn sections(&self) -> Vec<SectionDescriptor> {
        SectionKind::ALL
            .iter()
            .map(|kind| self.descriptor(*kind))
            .collect()
    }

    pub fn section_ids(&self) -> Vec<&str> {
        vec![
            self.about.id.as_str(),
            self.skills.id.as_str(),
            self.experience.id.as_str(),
            self.projects.id.as_str(),
            self.services.id.as_str(),
            self.testimonials.id.as_str(),
        ]
    }

    pub fn find_section(&self, id: &str) -> Option<SectionView> {
        SectionKind::ALL
            .iter()
            .find(|kind| self.section_id(**kind) == id)
            .map(|kind| self.section_view(*kind))
    }

    /// Header menu entries: `(anchor id, title)` in page order.
    pub fn navigation_links(&self) -> Vec<(String, String)> {
        self.sections()
            .into_iter()
            .map(|section| (section.id, section.title))
            .collect()
    }

    pub fn section_view(&self, kind: SectionKind) -> SectionView {
        match kind {
            SectionKind::About => self.about.to_view(kind),
            SectionKind::Skills => self.skills.to_view(kind),
            SectionKind::Experience => self.experience.to_view(kind),
            SectionKind::Projects => self.projects.to_view(kind),
            SectionKind::Services => self.services.to_view(kind),
            SectionKind::Testimonials => self.testimonials.to_view(kind),
        }
    }

    fn section_id(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::About => &self.about.id,
            SectionKind::Skills => &self.skills.id,
            SectionKind::Experience => &self.experience.id,
            SectionKind::Projects => &self.projects.id,
            SectionKind::Services => &self.services.id,
            SectionKind::Testimonials => &self.testimonials.id,
        }
    }

    fn descriptor(&self, kind: SectionKind) -> SectionDescriptor {
        match kind {
            SectionKind::About => self.about.descriptor(kind),
            SectionKind::Skills => self.skills.descriptor(kind),
            SectionKind::Experience => self.experience.descriptor(kind),
            SectionKind::Projects => self.projects.descriptor(kind),
            SectionKind::Services => self.services.descriptor(kind),
            SectionKind::Testimonials => self.testimonials.descriptor(kind),
        }
    }
}

impl Validate for PortfolioContent {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("profile.name", &self.profile.name)?;
        validate_non_empty_string("profile.title", &self.profile.title)?;
        validate_non_empty_string("profile.footer", &self.profile.footer)?;

        self.about.validate_section(SectionKind::About)?;
        self.skills.validate_section(SectionKind::Skills)?;
        self.experience.validate_section(SectionKind::Experience)?;
        self.projects.validate_section(SectionKind::Projects)?;
        self.services.validate_section(SectionKind::Services)?;
        self.testimonials.validate_section(SectionKind::Testimonials)?;

        // 固定錨點也算在內，避免區塊 id 與之衝突
        let mut ids = self.section_ids();
        ids.extend(crate::core::FIXED_ANCHORS);
        validate_unique_ids("sections.id", ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_is_valid() {
        let content = PortfolioContent::default();
        assert!(content.validate().is_ok());
    }

    #[test]
    fn test_sections_in_page_order() {
        let content = PortfolioContent::default();
        let ids: Vec<String> = content.sections().into_iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec!["about", "skills", "experience", "projects", "services", "testimonials"]
        );
        assert_eq!(content.section_ids().len(), 6);
    }

    #[test]
    fn test_find_section() {
        let content = PortfolioContent::default();

        let projects = content.find_section("projects").unwrap();
        assert_eq!(projects.kind, SectionKind::Projects);
        assert_eq!(projects.title, "Featured Projects");
        assert!(matches!(projects.items[0], SectionItem::Project(_)));

        assert!(content.find_section("nonexistent-id").is_none());
    }

    #[test]
    fn test_duplicate_section_id_rejected() {
        let mut content = PortfolioContent::default();
        content.services.id = "projects".to_string();
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_section_id_clashing_with_fixed_anchor_rejected() {
        let mut content = PortfolioContent::default();
        content.about.id = "contact".to_string();
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_missing_required_item_field_rejected() {
        let mut content = PortfolioContent::default();
        content.testimonials.items[0].company = "  ".to_string();
        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("testimonials.items[0].company"));
    }

    #[test]
    fn test_empty_skill_list_rejected() {
        let mut content = PortfolioContent::default();
        content.skills.items[1].list.clear();
        assert!(matches!(
            content.validate(),
            Err(PortfolioError::ContentError { .. })
        ));
    }

    #[test]
    fn test_invalid_project_link_rejected() {
        let mut content = PortfolioContent::default();
        content.projects.items[0].link = Some("ftp://example.com".to_string());
        assert!(content.validate().is_err());
    }
}
