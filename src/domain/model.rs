use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 頁面上的區塊種類，依顯示順序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    About,
    Skills,
    Experience,
    Projects,
    Services,
    Testimonials,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::About,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Services,
        SectionKind::Testimonials,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::About => "about",
            SectionKind::Skills => "skills",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Services => "services",
            SectionKind::Testimonials => "testimonials",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section<T> {
    pub id: String,
    pub title: String,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutItem {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub heading: String,
    pub list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub heading: String,
    pub content: String,
    pub list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub heading: String,
    pub content: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub heading: String,
    pub content: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// 異質項目的統一視圖，序列化時以 `kind` 標記
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionItem {
    About(AboutItem),
    Skill(SkillGroup),
    Experience(ExperienceEntry),
    Project(Project),
    Service(Service),
    Testimonial(Testimonial),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub slogan: String,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub about: Section<AboutItem>,
    pub skills: Section<SkillGroup>,
    pub experience: Section<ExperienceEntry>,
    pub projects: Section<Project>,
    pub services: Section<Service>,
    pub testimonials: Section<Testimonial>,
}

/// 區塊的摘要資訊（不含項目）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionDescriptor {
    pub id: String,
    pub title: String,
    pub kind: SectionKind,
    pub item_count: usize,
}

/// 展開後的區塊，項目轉為 `SectionItem`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub id: String,
    pub title: String,
    pub kind: SectionKind,
    pub items: Vec<SectionItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}
