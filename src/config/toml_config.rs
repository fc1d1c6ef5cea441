use crate::domain::model::PortfolioContent;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use std::path::Path;

impl PortfolioContent {
    /// 從 TOML 檔案載入頁面內容
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析頁面內容
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 載入並驗證
    pub fn load_validated<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = Self::from_file(path)?;
        content.validate()?;
        Ok(content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_serialization".to_string(),
            message: format!("TOML serialization error: {}", e),
        })
    }
}

/// 替換環境變數 (例如 ${CONTACT_EMAIL})，未設定的變數保持原樣
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PortfolioError::ConfigValidationError {
        field: "env_substitution".to_string(),
        message: e.to_string(),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SectionKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL_CONTENT: &str = r##"
[profile]
name = "Ada Lovelace"
title = "Analyst"
slogan = "Programs that weave algebraic patterns."
footer = "© 1843 Ada Lovelace"

[about]
id = "about"
title = "About"

[[about.items]]
content = "Notes on the Analytical Engine."

[skills]
id = "skills"
title = "Skills"

[[skills.items]]
heading = "Mathematics"
list = ["Bernoulli numbers", "Loops"]

[experience]
id = "experience"
title = "Experience"
items = []

[projects]
id = "projects"
title = "Projects"

[[projects.items]]
heading = "Note G"
content = "The first published algorithm."
technologies = ["Analytical Engine"]
link = "#projects"

[services]
id = "services"
title = "Services"
items = []

[testimonials]
id = "testimonials"
title = "Testimonials"

[[testimonials.items]]
name = "Charles Babbage"
role = "Inventor"
company = "Difference Engine Ltd."
content = "${TESTIMONIAL_QUOTE}"
"##;

    #[test]
    fn test_parse_minimal_content() {
        let content = PortfolioContent::from_toml_str(MINIMAL_CONTENT).unwrap();

        assert_eq!(content.profile.name, "Ada Lovelace");
        assert_eq!(content.skills.items[0].list.len(), 2);
        assert_eq!(content.projects.items[0].link.as_deref(), Some("#projects"));
        assert!(content.projects.items[0].image.is_none());
        assert!(content.services.items.is_empty());
        assert_eq!(content.find_section("projects").unwrap().kind, SectionKind::Projects);
        assert!(content.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_TEST_QUOTE", "The Enchantress of Numbers.");

        let toml_content = MINIMAL_CONTENT.replace("TESTIMONIAL_QUOTE", "PORTFOLIO_TEST_QUOTE");
        let content = PortfolioContent::from_toml_str(&toml_content).unwrap();
        assert_eq!(content.testimonials.items[0].content, "The Enchantress of Numbers.");

        std::env::remove_var("PORTFOLIO_TEST_QUOTE");
    }

    #[test]
    fn test_unset_env_var_left_in_place() {
        let toml_content = MINIMAL_CONTENT.replace("TESTIMONIAL_QUOTE", "PORTFOLIO_UNSET_VAR_XYZ");
        let content = PortfolioContent::from_toml_str(&toml_content).unwrap();
        assert_eq!(content.testimonials.items[0].content, "${PORTFOLIO_UNSET_VAR_XYZ}");
    }

    #[test]
    fn test_missing_required_field_fails_to_parse() {
        let broken = MINIMAL_CONTENT.replace(
            "[[skills.items]]\nheading = \"Mathematics\"\n",
            "[[skills.items]]\n",
        );
        let err = PortfolioContent::from_toml_str(&broken).unwrap_err();
        assert!(matches!(err, PortfolioError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_default_content_roundtrips_through_toml() {
        let content = PortfolioContent::default();
        let serialized = content.to_toml_string().unwrap();
        let parsed = PortfolioContent::from_toml_str(&serialized).unwrap();
        assert_eq!(parsed, content);
    }

    #[test]
    fn test_load_validated_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(MINIMAL_CONTENT.as_bytes()).unwrap();

        let content = PortfolioContent::load_validated(temp_file.path()).unwrap();
        assert_eq!(content.about.items.len(), 1);
    }

    #[test]
    fn test_load_validated_rejects_bad_anchor() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let bad = MINIMAL_CONTENT.replace("id = \"services\"", "id = \"our services\"");
        temp_file.write_all(bad.as_bytes()).unwrap();

        let err = PortfolioContent::load_validated(temp_file.path()).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PortfolioContent::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, PortfolioError::IoError(_)));
    }
}
