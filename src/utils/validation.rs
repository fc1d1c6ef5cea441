use crate::utils::error::{PortfolioError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_EMAIL_LOCAL_LENGTH: usize = 64;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r#"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$"#,
        )
        .expect("email pattern is a valid regex")
    })
}

fn anchor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("anchor pattern is a valid regex")
    })
}

/// 檢查 email 格式：單一 `@`、本地與網域皆非空，且網域至少含一個 `.`
pub fn is_email_shape(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    match value.split_once('@') {
        Some((local, _)) if local.len() > MAX_EMAIL_LOCAL_LENGTH => false,
        Some(_) => email_pattern().is_match(value),
        None => false,
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_anchor_id(field_name: &str, id: &str) -> Result<()> {
    if !anchor_pattern().is_match(id) {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: id.to_string(),
            reason: "Anchor ids must start with a letter and contain only letters, digits, '-' or '_'"
                .to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_ids<'a, I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(PortfolioError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "Duplicate id".to_string(),
            });
        }
    }
    Ok(())
}

/// 連結可以是頁內錨點 (`#...`) 或 http/https URL
pub fn validate_link(field_name: &str, link: &str) -> Result<()> {
    if link.starts_with('#') {
        return Ok(());
    }

    match Url::parse(link) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PortfolioError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: link.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: link.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_email_shape("a@b.co"));
        assert!(is_email_shape("jodel.fokou+site@mail.example.com"));
        assert!(!is_email_shape("not-an-email"));
        assert!(!is_email_shape("a@b"));
        assert!(!is_email_shape("@b.co"));
        assert!(!is_email_shape("a@.co"));
        assert!(!is_email_shape("a@@b.co"));
        assert!(!is_email_shape("a@b@c.co"));
        assert!(!is_email_shape("a b@c.co"));
        assert!(!is_email_shape("a@-b.co"));
        assert!(!is_email_shape(""));
    }

    #[test]
    fn test_email_length_limits() {
        let long_local = format!("{}@example.com", "a".repeat(65));
        assert!(!is_email_shape(&long_local));

        let long_domain = format!("a@{}.com", "b".repeat(64));
        assert!(!is_email_shape(&long_domain));
    }

    #[test]
    fn test_validate_anchor_id() {
        assert!(validate_anchor_id("id", "about").is_ok());
        assert!(validate_anchor_id("id", "case-studies_2").is_ok());
        assert!(validate_anchor_id("id", "").is_err());
        assert!(validate_anchor_id("id", "2fast").is_err());
        assert!(validate_anchor_id("id", "has space").is_err());
    }

    #[test]
    fn test_validate_link() {
        assert!(validate_link("link", "#").is_ok());
        assert!(validate_link("link", "#projects").is_ok());
        assert!(validate_link("link", "https://github.com/example").is_ok());
        assert!(validate_link("link", "ftp://example.com").is_err());
        assert!(validate_link("link", "not a link").is_err());
    }

    #[test]
    fn test_validate_unique_ids() {
        assert!(validate_unique_ids("sections", ["about", "skills"]).is_ok());
        assert!(validate_unique_ids("sections", ["about", "about"]).is_err());
    }
}
