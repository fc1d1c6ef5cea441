use anyhow::Result;
use portfolio_site::adapters::viewport::ScrollCommand;
use portfolio_site::utils::validation::Validate;
use portfolio_site::{
    AnchorDocument, ContactField, PortfolioContent, PortfolioError, PortfolioPage,
    RecordingViewport, SectionItem, SubmitOutcome, TracingSink,
};
use std::time::Duration;
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};

fn page() -> PortfolioPage<AnchorDocument, RecordingViewport, TracingSink> {
    PortfolioPage::new(PortfolioContent::default())
}

#[tokio::test]
async fn test_valid_contact_submission_end_to_end() {
    let mut page = page();
    page.set_contact_field(ContactField::Name, "Al");
    page.set_contact_field(ContactField::Email, "a@b.co");
    page.set_contact_field(ContactField::Subject, "Hello");
    page.set_contact_field(ContactField::Message, "This is a test");

    let outcome = page.submit_contact();

    match outcome {
        SubmitOutcome::Accepted(submission) => {
            assert_eq!(submission.name, "Al");
            assert_eq!(submission.email, "a@b.co");
        }
        SubmitOutcome::Rejected { invalid_fields } => {
            panic!("unexpected rejection: {:?}", invalid_fields)
        }
    }
    assert!(page.is_contact_submitted());
    assert!(page.view().submitted);
    for field in page.view().contact {
        assert_eq!(field.value, "");
    }
}

#[tokio::test]
async fn test_invalid_email_rejects_submission() {
    let mut page = page();
    page.set_contact_field(ContactField::Name, "Al");
    page.set_contact_field(ContactField::Email, "not-an-email");
    page.set_contact_field(ContactField::Subject, "Hello");
    page.set_contact_field(ContactField::Message, "This is a test");

    assert!(!page.submit_contact().is_accepted());
    assert!(!page.is_contact_submitted());

    let view = page.view();
    assert_eq!(view.contact[1].value, "not-an-email");
    assert!(!view.contact[1].valid);
    assert_eq!(view.contact[1].errors, vec!["Please enter a valid email address"]);
}

#[tokio::test(start_paused = true)]
async fn test_page_confirmation_clears_after_delay() {
    let mut page = page();
    page.set_contact_field(ContactField::Name, "Al");
    page.set_contact_field(ContactField::Email, "a@b.co");
    page.set_contact_field(ContactField::Subject, "Hello");
    page.set_contact_field(ContactField::Message, "This is a test");
    page.submit_contact();

    let mut rx = page.form().subscribe_submitted();
    let waited = tokio::time::timeout(Duration::from_secs(6), rx.changed()).await;
    assert_ok!(waited);
    assert!(!page.is_contact_submitted());
}

#[test]
fn test_navigation_handlers() {
    let mut page = page();

    assert!(page.toggle_mobile_menu());
    assert!(page.scroll_to_section("experience"));
    assert!(!page.is_menu_open());

    page.toggle_mobile_menu();
    page.scroll_to_top();
    assert!(!page.is_menu_open());

    let commands = page.navigator().viewport().commands();
    assert_eq!(commands.len(), 2);
    assert!(matches!(&commands[0], ScrollCommand::IntoView { element, .. } if element.id == "experience"));
    assert!(matches!(commands[1], ScrollCommand::To { top: 0, .. }));
}

#[test]
fn test_scroll_to_missing_section_changes_nothing() {
    let mut page = page();
    let before = page.view();

    assert!(!page.scroll_to_section("nonexistent-id"));

    assert_eq!(page.view(), before);
    assert!(page.navigator().viewport().commands().is_empty());
}

#[test]
fn test_content_file_drives_page() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("content.toml");

    let mut content = PortfolioContent::default();
    content.profile.name = "Grace Hopper".to_string();
    content.projects.id = "work".to_string();
    content.projects.items.truncate(1);
    std::fs::write(&path, content.to_toml_string()?)?;

    let loaded = PortfolioContent::load_validated(&path)?;
    let mut page = PortfolioPage::new(loaded);

    assert_eq!(page.view().profile.name, "Grace Hopper");
    assert!(page.scroll_to_section("work"));
    assert!(!page.scroll_to_section("projects"));

    let work = page.content().find_section("work").expect("section loaded");
    assert_eq!(work.items.len(), 1);
    assert!(matches!(work.items[0], SectionItem::Project(_)));
    Ok(())
}

#[test]
fn test_invalid_content_file_reports_configuration_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("content.toml");

    let mut content = PortfolioContent::default();
    content.skills.id = "about".to_string();
    std::fs::write(&path, content.to_toml_string()?)?;

    let parsed = PortfolioContent::from_file(&path)?;
    let err = assert_err!(parsed.validate());
    assert!(matches!(err, PortfolioError::InvalidConfigValueError { .. }));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}
