use clap::Parser;
use portfolio_site::config::{Command, LogFormat, OutputFormat};
use portfolio_site::domain::model::{SectionItem, SectionView};
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::{
    CliConfig, ContactField, PortfolioContent, PortfolioError, PortfolioPage, SubmitOutcome,
    SubmitState, CONFIRMATION_RESET_DELAY,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("Starting portfolio-site");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let content = match load_content(config.content.as_deref()) {
        Ok(content) => content,
        Err(e) => exit_with(&e),
    };

    // 驗證內容
    if let Err(e) = content.validate() {
        exit_with(&e);
    }

    let mut page = PortfolioPage::new(content);

    match config.command {
        Command::Show { section, format } => show(&page, section.as_deref(), format)?,
        Command::Validate => {
            let sections = page.content().sections();
            println!("✅ Content is valid ({} sections)", sections.len());
            for section in sections {
                println!("   #{:<14} {} ({} items)", section.id, section.title, section.item_count);
            }
        }
        Command::Navigate { section_id } => {
            if page.scroll_to_section(&section_id) {
                for command in page.navigator().viewport().commands() {
                    println!("{}", serde_json::to_string(command)?);
                }
            } else {
                let known: Vec<&str> = page.navigator().document().ids().collect();
                println!("No section with id '{}' (known: {})", section_id, known.join(", "));
            }
        }
        Command::Contact {
            name,
            email,
            subject,
            message,
            wait,
        } => {
            page.set_contact_field(ContactField::Name, name);
            page.set_contact_field(ContactField::Email, email);
            page.set_contact_field(ContactField::Subject, subject);
            page.set_contact_field(ContactField::Message, message);

            let mut confirmation = page.form().subscribe_submitted();
            match page.submit_contact() {
                SubmitOutcome::Accepted(submission) => {
                    println!("✅ Thanks {}, your message was sent!", submission.name);
                    if wait {
                        wait_for_reset(&mut confirmation).await;
                        println!("Confirmation cleared");
                    }
                }
                SubmitOutcome::Rejected { invalid_fields } => {
                    eprintln!("❌ The contact form has errors:");
                    for field in invalid_fields {
                        for error in page.form().errors(field) {
                            eprintln!("   - {}: {}", field, error);
                        }
                    }
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn load_content(path: Option<&str>) -> portfolio_site::Result<PortfolioContent> {
    match path {
        Some(path) => {
            tracing::info!("📁 Loading content from: {}", path);
            PortfolioContent::from_file(path)
        }
        None => {
            tracing::debug!("Using built-in content");
            Ok(PortfolioContent::default())
        }
    }
}

fn exit_with(e: &PortfolioError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1));
}

async fn wait_for_reset(confirmation: &mut tokio::sync::watch::Receiver<SubmitState>) {
    let limit = CONFIRMATION_RESET_DELAY + Duration::from_secs(1);
    let timed_out = tokio::time::timeout(
        limit,
        confirmation.wait_for(|state| *state == SubmitState::Idle),
    )
    .await
    .is_err();
    if timed_out {
        tracing::warn!("Confirmation did not reset within {:?}", limit);
    }
}

fn show<D, V, S>(
    page: &PortfolioPage<D, V, S>,
    section: Option<&str>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>>
where
    D: portfolio_site::core::Document,
    V: portfolio_site::core::Viewport,
    S: portfolio_site::core::SubmissionSink,
{
    let view = page.view();
    let sections: Vec<SectionView> = match section {
        Some(id) => match page.content().find_section(id) {
            Some(section) => vec![section],
            None => {
                eprintln!("❌ No section with id '{}'", id);
                std::process::exit(1);
            }
        },
        None => view.sections.clone(),
    };

    match format {
        OutputFormat::Json => match section {
            Some(_) => println!("{}", serde_json::to_string_pretty(&sections)?),
            None => println!("{}", view.to_json()?),
        },
        OutputFormat::Text => {
            if section.is_none() {
                println!("{}", view.profile.name);
                println!("{}", view.profile.title);
                println!("{}\n", view.profile.slogan);
            }
            for section in &sections {
                print_section(section);
            }
            if section.is_none() {
                println!("{}", view.profile.footer);
            }
        }
    }
    Ok(())
}

fn print_section(section: &SectionView) {
    println!("== {} (#{}) ==", section.title, section.id);
    for item in &section.items {
        match item {
            SectionItem::About(about) => println!("{}\n", about.content),
            SectionItem::Skill(group) => {
                println!("* {}", group.heading);
                for entry in &group.list {
                    println!("    - {}", entry);
                }
            }
            SectionItem::Experience(entry) => {
                println!("* {}", entry.heading);
                println!("  {}", entry.content);
                for point in &entry.list {
                    println!("    - {}", point);
                }
            }
            SectionItem::Project(project) => {
                println!("* {}", project.heading);
                println!("  {}", project.content);
                if !project.technologies.is_empty() {
                    println!("  [{}]", project.technologies.join(", "));
                }
            }
            SectionItem::Service(service) => {
                println!("{} {}", service.icon, service.heading);
                println!("  {}", service.content);
            }
            SectionItem::Testimonial(testimonial) => {
                println!("\"{}\"", testimonial.content);
                println!(
                    "  - {}, {} at {}",
                    testimonial.name, testimonial.role, testimonial.company
                );
            }
        }
    }
    println!();
}
