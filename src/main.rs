//! Interactive terminal session for editing a DevLinks profile.
//!
//! # Usage
//!
//! ```bash
//! # Start with the demo profile
//! cargo run -- --demo
//!
//! # Start empty, JSON logs, slow store
//! STORE_LATENCY_MS=800 cargo run -- --log-format json
//! ```
//!
//! Data lives in memory for the length of the session.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::{Confirm, Input, Select};
use tracing_subscriber::EnvFilter;

use devlinks::application::services::{
    EditorOptions, EditorStatus, LinkEditor, PreviewService, ProfileService, SaveOutcome,
};
use devlinks::config::{self, Config};
use devlinks::domain::entities::{LinkField, LinkId, Platform, Profile, style_for};
use devlinks::infrastructure::persistence::InMemoryProfileStore;

/// Edit your developer links and preview your profile.
#[derive(Parser)]
#[command(name = "devlinks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed the session with the demo profile
    #[arg(long)]
    demo: bool,

    /// Log format override: text or json
    #[arg(long)]
    log_format: Option<String>,

    /// Make the first save fail, to try the retry flow
    #[arg(long)]
    fail_first_save: bool,
}

const MENU: [&str; 7] = [
    "Add new link",
    "Edit link",
    "Remove link",
    "Save links",
    "Edit profile details",
    "Preview profile",
    "Quit",
];

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(format) = cli.log_format {
        config.log_format = format;
        config.validate()?;
    }

    init_tracing(&config);
    config.print_summary();

    let store = if cli.demo {
        InMemoryProfileStore::with_demo_profile()
    } else {
        InMemoryProfileStore::new()
    };
    let store = Arc::new(store.with_latency(config.store_latency()));
    if cli.fail_first_save {
        store.fail_next_persist();
    }

    let mut editor = LinkEditor::load(
        store.as_ref(),
        Arc::clone(&store),
        EditorOptions::from(&config),
    )
    .await
    .context("Failed to start link editor")?;
    let profiles = ProfileService::new(Arc::clone(&store));
    let preview = PreviewService::from_config(&config);

    println!("{}", "Customize your links".bright_blue().bold());
    println!("Add/Edit/Remove links below and then share all your profiles with the world!");

    loop {
        println!();
        render_links(&editor);

        let choice = Select::new()
            .with_prompt("What next?")
            .items(&MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let id = editor.add_entry()?;
                edit_entry(&mut editor, &id)?;
            }
            1 => {
                if let Some(id) = pick_entry(&editor, "Edit which link?")? {
                    edit_entry(&mut editor, &id)?;
                }
            }
            2 => {
                if let Some(id) = pick_entry(&editor, "Remove which link?")? {
                    editor.remove_entry(&id);
                }
            }
            3 => save(&mut editor).await?,
            4 => edit_profile(&profiles).await?,
            5 => {
                let profile = profiles.load().await?;
                print_preview(&preview, &profile);
            }
            _ => {
                if confirm_quit(&editor)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Prints the link list, or the empty-state placeholder.
fn render_links(editor: &LinkEditor<InMemoryProfileStore>) {
    if editor.is_empty() {
        println!("{}", "Let's get you started".bright_white().bold());
        println!(
            "Use the \"Add new link\" button to get started. We're here to help you share your profiles with everyone!"
        );
    } else {
        for (index, entry) in editor.entries().iter().enumerate() {
            let platform = if entry.platform.is_empty() {
                "Select platform".dimmed().to_string()
            } else {
                entry.platform.cyan().to_string()
            };
            let url = if entry.url.is_empty() {
                "(no link)".dimmed().to_string()
            } else {
                entry.url.clone()
            };
            println!(
                "  {} {:<16} {} [{}]",
                format!("Link #{}", index + 1).bold(),
                platform,
                url,
                style_for(&entry.platform).icon.dimmed()
            );
        }
    }

    match editor.status() {
        EditorStatus::Saved { .. } => println!("{}", "Your links have been saved".green()),
        EditorStatus::Saving => println!("{}", "Saving...".yellow()),
        EditorStatus::Failed(notice) => println!("{}", notice.message.red()),
        EditorStatus::Idle => {}
    }
}

fn pick_entry(
    editor: &LinkEditor<InMemoryProfileStore>,
    prompt: &str,
) -> Result<Option<LinkId>> {
    if editor.is_empty() {
        println!("{}", "No links yet".yellow());
        return Ok(None);
    }

    let labels: Vec<String> = editor
        .entries()
        .iter()
        .enumerate()
        .map(|(i, e)| format!("Link #{} {}", i + 1, e.platform))
        .collect();

    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(editor.entries().get(index).map(|e| e.id.clone()))
}

fn edit_entry(
    editor: &mut LinkEditor<InMemoryProfileStore>,
    id: &LinkId,
) -> Result<()> {
    let Some(current) = editor.entry(id).cloned() else {
        return Ok(());
    };

    let labels: Vec<&str> = Platform::ALL.iter().map(|p| p.label()).collect();
    let default = current
        .platform_kind()
        .and_then(|p| Platform::ALL.iter().position(|q| *q == p))
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt("Platform")
        .items(&labels)
        .default(default)
        .interact()?;
    editor.update_entry(id, LinkField::Platform, Platform::ALL[index].value());

    let url: String = Input::new()
        .with_prompt("Link (e.g. https://www.github.com/example)")
        .with_initial_text(current.url)
        .allow_empty(true)
        .interact_text()?;
    editor.update_entry(id, LinkField::Url, url);

    Ok(())
}

async fn save(editor: &mut LinkEditor<InMemoryProfileStore>) -> Result<()> {
    match editor.save().await {
        SaveOutcome::Saved => println!("{}", "Your links have been saved".green().bold()),
        SaveOutcome::Invalid(report) => {
            for (index, entry) in editor.entries().iter().enumerate() {
                for error in report.errors_for(&entry.id) {
                    println!(
                        "  {} {}: {}",
                        format!("Link #{}", index + 1).bold(),
                        error.field,
                        error.message.red()
                    );
                }
            }
        }
        SaveOutcome::Failed(e) => {
            println!("{}", e.to_string().red());
            editor.dismiss_notice();
        }
        SaveOutcome::AlreadySaving => println!("{}", "A save is already in progress".yellow()),
        SaveOutcome::Stale | SaveOutcome::Ignored => {
            println!("{}", "Links changed while saving; save again".yellow())
        }
    }
    Ok(())
}

async fn edit_profile(profiles: &ProfileService<InMemoryProfileStore>) -> Result<()> {
    let mut details = profiles.load().await?.details();

    details.first_name = Some(
        Input::new()
            .with_prompt("First Name")
            .with_initial_text(details.first_name.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?,
    );
    details.last_name = Some(
        Input::new()
            .with_prompt("Last Name")
            .with_initial_text(details.last_name.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?,
    );
    details.email = Some(
        Input::new()
            .with_prompt("Email")
            .with_initial_text(details.email.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?,
    );

    match profiles.update_details(details).await {
        Ok(_) => println!("{}", "Your profile has been updated".green().bold()),
        Err(e) => println!("{}: {}", e.to_string().red(), e.to_notice().details),
    }
    Ok(())
}

fn print_preview(preview: &PreviewService, profile: &Profile) {
    let page = preview.preview(profile);

    println!();
    println!("{}", page.display_name.bright_white().bold());
    println!("{}", page.email_line.dimmed());
    for card in &page.cards {
        let target = match &card.target {
            Some(url) => url.to_string(),
            None => "Cannot open this URL".red().to_string(),
        };
        println!(
            "  [{}] {} -> {}",
            card.style.icon,
            card.label.bold(),
            target
        );
    }
    println!();
    println!("{} {}", page.share_message, page.share_url.bright_cyan());
}

fn confirm_quit(editor: &LinkEditor<InMemoryProfileStore>) -> Result<bool> {
    if editor.is_saving() {
        println!("{}", "A save is still in progress".yellow());
    }

    Ok(Confirm::new()
        .with_prompt("Quit? Unsaved changes are lost")
        .default(true)
        .interact()?)
}
