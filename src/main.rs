use clap::Parser;
use std::sync::Arc;

use linkbio::utils::{logger, validation::Validate};
use linkbio::{
    seed, CliConfig, Command, FileSnapshotStore, Link, LinkBioError, LinkBioService, LinkDraft,
    LinkPatch, MemoryStore, ProfilePatch, SimpleLinkBioService, SnapshotStore, UserProfile,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting linkbio CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let snapshot = config.snapshot_path.clone().map(FileSnapshotStore::new);
    let initial = match &snapshot {
        Some(file) => match file.load().await? {
            Some(data) => {
                tracing::debug!("Loaded snapshot with {} links", data.links.len());
                data
            }
            None => seed::generate(config.seed),
        },
        None => seed::generate(config.seed),
    };

    let store = Arc::new(MemoryStore::new(initial));
    let service = SimpleLinkBioService::new(Arc::clone(&store), config.clone());

    let command = config.command.clone().unwrap_or(Command::Show);
    if let Err(e) = run(&service, command).await {
        tracing::error!("Command failed: {}", e);
        eprintln!("{}", e);
        let exit_code = match e {
            LinkBioError::NotFoundError { .. } => 2,
            _ => 1,
        };
        std::process::exit(exit_code);
    }

    if let Some(file) = &snapshot {
        file.save(&store.snapshot().await).await?;
        tracing::debug!("Snapshot saved");
    }

    Ok(())
}

async fn run(service: &impl LinkBioService, command: Command) -> linkbio::Result<()> {
    match command {
        Command::Show => {
            let profile = service.get_profile().await?;
            let links = service.get_links().await?;
            print_preview(&profile, &links);
        }
        Command::Add {
            title,
            url,
            icon,
            inactive,
        } => {
            let links = service.get_links().await?;
            let order = links.iter().map(|link| link.order).max().unwrap_or(0) + 1;

            let link = service
                .create_link(LinkDraft {
                    title,
                    url,
                    is_active: !inactive,
                    icon,
                    order,
                })
                .await?;
            println!("Added \"{}\" ({})", link.title, link.id);
        }
        Command::Remove { id } => {
            service.delete_link(id).await?;
            println!("Removed {}", id);
        }
        Command::Toggle { id } => {
            let links = service.get_links().await?;
            let link = links
                .iter()
                .find(|link| link.id == id)
                .ok_or_else(|| LinkBioError::link_not_found(id))?;

            let updated = service
                .update_link(
                    id,
                    LinkPatch {
                        is_active: Some(!link.is_active),
                        ..Default::default()
                    },
                )
                .await?;
            println!(
                "\"{}\" is now {}",
                updated.title,
                if updated.is_active { "active" } else { "hidden" }
            );
        }
        Command::Profile {
            username,
            display_name,
            bio,
            avatar,
            background_color,
            button_color,
        } => {
            let profile = service
                .update_profile(ProfilePatch {
                    username,
                    display_name,
                    bio,
                    avatar,
                    background_color,
                    button_color,
                })
                .await?;
            println!("Updated profile @{}", profile.username);
        }
    }
    Ok(())
}

fn print_preview(profile: &UserProfile, links: &[Link]) {
    if profile.avatar.is_empty() {
        println!("({})", profile.initial());
    } else {
        println!("{}", profile.avatar);
    }
    println!("@{}", profile.username);
    println!("{}", profile.display_name);
    if !profile.bio.is_empty() {
        println!("{}", profile.bio);
    }
    println!(
        "Theme: background {}, buttons {}",
        profile.background_color, profile.button_color
    );

    println!();
    let mut shown = 0;
    for link in links.iter().filter(|link| link.is_active) {
        println!("  [{}] {} -> {}", link.icon.label(), link.title, link.url);
        shown += 1;
    }
    if shown == 0 {
        println!("  (no active links)");
    }
    let hidden = links.len() - shown;
    if hidden > 0 {
        println!("  ({} hidden)", hidden);
    }

    println!();
    println!("Share: {}", profile.share_url());
}
