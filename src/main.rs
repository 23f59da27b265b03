use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use pechakucha::cli::{Cli, Command};
use pechakucha::config::Config;
use pechakucha::logging::{init_server_tracing, init_viewer_tracing};
use pechakucha::model::{Presentation, PresentationDraft};
use pechakucha::server::ApiServer;
use pechakucha::store::{MemoryStore, PresentationStore, RemoteStore};
use pechakucha::ui::{self, StartScreen};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(server) = cli.server {
        config.client.base_url = server;
    }

    match cli.command {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind_addr = bind;
            }
            config.validate()?;
            init_server_tracing();
            serve(config)
        }
        Command::List => {
            config.validate()?;
            init_viewer_tracing();
            list(&remote_store(&config)?)
        }
        Command::Present { id, local } => {
            config.validate()?;
            init_viewer_tracing();
            let store: Arc<dyn PresentationStore> = if local {
                Arc::new(MemoryStore::seeded())
            } else {
                Arc::new(remote_store(&config)?)
            };
            let start = match id {
                Some(id) => StartScreen::Presentation(id),
                None => StartScreen::Library,
            };
            ui::run(store, start, config.playback.tick_interval())?;
            Ok(())
        }
        Command::Seed { file } => {
            config.validate()?;
            init_viewer_tracing();
            let draft = read_draft(&file)?;
            let created = remote_store(&config)?.create(draft)?;
            println!("{}", created.id());
            Ok(())
        }
        Command::Update { id, file } => {
            config.validate()?;
            init_viewer_tracing();
            let draft = read_draft(&file)?;
            let Some(updated) = remote_store(&config)?.update(&id, draft)? else {
                bail!("Presentation '{}' not found", id);
            };
            println!("{}", summary(&updated));
            Ok(())
        }
        Command::Edit(edit) => {
            config.validate()?;
            init_viewer_tracing();
            let store = remote_store(&config)?;
            let Some(current) = store.get(&edit.id)? else {
                bail!("Presentation '{}' not found", edit.id);
            };
            let mut draft = current.to_draft();
            edit.apply(&mut draft)?;
            let Some(updated) = store.update(&edit.id, draft)? else {
                bail!("Presentation '{}' not found", edit.id);
            };
            println!("{}", summary(&updated));
            Ok(())
        }
        Command::Delete { id } => {
            config.validate()?;
            init_viewer_tracing();
            if !remote_store(&config)?.delete(&id)? {
                bail!("Presentation '{}' not found", id);
            }
            println!("Deleted {}", id);
            Ok(())
        }
    }
}

fn read_draft(file: &Path) -> Result<PresentationDraft> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid presentation JSON in {}", file.display()))
}

fn remote_store(config: &Config) -> Result<RemoteStore> {
    Ok(RemoteStore::new(
        config.client.base_url.clone(),
        config.client.timeout(),
    )?)
}

fn serve(config: Config) -> Result<()> {
    let store = if config.storage.seed_sample {
        MemoryStore::seeded()
    } else {
        MemoryStore::new()
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async move {
        let mut server = ApiServer::new(Arc::new(store));
        server.bind(&config.server.bind_addr).await?;
        server.run().await?;
        Ok::<(), anyhow::Error>(())
    })
}

fn list(store: &RemoteStore) -> Result<()> {
    let presentations = store.list()?;
    if presentations.is_empty() {
        println!("No presentations.");
        return Ok(());
    }
    for presentation in presentations {
        println!("{}", summary(&presentation));
    }
    Ok(())
}

fn summary(presentation: &Presentation) -> String {
    format!(
        "{}  {}  ({} slides × {}s, {} min)",
        presentation.id(),
        presentation.title(),
        presentation.slide_count(),
        presentation.slide_duration().seconds(),
        presentation.total_minutes()
    )
}
