//! dedupe — terminal frontend for the dedupe file store.
//!
//! Reads filter edits from stdin, forwards them to the file listing once
//! typing settles, and keeps a storage statistics panel refreshed in the
//! background.

mod input;
mod render;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dedupe_core::{
    spawn_stats_poller, ChannelSink, Config, FileFilters, FileService, FilterStateController,
    HttpFileService, StatsMessage, StatsView,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uuid::Uuid;

use crate::input::{parse_line, InputAction, HELP};

fn load_config() -> anyhow::Result<Config> {
    let mut config = match std::env::var("DEDUPE_CONFIG").map(PathBuf::from) {
        Ok(path) => {
            tracing::info!("loading config from {}", path.display());
            Config::load(&path)?
        }
        Err(_) => Config::default(),
    };

    if let Ok(url) = std::env::var("DEDUPE_BASE_URL") {
        config.service.base_url = url;
    }

    Ok(config)
}

/// Starts a listing for `filters`, aborting the one still in flight so an
/// older response never prints after a newer one.
fn show_files(
    service: &Arc<HttpFileService>,
    filters: FileFilters,
    listing: &mut Option<JoinHandle<()>>,
) {
    if let Some(previous) = listing.take() {
        previous.abort();
    }
    let service = Arc::clone(service);
    *listing = Some(tokio::spawn(async move {
        match service.list_files(&filters).await {
            Ok(files) => {
                println!("{}", render::filters_line(&filters));
                println!("{}", render::file_list(&files));
            }
            Err(e) => {
                tracing::warn!("file listing failed: {e}");
                println!("could not load files: {e}");
            }
        }
    }));
}

async fn upload(service: &HttpFileService, path: &Path, refresh: &UnboundedSender<()>) {
    match service.upload_file(path).await {
        Ok(file) => {
            match file.duplicate_of {
                _ if file.is_original() => {
                    println!("uploaded {} ({})", file.original_filename, file.id)
                }
                Some(original) => println!(
                    "uploaded {} as a duplicate of {original}",
                    file.original_filename
                ),
                None => println!("uploaded {} as a duplicate", file.original_filename),
            }
            let _ = refresh.send(());
        }
        Err(e) => {
            tracing::warn!("upload of {} failed: {e}", path.display());
            println!("could not upload {}: {e}", path.display());
        }
    }
}

async fn delete(service: &HttpFileService, id: Uuid, refresh: &UnboundedSender<()>) {
    match service.delete_file(id).await {
        Ok(()) => {
            println!("deleted {id}");
            let _ = refresh.send(());
        }
        Err(e) => {
            tracing::warn!("delete of {id} failed: {e}");
            println!("could not delete {id}: {e}");
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dedupe_cli=info,dedupe_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config()?;
    let service = Arc::new(HttpFileService::from_config(&config.service)?);
    tracing::info!("using storage service at {}", service.base_url());

    let (stats_tx, mut stats_rx) = mpsc::unbounded_channel();
    let poller = spawn_stats_poller(
        Arc::clone(&service),
        config.stats.refresh_interval(),
        stats_tx,
    );
    let mut stats = StatsView::default();

    let (filters_tx, mut filters_rx) = mpsc::unbounded_channel();
    let mut controller =
        FilterStateController::with_window(ChannelSink::new(filters_tx), config.filters.debounce());

    let (refresh_tx, mut refresh_rx) = mpsc::unbounded_channel::<()>();
    let mut listing = None;

    show_files(&service, controller.state().clone(), &mut listing);
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line(&line) {
                    InputAction::Edit(edit) => controller.set_field(edit),
                    InputAction::Reset => controller.reset(),
                    InputAction::Flush => controller.flush(),
                    InputAction::Upload(path) => {
                        let service = Arc::clone(&service);
                        let refresh = refresh_tx.clone();
                        tokio::spawn(async move { upload(&service, &path, &refresh).await });
                    }
                    InputAction::Delete(id) => {
                        let service = Arc::clone(&service);
                        let refresh = refresh_tx.clone();
                        tokio::spawn(async move { delete(&service, id, &refresh).await });
                    }
                    InputAction::Show => println!("{}", render::filters_line(controller.state())),
                    InputAction::Stats => {
                        if !poller.is_running() {
                            println!("statistics refresh has stopped; showing the last snapshot");
                        }
                        print!("{stats}");
                    }
                    InputAction::Help => println!("{HELP}"),
                    InputAction::Quit => break,
                    InputAction::None => {}
                    InputAction::Invalid(reason) => println!("{reason}"),
                }
            }
            Some(filters) = filters_rx.recv() => {
                show_files(&service, filters, &mut listing);
            }
            Some(()) = refresh_rx.recv() => {
                show_files(&service, controller.state().clone(), &mut listing);
            }
            Some(message) = stats_rx.recv() => {
                if stats.handle_message(message) {
                    print!("{stats}");
                }
            }
        }
    }

    if let Some(listing) = listing {
        listing.abort();
    }
    controller.dispose();
    poller.stop();
    tracing::info!("bye");
    Ok(())
}
