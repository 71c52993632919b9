use anyhow::Context;
use env_logger::{Builder, Target};
use log::LevelFilter;
use marquee_client::app::HomeScreen;
use marquee_client::domains::home::FetchOutcome;
use marquee_config::ConfigLoader;

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("marquee_client", LevelFilter::Debug)
        .filter_module("marquee_config", LevelFilter::Info)
        .init();
}

/// Value following `flag` on the command line, e.g. `--detail 693134`.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|index| args.get(index + 1))
        .cloned()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let force_stub = args.iter().any(|arg| arg == "--stub");

    let mut loader = ConfigLoader::new();
    if let Some(path) = flag_value(&args, "--config") {
        loader = loader.with_config_path(path);
    }
    if force_stub {
        loader = loader.with_stub_mode(true);
    }

    let load = loader.load().context("failed to load configuration")?;

    for warning in load.warnings.iter() {
        match &warning.hint {
            Some(hint) => log::warn!("{} ({})", warning.message, hint),
            None => log::warn!("{}", warning.message),
        }
    }

    let screen = HomeScreen::from_config(&load.config)
        .context("failed to build API client")?;

    if screen.view_model.fetch().await == FetchOutcome::Failed {
        let state = screen.view_model.snapshot();
        if let Some(err) = state.error {
            anyhow::bail!("home feed unavailable: {err}");
        }
    }

    for row in screen.view_model.category_rows() {
        println!("{} ({} movies)", row.title, row.poster_urls.len());
    }
    for (index, url) in screen.view_model.banner_image_urls().iter().enumerate() {
        let title = screen
            .view_model
            .banner_info(index)
            .map(|info| format!("{} [{}]", info.title, info.rating))
            .unwrap_or_default();
        println!("banner {index}: {title} {url}");
    }

    if let Some(id) = flag_value(&args, "--detail") {
        let detail = screen
            .movie_details
            .execute(&id)
            .await
            .with_context(|| format!("failed to fetch movie {id}"))?;
        println!(
            "{} ({}) {} min, genres: {}",
            detail.original_title,
            detail.imdb_id,
            detail.runtime,
            detail.genre_names().join(", ")
        );
    }

    Ok(())
}
