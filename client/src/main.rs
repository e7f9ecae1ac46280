use anyhow::{Context, anyhow, bail};
use catalog::config::DEFAULT_CONFIG_PATH;
use catalog::{CatalogConfig, CatalogSource, ConfiguredSource, load_catalog};
use client::customization::CustomizationState;
use client::render::{AssetRenderer, Exporter, LogRenderer, ManifestExporter, RenderPlan};
use client::settings::{
    CustomizerSettings, ensure_settings_file_exists, load_settings_or_default, settings_path,
};
use client::stage::{Stage, ViewMode};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
struct WardrobeArgs {
    seed: Option<u64>,
    randomize: bool,
    export: Option<PathBuf>,
    photo_booth: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if dotenvy::dotenv().is_err() {
        dotenvy::from_filename("client/.env").ok();
    }

    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let Some(args) = parse_args()? else {
        return Ok(());
    };

    log::info!("Starting wardrobe...");
    log::info!("Protocol version: {}", protocol::protocol_version());

    let settings_path = settings_path();
    let settings = load_settings_or_default(&settings_path);
    if let Err(error) = ensure_settings_file_exists(&settings, &settings_path) {
        log::warn!(
            "Failed to ensure settings file '{}': {}",
            settings_path.display(),
            error
        );
    }

    let config = load_catalog_config()?;
    let source = ConfiguredSource::from_config(&config.source)
        .context("Failed to create catalog source")?;
    let catalog = load_catalog(&source)
        .await
        .with_context(|| format!("Failed to load catalog from {}", source.describe()))?;

    let mut state = CustomizationState::new(
        catalog,
        &settings.skin_category,
        settings.default_skin_tone.clone(),
    );
    let mut stage = Stage::new(settings.idle_pose.clone());

    match args.seed {
        Some(seed) => {
            log::info!("Randomizing with seed {}", seed);
            state.randomize(&mut StdRng::seed_from_u64(seed));
        }
        None if args.randomize => state.randomize(&mut rand::thread_rng()),
        None => {}
    }

    if let Some(pose) = args.photo_booth {
        stage.set_mode(ViewMode::PhotoBooth);
        stage.select_pose(pose);
    }
    log::info!("{} mode, pose {}", stage.mode().label(), stage.pose());

    let plan = RenderPlan::from_state(&state);
    LogRenderer::default().apply(&plan);

    if let Some(target) = args.export {
        export_outfit(&plan, &target, &settings)?;
    }

    Ok(())
}

fn load_catalog_config() -> anyhow::Result<CatalogConfig> {
    let config_path =
        std::env::var("CATALOG_CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let config = if Path::new(&config_path).exists() {
        CatalogConfig::load_from_file(&config_path).with_context(|| {
            format!(
                "Failed to load catalog configuration from '{}'",
                config_path
            )
        })?
    } else {
        log::warn!(
            "Catalog configuration '{}' not found; using the default backend",
            config_path
        );
        CatalogConfig::default()
    };

    let config = config.with_env_overrides();
    config
        .validate()
        .context("Invalid catalog configuration after environment overrides")?;
    Ok(config)
}

/// Writes the manifest to `target`, or into it when it is a directory.
fn export_outfit(
    plan: &RenderPlan,
    target: &Path,
    settings: &CustomizerSettings,
) -> anyhow::Result<()> {
    let path = if target.is_dir() {
        target.join(&settings.export_file_name)
    } else {
        target.to_path_buf()
    };
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("export path '{}' has no file name", path.display()))?;

    let file = ManifestExporter::new(file_name).export(plan)?;
    std::fs::write(&path, &file.bytes)
        .with_context(|| format!("Failed to write export to '{}'", path.display()))?;
    log::info!("Saved {}", path.display());
    Ok(())
}

/// `None` when only help was requested.
fn parse_args() -> anyhow::Result<Option<WardrobeArgs>> {
    let mut parsed = WardrobeArgs::default();

    let mut args = std::env::args().skip(1).peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = next_arg_value(&mut args, &arg)?;
                parsed.seed = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid --seed: {}", value))?,
                );
            }
            "--randomize" => parsed.randomize = true,
            "--export" => parsed.export = Some(PathBuf::from(next_arg_value(&mut args, &arg)?)),
            "--photo-booth" => parsed.photo_booth = Some(next_arg_value(&mut args, &arg)?),
            "--help" | "-h" => {
                print_help();
                return Ok(None);
            }
            other => bail!("unknown argument: {} (see --help)", other),
        }
    }

    Ok(Some(parsed))
}

fn next_arg_value<I>(args: &mut std::iter::Peekable<I>, flag: &str) -> anyhow::Result<String>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn print_help() {
    println!(
        "wardrobe - load the customization catalog and compose an outfit\n\n\
Usage:\n\
  cargo run --bin wardrobe -- [options]\n\n\
Options:\n\
  --randomize            Randomize every category with an unseeded source\n\
  --seed <u64>           Randomize with a seeded source (reproducible)\n\
  --photo-booth <pose>   Switch to photo booth mode with the given pose\n\
  --export <path>        Write the outfit manifest (directory or file path)\n\
  --help                 Show this help\n\n\
Environment:\n\
  CATALOG_CONFIG_PATH    Catalog TOML (default: catalog/config/catalog.toml)\n\
  CATALOG_BASE_URL       Override the backend base URL\n\
  CATALOG_FILE           Load a JSON snapshot instead of the backend\n\
  WARDROBE_SETTINGS      Settings YAML (default: ./settings.yaml)\n\
  RUST_LOG               Log filter (default: info)\n"
    );
}
