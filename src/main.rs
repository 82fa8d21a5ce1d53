use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use chromaflow::cli::{Cli, Command, OutputFormat};
use chromaflow::clipboard::SystemClipboard;
use chromaflow::config::AppSettings;
use chromaflow_core::{AiGenerationError, AiStudio, Clipboard, Editor, ExportFormat};
use chromaflow_sources::GeminiGenerator;

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => AppSettings::load_from_path(path)?,
        None => AppSettings::load()?,
    };

    // Level 0 (default): the settings' log level, warn unless changed
    // Level 1: info, 2: debug, 3+: trace
    let log_level = match cli.debug {
        0 => settings.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting chromaflow v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Css { gradient, declaration, copy } => {
            let editor = Editor::new(gradient.to_config()?);
            let text = if declaration {
                chromaflow_core::css_declaration(editor.config())
            } else {
                editor.css()
            };
            println!("{}", text);
            if copy {
                copy_text(&settings, &editor, ExportFormat::Css, declaration.then_some(text.as_str()))?;
            }
        }
        Command::Svg { gradient, copy } => {
            let editor = Editor::new(gradient.to_config()?);
            println!("{}", editor.svg());
            if copy {
                copy_text(&settings, &editor, ExportFormat::Svg, None)?;
            }
        }
        Command::Generate { prompt, format, copy } => {
            run_generate(&settings, &prompt, format, copy)?;
        }
        Command::Config { init } => {
            let path = match &cli.settings {
                Some(path) => path.clone(),
                None => AppSettings::settings_path()?,
            };
            if init {
                if path.exists() {
                    warn!("settings already exist at {}", path.display());
                } else {
                    settings.save_to_path(&path)?;
                    println!("wrote {}", path.display());
                }
            }
            println!("# {}", path.display());
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}

/// Copy the editor's output, or `override_text` when the printed text differs
/// from the plain export.
fn copy_text(
    settings: &AppSettings,
    editor: &Editor,
    format: ExportFormat,
    override_text: Option<&str>,
) -> Result<()> {
    let mut clipboard = SystemClipboard::new(settings.clipboard_hold())?;
    match override_text {
        Some(text) => clipboard.set_text(text)?,
        None => editor.copy(format, &mut clipboard)?,
    }
    eprintln!("copied {} to clipboard", format.as_str());
    Ok(())
}

fn run_generate(settings: &AppSettings, prompt: &str, format: OutputFormat, copy: bool) -> Result<()> {
    let api_key = settings
        .ai
        .resolve_api_key()
        .ok_or_else(|| AiGenerationError::MissingApiKey(settings.ai.api_key_env.clone()))?;

    let generator = GeminiGenerator::new(api_key, settings.ai.model.clone())?
        .with_base_url(settings.ai.base_url.clone());
    let studio = AiStudio::new(generator);

    // A single outstanding request on a single-threaded runtime
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let result = runtime.block_on(studio.generate(prompt));

    let mut editor = Editor::default();
    editor
        .apply_generation_result(result)
        .context("could not generate a gradient")?;

    if let Some(name) = editor.generated_name() {
        eprintln!("{}", name);
    }
    if let Some(description) = editor.generated_description().filter(|d| !d.is_empty()) {
        eprintln!("{}", description);
    }

    match format {
        OutputFormat::Export(export) => {
            println!("{}", editor.export(export));
            if copy {
                copy_text(settings, &editor, export, None)?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "gradientName": editor.generated_name(),
                "description": editor.generated_description(),
                "config": editor.config(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
            if copy {
                warn!("--copy is ignored for json output");
            }
        }
    }
    Ok(())
}
