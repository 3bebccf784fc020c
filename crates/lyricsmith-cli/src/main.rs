//! Lyricsmith - style prompts and lyrics for AI music generation

use clap::Parser;
use colored::Colorize;
use lyricsmith_config::{resolve_config, LyricsmithConfig};
use lyricsmith_core::{CopyTarget, SelectionState};
use lyricsmith_providers::{
    api_key_from_env, build_lyrics_prompt, generate_lyrics, GeminiClient, ProviderConfig,
    TextGenerator, API_KEY_ENV_VARS,
};
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod clipboard;
mod commands;
mod render;
mod selection;
mod studio;

use commands::{Cli, Commands, ConfigCommands, CopyArg, SelectionArgs};
use studio::Studio;

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let resolved = resolve_config(cli.config.as_deref());

    let colors = !cli.no_color
        && resolved
            .as_ref()
            .map_or(true, |resolved| resolved.config.output.colors);
    if !colors {
        colored::control::set_override(false);
    }

    // Logs go to stderr so lyrics on stdout stay pipeable
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(colors && std::io::stderr().is_terminal()),
        )
        .with(EnvFilter::from_default_env())
        .init();

    let result = match resolved {
        Ok(resolved) => {
            tracing::debug!(path = ?resolved.path, "configuration resolved");
            run(&cli, &resolved.config, resolved.path.as_deref()).await
        }
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, config: &LyricsmithConfig, config_path: Option<&std::path::Path>) -> CliResult {
    match &cli.command {
        Some(Commands::Style { selection }) => run_style(config, selection),
        Some(Commands::Prompt { selection, json }) => run_prompt(config, selection, *json),
        Some(Commands::Generate {
            selection,
            json,
            copy,
        }) => run_generate(cli, config, selection, *json, *copy).await,
        Some(Commands::List { table }) => {
            render::print_table(lyricsmith_core::Catalog::builtin(), *table);
            Ok(())
        }
        Some(Commands::Rules) => {
            render::print_rules();
            Ok(())
        }
        Some(Commands::Config { command }) => run_config(command, config, config_path),
        None => run_studio(cli, config).await,
    }
}

fn run_style(config: &LyricsmithConfig, args: &SelectionArgs) -> CliResult {
    let state = selection::build_state(&config.defaults, args)?;
    render::print_style(&state.style_prompt());
    Ok(())
}

fn run_prompt(config: &LyricsmithConfig, args: &SelectionArgs, json_output: bool) -> CliResult {
    let state = selection::build_state(&config.defaults, args)?;
    let request = state.request_snapshot()?;
    let prompt = build_lyrics_prompt(&request);

    if json_output {
        let output = serde_json::json!({
            "request": request,
            "style": state.style_prompt(),
            "prompt": prompt,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", prompt);
    }
    Ok(())
}

async fn run_generate(
    cli: &Cli,
    config: &LyricsmithConfig,
    args: &SelectionArgs,
    json_output: bool,
    copy: Option<CopyArg>,
) -> CliResult {
    let mut state = selection::build_state(&config.defaults, args)?;
    let request = state.begin_generation()?;
    let client = create_client(cli, config)?;

    if !json_output {
        println!(
            "{} {} {}",
            "Generating:".cyan().bold(),
            request.topic.yellow(),
            format!("({})", client.model()).dimmed()
        );
    }

    let result = generate_lyrics(client.as_ref(), &request).await;
    state.finish_generation(result)?;

    if json_output {
        let output = serde_json::json!({
            "request": request,
            "style": state.style_prompt(),
            "lyrics": state.lyrics(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        render::print_style(&state.style_prompt());
        println!();
        render::print_lyrics(state.lyrics());
    }

    if let Some(arg) = copy {
        let target = CopyTarget::from(arg);
        let payload = state.copy(target, Instant::now())?;
        clipboard::deliver(target, &payload);
    }

    Ok(())
}

fn run_config(
    command: &ConfigCommands,
    config: &LyricsmithConfig,
    config_path: Option<&std::path::Path>,
) -> CliResult {
    match command {
        ConfigCommands::Show => {
            println!("{}", "Current configuration:".cyan().bold());
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        ConfigCommands::Path => match config_path {
            Some(path) => println!("{}", path.display()),
            None => println!("{}", "No configuration file found; using defaults.".dimmed()),
        },
    }
    Ok(())
}

async fn run_studio(cli: &Cli, config: &LyricsmithConfig) -> CliResult {
    let mut state = SelectionState::new();
    selection::apply_defaults(&mut state, &config.defaults)?;

    let generator = match create_client(cli, config) {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::warn!(error = %e, "generation disabled");
            None
        }
    };

    Studio::new(state, generator).run().await?;
    Ok(())
}

fn create_client(
    cli: &Cli,
    config: &LyricsmithConfig,
) -> Result<Arc<dyn TextGenerator>, Box<dyn std::error::Error>> {
    let settings = &config.provider;

    let api_key = api_key_from_env(settings.api_key_env.as_deref()).ok_or_else(|| {
        let names = match settings.api_key_env.as_deref() {
            Some(name) => name.to_string(),
            None => API_KEY_ENV_VARS.join(", "),
        };
        format!("No API key found; set one of: {}", names)
    })?;

    let model = cli.model.clone().unwrap_or_else(|| settings.model.clone());

    let mut provider_config = ProviderConfig {
        api_key: Some(api_key),
        ..Default::default()
    }
    .with_model(model)
    .with_temperature(settings.temperature)
    .with_top_p(settings.top_p)
    .with_timeout(settings.timeout_secs);

    if let Some(base_url) = settings.base_url.as_deref() {
        provider_config = provider_config.with_base_url(base_url);
    }
    if let Some(max_tokens) = settings.max_tokens {
        provider_config = provider_config.with_max_tokens(max_tokens);
    }

    let client = GeminiClient::new(provider_config)?;
    Ok(Arc::new(client))
}
