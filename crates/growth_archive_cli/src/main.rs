//! Terminal front-end for the growth archive.
//!
//! # Responsibility
//! - Parse arguments, bootstrap logging and config, then print one screen.
//! - Report edge failures on stderr with exit code 1.

mod args;
mod render;

use args::{Cli, Commands};
use clap::Parser;
use growth_archive_core::{
    default_log_level, init_logging, init_stderr_logging, load_config, ArchiveService, Catalog,
    CatalogError, ConfigError, RecordSource, Route, SeedData, ViewerConfig,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
enum CliError {
    Logging(String),
    Config(ConfigError),
    Catalog(CatalogError),
    Json(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(message) => write!(f, "logging: {message}"),
            Self::Config(err) => write!(f, "config: {err}"),
            Self::Catalog(err) => write!(f, "catalog: {err}"),
            Self::Json(err) => write!(f, "json: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(_) => None,
            Self::Config(err) => Some(err),
            Self::Catalog(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<CatalogError> for CliError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let level = resolve_log_level(cli.log_level.as_deref());
    let logging = match cli.log_dir.as_deref() {
        Some(dir) => init_logging(level, dir),
        None => init_stderr_logging(level),
    };
    logging.map_err(CliError::Logging)?;

    info!(
        "event=cli_command module=cli status=start command={}",
        cli.command.name()
    );

    let output = match &cli.config {
        Some(path) => {
            let config = load_config(path)?;
            let catalog = Catalog::from_seed(SeedData::builtin(), &config)?;
            execute(ArchiveService::new(catalog, config), cli.command)?
        }
        None => execute(
            ArchiveService::new(Catalog::builtin(), ViewerConfig::default()),
            cli.command,
        )?,
    };

    println!("{output}");
    Ok(())
}

/// Requested level, or the build-mode default.
fn resolve_log_level(requested: Option<&str>) -> &str {
    requested.unwrap_or(default_log_level())
}

fn execute<S: RecordSource>(
    mut service: ArchiveService<S>,
    command: Commands,
) -> Result<String, CliError> {
    let screen = match command {
        Commands::Home => service.screen(),
        Commands::Sections => service.navigate(Route::Sections),
        Commands::Section { id, view, expand } => {
            service.navigate(Route::Section(id));
            let screen = service.select_tab(view.into());
            match expand {
                Some(category_id) => service.toggle_category(&category_id),
                None => screen,
            }
        }
        Commands::Record { id } => service.navigate(Route::Record(id)),
        Commands::TeacherMessages => service.navigate(Route::TeacherMessages),
        Commands::TeacherMessage { id } => service.navigate(Route::TeacherMessage(id)),
        Commands::ParentMessages => service.navigate(Route::ParentMessages),
        Commands::AddComment { text } => {
            service.navigate(Route::AddComment);
            let Some(text) = text else {
                return Ok(render::render(&service.screen()));
            };
            let form = render::render(&service.set_comment_text(&text));
            let (draft, _) = service.submit_comment();
            return Ok(format!(
                "{form}\n\n已提交 draft_id={} chars={} photos={}",
                draft.draft_id,
                draft.text.chars().count(),
                draft.photos.len()
            ));
        }
        Commands::Open { path } => service.open(&path),
        Commands::Dump { path } => {
            let screen = service.open(&path);
            return Ok(serde_json::to_string_pretty(&screen)?);
        }
    };

    Ok(render::render(&screen))
}

#[cfg(test)]
mod tests {
    use super::{resolve_log_level, Cli};
    use clap::Parser;
    use growth_archive_core::default_log_level;

    #[test]
    fn explicit_log_level_is_borrowed_from_arguments() {
        let cli = Cli::try_parse_from(["growth-archive", "--log-level", "warn", "home"])
            .expect("arguments should parse");
        assert_eq!(resolve_log_level(cli.log_level.as_deref()), "warn");
    }

    #[test]
    fn missing_log_level_uses_build_default() {
        let cli = Cli::try_parse_from(["growth-archive", "home"]).expect("arguments should parse");
        assert_eq!(resolve_log_level(cli.log_level.as_deref()), default_log_level());
    }
}
