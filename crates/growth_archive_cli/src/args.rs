use clap::{Parser, Subcommand, ValueEnum};
use growth_archive_core::ViewTab;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "growth-archive")]
#[command(about = "Browse a child's growth archive in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON viewer config; built-in defaults apply when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// trace|debug|info|warn|error. Defaults to debug in debug builds.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logs go to stderr otherwise.
    #[arg(long, global = true)]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show the home screen")]
    Home,

    #[command(about = "List all archive sections")]
    Sections,

    #[command(about = "Show one archive section")]
    Section {
        id: String,

        #[arg(long, value_enum, default_value = "structure")]
        view: ViewArg,

        /// Category to expand in the structure view.
        #[arg(long)]
        expand: Option<String>,
    },

    #[command(about = "Show a record detail")]
    Record { id: String },

    #[command(about = "List teacher messages")]
    TeacherMessages,

    #[command(about = "Show one teacher message")]
    TeacherMessage { id: String },

    #[command(about = "List parent messages")]
    ParentMessages,

    #[command(about = "Show the comment form, submitting it when text is given")]
    AddComment {
        #[arg(long)]
        text: Option<String>,
    },

    #[command(about = "Render the screen for a route path")]
    Open { path: String },

    #[command(about = "Print the screen model for a route path as JSON")]
    Dump { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Structure,
    Card,
    Timeline,
}

impl From<ViewArg> for ViewTab {
    fn from(value: ViewArg) -> Self {
        match value {
            ViewArg::Structure => ViewTab::Structure,
            ViewArg::Card => ViewTab::Card,
            ViewArg::Timeline => ViewTab::Timeline,
        }
    }
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Sections => "sections",
            Self::Section { .. } => "section",
            Self::Record { .. } => "record",
            Self::TeacherMessages => "teacher-messages",
            Self::TeacherMessage { .. } => "teacher-message",
            Self::ParentMessages => "parent-messages",
            Self::AddComment { .. } => "add-comment",
            Self::Open { .. } => "open",
            Self::Dump { .. } => "dump",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, ViewArg};
    use clap::Parser;

    #[test]
    fn parses_section_with_view_and_global_flags() {
        let cli = Cli::try_parse_from([
            "growth-archive",
            "section",
            "english-course",
            "--view",
            "timeline",
            "--log-level",
            "warn",
        ])
        .expect("arguments should parse");

        assert_eq!(cli.log_level.as_deref(), Some("warn"));
        match cli.command {
            Commands::Section { id, view, expand } => {
                assert_eq!(id, "english-course");
                assert_eq!(view, ViewArg::Timeline);
                assert_eq!(expand, None);
            }
            _ => panic!("expected section command"),
        }
    }

    #[test]
    fn rejects_unknown_view() {
        assert!(Cli::try_parse_from(["growth-archive", "section", "x", "--view", "grid"]).is_err());
    }
}
