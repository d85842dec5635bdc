//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::usecases::config_values::ConfigScope;
use crate::application::usecases::init_project::InitOptions;
use crate::application::usecases::start_session::StartOptions;
use crate::domain::mode::{Mode, SuggestContext, parse_mode_arg};

#[derive(Debug, Parser)]
#[command(name = "vibe", version)]
#[command(about = "Mode-based presets and prompt injection for Claude Code")]
pub struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true, env = "VIBE_PROJECT_ROOT", value_name = "DIR")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Initialize .vibe/ and CLAUDE.md in the project root
    Init {
        /// Starting mode (defaults to the global defaultMode)
        #[arg(long, value_parser = parse_mode_arg)]
        mode: Option<Mode>,
        /// Project name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,
        /// Scaffold a built-in template (minimal, api, web)
        #[arg(long)]
        template: Option<String>,
        /// Overwrite an existing project config and template files
        #[arg(long)]
        force: bool,
        /// Skip the overwrite confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// List modes, switch to a mode, or suggest one
    Mode(ModeArgs),
    /// Read or change configuration
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Refresh CLAUDE.md if needed and launch Claude Code
    Start {
        /// Switch to this mode before launching
        #[arg(long, value_parser = parse_mode_arg)]
        mode: Option<Mode>,
        /// Rebuild CLAUDE.md even if it is up to date
        #[arg(long)]
        regenerate: bool,
        /// Arguments passed through to Claude Code
        #[arg(last = true)]
        args: Vec<String>,
    },
    /// Check configuration and the Claude Code installation
    Doctor {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
struct ModeArgs {
    /// Mode to switch to (learning, guided, expert)
    #[arg(value_parser = parse_mode_arg, conflicts_with = "suggest")]
    new_mode: Option<Mode>,

    /// Suggest a mode from the hints below
    #[arg(long)]
    suggest: bool,

    #[arg(long, requires = "suggest")]
    new_to_security: bool,

    #[arg(long, requires = "suggest")]
    needs_review: bool,

    #[arg(long, requires = "suggest")]
    wants_speed: bool,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the merged config, or one key
    Get {
        key: Option<String>,
        /// Read the global config instead of the merged one
        #[arg(long)]
        global: bool,
    },
    /// Set one key (lists are comma-separated)
    Set {
        key: String,
        value: String,
        #[arg(long)]
        global: bool,
    },
    /// Print the config file path
    Path {
        #[arg(long)]
        global: bool,
    },
    /// Open the config file in an editor
    Edit {
        #[arg(long)]
        global: bool,
    },
}

#[derive(Debug)]
pub enum CliAction {
    Init(InitOptions),
    ShowModes { root: PathBuf },
    SwitchMode { root: PathBuf, mode: Mode },
    SuggestMode(SuggestContext),
    ConfigGet {
        root: PathBuf,
        scope: ConfigScope,
        key: Option<String>,
    },
    ConfigSet {
        root: PathBuf,
        scope: ConfigScope,
        key: String,
        value: String,
    },
    ConfigPath { root: PathBuf, scope: ConfigScope },
    ConfigEdit { root: PathBuf, scope: ConfigScope },
    Start(StartOptions),
    Doctor { root: PathBuf, json: bool },
}

fn scope(global: bool) -> ConfigScope {
    if global {
        ConfigScope::Global
    } else {
        ConfigScope::Project
    }
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    pub fn into_action(self) -> Result<CliAction, String> {
        let root = match self.root {
            Some(root) => root,
            None => std::env::current_dir()
                .map_err(|err| format!("cannot determine current directory: {err}"))?,
        };

        Ok(match self.command {
            Commands::Init {
                mode,
                name,
                template,
                force,
                yes,
            } => CliAction::Init(InitOptions {
                root,
                mode,
                project_name: name,
                template,
                force,
                yes,
            }),
            Commands::Mode(args) if args.suggest => CliAction::SuggestMode(SuggestContext {
                is_new_to_security: args.new_to_security,
                needs_review: args.needs_review,
                wants_speed: args.wants_speed,
            }),
            Commands::Mode(args) => match args.new_mode {
                Some(mode) => CliAction::SwitchMode { root, mode },
                None => CliAction::ShowModes { root },
            },
            Commands::Config(ConfigCommand::Get { key, global }) => CliAction::ConfigGet {
                root,
                scope: scope(global),
                key,
            },
            Commands::Config(ConfigCommand::Set { key, value, global }) => CliAction::ConfigSet {
                root,
                scope: scope(global),
                key,
                value,
            },
            Commands::Config(ConfigCommand::Path { global }) => CliAction::ConfigPath {
                root,
                scope: scope(global),
            },
            Commands::Config(ConfigCommand::Edit { global }) => CliAction::ConfigEdit {
                root,
                scope: scope(global),
            },
            Commands::Start {
                mode,
                regenerate,
                args,
            } => CliAction::Start(StartOptions {
                root,
                mode,
                regenerate,
                args,
            }),
            Commands::Doctor { json } => CliAction::Doctor { root, json },
        })
    }
}
