//! 프로젝트 초기화 유스케이스.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::info;

use crate::application::config::ProjectConfig;
use crate::application::ports::{
    ConfigRepository, DocumentBuilder, TemplateScaffolder, TemplateVars, UserConfirmer,
};
use crate::domain::error::ConfigError;
use crate::domain::mode::Mode;

/// `vibe init` 입력.
#[derive(Debug, Clone)]
pub struct InitOptions {
    pub root: PathBuf,
    pub mode: Option<Mode>,
    pub project_name: Option<String>,
    pub template: Option<String>,
    pub force: bool,
    pub yes: bool,
}

/// 초기화 결과 요약.
#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub mode: Mode,
    pub project_name: String,
    pub config_path: PathBuf,
    pub document_path: PathBuf,
    pub scaffolded: Vec<PathBuf>,
    pub created_global: bool,
}

pub struct InitProjectUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub document_builder: &'a dyn DocumentBuilder,
    pub scaffolder: &'a dyn TemplateScaffolder,
    pub confirmer: &'a dyn UserConfirmer,
}

impl<'a> InitProjectUseCase<'a> {
    pub fn execute(&self, options: InitOptions) -> Result<InitOutcome> {
        let root = options.root.as_path();

        if self.config_repo.is_project_initialized(root) {
            if !options.force {
                return Err(ConfigError::AlreadyInitialized {
                    root: root.to_path_buf(),
                }
                .into());
            }
            if !options.yes {
                let message = format!(
                    "{} already exists and will be overwritten.",
                    self.config_repo.project_config_path(root).display()
                );
                if !self.confirmer.confirm(&message)? {
                    bail!("init aborted by user");
                }
            }
        }

        if let Some(template) = options.template.as_deref()
            && !self.scaffolder.available().contains(&template)
        {
            return Err(ConfigError::validation(
                "template",
                format!(
                    "unknown template '{template}'. Available: {}",
                    self.scaffolder.available().join(", ")
                ),
            )
            .into());
        }

        let global = self.config_repo.read_global()?;
        let created_global = !self.config_repo.global_config_exists()?;
        if created_global {
            self.config_repo.write_global(&global)?;
        }

        let mode = options.mode.unwrap_or(global.default_mode);
        let project_name = options
            .project_name
            .clone()
            .unwrap_or_else(|| default_project_name(root));

        let custom_prompts = options
            .template
            .as_deref()
            .map(|template| self.scaffolder.prompt_ids(template))
            .filter(|ids| !ids.is_empty());

        let project = ProjectConfig {
            mode: Some(mode),
            project_name: Some(project_name.clone()),
            template: options.template.clone(),
            custom_prompts,
            ..ProjectConfig::default()
        };
        self.config_repo.write_project(root, &project)?;
        info!(root = %root.display(), %mode, "initialized project config");

        let scaffolded = match options.template.as_deref() {
            Some(template) => {
                let vars = TemplateVars {
                    project_name: project_name.clone(),
                    mode: mode.code().to_string(),
                };
                self.scaffolder
                    .scaffold(template, root, &vars, options.force)?
            }
            None => Vec::new(),
        };

        let merged = self.config_repo.load(root)?;
        let document_path = self.document_builder.build(&merged, root)?;

        Ok(InitOutcome {
            mode,
            project_name,
            config_path: self.config_repo.project_config_path(root),
            document_path,
            scaffolded,
            created_global,
        })
    }
}

fn default_project_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "project".to_string())
}
