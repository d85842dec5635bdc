//! 유스케이스 단위 테스트용 인메모리 포트 구현.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::{GlobalConfig, MergedConfig, ProjectConfig};
use crate::application::ports::{
    ConfigRepository, DocumentBuilder, LaunchOptions, Reporter, TemplateScaffolder, TemplateVars,
    ToolLauncher, UserConfirmer,
};
use crate::domain::error::{ConfigError, ConfigResult, LaunchError};

#[derive(Default)]
pub struct MemoryConfigRepository {
    pub global: Mutex<Option<GlobalConfig>>,
    pub projects: Mutex<HashMap<PathBuf, ProjectConfig>>,
    pub fail_project_write: bool,
    pub project_writes: Mutex<usize>,
}

impl MemoryConfigRepository {
    pub fn with_project(root: &Path, cfg: ProjectConfig) -> Self {
        let repo = Self::default();
        repo.projects
            .lock()
            .unwrap()
            .insert(root.to_path_buf(), cfg);
        repo
    }

    pub fn project(&self, root: &Path) -> Option<ProjectConfig> {
        self.projects.lock().unwrap().get(root).cloned()
    }
}

impl ConfigRepository for MemoryConfigRepository {
    fn global_config_path(&self) -> ConfigResult<PathBuf> {
        Ok(PathBuf::from("/home/test/.vibe/config.json"))
    }

    fn project_config_path(&self, root: &Path) -> PathBuf {
        root.join(".vibe/config.json")
    }

    fn read_global(&self) -> ConfigResult<GlobalConfig> {
        Ok(self.global.lock().unwrap().clone().unwrap_or_default())
    }

    fn read_project(&self, root: &Path) -> ConfigResult<Option<ProjectConfig>> {
        Ok(self.project(root))
    }

    fn write_global(&self, config: &GlobalConfig) -> ConfigResult<()> {
        *self.global.lock().unwrap() = Some(config.clone());
        Ok(())
    }

    fn write_project(&self, root: &Path, config: &ProjectConfig) -> ConfigResult<()> {
        if self.fail_project_write {
            return Err(ConfigError::io(
                "failed to write config",
                io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        *self.project_writes.lock().unwrap() += 1;
        self.projects
            .lock()
            .unwrap()
            .insert(root.to_path_buf(), config.clone());
        Ok(())
    }

    fn global_config_exists(&self) -> ConfigResult<bool> {
        Ok(self.global.lock().unwrap().is_some())
    }

    fn is_project_initialized(&self, root: &Path) -> bool {
        self.projects.lock().unwrap().contains_key(root)
    }
}

#[derive(Default)]
pub struct RecordingDocumentBuilder {
    pub fail: bool,
    pub stale: bool,
    pub built: Mutex<Vec<MergedConfig>>,
}

impl RecordingDocumentBuilder {
    pub fn build_count(&self) -> usize {
        self.built.lock().unwrap().len()
    }
}

impl DocumentBuilder for RecordingDocumentBuilder {
    fn build(&self, config: &MergedConfig, root: &Path) -> ConfigResult<PathBuf> {
        if self.fail {
            return Err(ConfigError::validation(
                "customPrompts",
                "prompt 'ghost' not found",
            ));
        }
        self.built.lock().unwrap().push(config.clone());
        Ok(root.join("CLAUDE.md"))
    }

    fn needs_regeneration(&self, _root: &Path) -> bool {
        self.stale
    }
}

#[derive(Default)]
pub struct RecordingScaffolder {
    pub calls: Mutex<Vec<(String, String, bool)>>,
}

impl TemplateScaffolder for RecordingScaffolder {
    fn available(&self) -> Vec<&'static str> {
        vec!["minimal", "api"]
    }

    fn prompt_ids(&self, template: &str) -> Vec<String> {
        match template {
            "api" => vec!["project-security".to_string()],
            _ => Vec::new(),
        }
    }

    fn scaffold(
        &self,
        template: &str,
        root: &Path,
        vars: &TemplateVars,
        force: bool,
    ) -> ConfigResult<Vec<PathBuf>> {
        self.calls
            .lock()
            .unwrap()
            .push((template.to_string(), vars.project_name.clone(), force));
        Ok(vec![root.join("README.md")])
    }
}

pub struct FakeLauncher {
    pub installed: bool,
    pub exit_code: i32,
    pub launches: Mutex<Vec<LaunchOptions>>,
}

impl FakeLauncher {
    pub fn installed(exit_code: i32) -> Self {
        Self {
            installed: true,
            exit_code,
            launches: Mutex::new(Vec::new()),
        }
    }

    pub fn missing() -> Self {
        Self {
            installed: false,
            exit_code: 0,
            launches: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ToolLauncher for FakeLauncher {
    fn resolve_program(&self, configured: Option<&str>) -> Result<String, LaunchError> {
        let program = configured.unwrap_or("claude").to_string();
        if self.installed {
            Ok(program)
        } else {
            Err(LaunchError::NotFound { program })
        }
    }

    async fn version(&self, _program: &str) -> Result<Option<String>> {
        Ok(Some("1.2.0".to_string()))
    }

    async fn launch(&self, options: &LaunchOptions) -> Result<i32> {
        self.launches.lock().unwrap().push(options.clone());
        Ok(self.exit_code)
    }
}

pub struct FixedConfirmer(pub bool);

impl UserConfirmer for FixedConfirmer {
    fn confirm(&self, _message: &str) -> Result<bool> {
        Ok(self.0)
    }
}

#[derive(Default)]
pub struct SilentReporter {
    pub lines: Mutex<Vec<String>>,
}

impl Reporter for SilentReporter {
    fn section(&self, name: &str) {
        self.lines.lock().unwrap().push(format!("== {name}"));
    }

    fn kv(&self, key: &str, value: &str) {
        self.lines.lock().unwrap().push(format!("{key}: {value}"));
    }

    fn status(&self, scope: &str, message: &str) {
        self.lines.lock().unwrap().push(format!("[{scope}] {message}"));
    }

    fn warn(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("warning: {message}"));
    }

    fn raw(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
