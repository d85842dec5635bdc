//! 파싱된 CLI 동작을 유스케이스에 연결하고 결과를 출력한다.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::application::ports::Reporter;
use crate::application::usecases::config_values::ConfigScope;
use crate::application::usecases::doctor::{DoctorReport, FileState, ToolState};
use crate::domain::mode::{format_all_modes, format_mode, suggest_mode};
use crate::interface::cli::command::CliAction;
use crate::interface::cli::composition::AppComposition;

const FALLBACK_EDITOR: &str = "vi";

/// 동작을 실행하고 프로세스 종료 코드를 반환한다.
pub async fn run_action(composition: &AppComposition, action: CliAction) -> Result<i32> {
    let reporter = composition.reporter();

    match action {
        CliAction::Init(options) => {
            let outcome = composition.init_usecase().execute(options)?;
            if outcome.created_global {
                reporter.status("global", "created default global config");
            }
            reporter.status(
                "init",
                &format!(
                    "{} ({})",
                    outcome.project_name,
                    format_mode(outcome.mode)
                ),
            );
            reporter.kv("config", &outcome.config_path.display().to_string());
            for file in &outcome.scaffolded {
                reporter.kv("created", &file.display().to_string());
            }
            reporter.kv("document", &outcome.document_path.display().to_string());
        }
        CliAction::ShowModes { root } => {
            let status = composition.mode_status_usecase().execute(&root)?;
            let current = status.initialized.then_some(status.current);
            print!("{}", format_all_modes(current));
            if !status.initialized {
                reporter.warn(&format!(
                    "project is not initialized; default mode is {}",
                    format_mode(status.current)
                ));
            }
        }
        CliAction::SwitchMode { root, mode } => {
            let switched = composition.switch_mode_usecase().execute(&root, mode)?;
            let label = if switched.changed() {
                "switched"
            } else {
                "unchanged"
            };
            reporter.status(
                "mode",
                &format!(
                    "{}: {} → {}",
                    label,
                    format_mode(switched.previous_mode),
                    format_mode(switched.new_mode)
                ),
            );
            reporter.kv("document", &switched.document_path.display().to_string());
        }
        CliAction::SuggestMode(context) => {
            let mode = suggest_mode(context);
            println!("{}", format_mode(mode));
            println!("{}", mode.info().description);
        }
        CliAction::ConfigGet { root, scope, key } => {
            let value = composition
                .get_config_usecase()
                .execute(&root, scope, key.as_deref())?;
            print_value(&value)?;
        }
        CliAction::ConfigSet {
            root,
            scope,
            key,
            value,
        } => {
            composition
                .set_config_usecase()
                .execute(&root, scope, &key, &value)?;
            reporter.status("config", &format!("{key} = {value}"));
            if scope == ConfigScope::Project {
                reporter.raw("CLAUDE.md will be regenerated on the next `vibe start`.");
            }
        }
        CliAction::ConfigPath { root, scope } => {
            let path = composition.edit_config_usecase().path(&root, scope)?;
            println!("{}", path.display());
        }
        CliAction::ConfigEdit { root, scope } => {
            let target = composition.edit_config_usecase().execute(&root, scope)?;
            let editor = target
                .editor
                .or_else(|| std::env::var("EDITOR").ok().filter(|v| !v.trim().is_empty()))
                .unwrap_or_else(|| FALLBACK_EDITOR.to_string());
            open_in_editor(&editor, &target.path)?;
        }
        CliAction::Start(options) => {
            return composition.start_usecase().execute(options).await;
        }
        CliAction::Doctor { root, json } => {
            let report = composition.doctor_usecase().execute(&root).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_doctor(reporter, &report);
            }
        }
    }

    Ok(0)
}

fn print_value(value: &Value) -> Result<()> {
    match value {
        Value::String(s) => println!("{s}"),
        Value::Null => println!(),
        other => println!("{}", serde_json::to_string_pretty(other)?),
    }
    Ok(())
}

fn open_in_editor(editor: &str, path: &Path) -> Result<()> {
    // "code --wait"처럼 인자가 붙은 편집기 설정을 허용한다.
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or(FALLBACK_EDITOR);

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor: {editor}"))?;

    if status.success() {
        println!("config saved: {}", path.display());
    } else {
        eprintln!("editor exited with: {status}");
    }
    Ok(())
}

fn describe_file(state: &FileState) -> String {
    match state {
        FileState::Missing => "missing".to_string(),
        FileState::Valid => "ok".to_string(),
        FileState::Invalid { message } => format!("invalid ({message})"),
    }
}

fn print_doctor(reporter: &dyn Reporter, report: &DoctorReport) {
    reporter.section("config");
    let global_path = report
        .global_config_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<unknown home>".to_string());
    reporter.kv("global", &format!("{global_path} [{}]", describe_file(&report.global_config)));
    reporter.kv(
        "project",
        &format!(
            "{} [{}]",
            report.project_config_path.display(),
            describe_file(&report.project_config)
        ),
    );
    reporter.kv(
        "mode",
        &report
            .mode
            .map(format_mode)
            .unwrap_or_else(|| "unknown".to_string()),
    );
    if let Some(stale) = report.document_stale {
        reporter.kv("CLAUDE.md", if stale { "stale" } else { "up to date" });
    }

    reporter.section("claude");
    match &report.tool {
        ToolState::NotFound { program } => reporter.kv("binary", &format!("{program} (not found)")),
        ToolState::Found {
            path,
            version,
            compatible,
        } => {
            reporter.kv("binary", path);
            let verdict = match compatible {
                Some(true) => "ok",
                Some(false) => "too old",
                None => "unknown",
            };
            reporter.kv(
                "version",
                &format!(
                    "{} (minimum {}, {verdict})",
                    version.as_deref().unwrap_or("?"),
                    report.minimum_version
                ),
            );
        }
    }

    let problems = report.problems();
    if problems.is_empty() {
        reporter.status("doctor", "no problems found");
    } else {
        for problem in problems {
            reporter.warn(&problem);
        }
    }
}
