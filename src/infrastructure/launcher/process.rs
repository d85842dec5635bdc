//! 외부 도구 프로세스 실행기.
//!
//! 표준 입출력을 그대로 물려주고, 종료 코드를 호출자에게 돌려준다.

use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

use crate::application::ports::LaunchOptions;
use crate::domain::error::LaunchError;
use crate::domain::version::extract_version;

const VERSION_TIMEOUT: Duration = Duration::from_secs(5);

/// 자식 프로세스를 실행하고 종료될 때까지 기다린다.
pub async fn run_tool(options: &LaunchOptions) -> Result<i32> {
    let mut cmd = Command::new(&options.program);
    cmd.args(&options.args)
        .current_dir(&options.cwd)
        .envs(options.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut child = cmd
        .spawn()
        .map_err(|err| classify_spawn_error(&options.program, err))?;
    info!(program = %options.program, pid = ?child.id(), "launched external tool");

    let status = wait_forwarding_signals(&mut child)
        .await
        .with_context(|| format!("failed while waiting for '{}'", options.program))?;
    let code = exit_code_of(status);
    info!(program = %options.program, code, "external tool exited");
    Ok(code)
}

/// `<program> --version` 출력에서 버전을 추출한다.
pub async fn tool_version(program: &str) -> Result<Option<String>> {
    read_version(program, &["--version"], VERSION_TIMEOUT).await
}

/// 시간 안에 끝나지 않으면 자식을 죽이고 `None`.
async fn read_version(program: &str, args: &[&str], limit: Duration) -> Result<Option<String>> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output();

    let output = match tokio::time::timeout(limit, output).await {
        Ok(result) => result.map_err(|err| classify_spawn_error(program, err))?,
        Err(_) => {
            debug!(program, "version check timed out");
            return Ok(None);
        }
    };

    if !output.status.success() {
        return Ok(None);
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(extract_version(&stdout))
}

fn classify_spawn_error(program: &str, err: io::Error) -> LaunchError {
    let program = program.to_string();
    match err.kind() {
        io::ErrorKind::NotFound => LaunchError::NotFound { program },
        io::ErrorKind::PermissionDenied => LaunchError::PermissionDenied { program },
        _ => LaunchError::Spawn {
            program,
            source: err,
        },
    }
}

// SIGINT는 터미널이 같은 프로세스 그룹의 자식에게도 직접 보낸다. 다시 전달하면 두 번 받게 된다.
#[cfg(unix)]
async fn wait_forwarding_signals(child: &mut Child) -> io::Result<ExitStatus> {
    use nix::sys::signal::Signal;
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sighup = signal(SignalKind::hangup())?;

    loop {
        tokio::select! {
            status = child.wait() => return status,
            _ = sigint.recv() => debug!("SIGINT received; child handles it via process group"),
            _ = sigterm.recv() => forward_signal(child, Signal::SIGTERM),
            _ = sighup.recv() => forward_signal(child, Signal::SIGHUP),
        }
    }
}

#[cfg(not(unix))]
async fn wait_forwarding_signals(child: &mut Child) -> io::Result<ExitStatus> {
    loop {
        tokio::select! {
            status = child.wait() => return status,
            _ = tokio::signal::ctrl_c() => debug!("Ctrl-C received; waiting for child to exit"),
        }
    }
}

#[cfg(unix)]
fn forward_signal(child: &Child, signal: nix::sys::signal::Signal) {
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    let Some(pid) = child.id() else {
        return;
    };
    match kill(Pid::from_raw(pid as i32), signal) {
        Ok(()) => debug!(pid, %signal, "forwarded signal to child"),
        Err(err) => warn!(pid, %signal, error = %err, "failed to forward signal"),
    }
}

/// 시그널로 종료된 경우 셸 관례대로 128 + 시그널 번호.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
