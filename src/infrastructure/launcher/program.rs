//! 실행 파일 탐색.

use std::env;
use std::path::{Path, PathBuf};

/// 실행 파일 경로를 찾는다.
/// 경로 구분자가 있으면 파일 존재만 확인하고, 아니면 PATH를 순회한다.
pub fn find_program(command: &str) -> Option<PathBuf> {
    if command.trim().is_empty() {
        return None;
    }

    let command_path = Path::new(command);
    if command_path.components().count() > 1 {
        return command_path.is_file().then(|| command_path.to_path_buf());
    }

    let path_var = env::var_os("PATH")?;
    env::split_paths(&path_var).find_map(|dir| lookup_in_dir(&dir, command))
}

#[cfg(not(windows))]
fn lookup_in_dir(dir: &Path, command: &str) -> Option<PathBuf> {
    let candidate = dir.join(command);
    candidate.is_file().then_some(candidate)
}

#[cfg(windows)]
fn lookup_in_dir(dir: &Path, command: &str) -> Option<PathBuf> {
    // Windows는 확장자를 생략할 수 있으므로 PATHEXT를 고려한다.
    let candidate = dir.join(command);
    if candidate.is_file() {
        return Some(candidate);
    }
    if Path::new(command).extension().is_some() {
        return None;
    }

    let pathext = env::var_os("PATHEXT").unwrap_or_else(|| ".EXE;.CMD;.BAT;.COM".into());
    pathext
        .to_string_lossy()
        .split(';')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(|ext| dir.join(format!("{command}{ext}")))
        .find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("claude");
        assert_eq!(find_program(bin.to_str().unwrap()), None);

        std::fs::write(&bin, "").unwrap();
        assert_eq!(find_program(bin.to_str().unwrap()), Some(bin));
    }

    #[test]
    fn blank_command_is_never_found() {
        assert_eq!(find_program("  "), None);
    }
}
