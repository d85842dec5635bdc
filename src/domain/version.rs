//! 외부 도구 버전 호환성 판정.

use std::cmp::Ordering;

/// 지원하는 Claude Code 최소 버전.
pub const MIN_CLAUDE_VERSION: &str = "1.0.0";

/// 점(.)으로 구분된 숫자 버전을 비교한다. 해석 불가 시 `None`.
pub fn compare_versions(left: &str, right: &str) -> Option<Ordering> {
    let left_parts = parse_version_parts(left)?;
    let right_parts = parse_version_parts(right)?;

    let len = left_parts.len().max(right_parts.len());
    for idx in 0..len {
        let l = *left_parts.get(idx).unwrap_or(&0);
        let r = *right_parts.get(idx).unwrap_or(&0);
        match l.cmp(&r) {
            Ordering::Equal => continue,
            other => return Some(other),
        }
    }

    Some(Ordering::Equal)
}

/// `found >= minimum`이면 true. 해석 불가 시 `None`.
pub fn is_compatible(found: &str, minimum: &str) -> Option<bool> {
    compare_versions(found, minimum).map(|ord| ord != Ordering::Less)
}

/// `claude --version` 같은 출력에서 첫 버전 토큰을 뽑는다.
/// 예: "1.0.44 (Claude Code)" -> "1.0.44"
pub fn extract_version(output: &str) -> Option<String> {
    output
        .split_whitespace()
        .map(|token| token.trim_start_matches('v'))
        .find(|token| parse_version_parts(token).is_some())
        .map(|token| token.to_string())
}

fn parse_version_parts(raw: &str) -> Option<Vec<u64>> {
    let s = raw.trim().trim_start_matches('v');
    if !s.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    // pre-release/build 접미사(-beta, +sha)는 무시한다.
    let mut normalized = String::new();
    for ch in s.chars() {
        if ch.is_ascii_digit() || ch == '.' {
            normalized.push(ch);
        } else {
            break;
        }
    }

    let mut out = Vec::new();
    for part in normalized.split('.') {
        if part.is_empty() {
            continue;
        }
        let Ok(v) = part.parse::<u64>() else {
            return None;
        };
        out.push(v);
    }

    if out.is_empty() { None } else { Some(out) }
}
