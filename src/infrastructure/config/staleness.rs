//! 파생 문서 재생성 필요 여부 판정(수정 시각 비교).

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use tracing::debug;

/// 원본이 파생물보다 엄밀히 새로우면 true.
/// 어느 한쪽이라도 stat할 수 없으면 재생성이 필요하다고 본다.
pub fn is_stale(source: &Path, derived: &Path) -> bool {
    match (modified(source), modified(derived)) {
        (Some(source_time), Some(derived_time)) => source_time > derived_time,
        _ => {
            debug!(
                source = %source.display(),
                derived = %derived.display(),
                "timestamp unavailable; treating as stale"
            );
            true
        }
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}
