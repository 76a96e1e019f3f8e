//! SealText 原子写入工具。
//!
//! 提供「先写临时文件，成功后再替换目标文件」的写出语义，
//! 避免在写入失败时留下半截密文或明文。

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// 原子写文件。
///
/// 流程：
/// 1. 在目标目录创建临时文件；
/// 2. 写入完整内容并 sync；
/// 3. 使用 rename 替换目标文件。
pub fn write_atomic(target: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent)?;

    let tmp_path = build_tmp_path(parent, target.file_name());
    let result = File::create(&tmp_path).and_then(|mut tmp_file| {
        tmp_file.write_all(contents)?;
        tmp_file.sync_all()
    });

    if let Err(err) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    if let Err(err) = fs::rename(&tmp_path, target) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    Ok(())
}

fn build_tmp_path(parent: &Path, file_name: Option<&std::ffi::OsStr>) -> PathBuf {
    let base_name = file_name
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("sealtext-output");

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    let counter = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);

    parent.join(format!(
        ".{base_name}.tmp-{}-{timestamp}-{counter}",
        std::process::id()
    ))
}
