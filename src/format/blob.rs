//! SealText 密文帧编码
//!
//! 固定 salt 布局（默认）：
//!
//! ```text
//! offset 0..12   : nonce
//! offset 12..end : ciphertext || 16-byte tag
//! ```
//!
//! 随机 salt 布局在最前面多出 16 字节 salt。
//!
//! 两种布局都整体编码为标准 base64（带 padding，不换行），
//! 便于在文本框、剪贴板中传递。解码时忽略其中的 ASCII 空白。

use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::trace;

use crate::crypto::aead::{EncryptedData, NONCE_LEN, TAG_LEN};
use crate::crypto::kdf::SALT_LEN;
use crate::error::{Result, SealTextError};

/// 固定 salt 布局的最小长度：nonce + tag
pub const MIN_BLOB_LEN: usize = NONCE_LEN + TAG_LEN;

/// 随机 salt 布局的最小长度：salt + nonce + tag
pub const MIN_SALTED_BLOB_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

/// 随机 salt 布局解出的各部分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaltedBlob {
    pub salt: [u8; SALT_LEN],
    pub sealed: EncryptedData,
}

/// 拼接 `nonce || sealed` 并编码为 base64
pub fn pack(nonce: &[u8; NONCE_LEN], sealed: &[u8]) -> String {
    let mut combined = Vec::with_capacity(NONCE_LEN + sealed.len());
    combined.extend_from_slice(nonce);
    combined.extend_from_slice(sealed);

    STANDARD.encode(combined)
}

/// 解码 base64 并拆分出 nonce 与密文
///
/// 解码失败或长度不足 28 字节时返回 `MalformedInput`。
pub fn unpack(text: &str) -> Result<EncryptedData> {
    let bytes = decode(text, MIN_BLOB_LEN)?;
    let (nonce, sealed) = bytes.split_at(NONCE_LEN);

    Ok(EncryptedData {
        nonce: to_array(nonce)?,
        ciphertext: sealed.to_vec(),
    })
}

/// 拼接 `salt || nonce || sealed` 并编码为 base64
pub fn pack_salted(salt: &[u8; SALT_LEN], nonce: &[u8; NONCE_LEN], sealed: &[u8]) -> String {
    let mut combined = Vec::with_capacity(SALT_LEN + NONCE_LEN + sealed.len());
    combined.extend_from_slice(salt);
    combined.extend_from_slice(nonce);
    combined.extend_from_slice(sealed);

    STANDARD.encode(combined)
}

pub fn unpack_salted(text: &str) -> Result<SaltedBlob> {
    let bytes = decode(text, MIN_SALTED_BLOB_LEN)?;
    let (salt, rest) = bytes.split_at(SALT_LEN);
    let (nonce, sealed) = rest.split_at(NONCE_LEN);

    Ok(SaltedBlob {
        salt: to_array(salt)?,
        sealed: EncryptedData {
            nonce: to_array(nonce)?,
            ciphertext: sealed.to_vec(),
        },
    })
}

fn decode(text: &str, min_len: usize) -> Result<Vec<u8>> {
    // 与浏览器 atob 一致：忽略任意位置的 ASCII 空白（粘贴时的换行等）
    let compact: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| SealTextError::MalformedInput(format!("invalid base64: {e}")))?;

    if bytes.len() < min_len {
        return Err(SealTextError::MalformedInput(format!(
            "blob is {} bytes, expected at least {min_len}",
            bytes.len()
        )));
    }

    trace!(blob_len = bytes.len(), "decoded blob");

    Ok(bytes)
}

fn to_array<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| SealTextError::Internal)
}
