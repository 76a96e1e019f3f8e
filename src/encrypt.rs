//! SealText 加密流程实现
//!
//! 本模块负责将一段文本加密为 base64 密文。
//!
//! 加密流程（严格顺序）：
//! 1. 校验输入非空（在任何密码学运算之前）
//! 2. 按布局准备 salt（固定或随机）
//! 3. 使用 KDF 从密码派生 AEAD key
//! 4. AES-256-GCM 加密，得到 nonce 与密文
//! 5. 按布局拼帧并 base64 编码
//!
//! 注意：
//! - 密钥只在本次调用内存活，不做任何缓存
//! - 随机源由调用方注入

use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::crypto::{aead, kdf};
use crate::error::{Result, SealTextError};
use crate::format::{BlobLayout, blob};

/// 加密文本，空文本或空密码直接拒绝
pub fn encrypt_text_with<R: RngCore + CryptoRng>(
    plaintext: &str,
    password: &str,
    layout: BlobLayout,
    rng: &mut R,
) -> Result<String> {
    if is_blank(plaintext) {
        return Err(SealTextError::Input("plaintext is empty"));
    }

    seal_bytes(plaintext.as_bytes(), password, layout, rng)
}

/// 加密任意字节序列
pub fn seal_bytes<R: RngCore + CryptoRng>(
    plaintext: &[u8],
    password: &str,
    layout: BlobLayout,
    rng: &mut R,
) -> Result<String> {
    if is_blank(password) {
        return Err(SealTextError::Input("password is empty"));
    }

    let blob = match layout {
        BlobLayout::FixedSalt => {
            let key = kdf::derive_key(password)?;
            let sealed = aead::encrypt(&key, plaintext, rng)?;
            blob::pack(&sealed.nonce, &sealed.ciphertext)
        }
        BlobLayout::RandomSalt => {
            let salt = kdf::generate_salt(rng)?;
            let key = kdf::derive_key_with_salt(password, &salt)?;
            let sealed = aead::encrypt(&key, plaintext, rng)?;
            blob::pack_salted(&salt, &sealed.nonce, &sealed.ciphertext)
        }
    };

    debug!(?layout, blob_len = blob.len(), "encrypted");

    Ok(blob)
}

/// 与原有界面一致：仅含空白字符视同为空
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
