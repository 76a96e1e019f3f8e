//! SealText 解密流程实现
//!
//! 解密流程（严格顺序）：
//! 1. base64 解码并按布局拆帧（格式错误在 KDF 之前就报出）
//! 2. 使用 salt + 密码派生 AEAD key
//! 3. AES-256-GCM 解密并校验认证标签
//!
//! 注意：
//! - 认证失败时不返回任何部分明文
//! - 对外不区分“密码错误”与“数据损坏”

use tracing::debug;

use crate::crypto::{aead, kdf};
use crate::encrypt::is_blank;
use crate::error::{Result, SealTextError};
use crate::format::{BlobLayout, blob};

/// 解密文本
///
/// 明文按 UTF-8 解码，非法序列替换为 U+FFFD。
pub fn decrypt_text_with(text: &str, password: &str, layout: BlobLayout) -> Result<String> {
    let plaintext = open_bytes(text, password, layout)?;
    Ok(String::from_utf8_lossy(&plaintext).into_owned())
}

/// 解密为原始字节序列
pub fn open_bytes(text: &str, password: &str, layout: BlobLayout) -> Result<Vec<u8>> {
    if is_blank(password) {
        return Err(SealTextError::Input("password is empty"));
    }

    let plaintext = match layout {
        BlobLayout::FixedSalt => {
            let parts = blob::unpack(text)?;
            let key = kdf::derive_key(password)?;
            aead::decrypt(&key, &parts.nonce, &parts.ciphertext)?
        }
        BlobLayout::RandomSalt => {
            let parts = blob::unpack_salted(text)?;
            let key = kdf::derive_key_with_salt(password, &parts.salt)?;
            aead::decrypt(&key, &parts.sealed.nonce, &parts.sealed.ciphertext)?
        }
    };

    debug!(?layout, plaintext_len = plaintext.len(), "decrypted");

    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_rejected_before_parsing() {
        assert!(matches!(
            open_bytes("not even base64", " ", BlobLayout::FixedSalt),
            Err(SealTextError::Input(_))
        ));
    }

    #[test]
    fn malformed_blob_is_reported_for_both_layouts() {
        for layout in [BlobLayout::FixedSalt, BlobLayout::RandomSalt] {
            assert!(matches!(
                open_bytes("AAAA", "pw", layout),
                Err(SealTextError::MalformedInput(_))
            ));
        }
    }
}
