mod encrypt;
mod decrypt;

pub mod crypto;
pub mod format;
pub mod fs;
pub mod error;

pub use decrypt::{decrypt_text_with, open_bytes};
pub use encrypt::{encrypt_text_with, seal_bytes};
pub use error::{Result, SealTextError};
pub use format::BlobLayout;

use std::path::Path;

use rand::rngs::OsRng;

/// 使用默认布局和系统随机源加密文本，返回 base64 密文
pub fn encrypt_text(plaintext: &str, password: &str) -> Result<String> {
    encrypt::encrypt_text_with(plaintext, password, BlobLayout::default(), &mut OsRng)
}

/// 解密 `encrypt_text` 产生的密文
pub fn decrypt_text(blob: &str, password: &str) -> Result<String> {
    decrypt::decrypt_text_with(blob, password, BlobLayout::default())
}

/// 读取文本文件，加密后原子写出 base64 密文
pub fn encrypt_file(
    input: &Path,
    output: &Path,
    password: &str,
    layout: BlobLayout,
) -> Result<()> {
    let plaintext = std::fs::read_to_string(input)?;
    let blob = encrypt::encrypt_text_with(&plaintext, password, layout, &mut OsRng)?;
    fs::atomic::write_atomic(output, blob.as_bytes())?;
    Ok(())
}

/// 读取 base64 密文文件，解密后原子写出明文
///
/// 认证失败时不会创建或修改输出文件。
pub fn decrypt_file(
    input: &Path,
    output: &Path,
    password: &str,
    layout: BlobLayout,
) -> Result<()> {
    let blob = std::fs::read_to_string(input)?;
    let plaintext = decrypt::open_bytes(&blob, password, layout)?;
    fs::atomic::write_atomic(output, &plaintext)?;
    Ok(())
}
