//! SealText 密码学核心
//!
//! - `kdf`：口令 → 256-bit 对称密钥（PBKDF2-HMAC-SHA256）
//! - `aead`：AES-256-GCM 认证加解密

pub mod aead;
pub mod kdf;

#[cfg(test)]
pub(crate) mod testing;
