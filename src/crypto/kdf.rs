//! SealText 密钥派生函数（KDF）模块
//!
//! 本模块负责将用户输入的密码，通过 PBKDF2-HMAC-SHA256
//! 派生为 32 字节对称密钥，用于后续 AES-256-GCM 加解密。
//!
//! 两种用法：
//! - `derive_key`：使用固定 salt，与旧版密文保持兼容
//! - `derive_key_with_salt`：使用每条消息独立的随机 salt
//!
//! 注意：固定 salt 意味着相同密码永远得到相同密钥，
//! 无法抵御预计算字典攻击。新数据应使用随机 salt 布局。

use pbkdf2::pbkdf2_hmac;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use tracing::trace;
use zeroize::Zeroizing;

use crate::error::{Result, SealTextError};

/// 派生密钥长度（256-bit）
pub const KEY_LEN: usize = 32;

/// PBKDF2 迭代次数
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// 旧版格式使用的固定 salt
pub const LEGACY_SALT: &[u8] = b"salt";

/// 随机 salt 长度（字节）
pub const SALT_LEN: usize = 16;

/// 派生出的密钥，离开作用域后自动清零
pub type DerivedKey = Zeroizing<[u8; KEY_LEN]>;

/// 使用固定 salt 派生密钥
pub fn derive_key(password: &str) -> Result<DerivedKey> {
    derive_key_with_salt(password, LEGACY_SALT)
}

/// 根据密码和 salt 派生对称加密密钥
///
/// 纯函数：相同 (password, salt) 总是得到相同密钥。
/// 空密码在机制上允许，调用方应在更早的边界拒绝。
pub fn derive_key_with_salt(password: &str, salt: &[u8]) -> Result<DerivedKey> {
    if salt.is_empty() {
        return Err(SealTextError::Internal);
    }

    let key = pbkdf2_sha256(password, salt, PBKDF2_ITERATIONS);
    trace!(salt_len = salt.len(), iterations = PBKDF2_ITERATIONS, "derived key");

    Ok(key)
}

fn pbkdf2_sha256(password: &str, salt: &[u8], rounds: u32) -> DerivedKey {
    // 使用 Zeroizing 包装，确保密钥在作用域结束后被清零
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, rounds, &mut key[..]);
    key
}

/// 生成随机 salt
///
/// 每次加密都必须使用独立的 salt，严禁复用。
pub fn generate_salt<R: RngCore + CryptoRng>(rng: &mut R) -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    rng.try_fill_bytes(&mut salt)
        .map_err(|_| SealTextError::Entropy)?;
    Ok(salt)
}
