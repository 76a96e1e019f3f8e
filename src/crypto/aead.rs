//! SealText AEAD 加解密模块
//!
//! 本模块基于 AES-256-GCM 实现 AEAD（Authenticated Encryption
//! with Associated Data），不使用附加数据（AAD）。
//!
//! 功能说明：
//! - 提供“加密 + 完整性校验”一体化能力
//! - 解密失败即表示：密码错误 或 数据被篡改，两者不做区分
//! - nonce 由调用方注入的随机源生成，严禁复用
//!
//! 安全约束：
//! - 每次加密必须使用全新的 nonce
//! - 不允许在未校验通过的情况下输出任何明文

use aes_gcm::{
    Aes256Gcm, Key, Nonce,
    aead::{Aead, KeyInit},
};
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::crypto::kdf::KEY_LEN;
use crate::error::{Result, SealTextError};

/// AES-GCM 使用的 nonce 长度（96 bit，标准推荐值）
pub const NONCE_LEN: usize = 12;

/// AES-GCM 认证标签长度
pub const TAG_LEN: usize = 16;

/// 加密结果结构
///
/// nonce 需要与密文一同保存，用于解密
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedData {
    pub nonce: [u8; NONCE_LEN],
    /// 密文 || 16 字节认证标签
    pub ciphertext: Vec<u8>,
}

/// 使用 AES-256-GCM 加密数据
///
/// #### 参数
/// - `key_bytes`：32 字节对称密钥（来自 KDF）
/// - `plaintext`：待加密的数据
/// - `rng`：密码学安全随机源，用于生成 nonce
///
/// #### 错误
/// - 随机源不可用时返回 `Entropy`，不会退化为弱随机
pub fn encrypt<R: RngCore + CryptoRng>(
    key_bytes: &[u8; KEY_LEN],
    plaintext: &[u8],
    rng: &mut R,
) -> Result<EncryptedData> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key_bytes));

    let mut nonce = [0u8; NONCE_LEN];
    rng.try_fill_bytes(&mut nonce)
        .map_err(|_| SealTextError::Entropy)?;

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| SealTextError::Internal)?;

    debug!(plaintext_len = plaintext.len(), sealed_len = ciphertext.len(), "sealed payload");

    Ok(EncryptedData { nonce, ciphertext })
}

/// 使用 AES-256-GCM 解密数据
///
/// # 错误
/// - `sealed` 短于认证标签长度时返回 `MalformedInput`
/// - 若密码错误或数据被篡改，返回 `Authentication`
///
/// # 安全保证
/// - 在认证未通过前，不会泄露任何明文数据
pub fn decrypt(
    key_bytes: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    sealed: &[u8],
) -> Result<Vec<u8>> {
    if sealed.len() < TAG_LEN {
        return Err(SealTextError::MalformedInput(format!(
            "sealed payload is {} bytes, shorter than the {TAG_LEN}-byte tag",
            sealed.len()
        )));
    }

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key_bytes));

    cipher
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| {
            debug!(sealed_len = sealed.len(), "AEAD tag verification failed");
            SealTextError::Authentication
        })
}
