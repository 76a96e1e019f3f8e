//! SealText 密文格式
//!
//! 密文布局不自描述（没有 magic / 版本号），
//! 解密方必须与加密方选择相同的 `BlobLayout`。

pub mod blob;

/// 密文帧布局
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlobLayout {
    /// `nonce || ciphertext || tag`，密钥使用固定 salt 派生
    ///
    /// 与旧版密文逐字节兼容。
    #[default]
    FixedSalt,

    /// `salt || nonce || ciphertext || tag`，每条消息独立随机 salt
    RandomSalt,
}

impl BlobLayout {
    /// 该布局下解码后的最小字节数
    pub fn min_len(self) -> usize {
        match self {
            Self::FixedSalt => blob::MIN_BLOB_LEN,
            Self::RandomSalt => blob::MIN_SALTED_BLOB_LEN,
        }
    }
}
