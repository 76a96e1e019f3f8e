use thiserror::Error;

#[derive(Debug, Error)]
pub enum SealTextError {
    #[error("invalid input: {0}")]
    Input(&'static str),

    #[error("malformed ciphertext: {0}")]
    MalformedInput(String),

    /// 密码错误与数据被篡改共用这一个变体，对外不可区分
    #[error("decryption failed: wrong password or corrupted data")]
    Authentication,

    #[error("secure random source unavailable")]
    Entropy,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error")]
    Internal,
}

pub type Result<T> = std::result::Result<T, SealTextError>;
