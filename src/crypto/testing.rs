use rand::{CryptoRng, RngCore};

/// 模拟熵源不可用：所有取随机数的调用都失败
pub(crate) struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        unreachable!("randomness must be drawn with try_fill_bytes")
    }

    fn next_u64(&mut self) -> u64 {
        unreachable!("randomness must be drawn with try_fill_bytes")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        unreachable!("randomness must be drawn with try_fill_bytes")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new(std::io::Error::other("entropy pool empty")))
    }
}

impl CryptoRng for FailingRng {}
