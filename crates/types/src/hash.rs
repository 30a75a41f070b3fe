use core::fmt;

pub const HASH_LEN: usize = 32;

/// 32-byte digest used for script hashes and block hashes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(C)]
pub struct Hash(pub [u8; HASH_LEN]);

impl Hash {
    pub const fn new(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns `None` unless `slice` is exactly 32 bytes long.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; HASH_LEN] = slice.try_into().ok()?;
        Some(Hash::new(bytes))
    }

    pub fn to_bytes(&self) -> [u8; HASH_LEN] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH_LEN]> for Hash {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Hash(bytes)
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn from_slice_requires_exact_length() {
        let bytes = [0x5au8; HASH_LEN];
        let hash = Hash::from_slice(&bytes).expect("32 bytes");
        assert_eq!(hash.to_bytes(), bytes);
        assert_eq!(hash.as_bytes(), &bytes[..]);
        assert!(Hash::from_slice(&bytes[..31]).is_none());
        assert!(Hash::from_slice(&[0u8; 33]).is_none());
    }

    #[test]
    fn displays_as_prefixed_hex() {
        let mut bytes = [0u8; HASH_LEN];
        bytes[0] = 0xab;
        let shown = format!("{}", Hash::new(bytes));
        assert!(shown.starts_with("0xab00"));
        assert_eq!(shown.len(), 2 + 2 * HASH_LEN);
    }
}
