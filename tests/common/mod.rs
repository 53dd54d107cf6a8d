//! Common test utilities for integration tests.

#![allow(dead_code)]

use bytes::Bytes;

/// Random bytes prefixed with `prefix`, like the fixtures the legacy client
/// tests generate.
pub fn random_data(prefix: &str) -> Bytes {
    let mut data = prefix.as_bytes().to_vec();
    data.extend((0..8).map(|_| fastrand::u8(..)));
    Bytes::from(data)
}

/// Random identifier made of word characters.
pub fn random_ident(prefix: &str) -> String {
    let suffix: String = (0..6).map(|_| fastrand::alphanumeric()).collect();
    format!("{prefix}{suffix}")
}
