//! Known-answer tests against independent reference implementations

use hex_literal::hex;
use lockkey_hashing::{HashAlgorithm, Hasher256, HmacSha3_256};

#[test]
fn test_blake2b_256_empty() {
    let digest = HashAlgorithm::Blake2b256.digest(b"");
    assert_eq!(
        digest,
        hex!("0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8")
    );
}

#[test]
fn test_blake2b_256_abc() {
    let digest = HashAlgorithm::Blake2b256.digest(b"abc");
    assert_eq!(
        digest,
        hex!("bddd813c634239723171ef3fee98579b94964e3bb1cb3e427262c8c068d52319")
    );
}

#[test]
fn test_blake2b_256_sequential_writes() {
    let mut hasher = Hasher256::new(HashAlgorithm::Blake2b256);
    hasher.write(b"user@example.com");
    hasher.write(b"hello, world!");
    assert_eq!(
        hasher.sum(),
        hex!("aade74586be19db176df651a39db03b46319b4494d342f1e4301424fa89b2549")
    );
}

#[test]
fn test_sha3_256_abc() {
    let digest = HashAlgorithm::Sha3_256.digest(b"abc");
    assert_eq!(
        digest,
        hex!("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532")
    );
}

#[test]
fn test_sha3_256_zero_block() {
    let digest = HashAlgorithm::Sha3_256.digest(&[0u8; 32]);
    assert_eq!(
        digest,
        hex!("9e6291970cb44dd94008c79bcaf9d86f18b4b49ba5b2a04781db7199ed3b9e4e")
    );
}

#[test]
fn test_hmac_sha3_256() {
    let mut mac = HmacSha3_256::new(b"hello, world!").expect("HMAC accepts any key length");
    mac.write(b"user@example.com");
    assert_eq!(
        *mac.sum(),
        hex!("db6aef7a247d46f7de4f22b108548871b25c70fb111448ef1c13e5ab95f4bc3a")
    );
}

#[test]
fn test_hmac_sha3_256_empty_key() {
    let mut mac = HmacSha3_256::new(b"").expect("HMAC accepts an empty key");
    mac.write(b"user@example.com");
    assert_eq!(
        *mac.sum(),
        hex!("0b9785882fad974b873e896b02f2080b89525f5fab0d52b49ed6d794ce2a26da")
    );
}
