//! Signature base construction and digest helpers
//!
//! WeChat signs requests over a canonical base string: the parameter
//! mapping sorted by key, joined as `key=value` pairs with `&`. The base
//! string is fed to SHA1 for JS-SDK ticket signatures and to MD5 for
//! payment signatures. Per the platform's conventions, SHA1 digests are
//! lowercase hex and MD5 digests are uppercase hex.
//!
//! The signer never mixes in a shared secret on its own. Payment flows
//! append `&key=<merchant key>` to the base string before calling
//! [`sign_string`]; the JS-SDK flow has no secret at all.

use std::collections::BTreeMap;

use md5::Md5;
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use sha1::{Digest, Sha1};

/// A flat request parameter mapping.
///
/// `BTreeMap` keeps keys unique and iterates in ASCII lexicographic order,
/// which is exactly the ordering the signature base requires.
pub type Params = BTreeMap<String, String>;

const NONCE_LEN: usize = 10;

/// Digest algorithm selector for [`sign_string`] and [`sign_params`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignType {
    /// SHA1, lowercase hex. Used by the JS-SDK ticket flow.
    Sha1,
    /// MD5, uppercase hex. Used by the payment flow.
    Md5,
}

/// Build the canonical signature base from a parameter mapping.
///
/// Keys appear in ascending lexicographic order, pairs are joined with
/// `&`, and no percent-encoding is applied: WeChat signs the raw string,
/// not a transport-safe query string. Values must therefore not contain
/// `&` or `=`; the caller is responsible for valid input.
pub fn base_string(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Sign a raw string with the given algorithm.
///
/// Use this when the base string already carries a suffix the canonical
/// form does not, e.g. the payment `&key=<merchant key>` tail.
pub fn sign_string(input: &str, sign_type: SignType) -> String {
    match sign_type {
        SignType::Sha1 => hex::encode(Sha1::digest(input.as_bytes())),
        SignType::Md5 => hex::encode_upper(Md5::digest(input.as_bytes())),
    }
}

/// Canonicalize a parameter mapping and sign the result.
pub fn sign_params(params: &Params, sign_type: SignType) -> String {
    sign_string(&base_string(params), sign_type)
}

/// Generate a 10-character alphanumeric nonce.
pub fn nonce_str() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}
