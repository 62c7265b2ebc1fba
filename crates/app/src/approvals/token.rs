//! Approval token formatting, signing, and verification.
//!
//! An approval token authorizes exactly one decision on one registration.
//! Tokens carry their claims in the clear and a MAC over them, so they can
//! be verified without a database lookup:
//!
//! `wr_v1_<claims-base64url>.<mac-hex>`

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    str::FromStr,
};

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

/// Approval token identifier prefix.
pub const APPROVAL_TOKEN_PREFIX: &str = "wr";

type HmacSha256 = Hmac<Sha256>;

/// Approval token versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalTokenVersion {
    V1,
}

impl ApprovalTokenVersion {
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl FromStr for ApprovalTokenVersion {
    type Err = ApprovalTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "v1" => Ok(Self::V1),
            _ => Err(ApprovalTokenError::UnsupportedVersion),
        }
    }
}

/// The one-click decision a token authorizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalAction {
    Approve,
    Reject,
}

impl ApprovalAction {
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

/// Claims carried by an approval token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalClaims {
    pub registration: Uuid,
    pub action: ApprovalAction,
    pub expires_at: Timestamp,
}

/// Secret key approval tokens are signed with.
#[derive(Clone)]
pub struct ApprovalSigningKey {
    bytes: Vec<u8>,
}

impl ApprovalSigningKey {
    #[must_use]
    pub fn from_secret(secret: &str) -> Self {
        Self {
            bytes: secret.as_bytes().to_vec(),
        }
    }

    fn mac(&self) -> Result<HmacSha256, ApprovalTokenError> {
        HmacSha256::new_from_slice(&self.bytes).map_err(|_| ApprovalTokenError::InvalidKey)
    }
}

impl Debug for ApprovalSigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("ApprovalSigningKey(**redacted**)")?;

        Ok(())
    }
}

impl Drop for ApprovalSigningKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Format a signed approval token for the given claims.
///
/// # Errors
///
/// Returns an error when the signing key is unusable or the claims cannot
/// be serialized.
pub fn issue_approval_token(
    key: &ApprovalSigningKey,
    claims: &ApprovalClaims,
) -> Result<String, ApprovalTokenError> {
    let encoded_claims = URL_SAFE_NO_PAD
        .encode(serde_json::to_vec(claims).map_err(|_| ApprovalTokenError::InvalidClaims)?);

    let mut mac = key.mac()?;
    mac.update(&mac_input(ApprovalTokenVersion::V1, &encoded_claims));

    Ok(format!(
        "{APPROVAL_TOKEN_PREFIX}_{}_{}.{}",
        ApprovalTokenVersion::V1.segment(),
        encoded_claims,
        encode_mac_hex(mac.finalize().into_bytes().as_slice())
    ))
}

/// A token split into its parts, not yet verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedApprovalToken {
    pub version: ApprovalTokenVersion,
    pub encoded_claims: String,
    pub mac: Vec<u8>,
}

/// Split a token into its version, claims, and MAC segments.
///
/// # Errors
///
/// Returns an error when the token does not have the expected shape.
pub fn parse_approval_token(token: &str) -> Result<ParsedApprovalToken, ApprovalTokenError> {
    let (identifier, mac_hex) = token
        .split_once('.')
        .ok_or(ApprovalTokenError::InvalidFormat)?;

    let mut segments = identifier.splitn(3, '_');

    let prefix = segments.next().ok_or(ApprovalTokenError::InvalidFormat)?;
    let version = segments.next().ok_or(ApprovalTokenError::InvalidFormat)?;
    let encoded_claims = segments.next().ok_or(ApprovalTokenError::InvalidFormat)?;

    if prefix != APPROVAL_TOKEN_PREFIX {
        return Err(ApprovalTokenError::InvalidFormat);
    }

    Ok(ParsedApprovalToken {
        version: version.parse()?,
        encoded_claims: encoded_claims.to_string(),
        mac: decode_mac_hex(mac_hex).ok_or(ApprovalTokenError::InvalidFormat)?,
    })
}

/// Verifies approval tokens against the signing key.
#[derive(Debug, Clone)]
pub struct ApprovalTokenVerifier {
    key: ApprovalSigningKey,
}

impl ApprovalTokenVerifier {
    #[must_use]
    pub fn new(key: ApprovalSigningKey) -> Self {
        Self { key }
    }

    /// Verify a token's MAC, expiry, and action, returning its claims.
    ///
    /// # Errors
    ///
    /// Returns an error when the token is malformed, its signature does not
    /// match, it has expired, or it was issued for a different action.
    pub fn verify(
        &self,
        token: &str,
        expected_action: ApprovalAction,
        now: Timestamp,
    ) -> Result<ApprovalClaims, ApprovalTokenError> {
        let parsed = parse_approval_token(token)?;

        let mut mac = self.key.mac()?;
        mac.update(&mac_input(parsed.version, &parsed.encoded_claims));
        mac.verify_slice(&parsed.mac)
            .map_err(|_| ApprovalTokenError::InvalidSignature)?;

        let claims_bytes = URL_SAFE_NO_PAD
            .decode(&parsed.encoded_claims)
            .map_err(|_| ApprovalTokenError::InvalidClaims)?;

        let claims = serde_json::from_slice::<ApprovalClaims>(&claims_bytes)
            .map_err(|_| ApprovalTokenError::InvalidClaims)?;

        if claims.expires_at <= now {
            return Err(ApprovalTokenError::Expired);
        }

        if claims.action != expected_action {
            return Err(ApprovalTokenError::ActionMismatch);
        }

        Ok(claims)
    }
}

/// Errors raised while issuing, parsing, or verifying approval tokens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApprovalTokenError {
    #[error("approval token format is invalid")]
    InvalidFormat,

    #[error("approval token version is not supported")]
    UnsupportedVersion,

    #[error("approval token signature is invalid")]
    InvalidSignature,

    #[error("approval token claims are invalid")]
    InvalidClaims,

    #[error("approval token has expired")]
    Expired,

    #[error("approval token was issued for a different action")]
    ActionMismatch,

    #[error("approval token expiry is out of range")]
    ExpiryOutOfRange,

    #[error("approval signing key is unusable")]
    InvalidKey,
}

fn mac_input(version: ApprovalTokenVersion, encoded_claims: &str) -> Vec<u8> {
    format!("{APPROVAL_TOKEN_PREFIX}:{}:{encoded_claims}", version.segment()).into_bytes()
}

fn encode_mac_hex(mac: &[u8]) -> String {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    let mut encoded = String::with_capacity(mac.len() * 2);

    for byte in mac {
        encoded.push(HEX_CHARS[(byte >> 4) as usize] as char);
        encoded.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }

    encoded
}

fn decode_mac_hex(mac_hex: &str) -> Option<Vec<u8>> {
    let bytes = mac_hex.as_bytes();

    if bytes.is_empty() || bytes.len() % 2 != 0 {
        return None;
    }

    let mut decoded = Vec::with_capacity(bytes.len() / 2);

    for pair in bytes.chunks_exact(2) {
        let high = decode_hex_nibble(*pair.first()?)?;
        let low = decode_hex_nibble(*pair.get(1)?)?;

        decoded.push((high << 4) | low);
    }

    Some(decoded)
}

fn decode_hex_nibble(value: u8) -> Option<u8> {
    match value {
        b'0'..=b'9' => Some(value - b'0'),
        b'a'..=b'f' => Some(value - b'a' + 10),
        b'A'..=b'F' => Some(value - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn signing_key() -> ApprovalSigningKey {
        ApprovalSigningKey::from_secret("an-unremarkable-test-secret")
    }

    fn claims(action: ApprovalAction) -> TestResult<ApprovalClaims> {
        Ok(ApprovalClaims {
            registration: Uuid::now_v7(),
            action,
            expires_at: "2026-01-08T00:00:00Z".parse()?,
        })
    }

    fn before_expiry() -> TestResult<Timestamp> {
        Ok("2026-01-01T00:00:00Z".parse()?)
    }

    #[test]
    fn issued_tokens_verify_and_return_their_claims() -> TestResult {
        let key = signing_key();
        let claims = claims(ApprovalAction::Approve)?;

        let token = issue_approval_token(&key, &claims)?;
        let verified =
            ApprovalTokenVerifier::new(key).verify(&token, ApprovalAction::Approve, before_expiry()?)?;

        assert_eq!(verified, claims);

        Ok(())
    }

    #[test]
    fn issued_tokens_carry_the_prefix_and_version() -> TestResult {
        let token = issue_approval_token(&signing_key(), &claims(ApprovalAction::Reject)?)?;

        assert!(token.starts_with("wr_v1_"), "unexpected token shape: {token}");

        Ok(())
    }

    #[test]
    fn tampered_claims_fail_signature_verification() -> TestResult {
        let key = signing_key();
        let token = issue_approval_token(&key, &claims(ApprovalAction::Approve)?)?;

        // Flip one character inside the claims segment.
        let tampered = token.replace("wr_v1_", "wr_v1_A");

        let result =
            ApprovalTokenVerifier::new(key).verify(&tampered, ApprovalAction::Approve, before_expiry()?);

        assert_eq!(result, Err(ApprovalTokenError::InvalidSignature));

        Ok(())
    }

    #[test]
    fn tokens_signed_with_another_key_are_rejected() -> TestResult {
        let token = issue_approval_token(&signing_key(), &claims(ApprovalAction::Approve)?)?;

        let verifier = ApprovalTokenVerifier::new(ApprovalSigningKey::from_secret("a-different-secret"));
        let result = verifier.verify(&token, ApprovalAction::Approve, before_expiry()?);

        assert_eq!(result, Err(ApprovalTokenError::InvalidSignature));

        Ok(())
    }

    #[test]
    fn expired_tokens_are_rejected() -> TestResult {
        let key = signing_key();
        let claims = claims(ApprovalAction::Approve)?;

        let token = issue_approval_token(&key, &claims)?;
        let after_expiry = claims.expires_at.checked_add(jiff::Span::new().hours(1))?;

        let result = ApprovalTokenVerifier::new(key).verify(&token, ApprovalAction::Approve, after_expiry);

        assert_eq!(result, Err(ApprovalTokenError::Expired));

        Ok(())
    }

    #[test]
    fn expiry_is_checked_inclusively() -> TestResult {
        let key = signing_key();
        let claims = claims(ApprovalAction::Approve)?;

        let token = issue_approval_token(&key, &claims)?;
        let result = ApprovalTokenVerifier::new(key).verify(&token, ApprovalAction::Approve, claims.expires_at);

        assert_eq!(result, Err(ApprovalTokenError::Expired));

        Ok(())
    }

    #[test]
    fn approve_tokens_cannot_reject() -> TestResult {
        let key = signing_key();
        let token = issue_approval_token(&key, &claims(ApprovalAction::Approve)?)?;

        let result = ApprovalTokenVerifier::new(key).verify(&token, ApprovalAction::Reject, before_expiry()?);

        assert_eq!(result, Err(ApprovalTokenError::ActionMismatch));

        Ok(())
    }

    #[test]
    fn parse_rejects_tokens_without_a_mac_separator() {
        assert_eq!(
            parse_approval_token("wr_v1_missing-the-separator"),
            Err(ApprovalTokenError::InvalidFormat)
        );
    }

    #[test]
    fn parse_rejects_foreign_prefixes() {
        assert_eq!(
            parse_approval_token("xx_v1_c2VnbWVudA.00ff"),
            Err(ApprovalTokenError::InvalidFormat)
        );
    }

    #[test]
    fn parse_rejects_unknown_versions() {
        assert_eq!(
            parse_approval_token("wr_v9_c2VnbWVudA.00ff"),
            Err(ApprovalTokenError::UnsupportedVersion)
        );
    }

    #[test]
    fn parse_rejects_non_hex_macs() {
        assert_eq!(
            parse_approval_token("wr_v1_c2VnbWVudA.not-hex"),
            Err(ApprovalTokenError::InvalidFormat)
        );
    }

    #[test]
    fn signing_key_debug_output_is_redacted() {
        let debugged = format!("{:?}", signing_key());

        assert_eq!(debugged, "ApprovalSigningKey(**redacted**)");
    }
}
