use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Default allowed clock skew for timestamped signatures
pub const DEFAULT_TOLERANCE_SECS: i64 = 300;
const MAX_HEADER_LEN: usize = 4096;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WebhookError {
    #[error("invalid signing key")]
    InvalidKey,
    #[error("malformed signature header: {0}")]
    MalformedHeader(String),
    #[error("signature is not valid hex")]
    MalformedSignature,
    #[error("signature mismatch")]
    SignatureMismatch,
    #[error("timestamp {timestamp} is outside the {tolerance}s tolerance window")]
    TimestampOutOfTolerance { timestamp: i64, tolerance: i64 },
    #[error("tolerance must be a non-negative number of seconds, got {0}")]
    NegativeTolerance(i64),
}

fn mac_for(secret: &[u8]) -> Result<HmacSha256, WebhookError> {
    HmacSha256::new_from_slice(secret).map_err(|_| WebhookError::InvalidKey)
}

/// Lower-case hex HMAC-SHA256 of the payload
pub fn sign_hex(secret: &[u8], payload: &[u8]) -> Result<String, WebhookError> {
    let mut mac = mac_for(secret)?;
    mac.update(payload);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Verify a hex signature, with or without a `sha256=` prefix.
/// Comparison is constant-time.
pub fn verify_hex(secret: &[u8], payload: &[u8], signature: &str) -> Result<(), WebhookError> {
    let signature = signature.trim();
    let signature = signature.strip_prefix("sha256=").unwrap_or(signature);
    let expected = hex::decode(signature).map_err(|_| WebhookError::MalformedSignature)?;
    let mut mac = mac_for(secret)?;
    mac.update(payload);
    mac.verify_slice(&expected).map_err(|_| WebhookError::SignatureMismatch)
}

/// Parsed `t=<unix>,v1=<hex>[,v1=<hex>...]` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampedHeader {
    pub timestamp: i64,
    pub signatures: Vec<String>,
}

impl TimestampedHeader {
    pub fn parse(header: &str) -> Result<Self, WebhookError> {
        if header.len() > MAX_HEADER_LEN {
            return Err(WebhookError::MalformedHeader("header too long".to_string()));
        }
        let mut timestamp = None;
        let mut signatures = Vec::new();
        for part in header.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| WebhookError::MalformedHeader(format!("expected key=value, got '{}'", part)))?;
            match key {
                "t" => {
                    let ts = value
                        .parse::<i64>()
                        .map_err(|_| WebhookError::MalformedHeader(format!("invalid timestamp '{}'", value)))?;
                    timestamp = Some(ts);
                }
                "v1" => signatures.push(value.to_string()),
                // Other schemes (v0, test signatures) are ignored
                _ => {}
            }
        }
        let timestamp = timestamp.ok_or_else(|| WebhookError::MalformedHeader("missing timestamp".to_string()))?;
        if signatures.is_empty() {
            return Err(WebhookError::MalformedHeader("no v1 signature".to_string()));
        }
        Ok(Self { timestamp, signatures })
    }
}

/// Build a `t=...,v1=...` header for a payload signed at `timestamp`
pub fn sign_timestamped(secret: &[u8], payload: &[u8], timestamp: i64) -> Result<String, WebhookError> {
    let signed = signed_content(timestamp, payload);
    Ok(format!("t={},v1={}", timestamp, sign_hex(secret, &signed)?))
}

/// Verify a timestamped header. The signed content is `"{t}.{payload}"`; any
/// matching v1 signature is accepted as long as `t` lies within `tolerance`
/// seconds of `now` in either direction.
pub fn verify_timestamped_header(
    secret: &[u8],
    payload: &[u8],
    header: &str,
    tolerance_secs: i64,
    now: i64,
) -> Result<TimestampedHeader, WebhookError> {
    if tolerance_secs < 0 {
        return Err(WebhookError::NegativeTolerance(tolerance_secs));
    }
    let parsed = TimestampedHeader::parse(header)?;
    // `t` is untrusted and may sit anywhere in the i64 range
    if now.abs_diff(parsed.timestamp) > tolerance_secs.unsigned_abs() {
        return Err(WebhookError::TimestampOutOfTolerance {
            timestamp: parsed.timestamp,
            tolerance: tolerance_secs,
        });
    }
    let signed = signed_content(parsed.timestamp, payload);
    let mut last_err = WebhookError::SignatureMismatch;
    for signature in &parsed.signatures {
        match verify_hex(secret, &signed, signature) {
            Ok(()) => return Ok(parsed),
            Err(e) => last_err = e,
        }
    }
    Err(last_err)
}

fn signed_content(timestamp: i64, payload: &[u8]) -> Vec<u8> {
    let mut signed = format!("{}.", timestamp).into_bytes();
    signed.extend_from_slice(payload);
    signed
}
