//! Signing and verification primitive wrapping `jsonwebtoken`.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenConfig;

/// Token signer/verifier
///
/// Verification is two-phase: the signature is checked on its own first, so a
/// tampered token always reports `InvalidSignature` even when it is also
/// expired; only a token that passes the signature check can fail with
/// `Expired`. Claim parsing is a third, separately named operation that does
/// not verify anything.
#[derive(Clone)]
pub struct Signer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    signature_validation: Validation,
    expiry_validation: Validation,
    payload_validation: Validation,
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl Signer {
    /// Creates a signer from the token configuration
    ///
    /// With a symmetric algorithm the secret is used for both directions.
    /// With RS256 the secret must hold the PEM private key and `public_key`
    /// the PEM public key; the private key is then only ever used to sign.
    pub fn new(config: &TokenConfig) -> DomainResult<Self> {
        let (encoding_key, decoding_key) = match config.algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => (
                EncodingKey::from_secret(config.secret.as_bytes()),
                DecodingKey::from_secret(config.secret.as_bytes()),
            ),
            Algorithm::RS256 | Algorithm::RS384 | Algorithm::RS512 => {
                let public_key =
                    config
                        .public_key
                        .as_deref()
                        .ok_or_else(|| DomainError::Internal {
                            message: "asymmetric algorithm requires a public key".to_string(),
                        })?;

                let encoding_key = EncodingKey::from_rsa_pem(config.secret.as_bytes()).map_err(
                    |e| DomainError::Internal {
                        message: format!("invalid private key: {e}"),
                    },
                )?;
                let decoding_key = DecodingKey::from_rsa_pem(public_key.as_bytes()).map_err(
                    |e| DomainError::Internal {
                        message: format!("invalid public key: {e}"),
                    },
                )?;
                (encoding_key, decoding_key)
            }
            other => {
                return Err(DomainError::Internal {
                    message: format!("unsupported JWT algorithm: {other:?}"),
                })
            }
        };

        // Phase one checks nothing but the signature.
        let mut signature_validation = Validation::new(config.algorithm);
        signature_validation.validate_exp = false;
        signature_validation.required_spec_claims.clear();

        // Phase two re-decodes with strict expiry, no leeway.
        let mut expiry_validation = Validation::new(config.algorithm);
        expiry_validation.leeway = 0;

        let mut payload_validation = Validation::new(config.algorithm);
        payload_validation.insecure_disable_signature_validation();
        payload_validation.validate_exp = false;
        payload_validation.required_spec_claims.clear();

        Ok(Self {
            encoding_key,
            decoding_key,
            algorithm: config.algorithm,
            signature_validation,
            expiry_validation,
            payload_validation,
        })
    }

    /// Encodes claims into a signed compact token
    pub fn encode<T: Serialize>(&self, claims: &T) -> DomainResult<String> {
        let header = Header::new(self.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| DomainError::Internal {
            message: format!("failed to sign token: {e}"),
        })
    }

    /// Verifies signature and expiry, in that order
    pub fn verify(&self, token: &str) -> DomainResult<()> {
        decode::<serde_json::Value>(token, &self.decoding_key, &self.signature_validation)
            .map_err(|_| TokenError::InvalidSignature)?;

        decode::<serde_json::Value>(token, &self.decoding_key, &self.expiry_validation)
            .map_err(|_| TokenError::Expired)?;

        Ok(())
    }

    /// Parses claims without verifying the signature
    ///
    /// Must only be called where the signature was already verified in the
    /// same control-flow step; nothing returned here authorizes anything.
    pub fn payload<T: DeserializeOwned>(&self, token: &str) -> DomainResult<T> {
        let data = decode::<T>(token, &self.decoding_key, &self.payload_validation)
            .map_err(|_| TokenError::InvalidTokenPayload)?;
        Ok(data.claims)
    }
}
