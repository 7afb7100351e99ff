//! Signature verification and decoding of minted tokens.
//!
//! Only the signature and algorithm are checked here; callers decide whether the validity
//! window matters via [`TokenClaims::is_valid_at`].

// crates.io
use ed25519_dalek::VerifyingKey;
use jsonwebtoken::{DecodingKey, Validation, errors::ErrorKind};
// self
use crate::{
	_prelude::*,
	claims::TokenClaims,
	error::TokenError,
	header::{ALGORITHM, TokenHeader},
	obs::{self, TokenStage},
};

/// Header and claims of a token whose signature checked out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedToken {
	/// Decoded JOSE header.
	pub header: TokenHeader,
	/// Decoded claims payload.
	pub claims: TokenClaims,
}

/// Verifies `token` against `verifying_key` and decodes its header and claims.
pub fn verify(token: &str, verifying_key: &VerifyingKey) -> Result<VerifiedToken> {
	obs::observe(TokenStage::Verify, || verify_compact(token, verifying_key).map_err(Error::from))
}

fn verify_compact(
	token: &str,
	verifying_key: &VerifyingKey,
) -> Result<VerifiedToken, TokenError> {
	let header = jsonwebtoken::decode_header(token).map_err(TokenError::Decode)?;

	if header.alg != ALGORITHM {
		return Err(TokenError::UnsupportedAlgorithm { alg: format!("{:?}", header.alg) });
	}

	let data = jsonwebtoken::decode::<TokenClaims>(
		token,
		&DecodingKey::from_ed_der(verifying_key.as_bytes()),
		&signature_only(),
	)
	.map_err(|e| match e.kind() {
		ErrorKind::InvalidSignature => TokenError::InvalidSignature,
		_ => TokenError::Decode(e),
	})?;

	Ok(VerifiedToken { header: TokenHeader::try_from(data.header)?, claims: data.claims })
}

// Time checks live in `TokenClaims::is_valid_at`.
fn signature_only() -> Validation {
	let mut validation = Validation::new(ALGORITHM);

	validation.validate_exp = false;
	validation.validate_nbf = false;
	validation.validate_aud = false;

	validation
}
