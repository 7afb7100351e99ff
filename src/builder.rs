//! Token minting: claims + header, signed with the API key's Ed25519 private key.
//!
//! [`TokenBuilder`] parses the key once and can then mint any number of tokens; each call
//! reads the clock and draws a new nonce. Nothing is cached between calls.

// crates.io
use ed25519_dalek::{SigningKey, VerifyingKey, pkcs8::EncodePrivateKey};
use jsonwebtoken::{EncodingKey, Header};
// self
use crate::{
	_prelude::*,
	auth::{KeyName, SignedToken},
	claims::{RequestTarget, TokenClaims},
	config::Credentials,
	error::{KeyError, TokenError},
	header::TokenHeader,
	key,
	obs::{self, TokenStage},
};

/// Mints signed tokens for a single API key.
#[derive(Clone)]
pub struct TokenBuilder {
	key_name: KeyName,
	verifying_key: VerifyingKey,
	encoding_key: EncodingKey,
}
impl TokenBuilder {
	/// Parses the credentials' private key; fails with [`Error::Key`] on malformed secrets.
	pub fn new(credentials: &Credentials) -> Result<Self> {
		let signing_key = obs::observe(TokenStage::LoadKey, || {
			let (signing_key, _format) = key::parse_signing_key(&credentials.key_secret)?;

			#[cfg(feature = "tracing")]
			tracing::debug!(
				key_name = %credentials.key_name,
				format = _format.as_str(),
				"loaded signing key"
			);

			Ok::<_, Error>(signing_key)
		})?;

		Ok(Self::from_signing_key(credentials.key_name.clone(), &signing_key)?)
	}

	/// Wraps an already parsed signing key.
	pub fn from_signing_key(
		key_name: KeyName,
		signing_key: &SigningKey,
	) -> Result<Self, KeyError> {
		let der = signing_key.to_pkcs8_der().map_err(|source| KeyError::Export { source })?;

		Ok(Self {
			key_name,
			verifying_key: signing_key.verifying_key(),
			encoding_key: EncodingKey::from_ed_der(der.as_bytes()),
		})
	}

	/// Key name placed in `sub` and `kid`.
	pub fn key_name(&self) -> &KeyName {
		&self.key_name
	}

	/// Public half of the signing key, for verifying minted tokens.
	pub fn verifying_key(&self) -> VerifyingKey {
		self.verifying_key
	}

	/// Mints a token for `target`, valid from now.
	pub fn build(&self, target: &RequestTarget) -> Result<SignedToken> {
		self.build_at(target, OffsetDateTime::now_utc())
	}

	/// Mints a token for `target`, valid from `issued_at`.
	pub fn build_at(
		&self,
		target: &RequestTarget,
		issued_at: OffsetDateTime,
	) -> Result<SignedToken> {
		let claims = TokenClaims::new(&self.key_name, target, issued_at);

		self.sign(&TokenHeader::new(&self.key_name), &claims)
	}

	/// Serializes and signs an explicit header and claims pair.
	pub fn sign(&self, header: &TokenHeader, claims: &TokenClaims) -> Result<SignedToken> {
		obs::observe(TokenStage::Mint, || {
			let token = jsonwebtoken::encode(&Header::from(header), claims, &self.encoding_key)
				.map_err(TokenError::Encode)?;

			#[cfg(feature = "tracing")]
			tracing::debug!(
				key_name = %self.key_name,
				uri = %claims.uri,
				nbf = claims.nbf,
				exp = claims.exp,
				"minted token"
			);

			Ok::<_, Error>(SignedToken::new(token))
		})
	}
}
impl Debug for TokenBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenBuilder")
			.field("key_name", &self.key_name)
			.field("encoding_key", &"<redacted>")
			.finish()
	}
}

/// Mints one token for `method host path` using `credentials`.
///
/// Convenience over [`TokenBuilder::new`] followed by [`TokenBuilder::build`].
pub fn build_token(
	credentials: &Credentials,
	method: &str,
	host: &str,
	path: &str,
) -> Result<SignedToken> {
	TokenBuilder::new(credentials)?.build(&RequestTarget::new(method, host, path))
}
