//! JOSE header carried by every minted token.

// crates.io
use jsonwebtoken::{Algorithm, Header};
use rand::RngCore;
// self
use crate::{_prelude::*, auth::KeyName, error::TokenError};

/// JWS algorithm for Ed25519 signatures.
pub const ALGORITHM: Algorithm = Algorithm::EdDSA;
/// Media type label placed in `typ`.
pub const TOKEN_TYPE: &str = "JWT";

const NONCE_LEN: usize = 32;

/// Single-use random value, hex encoded.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nonce(String);
impl Nonce {
	/// Draws a fresh nonce from the thread-local CSPRNG.
	pub fn random() -> Self {
		let mut bytes = [0_u8; NONCE_LEN];

		rand::rng().fill_bytes(&mut bytes);

		Self(hex::encode(bytes))
	}

	/// Returns the hex string.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Debug for Nonce {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Nonce({})", self.0)
	}
}

/// Token header: the subset of JOSE fields every minted token carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenHeader {
	/// Signature algorithm, [`ALGORITHM`] for minted tokens.
	pub alg: Algorithm,
	/// Key identifier, equal to the `sub` claim.
	pub kid: String,
	/// Per-token random nonce.
	pub nonce: Nonce,
	/// Token type, [`TOKEN_TYPE`] for minted tokens.
	pub typ: String,
}
impl TokenHeader {
	/// Creates an EdDSA header for `key_name` with a fresh nonce.
	pub fn new(key_name: &KeyName) -> Self {
		Self::with_nonce(key_name, Nonce::random())
	}

	/// Creates an EdDSA header for `key_name` with the provided nonce.
	pub fn with_nonce(key_name: &KeyName, nonce: Nonce) -> Self {
		Self { alg: ALGORITHM, kid: key_name.to_string(), nonce, typ: TOKEN_TYPE.into() }
	}
}
impl From<&TokenHeader> for Header {
	fn from(header: &TokenHeader) -> Self {
		Header {
			typ: Some(header.typ.clone()),
			kid: Some(header.kid.clone()),
			nonce: Some(header.nonce.0.clone()),
			..Header::new(header.alg)
		}
	}
}
impl TryFrom<Header> for TokenHeader {
	type Error = TokenError;

	fn try_from(header: Header) -> Result<Self, Self::Error> {
		let kid = header.kid.ok_or(TokenError::MissingHeader { field: "kid" })?;
		let nonce = header.nonce.ok_or(TokenError::MissingHeader { field: "nonce" })?;
		let typ = header.typ.ok_or(TokenError::MissingHeader { field: "typ" })?;

		Ok(Self { alg: header.alg, kid, nonce: Nonce(nonce), typ })
	}
}
