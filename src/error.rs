//! Crate-level error types shared by key loading, configuration, and token handling.

// self
use crate::{_prelude::*, auth::KeyNameError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The private key secret could not be parsed as an Ed25519 key.
	#[error(transparent)]
	Key(#[from] KeyError),
	/// Credentials or request target could not be assembled.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// A token could not be encoded, decoded, or verified.
	#[error(transparent)]
	Token(#[from] TokenError),
}

/// Key-load failures; the private key bytes do not form a usable Ed25519 key.
#[derive(Debug, ThisError)]
pub enum KeyError {
	/// The secret was empty or whitespace only.
	#[error("Private key secret is empty.")]
	Empty,
	/// The secret looked like PEM but is not a PKCS#8 Ed25519 private key.
	#[error("PEM private key could not be decoded.")]
	Pem {
		/// PKCS#8 decoder failure.
		#[source]
		source: ed25519_dalek::pkcs8::Error,
	},
	/// The secret is neither PEM nor valid standard base64.
	#[error("Private key secret is not valid base64.")]
	Base64(#[from] base64::DecodeError),
	/// Decoded raw key material has an unsupported length.
	#[error("Raw private key must be 32 or 64 bytes, got {len}.")]
	InvalidLength {
		/// Number of decoded bytes.
		len: usize,
	},
	/// The public half of a 64-byte keypair does not belong to its seed.
	#[error("Keypair public half does not match its private seed.")]
	PublicKeyMismatch,
	/// The parsed key could not be re-encoded as PKCS#8 DER for signing.
	#[error("Signing key could not be exported as PKCS#8 DER.")]
	Export {
		/// PKCS#8 encoder failure.
		#[source]
		source: ed25519_dalek::pkcs8::Error,
	},
}

/// Configuration failures raised while loading credentials or targets.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A required environment variable is not set.
	#[error("Environment variable `{var}` is not set.")]
	MissingEnv {
		/// Variable name.
		var: &'static str,
	},
	/// An environment variable holds non-UTF-8 data.
	#[error("Environment variable `{var}` is not valid UTF-8.")]
	InvalidEnv {
		/// Variable name.
		var: &'static str,
	},
	/// The key file could not be read.
	#[error("Failed to read key file {path}.")]
	KeyFileRead {
		/// Path that failed to load.
		path: String,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// The key file is not the expected JSON document.
	#[error("Key file is malformed at `{}`.", .source.path())]
	KeyFileParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// The key name failed validation.
	#[error("Key name is invalid.")]
	InvalidKeyName(#[from] KeyNameError),
	/// The target URL cannot be split into host and path.
	#[error("Target URL `{url}` has no host.")]
	InvalidTargetUrl {
		/// URL that failed to split.
		url: String,
	},
}

/// Token encoding and verification failures.
#[derive(Debug, ThisError)]
pub enum TokenError {
	/// Header and claims could not be serialized and signed.
	#[error("Token could not be encoded.")]
	Encode(#[source] jsonwebtoken::errors::Error),
	/// The token is not a decodable compact JWS carrying the expected claims.
	#[error("Token could not be decoded.")]
	Decode(#[source] jsonwebtoken::errors::Error),
	/// A header field every minted token carries is absent.
	#[error("Token header has no `{field}`.")]
	MissingHeader {
		/// Header field name.
		field: &'static str,
	},
	/// The header names an algorithm other than EdDSA.
	#[error("Token algorithm `{alg}` is not supported.")]
	UnsupportedAlgorithm {
		/// Algorithm label found in the header.
		alg: String,
	},
	/// The signature does not verify against the supplied public key.
	#[error("Token signature is invalid.")]
	InvalidSignature,
}
