//! Redacting wrappers that keep private keys and minted tokens out of logs.

// self
use crate::_prelude::*;

/// Private key secret as provisioned (PEM or base64); never printed.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct KeySecret(String);
impl KeySecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the raw secret. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl Debug for KeySecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("KeySecret").field(&"<redacted>").finish()
	}
}
impl Display for KeySecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Compact signed token (`header.payload.signature`); a bearer credential until it expires.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedToken(String);
impl SignedToken {
	pub(crate) fn new(value: String) -> Self {
		Self(value)
	}

	/// Returns the compact token string. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Consumes the wrapper, returning the compact token string.
	pub fn into_inner(self) -> String {
		self.0
	}
}
impl AsRef<str> for SignedToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for SignedToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SignedToken").field(&"<redacted>").finish()
	}
}
impl Display for SignedToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let secret = KeySecret::new("super-secret");

		assert_eq!(format!("{secret:?}"), "KeySecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
		assert_eq!(secret.expose(), "super-secret");
	}

	#[test]
	fn token_formatters_redact() {
		let token = SignedToken::new("a.b.c".into());

		assert_eq!(format!("{token:?}"), "SignedToken(\"<redacted>\")");
		assert_eq!(format!("{token}"), "<redacted>");
		assert_eq!(token.into_inner(), "a.b.c");
	}
}
