//! Validated API key name used as both the `sub` claim and the `kid` header.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

const KEY_NAME_MAX_LEN: usize = 256;

/// Error returned when key name validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum KeyNameError {
	/// The key name was empty.
	#[error("Key name cannot be empty.")]
	Empty,
	/// The key name contains whitespace characters.
	#[error("Key name contains whitespace.")]
	ContainsWhitespace,
	/// The key name exceeded the allowed length.
	#[error("Key name exceeds {max} bytes.")]
	TooLong {
		/// Maximum permitted byte count.
		max: usize,
	},
}

/// Identifier of the signing API key, e.g.
/// `organizations/{org_id}/apiKeys/{key_id}` or a bare key UUID.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyName(String);
impl KeyName {
	/// Creates a new key name after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, KeyNameError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}
}
impl Deref for KeyName {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for KeyName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for KeyName {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<KeyName> for String {
	fn from(value: KeyName) -> Self {
		value.0
	}
}
impl TryFrom<String> for KeyName {
	type Error = KeyNameError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(value))
	}
}
impl Debug for KeyName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "KeyName({})", self.0)
	}
}
impl Display for KeyName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for KeyName {
	type Err = KeyNameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

fn validate_view(view: &str) -> Result<(), KeyNameError> {
	if view.is_empty() {
		return Err(KeyNameError::Empty);
	}
	if view.chars().any(char::is_whitespace) {
		return Err(KeyNameError::ContainsWhitespace);
	}
	if view.len() > KEY_NAME_MAX_LEN {
		return Err(KeyNameError::TooLong { max: KEY_NAME_MAX_LEN });
	}

	Ok(())
}
