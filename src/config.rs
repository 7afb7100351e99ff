//! Credential loading from the environment or a downloaded API key file.
//!
//! Secrets are always injected at runtime; nothing here carries a default key.

// std
use std::{fs, path::Path};
// self
use crate::{
	_prelude::*,
	auth::{KeyName, KeySecret},
	error::ConfigError,
};

/// Environment variable holding the key name.
pub const KEY_NAME_ENV: &str = "CDP_API_KEY_NAME";
/// Environment variable holding the private key secret.
pub const KEY_SECRET_ENV: &str = "CDP_API_KEY_SECRET";

/// Key name and private key secret of one API key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
	/// Key identifier placed in `sub` and `kid`.
	pub key_name: KeyName,
	/// Private key secret (PEM or base64).
	pub key_secret: KeySecret,
}
impl Credentials {
	/// Creates credentials from already validated parts.
	pub fn new(key_name: KeyName, key_secret: KeySecret) -> Self {
		Self { key_name, key_secret }
	}

	/// Reads [`KEY_NAME_ENV`] and [`KEY_SECRET_ENV`] from the process environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(std::env::var)
	}

	/// Resolves both variables through `lookup`, mapping missing and non-UTF-8 values.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&'static str) -> Result<String, std::env::VarError>,
	{
		let read = |var: &'static str| match lookup(var) {
			Ok(value) => Ok(value),
			Err(std::env::VarError::NotPresent) => Err(ConfigError::MissingEnv { var }),
			Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnv { var }),
		};
		let key_name = KeyName::new(read(KEY_NAME_ENV)?.trim())?;
		let key_secret = KeySecret::new(read(KEY_SECRET_ENV)?);

		Ok(Self { key_name, key_secret })
	}

	/// Parses a key file document: `{"name": "...", "privateKey": "..."}`.
	///
	/// Newer key files use `id` instead of `name`; both are accepted.
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		let de = &mut serde_json::Deserializer::from_str(json);
		let file: KeyFile = serde_path_to_error::deserialize(de)
			.map_err(|source| ConfigError::KeyFileParse { source })?;

		Ok(Self { key_name: file.name, key_secret: file.private_key })
	}

	/// Reads and parses a key file from disk.
	pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let json = fs::read_to_string(path).map_err(|source| ConfigError::KeyFileRead {
			path: path.display().to_string(),
			source,
		})?;

		Self::from_json_str(&json)
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeyFile {
	#[serde(alias = "id")]
	name: KeyName,
	private_key: KeySecret,
}

#[cfg(test)]
mod tests {
	// std
	use std::{collections::HashMap, env::VarError};
	// self
	use super::*;

	fn lookup_from(
		entries: &[(&'static str, &'static str)],
	) -> impl Fn(&'static str) -> Result<String, VarError> {
		let map = entries.iter().copied().collect::<HashMap<_, _>>();

		move |var| map.get(var).map(|value| value.to_string()).ok_or(VarError::NotPresent)
	}

	#[test]
	fn lookup_reads_both_variables() {
		let credentials = Credentials::from_lookup(lookup_from(&[
			(KEY_NAME_ENV, " key-1\n"),
			(KEY_SECRET_ENV, "c2VjcmV0"),
		]))
		.expect("Both variables are present.");

		assert_eq!(credentials.key_name.as_ref(), "key-1");
		assert_eq!(credentials.key_secret.expose(), "c2VjcmV0");
	}

	#[test]
	fn missing_variables_are_named() {
		let err = Credentials::from_lookup(lookup_from(&[(KEY_NAME_ENV, "key-1")]))
			.expect_err("Secret variable is missing.");

		assert!(matches!(err, ConfigError::MissingEnv { var: KEY_SECRET_ENV }));

		let err = Credentials::from_lookup(lookup_from(&[(KEY_NAME_ENV, "bad key")]))
			.expect_err("Key name contains whitespace.");

		assert!(matches!(err, ConfigError::InvalidKeyName(_)));
	}

	#[test]
	fn key_file_accepts_name_or_id() {
		let legacy = Credentials::from_json_str(
			"{\"name\":\"organizations/org-1/apiKeys/key-1\",\"privateKey\":\"c2VjcmV0\"}",
		)
		.expect("Legacy key file should parse.");
		let current = Credentials::from_json_str("{\"id\":\"key-2\",\"privateKey\":\"c2VjcmV0\"}")
			.expect("Current key file should parse.");

		assert_eq!(legacy.key_name.as_ref(), "organizations/org-1/apiKeys/key-1");
		assert_eq!(current.key_name.as_ref(), "key-2");
		assert_eq!(current.key_secret.expose(), "c2VjcmV0");
	}

	#[test]
	fn key_file_errors_carry_field_path() {
		let err = Credentials::from_json_str("{\"name\":\"key-1\",\"privateKey\":7}")
			.expect_err("Numeric private key should be rejected.");

		match err {
			ConfigError::KeyFileParse { source } =>
				assert_eq!(source.path().to_string(), "privateKey"),
			other => panic!("Unexpected error: {other:?}"),
		}
	}

	#[test]
	fn missing_key_file_reports_path() {
		let err = Credentials::from_json_file("/nonexistent/cdp_api_key.json")
			.expect_err("Missing file should fail.");

		assert!(matches!(
			err,
			ConfigError::KeyFileRead { ref path, .. } if path == "/nonexistent/cdp_api_key.json"
		));
	}
}
