// std
use std::{fs, path::PathBuf};
// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use color_eyre::Result;
use ed25519_dalek::{SECRET_KEY_LENGTH, SigningKey};
// self
use cdp_jwt::{
	builder::TokenBuilder, claims::RequestTarget, config::Credentials, error::ConfigError,
	verify::verify,
};

fn key_file_path(name: &str) -> PathBuf {
	std::env::temp_dir().join(format!("cdp-jwt-{}-{name}.json", std::process::id()))
}

#[test]
fn key_file_credentials_mint_verifiable_tokens() -> Result<()> {
	let key = SigningKey::from_bytes(&[9; SECRET_KEY_LENGTH]);
	let path = key_file_path("valid");
	let document = serde_json::json!({
		"name": "organizations/org-9/apiKeys/key-9",
		"privateKey": STANDARD.encode(key.to_keypair_bytes()),
	});

	fs::write(&path, serde_json::to_vec_pretty(&document)?)?;

	let credentials = Credentials::from_json_file(&path);

	fs::remove_file(&path)?;

	let credentials = credentials?;
	let builder = TokenBuilder::new(&credentials)?;
	let token = builder.build(&RequestTarget::new(
		"POST",
		"https://api.developer.coinbase.com",
		"/onramp/v1/token",
	))?;
	let verified = verify(token.expose(), &key.verifying_key())?;

	assert_eq!(verified.claims.sub, "organizations/org-9/apiKeys/key-9");
	assert_eq!(verified.claims.uri, "POST https://api.developer.coinbase.com/onramp/v1/token");

	Ok(())
}

#[test]
fn malformed_key_file_is_a_config_error() -> Result<()> {
	let path = key_file_path("malformed");

	fs::write(&path, "{\"privateKey\":\"c2VjcmV0\"}")?;

	let result = Credentials::from_json_file(&path);

	fs::remove_file(&path)?;

	assert!(matches!(result, Err(ConfigError::KeyFileParse { .. })));

	Ok(())
}
