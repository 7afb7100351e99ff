//! Mint short-lived, EdDSA-signed JWTs that authorize exactly one Coinbase Developer Platform
//! API request.
//!
//! A token binds a key name (`sub`/`kid`), a fixed issuer, a 20-minute validity window, and the
//! `"<METHOD> <HOST><PATH>"` of the target endpoint. Every token carries a fresh random nonce in
//! its header, so two tokens minted in the same second never collide.
//!
//! ```no_run
//! use cdp_jwt::{builder::TokenBuilder, claims::RequestTarget, config::Credentials};
//!
//! # fn main() -> cdp_jwt::error::Result<()> {
//! let credentials = Credentials::from_env()?;
//! let builder = TokenBuilder::new(&credentials)?;
//! let target =
//! 	RequestTarget::new("POST", "https://api.developer.coinbase.com", "/onramp/v1/token");
//!
//! println!("{}", builder.build(&target)?.expose());
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod builder;
pub mod claims;
pub mod config;
pub mod error;
pub mod header;
pub mod key;
pub mod obs;
pub mod verify;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use builder::build_token;
pub use ed25519_dalek;
pub use jsonwebtoken;
pub use url;
#[cfg(any(test, feature = "cli"))] use color_eyre as _;
#[cfg(feature = "cli")] use {clap as _, tracing_subscriber as _};
