//! Optional observability helpers for key loading and token minting.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `cdp_jwt.token` with `stage` and `outcome`
//!   fields, plus `debug` events carrying the key name and validity window. Secrets, tokens, and
//!   nonces are never recorded.
//! - Enable `metrics` to increment the `cdp_jwt_token_total` counter for every
//!   attempt/success/failure, labeled by `stage` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Stages observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenStage {
	/// Parsing the private key secret.
	LoadKey,
	/// Assembling and signing a token.
	Mint,
	/// Checking a token against a public key.
	Verify,
}
impl TokenStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenStage::LoadKey => "load_key",
			TokenStage::Mint => "mint",
			TokenStage::Verify => "verify",
		}
	}
}
impl Display for TokenStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenOutcome {
	/// Entry to a stage.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl TokenOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenOutcome::Attempt => "attempt",
			TokenOutcome::Success => "success",
			TokenOutcome::Failure => "failure",
		}
	}
}
impl Display for TokenOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `op` inside a stage span, recording attempt and outcome.
pub fn observe<T, E, F>(stage: TokenStage, op: F) -> Result<T, E>
where
	F: FnOnce() -> Result<T, E>,
{
	let span = StageSpan::enter(stage);

	record_token_outcome(stage, TokenOutcome::Attempt);

	let result = op();
	let outcome = if result.is_ok() { TokenOutcome::Success } else { TokenOutcome::Failure };

	span.record_outcome(outcome);
	record_token_outcome(stage, outcome);

	result
}
