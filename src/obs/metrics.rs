// self
use crate::obs::{TokenOutcome, TokenStage};

/// Counter name, labeled by `stage` and `outcome`.
pub const TOKEN_COUNTER: &str = "cdp_jwt_token_total";

/// Bumps [`TOKEN_COUNTER`] for one stage outcome. A no-op unless the `metrics` feature is on
/// and a global recorder is installed.
pub fn record_token_outcome(stage: TokenStage, outcome: TokenOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(TOKEN_COUNTER, "stage" => stage.as_str(), "outcome" => outcome.as_str())
		.increment(1);
	#[cfg(not(feature = "metrics"))]
	let _ = (stage, outcome);
}
