// self
use crate::{
	_prelude::*,
	obs::{TokenOutcome, TokenStage},
};

/// Entered `cdp_jwt.token` span covering one key-load, mint, or verify step.
///
/// The span is exited when this guard drops. Without the `tracing` feature it only remembers
/// the stage.
pub struct StageSpan {
	stage: TokenStage,
	#[cfg(feature = "tracing")]
	span: tracing::span::EnteredSpan,
}
impl StageSpan {
	/// Opens and enters the span for `stage`; `outcome` stays empty until recorded.
	pub fn enter(stage: TokenStage) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"cdp_jwt.token",
				stage = stage.as_str(),
				outcome = tracing::field::Empty
			)
			.entered();

			Self { stage, span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			Self { stage }
		}
	}

	/// Stage this span covers.
	pub fn stage(&self) -> TokenStage {
		self.stage
	}

	/// Fills the span's `outcome` field.
	pub fn record_outcome(&self, outcome: TokenOutcome) {
		#[cfg(feature = "tracing")]
		self.span.record("outcome", outcome.as_str());
		#[cfg(not(feature = "tracing"))]
		let _ = outcome;
	}
}
impl Debug for StageSpan {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "StageSpan({})", self.stage)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn stage_span_names_its_stage() {
		let span = StageSpan::enter(TokenStage::Verify);

		span.record_outcome(TokenOutcome::Success);

		assert_eq!(span.stage(), TokenStage::Verify);
		assert_eq!(format!("{span:?}"), "StageSpan(verify)");
	}
}
