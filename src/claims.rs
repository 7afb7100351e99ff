//! Request target description and the claims payload bound to it.

// crates.io
use url::Position;
// self
use crate::{_prelude::*, auth::KeyName, error::ConfigError};

/// Issuer claim expected by the API.
pub const ISSUER: &str = "cdp";
/// Validity window between `nbf` and `exp`.
pub const TOKEN_TTL: Duration = Duration::seconds(1200);

/// The single endpoint a token authorizes.
///
/// The parts are joined verbatim into the `uri` claim; nothing is validated or normalized.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RequestTarget {
	/// HTTP method, e.g. `POST`.
	pub method: String,
	/// Scheme and authority, e.g. `https://api.developer.coinbase.com`.
	pub host: String,
	/// Request path (and query, when present), e.g. `/onramp/v1/token`.
	pub path: String,
}
impl RequestTarget {
	/// Creates a target from its three parts.
	pub fn new(
		method: impl Into<String>,
		host: impl Into<String>,
		path: impl Into<String>,
	) -> Self {
		Self { method: method.into(), host: host.into(), path: path.into() }
	}

	/// Splits an absolute URL into `scheme://host[:port]` and path (plus query).
	///
	/// Userinfo and fragment are dropped.
	pub fn from_url(method: impl Into<String>, url: &Url) -> Result<Self, ConfigError> {
		if url.host_str().is_none() {
			return Err(ConfigError::InvalidTargetUrl { url: url.to_string() });
		}

		let host =
			format!("{}://{}", url.scheme(), &url[Position::BeforeHost..Position::AfterPort]);
		let path = url[Position::BeforePath..Position::AfterQuery].to_owned();

		Ok(Self { method: method.into(), host, path })
	}

	/// Renders the `uri` claim: `"<METHOD> <HOST><PATH>"`.
	pub fn uri(&self) -> String {
		format!("{} {}{}", self.method, self.host, self.path)
	}
}
impl Display for RequestTarget {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{} {}{}", self.method, self.host, self.path)
	}
}

/// JWT payload authorizing one request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
	/// Key name of the signer.
	pub sub: String,
	/// Issuing party, always [`ISSUER`] for minted tokens.
	pub iss: String,
	/// Not-before instant in unix seconds.
	pub nbf: i64,
	/// Expiry instant in unix seconds.
	pub exp: i64,
	/// Rendered [`RequestTarget::uri`].
	pub uri: String,
}
impl TokenClaims {
	/// Builds claims for `target`, valid from `issued_at` for [`TOKEN_TTL`].
	pub fn new(key_name: &KeyName, target: &RequestTarget, issued_at: OffsetDateTime) -> Self {
		let nbf = issued_at.unix_timestamp();

		Self {
			sub: key_name.to_string(),
			iss: ISSUER.into(),
			nbf,
			exp: nbf + TOKEN_TTL.whole_seconds(),
			uri: target.uri(),
		}
	}

	/// Returns `true` if `instant` falls inside `[nbf, exp)`.
	pub fn is_valid_at(&self, instant: OffsetDateTime) -> bool {
		let now = instant.unix_timestamp();

		self.nbf <= now && now < self.exp
	}
}
