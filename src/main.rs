//! Prints one signed token for a single API request.
//!
//! Credentials come from `--key-file` (or `CDP_API_KEY_FILE`) when given, otherwise from
//! `CDP_API_KEY_NAME` and `CDP_API_KEY_SECRET`. The token is the only line written to stdout;
//! logs go to stderr and follow `RUST_LOG`.

// std
use std::{
	env::{self, VarError},
	io::{self, Write},
	path::PathBuf,
};
// crates.io
use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
// self
use cdp_jwt::{builder::TokenBuilder, claims::RequestTarget, config::Credentials};

#[derive(Debug, Parser)]
#[command(about, version)]
struct Cli {
	/// HTTP method of the request the token authorizes.
	#[arg(long, default_value = "POST")]
	method: String,
	/// Scheme and host of the API.
	#[arg(long, default_value = "https://api.developer.coinbase.com")]
	host: String,
	/// Request path.
	#[arg(long, default_value = "/onramp/v1/token")]
	path: String,
	/// JSON key file with `name` (or `id`) and `privateKey`.
	#[arg(long, value_name = "PATH", env = "CDP_API_KEY_FILE")]
	key_file: Option<PathBuf>,
}

fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(io::stderr)
		.init();

	run(Cli::parse(), env::var, &mut io::stdout().lock())
}

/// Loads credentials (key file first, then `lookup`) and writes one token line to `out`.
fn run<F, W>(cli: Cli, lookup: F, out: &mut W) -> Result<()>
where
	F: Fn(&'static str) -> Result<String, VarError>,
	W: Write,
{
	let credentials = match &cli.key_file {
		Some(path) => Credentials::from_json_file(path)?,
		None => Credentials::from_lookup(lookup)?,
	};
	let target = RequestTarget::new(cli.method, cli.host, cli.path);
	let token = TokenBuilder::new(&credentials)?.build(&target)?;

	writeln!(out, "{}", token.expose())?;
	out.flush()?;

	Ok(())
}
