//! Apply command - one request in, one response out

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::Instant;

use crate::codec::{self, Format};
use crate::dispatch;
use crate::ui;

pub fn run(input: Option<&Path>, output: Option<&Path>, format: Format) -> Result<()> {
	let start = Instant::now();

	let bytes = read_input(input)?;
	ui::debug(&format!("Read {} bytes of {:?}", bytes.len(), format));

	let raw = codec::decode_request(&bytes, format)?;
	let response = dispatch::apply_raw(raw)?;
	let encoded = codec::encode_response(&response, format)?;

	write_output(output, &encoded)?;
	ui::debug(&format!("Applied in {}µs", start.elapsed().as_micros()));

	Ok(())
}

fn read_input(input: Option<&Path>) -> Result<Vec<u8>> {
	match input {
		Some(path) => fs::read(path).with_context(|| format!("Failed to read {}", path.display())),
		None => {
			let mut bytes = Vec::new();
			io::stdin()
				.lock()
				.read_to_end(&mut bytes)
				.context("Failed to read request from stdin")?;
			Ok(bytes)
		}
	}
}

fn write_output(output: Option<&Path>, bytes: &[u8]) -> Result<()> {
	match output {
		Some(path) => fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display())),
		None => {
			let mut stdout = io::stdout().lock();
			stdout.write_all(bytes).context("Failed to write response to stdout")?;
			stdout.flush().context("Failed to flush stdout")
		}
	}
}
