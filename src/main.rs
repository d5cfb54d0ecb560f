//! incremental-profile - behavioral embedding updates from the command line
//!
//! Reads one rating mutation plus the user's prior aggregate state, writes
//! the new state and the blended profile embedding.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use incremental_profile::cli::{Cli, Command};
use incremental_profile::codec::Diagnostic;
use incremental_profile::ui::{self, Log};
use incremental_profile::{commands, config};

fn main() {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose || config::verbose_from_env());

	if let Err(e) = run(cli.command) {
		eprintln!("{}", Diagnostic::new(format!("{:#}", e)).to_json());
		std::process::exit(1);
	}
}

fn run(command: Command) -> Result<()> {
	match command {
		Command::Apply { input, output, format } => {
			if let Some(format) = format {
				config::set_format(format);
			}
			commands::apply::run(input.as_deref(), output.as_deref(), config::format())
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help()?;
				} else {
					ui::warn(&format!("Unknown subcommand: {}", sub));
					cmd.print_help()?;
				}
			} else {
				cmd.print_help()?;
			}
			Ok(())
		}
	}
}
