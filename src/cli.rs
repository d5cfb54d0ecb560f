use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::codec::Format;

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.usage(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.literal(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.placeholder(Style::new().fg_color(Some(AnsiColor::Yellow.into())))
		.valid(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.invalid(Style::new().fg_color(Some(AnsiColor::Red.into())))
}

#[derive(Parser, Debug)]
#[command(
	name = "incremental-profile",
	author,
	version,
	about = "Incremental behavioral embeddings and blended user profiles",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {apply}  {apply_args}                            {apply_desc}
  {bin} {apply}  {apply_file_args}  {apply_file_desc}
  {bin} {help}   {help_args}                                     {help_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "incremental-profile".bright_blue(),
		apply = "apply".yellow(),
		apply_args = "< request.json",
		apply_desc = "Apply one rating mutation".dimmed(),
		apply_file_args = "-i req.msgpack -f msgpack -o out.msgpack",
		apply_file_desc = "MessagePack request".dimmed(),
		help = "help".yellow(),
		help_args = "apply",
		help_desc = "Show help for apply".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output (also INCREMENTAL_PROFILE_VERBOSE=1)
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Apply a single insert/delete/update request
	Apply {
		/// Read the request from a file instead of stdin
		#[arg(short = 'i', long = "input", value_name = "PATH")]
		input: Option<PathBuf>,

		/// Write the response to a file instead of stdout
		#[arg(short = 'o', long = "output", value_name = "PATH")]
		output: Option<PathBuf>,

		/// Request/response encoding (default: json, or INCREMENTAL_PROFILE_FORMAT)
		#[arg(short = 'f', long = "format")]
		format: Option<Format>,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
