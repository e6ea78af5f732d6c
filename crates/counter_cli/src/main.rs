use clap::Parser;
use counter_cli::Cli;
use counter_cli::CliError;
use counter_cli::Commands;
use counter_core::OverflowMode;

fn main() {
	let cli = Cli::parse();

	let output = match cli.command {
		Commands::Derive { wallet, json } => run_derive(&wallet, json),
		Commands::Simulate {
			increments,
			wallet,
			reject_overflow,
			json,
		} => run_simulate(&wallet, increments, reject_overflow, json),
	};

	match output {
		Ok(output) => println!("{output}"),
		Err(e) => {
			eprintln!("Error: {e}");
			std::process::exit(1);
		}
	}
}

fn run_derive(wallet: &str, json: bool) -> Result<String, CliError> {
	let report = counter_cli::derive(wallet)?;
	counter_cli::render_derive(&report, json)
}

fn run_simulate(wallet: &str, increments: u32, reject_overflow: bool, json: bool) -> Result<String, CliError> {
	let overflow = if reject_overflow {
		OverflowMode::Reject
	} else {
		OverflowMode::Wrap
	};

	let report = counter_cli::simulate(wallet, increments, overflow)?;
	counter_cli::render_simulate(&report, json)
}
