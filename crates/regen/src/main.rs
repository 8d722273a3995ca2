use anyhow::Context;
use clap::Parser;
use regen::cli::Cli;
use regen::logging::init_tracing;
use regen::output::Output;
use regen::request::generate;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let mut output = Output::new(use_color, cli.json);

    let outcome = generate(cli.command, cli.anchor)?;
    output
        .print_outcome(&outcome)
        .context("failed to write output")?;

    std::process::exit(if outcome.result.is_ok() { 0 } else { 1 });
}
