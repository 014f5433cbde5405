use clap::Parser;

mod commands;
mod pipeline;

/// Convert gemtext read from standard input to Markdown on standard output.
#[derive(Parser)]
#[command(version, about)]
struct Args {}

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    Args::parse();
    commands::convert::run()
}
