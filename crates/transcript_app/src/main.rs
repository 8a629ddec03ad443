use clap::Parser;
use transcript_app::platform::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    platform::run_app(cli)
}
