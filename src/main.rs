//! context-sidebar - replay and inspect sidebar sessions

mod cli;

use anyhow::Result;
use clap::Parser;

use cli::{CliArgs, Command, Script};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    context_sidebar::tracing::init();

    let config = args.load_config();
    let output = match &args.command {
        Command::Dump => cli::to_json(&cli::dump(config), args.pretty)?,
        Command::Run { script } => {
            let script = Script::load(script)?;
            cli::to_json(&cli::run_script(config, script), args.pretty)?
        }
        Command::InitConfig => {
            let path = cli::init_config(args.config.as_deref())?;
            format!("Wrote {}", path.display())
        }
    };

    println!("{}", output);
    Ok(())
}
