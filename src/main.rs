use crate::cli::*;
use crate::print::{msg_err, print_devices};
use clap::Parser;
use oplus_init::logging;

mod cli;
mod commands;
mod print;
mod utils;

macro_rules! try_run {
    ($expr:expr) => {
        if let Err(e) = $expr {
            msg_err(&format!("{:#}", e));
        }
    };
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init();

    match cli.command {
        Commands::Devices => print_devices(),
        Commands::Plan(args) => try_run!(commands::plan(args.prjname, args.sku, args.output.json)),
        Commands::Simulate(args) => try_run!(commands::simulate(&args.props, args.output.json)),
        Commands::Apply(args) => try_run!(commands::apply(args.json)),
        Commands::Get(arg) => try_run!(commands::get(&arg.name)),
        Commands::Override(args) => {
            try_run!(commands::override_live(&args.name, &args.value, !args.no_create))
        }
    }

    Ok(())
}
