use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "oplus-init",
    version,
    about = "Device identity overrides for OPLUS vendor init",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List known project and SKU codes")]
    Devices,
    #[command(about = "Show the overrides for a project and SKU")]
    Plan(PlanArgs),
    #[command(about = "Run detection against a build.prop snapshot")]
    Simulate(SimulateArgs),
    #[command(about = "Run detection against the live property area")]
    Apply(OutputArgs),
    #[command(about = "Read a live property")]
    Get(GetArgs),
    #[command(about = "Override a live property, read-only or not")]
    Override(OverrideArgs),
}

#[derive(Args)]
pub struct OutputArgs {
    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,
}

#[derive(Args)]
pub struct PlanArgs {
    #[arg(long, default_value_t = 0, help = "Value of ro.boot.prjname")]
    pub prjname: i64,
    #[arg(long, default_value_t = 0, help = "Value of ro.boot.product.hardware.sku")]
    pub sku: i64,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct SimulateArgs {
    #[arg(long, help = "Path to a build.prop style file")]
    pub props: PathBuf,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct GetArgs {
    #[arg(help = "Property name")]
    pub name: String,
}

#[derive(Args)]
pub struct OverrideArgs {
    #[arg(help = "Property name")]
    pub name: String,
    #[arg(help = "New value")]
    pub value: String,
    #[arg(long, help = "Leave the property alone if it doesn't exist")]
    pub no_create: bool,
}
