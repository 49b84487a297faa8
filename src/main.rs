use clap::{ArgAction, Parser};
use multistack::commands::Commands;
use multistack::logger::Logger;
use multistack::writer::Writer;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    arg_required_else_help = true,
    name = "multistack",
    version,
    about = "CLI tool for declaring regional bucket stacks and synthesizing their templates",
    long_about = "Declares two bucket stacks, one per AWS region, and synthesizes \
CloudFormation templates for an external deployment tool to consume."
)]
struct Cli {
    /// Output structured JSON instead of plain text
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    structured: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    Logger::init();

    let cli = Cli::parse();
    let writer = Writer::new(cli.structured);

    // Match all commands here, in one place
    let result = match cli.command {
        Commands::Synth(cmd) => cmd.run(&writer),
        Commands::List(cmd) => cmd.run(&writer),
        Commands::Show(cmd) => cmd.run(&writer),
    };

    if let Err(error) = result {
        eprintln!("\n{}\n{error}", console::style("Error").red().bold());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
