pub mod list;
pub mod show;
pub mod synth;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Synthesize all stack templates into the output directory
    Synth(synth::SynthCommand),

    /// List declared stacks
    List(list::ListCommand),

    /// Print a single stack's template
    Show(show::ShowCommand),
}
