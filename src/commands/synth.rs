use crate::app;
use crate::config::Config;
use crate::error::Error;
use crate::writer::Writer;
use eyre::Context;

#[derive(clap::Args, Clone)]
pub struct SynthCommand {
    /// Output directory for templates and the manifest
    #[arg(short, long, value_name = "PATH")]
    out: Option<String>,
}

impl SynthCommand {
    /// Synthesize every stack and the assembly manifest
    pub fn run(&self, writer: &Writer) -> Result<(), Error> {
        let config = Config::from_current_dir()?;
        let app = app::bucket_app(&config)?;
        let out = config.out_dir(self.out.as_deref());

        let manifest = app.synth(&out).wrap_err("Failed to synthesize the app")?;

        if writer.is_structured() {
            writer.json(
                serde_json::to_value(&manifest).wrap_err("Failed to serialize the manifest")?,
            )?;
        } else {
            writer.text(&format!(
                "Synthesized {} stacks to {}\n",
                manifest.artifacts.len(),
                out.display()
            ))?;
        }

        Ok(())
    }
}
