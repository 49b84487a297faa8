use crate::app;
use crate::config::Config;
use crate::error::Error;
use crate::writer::Writer;
use eyre::Context;

#[derive(clap::Args, Clone)]
pub struct ShowCommand {
    /// Name of the stack to render
    #[arg(value_name = "STACK")]
    stack: String,
}

impl ShowCommand {
    /// Print the synthesized template of one stack to stdout
    pub fn run(&self, writer: &Writer) -> Result<(), Error> {
        let config = Config::from_current_dir()?;
        let app = app::bucket_app(&config)?;

        let stack = app.get(&self.stack).ok_or_else(|| {
            Error::new(
                "Stack not found",
                Some("Run `multistack list` to see available stacks"),
            )
        })?;

        let template = stack.template();

        if writer.is_structured() {
            writer.json(
                serde_json::to_value(&template).wrap_err("Failed to serialize the template")?,
            )?;
        } else {
            let json = serde_json::to_string_pretty(&template)
                .wrap_err("Failed to render the template")?;
            writer.text(&format!("{json}\n"))?;
        }

        Ok(())
    }
}
