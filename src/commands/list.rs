use crate::app;
use crate::config::Config;
use crate::error::Error;
use crate::writer::Writer;

#[derive(clap::Args, Clone)]
pub struct ListCommand {}

impl ListCommand {
    /// Print name, region and account of every declared stack
    pub fn run(&self, writer: &Writer) -> Result<(), Error> {
        let config = Config::from_current_dir()?;
        let app = app::bucket_app(&config)?;

        for stack in app.stacks() {
            if writer.is_structured() {
                writer.json(serde_json::json!({
                    "name": stack.name,
                    "region": stack.env.region,
                    "account": stack.env.account,
                }))?;
            } else {
                writer.text(&format!("{} ({})\n", stack.name, stack.env.to_uri()))?;
            }
        }

        Ok(())
    }
}
