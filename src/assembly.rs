use crate::app::App;
use chrono::{DateTime, Utc};
use eyre::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One synthesized stack as recorded in manifest.json
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Artifact {
    pub name: String,

    /// "aws://<account>/<region>" the stack is bound to
    pub environment: String,

    /// Template file name, relative to the out directory
    pub template_file: String,
}

/// Index of everything written by one synth run
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Manifest {
    pub version: String,
    pub synthesized_at: DateTime<Utc>,
    pub artifacts: Vec<Artifact>,
}

/// Write per-stack templates and manifest.json into the out directory
pub fn write(app: &App, out: &Path) -> eyre::Result<Manifest> {
    std::fs::create_dir_all(out)
        .wrap_err(format!("Failed to create out directory: {}", out.display()))?;

    let mut artifacts = Vec::new();

    for stack in app.stacks() {
        let template_file = format!("{}.template.json", stack.name);
        let json = serde_json::to_string_pretty(&stack.template())
            .wrap_err(format!("Failed to render template for {}", stack.name))?;

        std::fs::write(out.join(&template_file), json)
            .wrap_err(format!("Failed to write template for {}", stack.name))?;

        log::info!("Synthesized {} ({})", stack.name, stack.env.to_uri());

        artifacts.push(Artifact {
            name: stack.name.clone(),
            environment: stack.env.to_uri(),
            template_file,
        });
    }

    let manifest = Manifest {
        version: "1.0".to_string(),
        synthesized_at: Utc::now(),
        artifacts,
    };

    let json =
        serde_json::to_string_pretty(&manifest).wrap_err("Failed to render the manifest")?;
    std::fs::write(out.join("manifest.json"), json).wrap_err("Failed to write manifest.json")?;

    Ok(manifest)
}
