use super::{AppContext, MarkportCommand};
use markport::error::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConfigCommand {
    pub save: Option<PathBuf>,
}

impl MarkportCommand for ConfigCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        match &self.save {
            Some(path) => {
                ctx.config.save_to_path(path)?;
                eprintln!("Saved configuration to {}", path.display());
            }
            None => print!("{}", serde_yaml::to_string(ctx.config)?),
        }
        Ok(())
    }
}
