use markport::config::Config;
use markport::error::Result;

pub struct AppContext<'a> {
    pub config: &'a Config,
    pub no_color: bool,
}

pub mod config;
pub mod convert;
pub mod inspect;

pub trait MarkportCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()>;
}

/// Enum-based dispatch for commands (avoids Box<dyn MarkportCommand>)
pub enum CommandEnum {
    Convert(convert::ConvertCommand),
    Render(convert::RenderCommand),
    Inspect(inspect::InspectCommand),
    Config(config::ConfigCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            Self::Convert(cmd) => cmd.execute(ctx),
            Self::Render(cmd) => cmd.execute(ctx),
            Self::Inspect(cmd) => cmd.execute(ctx),
            Self::Config(cmd) => cmd.execute(ctx),
        }
    }
}
