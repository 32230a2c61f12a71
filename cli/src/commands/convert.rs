use super::{AppContext, MarkportCommand};
use markport::convert;
use markport::error::Result;

#[derive(Debug, Clone)]
pub struct ConvertCommand;

impl MarkportCommand for ConvertCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let summary = convert::convert(ctx.config)?;
        eprintln!(
            "✓ Converted {} bookmark(s) into collection '{}'",
            summary.records, summary.collection
        );
        eprintln!("  intermediate: {}", summary.intermediate.display());
        eprintln!("  raindrop:     {}", summary.output.display());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RenderCommand;

impl MarkportCommand for RenderCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let count = convert::render_intermediate(
            &ctx.config.intermediate,
            &ctx.config.output,
            &ctx.config.collection,
        )?;
        eprintln!(
            "✓ Rendered {} bookmark(s) from {} to {}",
            count,
            ctx.config.intermediate.display(),
            ctx.config.output.display()
        );
        Ok(())
    }
}
