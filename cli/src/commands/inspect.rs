use super::{AppContext, MarkportCommand};
use crate::format::OutputFormat;
use markport::error::Result;
use markport::import_export;

#[derive(Debug, Clone)]
pub struct InspectCommand {
    pub format: OutputFormat,
}

impl MarkportCommand for InspectCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let bookmarks =
            import_export::parse_bookmarks_file(&ctx.config.input, &ctx.config.import_options())?;
        let records = bookmarks.into_records();
        print!("{}", self.format.render(&records, ctx.no_color)?);
        eprintln!("{} unique bookmark(s)", records.len());
        Ok(())
    }
}
