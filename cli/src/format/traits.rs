use markport::error::Result;

pub trait BookmarkFormat {
    fn render(&self) -> Result<String>;
}
