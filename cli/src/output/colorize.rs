use markport::models::BookmarkRecord;
use owo_colors::OwoColorize;

pub trait Colorize {
    fn to_colored(&self) -> String;
}

pub struct ColorizeBookmark<'a>(pub usize, pub &'a BookmarkRecord);

impl Colorize for ColorizeBookmark<'_> {
    fn to_colored(&self) -> String {
        let ColorizeBookmark(index, record) = self;
        let mut s = String::new();
        let id = index.to_string();
        s.push_str(&format!(
            "{}. {}\n",
            id.bright_blue(),
            record.title.as_deref().unwrap_or("").bold().green(),
        ));
        let padding = id.len() + 3;
        // padding for alignment
        s.push_str(&format!("{:>padding$} {}\n", ">".red(), record.url.yellow()));
        s.push_str(&format!("{:>padding$} {}\n", "@".red(), record.created_at));

        if !record.tags.is_empty() {
            let tags_str = record.tags.join(", ");
            s.push_str(&format!("{:>padding$} {}\n", "#".red(), tags_str.blue()));
        }
        s
    }
}
