use crate::{
    format::{
        json::JsonBookmarks, plain::PlainBookmark, toml::TomlBookmarks, traits::BookmarkFormat,
        yaml::YamlBookmarks,
    },
    output::colorize::{Colorize, ColorizeBookmark},
};
use markport::error::Result;
use markport::models::BookmarkRecord;

pub mod json;
pub mod plain;
pub mod toml;
pub mod traits;
pub mod yaml;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Toml,
    Plain,
    Colored,
}

impl OutputFormat {
    pub fn from_string(format: &str) -> Self {
        match format {
            "json" => OutputFormat::Json,
            "yaml" | "yml" => OutputFormat::Yaml,
            "toml" => OutputFormat::Toml,
            "plain" => OutputFormat::Plain,
            _ => OutputFormat::Colored,
        }
    }

    pub fn render(self, records: &[BookmarkRecord], no_color: bool) -> Result<String> {
        match self {
            OutputFormat::Json => JsonBookmarks(records).render(),
            OutputFormat::Yaml => YamlBookmarks(records).render(),
            OutputFormat::Toml => TomlBookmarks(records).render(),
            OutputFormat::Plain | OutputFormat::Colored => {
                let mut out = String::new();
                for (i, record) in records.iter().enumerate() {
                    if no_color || self == OutputFormat::Plain {
                        out.push_str(&PlainBookmark(i + 1, record).render()?);
                    } else {
                        out.push_str(&ColorizeBookmark(i + 1, record).to_colored());
                    }
                }
                Ok(out)
            }
        }
    }
}
