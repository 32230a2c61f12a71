/// Parse comma-separated tags, filtering empty ones
pub fn parse_tags(tags_str: &str) -> Vec<String> {
    tags_str
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Join tags into the single comma-separated value used by the `TAGS` attribute
pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}
