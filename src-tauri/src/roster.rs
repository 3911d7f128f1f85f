/// Split roster text into entries: one per line, trimmed, blank lines
/// dropped, input order kept.
pub fn parse_roster(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
