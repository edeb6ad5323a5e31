use regex::Regex;
use tracing::debug;

pub const DEFAULT_MODSEC_TAGS: &str = "id,uri,msg";

/// Only lines carrying this marker are ModSecurity alerts
const MODSEC_MARKER: &str = "ModSecurity";

/// Pulls `[tag "value"]` pairs out of ModSecurity alerts in an Apache error log
#[derive(Debug, Clone)]
pub struct ModSecParser {
    patterns: Vec<Regex>,
}

impl ModSecParser {
    /// Build a parser from a comma separated tag list, e.g. `id,uri,msg`
    pub fn new(tags: &str) -> Result<Self, regex::Error> {
        let patterns = tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(|tag| Regex::new(&format!(r#"\[{} "(.*?)"\]"#, regex::escape(tag))))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ModSecParser { patterns })
    }

    /// Values of the configured tags found in `line`, in tag order. `None`
    /// when the line is not a ModSecurity alert.
    pub fn parse_line(&self, line: &str) -> Option<Vec<String>> {
        if !line.contains(MODSEC_MARKER) {
            return None;
        }

        let values = self
            .patterns
            .iter()
            .filter_map(|pattern| pattern.captures(line))
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect();

        Some(values)
    }

    /// Render every alert as its tag values, each followed by a space
    pub fn process<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        let output: Vec<String> = lines
            .iter()
            .filter_map(|line| self.parse_line(line.as_ref()))
            .map(|values| values.iter().map(|value| format!("{} ", value)).collect::<String>())
            .collect();

        debug!(lines = lines.len(), alerts = output.len(), "parsed modsecurity alerts");
        output
    }
}
