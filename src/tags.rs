use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A selectable piece of an error-log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Date,
    Error,
    ErrorLevel,
    ErrorMessage,
    ErrorValue,
    File,
    FileName,
    FileLine,
}

impl Tag {
    pub const ALL: [Tag; 8] = [
        Tag::Date,
        Tag::Error,
        Tag::ErrorLevel,
        Tag::ErrorMessage,
        Tag::ErrorValue,
        Tag::File,
        Tag::FileName,
        Tag::FileLine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Date => "date",
            Tag::Error => "error",
            Tag::ErrorLevel => "error-level",
            Tag::ErrorMessage => "error-message",
            Tag::ErrorValue => "error-value",
            Tag::File => "file",
            Tag::FileName => "file-name",
            Tag::FileLine => "file-line",
        }
    }

    /// The catch-all tag gating this one, if any
    pub fn parent(&self) -> Option<Tag> {
        match self {
            Tag::ErrorLevel | Tag::ErrorMessage | Tag::ErrorValue => Some(Tag::Error),
            Tag::FileName | Tag::FileLine => Some(Tag::File),
            Tag::Date | Tag::Error | Tag::File => None,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("Unknown tag: {}", s))
    }
}

/// A tag is selected if it is explicitly included or not explicitly excluded.
/// Inclusion wins when a tag appears in both sets.
pub fn should_include(tag: Tag, include: &HashSet<Tag>, exclude: &HashSet<Tag>) -> bool {
    include.contains(&tag) || !exclude.contains(&tag)
}

/// Parse a comma separated tag list. Unknown names are returned separately so
/// the caller can warn about them.
pub fn parse_tag_list(list: &str) -> (HashSet<Tag>, Vec<String>) {
    let mut tags = HashSet::new();
    let mut unknown = Vec::new();

    for item in list.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        match item.parse::<Tag>() {
            Ok(tag) => {
                tags.insert(tag);
            }
            Err(_) => unknown.push(item.to_string()),
        }
    }

    (tags, unknown)
}

/// Include/exclude configuration resolved into a field selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelector {
    include: HashSet<Tag>,
    exclude: HashSet<Tag>,
}

impl TagSelector {
    pub fn new(include: HashSet<Tag>, exclude: HashSet<Tag>) -> Self {
        TagSelector { include, exclude }
    }

    /// Selects every tag
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a selector from the raw comma separated option values.
    ///
    /// An include list given without any exclude list acts as a whitelist:
    /// everything that is not named, not the parent of a named tag and not
    /// the child of a named tag is excluded. Returns the unknown tag names
    /// alongside the selector.
    pub fn from_lists(include: &str, exclude: &str) -> (Self, Vec<String>) {
        let (include, mut unknown) = parse_tag_list(include);
        let (mut exclude, unknown_excluded) = parse_tag_list(exclude);
        unknown.extend(unknown_excluded);

        if !include.is_empty() && exclude.is_empty() {
            let parents: HashSet<Tag> = include.iter().filter_map(Tag::parent).collect();
            exclude = Tag::ALL
                .iter()
                .copied()
                .filter(|tag| {
                    !include.contains(tag)
                        && !parents.contains(tag)
                        && !tag.parent().is_some_and(|parent| include.contains(&parent))
                })
                .collect();
        }

        (TagSelector::new(include, exclude), unknown)
    }

    pub fn includes(&self, tag: Tag) -> bool {
        should_include(tag, &self.include, &self.exclude)
    }

    /// A sub-field is computed only when both its parent and itself pass
    pub fn includes_field(&self, tag: Tag) -> bool {
        tag.parent().map_or(true, |parent| self.includes(parent)) && self.includes(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tags: &[Tag]) -> HashSet<Tag> {
        tags.iter().copied().collect()
    }

    #[test]
    fn test_tag_names_round_trip() {
        for tag in Tag::ALL {
            assert_eq!(tag.as_str().parse::<Tag>().unwrap(), tag);
        }
        assert!("errors".parse::<Tag>().is_err());
    }

    #[test]
    fn test_empty_sets_include_everything() {
        let empty = HashSet::new();
        for tag in Tag::ALL {
            assert!(should_include(tag, &empty, &empty));
        }
    }

    #[test]
    fn test_exclude_removes_tag() {
        let exclude = set(&[Tag::Date]);
        assert!(!should_include(Tag::Date, &HashSet::new(), &exclude));
        assert!(should_include(Tag::File, &HashSet::new(), &exclude));
    }

    #[test]
    fn test_include_beats_exclude() {
        for tag in Tag::ALL {
            let both = set(&[tag]);
            assert!(should_include(tag, &both, &both));
        }
    }

    #[test]
    fn test_parse_tag_list() {
        let (tags, unknown) = parse_tag_list(" date, file-line,,bogus ");
        assert_eq!(tags, set(&[Tag::Date, Tag::FileLine]));
        assert_eq!(unknown, vec!["bogus".to_string()]);

        let (tags, unknown) = parse_tag_list("");
        assert!(tags.is_empty());
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_parent_gates_sub_field() {
        let selector = TagSelector::new(HashSet::new(), set(&[Tag::Error]));
        assert!(selector.includes(Tag::ErrorLevel));
        assert!(!selector.includes_field(Tag::ErrorLevel));
        assert!(selector.includes_field(Tag::FileName));
    }

    #[test]
    fn test_include_only_acts_as_whitelist() {
        let (selector, unknown) = TagSelector::from_lists("file-name", "");
        assert!(unknown.is_empty());
        assert!(selector.includes_field(Tag::FileName));
        assert!(selector.includes(Tag::File));
        assert!(!selector.includes(Tag::Date));
        assert!(!selector.includes(Tag::Error));
        assert!(!selector.includes_field(Tag::FileLine));
    }

    #[test]
    fn test_whitelisted_parent_keeps_children() {
        let (selector, _) = TagSelector::from_lists("error", "");
        assert!(selector.includes_field(Tag::ErrorLevel));
        assert!(selector.includes_field(Tag::ErrorMessage));
        assert!(selector.includes_field(Tag::ErrorValue));
        assert!(!selector.includes(Tag::File));
        assert!(!selector.includes(Tag::Date));
    }

    #[test]
    fn test_explicit_exclude_keeps_default_inclusion() {
        let (selector, _) = TagSelector::from_lists("date", "date,file");
        assert!(selector.includes(Tag::Date));
        assert!(!selector.includes(Tag::File));
        assert!(selector.includes(Tag::Error));
    }
}
