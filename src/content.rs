mod style;

use std::{collections::HashMap, collections::HashSet, fmt, sync::LazyLock};

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

use crate::overlay::ModalKind;

pub use style::{Icon, Theme, ThemeStyle};

pub static GLOBAL_REGISTRY: LazyLock<Result<ContentRegistry, ContentError>> =
    LazyLock::new(|| {
        let registry = ContentRegistry::load();
        if let Err(e) = &registry {
            log::error!("content registry rejected: {e}");
        }
        registry
    });

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

/// Returns the embedded content, validated once per process.
pub fn registry() -> Result<&'static ContentRegistry, ContentError> {
    GLOBAL_REGISTRY.as_ref().map_err(Clone::clone)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Navigation,
    Ecosystem,
    Trajectory,
    Products,
    Pricing,
    Social,
}

impl Group {
    pub fn all() -> [Group; 6] {
        [
            Group::Navigation,
            Group::Ecosystem,
            Group::Trajectory,
            Group::Products,
            Group::Pricing,
            Group::Social,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Group::Navigation => "navigation",
            Group::Ecosystem => "ecosystem",
            Group::Trajectory => "trajectory",
            Group::Products => "products",
            Group::Pricing => "pricing",
            Group::Social => "social",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file {0} is missing")]
    MissingFile(String),
    #[error("couldn't parse {file}: {message}")]
    Parse { file: String, message: String },
    #[error("{0} has no items")]
    EmptyGroup(Group),
    #[error("{0} has an item without an id")]
    EmptyId(Group),
    #[error("{group} has more than one item with id {id}")]
    DuplicateId { group: Group, id: ItemId },
    #[error("{0} has both a link and nested items")]
    LinkAndNested(ItemId),
    #[error("{0} opens an overlay but also has a link or nested items")]
    OverlayConflict(ItemId),
    #[error("{0} has an empty nested item list")]
    EmptyNested(ItemId),
    #[error("{0} nests items more than one level deep")]
    NestedTooDeep(ItemId),
}

/// What activating an item does.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemAction {
    Static,
    Link(String),
    Nested(Vec<ContentItem>),
    Overlay(ModalKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub id: ItemId,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub kicker: Option<String>,
    pub icon: Icon,
    pub image: Option<String>,
    pub theme: Theme,
    pub tags: Vec<String>,
    pub quote: Option<String>,
    pub cta: Option<String>,
    pub highlight: bool,
    pub action: ItemAction,
}

impl ContentItem {
    pub fn link(&self) -> Option<&str> {
        match &self.action {
            ItemAction::Link(href) => Some(href),
            _ => None,
        }
    }

    pub fn nested(&self) -> Option<&[ContentItem]> {
        match &self.action {
            ItemAction::Nested(items) => Some(items),
            _ => None,
        }
    }

    pub fn overlay(&self) -> Option<ModalKind> {
        match self.action {
            ItemAction::Overlay(kind) => Some(kind),
            _ => None,
        }
    }

    /// External links get their own browsing context; in-page anchors don't.
    pub fn opens_new_context(&self) -> bool {
        self.link().is_some_and(|href| href.starts_with("http"))
    }
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct ContentRecord {
    id: String,
    title: String,
    subtitle: Option<String>,
    description: Option<String>,
    kicker: Option<String>,
    icon: Icon,
    image: Option<String>,
    #[serde(default)]
    theme: Theme,
    #[serde(default)]
    tags: Vec<String>,
    quote: Option<String>,
    cta: Option<String>,
    #[serde(default)]
    highlight: bool,
    link: Option<String>,
    items: Option<Vec<ContentRecord>>,
    opens: Option<ModalKind>,
}

impl ContentRecord {
    fn into_item(self, group: Group, depth: usize) -> Result<ContentItem, ContentError> {
        if self.id.trim().is_empty() {
            return Err(ContentError::EmptyId(group));
        }
        let id = ItemId(self.id);
        let action = match (self.link, self.items, self.opens) {
            (None, None, None) => ItemAction::Static,
            (Some(link), None, None) => ItemAction::Link(link),
            (None, Some(items), None) => {
                if depth > 0 {
                    return Err(ContentError::NestedTooDeep(id));
                }
                if items.is_empty() {
                    return Err(ContentError::EmptyNested(id));
                }
                ItemAction::Nested(validate_list(items, group, depth + 1)?)
            }
            (None, None, Some(kind)) => ItemAction::Overlay(kind),
            (Some(_), Some(_), None) => return Err(ContentError::LinkAndNested(id)),
            (_, _, Some(_)) => return Err(ContentError::OverlayConflict(id)),
        };
        Ok(ContentItem {
            id,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            kicker: self.kicker,
            icon: self.icon,
            image: self.image,
            theme: self.theme,
            tags: self.tags,
            quote: self.quote,
            cta: self.cta,
            highlight: self.highlight,
            action,
        })
    }
}

fn validate_list(
    records: Vec<ContentRecord>,
    group: Group,
    depth: usize,
) -> Result<Vec<ContentItem>, ContentError> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .map(|record| {
            let item = record.into_item(group, depth)?;
            if !seen.insert(item.id.clone()) {
                return Err(ContentError::DuplicateId {
                    group,
                    id: item.id,
                });
            }
            Ok(item)
        })
        .collect()
}

fn parse_group(group: Group, source: &str) -> Result<Vec<ContentItem>, ContentError> {
    let records: Vec<ContentRecord> =
        serde_json::from_str(source).map_err(|e| ContentError::Parse {
            file: group.file_name(),
            message: e.to_string(),
        })?;
    if records.is_empty() {
        return Err(ContentError::EmptyGroup(group));
    }
    validate_list(records, group, 0)
}

#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    groups: HashMap<Group, Vec<ContentItem>>,
}

impl ContentRegistry {
    /// Parses and validates every group from the embedded `content` folder.
    pub fn load() -> Result<Self, ContentError> {
        let files = Group::all()
            .into_iter()
            .map(|group| {
                let name = group.file_name();
                let file = Assets::get(&name).ok_or(ContentError::MissingFile(name.clone()))?;
                let text = String::from_utf8(file.data.into()).map_err(|e| {
                    ContentError::Parse {
                        file: name,
                        message: e.to_string(),
                    }
                })?;
                Ok((group, text))
            })
            .collect::<Result<Vec<_>, ContentError>>()?;
        Self::from_sources(files.iter().map(|(g, s)| (*g, s.as_str())))
    }

    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (Group, &'a str)>,
    ) -> Result<Self, ContentError> {
        let mut groups = HashMap::new();
        for (group, source) in sources {
            let items = parse_group(group, source)?;
            log::debug!("loaded {} {group} items", items.len());
            groups.insert(group, items);
        }
        Ok(Self { groups })
    }

    pub fn group(&self, group: Group) -> &[ContentItem] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn find(&self, group: Group, id: &ItemId) -> Option<&ContentItem> {
        self.group(group).iter().find(|item| &item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_one(group: Group, source: &str) -> Result<ContentRegistry, ContentError> {
        ContentRegistry::from_sources([(group, source)])
    }

    #[test]
    fn test_shipped_content_validates() {
        let registry = ContentRegistry::load().expect("embedded content should be valid");
        for group in Group::all() {
            assert!(!registry.group(group).is_empty(), "{group} should have items");
        }

        let web = registry
            .find(Group::Products, &ItemId::new("web-development"))
            .expect("web development product should exist");
        assert_eq!(web.nested().map(<[_]>::len), Some(2));
        assert!(web.link().is_none());
    }

    #[test]
    fn test_group_order_is_preserved() {
        let registry = load_one(
            Group::Trajectory,
            r#"[
                {"id": "b", "title": "B", "icon": "trophy"},
                {"id": "a", "title": "A", "icon": "users"}
            ]"#,
        )
        .unwrap();
        let ids = registry
            .group(Group::Trajectory)
            .iter()
            .map(|i| i.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(registry.group(Group::Social).is_empty());
    }

    #[test]
    fn test_empty_nested_list_is_rejected() {
        let res = load_one(
            Group::Products,
            r#"[{"id": "folder", "title": "Folder", "icon": "folder-open", "items": []}]"#,
        );
        assert_eq!(
            res.unwrap_err(),
            ContentError::EmptyNested(ItemId::new("folder"))
        );
    }

    #[test]
    fn test_link_and_nested_are_exclusive() {
        let res = load_one(
            Group::Products,
            r#"[{
                "id": "both", "title": "Both", "icon": "folder-open",
                "link": "https://example.com",
                "items": [{"id": "child", "title": "Child", "icon": "external-link"}]
            }]"#,
        );
        assert_eq!(res.unwrap_err(), ContentError::LinkAndNested(ItemId::new("both")));

        let res = load_one(
            Group::Navigation,
            r##"[{"id": "c", "title": "C", "icon": "mail", "opens": "contact", "link": "#c"}]"##,
        );
        assert_eq!(res.unwrap_err(), ContentError::OverlayConflict(ItemId::new("c")));
    }

    #[test]
    fn test_nesting_is_single_level() {
        let res = load_one(
            Group::Products,
            r#"[{
                "id": "outer", "title": "Outer", "icon": "folder-open",
                "items": [{
                    "id": "inner", "title": "Inner", "icon": "folder-open",
                    "items": [{"id": "leaf", "title": "Leaf", "icon": "external-link"}]
                }]
            }]"#,
        );
        assert_eq!(res.unwrap_err(), ContentError::NestedTooDeep(ItemId::new("inner")));
    }

    #[test]
    fn test_duplicate_and_empty_ids() {
        let res = load_one(
            Group::Social,
            r#"[
                {"id": "x", "title": "X", "icon": "twitter"},
                {"id": "x", "title": "X again", "icon": "twitter"}
            ]"#,
        );
        assert!(matches!(res, Err(ContentError::DuplicateId { group: Group::Social, .. })));

        let res = load_one(Group::Social, r#"[{"id": " ", "title": "X", "icon": "twitter"}]"#);
        assert_eq!(res.unwrap_err(), ContentError::EmptyId(Group::Social));
    }

    #[test]
    fn test_malformed_sources() {
        assert_eq!(
            load_one(Group::Pricing, "[]").unwrap_err(),
            ContentError::EmptyGroup(Group::Pricing)
        );
        assert!(matches!(
            load_one(Group::Pricing, r#"[{"id": "a", "title": "A", "icon": "not-an-icon"}]"#),
            Err(ContentError::Parse { .. })
        ));
        assert!(matches!(
            load_one(Group::Pricing, r#"[{"id": "a", "title": "A", "icon": "coffee", "price": 1}]"#),
            Err(ContentError::Parse { .. })
        ));
    }

    #[test]
    fn test_link_context() {
        let registry = load_one(
            Group::Navigation,
            r##"[
                {"id": "home", "title": "Home", "icon": "home", "link": "#home"},
                {"id": "gh", "title": "GitHub", "icon": "github", "link": "https://github.com"},
                {"id": "mail", "title": "Mail", "icon": "mail", "opens": "contact"}
            ]"##,
        )
        .unwrap();
        let items = registry.group(Group::Navigation);
        assert!(!items[0].opens_new_context());
        assert!(items[1].opens_new_context());
        assert_eq!(items[2].overlay(), Some(ModalKind::Contact));
    }
}
