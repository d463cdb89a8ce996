use crate::domain::model::{Identifier, RawData};
use crate::entities::builders;

/// Node of the pattern category tree. Parents are embedded in the payload,
/// so walking up never needs another request.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: Option<Identifier>,
    data: RawData,
}

impl_entity!(Category);

impl Category {
    pub fn id(&self) -> Option<u64> {
        self.data.u64("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.data.str("name")
    }

    pub fn permalink(&self) -> Option<&str> {
        self.data.str("permalink")
    }

    pub fn parent(&self) -> Option<Category> {
        self.data.get("parent").map(builders::build_one::<Category>)
    }

    /// Names from this category up to the root, nearest first.
    pub fn lineage(&self) -> Vec<String> {
        let mut names = Vec::new();
        let mut current = Some(self.clone());
        while let Some(category) = current {
            if let Some(name) = category.name() {
                names.push(name.to_string());
            }
            current = category.parent();
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Entity;
    use serde_json::json;

    #[test]
    fn test_category_parent_chain() {
        let category = Category::with_data(
            None,
            RawData::new(json!({
                "id": 319,
                "name": "Socks",
                "permalink": "socks",
                "parent": {
                    "id": 338,
                    "name": "Feet / Legs",
                    "parent": {"id": 301, "name": "Categories", "parent": null}
                }
            })),
        );

        assert_eq!(category.name(), Some("Socks"));
        assert_eq!(category.parent().and_then(|p| p.id()), Some(338));
        assert_eq!(category.lineage(), vec!["Socks", "Feet / Legs", "Categories"]);
    }

    #[test]
    fn test_root_category_has_no_parent() {
        let root = Category::with_data(None, RawData::new(json!({"name": "Categories"})));
        assert!(root.parent().is_none());
        assert_eq!(root.lineage(), vec!["Categories"]);
    }
}
