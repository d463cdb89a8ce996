//! Pure projections from raw payload slices to entities.
//!
//! Each builder copies the slice it is given; none of them fetch anything.
//! List builders keep the order of their input.

use crate::domain::model::RawData;
use crate::entities::{
    Author, Category, Craft, Entity, Needle, Pack, PatternType, Photo, Printing, Yarn, YarnWeight,
};
use serde_json::Value;

pub fn build_one<E: Entity>(raw: &Value) -> E {
    E::with_data(None, RawData::new(raw.clone()))
}

pub fn build_list<E: Entity>(raw: &[Value]) -> Vec<E> {
    raw.iter().map(build_one::<E>).collect()
}

/// Build one entity per element from the sub-mapping under `key` of that element.
/// Elements without `key` still produce an (empty) entity so lengths line up.
pub fn build_nested<E: Entity>(raw: &[Value], key: &str) -> Vec<E> {
    raw.iter()
        .map(|item| build_one(item.get(key).unwrap_or(&Value::Null)))
        .collect()
}

pub fn build_author(raw: &Value) -> Author {
    build_one(raw)
}

pub fn build_packs(packs: &[Value]) -> Vec<Pack> {
    build_list(packs)
}

pub fn build_yarns(packs: &[Value]) -> Vec<Yarn> {
    build_nested(packs, "yarn")
}

pub fn build_yarn_weights(packs: &[Value]) -> Vec<YarnWeight> {
    build_nested(packs, "yarn_weight")
}

pub fn build_categories(categories: &[Value]) -> Vec<Category> {
    build_list(categories)
}

pub fn build_craft(raw: &Value) -> Craft {
    build_one(raw)
}

pub fn build_needles(needles: &[Value]) -> Vec<Needle> {
    build_list(needles)
}

pub fn build_photos(photos: &[Value]) -> Vec<Photo> {
    build_list(photos)
}

pub fn build_printings(printings: &[Value]) -> Vec<Printing> {
    build_list(printings)
}

pub fn build_pattern_type(raw: &Value) -> PatternType {
    build_one(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn packs() -> Vec<Value> {
        vec![
            json!({"id": 1, "yarn": {"name": "Wool"}, "yarn_weight": {"name": "Fingering"}}),
            json!({"id": 2, "yarn_weight": {"name": "DK"}}),
            json!({"id": 3, "yarn": {"name": "Silk"}, "yarn_weight": null}),
        ]
    }

    #[test]
    fn test_pack_derived_lists_line_up() {
        let raw = packs();
        let packs = build_packs(&raw);
        let yarns = build_yarns(&raw);
        let weights = build_yarn_weights(&raw);

        assert_eq!(packs.len(), 3);
        assert_eq!(yarns.len(), 3);
        assert_eq!(weights.len(), 3);

        assert_eq!(packs[0].id(), Some(1));
        assert_eq!(packs[2].id(), Some(3));
        assert_eq!(yarns[0].name(), Some("Wool"));
        assert!(yarns[1].name().is_none());
        assert_eq!(yarns[2].name(), Some("Silk"));
        assert_eq!(weights[1].name(), Some("DK"));
        assert!(weights[2].raw().is_null());
    }

    #[test]
    fn test_builders_copy_source_slices() {
        let raw = json!({"id": 7, "name": "Jane Doe", "permalink": "jane-doe"});
        let author = build_author(&raw);
        assert_eq!(author.raw().value(), &raw);
        assert!(author.identifier().is_none());
    }

    #[test]
    fn test_empty_input_builds_nothing() {
        assert!(build_packs(&[]).is_empty());
        assert!(build_yarns(&[]).is_empty());
        assert!(build_photos(&[]).is_empty());
    }
}
