use crate::domain::model::{Identifier, RawData};
use serde_json::Value;

/// One yarn's use within a pattern: the yarn, its weight and how much of it.
///
/// The nested `yarn` and `yarn_weight` mappings stay raw here; `Yarn` and
/// `YarnWeight` are built from them by the pattern builders.
#[derive(Debug, Clone, PartialEq)]
pub struct Pack {
    id: Option<Identifier>,
    data: RawData,
}

impl_entity!(Pack);

impl Pack {
    pub fn id(&self) -> Option<u64> {
        self.data.u64("id")
    }

    pub fn colorway(&self) -> Option<&str> {
        self.data.str("colorway")
    }

    pub fn color_family_id(&self) -> Option<i64> {
        self.data.i64("color_family_id")
    }

    pub fn personal_name(&self) -> Option<&str> {
        self.data.str("personal_name")
    }

    pub fn quantity_description(&self) -> Option<&str> {
        self.data.str("quantity_description")
    }

    pub fn skeins(&self) -> Option<f64> {
        self.data.f64("skeins")
    }

    pub fn total_grams(&self) -> Option<f64> {
        self.data.f64("total_grams")
    }

    pub fn total_meters(&self) -> Option<f64> {
        self.data.f64("total_meters")
    }

    pub fn total_ounces(&self) -> Option<f64> {
        self.data.f64("total_ounces")
    }

    pub fn total_yards(&self) -> Option<f64> {
        self.data.f64("total_yards")
    }

    pub fn yarn_id(&self) -> Option<u64> {
        self.data.u64("yarn_id")
    }

    pub fn yarn_name(&self) -> Option<&str> {
        self.data.str("yarn_name")
    }

    pub fn yarn_weight_id(&self) -> Option<u64> {
        self.data.u64("yarn_weight_id")
    }

    pub fn yarn_raw(&self) -> Option<&Value> {
        self.data.get("yarn")
    }

    pub fn yarn_weight_raw(&self) -> Option<&Value> {
        self.data.get("yarn_weight")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Entity;
    use serde_json::json;

    #[test]
    fn test_pack_fields() {
        let pack = Pack::with_data(
            None,
            RawData::new(json!({
                "id": 4411,
                "colorway": "Oatmeal",
                "quantity_description": "2 skeins",
                "skeins": 2.0,
                "total_yards": 440,
                "yarn_id": 523,
                "yarn_name": "Cascade 220",
                "yarn": {"id": 523, "name": "Cascade 220"},
                "yarn_weight": {"name": "Worsted"}
            })),
        );

        assert_eq!(pack.id(), Some(4411));
        assert_eq!(pack.colorway(), Some("Oatmeal"));
        assert_eq!(pack.quantity_description(), Some("2 skeins"));
        assert_eq!(pack.skeins(), Some(2.0));
        assert_eq!(pack.total_yards(), Some(440.0));
        assert_eq!(pack.yarn_id(), Some(523));
        assert_eq!(pack.yarn_name(), Some("Cascade 220"));
        assert_eq!(pack.yarn_raw().and_then(|y| y["name"].as_str()), Some("Cascade 220"));
        assert_eq!(pack.yarn_weight_raw().and_then(|w| w["name"].as_str()), Some("Worsted"));
        assert!(pack.total_grams().is_none());
        assert!(pack.personal_name().is_none());
    }
}
