use crate::domain::model::{Identifier, RawData};

/// Needle or hook size listed for a pattern (`pattern_needle_sizes`).
#[derive(Debug, Clone, PartialEq)]
pub struct Needle {
    id: Option<Identifier>,
    data: RawData,
}

impl_entity!(Needle);

impl Needle {
    pub fn id(&self) -> Option<u64> {
        self.data.u64("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.data.str("name")
    }

    /// US size, e.g. `"1"` or `"10½"`.
    pub fn us(&self) -> Option<&str> {
        self.data.str("us")
    }

    pub fn us_steel(&self) -> Option<&str> {
        self.data.str("us_steel")
    }

    /// Size in millimetres.
    pub fn metric(&self) -> Option<f64> {
        self.data.f64("metric")
    }

    pub fn pretty_metric(&self) -> Option<&str> {
        self.data.str("pretty_metric")
    }

    pub fn is_crochet(&self) -> Option<bool> {
        self.data.bool("crochet")
    }

    pub fn is_knitting(&self) -> Option<bool> {
        self.data.bool("knitting")
    }

    /// Crochet hook letter, e.g. `"G"`.
    pub fn hook(&self) -> Option<&str> {
        self.data.str("hook")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Entity;
    use serde_json::json;

    #[test]
    fn test_knitting_needle() {
        let needle = Needle::with_data(
            None,
            RawData::new(json!({
                "id": 1,
                "name": "US 1 - 2.25 mm",
                "us": "1",
                "metric": 2.25,
                "pretty_metric": "2.25",
                "knitting": true,
                "crochet": false,
                "hook": null
            })),
        );

        assert_eq!(needle.us(), Some("1"));
        assert_eq!(needle.metric(), Some(2.25));
        assert_eq!(needle.pretty_metric(), Some("2.25"));
        assert_eq!(needle.is_knitting(), Some(true));
        assert_eq!(needle.is_crochet(), Some(false));
        assert!(needle.hook().is_none());
        assert!(needle.us_steel().is_none());
    }
}
