use crate::domain::model::{Identifier, RawData};

/// Yarn weight class (Fingering, DK, Worsted, ...).
///
/// Gauge-like fields come through as strings because that is how the API
/// sends them (`"wpi": "14"`, `"knit_gauge": "32-34"`).
#[derive(Debug, Clone, PartialEq)]
pub struct YarnWeight {
    id: Option<Identifier>,
    data: RawData,
}

impl_entity!(YarnWeight);

impl YarnWeight {
    pub fn id(&self) -> Option<u64> {
        self.data.u64("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.data.str("name")
    }

    pub fn ply(&self) -> Option<&str> {
        self.data.str("ply")
    }

    pub fn wpi(&self) -> Option<&str> {
        self.data.str("wpi")
    }

    pub fn knit_gauge(&self) -> Option<&str> {
        self.data.str("knit_gauge")
    }

    pub fn crochet_gauge(&self) -> Option<&str> {
        self.data.str("crochet_gauge")
    }

    pub fn min_gauge(&self) -> Option<f64> {
        self.data.f64("min_gauge")
    }

    pub fn max_gauge(&self) -> Option<f64> {
        self.data.f64("max_gauge")
    }
}
