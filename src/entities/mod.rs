//! Typed views over slices of a pattern payload.
//!
//! Every entity is built by injection: an optional identifier plus the raw
//! sub-mapping cut out of the parent pattern. None of them talk to the
//! network. Accessors never fail; a missing or mistyped field is `None`.

use crate::domain::model::{Identifier, RawData};

/// Construction protocol shared by every nested entity.
pub trait Entity: Sized {
    /// Injection mode: store `data` as-is, no transport call.
    fn with_data(id: Option<Identifier>, data: RawData) -> Self;

    fn raw(&self) -> &RawData;

    /// Identifier supplied at construction, if any. Builders pass none; the
    /// entity's own `id` accessor reads the `id` field of its payload instead.
    fn identifier(&self) -> Option<&Identifier>;
}

macro_rules! impl_entity {
    ($ty:ident) => {
        impl $crate::entities::Entity for $ty {
            fn with_data(
                id: Option<$crate::domain::model::Identifier>,
                data: $crate::domain::model::RawData,
            ) -> Self {
                Self { id, data }
            }

            fn raw(&self) -> &$crate::domain::model::RawData {
                &self.data
            }

            fn identifier(&self) -> Option<&$crate::domain::model::Identifier> {
                self.id.as_ref()
            }
        }
    };
}

pub mod author;
pub mod builders;
pub mod category;
pub mod craft;
pub mod needle;
pub mod pack;
pub mod pattern_type;
pub mod photo;
pub mod printing;
pub mod yarn;
pub mod yarn_weight;

pub use author::Author;
pub use category::Category;
pub use craft::Craft;
pub use needle::Needle;
pub use pack::Pack;
pub use pattern_type::PatternType;
pub use photo::Photo;
pub use printing::Printing;
pub use yarn::Yarn;
pub use yarn_weight::YarnWeight;
