//! The pattern root entity.
//!
//! A `Pattern` owns the raw payload of one catalog entry and projects
//! everything else out of it. Nested entities (author, packs, yarns, ...)
//! are only built when asked for, and every build replaces what was built
//! before.
//!
//! Mutation goes through `&mut self` and a `Pattern` has no interior
//! mutability, so one instance must not be mutated from several threads at
//! once. `build_all_objects` is not atomic: if it fails half way, the
//! builders that already ran keep their results.

use crate::domain::{Fetcher, PatternId, RawData};
use crate::entities::builders;
use crate::entities::{
    Author, Category, Craft, Needle, Pack, PatternType, Photo, Printing, Yarn, YarnWeight,
};
use crate::utils::error::{RavelryError, Result};
use chrono::NaiveDate;
use serde_json::Value;

const PACKS_KEY: &str = "packs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternState {
    /// No raw data yet.
    Empty,
    /// Raw data set, nothing built.
    Populated,
    /// At least one nested entity has been built.
    FullyBuilt,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pattern {
    id: Option<PatternId>,
    data: Option<RawData>,
    author: Option<Author>,
    packs: Option<Vec<Pack>>,
    yarns: Option<Vec<Yarn>>,
    yarn_weights: Option<Vec<YarnWeight>>,
    categories: Option<Vec<Category>>,
    craft: Option<Craft>,
    needles: Option<Vec<Needle>>,
    photos: Option<Vec<Photo>>,
    printings: Option<Vec<Printing>>,
    pattern_type: Option<PatternType>,
}

impl Pattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<PatternId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Injection mode: use an already fetched `pattern` mapping, no transport call.
    pub fn from_data(id: Option<PatternId>, data: Value) -> Self {
        let mut pattern = Self {
            id,
            ..Self::default()
        };
        pattern.set_data(data);
        pattern
    }

    /// Fetch mode: one blocking request through `fetcher`, then store the result.
    pub fn fetch<F: Fetcher + ?Sized>(id: impl Into<PatternId>, fetcher: &F) -> Result<Self> {
        let mut pattern = Self::with_id(id);
        pattern.load(fetcher)?;
        Ok(pattern)
    }

    /// Request this pattern and return the mapping under `pattern`.
    ///
    /// Leaves `self` untouched. A body without a `pattern` key yields `Null`.
    pub fn fetch_and_parse<F: Fetcher + ?Sized>(&self, fetcher: &F) -> Result<Value> {
        let id = self.id.as_ref().ok_or(RavelryError::MissingIdentifierError)?;

        let body = fetcher.fetch_pattern(id)?;
        let mut parsed: Value = serde_json::from_str(&body)?;

        Ok(parsed
            .get_mut("pattern")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }

    /// Fetch and store. On failure the current raw data stays as it was.
    pub fn load<F: Fetcher + ?Sized>(&mut self, fetcher: &F) -> Result<()> {
        let data = self.fetch_and_parse(fetcher)?;
        self.set_data(data);
        tracing::debug!("Loaded pattern {}", self.describe());
        Ok(())
    }

    /// Replace the raw data. Previously built entities are dropped since they
    /// were projections of the old payload.
    pub fn set_data(&mut self, data: Value) {
        let id = self.id.take();
        *self = Self {
            id,
            data: Some(RawData::new(data)),
            ..Self::default()
        };
    }

    pub fn state(&self) -> PatternState {
        if self.data.is_none() {
            return PatternState::Empty;
        }

        let built = self.author.is_some()
            || self.packs.is_some()
            || self.yarns.is_some()
            || self.yarn_weights.is_some()
            || self.categories.is_some()
            || self.craft.is_some()
            || self.needles.is_some()
            || self.photos.is_some()
            || self.printings.is_some()
            || self.pattern_type.is_some();

        if built {
            PatternState::FullyBuilt
        } else {
            PatternState::Populated
        }
    }

    /// Identifier the caller created this pattern with (used for fetching).
    pub fn identifier(&self) -> Option<&PatternId> {
        self.id.as_ref()
    }

    /// Raw payload; an empty pattern reads as a null payload.
    pub fn raw(&self) -> &RawData {
        self.data.as_ref().unwrap_or_else(|| RawData::null_ref())
    }

    fn describe(&self) -> String {
        match (&self.id, self.name()) {
            (Some(id), Some(name)) => format!("{} ({})", id, name),
            (Some(id), None) => id.to_string(),
            (None, Some(name)) => name.to_string(),
            (None, None) => "<unnamed>".to_string(),
        }
    }

    fn required_packs(&self) -> Result<&[Value]> {
        self.packs_raw()
            .map(Vec::as_slice)
            .ok_or_else(|| RavelryError::MissingCollectionError {
                key: PACKS_KEY.to_string(),
            })
    }

    /// `None` on an empty pattern; an absent list on a populated one is empty.
    fn optional_list(&self, key: &str) -> Option<&[Value]> {
        let data = self.data.as_ref()?;
        Some(data.list(key).map(Vec::as_slice).unwrap_or(&[]))
    }

    // ---- builders -------------------------------------------------------

    /// Run the author, pack, yarn and yarn weight builders in that order.
    pub fn build_all_objects(&mut self) -> Result<()> {
        self.build_authors();
        self.build_packs()?;
        self.build_yarns()?;
        self.build_yarn_weights()?;
        Ok(())
    }

    /// `build_all_objects` plus categories, craft, needles, photos,
    /// printings and pattern type.
    pub fn build_everything(&mut self) -> Result<()> {
        self.build_all_objects()?;
        self.build_categories();
        self.build_craft();
        self.build_needles();
        self.build_photos();
        self.build_printings();
        self.build_pattern_type();
        Ok(())
    }

    /// Build the author from `pattern_author`. An empty pattern builds nothing.
    pub fn build_authors(&mut self) -> Option<&Author> {
        let data = self.data.as_ref()?;
        let raw = data
            .get("pattern_author")
            .unwrap_or(RawData::null_ref().value());
        let author = builders::build_author(raw);
        Some(self.author.insert(author))
    }

    /// Fails with `MissingCollectionError` if the payload has no `packs` key.
    pub fn build_packs(&mut self) -> Result<&[Pack]> {
        let packs = builders::build_packs(self.required_packs()?);
        tracing::debug!("Built {} packs", packs.len());
        Ok(self.packs.insert(packs).as_slice())
    }

    /// One `Yarn` per pack, from each pack's `yarn` mapping.
    pub fn build_yarns(&mut self) -> Result<&[Yarn]> {
        let yarns = builders::build_yarns(self.required_packs()?);
        Ok(self.yarns.insert(yarns).as_slice())
    }

    /// One `YarnWeight` per pack, from each pack's `yarn_weight` mapping.
    pub fn build_yarn_weights(&mut self) -> Result<&[YarnWeight]> {
        let weights = builders::build_yarn_weights(self.required_packs()?);
        Ok(self.yarn_weights.insert(weights).as_slice())
    }

    pub fn build_categories(&mut self) -> Option<&[Category]> {
        let categories = builders::build_categories(self.optional_list("pattern_categories")?);
        Some(self.categories.insert(categories).as_slice())
    }

    pub fn build_craft(&mut self) -> Option<&Craft> {
        let craft = self.data.as_ref()?.get("craft").map(builders::build_craft);
        self.craft = craft;
        self.craft.as_ref()
    }

    pub fn build_needles(&mut self) -> Option<&[Needle]> {
        let needles = builders::build_needles(self.optional_list("pattern_needle_sizes")?);
        Some(self.needles.insert(needles).as_slice())
    }

    pub fn build_photos(&mut self) -> Option<&[Photo]> {
        let photos = builders::build_photos(self.optional_list("photos")?);
        Some(self.photos.insert(photos).as_slice())
    }

    pub fn build_printings(&mut self) -> Option<&[Printing]> {
        let printings = builders::build_printings(self.optional_list("printings")?);
        Some(self.printings.insert(printings).as_slice())
    }

    pub fn build_pattern_type(&mut self) -> Option<&PatternType> {
        let pattern_type = self
            .data
            .as_ref()?
            .get("pattern_type")
            .map(builders::build_pattern_type);
        self.pattern_type = pattern_type;
        self.pattern_type.as_ref()
    }

    // ---- built entities -------------------------------------------------

    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    pub fn packs(&self) -> Option<&[Pack]> {
        self.packs.as_deref()
    }

    pub fn yarns(&self) -> Option<&[Yarn]> {
        self.yarns.as_deref()
    }

    pub fn yarn_weights(&self) -> Option<&[YarnWeight]> {
        self.yarn_weights.as_deref()
    }

    pub fn categories(&self) -> Option<&[Category]> {
        self.categories.as_deref()
    }

    pub fn craft(&self) -> Option<&Craft> {
        self.craft.as_ref()
    }

    pub fn needles(&self) -> Option<&[Needle]> {
        self.needles.as_deref()
    }

    pub fn photos(&self) -> Option<&[Photo]> {
        self.photos.as_deref()
    }

    pub fn printings(&self) -> Option<&[Printing]> {
        self.printings.as_deref()
    }

    pub fn pattern_type(&self) -> Option<&PatternType> {
        self.pattern_type.as_ref()
    }

    // ---- scalar accessors -----------------------------------------------

    /// Numeric `id` as sent in the payload; see `identifier` for the caller's one.
    pub fn id(&self) -> Option<u64> {
        self.raw().u64("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.raw().str("name")
    }

    pub fn permalink(&self) -> Option<&str> {
        self.raw().str("permalink")
    }

    pub fn comments_count(&self) -> Option<i64> {
        self.raw().i64("comments_count")
    }

    pub fn craft_name(&self) -> Option<&str> {
        self.raw().str_at(&["craft", "name"])
    }

    pub fn craft_permalink(&self) -> Option<&str> {
        self.raw().str_at(&["craft", "permalink"])
    }

    pub fn currency(&self) -> Option<&str> {
        self.raw().str("currency")
    }

    pub fn currency_symbol(&self) -> Option<&str> {
        self.raw().str("currency_symbol")
    }

    pub fn price(&self) -> Option<f64> {
        self.raw().f64("price")
    }

    pub fn product_id(&self) -> Option<u64> {
        self.raw().u64("product_id")
    }

    pub fn difficulty_average_float(&self) -> Option<f64> {
        self.raw().f64("difficulty_average")
    }

    /// Difficulty average rounded half away from zero (2.5 becomes 3).
    pub fn difficulty_average_integer(&self) -> Option<i64> {
        self.difficulty_average_float().map(|avg| avg.round() as i64)
    }

    pub fn difficulty_count(&self) -> Option<i64> {
        self.raw().i64("difficulty_count")
    }

    pub fn is_downloadable(&self) -> Option<bool> {
        self.raw().bool("downloadable")
    }

    pub fn is_ravelry_download(&self) -> Option<bool> {
        self.raw().bool("ravelry_download")
    }

    pub fn is_free(&self) -> Option<bool> {
        self.raw().bool("free")
    }

    pub fn favorites_count(&self) -> Option<i64> {
        self.raw().i64("favorites_count")
    }

    pub fn projects_count(&self) -> Option<i64> {
        self.raw().i64("projects_count")
    }

    pub fn queued_projects_count(&self) -> Option<i64> {
        self.raw().i64("queued_projects_count")
    }

    pub fn rating_average(&self) -> Option<f64> {
        self.raw().f64("rating_average")
    }

    pub fn rating_count(&self) -> Option<i64> {
        self.raw().i64("rating_count")
    }

    pub fn gauge(&self) -> Option<f64> {
        self.raw().f64("gauge")
    }

    pub fn gauge_description(&self) -> Option<&str> {
        self.raw().str("gauge_description")
    }

    pub fn gauge_divisor(&self) -> Option<i64> {
        self.raw().i64("gauge_divisor")
    }

    pub fn gauge_pattern(&self) -> Option<&str> {
        self.raw().str("gauge_pattern")
    }

    pub fn row_gauge(&self) -> Option<f64> {
        self.raw().f64("row_gauge")
    }

    pub fn notes_raw(&self) -> Option<&str> {
        self.raw().str("notes")
    }

    pub fn notes_html(&self) -> Option<&str> {
        self.raw().str("notes_html")
    }

    /// Publication date as sent, e.g. `"2006/12/01"`.
    pub fn published(&self) -> Option<&str> {
        self.raw().str("published")
    }

    pub fn published_date(&self) -> Option<NaiveDate> {
        let published = self.published()?;
        NaiveDate::parse_from_str(published, "%Y/%m/%d")
            .or_else(|_| NaiveDate::parse_from_str(published, "%Y-%m-%d"))
            .ok()
    }

    pub fn sizes_available(&self) -> Option<&str> {
        self.raw().str("sizes_available")
    }

    pub fn url(&self) -> Option<&str> {
        self.raw().str("url")
    }

    pub fn pdf_url(&self) -> Option<&str> {
        self.raw().str("pdf_url")
    }

    pub fn yardage(&self) -> Option<i64> {
        self.raw().i64("yardage")
    }

    pub fn yardage_max(&self) -> Option<i64> {
        self.raw().i64("yardage_max")
    }

    pub fn yardage_description(&self) -> Option<&str> {
        self.raw().str("yardage_description")
    }

    pub fn yarn_weight_description(&self) -> Option<&str> {
        self.raw().str("yarn_weight_description")
    }

    pub fn packs_raw(&self) -> Option<&Vec<Value>> {
        self.raw().list(PACKS_KEY)
    }

    /// Number of packs. An absent `packs` key is an error, not zero.
    pub fn pack_count(&self) -> Result<usize> {
        self.required_packs().map(<[Value]>::len)
    }

    /// The raw `pattern_author` mapping; see `build_authors` for the typed one.
    pub fn pattern_author(&self) -> Option<&Value> {
        self.raw().get("pattern_author")
    }
}
