//! Example value generation.
//!
//! Every [`SchemaType`] maps to one example-producing case. The provider owns
//! the randomness used by `float`, `boolean`, `uuid` and faked `object`
//! examples, and the clock used by `date`/`datetime`/`time`. Both can be
//! pinned through [`ExampleSettings`] for reproducible output.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{json, Map, Value};

use crate::schema::SchemaType;

/// Example for `string` attributes and the element of `array` examples.
pub const EXAMPLE_STRING: &str = "Example string";

/// Example for `text` and `citext` attributes.
pub const EXAMPLE_TEXT: &str = "Example text";

/// Generator of random slug-cased words for `object` examples.
pub trait FakeData: Send + Sync {
    /// Produce one slug-cased word (lower-case, `_`-separated).
    fn slug(&self, rng: &mut dyn RngCore) -> String;
}

const WORDS: &[&str] = &[
    "amber", "anchor", "aurora", "basalt", "beacon", "birch", "cinder", "cobalt", "comet",
    "delta", "ember", "fable", "falcon", "fjord", "garnet", "harbor", "indigo", "juniper",
    "lantern", "maple", "meadow", "nebula", "onyx", "orchid", "pebble", "quartz", "raven",
    "saffron", "sierra", "tundra", "velvet", "willow",
];

/// [`FakeData`] drawing two words from a fixed vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordFaker;

impl FakeData for WordFaker {
    fn slug(&self, rng: &mut dyn RngCore) -> String {
        let first = WORDS.choose(rng).copied().unwrap_or("example");
        let second = WORDS.choose(rng).copied().unwrap_or("object");
        format!("{first}_{second}")
    }
}

/// Knobs for reproducible examples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExampleSettings {
    /// RNG seed. Entropy is used when unset.
    pub seed: Option<u64>,
    /// Fixed "now" for date and time examples. The local clock is used when
    /// unset.
    pub now: Option<DateTime<FixedOffset>>,
}

impl ExampleSettings {
    /// Settings with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            now: None,
        }
    }

    /// Pin the clock.
    #[must_use]
    pub fn with_now(mut self, now: DateTime<FixedOffset>) -> Self {
        self.now = Some(now);
        self
    }

    /// Whether both the RNG and the clock are pinned.
    pub fn is_deterministic(&self) -> bool {
        self.seed.is_some() && self.now.is_some()
    }
}

/// Produces example values by type.
///
/// One provider is created per synthesis call so that seeded runs always
/// start from the same RNG state.
pub struct ExampleProvider {
    rng: StdRng,
    now: DateTime<FixedOffset>,
    fake_data: Option<Arc<dyn FakeData>>,
}

impl ExampleProvider {
    /// Create a provider from settings and an optional fake-data source.
    #[must_use]
    pub fn new(settings: &ExampleSettings, fake_data: Option<Arc<dyn FakeData>>) -> Self {
        let rng = settings
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let now = settings
            .now
            .unwrap_or_else(|| DateTime::<FixedOffset>::from(Local::now()));

        Self {
            rng,
            now,
            fake_data,
        }
    }

    /// Example value for `schema_type`.
    pub fn example_for(&mut self, schema_type: SchemaType) -> Value {
        match schema_type {
            SchemaType::Integer => json!(1),
            SchemaType::String => json!(EXAMPLE_STRING),
            SchemaType::Text | SchemaType::Citext => json!(EXAMPLE_TEXT),
            SchemaType::Float => json!(f64::from(self.rng.gen_range(10_u32..100))),
            SchemaType::Date => json!(self.now.date_naive().format("%Y-%m-%d").to_string()),
            SchemaType::Datetime | SchemaType::Time => {
                json!(self.now.to_rfc3339_opts(SecondsFormat::Secs, false))
            }
            SchemaType::Object => self.object_example(),
            SchemaType::Array => json!([EXAMPLE_STRING]),
            SchemaType::Boolean => json!(self.rng.gen_bool(0.5)),
            SchemaType::Uuid => {
                let bytes: [u8; 16] = self.rng.gen();
                json!(uuid::Builder::from_random_bytes(bytes)
                    .into_uuid()
                    .to_string())
            }
        }
    }

    fn object_example(&mut self) -> Value {
        let Some(fake_data) = &self.fake_data else {
            return json!({"example": "object"});
        };

        let key = fake_data.slug(&mut self.rng);
        let value = fake_data.slug(&mut self.rng);
        let mut object = Map::new();
        object.insert(key, Value::String(value));
        Value::Object(object)
    }
}

impl fmt::Debug for ExampleProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExampleProvider")
            .field("now", &self.now)
            .field("fake_data", &self.fake_data.is_some())
            .finish_non_exhaustive()
    }
}
