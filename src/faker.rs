//! Random content for seeded and workload rows.
//!
//! The seeder and the workload handlers only see the [`Faker`] trait, so the
//! content source can be swapped (e.g. for a scripted one in tests) without
//! touching the generation algorithms.

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use rust_decimal::Decimal;

pub trait Faker: Send {
    fn name(&mut self) -> String;
    fn address(&mut self) -> String;
    fn product_name(&mut self) -> String;
    fn product_description(&mut self) -> String;
    /// Two-decimal price in `[min, max]`.
    fn price(&mut self, min: u32, max: u32) -> Decimal;
    /// Uniform integer in `[min, max]`.
    fn number(&mut self, min: i32, max: i32) -> i32;
    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;
    /// One to three sentences of filler text.
    fn paragraph(&mut self) -> String;
    fn timestamp_between(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc>;
}

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Amara", "Bjorn", "Carmen", "Chen", "Dmitri", "Elena", "Farah", "Grace",
    "Hiro", "Ines", "Jonas", "Kemal", "Lena", "Mateo", "Nadia", "Oren", "Priya", "Quinn",
    "Rosa", "Sanjay", "Tomasz", "Uma", "Viktor", "Wren", "Ximena", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Bauer", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Haddad", "Ito",
    "Jensen", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Petrov", "Quigley",
    "Rossi", "Schmidt", "Tanaka", "Umarov", "Varga", "Wallace", "Xu", "Yilmaz", "Zielinski",
];

const STREET_NAMES: &[&str] = &[
    "Oak", "Maple", "Cedar", "Harbor", "Mill", "River", "Station", "Church", "Meadow", "King",
    "Queen", "Bridge", "Market", "Orchard", "Willow", "Highland",
];

const STREET_SUFFIXES: &[&str] = &["Street", "Avenue", "Road", "Lane", "Way", "Court", "Drive"];

const CITIES: &[&str] = &[
    "Lisbon", "Osaka", "Denver", "Krakow", "Nairobi", "Montreal", "Valencia", "Tallinn",
    "Perth", "Bergen", "Austin", "Porto", "Leeds", "Hamburg", "Cusco",
];

const COUNTRIES: &[&str] = &[
    "Portugal", "Japan", "United States", "Poland", "Kenya", "Canada", "Spain", "Estonia",
    "Australia", "Norway", "United Kingdom", "Germany", "Peru",
];

const PRODUCT_ADJECTIVES: &[&str] = &[
    "Ergonomic", "Rustic", "Sleek", "Compact", "Durable", "Smart", "Handcrafted", "Portable",
    "Refurbished", "Premium", "Lightweight", "Wireless",
];

const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Cotton", "Granite", "Bamboo", "Leather", "Ceramic", "Aluminum", "Wool",
];

const PRODUCT_NOUNS: &[&str] = &[
    "Chair", "Lamp", "Kettle", "Backpack", "Keyboard", "Blender", "Watch", "Speaker", "Mug",
    "Jacket", "Router", "Notebook", "Headphones", "Tent",
];

const WORDS: &[&str] = &[
    "quick", "sturdy", "arrived", "late", "works", "great", "value", "quality", "broke", "after",
    "week", "would", "buy", "again", "packaging", "damaged", "color", "matches", "photo",
    "battery", "lasts", "long", "setup", "easy", "instructions", "unclear", "fits", "well",
    "size", "smaller", "than", "expected", "support", "helpful", "price", "fair", "recommend",
    "daily", "use", "comfortable", "noisy", "solid", "build", "cheap", "feel", "return",
];

pub struct RandomFaker<R> {
    rng: R,
}

impl RandomFaker<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible content, for tests and repeatable seed runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomFaker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn pick(&mut self, pool: &'static [&'static str]) -> &'static str {
        pool.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn sentence(&mut self, words: usize) -> String {
        let mut sentence = String::new();
        for i in 0..words {
            let word = self.pick(WORDS);
            if i == 0 {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    sentence.extend(first.to_uppercase());
                    sentence.push_str(chars.as_str());
                }
            } else {
                sentence.push(' ');
                sentence.push_str(word);
            }
        }
        sentence.push('.');
        sentence
    }
}

impl<R: Rng + Send> Faker for RandomFaker<R> {
    fn name(&mut self) -> String {
        format!("{} {}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES))
    }

    fn address(&mut self) -> String {
        let number = self.rng.gen_range(1..=9999);
        format!(
            "{number} {} {}, {}, {}",
            self.pick(STREET_NAMES),
            self.pick(STREET_SUFFIXES),
            self.pick(CITIES),
            self.pick(COUNTRIES),
        )
    }

    fn product_name(&mut self) -> String {
        format!(
            "{} {} {}",
            self.pick(PRODUCT_ADJECTIVES),
            self.pick(PRODUCT_MATERIALS),
            self.pick(PRODUCT_NOUNS)
        )
    }

    fn product_description(&mut self) -> String {
        let words = self.rng.gen_range(8..=16);
        self.sentence(words)
    }

    fn price(&mut self, min: u32, max: u32) -> Decimal {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let cents = self.rng.gen_range(i64::from(lo) * 100..=i64::from(hi) * 100);
        Decimal::new(cents, 2)
    }

    fn number(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn paragraph(&mut self) -> String {
        let sentences = self.rng.gen_range(1..=3);
        (0..sentences)
            .map(|_| {
                let words = self.rng.gen_range(4..=10);
                self.sentence(words)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn timestamp_between(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc> {
        let span = (end - start).num_seconds();
        if span <= 0 {
            return start;
        }
        start + Duration::seconds(self.rng.gen_range(0..=span))
    }
}
