//! End-to-end behaviour of the public counter API.

use std::collections::HashSet;

use proptest::prelude::*;
use seqid::alphabet::{self, ALPHABET};
use seqid::{Counter, CounterConfig, Overflow, SharedCounter, UidGenerator};

/// Fake generator that replays a fixed list, used to check that callers can
/// depend on the trait alone.
struct ScriptedGenerator {
    script: Vec<&'static str>,
    cursor: usize,
    last: String,
}

impl ScriptedGenerator {
    fn new(script: Vec<&'static str>) -> Self {
        Self {
            script,
            cursor: 0,
            last: "-".to_string(),
        }
    }
}

impl UidGenerator for ScriptedGenerator {
    fn last(&self) -> &str {
        &self.last
    }

    fn set_last(&mut self, uid: Option<&str>) {
        self.last = uid.filter(|u| !u.is_empty()).unwrap_or("-").to_string();
    }

    fn generate(&mut self) -> &str {
        self.last = self.script[self.cursor % self.script.len()].to_string();
        self.cursor += 1;
        &self.last
    }
}

fn label_batch(ids: &mut dyn UidGenerator, count: usize) -> Vec<String> {
    (0..count).map(|_| ids.generate().to_string()).collect()
}

#[test]
fn test_trait_object_substitution() {
    let mut fake = ScriptedGenerator::new(vec!["a", "b"]);
    assert_eq!(label_batch(&mut fake, 3), vec!["a", "b", "a"]);

    let mut real = Counter::new();
    assert_eq!(label_batch(&mut real, 3), vec!["0", "1", "2"]);
}

#[test]
fn test_eleventh_generate_from_default_is_a() {
    let mut counter = Counter::create(Some("-"), Some(8192));
    let last = (0..11).map(|_| counter.generate().to_string()).last();
    assert_eq!(last.as_deref(), Some("A"));
}

#[test]
fn test_bounded_full_carry() {
    let mut counter = Counter::create(Some("zz"), Some(2));
    assert_eq!(counter.generate(), "00");
    assert_eq!(counter.last().chars().count(), 2);
}

#[test]
fn test_two_position_counter_cycles() {
    let mut counter = Counter::create(Some("00"), Some(2));
    let mut seen = HashSet::new();
    seen.insert(counter.last().to_string());
    for _ in 1..62 * 62 {
        assert!(seen.insert(counter.generate().to_string()));
    }
    assert_eq!(counter.last(), "zz");
    assert_eq!(counter.generate(), "00");
}

#[test]
fn test_extend_from_default_seed_is_distinct() {
    let mut counter = CounterConfig {
        overflow: Overflow::Extend,
        ..CounterConfig::default()
    }
    .build();

    let mut seen = HashSet::new();
    for _ in 0..5000 {
        assert!(seen.insert(counter.generate().to_string()));
    }
    assert_eq!(counter.last().chars().count(), 3);
}

#[test]
fn test_shared_counter_from_config() {
    let config = CounterConfig::from_json(r#"{"initial_uid": "y"}"#).unwrap();
    let shared = SharedCounter::from(config.build());
    assert_eq!(shared.generate(), "z");
    assert_eq!(shared.generate(), "0");
}

fn alphabet_char() -> impl Strategy<Value = char> {
    proptest::sample::select(ALPHABET.chars().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn prop_generate_is_deterministic(seed in "\\PC{1,12}", bound in 0usize..16) {
        let mut a = Counter::create(Some(&seed), Some(bound));
        let mut b = Counter::create(Some(&seed), Some(bound));
        prop_assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn prop_wrap_preserves_width(seed in "\\PC{1,12}", bound in 0usize..16) {
        let mut counter = Counter::create(Some(&seed), Some(bound));
        let width = seed.chars().count();
        prop_assert_eq!(counter.generate().chars().count(), width);
    }

    #[test]
    fn prop_tail_past_bound_untouched(seed in "\\PC{1,12}", bound in 0usize..16) {
        let mut counter = Counter::create(Some(&seed), Some(bound));
        let tail: String = seed.chars().skip(bound).collect();
        let next: String = counter.generate().chars().skip(bound).collect();
        prop_assert_eq!(next, tail);
    }

    #[test]
    fn prop_canonical_stays_canonical(chars in proptest::collection::vec(alphabet_char(), 1..8)) {
        let seed: String = chars.into_iter().collect();
        let mut counter = Counter::create(Some(&seed), None);
        prop_assert!(alphabet::validate(counter.generate()).is_ok());
    }

    #[test]
    fn prop_single_char_successor(c in alphabet_char()) {
        let mut counter = Counter::create(Some(&c.to_string()), None);
        let position = ALPHABET.find(c).unwrap();
        let expected = ALPHABET.chars().nth((position + 1) % 62).unwrap();
        prop_assert_eq!(counter.generate(), expected.to_string());
    }

    #[test]
    fn prop_last_is_idempotent(seed in "\\PC{0,12}", steps in 0usize..20) {
        let mut counter = Counter::create(Some(&seed), None);
        for _ in 0..steps {
            counter.generate();
        }
        let first = counter.last().to_string();
        prop_assert_eq!(counter.last(), first.as_str());
        prop_assert_eq!(counter.last(), first.as_str());
    }

    #[test]
    fn prop_distinct_within_capacity(
        chars in proptest::collection::vec(alphabet_char(), 3..6),
        n in 1usize..300,
    ) {
        let seed: String = chars.into_iter().collect();
        let mut counter = Counter::create(Some(&seed), None);
        let mut seen = HashSet::new();
        seen.insert(counter.last().to_string());
        for _ in 0..n {
            prop_assert!(seen.insert(counter.generate().to_string()));
        }
    }
}
