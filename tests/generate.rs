use passforge::pass::{
    CharacterClass, ClassSet, ErrorKind, GenerationConfig, ValidationError, Warning, generate,
};
use passforge::rand::{EntropySource, HwRng, Source};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn classes(list: &[CharacterClass]) -> ClassSet {
    list.iter().copied().collect()
}

fn covers(password: &str, class: CharacterClass) -> bool {
    password.chars().any(|c| class.chars().contains(c))
}

#[test]
fn twelve_chars_all_classes() {
    let config = GenerationConfig::new(12, ClassSet::all(), false);
    let generation = generate(&config, &mut StdRng::seed_from_u64(1)).unwrap();
    let password = generation.password.as_str();
    assert_eq!(password.chars().count(), 12);
    for class in CharacterClass::ALL {
        assert!(covers(password, class), "no {class} in {password}");
    }
}

#[test]
fn five_distinct_uppercase() {
    let config = GenerationConfig::new(5, classes(&[CharacterClass::Uppercase]), true);
    let generation = generate(&config, &mut StdRng::seed_from_u64(2)).unwrap();
    let password = generation.password.as_str();
    assert_eq!(password.len(), 5);
    assert!(password.chars().all(|c| c.is_ascii_uppercase()));
    let mut seen: Vec<char> = password.chars().collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 5);
}

#[test]
fn hundred_unique_digits_fail() {
    let config = GenerationConfig::new(100, classes(&[CharacterClass::Digit]), true);
    let err = generate(&config, &mut StdRng::seed_from_u64(3)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PoolTooSmall);
    assert!(err.to_string().contains("10 unique"));
}

#[test]
fn zero_length_fails() {
    let config = GenerationConfig::new(0, classes(&[CharacterClass::Lowercase]), false);
    let err = generate(&config, &mut StdRng::seed_from_u64(4)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidLength);
}

#[test]
fn length_two_three_classes_fails() {
    let config = GenerationConfig::new(
        2,
        classes(&[
            CharacterClass::Uppercase,
            CharacterClass::Lowercase,
            CharacterClass::Digit,
        ]),
        false,
    );
    let err = generate(&config, &mut StdRng::seed_from_u64(5)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidLength);
}

#[test]
fn single_class_low_diversity() {
    let config = GenerationConfig::new(12, classes(&[CharacterClass::Uppercase]), false);
    let generation = generate(&config, &mut StdRng::seed_from_u64(6)).unwrap();
    assert_eq!(generation.password.len(), 12);
    assert!(generation.warnings.contains(&Warning::LowDiversity));
    assert!(!generation.warnings.contains(&Warning::WeakLength));
}

#[test]
fn textual_length_input() {
    let err = GenerationConfig::parse("twelve", ClassSet::all(), false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidLength);
    let err = GenerationConfig::parse("-1", ClassSet::all(), false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidLength);
}

#[test]
fn no_classes_fails() {
    let config = GenerationConfig::new(12, ClassSet::empty(), true);
    assert_eq!(
        generate(&config, &mut StdRng::seed_from_u64(7)).unwrap_err(),
        ValidationError::NoCharacterClassSelected
    );
}

#[test]
fn every_source_generates() {
    let config = GenerationConfig::new(20, ClassSet::all(), true);
    for kind in [EntropySource::Os, EntropySource::Hardware] {
        let mut rng = Source::new(kind);
        let generation = generate(&config, &mut rng).unwrap();
        assert_eq!(generation.password.len(), 20);
    }
    let generation = generate(&config, &mut HwRng::new()).unwrap();
    assert_eq!(generation.password.len(), 20);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn class_set() -> impl Strategy<Value = ClassSet> {
        (0u8..16).prop_map(|bits| {
            CharacterClass::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| bits & (1 << i) != 0)
                .map(|(_, c)| c)
                .collect()
        })
    }

    proptest! {
        #[test]
        fn valid_configs_always_succeed(
            length in 0usize..120,
            classes in class_set(),
            unique in any::<bool>(),
            seed in any::<u64>(),
        ) {
            let config = GenerationConfig::new(length, classes, unique);
            let validated = config.validate();
            let result = generate(&config, &mut StdRng::seed_from_u64(seed));

            match (validated, result) {
                (Ok(warnings), Ok(generation)) => {
                    let password = generation.password.as_str();
                    prop_assert_eq!(password.chars().count(), length);
                    prop_assert_eq!(generation.warnings, warnings);
                    for class in classes.iter() {
                        prop_assert!(covers(password, class));
                    }
                    let pool: String = classes.iter().map(|c| c.chars()).collect();
                    prop_assert!(password.chars().all(|c| pool.contains(c)));
                    if unique {
                        let mut chars: Vec<char> = password.chars().collect();
                        chars.sort_unstable();
                        chars.dedup();
                        prop_assert_eq!(chars.len(), length);
                    }
                }
                (Err(a), Err(b)) => prop_assert_eq!(a, b),
                (validated, result) => prop_assert!(
                    false,
                    "validate {:?} disagrees with generate {:?}",
                    validated.map(|_| ()),
                    result.map(|_| ())
                ),
            }
        }

        #[test]
        fn validation_is_repeatable(
            length in 0usize..200,
            classes in class_set(),
            unique in any::<bool>(),
        ) {
            let config = GenerationConfig::new(length, classes, unique);
            prop_assert_eq!(config.validate(), config.validate());
        }
    }
}
