use icu_collator::{Collator, CollatorOptions, Strength};
use crate::core::library::{LibraryError, LibraryResult};

// Root-locale collator at primary strength: case and accents are ignored, so
// "Éclair", "eclair" and "ECLAIR" compare equal, and "ß" compares as "ss".
pub fn base_collator() -> LibraryResult<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Primary);
    Collator::try_new(&Default::default(), options)
        .map_err(|err| LibraryError::runtime(format!("title collator {:?}", err).as_str(), None))
}

pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
