//! Vowel extraction and the vowel→sign wheel.

/// Characters treated as vowels in Roman (IAST) names.
pub const VOWELS: [char; 11] = ['a', 'e', 'i', 'o', 'u', 'ā', 'ī', 'ū', 'ṛ', 'ṝ', 'ḷ'];

/// Vowel assumed when a name has none.
pub const DEFAULT_VOWEL: char = 'a';

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// First vowel of a name, lowercased. Defaults to `a`.
pub fn first_vowel(name: &str) -> char {
    name.chars()
        .flat_map(char::to_lowercase)
        .find(|c| is_vowel(*c))
        .unwrap_or(DEFAULT_VOWEL)
}

/// Sign (0-based) a vowel rules on the Svara wheel.
///
/// Only Aries through Virgo are reachable; vowels outside the wheel
/// (ṛ, ṝ, ḷ) fall back to Aries.
pub fn vowel_sign(vowel: char) -> u8 {
    match vowel {
        'a' => 0,
        'ā' => 1,
        'i' | 'ī' => 2,
        'u' | 'ū' => 3,
        'e' => 4,
        'o' => 5,
        _ => 0,
    }
}

/// Phase of the Panca Svara Dasa cycle that a vowel opens.
pub fn vowel_group(vowel: char) -> usize {
    match vowel {
        'i' | 'ī' => 1,
        'u' | 'ū' => 2,
        'e' => 3,
        'o' => 4,
        _ => 0,
    }
}
