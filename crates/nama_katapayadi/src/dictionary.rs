//! Fixed spellings for modern and loan words the phonetic rules get wrong.

const DICTIONARY: &[(&str, &str)] = &[
    ("microsoft", "माइक्रोसॉफ्ट्"),
    ("congress", "काँग्रेस"),
    ("bjp", "भाजपा"),
    ("inc", "इंडियन नेशनल काँग्रेस"),
    ("general electric", "जेनेरल् एलेकट्रिक्"),
];

/// Exact, case-insensitive lookup of trimmed input.
pub fn lookup(text: &str) -> Option<&'static str> {
    let key = text.trim().to_lowercase();
    DICTIONARY
        .iter()
        .find(|(word, _)| *word == key)
        .map(|(_, dev)| *dev)
}

/// Words with a fixed spelling.
pub fn words() -> impl Iterator<Item = &'static str> {
    DICTIONARY.iter().map(|(word, _)| *word)
}
