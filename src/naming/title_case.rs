use unicode_segmentation::UnicodeSegmentation;

/// Uppercase the first cased letter of every word and lowercase the rest.
///
/// Words follow Unicode word boundaries, so apostrophes between letters,
/// combining marks and `_` stay inside a word. Digits and other uncased
/// characters are copied as-is and do not count as the word's first letter.
pub fn title_case(text: &str) -> String {
    text.split_word_bounds().map(title_word).collect()
}

fn title_word(word: &str) -> String {
    let mut output = String::with_capacity(word.len());
    let mut seen_cased = false;

    for c in word.chars() {
        if !is_cased(c) {
            output.push(c);
        } else if seen_cased {
            output.extend(c.to_lowercase());
        } else {
            output.extend(c.to_uppercase());
            seen_cased = true;
        }
    }

    output
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}
