//! Soundex encoding and a `DIFFERENCE`-style similarity score.

const CODE_LEN: usize = 4;

/// Digit for a consonant; `None` for vowels and `H`/`W`.
fn digit(c: char) -> Option<char> {
    match c {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None,
    }
}

/// American soundex code of `word`, e.g. `Robert` -> `R163`.
///
/// Non-alphabetic characters are ignored, so `GPL-3.0` encodes like `GPL`.
/// Returns an empty string when `word` has no ASCII letters.
pub fn encode(word: &str) -> String {
    let mut letters = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase());

    let Some(first) = letters.next() else {
        return String::new();
    };

    let mut code = String::with_capacity(CODE_LEN);
    code.push(first);
    let mut last = digit(first);

    for c in letters {
        if code.len() == CODE_LEN {
            break;
        }
        match c {
            // H and W do not separate consonants with the same digit
            'H' | 'W' => {}
            _ => {
                let d = digit(c);
                if let Some(d) = d {
                    if last != Some(d) {
                        code.push(d);
                    }
                }
                last = d;
            }
        }
    }

    while code.len() < CODE_LEN {
        code.push('0');
    }
    code
}

/// How much of `a`'s code is found in `b`'s, on a 0-4 scale.
fn directional(a: &str, b: &str) -> u32 {
    let mut score = 0;
    if a[..1] == b[..1] {
        score += 1;
    }

    let tail = &b[1..];
    if tail.contains(&a[1..]) {
        score += 3;
    } else if tail.contains(&a[2..]) || tail.contains(&a[1..3]) {
        score += 2;
    } else {
        score += a[1..].chars().filter(|c| tail.contains(*c)).count() as u32;
    }
    score
}

/// Phonetic similarity between two words, from 0 (unrelated) to 100 (same code).
///
/// Symmetric: `similarity(a, b) == similarity(b, a)`.
pub fn similarity(a: &str, b: &str) -> u32 {
    let (a, b) = (encode(a), encode(b));
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    if a == b {
        return 100;
    }
    (directional(&a, &b) + directional(&b, &a)) * 25 / 2
}
