use crate::core::alphabet::{index_of, rotate, unrotate, ALPHABET};

/// Caesar-style substitution keyed by `offset`.
///
/// Characters outside the alphabet (upper case, punctuation, spaces) are kept
/// as they are, so the output always has as many characters as `text`.
pub fn substitution_cipher(text: &str, offset: i32) -> String {
    text.chars()
        .map(|c| {
            index_of(ALPHABET, c)
                .and_then(|i| rotate(ALPHABET, i, offset).ok())
                .unwrap_or(c)
        })
        .collect()
}

/// Reverse of [`substitution_cipher`] for the same `offset`.
pub fn substitution_decipher(text: &str, offset: i32) -> String {
    text.chars()
        .map(|c| {
            unrotate(ALPHABET, c, offset)
                .and_then(|i| ALPHABET.chars().nth(i))
                .unwrap_or(c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cipher() {
        assert_eq!(substitution_cipher("hello world", 5), "mjqqt 1twqi");
        assert_eq!(substitution_cipher("hello world", 20), "1y558 h8c5x");
    }

    #[test]
    fn test_decipher() {
        assert_eq!(substitution_decipher("bonjour", 4), "6kjfkqn");
    }

    #[test]
    fn test_cipher_decipher() {
        for value in ["hello", "bonjour", "21", "hello monde", "33170201"] {
            for pad in 0..ALPHABET.len() as i32 {
                assert_eq!(
                    substitution_decipher(&substitution_cipher(value, pad), pad),
                    value,
                    "pad {}",
                    pad
                );
            }
        }
    }

    #[test]
    fn test_every_letter_round_trips() {
        for pad in 0..36 {
            for c in ALPHABET.chars() {
                // 'a' and '9' share a slot once the pad moves them
                if c == 'a' && pad != 0 {
                    continue;
                }
                let s = c.to_string();
                assert_eq!(substitution_decipher(&substitution_cipher(&s, pad), pad), s);
            }
        }
    }

    #[test]
    fn test_a_collides_with_9() {
        assert_eq!(substitution_cipher("a", 7), substitution_cipher("9", 7));
        assert_eq!(substitution_decipher(&substitution_cipher("a", 7), 7), "9");
    }

    #[test]
    fn test_foreign_characters_pass_through() {
        let text = "Hé-Llo, 42!";
        let ciphered = substitution_cipher(text, 13);
        assert_eq!(ciphered.chars().count(), text.chars().count());
        for (before, after) in text.chars().zip(ciphered.chars()) {
            if index_of(ALPHABET, before).is_none() {
                assert_eq!(before, after);
            }
        }
        assert_eq!(substitution_decipher("HELLO", 13), "HELLO");
    }
}
