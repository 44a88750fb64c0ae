//  Library for translating English connectives into propositional logic.
// Copyright (C) 2026 Charles Johnson
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

/// Puts a sentence in the canonical form that rules are matched against and that
/// atomic propositions are remembered by.
///
/// Runs of whitespace become single spaces, curly apostrophes become straight ones
/// and trailing periods and commas are dropped. Applying it twice is the same as
/// applying it once.
pub fn normalize(text: &str) -> String {
    let collapsed = text
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .replace('’', "'");
    let mut trimmed = collapsed.as_str();
    loop {
        let next = trimmed
            .trim_end_matches('.')
            .trim_end_matches(',')
            .trim_end();
        if next.len() == trimmed.len() {
            break;
        }
        trimmed = next;
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize;
    use proptest::prelude::*;

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  it \t rains\n today "), "it rains today");
    }

    #[test]
    fn straightens_curly_apostrophes() {
        assert_eq!(normalize("she can’t go"), "she can't go");
    }

    #[test]
    fn strips_trailing_period_and_comma() {
        assert_eq!(normalize("it rains."), "it rains");
        assert_eq!(normalize("it rains,"), "it rains");
        assert_eq!(normalize("it rains,."), "it rains");
    }

    #[test]
    fn keeps_inner_punctuation() {
        assert_eq!(normalize("if it rains, I stay home."), "if it rains, I stay home");
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" . "), "");
    }

    proptest! {
        #[test]
        fn normalizing_is_idempotent(text in "\\PC*") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalized_text_has_no_surrounding_whitespace(text in "\\PC*") {
            let normalized = normalize(&text);
            prop_assert_eq!(normalized.trim(), normalized.as_str());
            prop_assert!(!normalized.contains("  "));
        }
    }
}
