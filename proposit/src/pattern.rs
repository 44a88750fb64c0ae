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

use crate::{
    errors::{PropositError, PropositResult},
    template::{Segment, Template},
};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// A surface form of a rule, e.g. `"{Q} provided that {P}"`, compiled into an
/// anchored, case-insensitive regular expression. Each placeholder captures the
/// shortest non-empty run of text that still lets the whole sentence match.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
    placeholders: BTreeSet<char>,
}

impl Pattern {
    pub fn compile(source: &str) -> PropositResult<Self> {
        let template = Template::parse(source)?;
        let mut placeholders = BTreeSet::new();
        let mut expression = String::from("^(?i:");
        for segment in template.segments() {
            match segment {
                Segment::Literal(text) => expression.push_str(&regex::escape(text)),
                Segment::Slot(name) => {
                    if !placeholders.insert(*name) {
                        return Err(PropositError::InvalidTemplate {
                            template: source.to_string(),
                            reason: "a pattern cannot capture the same placeholder twice",
                        });
                    }
                    expression.push_str(&format!("(?P<{}>.+?)", name));
                }
            }
        }
        expression.push_str(")$");
        Ok(Self {
            source: source.to_string(),
            regex: Regex::new(&expression)?,
            placeholders,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn placeholders(&self) -> &BTreeSet<char> {
        &self.placeholders
    }

    /// The text bound to each placeholder if the pattern consumes the whole sentence.
    pub fn captures<'s>(&self, sentence: &'s str) -> Option<BTreeMap<char, &'s str>> {
        let captures = self.regex.captures(sentence)?;
        Some(
            self.placeholders
                .iter()
                .filter_map(|name| {
                    captures
                        .name(&name.to_string())
                        .map(|clause| (*name, clause.as_str()))
                })
                .collect(),
        )
    }
}

/// A regular expression matching `w` only as a complete word, so that "not"
/// is found in "did not go" but not in "knot".
pub fn word(w: &str) -> String {
    format!(r"\b{}\b", regex::escape(w))
}

#[cfg(test)]
mod tests {
    use super::{word, Pattern};
    use crate::errors::PropositError;
    use assert_matches::assert_matches;
    use maplit::{btreemap, btreeset};
    use regex::Regex;

    #[test]
    fn captures_placeholders() {
        let pattern = Pattern::compile("if {P} then {Q}").unwrap();
        assert_eq!(pattern.placeholders(), &btreeset! {'P', 'Q'});
        assert_eq!(
            pattern.captures("if it rains then I stay home"),
            Some(btreemap! {'P' => "it rains", 'Q' => "I stay home"})
        );
    }

    #[test]
    fn must_consume_whole_sentence() {
        let pattern = Pattern::compile("both {P} and {Q}").unwrap();
        assert_eq!(pattern.captures("we both sing and dance"), None);
        let pattern = Pattern::compile("if {P}, {Q}").unwrap();
        assert_eq!(pattern.captures("if it rains"), None);
    }

    #[test]
    fn is_case_insensitive() {
        let pattern = Pattern::compile("if {P} then {Q}").unwrap();
        assert_eq!(
            pattern.captures("IF it rains THEN I stay home"),
            Some(btreemap! {'P' => "it rains", 'Q' => "I stay home"})
        );
    }

    #[test]
    fn earlier_placeholder_takes_shortest_clause() {
        let pattern = Pattern::compile("{P} and {Q}").unwrap();
        assert_eq!(
            pattern.captures("a and b and c"),
            Some(btreemap! {'P' => "a", 'Q' => "b and c"})
        );
    }

    #[test]
    fn placeholders_are_never_empty() {
        let pattern = Pattern::compile("{P} or {Q}").unwrap();
        assert_eq!(pattern.captures(" or b"), None);
    }

    #[test]
    fn literal_text_is_escaped() {
        let pattern = Pattern::compile("{P} (really) {Q}").unwrap();
        assert_eq!(
            pattern.captures("a (really) b"),
            Some(btreemap! {'P' => "a", 'Q' => "b"})
        );
        assert_eq!(pattern.captures("a really b"), None);
    }

    #[test]
    fn spaces_around_connective_keep_words_whole() {
        let pattern = Pattern::compile("{P} or {Q}").unwrap();
        assert_eq!(pattern.captures("the doctor orders rest"), None);
    }

    #[test]
    fn rejects_duplicate_capture() {
        assert_matches!(
            Pattern::compile("{P} and {P}"),
            Err(PropositError::InvalidTemplate { .. })
        );
    }

    #[test]
    fn word_matches_only_whole_words() {
        let not = Regex::new(&word("not")).unwrap();
        assert!(not.is_match("she did not go"));
        assert!(!not.is_match("tie a knot"));
        assert!(!not.is_match("nothing happened"));
    }
}
