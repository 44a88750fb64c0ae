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

use crate::errors::{PropositError, PropositResult};
use std::collections::{BTreeMap, BTreeSet};

/// A piece of a template: either text to reproduce as-is or a single-letter
/// placeholder written `{X}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Slot(char),
}

/// The shape of a rule's output, e.g. `～{Q} ⇒ {P}`, parsed once into segments.
/// The same placeholder may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> PropositResult<Self> {
        let invalid = |reason| PropositError::InvalidTemplate {
            template: source.to_string(),
            reason,
        };
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars();
        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    let name = chars.next().ok_or_else(|| invalid("unterminated placeholder"))?;
                    if !name.is_ascii_alphabetic() {
                        return Err(invalid("placeholders must be a single ASCII letter"));
                    }
                    if chars.next() != Some('}') {
                        return Err(invalid("unterminated placeholder"));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot(name));
                }
                '}' => return Err(invalid("unmatched closing brace")),
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The distinct placeholder names used, in lexicographic order.
    pub fn placeholders(&self) -> BTreeSet<char> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Slot(name) => Some(*name),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Substitutes every placeholder with its value.
    ///
    /// # Panics
    /// If `values` has no entry for one of the placeholders. Rules check their
    /// patterns against their template when they are built so this cannot happen
    /// while matching.
    pub fn fill<S: AsRef<str>>(&self, values: &BTreeMap<char, S>) -> String {
        self.segments
            .iter()
            .fold(String::new(), |mut filled, segment| {
                match segment {
                    Segment::Literal(text) => filled.push_str(text),
                    Segment::Slot(name) => filled.push_str(values[name].as_ref()),
                }
                filled
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{Segment, Template};
    use crate::errors::PropositError;
    use assert_matches::assert_matches;
    use maplit::{btreemap, btreeset};

    #[test]
    fn parses_literals_and_slots() {
        let template = Template::parse("～{Q} ⇒ {P}").unwrap();
        assert_eq!(
            template.segments(),
            &[
                Segment::Literal("～".into()),
                Segment::Slot('Q'),
                Segment::Literal(" ⇒ ".into()),
                Segment::Slot('P'),
            ]
        );
        assert_eq!(template.placeholders(), btreeset! {'P', 'Q'});
    }

    #[test]
    fn repeated_placeholder_is_filled_each_time() {
        let template = Template::parse("～{A}{P} ⋀ ～{A}{Q}").unwrap();
        assert_eq!(template.placeholders(), btreeset! {'A', 'P', 'Q'});
        let filled = template.fill(&btreemap! {'A' => "R", 'P' => "P", 'Q' => "Q"});
        assert_eq!(filled, "～RP ⋀ ～RQ");
    }

    #[test]
    fn template_without_placeholders() {
        let template = Template::parse("it rains").unwrap();
        assert!(template.placeholders().is_empty());
        assert_eq!(template.fill::<&str>(&btreemap! {}), "it rains");
    }

    #[test]
    fn rejects_unterminated_placeholder() {
        assert_matches!(
            Template::parse("if {P then {Q}"),
            Err(PropositError::InvalidTemplate { reason: "unterminated placeholder", .. })
        );
        assert_matches!(
            Template::parse("{P"),
            Err(PropositError::InvalidTemplate { reason: "unterminated placeholder", .. })
        );
    }

    #[test]
    fn rejects_stray_closing_brace() {
        assert_matches!(
            Template::parse("P} or {Q}"),
            Err(PropositError::InvalidTemplate { reason: "unmatched closing brace", .. })
        );
    }

    #[test]
    fn rejects_non_letter_placeholder() {
        assert_matches!(
            Template::parse("{1} and {Q}"),
            Err(PropositError::InvalidTemplate { .. })
        );
    }
}
