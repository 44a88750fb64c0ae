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

use crate::{errors::PropositResult, pattern::word};
use regex::{NoExpand, Regex, RegexBuilder};

/// A negative form of a word and what it becomes once the negation is removed.
#[derive(Debug, Clone)]
pub struct Negation {
    trigger: Regex,
    affirmative: String,
}

/// Negation triggers, applied in order to the text of an atomic proposition.
#[derive(Debug, Clone, Default)]
pub struct NegationTable {
    negations: Vec<Negation>,
}

impl NegationTable {
    /// Each entry is a regular expression and its replacement, matched case-insensitively.
    pub fn new<S, T>(entries: impl IntoIterator<Item = (S, T)>) -> PropositResult<Self>
    where
        S: AsRef<str>,
        T: Into<String>,
    {
        let negations = entries
            .into_iter()
            .map(|(trigger, affirmative)| {
                Ok(Negation {
                    trigger: RegexBuilder::new(trigger.as_ref()).case_insensitive(true).build()?,
                    affirmative: affirmative.into(),
                })
            })
            .collect::<PropositResult<Vec<Negation>>>()?;
        Ok(Self {
            negations,
        })
    }

    pub fn standard() -> PropositResult<Self> {
        Self::new(vec![
            (word("not"), ""),
            (word("cannot"), "can"),
            (word("can't"), "can"),
            (word("won't"), "will"),
            (word("ain't"), "is"),
            // Suffix of didn't, couldn't, isn't, ...
            ("n't".to_string(), ""),
        ])
    }

    /// Rewrites `text` into its affirmative form and counts how many negations
    /// were removed. Every occurrence counts, so double negatives do not cancel.
    pub fn strip(&self, text: &str) -> (String, usize) {
        self.negations
            .iter()
            .fold((text.to_string(), 0), |(text, count), negation| {
                let found = negation.trigger.find_iter(&text).count();
                if found == 0 {
                    (text, count)
                } else {
                    let rewritten = negation
                        .trigger
                        .replace_all(&text, NoExpand(negation.affirmative.as_str()))
                        .into_owned();
                    (rewritten, count + found)
                }
            })
    }

    pub fn len(&self) -> usize {
        self.negations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.negations.is_empty()
    }
}
