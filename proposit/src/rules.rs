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
    pattern::Pattern,
    template::Template,
};
use std::collections::BTreeMap;

/// An output template together with the surface patterns that select it.
#[derive(Debug, Clone)]
pub struct Rule {
    template: Template,
    patterns: Vec<Pattern>,
}

impl Rule {
    /// Builds a rule, checking that every pattern captures exactly the
    /// placeholders that the template fills in.
    pub fn new(template: &str, patterns: &[&str]) -> PropositResult<Self> {
        let template = Template::parse(template)?;
        if patterns.is_empty() {
            return Err(PropositError::RuleWithoutPatterns {
                template: template.source().to_string(),
            });
        }
        let expected = template.placeholders();
        let patterns = patterns
            .iter()
            .map(|source| {
                let pattern = Pattern::compile(source)?;
                if pattern.placeholders() == &expected {
                    Ok(pattern)
                } else {
                    Err(PropositError::PlaceholderMismatch {
                        template: template.source().to_string(),
                        pattern: pattern.source().to_string(),
                    })
                }
            })
            .collect::<PropositResult<Vec<Pattern>>>()?;
        Ok(Self {
            template,
            patterns,
        })
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Captures of the first pattern, in listed order, that matches the whole sentence.
    pub fn find_match<'s>(&self, sentence: &'s str) -> Option<(&Pattern, BTreeMap<char, &'s str>)> {
        self.patterns
            .iter()
            .find_map(|pattern| pattern.captures(sentence).map(|captures| (pattern, captures)))
    }
}

/// Rules in priority order. Earlier rules shadow later ones whenever both could
/// match a sentence.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
        }
    }

    /// The built-in English connectives.
    pub fn standard() -> PropositResult<Self> {
        Ok(Self::new(vec![
            Rule::new("{P} ⇒ {Q}", &["if {P} then {Q}", "if {P}, {Q}"])?,
            Rule::new("{P} ⋁ {Q}", &["either {P} or else {Q}", "either {P} or {Q}"])?,
            Rule::new("{P} ⋀ {Q}", &["both {P} and {Q}"])?,
            Rule::new("～{P} ⋀ ～{Q}", &["neither {P} nor {Q}"])?,
            Rule::new("～{A}{P} ⋀ ～{A}{Q}", &["{A} neither {P} nor {Q}"])?,
            Rule::new("～{Q} ⇒ {P}", &["{P} unless {Q}"])?,
            Rule::new(
                "{P} ⇒ {Q}",
                &[
                    "{Q} provided that {P}",
                    "{Q} whenever {P}",
                    "{P} implies {Q}",
                    "{P} therefore {Q}",
                    "{Q}, if {P}",
                    "{Q} if {P}",
                    "{P} only if {Q}",
                ],
            )?,
            Rule::new("{P} ⋀ {Q}", &["{P} and {Q}", "{P} but {Q}"])?,
            Rule::new("{P} ⋁ {Q}", &["{P} or else {Q}", "{P} or {Q}"])?,
        ]))
    }

    pub fn iter(&self) -> std::slice::Iter<Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type IntoIter = std::slice::Iter<'a, Rule>;
    type Item = &'a Rule;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
