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
    constants::NEGATION,
    errors::PropositResult,
    negation::NegationTable,
    normalizer::normalize,
    registry::Registry,
    rules::RuleTable,
    translation::Translation,
};
use log::debug;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::collections::BTreeMap;

/// Translates sentences with a fixed rule table and negation table. Holds no
/// state between translations so it can be shared between threads.
#[derive(Debug, Clone)]
pub struct Translator {
    rules: RuleTable,
    negations: NegationTable,
}

impl Translator {
    pub fn new(rules: RuleTable, negations: NegationTable) -> Self {
        Self {
            rules,
            negations,
        }
    }

    /// The built-in English connectives and negations.
    pub fn standard() -> PropositResult<Self> {
        Ok(Self::new(RuleTable::standard()?, NegationTable::standard()?))
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn negations(&self) -> &NegationTable {
        &self.negations
    }

    /// Translates a sentence into a formula and the clauses its symbols stand for.
    pub fn translate(&self, sentence: &str) -> PropositResult<Translation> {
        let mut registry = Registry::default();
        let formula = self.match_rules(sentence, &mut registry)?;
        Ok(Translation::new(formula, registry.definitions()))
    }

    /// Translates each sentence independently, in parallel, keeping the input order.
    pub fn translate_all<S>(&self, sentences: &[S]) -> Vec<PropositResult<Translation>>
    where
        S: AsRef<str> + Sync,
    {
        sentences
            .par_iter()
            .map(|sentence| self.translate(sentence.as_ref()))
            .collect()
    }

    /// Matches the sentence against the rules in priority order, translating the
    /// clauses captured by the first match. A sentence that no rule matches is
    /// an atomic proposition.
    pub fn match_rules(&self, sentence: &str, registry: &mut Registry) -> PropositResult<String> {
        let sentence = normalize(sentence);
        for rule in &self.rules {
            if let Some((pattern, captures)) = rule.find_match(&sentence) {
                debug!("match_rules({:?}) matched {:?}", sentence, pattern.source());
                let mut clauses = BTreeMap::new();
                for (name, clause) in captures {
                    clauses.insert(name, self.match_rules(clause, registry)?);
                }
                return Ok(format!("({})", rule.template().fill(&clauses)));
            }
        }
        self.match_atom(&sentence, registry)
    }

    /// Names an atomic proposition, prefixing one negation marker for each
    /// negation removed from it.
    fn match_atom(&self, sentence: &str, registry: &mut Registry) -> PropositResult<String> {
        let (affirmative, polarity) = self.negations.strip(sentence);
        let symbol = registry.resolve(&normalize(&affirmative))?;
        debug!("match_atom({:?}) => {} negated {} times", sentence, symbol, polarity);
        let mut literal: String = std::iter::repeat(NEGATION).take(polarity).collect();
        literal.push(symbol.as_char());
        Ok(literal)
    }
}
