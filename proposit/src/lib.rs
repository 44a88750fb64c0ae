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


//! # Translating English connectives into propositional logic
//! Sentences built from a small set of English connectives ("if ... then",
//! "either ... or", "both ... and", "neither ... nor", "unless", "only if", ...)
//! are translated into formulas of propositional logic. Every clause that no rule
//! breaks down further becomes an atomic proposition, named by a single capital
//! letter, and the translation lists what each letter stands for.
//!
//! Rules are tried in a fixed priority order and the first rule whose pattern
//! matches the whole sentence wins. The clauses it captures are translated the
//! same way, sharing one set of names so a clause that appears twice gets the
//! same letter both times. Negations ("not", "can't", "didn't", ...) are removed
//! from an atomic clause and each one prefixes a `～` to its letter. Negations
//! are counted, not cancelled: "it is not true that she did not go" becomes `～～P`.
//!
//! # Examples
//!
//! ```
//! extern crate proposit;
//! use proposit::{translate, PropositError};
//!
//! let translation = translate("if it rains, I stay home").unwrap();
//! assert_eq!(translation.formula(), "(P ⇒ Q)");
//! assert_eq!(translation.definition_of('P'), Some("it rains"));
//! assert_eq!(translation.definition_of('Q'), Some("I stay home"));
//!
//! // "unless" is a conditional on the negated exception
//! let translation = translate("I go out unless it rains").unwrap();
//! assert_eq!(translation.formula(), "(～Q ⇒ P)");
//!
//! // Negations are removed from the clause and kept on the symbol
//! let translation = translate("she can't go").unwrap();
//! assert_eq!(translation.formula(), "～P");
//! assert_eq!(translation.definition_of('P'), Some("she can go"));
//!
//! // There are only 23 names for atomic propositions
//! let sentence = (0..24).map(|i| format!("clause {}", i)).collect::<Vec<_>>().join(" and ");
//! assert!(matches!(translate(&sentence), Err(PropositError::NamePoolExhausted { .. })));
//! ```

/// Connective glyphs and the pool of proposition names.
pub mod constants;

/// The errors that translating or building rule tables can produce.
mod errors;

/// Negation triggers and their affirmative replacements.
pub mod negation;

/// Canonical form of sentences.
pub mod normalizer;

/// Compiling surface templates into anchored patterns.
pub mod pattern;

/// Names for atomic propositions, scoped to one translation.
pub mod registry;

/// Rules and the table that orders them.
pub mod rules;

/// Output formula templates.
pub mod template;

mod translation;

/// The recursive matcher.
mod translator;

pub use errors::{PropositError, PropositResult};
use lazy_static::lazy_static;
pub use negation::NegationTable;
pub use registry::{Registry, Symbol};
pub use rules::{Rule, RuleTable};
pub use translation::{Definition, Translation};
pub use translator::Translator;

// Saves having to compile the built-in rules each time.
lazy_static! {
    pub static ref DEFAULT_TRANSLATOR: Translator = Translator::standard().unwrap();
}

/// Translates a sentence with the built-in rules.
pub fn translate(sentence: &str) -> PropositResult<Translation> {
    DEFAULT_TRANSLATOR.translate(sentence)
}

/// Translates many sentences in parallel with the built-in rules. Each sentence
/// gets its own names.
pub fn translate_all<S: AsRef<str> + Sync>(sentences: &[S]) -> Vec<PropositResult<Translation>> {
    DEFAULT_TRANSLATOR.translate_all(sentences)
}
