//  Testing library for proposit.
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

#[macro_use]
extern crate lazy_static;
extern crate proptest;

use std::collections::HashSet;

// Translates a sentence and compares both the formula and the definitions, in order.
#[macro_export]
macro_rules! assert_translation {
    ($sentence:expr, $formula:expr, {$($symbol:expr => $text:expr),* $(,)?}) => {
        let translation = proposit::translate($sentence).unwrap();
        assert_eq!(translation.formula(), $formula);
        let definitions: Vec<(char, &str)> = translation
            .definitions()
            .iter()
            .map(|d| (d.symbol.as_char(), d.text.as_str()))
            .collect();
        let expected: Vec<(char, &str)> = vec![$(($symbol, $text)),*];
        assert_eq!(definitions, expected);
    };
}

// Checks if a string can be used as an atomic clause
#[macro_export]
macro_rules! assume_clause {
    ($a:ident) => {
        prop_assume!($a.trim().len() > 0);
        prop_assume!(!$a
            .split_whitespace()
            .any(|w| $crate::CONNECTIVE_WORDS.contains(&w.to_lowercase())));
        prop_assume!(!$a.to_lowercase().contains("n't"));
    };
}

// Checks if all strings each can be used as atomic clauses
#[macro_export]
macro_rules! assume_clauses {
	($($a:ident),*) => ($(assume_clause!($a);)*)
}

// Words that either start a rule or trigger a negation.
lazy_static! {
    pub static ref CONNECTIVE_WORDS: HashSet<String> = [
        "if", "then", "either", "or", "else", "both", "and", "neither", "nor", "unless",
        "provided", "whenever", "implies", "therefore", "only", "but", "not", "cannot",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect();
}
