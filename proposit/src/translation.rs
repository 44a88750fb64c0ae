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

use crate::registry::Symbol;
use std::fmt;

/// What an atomic proposition stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub symbol: Symbol,
    /// The affirmative, normalized clause.
    pub text: String,
}

/// The result of translating one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    formula: String,
    definitions: Vec<Definition>,
}

impl Translation {
    pub fn new(formula: String, definitions: Vec<Definition>) -> Self {
        Self {
            formula,
            definitions,
        }
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// In the order their symbols were first assigned.
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    pub fn definition_of(&self, symbol: char) -> Option<&str> {
        self.definitions
            .iter()
            .find(|definition| definition.symbol.as_char() == symbol)
            .map(|definition| definition.text.as_str())
    }

    pub fn into_parts(self) -> (String, Vec<Definition>) {
        (self.formula, self.definitions)
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.formula)?;
        for definition in &self.definitions {
            write!(f, "\n{}: {}", definition.symbol, definition.text)?;
        }
        Ok(())
    }
}
