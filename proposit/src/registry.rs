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
    constants::NAME_POOL,
    errors::{PropositError, PropositResult},
    translation::Definition,
};
use bimap::BiMap;
use log::debug;
use std::fmt;

/// The name of an atomic proposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(char);

impl Symbol {
    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Names the atomic propositions of one translation.
///
/// Symbols are handed out from `NAME_POOL` in order and are never released, so
/// the assigned symbols always form a prefix of the pool.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    names: BiMap<Symbol, String>,
}

impl Registry {
    /// The symbol already given to `text`, or else the next unused one.
    pub fn resolve(&mut self, text: &str) -> PropositResult<Symbol> {
        if let Some(symbol) = self.names.get_by_right(text) {
            return Ok(*symbol);
        }
        let symbol = NAME_POOL
            .get(self.names.len())
            .map(|name| Symbol(*name))
            .ok_or(PropositError::NamePoolExhausted {
                capacity: NAME_POOL.len(),
            })?;
        debug!("resolve({:?}) => new symbol {}", text, symbol);
        self.names.insert(symbol, text.to_string());
        Ok(symbol)
    }

    pub fn symbol_of(&self, text: &str) -> Option<Symbol> {
        self.names.get_by_right(text).copied()
    }

    pub fn text_of(&self, symbol: Symbol) -> Option<&str> {
        self.names.get_by_left(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn capacity(&self) -> usize {
        NAME_POOL.len()
    }

    /// Every symbol with its text, in the order the symbols were assigned.
    pub fn definitions(&self) -> Vec<Definition> {
        NAME_POOL
            .iter()
            .map(|name| Symbol(*name))
            .map_while(|symbol| {
                self.text_of(symbol).map(|text| Definition {
                    symbol,
                    text: text.to_string(),
                })
            })
            .collect()
    }
}
