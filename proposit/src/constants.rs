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

pub const IMPLICATION: &str = "⇒";
pub const CONJUNCTION: &str = "⋀";
pub const DISJUNCTION: &str = "⋁";
pub const NEGATION: char = '～';

/// Symbols available to atomic propositions, in the order they are handed out.
pub const NAME_POOL: [char; 23] = [
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'B', 'C', 'D', 'E',
    'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N',
];
