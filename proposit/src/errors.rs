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

use thiserror::Error;

pub type PropositResult<T> = Result<T, PropositError>;

/// All the expected ways a translation or a rule table could be invalid.
#[derive(Debug, Clone, Error)]
pub enum PropositError {
    /// When a sentence needs more distinct atomic propositions than there are symbols.
    #[error("Ran out of proposition names: a sentence can mention at most {capacity} distinct clauses.")]
    NamePoolExhausted {
        capacity: usize,
    },
    /// When a template has an unterminated or malformed placeholder.
    #[error("Invalid template `{template}`: {reason}")]
    InvalidTemplate {
        template: String,
        reason: &'static str,
    },
    /// When a surface pattern captures a different set of placeholders than its rule's output uses.
    #[error("Pattern `{pattern}` does not capture the placeholders used by `{template}`")]
    PlaceholderMismatch {
        template: String,
        pattern: String,
    },
    /// When a rule has no surface patterns that could ever select it.
    #[error("Rule `{template}` has no surface patterns")]
    RuleWithoutPatterns {
        template: String,
    },
    #[error("Could not compile pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}
