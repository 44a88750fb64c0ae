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


extern crate proposit;
#[macro_use]
extern crate test_proposit;

#[test]
fn contraction_is_made_affirmative() {
    assert_translation!("she can't go", "～P", {'P' => "she can go"});
}

#[test]
fn curly_apostrophes_are_recognised() {
    assert_translation!("she can’t go", "～P", {'P' => "she can go"});
}

#[test]
fn each_trigger_adds_a_marker() {
    assert_translation!("she cannot go", "～P", {'P' => "she can go"});
    assert_translation!("he won't stay", "～P", {'P' => "he will stay"});
    assert_translation!("it ain't so", "～P", {'P' => "it is so"});
    assert_translation!("she didn't go", "～P", {'P' => "she did go"});
    assert_translation!("she did not go", "～P", {'P' => "she did go"});
}

// Double negatives compound rather than cancel.
#[test]
fn double_negation_is_not_cancelled() {
    assert_translation!("it is not true that she did not go", "～～P", {'P' => "it is true that she did go"});
    assert_translation!("I don't think she can't go", "～～P", {'P' => "I do think she can go"});
}

#[test]
fn negated_and_affirmed_clause_share_a_symbol() {
    assert_translation!("it isn't raining and it is raining", "(～P ⋀ P)", {'P' => "it is raining"});
    assert_translation!("she cannot go and she can go", "(～P ⋀ P)", {'P' => "she can go"});
}

#[test]
fn negations_inside_connectives() {
    assert_translation!("I won't go unless you come", "(～Q ⇒ ～P)", {'P' => "I will go", 'Q' => "you come"});
    assert_translation!(
        "Neither she can’t go nor he won't stay.",
        "(～～P ⋀ ～～Q)",
        {'P' => "she can go", 'Q' => "he will stay"}
    );
}

#[test]
fn not_inside_a_word_is_not_a_negation() {
    assert_translation!("she tied a knot", "P", {'P' => "she tied a knot"});
    assert_translation!("nothing happened", "P", {'P' => "nothing happened"});
}
