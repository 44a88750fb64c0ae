// IProposit: Interactive Shell for translating English into propositional logic.
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
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! # Interactive Shell for translating English into propositional logic.

extern crate linefeed;
extern crate proposit;

use linefeed::{Interface, ReadResult};
use log::Level;
use proposit::translate;
use std::io;

#[cfg(debug_assertions)]
const LOG_LEVEL: Level = Level::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: Level = Level::Warn;

fn main() -> io::Result<()> {
    if let Err(e) = simple_logger::init_with_level(LOG_LEVEL) {
        eprintln!("Could not start logging: {}", e);
    }
    let reader = Interface::new("IProposit")?;
    println!("IProposit Copyright (C) 2026 Charles Johnson.\nThis program comes with ABSOLUTELY NO WARRANTY.\nThis is free software, and you are welcome to redistribute it under certain\nconditions; visit https://www.gnu.org/licenses/gpl-3.0.en.html for more details.");
    reader.set_prompt(">>> ")?;
    while let ReadResult::Input(input) = reader.read_line()? {
        if input.trim().is_empty() {
            continue;
        }
        reader.add_history_unique(input.clone());
        match translate(&input) {
            Ok(translation) => println!("{}", translation),
            Err(e) => println!("{}", e),
        }
    }
    println!("Exiting");
    Ok(())
}
