use std::io::{self, BufRead, Write};

use super::build_assistant;
use crate::SourceArgs;

pub fn run(source: &SourceArgs) -> Result<(), jiva_core::error::JivaError> {
    let assistant = build_assistant(source)?;

    if assistant.dataset().is_empty() {
        eprintln!("Data unavailable: only general INGRES questions can be answered.");
    } else {
        eprintln!(
            "Loaded years: {}. Ask about a state or district, or type 'exit'.",
            assistant.dataset().years().join(", ")
        );
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
            break;
        }

        println!("{}\n", assistant.respond(query));
    }

    Ok(())
}
