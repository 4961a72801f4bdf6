use soilgpt_core::error::SoilError;
use soilgpt_core::parsing;
use soilgpt_core::session::Session;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use crate::output;

pub fn run(csv: &Path, user: Option<&str>, delay_ms: u64) -> Result<(), SoilError> {
    let session = Session::new();
    if let Some(name) = user {
        let user = session.login(name)?;
        println!("Welcome, {}.", user.name);
    }

    let record = parsing::load_csv(csv)?;
    println!(
        "Loaded sample {}. Ask a question, :history to review, :quit to exit.",
        record.sample_id()
    );
    session.load_record(record);

    let delay = Duration::from_millis(delay_ms);
    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            ":quit" | ":q" => break,
            ":history" => output::table::print_history(&session.history()),
            query => {
                if let Some(result) = session.ask(query, delay)? {
                    println!();
                    output::table::print_report(&result);
                    println!();
                }
            }
        }
        prompt()?;
    }

    if session.user().is_some() {
        session.logout()?;
    }
    let history = session.end();
    println!("Answered {} question(s).", history.len());
    Ok(())
}

fn prompt() -> Result<(), SoilError> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}
