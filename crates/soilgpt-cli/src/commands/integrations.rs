use chrono::Local;
use soilgpt_core::error::SoilError;
use soilgpt_core::integrations::{chat, TicketBoard, TicketStatus};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::output;

pub fn run(delay_ms: u64) -> Result<(), SoilError> {
    let mut board = TicketBoard::new();
    let mut rng = rand::thread_rng();
    let delay = Duration::from_millis(delay_ms);

    println!("Simulated chat CLI. Try one of:");
    for command in chat::EXAMPLE_COMMANDS {
        println!("  {command}");
    }
    println!("Tickets: :ticket <title> [| description], :tickets, :status <id> <status>, :quit\n");

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();

        if line == ":quit" || line == ":q" {
            break;
        } else if line == ":tickets" {
            output::table::print_tickets(board.list());
        } else if let Some(rest) = line.strip_prefix(":ticket ") {
            let (title, description) = rest.split_once('|').unwrap_or((rest, ""));
            match board.create(title, description, &mut rng, Local::now().date_naive()) {
                Ok(ticket) => println!("Created {} ({})", ticket.id, ticket.status),
                Err(e) => eprintln!("Error: {e}"),
            }
        } else if let Some(rest) = line.strip_prefix(":status ") {
            if let Err(e) = set_status(&mut board, rest) {
                eprintln!("Error: {e}");
            }
        } else if let Some(reply) = chat::respond(line) {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            output::table::print_chat_reply(&reply);
        }
        prompt()?;
    }
    Ok(())
}

fn set_status(board: &mut TicketBoard, args: &str) -> Result<(), SoilError> {
    let (id, status) = args
        .trim()
        .split_once(char::is_whitespace)
        .ok_or_else(|| SoilError::InvalidInput("usage: :status <id> <status>".to_string()))?;
    let status: TicketStatus = status.parse()?;
    let ticket = board.set_status(id, status)?;
    println!("{} is now {}", ticket.id, ticket.status);
    Ok(())
}

fn prompt() -> Result<(), SoilError> {
    print!("$ ");
    io::stdout().flush()?;
    Ok(())
}
