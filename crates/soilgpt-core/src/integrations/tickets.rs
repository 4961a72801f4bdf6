use crate::error::SoilError;
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ID_PREFIX: &str = "SOIL-";
const ID_RANGE: std::ops::RangeInclusive<u32> = 100..=999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Done => "Done",
        })
    }
}

impl FromStr for TicketStatus {
    type Err = SoilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "open" => Ok(TicketStatus::Open),
            "inprogress" => Ok(TicketStatus::InProgress),
            "done" => Ok(TicketStatus::Done),
            _ => Err(SoilError::InvalidInput(format!(
                "Unknown ticket status '{s}' (expected Open, In Progress or Done)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub created: NaiveDate,
}

/// In-memory ticket list, newest first.
#[derive(Debug, Default)]
pub struct TicketBoard {
    tickets: Vec<Ticket>,
}

impl TicketBoard {
    pub fn new() -> TicketBoard {
        TicketBoard::default()
    }

    /// Open a ticket with a random `SOIL-nnn` id not already on the board.
    pub fn create<R: Rng>(
        &mut self,
        title: &str,
        description: &str,
        rng: &mut R,
        today: NaiveDate,
    ) -> Result<&Ticket, SoilError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(SoilError::InvalidInput("Ticket title must not be empty".to_string()));
        }
        let capacity = (ID_RANGE.end() - ID_RANGE.start() + 1) as usize;
        if self.tickets.len() >= capacity {
            return Err(SoilError::InvalidInput("No ticket ids left".to_string()));
        }
        let id = loop {
            let candidate = format!("{ID_PREFIX}{}", rng.gen_range(ID_RANGE));
            if !self.tickets.iter().any(|t| t.id == candidate) {
                break candidate;
            }
        };
        tracing::info!(ticket = %id, "ticket created");
        self.tickets.insert(
            0,
            Ticket {
                id,
                title: title.to_string(),
                description: description.trim().to_string(),
                status: TicketStatus::Open,
                created: today,
            },
        );
        Ok(&self.tickets[0])
    }

    pub fn set_status(&mut self, id: &str, status: TicketStatus) -> Result<&Ticket, SoilError> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| SoilError::UnknownTicket(id.to_string()))?;
        tracing::debug!(ticket = %ticket.id, from = %ticket.status, to = %status, "ticket status changed");
        ticket.status = status;
        Ok(ticket)
    }

    pub fn get(&self, id: &str) -> Result<&Ticket, SoilError> {
        self.tickets
            .iter()
            .find(|t| t.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| SoilError::UnknownTicket(id.to_string()))
    }

    pub fn list(&self) -> &[Ticket] {
        &self.tickets
    }
}
