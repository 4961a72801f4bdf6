use serde::Serialize;

pub const EXAMPLE_COMMANDS: [&str; 3] = [
    "soilgpt \"Is this soil suitable for growing tomatoes?\"",
    "soilgpt \"What amendments should I add for better potato yield?\"",
    "soilgpt \"How can I improve soil moisture retention?\"",
];

pub const TICKET_LOG: &str =
    "LOG: [Jira] Create Task: Amend soil pH and add nutrients for better crop production";

const TOMATO: &str = "The soil data indicates a pH of 8.2, which is too alkaline for optimal tomato growth. Tomatoes prefer slightly acidic soil (pH 6.0-6.8). Consider adding sulfur or peat moss to lower the pH. The nitrogen level is adequate, but phosphorus is low. Add bone meal to increase phosphorus for better fruit production.";

const POTATO: &str = "For better potato yield, the soil needs more potassium and phosphorus. The current N:P:K ratio shows potassium is adequate but phosphorus is deficient. Add rock phosphate or bone meal to improve phosphorus levels. Also, potatoes prefer slightly acidic soil (pH 5.8-6.5), so the current pH of 8.2 is too high. Consider adding elemental sulfur to lower pH.";

const MOISTURE: &str = "To improve soil moisture retention, add organic matter such as compost, well-rotted manure, or leaf mold. These materials improve soil structure and water-holding capacity. For clay-heavy soils, adding organic matter also improves drainage while retaining moisture. Consider mulching with straw or wood chips to reduce evaporation from the soil surface.";

const FALLBACK: &str = "Analyzing soil data for your query... Based on the NPK values, pH, and moisture content, I recommend balancing nutrients with appropriate amendments and considering crop rotation to maintain soil health. For more specific recommendations, please provide details about your target crops.";

/// One exchange with the simulated chat CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    /// The command echoed back with a `$ ` prompt.
    pub echo: String,
    pub response: String,
    /// Ticket log line, attached for crop-specific commands.
    pub log: Option<String>,
}

impl ChatReply {
    /// Transcript lines as the terminal shows them.
    pub fn lines(&self) -> Vec<String> {
        let mut text = self.response.clone();
        if let Some(log) = &self.log {
            text.push_str("\n\n");
            text.push_str(log);
        }
        vec![self.echo.clone(), text]
    }
}

/// Canned reply for a chat command. Blank commands get no reply.
pub fn respond(command: &str) -> Option<ChatReply> {
    if command.trim().is_empty() {
        return None;
    }
    let lower = command.to_lowercase();
    let (response, log) = if lower.contains("tomato") {
        (TOMATO, true)
    } else if lower.contains("potato") {
        (POTATO, true)
    } else if lower.contains("moisture") {
        (MOISTURE, false)
    } else {
        (FALLBACK, false)
    };
    tracing::debug!(ticket = log, "chat command answered");
    Some(ChatReply {
        echo: format!("$ {command}"),
        response: response.to_string(),
        log: log.then(|| TICKET_LOG.to_string()),
    })
}
