//! Pure activity rendering: data in, cards out. No I/O.

use crate::model::ActivityList;

pub const LOAD_FAILED_NOTICE: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS: &str = "No participants yet";

/// One participant line; carries what the removal control needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRow {
    pub activity: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: u32,
    pub participants: Vec<ParticipantRow>,
}

pub fn render_activities(list: &ActivityList) -> Vec<ActivityCard> {
    list.iter()
        .map(|(name, a)| ActivityCard {
            name: name.to_string(),
            description: a.description.clone(),
            schedule: a.schedule.clone(),
            spots_left: a.spots_left(),
            participants: a
                .participants
                .iter()
                .map(|email| ParticipantRow {
                    activity: name.to_string(),
                    email: email.clone(),
                })
                .collect(),
        })
        .collect()
}

pub fn activity_options(list: &ActivityList) -> Vec<String> {
    list.names().map(str::to_string).collect()
}

pub fn card_lines(card: &ActivityCard) -> Vec<String> {
    let mut lines = vec![
        card.name.clone(),
        format!("  {}", card.description),
        format!("  Schedule: {}", card.schedule),
        format!("  Availability: {} spots left", card.spots_left),
    ];
    if card.participants.is_empty() {
        lines.push(format!("  {}", NO_PARTICIPANTS));
    } else {
        lines.push("  Participants:".to_string());
        lines.extend(card.participants.iter().map(|p| format!("    - {}", p.email)));
    }
    lines
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
