use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The `bootstrap-static` document published by the FPL API.
/// Only the parts the collaborators serve are decoded.
#[derive(Debug, Deserialize, Clone)]
pub struct Bootstrap {
    pub elements: Vec<Element>,
    pub events: Vec<Event>,
    pub teams: Vec<Team>,
}

/// Raw footballer entry from upstream
#[derive(Debug, Deserialize, Clone)]
pub struct Element {
    pub id: i64,
    pub first_name: String,
    pub second_name: String,
    pub web_name: String,
    pub team: i64,
    pub element_type: i64,
    /// Price in tenths of a million
    pub now_cost: i64,
    pub total_points: i64,
    pub form: String,
    pub selected_by_percent: String,
}

/// Raw gameweek entry from upstream
#[derive(Debug, Deserialize, Clone)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub deadline_time: DateTime<Utc>,
    pub finished: bool,
    pub is_current: bool,
    pub is_next: bool,
    pub average_entry_score: i64,
    pub highest_score: Option<i64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Footballer {
    pub id: i64,
    pub name: String,
    pub web_name: String,
    pub team: Option<String>,
    pub position: String,
    pub price: f64,
    pub total_points: i64,
    pub form: String,
    pub selected_by_percent: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Gameweek {
    pub id: i64,
    pub name: String,
    pub deadline: DateTime<Utc>,
    pub finished: bool,
    pub is_current: bool,
    pub is_next: bool,
    pub average_score: i64,
    pub highest_score: Option<i64>,
}

fn position_for(element_type: i64) -> &'static str {
    match element_type {
        1 => "GKP",
        2 => "DEF",
        3 => "MID",
        4 => "FWD",
        _ => "UNK",
    }
}

impl Element {
    pub fn to_footballer(&self, teams: &[Team]) -> Footballer {
        Footballer {
            id: self.id,
            name: format!("{} {}", self.first_name, self.second_name),
            web_name: self.web_name.clone(),
            team: teams
                .iter()
                .find(|t| t.id == self.team)
                .map(|t| t.short_name.clone()),
            position: position_for(self.element_type).to_string(),
            price: self.now_cost as f64 / 10.0,
            total_points: self.total_points,
            form: self.form.clone(),
            selected_by_percent: self.selected_by_percent.clone(),
        }
    }
}

impl Event {
    pub fn to_gameweek(&self) -> Gameweek {
        Gameweek {
            id: self.id,
            name: self.name.clone(),
            deadline: self.deadline_time,
            finished: self.finished,
            is_current: self.is_current,
            is_next: self.is_next,
            average_score: self.average_entry_score,
            highest_score: self.highest_score,
        }
    }
}

impl Bootstrap {
    pub fn footballers(&self) -> Vec<Footballer> {
        self.elements
            .iter()
            .map(|e| e.to_footballer(&self.teams))
            .collect()
    }

    pub fn gameweeks(&self) -> Vec<Gameweek> {
        self.events.iter().map(Event::to_gameweek).collect()
    }
}
