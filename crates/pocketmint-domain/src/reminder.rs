//! Domain models for bill reminders.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// An upcoming (or settled) bill the user wants to be reminded about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reminder {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Reminder {
    /// Builds a new reminder with a freshly generated identifier.
    /// Reminders always start unpaid; settling one is a separate update.
    pub fn create(input: NewReminder) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            amount: input.amount,
            due_date: input.due_date,
            is_paid: false,
            is_recurring: input.is_recurring,
            frequency: input.frequency,
            description: input.description,
        }
    }

    /// Merges `patch` over this reminder; the identifier is never touched.
    pub fn apply(&mut self, patch: ReminderPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(is_paid) = patch.is_paid {
            self.is_paid = is_paid;
        }
        if let Some(is_recurring) = patch.is_recurring {
            self.is_recurring = is_recurring;
        }
        if let Some(frequency) = patch.frequency {
            self.frequency = Some(frequency);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }
}

impl Identifiable for Reminder {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Reminder {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Repeat cadence for recurring bills. Meaningful only when
/// [`Reminder::is_recurring`] is set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        };
        f.write_str(label)
    }
}

/// Input shape for creating a reminder; the identifier is assigned later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReminder {
    pub title: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Field-by-field update for a reminder. Every field is optional; the
/// identifier cannot be altered through a patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReminderPatch {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub is_paid: Option<bool>,
    pub is_recurring: Option<bool>,
    pub frequency: Option<Frequency>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rent() -> Reminder {
        Reminder::create(NewReminder {
            title: "Rent".into(),
            amount: 1200.0,
            due_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            is_recurring: true,
            frequency: Some(Frequency::Monthly),
            description: None,
        })
    }

    #[test]
    fn new_reminders_start_unpaid() {
        assert!(!rent().is_paid);
    }

    #[test]
    fn optional_fields_are_omitted_from_json_when_absent() {
        let reminder = Reminder::create(NewReminder {
            title: "Water bill".into(),
            amount: 30.0,
            due_date: NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
            is_recurring: false,
            frequency: None,
            description: None,
        });
        let json = serde_json::to_value(&reminder).unwrap();
        assert!(json.get("frequency").is_none());
        assert!(json.get("description").is_none());
        assert_eq!(json["is_paid"], false);
    }

    #[test]
    fn frequency_labels_match_serde_names() {
        let json = serde_json::to_value(Frequency::Monthly).unwrap();
        assert_eq!(json, Frequency::Monthly.to_string());
    }
}
