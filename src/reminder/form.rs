//! The JSON body accepted when creating or updating reminders.

use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    reminder::{Reminder, ReminderBuilder, ReminderUpdate},
    timestamp::DATE_FORMAT,
};

/// Every field is optional so that missing fields can be reported by name.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderForm {
    /// What the bill is for.
    pub title: Option<String>,
    /// How much is owed.
    pub amount: Option<f64>,
    /// The due date as `YYYY-MM-DD`.
    pub due_date: Option<String>,
    /// Whether the bill has been paid.
    pub is_paid: Option<bool>,
}

fn parse_due_date(raw: &str) -> Result<Date, Error> {
    Date::parse(raw, DATE_FORMAT).map_err(|_| Error::InvalidField {
        field: "dueDate",
        reason: format!("expected a date formatted as YYYY-MM-DD, got \"{raw}\""),
    })
}

impl ReminderForm {
    /// Validate a complete reminder for creation. `isPaid` defaults to false.
    ///
    /// # Errors
    /// Returns [Error::MissingField] for the first missing field in the order
    /// title, amount, dueDate, or [Error::InvalidField] for a bad due date.
    pub fn into_builder(self) -> Result<ReminderBuilder, Error> {
        let title = self.title.ok_or(Error::MissingField("title"))?;
        let amount = self.amount.ok_or(Error::MissingField("amount"))?;
        let due_date = self.due_date.ok_or(Error::MissingField("dueDate"))?;

        Ok(Reminder::build(&title, amount, parse_due_date(&due_date)?)
            .is_paid(self.is_paid.unwrap_or(false)))
    }

    /// Collect the fields present in the form for a partial update.
    ///
    /// # Errors
    /// Returns [Error::InvalidField] for a bad due date.
    pub fn into_update(self) -> Result<ReminderUpdate, Error> {
        Ok(ReminderUpdate {
            title: self.title,
            amount: self.amount,
            due_date: self.due_date.as_deref().map(parse_due_date).transpose()?,
            is_paid: self.is_paid,
        })
    }
}
