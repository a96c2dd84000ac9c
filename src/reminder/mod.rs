//! Bill reminders: a due date, an amount and whether the bill has been paid.

mod core;
mod endpoints;
mod form;

pub use core::{
    Reminder, ReminderBuilder, ReminderUpdate, create_reminder, create_reminder_table,
    delete_reminder, get_reminder, map_reminder_row, query_reminders, update_reminder,
};
pub use endpoints::{
    create_reminder_endpoint, delete_reminder_endpoint, edit_reminder_endpoint,
    get_reminder_endpoint, list_reminders_endpoint,
};
pub use form::ReminderForm;
