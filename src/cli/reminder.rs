//! Reminder CLI commands

use chrono::{NaiveTime, Weekday};
use clap::Subcommand;

use crate::display::{format_notification, format_reminder_details, format_reminder_list};
use crate::error::{FinotaError, FinotaResult};
use crate::models::reminder::parse_time_of_day;
use crate::models::{Reminder, ReminderFrequency};
use crate::services::{CreateReminderInput, ReminderService, ReminderUpdate};
use crate::storage::Storage;

/// Reminder subcommands
#[derive(Subcommand)]
pub enum ReminderCommands {
    /// List all reminders
    List,

    /// Add a reminder
    Add {
        /// Reminder title
        title: String,
        /// Notification message
        message: String,
        /// Time of day (HH:MM)
        #[arg(short, long, default_value = "09:00", value_parser = parse_time_of_day)]
        time: NaiveTime,
        /// daily, weekly, monthly or custom
        #[arg(short, long, default_value = "daily")]
        frequency: ReminderFrequency,
        /// Days for custom reminders (e.g., "mon,thu")
        #[arg(long, value_delimiter = ',')]
        days: Vec<Weekday>,
    },

    /// Show reminder details
    Show {
        /// Reminder ID or title
        reminder: String,
    },

    /// Edit a reminder
    Edit {
        /// Reminder ID or title
        reminder: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New message
        #[arg(short, long)]
        message: Option<String>,
        /// New time of day (HH:MM)
        #[arg(short, long, value_parser = parse_time_of_day)]
        time: Option<NaiveTime>,
        /// New frequency
        #[arg(short, long)]
        frequency: Option<ReminderFrequency>,
        /// New days for custom reminders
        #[arg(long, value_delimiter = ',')]
        days: Option<Vec<Weekday>>,
    },

    /// Switch a reminder on or off
    Toggle {
        /// Reminder ID or title
        reminder: String,
        /// Switch it on instead of flipping
        #[arg(long, conflicts_with = "off")]
        on: bool,
        /// Switch it off instead of flipping
        #[arg(long)]
        off: bool,
    },

    /// Delete a reminder
    Delete {
        /// Reminder ID or title
        reminder: String,
    },

    /// Show the notification a reminder would display
    Test {
        /// Reminder ID or title
        reminder: String,
    },
}

/// Handle a reminder command
pub fn handle_reminder_command(storage: &Storage, cmd: ReminderCommands) -> FinotaResult<()> {
    let service = ReminderService::new(storage);

    let find = |identifier: &str| -> FinotaResult<Reminder> {
        service
            .find(identifier)?
            .ok_or_else(|| FinotaError::reminder_not_found(identifier))
    };

    match cmd {
        ReminderCommands::List => {
            print!("{}", format_reminder_list(&service.list()?));
        }

        ReminderCommands::Add {
            title,
            message,
            time,
            frequency,
            days,
        } => {
            let reminder = service.create(CreateReminderInput {
                title,
                message,
                time,
                frequency,
                custom_days: days,
            })?;

            println!("Created reminder: {}", reminder.title);
            println!("  ID:       {}", reminder.id);
            println!("  Schedule: {}", reminder.schedule_label());
        }

        ReminderCommands::Show { reminder } => {
            print!("{}", format_reminder_details(&find(&reminder)?));
        }

        ReminderCommands::Edit {
            reminder,
            title,
            message,
            time,
            frequency,
            days,
        } => {
            let found = find(&reminder)?;
            let updated = service.update(
                found.id,
                ReminderUpdate {
                    title,
                    message,
                    time,
                    frequency,
                    custom_days: days,
                },
            )?;

            println!("Updated reminder: {}", updated.title);
            println!("  Schedule: {}", updated.schedule_label());
        }

        ReminderCommands::Toggle { reminder, on, off } => {
            let found = find(&reminder)?;
            let updated = if on || off {
                service.set_active(found.id, on)?
            } else {
                service.toggle(found.id)?
            };

            println!(
                "Reminder '{}' is now {}",
                updated.title,
                if updated.active { "active" } else { "inactive" }
            );
        }

        ReminderCommands::Delete { reminder } => {
            let found = find(&reminder)?;
            if service.delete(found.id)? {
                println!("Deleted reminder: {}", found.title);
            }
        }

        ReminderCommands::Test { reminder } => {
            let found = find(&reminder)?;
            let notification = service.test(found.id)?;
            if !found.active {
                println!("(reminder is inactive)");
            }
            print!("{}", format_notification(&notification));
        }
    }

    Ok(())
}
