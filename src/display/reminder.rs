//! Reminder display formatting

use tabled::Tabled;

use crate::models::{Notification, Reminder};

use super::{table, truncate};

#[derive(Tabled)]
struct ReminderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Schedule")]
    schedule: String,
    #[tabled(rename = "Active")]
    active: &'static str,
    #[tabled(rename = "Message")]
    message: String,
}

/// Format reminders as a table
pub fn format_reminder_list(reminders: &[Reminder]) -> String {
    if reminders.is_empty() {
        return "No reminders set.\n".to_string();
    }

    let rows = reminders
        .iter()
        .map(|r| ReminderRow {
            id: r.id.to_string(),
            title: truncate(&r.title, 24),
            schedule: r.schedule_label(),
            active: if r.active { "yes" } else { "no" },
            message: truncate(&r.message, 40),
        })
        .collect();

    let active = reminders.iter().filter(|r| r.active).count();
    format!(
        "{}\n{} reminder(s), {} active\n",
        table(rows),
        reminders.len(),
        active
    )
}

/// Format reminder details for display
pub fn format_reminder_details(reminder: &Reminder) -> String {
    let mut output = String::new();

    output.push_str(&format!("Reminder: {}\n", reminder.title));
    output.push_str(&format!("  ID:        {}\n", reminder.id));
    output.push_str(&format!("  Message:   {}\n", reminder.message));
    output.push_str(&format!("  Schedule:  {}\n", reminder.schedule_label()));
    output.push_str(&format!(
        "  Status:    {}\n",
        if reminder.active { "Active" } else { "Inactive" }
    ));

    output
}

/// Render a notification the way a reminder would show it
pub fn format_notification(notification: &Notification) -> String {
    let width = notification
        .title
        .chars()
        .count()
        .max(notification.body.chars().count())
        + 4;
    let border = "─".repeat(width);

    format!(
        "┌{border}┐\n│  {title:<inner$}  │\n│  {body:<inner$}  │\n└{border}┘\n",
        border = border,
        title = notification.title,
        body = notification.body,
        inner = width - 4,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReminderFrequency;
    use chrono::NaiveTime;

    fn rent() -> Reminder {
        Reminder::new(
            "Pay Rent",
            "Don't forget to pay monthly rent",
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            ReminderFrequency::Monthly,
        )
    }

    #[test]
    fn test_list() {
        let mut off = rent();
        off.set_active(false);
        let output = format_reminder_list(&[rent(), off]);
        assert!(output.contains("Monthly at 09:00"));
        assert!(output.contains("2 reminder(s), 1 active"));
    }

    #[test]
    fn test_details() {
        let output = format_reminder_details(&rent());
        assert!(output.contains("Schedule:  Monthly at 09:00"));
        assert!(output.contains("Status:    Active"));
    }

    #[test]
    fn test_notification_box() {
        let output = format_notification(&rent().notification());
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("Pay Rent"));
        assert!(lines[2].contains("Don't forget to pay monthly rent"));
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }
}
