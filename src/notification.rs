//! Notifications and reminders written to the output channel.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// A message to display, optionally tagged with a due date
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    Plain {
        message: String,
    },
    /// `due_date` is kept exactly as supplied; it is never parsed
    Reminder {
        message: String,
        due_date: String,
    },
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Plain {
            message: message.into(),
        }
    }

    pub fn reminder(message: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self::Reminder {
            message: message.into(),
            due_date: due_date.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Plain { message } | Self::Reminder { message, .. } => message,
        }
    }

    pub fn send(&self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            Self::Plain { message } => writeln!(out, "Sending notification: {}", message),
            Self::Reminder { message, due_date } => {
                writeln!(out, "Sending reminder: {} (Due Date: {})", message, due_date)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sent(notification: &Notification) -> String {
        let mut out = Vec::new();
        notification.send(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_notification_output() {
        let notification = Notification::new("Build finished");
        assert_eq!(sent(&notification), "Sending notification: Build finished\n");
    }

    #[test]
    fn test_reminder_keeps_raw_due_date() {
        // Not a valid date, but reminders only display what they were given
        let reminder = Notification::reminder("Don't forget!", "next tuesday");
        assert_eq!(
            sent(&reminder),
            "Sending reminder: Don't forget! (Due Date: next tuesday)\n"
        );
        assert_eq!(reminder.message(), "Don't forget!");
    }
}
