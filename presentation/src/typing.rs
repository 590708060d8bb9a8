use colored::Colorize;
use crossterm::cursor::MoveToColumn;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{stdout, IsTerminal, Write};
use std::time::Duration;
use tokio::task::JoinHandle;

const FRAME_INTERVAL: Duration = Duration::from_millis(350);

/// Animated "typing..." line shown while a turn is in flight.
pub struct TypingIndicator {
    handle: Option<JoinHandle<()>>,
}

impl TypingIndicator {
    pub fn start(label: &str) -> Self {
        if !stdout().is_terminal() {
            return Self { handle: None };
        }

        let label = label.to_string();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(FRAME_INTERVAL);
            let mut frame = 0usize;
            loop {
                interval.tick().await;
                let dots = ".".repeat(frame % 3 + 1);
                let mut out = stdout();
                let _ = execute!(out, MoveToColumn(0), Clear(ClearType::CurrentLine));
                let _ = write!(out, "{}", format!("{label} is typing{dots}").dimmed());
                let _ = out.flush();
                frame += 1;
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    pub async fn stop(self) {
        if let Some(handle) = self.handle {
            handle.abort();
            let _ = handle.await;
            let mut out = stdout();
            let _ = execute!(out, MoveToColumn(0), Clear(ClearType::CurrentLine));
        }
    }
}
