use colored::Colorize;
use domain::message::{Message, Sender};

pub const ASSISTANT_NAME: &str = "멍청한 Claude";
pub const ASSISTANT_AVATAR: &str = "😵‍💫";
pub const USER_AVATAR: &str = "👤";

pub fn render_header() -> String {
    format!(
        "{} {}\n{}",
        ASSISTANT_AVATAR,
        ASSISTANT_NAME.bold(),
        "이해력 부족한 AI · type 'exit' to quit".dimmed()
    )
}

pub fn render_message(message: &Message) -> String {
    let time = message.timestamp.format("%H:%M").to_string();
    match message.sender {
        Sender::User => format!(
            "{} {} {}\n{}",
            USER_AVATAR,
            "You".cyan().bold(),
            time.dimmed(),
            message.text
        ),
        Sender::Assistant => format!(
            "{} {} {}\n{}",
            ASSISTANT_AVATAR,
            ASSISTANT_NAME.magenta().bold(),
            time.dimmed(),
            render_markup(&message.text)
        ),
    }
}

/// Terminal rendering of the light Markdown a model reply tends to carry.
pub fn render_markup(text: &str) -> String {
    text.lines()
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(line: &str) -> String {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        let heading = trimmed.trim_start_matches('#');
        if heading.starts_with(' ') {
            return render_inline(heading.trim()).bold().underline().to_string();
        }
    }
    if let Some(item) = trimmed
        .strip_prefix("* ")
        .or_else(|| trimmed.strip_prefix("- "))
    {
        let indent = &line[..line.len() - trimmed.len()];
        return format!("{}  • {}", indent, render_inline(item));
    }
    render_inline(line)
}

fn render_inline(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    loop {
        let bold = rest.find("**");
        let code = rest.find('`');
        let (start, delim) = match (bold, code) {
            (Some(b), Some(c)) if c < b => (c, "`"),
            (Some(b), _) => (b, "**"),
            (None, Some(c)) => (c, "`"),
            (None, None) => break,
        };

        let inner_start = start + delim.len();
        match rest[inner_start..].find(delim) {
            Some(len) if len > 0 => {
                out.push_str(&rest[..start]);
                let inner = &rest[inner_start..inner_start + len];
                let styled = if delim == "`" {
                    inner.yellow().to_string()
                } else {
                    inner.bold().to_string()
                };
                out.push_str(&styled);
                rest = &rest[inner_start + len + delim.len()..];
            }
            _ => {
                // Unpaired or empty span: keep the delimiter literally.
                out.push_str(&rest[..inner_start]);
                rest = &rest[inner_start..];
            }
        }
    }

    out.push_str(rest);
    out
}
