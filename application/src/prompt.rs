use domain::message::Message;

/// Prior messages carried into a remote request.
pub const CONTEXT_WINDOW: usize = 10;

pub const DEFAULT_PERSONA: &str = "You are Claude, a friendly assistant living in a small chat widget. \
Answer in the same language the user writes in, keep replies short and warm, \
and use light Markdown (bold, bullet lists, inline code) only when it helps.";

/// Persona, the last `CONTEXT_WINDOW` messages, then the new input and a reply cue.
pub fn build_prompt(persona: &str, history: &[Message], user_text: &str) -> String {
    let start = history.len().saturating_sub(CONTEXT_WINDOW);
    let mut prompt = String::with_capacity(persona.len() + user_text.len() + 64);
    prompt.push_str(persona);
    prompt.push_str("\n\n");
    for message in &history[start..] {
        prompt.push_str(&message.prompt_line());
        prompt.push('\n');
    }
    prompt.push_str("user: ");
    prompt.push_str(user_text);
    prompt.push_str("\nassistant:");
    prompt
}
