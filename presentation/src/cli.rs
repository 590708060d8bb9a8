use crate::render::{render_header, render_message, ASSISTANT_NAME};
use crate::typing::TypingIndicator;
use application::responder::Responder;
use application::turn_controller::{SubmitOutcome, TurnController};
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input};
use infrastructure::config::{Config, Variant};
use shared::types::Result;

#[derive(Parser, Debug)]
#[command(name = "chat-companion")]
#[command(about = "Terminal chat companion with canned or Gemini-backed replies")]
pub struct Cli {
    /// Reply generator to use: `canned` or `remote` (defaults to CHAT_VARIANT)
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Gemini model for the remote variant (defaults to GEMINI_MODEL)
    #[arg(long)]
    pub model: Option<String>,

    /// Answer immediately instead of simulating typing
    #[arg(long)]
    pub no_delay: bool,

    /// Log at debug level on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Command-line flags win over the environment.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(model) = self.model.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
            config.gemini_model = model.to_string();
        }
        if self.no_delay {
            config = config.without_typing_delay();
        }
        config
    }
}

fn is_exit_command(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "exit" | "quit" | "/exit" | "/quit")
}

pub struct CliApp {
    controller: TurnController<Responder>,
}

impl CliApp {
    pub fn new(cli: &Cli) -> Self {
        Self::from_config(cli.apply(Config::load()))
    }

    pub fn from_config(config: Config) -> Self {
        tracing::info!(variant = ?config.variant, model = %config.gemini_model, "starting chat session");
        Self {
            controller: TurnController::new(Responder::from_config(&config)),
        }
    }

    pub fn controller(&self) -> &TurnController<Responder> {
        &self.controller
    }

    pub async fn run(&self) -> Result<()> {
        println!("{}\n", render_header());
        for message in self.controller.messages() {
            println!("{}\n", render_message(&message));
        }

        loop {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("You")
                .allow_empty(true)
                .interact_text()?;
            if is_exit_command(&input) {
                break;
            }

            self.controller.set_draft(&input);
            if let Some(reply) = self.send_draft().await.reply() {
                println!("{}\n", render_message(reply));
            }
        }
        Ok(())
    }

    async fn send_draft(&self) -> SubmitOutcome {
        if self.controller.draft().trim().is_empty() {
            return self.controller.submit_draft().await;
        }
        let indicator = TypingIndicator::start(ASSISTANT_NAME);
        let outcome = self.controller.submit_draft().await;
        indicator.stop().await;
        outcome
    }
}
