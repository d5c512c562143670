//! Thin terminal chat loop around the response engine.
//!
//! This is a collaborator, not part of the core: it owns the chat history,
//! forwards each line to the engine, and prints whatever comes back.

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use arogya::chat::ChatHistory;
use arogya::{config, Language, ResponseEngine};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let engine = ResponseEngine::new();
    let mut history = ChatHistory::new();
    let mut lang_override: Option<Language> = None;

    println!("{} — ask a health question. Commands: /lab <text>, /lang <en|hi|hinglish|auto>, /history, /clear, /quit", config::APP_NAME);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(rest) = input.strip_prefix("/lab ") {
            println!("\n{}\n", engine.interpret_lab_text(rest, lang_override));
            continue;
        }
        match input {
            "/quit" | "/exit" => break,
            "/clear" => {
                history.clear();
                println!("(history cleared)");
                continue;
            }
            "/history" => {
                if history.is_empty() {
                    println!("(no messages yet)");
                } else {
                    println!("# {}\n\n{}", history.title(), history.transcript());
                }
                continue;
            }
            _ => {}
        }
        if let Some(code) = input.strip_prefix("/lang ") {
            lang_override = Language::from_code(code);
            match lang_override {
                Some(lang) => println!("(responses forced to {})", lang.as_code()),
                None => println!("(language auto-detection enabled)"),
            }
            continue;
        }

        let response = engine.process_query(input, lang_override);
        history.push_user(input);
        history.push_assistant(&response);
        println!("\n{response}\n");
    }

    Ok(())
}
