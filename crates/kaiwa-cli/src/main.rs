mod cli;
mod config;

use std::io::Write as _;
use std::path::Path;

use kaiwa::{Dialogue, OpenAiConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines) in the
/// current directory. Existing variables are never overridden.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() {
    load_dotenv();

    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("kaiwa=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "kaiwa=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("kaiwa v{} starting", env!("CARGO_PKG_VERSION"));

    let file_config = match args.config {
        Some(ref path) => config::load_from_path(Path::new(path)),
        None => config::load_default(),
    }
    .unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        config::KaiwaConfig::default()
    });

    let mut api_config = match OpenAiConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    if let Some(model) = args.model.or_else(|| file_config.model.clone()) {
        api_config = api_config.with_model(model);
    }

    let mut dialogue = Dialogue::openai(api_config);
    if let Some(context) = file_config.context_messages() {
        dialogue = dialogue.with_context(context);
    }

    println!("kaiwa — type a message, or /clear, /history, /quit");
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        match line {
            "" => {}
            "/quit" | "/exit" => break,
            "/clear" => {
                dialogue.clear();
                println!("(history cleared)");
            }
            "/history" => {
                for message in dialogue.history() {
                    println!("{:>9}: {}", message.role, message.content);
                }
            }
            _ => match dialogue.post(line).await {
                Ok(reply) => println!("{reply}"),
                Err(e) => eprintln!("{e}"),
            },
        }
        prompt();
    }
}
