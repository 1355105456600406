use clap::Parser;

/// kaiwa — a terminal chat REPL over an OpenAI-compatible completions API.
#[derive(Parser, Debug)]
#[command(name = "kaiwa", version, about)]
pub struct Args {
    /// Model override.
    #[arg(short, long)]
    pub model: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
