use std::io;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

pub struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    pub fn stdin() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Returns `None` once stdin is closed.
    pub async fn input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;
        self.lines.next_line().await
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum PromptCommand {
    Quit,
    Play,
    Lookup,
}

impl PromptCommand {
    pub fn parse(line: &str) -> Self {
        match &line.trim().to_lowercase()[..] {
            ":q" | ":quit" | ":exit" => PromptCommand::Quit,
            ":p" | ":play" => PromptCommand::Play,
            _ => PromptCommand::Lookup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colon_commands_are_recognized() {
        assert_eq!(PromptCommand::parse(":q"), PromptCommand::Quit);
        assert_eq!(PromptCommand::parse("  :Quit "), PromptCommand::Quit);
        assert_eq!(PromptCommand::parse(":play"), PromptCommand::Play);
    }

    #[test]
    fn everything_else_is_a_lookup() {
        for line in ["", "   ", "play", "quit", "hello", ":unknown"] {
            assert_eq!(PromptCommand::parse(line), PromptCommand::Lookup, "{line:?}");
        }
    }
}
