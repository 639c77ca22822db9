use clap::{Parser, ValueEnum};
use dictionary::DICTIONARY_API_URL;

use crate::render::{HtmlRenderer, Renderer, TextRenderer};

#[derive(Debug, Parser)]
#[command(name = "word-lookup", version, about = "Look up English words in a dictionary web service")]
pub struct Config {
    /// Words to look up once; an interactive prompt starts when none are given
    pub words: Vec<String>,

    /// Base endpoint the word is appended to
    #[arg(long, env = "WORD_LOOKUP_ENDPOINT", default_value = DICTIONARY_API_URL)]
    pub endpoint: String,

    /// How results are written to the terminal
    #[arg(long, env = "WORD_LOOKUP_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Command used to play pronunciations, e.g. "mpv --no-video"
    #[arg(long, env = "WORD_LOOKUP_PLAYER")]
    pub player: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Html => Box::new(HtmlRenderer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Screen;

    #[test]
    fn defaults_to_the_public_endpoint_and_text() {
        let config = Config::try_parse_from(["word-lookup"]).unwrap();
        assert!(config.words.is_empty());
        assert_eq!(config.endpoint, DICTIONARY_API_URL);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.player, None);
    }

    #[test]
    fn parses_every_option() {
        let config = Config::try_parse_from([
            "word-lookup",
            "--endpoint",
            "http://localhost:8080/entries/en",
            "--format",
            "html",
            "--player",
            "mpv --no-video",
            "hello",
            "world",
        ])
        .unwrap();
        assert_eq!(config.words, ["hello", "world"]);
        assert_eq!(config.endpoint, "http://localhost:8080/entries/en");
        assert_eq!(config.format, OutputFormat::Html);
        assert_eq!(config.player.as_deref(), Some("mpv --no-video"));
    }

    #[test]
    fn rejects_unknown_formats() {
        assert!(Config::try_parse_from(["word-lookup", "--format", "pdf"]).is_err());
    }

    #[test]
    fn format_selects_the_renderer() {
        let html = OutputFormat::Html.renderer().render(&Screen::Searching);
        assert!(html.starts_with("<h3"));
        let text = OutputFormat::Text.renderer().render(&Screen::Searching);
        assert_eq!(text, "Searching...");
    }
}
