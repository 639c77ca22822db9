use std::fmt::Write;

use crate::display::DisplayModel;

pub const SEARCHING_MESSAGE: &str = "Searching...";
pub const VALIDATION_MESSAGE: &str = "Please enter a word.";
pub const ERROR_MESSAGE: &str =
    "An error occurred while fetching the definition. Please try again.";

/// Everything the output surface can show; each lookup ends on exactly one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Searching,
    ValidationError,
    NotFound { word: String },
    Found(DisplayModel),
    Error,
}

pub fn not_found_message(word: &str) -> String {
    format!("Couldn't find the word \"{word}\".")
}

pub trait Renderer: Send + Sync {
    fn render(&self, screen: &Screen) -> String;
}

/// Markup for a results panel, class names match the widget stylesheet.
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, screen: &Screen) -> String {
        match screen {
            Screen::Searching => format!("<h3 class=\"loading\">{SEARCHING_MESSAGE}</h3>"),
            Screen::ValidationError => format!("<h3 class=\"error\">{VALIDATION_MESSAGE}</h3>"),
            Screen::NotFound { word } => format!(
                "<h3 class=\"error\">{}</h3>",
                escape_html(&not_found_message(word))
            ),
            Screen::Error => format!("<h3 class=\"error\">{ERROR_MESSAGE}</h3>"),
            Screen::Found(model) => render_html_entry(model),
        }
    }
}

fn render_html_entry(model: &DisplayModel) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"word\">\n");
    let _ = writeln!(html, "  <h3>{}</h3>", escape_html(&model.word));
    if model.audio_url.is_some() {
        html.push_str(
            "  <button class=\"volume-btn\"><box-icon name=\"volume-full\"></box-icon></button>\n",
        );
    }
    html.push_str("</div>\n<div class=\"details\">\n");
    let _ = writeln!(html, "  <p>{}</p>", escape_html(&model.part_of_speech));
    let _ = writeln!(
        html,
        "  <p>{}</p>",
        escape_html(model.phonetic.as_deref().unwrap_or_default())
    );
    html.push_str("</div>\n");
    for meaning in &model.meanings {
        let _ = writeln!(
            html,
            "<p class=\"part-of-speech\">{}</p>",
            escape_html(&meaning.part_of_speech)
        );
        for (index, definition) in meaning.definitions.iter().enumerate() {
            let _ = writeln!(
                html,
                "<p class=\"word-meaning\">{}. {}</p>",
                index + 1,
                escape_html(&definition.definition)
            );
            if let Some(example) = &definition.example {
                let _ = writeln!(
                    html,
                    "<p class=\"word-example\">&quot;{}&quot;</p>",
                    escape_html(example)
                );
            }
        }
    }
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Plain terminal layout of the same panel.
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, screen: &Screen) -> String {
        match screen {
            Screen::Searching => SEARCHING_MESSAGE.to_owned(),
            Screen::ValidationError => VALIDATION_MESSAGE.to_owned(),
            Screen::NotFound { word } => not_found_message(word),
            Screen::Error => ERROR_MESSAGE.to_owned(),
            Screen::Found(model) => render_text_entry(model),
        }
    }
}

fn render_text_entry(model: &DisplayModel) -> String {
    let mut text = String::new();
    text.push_str(&model.word);
    if model.audio_url.is_some() {
        text.push_str("  [type :play to hear it]");
    }
    text.push('\n');
    match &model.phonetic {
        Some(phonetic) => {
            let _ = writeln!(text, "{}  {phonetic}", model.part_of_speech);
        }
        None => {
            let _ = writeln!(text, "{}", model.part_of_speech);
        }
    }
    for meaning in &model.meanings {
        let _ = writeln!(text, "\n  {}", meaning.part_of_speech);
        for (index, definition) in meaning.definitions.iter().enumerate() {
            let _ = writeln!(text, "    {}. {}", index + 1, definition.definition);
            if let Some(example) = &definition.example {
                let _ = writeln!(text, "       \"{example}\"");
            }
        }
    }
    text
}
