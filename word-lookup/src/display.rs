use dictionary::Word;

pub const MAX_MEANINGS_TO_DISPLAY: usize = 2;
pub const MAX_DEFINITIONS_PER_MEANING: usize = 2;

/// Trimmed, lower-cased search term, `None` when nothing is left to search for.
pub fn normalize_query(raw_input: &str) -> Option<String> {
    let word = raw_input.trim().to_lowercase();
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

/// The part of a dictionary entry that actually gets rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub word: String,
    pub phonetic: Option<String>,
    /// Part of speech of the first meaning.
    pub part_of_speech: String,
    pub meanings: Vec<DisplayMeaning>,
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayMeaning {
    pub part_of_speech: String,
    pub definitions: Vec<DisplayDefinition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayDefinition {
    pub definition: String,
    pub example: Option<String>,
}

impl DisplayModel {
    /// Returns `None` for entries without any meaning, which the service never
    /// sends for a real word.
    pub fn project(word: &Word) -> Option<Self> {
        let first = word.meanings.first()?;
        let meanings = word
            .meanings
            .iter()
            .take(MAX_MEANINGS_TO_DISPLAY)
            .map(|meaning| DisplayMeaning {
                part_of_speech: meaning.part_of_speech.to_string(),
                definitions: meaning
                    .definitions
                    .iter()
                    .take(MAX_DEFINITIONS_PER_MEANING)
                    .map(|definition| DisplayDefinition {
                        definition: definition.definition.clone(),
                        example: non_empty(definition.example.as_deref()),
                    })
                    .collect(),
            })
            .collect();
        Some(Self {
            word: word.word.clone(),
            phonetic: non_empty(word.phonetic.as_deref()),
            part_of_speech: first.part_of_speech.to_string(),
            meanings,
            audio_url: word.first_audio().map(str::to_owned),
        })
    }
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.filter(|text| !text.is_empty()).map(str::to_owned)
}
