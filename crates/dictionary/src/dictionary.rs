use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub word: String,
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<WordMeaning>,
}

impl Word {
    /// The first phonetic candidate that carries a non-empty audio URL.
    pub fn first_audio(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .filter_map(|phonetic| phonetic.audio.as_deref())
            .find(|audio| !audio.is_empty())
    }
}


#[derive(Debug, Clone, PartialEq)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}


#[derive(Debug, Clone, PartialEq)]
pub struct WordMeaning {
    pub part_of_speech: PartOfSpeech,
    pub definitions: Vec<WordDefinition>,
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    /// Any label the service uses beyond the classic eight, kept verbatim.
    Other(String),
}

impl PartOfSpeech {
    pub fn label(&self) -> &str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Other(label) => label,
        }
    }
}

impl From<String> for PartOfSpeech {
    fn from(label: String) -> Self {
        match &label[..] {
            "noun" => PartOfSpeech::Noun,
            "pronoun" => PartOfSpeech::Pronoun,
            "verb" => PartOfSpeech::Verb,
            "adjective" => PartOfSpeech::Adjective,
            "adverb" => PartOfSpeech::Adverb,
            "preposition" => PartOfSpeech::Preposition,
            "conjunction" => PartOfSpeech::Conjunction,
            "interjection" => PartOfSpeech::Interjection,
            _ => PartOfSpeech::Other(label),
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordDefinition {
    pub definition: String,
    pub example: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phonetic(audio: Option<&str>) -> Phonetic {
        Phonetic {
            text: None,
            audio: audio.map(str::to_owned),
        }
    }

    #[test]
    fn known_labels_round_trip_through_display() {
        for label in ["noun", "verb", "interjection"] {
            let part = PartOfSpeech::from(label.to_owned());
            assert!(!matches!(part, PartOfSpeech::Other(_)));
            assert_eq!(part.to_string(), label);
        }
    }

    #[test]
    fn unknown_label_is_kept_verbatim() {
        let part = PartOfSpeech::from("exclamation".to_owned());
        assert_eq!(part, PartOfSpeech::Other("exclamation".to_owned()));
        assert_eq!(part.label(), "exclamation");
    }

    #[test]
    fn first_audio_skips_missing_and_empty_urls() {
        let word = Word {
            word: "hello".to_owned(),
            phonetic: None,
            phonetics: vec![
                phonetic(None),
                phonetic(Some("")),
                phonetic(Some("https://audio.test/hello-uk.mp3")),
                phonetic(Some("https://audio.test/hello-us.mp3")),
            ],
            meanings: vec![],
        };
        assert_eq!(word.first_audio(), Some("https://audio.test/hello-uk.mp3"));
    }

    #[test]
    fn first_audio_is_none_without_candidates() {
        let word = Word {
            word: "hello".to_owned(),
            phonetic: None,
            phonetics: vec![phonetic(None), phonetic(Some(""))],
            meanings: vec![],
        };
        assert_eq!(word.first_audio(), None);
    }
}
