//! Verb payloads shared by tests across the workspace

use serde_json::{Value, json};

const PRONOUNS: [&str; 7] = [
    "yo",
    "tú",
    "él/ella/Ud.",
    "nosotros",
    "vosotros",
    "ellos/ellas/Uds.",
    "vos",
];

fn tense(words: [&str; 7], translations: [&str; 7]) -> Value {
    let entries: Vec<Value> = PRONOUNS
        .iter()
        .zip(words)
        .zip(translations)
        .map(|((pronoun, word), translation)| {
            json!({
                "word": word,
                "translation": translation,
                "pronoun": pronoun,
                "isIrregular": false
            })
        })
        .collect();

    Value::Array(entries)
}

/// Verb payload for "hablar" in the shape SpanishDict embeds it
pub fn hablar() -> Value {
    json!({
        "infinitive": "hablar",
        "isReflexive": 0,
        "isReflexiveVariation": false,
        "infinitiveTranslation": "to speak",
        "pastParticiple": { "word": "hablado", "translation": "spoken" },
        "gerund": { "word": "hablando", "translation": "speaking" },
        "paradigms": {
            "presentIndicative": tense(
                ["hablo", "hablas", "habla", "hablamos", "habláis", "hablan", "hablás"],
                ["I speak", "you speak", "he/she speaks", "we speak", "you speak", "they speak", "you speak"],
            ),
            "preteritIndicative": tense(
                ["hablé", "hablaste", "habló", "hablamos", "hablasteis", "hablaron", "hablaste"],
                ["I spoke", "you spoke", "he/she spoke", "we spoke", "you spoke", "they spoke", "you spoke"],
            ),
            "imperfectIndicative": tense(
                ["hablaba", "hablabas", "hablaba", "hablábamos", "hablabais", "hablaban", "hablabas"],
                ["I used to speak", "you used to speak", "he/she used to speak", "we used to speak", "you used to speak", "they used to speak", "you used to speak"],
            ),
            "conditionalIndicative": tense(
                ["hablaría", "hablarías", "hablaría", "hablaríamos", "hablaríais", "hablarían", "hablarías"],
                ["I would speak", "you would speak", "he/she would speak", "we would speak", "you would speak", "they would speak", "you would speak"],
            ),
        }
    })
}
