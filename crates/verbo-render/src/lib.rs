use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use verbo_config::render::RenderConfig;
use verbo_lang_spanish::{Conjugation, Gerund, Pronouns, Verb};

/// Cell text of the participle table: past participle, then gerund
pub fn participle_row(verb: &Verb) -> [&str; 2] {
    [verb.past_participle.word.as_str(), verb.gerund.word.as_str()]
}

/// Cell text of a tense table, singular forms on the left
pub fn tense_rows(pronouns: &Pronouns) -> [[&str; 2]; 3] {
    pronouns
        .rows()
        .map(|(singular, plural)| [singular.word.as_str(), plural.word.as_str()])
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn gerund_cell(gerund: &Gerund, config: &RenderConfig) -> Cell {
    if config.show_translations {
        Cell::new(format!("{} ({})", gerund.word, gerund.translation))
    } else {
        Cell::new(&gerund.word)
    }
}

fn conjugation_cell(conjugation: &Conjugation, config: &RenderConfig) -> Cell {
    let cell = if config.show_translations {
        Cell::new(format!("{} ({})", conjugation.word, conjugation.translation))
    } else {
        Cell::new(&conjugation.word)
    };

    if config.highlight_irregular && conjugation.is_irregular {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

/// Past and present participles under a `Past | Present` header
pub fn participle_table(verb: &Verb, config: &RenderConfig) -> Table {
    let mut table = new_table();
    table.set_header(vec![Cell::new("Past"), Cell::new("Present")]);
    table.add_row(vec![
        gerund_cell(&verb.past_participle, config),
        gerund_cell(&verb.gerund, config),
    ]);

    if !config.highlight_irregular {
        table.force_no_tty();
    }
    table
}

/// Three singular/plural rows without a header
pub fn tense_table(pronouns: &Pronouns, config: &RenderConfig) -> Table {
    let mut table = new_table();
    for (singular, plural) in pronouns.rows() {
        table.add_row(vec![
            conjugation_cell(singular, config),
            conjugation_cell(plural, config),
        ]);
    }

    if !config.highlight_irregular {
        table.force_no_tty();
    }
    table
}

/// Header line naming the infinitive, shown with translations
pub fn summary(verb: &Verb) -> String {
    let mut line = format!("{}: {}", verb.infinitive, verb.infinitive_translation);
    if verb.is_reflexive() {
        line.push_str(" [reflexive]");
    }
    line
}

/// Transforms the whole verb into titled tables for display.
pub fn render_verb(verb: &Verb, config: &RenderConfig) -> String {
    let mut sections = Vec::new();

    if config.show_translations {
        sections.push(summary(verb));
    }

    sections.push(format!("Participles\n{}", participle_table(verb, config)));

    for (tense, pronouns) in verb.paradigms.iter() {
        sections.push(format!("{}\n{}", tense.title(), tense_table(pronouns, config)));
    }

    let mut output = sections.join("\n");
    output.push('\n');
    output
}
