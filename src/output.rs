//! Output formatting for resolved dictionary entries

use crate::dict::{Entry, compile};
use crate::kana::RomajiStyle;
use crate::query::types::{Condition, Field};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

const KANJI_SEPARATOR: &str = "；";
const GLOSS_SEPARATOR: &str = "; ";

/// Layout of printed entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Multi-line block per entry
    Human,
    /// One tab-separated line per entry
    Tab,
}

/// Terminal background, for picking readable colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    #[default]
    Dark,
    Light,
}

struct Palette {
    kanji: ColorSpec,
    reading: ColorSpec,
    gloss: ColorSpec,
    label: ColorSpec,
    highlight: ColorSpec,
}

impl Palette {
    fn new(background: Background) -> Self {
        let (kanji, reading, label) = match background {
            Background::Dark => (Color::Cyan, Color::Green, Color::Yellow),
            Background::Light => (Color::Blue, Color::Magenta, Color::Red),
        };

        let mut kanji_spec = ColorSpec::new();
        kanji_spec.set_fg(Some(kanji)).set_bold(true);
        let mut reading_spec = ColorSpec::new();
        reading_spec.set_fg(Some(reading));
        let mut label_spec = ColorSpec::new();
        label_spec.set_fg(Some(label));
        let mut highlight = ColorSpec::new();
        highlight.set_fg(Some(Color::Red)).set_bold(true).set_underline(true);

        Self {
            kanji: kanji_spec,
            reading: reading_spec,
            gloss: ColorSpec::new(),
            label: label_spec,
            highlight,
        }
    }

    fn for_field(&self, field: Field) -> &ColorSpec {
        match field {
            Field::Kanji => &self.kanji,
            Field::Reading => &self.reading,
            Field::Gloss => &self.gloss,
        }
    }
}

/// How entries are rendered
#[derive(Debug, Clone)]
pub struct PresentOptions {
    pub mode: OutputMode,
    pub background: Background,
    /// Show readings in rōmaji instead of kana
    pub romaji: Option<RomajiStyle>,
}

impl Default for PresentOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::Tab,
            background: Background::Dark,
            romaji: None,
        }
    }
}

/// Print entries matched by `condition`.
///
/// Text in the condition's field that the condition matched is highlighted,
/// so the reader can see why each entry was chosen.
pub fn write_entries<W: WriteColor>(
    out: &mut W,
    entries: &[&Entry],
    condition: &Condition,
    options: &PresentOptions,
) -> io::Result<()> {
    let presenter = Presenter {
        palette: Palette::new(options.background),
        highlight: compile(condition).ok(),
        field: condition.field(),
        romaji: options.romaji,
    };

    for (i, entry) in entries.iter().enumerate() {
        match options.mode {
            OutputMode::Human => {
                if i > 0 {
                    writeln!(out)?;
                }
                presenter.write_human(out, entry)?;
            }
            OutputMode::Tab => presenter.write_tab(out, entry)?,
        }
    }

    Ok(())
}

struct Presenter {
    palette: Palette,
    highlight: Option<Regex>,
    field: Field,
    romaji: Option<RomajiStyle>,
}

impl Presenter {
    fn write_human<W: WriteColor>(&self, out: &mut W, entry: &Entry) -> io::Result<()> {
        if entry.kanji.is_empty() {
            self.write_list(out, Field::Reading, &entry.readings, KANJI_SEPARATOR)?;
        } else {
            self.write_list(out, Field::Kanji, &entry.kanji, KANJI_SEPARATOR)?;
        }
        if entry.frequent {
            out.set_color(&self.palette.label)?;
            write!(out, " (P)")?;
            out.reset()?;
        }
        writeln!(out)?;

        if !entry.kanji.is_empty() {
            write!(out, "  ")?;
            self.write_list(out, Field::Reading, &entry.readings, KANJI_SEPARATOR)?;
            writeln!(out)?;
        }

        for (n, sense) in entry.senses.iter().enumerate() {
            write!(out, "  {}. ", n + 1)?;
            self.write_pos(out, &sense.pos)?;
            self.write_list(out, Field::Gloss, &sense.glosses, GLOSS_SEPARATOR)?;
            writeln!(out)?;
        }

        Ok(())
    }

    fn write_tab<W: WriteColor>(&self, out: &mut W, entry: &Entry) -> io::Result<()> {
        self.write_list(out, Field::Kanji, &entry.kanji, KANJI_SEPARATOR)?;
        write!(out, "\t")?;
        self.write_list(out, Field::Reading, &entry.readings, KANJI_SEPARATOR)?;
        if entry.frequent {
            write!(out, " (P)")?;
        }

        for sense in &entry.senses {
            write!(out, "\t")?;
            self.write_pos(out, &sense.pos)?;
            self.write_list(out, Field::Gloss, &sense.glosses, GLOSS_SEPARATOR)?;
        }

        writeln!(out)
    }

    fn write_pos<W: WriteColor>(&self, out: &mut W, pos: &[String]) -> io::Result<()> {
        if pos.is_empty() {
            return Ok(());
        }
        out.set_color(&self.palette.label)?;
        write!(out, "({})", pos.join(","))?;
        out.reset()?;
        write!(out, " ")
    }

    fn write_list<W: WriteColor>(
        &self,
        out: &mut W,
        field: Field,
        values: &[String],
        separator: &str,
    ) -> io::Result<()> {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                write!(out, "{}", separator)?;
            }
            match (field, self.romaji) {
                (Field::Reading, Some(style)) => {
                    out.set_color(self.palette.for_field(field))?;
                    write!(out, "{}", style.convert(value))?;
                    out.reset()?;
                }
                _ => self.write_highlighted(out, field, value)?,
            }
        }
        Ok(())
    }

    /// Write a value, marking spans matched by the winning condition
    fn write_highlighted<W: WriteColor>(&self, out: &mut W, field: Field, text: &str) -> io::Result<()> {
        let base = self.palette.for_field(field);
        let mut last = 0;

        if let Some(regex) = self.highlight.as_ref().filter(|_| field == self.field) {
            for m in regex.find_iter(text) {
                if m.start() == m.end() {
                    continue;
                }
                out.set_color(base)?;
                write!(out, "{}", &text[last..m.start()])?;
                out.set_color(&self.palette.highlight)?;
                write!(out, "{}", m.as_str())?;
                last = m.end();
            }
        }

        out.set_color(base)?;
        write!(out, "{}", &text[last..])?;
        out.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::Sense;
    use crate::query::types::Extent;
    use termcolor::{Ansi, NoColor};

    fn neko() -> Entry {
        Entry {
            id: 1,
            kanji: vec!["猫".to_string()],
            readings: vec!["ねこ".to_string()],
            senses: vec![
                Sense {
                    pos: vec!["n".to_string()],
                    glosses: vec!["cat".to_string()],
                },
                Sense {
                    pos: vec![],
                    glosses: vec!["geisha".to_string(), "shamisen player".to_string()],
                },
            ],
            frequent: true,
        }
    }

    fn render(condition: &Condition, options: &PresentOptions) -> String {
        let entry = neko();
        let mut out = NoColor::new(Vec::new());
        write_entries(&mut out, &[&entry], condition, options).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    fn gloss_whole(query: &str) -> Condition {
        Condition::new(Field::Gloss, Extent::Whole, false, query, false, false)
    }

    #[test]
    fn test_tab_line() {
        let text = render(&gloss_whole("cat"), &PresentOptions::default());
        assert_eq!(text, "猫\tねこ (P)\t(n) cat\tgeisha; shamisen player\n");
    }

    #[test]
    fn test_human_block() {
        let options = PresentOptions {
            mode: OutputMode::Human,
            ..PresentOptions::default()
        };
        let text = render(&gloss_whole("cat"), &options);
        assert_eq!(
            text,
            "猫 (P)\n  ねこ\n  1. (n) cat\n  2. geisha; shamisen player\n"
        );
    }

    #[test]
    fn test_romaji_readings() {
        let options = PresentOptions {
            romaji: Some(RomajiStyle::Hepburn),
            ..PresentOptions::default()
        };
        let text = render(&gloss_whole("cat"), &options);
        assert!(text.starts_with("猫\tneko (P)\t"));
    }

    #[test]
    fn test_highlight_marks_winning_field_only() {
        let entry = neko();
        let condition = Condition::new(Field::Gloss, Extent::Partial, false, "sha", false, false);
        let mut out = Ansi::new(Vec::new());
        write_entries(&mut out, &[&entry], &condition, &PresentOptions::default()).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();

        // two gloss hits: "geisha" and "shamisen"
        assert_eq!(text.matches("\x1b[4m").count(), 2);
    }
}
