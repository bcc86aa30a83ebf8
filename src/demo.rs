use include_dir::{include_dir, Dir};

use crate::deck::TextDeck;
use crate::error::{Error, Result};
use crate::notes::NotesDocument;

static DEMO_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/resources/demo");

const DECK_FILE: &str = "deck.md";
const NOTES_FILE: &str = "notes.md";

fn demo_text(name: &'static str) -> Result<&'static str> {
    DEMO_DIR
        .get_file(name)
        .and_then(|f| f.contents_utf8())
        .ok_or(Error::MissingDemo(name))
}

/// Bundled sample deck and notes for trying the presenter out.
pub fn load(separator: &str) -> Result<(TextDeck, NotesDocument)> {
    let deck = TextDeck::parse("demo deck", demo_text(DECK_FILE)?, separator);
    let notes = NotesDocument::build(demo_text(NOTES_FILE)?);
    Ok((deck, notes))
}
