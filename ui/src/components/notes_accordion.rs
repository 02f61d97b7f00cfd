use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// One collapsible note: a `## heading` and the markdown under it.
#[derive(Clone, Debug, PartialEq)]
struct Note {
    heading: String,
    body_html: String,
}

fn to_html(markdown: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    let mut out = String::new();
    html::push_html(&mut out, Parser::new_ext(markdown, opts));
    out
}

/// Split markdown on `## ` headings into (intro markdown, [(heading, body markdown)]).
fn split_notes(source: &str) -> (String, Vec<(String, String)>) {
    let mut intro = String::new();
    let mut notes: Vec<(String, String)> = Vec::new();

    for line in source.lines() {
        if let Some(heading) = line.strip_prefix("## ") {
            notes.push((heading.trim().to_string(), String::new()));
        } else if let Some((_, body)) = notes.last_mut() {
            body.push_str(line);
            body.push('\n');
        } else {
            intro.push_str(line);
            intro.push('\n');
        }
    }

    (intro, notes)
}

fn parse_notes(source: &str) -> (String, Vec<Note>) {
    let (intro, notes) = split_notes(source);
    let notes = notes
        .into_iter()
        .map(|(heading, body)| Note {
            heading,
            body_html: to_html(&body),
        })
        .collect();
    (to_html(&intro), notes)
}

/// Markdown notes as native `<details>` disclosures. The browser keeps the
/// open/closed state, so several notes can be open at once.
#[component]
pub fn NotesAccordion(source: &'static str) -> Element {
    let (intro_html, notes) = use_hook(|| parse_notes(source));

    rsx! {
        section { class: "notes",
            div { class: "notes-intro", dangerous_inner_html: intro_html }
            for note in notes {
                NoteItem { key: "{note.heading}", note }
            }
        }
    }
}

#[component]
fn NoteItem(note: Note) -> Element {
    rsx! {
        details { class: "note",
            summary { class: "note-heading", "{note.heading}" }
            div { class: "note-body", dangerous_inner_html: note.body_html }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_intro_and_sections() {
        let (intro, notes) = split_notes("Hello\n\n## Parking\nFree.\n## Dress Code\nSemi-formal.\n");
        assert_eq!(intro, "Hello\n\n");
        assert_eq!(
            notes,
            vec![
                ("Parking".to_string(), "Free.\n".to_string()),
                ("Dress Code".to_string(), "Semi-formal.\n".to_string()),
            ]
        );
    }

    #[test]
    fn bundled_notes_have_three_sections() {
        let (_, notes) = parse_notes(include_str!("../../docs/notes.md"));
        let headings: Vec<_> = notes.iter().map(|n| n.heading.as_str()).collect();
        assert_eq!(headings, vec!["Parking", "Dress Code", "RSVP"]);
    }

    #[test]
    fn bundled_notes_never_link_out_of_the_router() {
        // A plain anchor reloads the page and drops the in-memory guest list.
        let (intro, notes) = parse_notes(include_str!("../../docs/notes.md"));
        assert!(!intro.contains("<a "));
        for note in &notes {
            assert!(!note.body_html.contains("<a "), "{} links out", note.heading);
        }
    }
}
