//! Subcommand handlers.
//!
//! Handlers write plain text lines to `out` so they can run against any
//! writer, including an in-memory buffer in tests.

use crate::cli::{Commands, ListArgs, NoteArgs, NoteCommand, TagCommand};
use anyhow::{bail, Result};
use std::io::Write;
use tagnote_core::{DurableSlot, IdSource, Note, NoteQuery, Notebook, RawNoteData, Tag};

pub fn run<S, I, W>(notebook: &mut Notebook<S, I>, command: Commands, out: &mut W) -> Result<()>
where
    S: DurableSlot,
    I: IdSource,
    W: Write,
{
    match command {
        Commands::Tags => {
            for tag in notebook.list_tags() {
                writeln!(out, "{}\t{}", tag.id, tag.label)?;
            }
        }
        Commands::Tag(command) => run_tag(notebook, command, out)?,
        Commands::Note(command) => run_note(notebook, command, out)?,
        Commands::List(args) => list_notes(notebook, args, out)?,
    }
    Ok(())
}

fn run_tag<S: DurableSlot, I: IdSource, W: Write>(
    notebook: &mut Notebook<S, I>,
    command: TagCommand,
    out: &mut W,
) -> Result<()> {
    match command {
        TagCommand::Add { label } => {
            let tag = notebook.create_tag(label)?;
            writeln!(out, "{}", tag.id)?;
        }
        TagCommand::Rename { id, label } => {
            if !notebook.rename_tag(&id, label)? {
                writeln!(out, "no tag with id {id}")?;
            }
        }
        TagCommand::Rm { id } => {
            if !notebook.delete_tag(&id)? {
                writeln!(out, "no tag with id {id}")?;
            }
        }
    }
    Ok(())
}

fn run_note<S: DurableSlot, I: IdSource, W: Write>(
    notebook: &mut Notebook<S, I>,
    command: NoteCommand,
    out: &mut W,
) -> Result<()> {
    match command {
        NoteCommand::Add(NoteArgs {
            title,
            markdown,
            tags,
        }) => {
            let data = RawNoteData {
                title,
                markdown,
                tag_ids: known_tag_ids(notebook, tags)?,
            };
            let id = notebook.create_note(data)?;
            writeln!(out, "{id}")?;
        }
        NoteCommand::Edit { id, fields } => {
            let Some(current) = notebook.raw_notes().iter().find(|note| note.id == id) else {
                writeln!(out, "no note with id {id}")?;
                return Ok(());
            };
            let mut data = current.data.clone();
            if let Some(title) = fields.title {
                data.title = title;
            }
            if let Some(markdown) = fields.markdown {
                data.markdown = markdown;
            }
            // Only ids named on this edit are checked; kept ids may already dangle.
            if fields.clear_tags {
                data.tag_ids.clear();
            } else if let Some(tags) = fields.tags {
                data.tag_ids = known_tag_ids(notebook, tags)?;
            }
            notebook.update_note(&id, data)?;
        }
        NoteCommand::Show { id } => match notebook.get_note(&id) {
            Some(note) => {
                writeln!(out, "{}", note.title)?;
                writeln!(out, "tags: {}", tag_labels(note))?;
                writeln!(out)?;
                writeln!(out, "{}", note.markdown)?;
            }
            None => writeln!(out, "no note with id {id}")?,
        },
        NoteCommand::Rm { id } => {
            if !notebook.delete_note(&id)? {
                writeln!(out, "no note with id {id}")?;
            }
        }
    }
    Ok(())
}

fn list_notes<S: DurableSlot, I: IdSource, W: Write>(
    notebook: &Notebook<S, I>,
    args: ListArgs,
    out: &mut W,
) -> Result<()> {
    let mut query = NoteQuery::new().with_title(args.title);
    for wanted in args.tags {
        // A label shared by several tags requires all of them.
        let matching: Vec<Tag> = notebook
            .list_tags()
            .iter()
            .filter(|tag| tag.id == wanted || tag.label == wanted)
            .cloned()
            .collect();
        if matching.is_empty() {
            // Unknown tags stay in the query by id so they match nothing.
            query = query.with_tag(Tag::new(wanted.clone(), wanted));
        }
        for tag in matching {
            query = query.with_tag(tag);
        }
    }

    for note in notebook.filter_notes(&query) {
        writeln!(out, "{}\t{}\t[{}]", note.id, note.title, tag_labels(&note))?;
    }
    Ok(())
}

/// Rejects tag ids the notebook does not know, so notes never start out
/// with dangling references.
fn known_tag_ids<S: DurableSlot, I: IdSource>(
    notebook: &Notebook<S, I>,
    ids: Vec<String>,
) -> Result<Vec<String>> {
    for id in &ids {
        if notebook.get_tag(id).is_none() {
            bail!("unknown tag id `{id}`");
        }
    }
    Ok(ids)
}

fn tag_labels(note: &Note) -> String {
    note.tags
        .iter()
        .map(|tag| tag.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::cli::{Commands, ListArgs, NoteArgs, NoteCommand, NoteEditArgs, TagCommand};
    use tagnote_core::{DurableSlot, MemorySlot, Notebook, NotebookConfig, SequentialIdSource};

    fn notebook() -> Notebook<MemorySlot, SequentialIdSource> {
        Notebook::open_with(
            MemorySlot::default(),
            SequentialIdSource::new("id"),
            NotebookConfig::default(),
        )
        .unwrap()
    }

    fn exec(book: &mut Notebook<MemorySlot, SequentialIdSource>, command: Commands) -> String {
        let mut out = Vec::new();
        run(book, command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn add_note(title: &str, tags: &[&str]) -> Commands {
        Commands::Note(NoteCommand::Add(NoteArgs {
            title: title.to_string(),
            markdown: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }))
    }

    #[test]
    fn list_filters_by_label_and_title() {
        let mut book = notebook();
        let work = exec(
            &mut book,
            Commands::Tag(TagCommand::Add {
                label: "work".to_string(),
            }),
        );
        assert_eq!(work, "id1\n");
        exec(&mut book, add_note("Plan Q1", &["id1"]));
        exec(&mut book, add_note("Plan trip", &[]));

        let listed = exec(
            &mut book,
            Commands::List(ListArgs {
                title: "plan".to_string(),
                tags: vec!["work".to_string()],
            }),
        );
        assert_eq!(listed, "id2\tPlan Q1\t[work]\n");
    }

    #[test]
    fn note_add_rejects_unknown_tag() {
        let mut book = notebook();
        let mut out = Vec::new();
        let err = run(&mut book, add_note("x", &["nope"]), &mut out).unwrap_err();
        assert!(err.to_string().contains("nope"));
        assert!(book.list_notes().is_empty());
    }

    #[test]
    fn edit_keeps_omitted_fields() {
        let mut book = notebook();
        exec(
            &mut book,
            Commands::Tag(TagCommand::Add {
                label: "home".to_string(),
            }),
        );
        exec(&mut book, add_note("Groceries", &["id1"]));
        exec(
            &mut book,
            Commands::Note(NoteCommand::Edit {
                id: "id2".to_string(),
                fields: NoteEditArgs {
                    title: None,
                    markdown: Some("- milk".to_string()),
                    tags: None,
                    clear_tags: false,
                },
            }),
        );

        let note = book.get_note("id2").unwrap();
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.markdown, "- milk");
        assert_eq!(note.tags.len(), 1);
    }

    #[test]
    fn edit_tolerates_dangling_ids_it_does_not_touch() {
        let mut slot = MemorySlot::default();
        slot.write_all(&[(
            "NOTES",
            r#"[{"id":"n1","title":"Old","markdown":"","tagIds":["gone"]}]"#.to_string(),
        )])
        .unwrap();
        let mut book = Notebook::open_with(
            slot,
            SequentialIdSource::new("id"),
            NotebookConfig::default(),
        )
        .unwrap();

        exec(
            &mut book,
            Commands::Note(NoteCommand::Edit {
                id: "n1".to_string(),
                fields: NoteEditArgs {
                    title: Some("New".to_string()),
                    markdown: None,
                    tags: None,
                    clear_tags: false,
                },
            }),
        );
        assert_eq!(book.raw_notes()[0].data.title, "New");
        assert_eq!(book.raw_notes()[0].data.tag_ids, vec!["gone".to_string()]);

        let mut out = Vec::new();
        let retag = Commands::Note(NoteCommand::Edit {
            id: "n1".to_string(),
            fields: NoteEditArgs {
                title: None,
                markdown: None,
                tags: Some(vec!["gone".to_string()]),
                clear_tags: false,
            },
        });
        assert!(run(&mut book, retag, &mut out).is_err());
    }

    #[test]
    fn list_by_shared_label_requires_every_tag_with_it() {
        let mut book = notebook();
        for _ in 0..2 {
            exec(
                &mut book,
                Commands::Tag(TagCommand::Add {
                    label: "todo".to_string(),
                }),
            );
        }
        exec(&mut book, add_note("first only", &["id1"]));
        exec(&mut book, add_note("second only", &["id2"]));
        exec(&mut book, add_note("both", &["id1", "id2"]));

        let listed = exec(
            &mut book,
            Commands::List(ListArgs {
                title: String::new(),
                tags: vec!["todo".to_string()],
            }),
        );
        assert_eq!(listed, "id5\tboth\t[todo, todo]\n");

        let by_id = exec(
            &mut book,
            Commands::List(ListArgs {
                title: String::new(),
                tags: vec!["id2".to_string()],
            }),
        );
        assert_eq!(by_id, "id4\tsecond only\t[todo]\nid5\tboth\t[todo, todo]\n");
    }

    #[test]
    fn tag_rm_reports_missing_ids() {
        let mut book = notebook();
        let out = exec(
            &mut book,
            Commands::Tag(TagCommand::Rm {
                id: "ghost".to_string(),
            }),
        );
        assert_eq!(out, "no tag with id ghost\n");
    }
}
