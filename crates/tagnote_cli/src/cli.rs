use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tagged notes kept in a local SQLite file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database file holding the notes and tags.
    #[arg(long, env = "TAGNOTE_DB", default_value = "tagnote.sqlite3", global = true)]
    pub db: PathBuf,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "TAGNOTE_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error. Defaults to the build mode's level.
    #[arg(long, env = "TAGNOTE_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all tags.
    Tags,
    /// Create, rename or delete a tag.
    #[command(subcommand)]
    Tag(TagCommand),
    /// Create, edit, show or delete a note.
    #[command(subcommand)]
    Note(NoteCommand),
    /// List notes, optionally filtered by title and tags.
    List(ListArgs),
}

#[derive(Subcommand, Debug)]
pub enum TagCommand {
    /// Create a tag and print its id.
    Add { label: String },
    /// Change a tag's label.
    Rename { id: String, label: String },
    /// Delete a tag and detach it from every note.
    Rm { id: String },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommand {
    /// Create a note and print its id.
    Add(NoteArgs),
    /// Replace the given fields of a note; omitted fields keep their value.
    Edit {
        id: String,
        #[command(flatten)]
        fields: NoteEditArgs,
    },
    /// Print one note with its tags.
    Show { id: String },
    /// Delete a note.
    Rm { id: String },
}

#[derive(Args, Debug)]
pub struct NoteArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long, default_value = "")]
    pub markdown: String,

    /// Tag id to attach; repeat for several.
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Args, Debug)]
pub struct NoteEditArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub markdown: Option<String>,

    /// Replaces the whole tag list; repeat for several.
    #[arg(long = "tag")]
    pub tags: Option<Vec<String>>,

    /// Detach every tag.
    #[arg(long, conflicts_with = "tags")]
    pub clear_tags: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive title substring.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Required tag, by id or label; a label shared by several tags requires
    /// all of them. Repeat to require several.
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}
