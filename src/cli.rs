use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::model::{FontSize, PresentationDraft, SlideEditError};

/// Timed 20×N slide presentations: API server and terminal viewer.
#[derive(Debug, Parser)]
#[command(name = "pechakucha", version, about)]
pub struct Cli {
    /// Config file (defaults to the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API base URL, overrides [client] base_url
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the presentations API
    Serve {
        /// Listen address, overrides [server] bind_addr
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
    /// Print stored presentations
    List,
    /// Open the viewer on one presentation, or on the list
    Present {
        /// Presentation id; omit to pick from the list
        id: Option<String>,
        /// Use a built-in sample store instead of the API
        #[arg(long)]
        local: bool,
    },
    /// Create a presentation from a JSON file
    Seed {
        /// JSON document with title, slides, slideDuration, fontSize
        file: PathBuf,
    },
    /// Replace a presentation with the contents of a JSON file
    Update {
        id: String,
        /// JSON document with title, slides, slideDuration, fontSize
        file: PathBuf,
    },
    /// Change parts of a stored presentation
    Edit(EditArgs),
    /// Delete a presentation
    Delete { id: String },
}

/// Field and slide changes for `edit`. Slide numbers start at 1.
/// Removals run first, then the move, then added slides are appended.
#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("change")
        .required(true)
        .multiple(true)
        .args(["title", "duration", "font_size", "add_slides", "remove_slides", "move_slide"])
))]
pub struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    /// Seconds per slide: 20, 25, 30, 35, 40 or 45
    #[arg(long, value_name = "SECONDS")]
    pub duration: Option<u32>,

    /// small, medium, large or xlarge
    #[arg(long, value_name = "SIZE")]
    pub font_size: Option<FontSize>,

    /// Append a slide (repeatable)
    #[arg(long = "add-slide", value_name = "TEXT")]
    pub add_slides: Vec<String>,

    /// Remove slide N (repeatable)
    #[arg(long = "remove-slide", value_name = "N", value_parser = slide_number)]
    pub remove_slides: Vec<usize>,

    /// Move slide FROM to position TO
    #[arg(
        long = "move-slide",
        num_args = 2,
        value_names = ["FROM", "TO"],
        value_parser = slide_number
    )]
    pub move_slide: Option<Vec<usize>>,
}

impl EditArgs {
    /// Apply the requested changes to `draft`. Document rules (title, duration)
    /// are left to the store's validation.
    pub fn apply(&self, draft: &mut PresentationDraft) -> Result<(), SlideEditError> {
        if let Some(title) = &self.title {
            draft.title = title.clone();
        }
        if let Some(duration) = self.duration {
            draft.slide_duration = duration;
        }
        if let Some(font_size) = self.font_size {
            draft.font_size = font_size;
        }
        for number in &self.remove_slides {
            draft.remove_slide(number - 1)?;
        }
        if let Some([from, to]) = self.move_slide.as_deref() {
            draft.move_slide(from - 1, to - 1)?;
        }
        for text in &self.add_slides {
            draft.add_slide(text.clone());
        }
        Ok(())
    }
}

fn slide_number(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("'{raw}' is not a slide number (1, 2, ...)")),
    }
}
