use std::path::PathBuf;

use clap::{Parser, Subcommand};
use quire_common::PixelSize;

/// Quire: manage and preview writing-surface themes.
#[derive(Parser, Debug)]
#[command(name = "quire", version, about)]
pub struct Args {
    /// Themes directory override.
    #[arg(long, global = true)]
    pub themes_dir: Option<PathBuf>,

    /// Sessions directory override.
    #[arg(long, global = true)]
    pub sessions_dir: Option<PathBuf>,

    /// Log level override (debug, info, warn, error), or a full filter
    /// directive such as `quire_theme=debug`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List saved themes.
    List,

    /// Print every setting of a theme.
    Show { name: String },

    /// Create a theme. Without a name it is called "Untitled N".
    New {
        name: Option<String>,

        /// Background picture to import.
        #[arg(long)]
        background: Option<PathBuf>,
    },

    /// Render a theme preview to a PNG file.
    Render {
        name: String,

        /// Output size as WIDTHxHEIGHT.
        #[arg(long, default_value = "1280x800")]
        size: PixelSize,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Rename a theme and repoint sessions that use it.
    Rename { old: String, new: String },

    /// Re-import missing background copies and delete unused ones.
    Reconcile,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_arguments_parse() {
        let args = Args::try_parse_from([
            "quire",
            "render",
            "Night Sky",
            "--size",
            "640x480",
            "-o",
            "out.png",
            "--themes-dir",
            "/tmp/themes",
        ])
        .unwrap();

        assert_eq!(args.themes_dir, Some(PathBuf::from("/tmp/themes")));
        assert_eq!(
            args.command,
            Command::Render {
                name: "Night Sky".into(),
                size: PixelSize::new(640, 480),
                output: PathBuf::from("out.png"),
            }
        );
    }

    #[test]
    fn new_name_is_optional() {
        let args = Args::try_parse_from(["quire", "new"]).unwrap();
        assert_eq!(
            args.command,
            Command::New {
                name: None,
                background: None
            }
        );
    }

    #[test]
    fn bad_size_is_rejected() {
        let args = ["quire", "render", "A", "--size", "wide", "-o", "x.png"];
        assert!(Args::try_parse_from(args).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Args::try_parse_from(["quire"]).is_err());
    }
}
