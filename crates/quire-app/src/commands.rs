//! Subcommand implementations.
//!
//! Each command writes its user-facing output to `out`; diagnostics go
//! through `tracing`.

use std::io::Write;
use std::path::Path;

use quire_common::{PixelSize, QuireError, ThemeError};
use quire_config::SessionDirectory;
use quire_renderer::ThemeRenderer;
use quire_theme::{Theme, ThemeData, ThemeLibrary};

use crate::cli::{Args, Command};

/// Where themes and sessions live for this invocation.
pub struct Context {
    pub library: ThemeLibrary,
    pub sessions: SessionDirectory,
}

impl Context {
    /// Platform directories, overridden by command-line flags.
    pub fn from_args(args: &Args) -> quire_common::Result<Self> {
        let library = match &args.themes_dir {
            Some(dir) => ThemeLibrary::new(dir),
            None => ThemeLibrary::open_default()?,
        };
        let sessions = match &args.sessions_dir {
            Some(dir) => SessionDirectory::new(dir, dir.join("session.toml")),
            None => SessionDirectory::new(
                quire_config::paths::sessions_dir()?,
                quire_config::paths::default_session_file()?,
            ),
        };
        Ok(Self { library, sessions })
    }
}

pub fn run(
    command: &Command,
    ctx: &mut Context,
    out: &mut impl Write,
) -> quire_common::Result<()> {
    match command {
        Command::List => list(ctx, out),
        Command::Show { name } => show(ctx, name, out),
        Command::New { name, background } => create(
            ctx,
            name.as_deref().unwrap_or_default(),
            background.as_deref(),
            out,
        ),
        Command::Render { name, size, output } => render(ctx, name, *size, output, out),
        Command::Rename { old, new } => rename(ctx, old, new, out),
        Command::Reconcile => reconcile(ctx, out),
    }
}

fn list(ctx: &Context, out: &mut impl Write) -> quire_common::Result<()> {
    for name in ctx.library.list() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn require(ctx: &Context, name: &str) -> quire_common::Result<()> {
    if ctx.library.exists(name) {
        Ok(())
    } else {
        Err(ThemeError::NotFound(name.to_string()).into())
    }
}

fn show(ctx: &Context, name: &str, out: &mut impl Write) -> quire_common::Result<()> {
    require(ctx, name)?;
    write!(out, "{}", describe(&ctx.library.load(name)))?;
    Ok(())
}

fn create(
    ctx: &Context,
    name: &str,
    background: Option<&Path>,
    out: &mut impl Write,
) -> quire_common::Result<()> {
    let mut theme = Theme::create(&ctx.library, name)?;
    if let Some(path) = background {
        let path = path.to_str().ok_or_else(|| {
            QuireError::Other(format!("background path is not UTF-8: {}", path.display()))
        })?;
        theme.set_background_image(path);
        theme.save_changes()?;
    }
    writeln!(out, "{}", theme.name())?;
    Ok(())
}

fn render(
    ctx: &Context,
    name: &str,
    size: PixelSize,
    output: &Path,
    out: &mut impl Write,
) -> quire_common::Result<()> {
    require(ctx, name)?;
    let theme = ctx.library.load(name);
    let rect = ThemeRenderer::for_library(&ctx.library).render_to_file(&theme, size, output)?;
    writeln!(out, "{} ({size}, panel {rect})", output.display())?;
    Ok(())
}

fn rename(
    ctx: &mut Context,
    old: &str,
    new: &str,
    out: &mut impl Write,
) -> quire_common::Result<()> {
    require(ctx, old)?;
    if old != new && ctx.library.exists(new) {
        return Err(ThemeError::AlreadyExists(new.to_string()).into());
    }
    let mut theme = Theme::open(&ctx.library, old);
    theme.set_name(new, &mut ctx.sessions)?;
    writeln!(out, "{old} -> {new}")?;
    Ok(())
}

fn reconcile(ctx: &Context, out: &mut impl Write) -> quire_common::Result<()> {
    let report = ctx.library.reconcile_backgrounds();
    writeln!(
        out,
        "imported {}, kept {}, removed {}",
        report.imported.len(),
        report.kept.len(),
        report.removed.len()
    )?;
    for name in &report.removed {
        writeln!(out, "  removed {name}")?;
    }
    Ok(())
}

/// Human-readable listing of every setting.
pub fn describe(theme: &ThemeData) -> String {
    let bg = &theme.background;
    let fg = &theme.foreground;
    let mut lines = vec![
        format!("name: {}", theme.name),
        format!("background: {:?} {}", bg.kind, bg.color.name()),
    ];
    if !bg.source_path.is_empty() {
        lines.push(format!("  picture: {}", bg.source_path));
    }
    if !bg.stored_image.is_empty() {
        lines.push(format!("  stored as: {}", bg.stored_image));
    }
    lines.push(format!(
        "foreground: {} opacity {}% width {} rounding {} margin {} padding {} {:?}",
        fg.color.name(),
        fg.opacity,
        fg.width,
        fg.rounding,
        fg.margin,
        fg.padding,
        fg.position
    ));
    lines.push(if theme.blur.enabled {
        format!("blur: radius {}", theme.blur.radius)
    } else {
        "blur: off".to_string()
    });
    lines.push(if theme.shadow.enabled {
        format!(
            "shadow: {} radius {} offset {}",
            theme.shadow.color.name(),
            theme.shadow.radius,
            theme.shadow.offset
        )
    } else {
        "shadow: off".to_string()
    });
    let font = &theme.text.font;
    lines.push(format!(
        "text: {} font \"{}\"{}{} misspelled {}",
        theme.text.color.name(),
        font,
        if font.is_bold() { " bold" } else { "" },
        if font.italic { " italic" } else { "" },
        theme.text.misspelled_color.name()
    ));
    let sp = &theme.spacings;
    lines.push(format!(
        "spacings: line {}% above {} below {} tab {} indent {}",
        sp.line_spacing,
        sp.above,
        sp.below,
        sp.tab_width,
        if sp.indent_first_line { "yes" } else { "no" }
    ));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
