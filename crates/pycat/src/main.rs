//! Syntax-highlighting `cat` for Python files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p pycat -- script.py
//! cargo run -p pycat -- script.py --theme dark.yaml -n
//! ```
//!
//! Prints the file to stdout with ANSI colors from the built-in palette, or
//! from a YAML theme passed via `--theme`. `-n` prefixes line numbers.

use crossterm::{
    queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
};
use pyntax::{CategorySpan, Document, highlight_all};
use pyntax_theme::{Style, Theme};
use std::{
    env, fs,
    io::{self, Write},
    path::PathBuf,
    process,
};

struct Args {
    file: PathBuf,
    theme: Option<PathBuf>,
    numbers: bool,
}

fn parse_args() -> Option<Args> {
    let mut args = env::args().skip(1);
    let mut file = None;
    let mut theme = None;
    let mut numbers = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--theme" => theme = Some(PathBuf::from(args.next()?)),
            "-n" | "--numbers" => numbers = true,
            _ if file.is_none() => file = Some(PathBuf::from(arg)),
            _ => return None,
        }
    }

    Some(Args {
        file: file?,
        theme,
        numbers,
    })
}

fn terminal_color(color: pyntax_theme::Color) -> Option<Color> {
    match color {
        pyntax_theme::Color::Default => None,
        pyntax_theme::Color::Black => Some(Color::Black),
        pyntax_theme::Color::Red => Some(Color::DarkRed),
        pyntax_theme::Color::Green => Some(Color::DarkGreen),
        pyntax_theme::Color::Yellow => Some(Color::DarkYellow),
        pyntax_theme::Color::Blue => Some(Color::DarkBlue),
        pyntax_theme::Color::Magenta => Some(Color::DarkMagenta),
        pyntax_theme::Color::Cyan => Some(Color::DarkCyan),
        pyntax_theme::Color::White => Some(Color::Grey),
        pyntax_theme::Color::BrightBlack => Some(Color::DarkGrey),
        pyntax_theme::Color::BrightRed => Some(Color::Red),
        pyntax_theme::Color::BrightGreen => Some(Color::Green),
        pyntax_theme::Color::BrightYellow => Some(Color::Yellow),
        pyntax_theme::Color::BrightBlue => Some(Color::Blue),
        pyntax_theme::Color::BrightMagenta => Some(Color::Magenta),
        pyntax_theme::Color::BrightCyan => Some(Color::Cyan),
        pyntax_theme::Color::BrightWhite => Some(Color::White),
        pyntax_theme::Color::Rgb(r, g, b) => Some(Color::Rgb { r, g, b }),
    }
}

fn print_styled(out: &mut impl Write, text: &str, style: Style) -> io::Result<()> {
    if style.is_default() {
        return queue!(out, Print(text));
    }
    if let Some(color) = terminal_color(style.fg) {
        queue!(out, SetForegroundColor(color))?;
    }
    if let Some(color) = terminal_color(style.bg) {
        queue!(out, SetBackgroundColor(color))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    queue!(out, Print(text), ResetColor, SetAttribute(Attribute::Reset))
}

fn print_line(
    out: &mut impl Write,
    text: &str,
    spans: &[CategorySpan],
    theme: &Theme,
) -> io::Result<()> {
    // Spans carry character offsets; map them back to byte offsets once.
    let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    offsets.push(text.len());
    let char_count = offsets.len() - 1;

    let mut cursor = 0;
    for span in spans {
        if span.span.start > cursor {
            queue!(out, Print(&text[offsets[cursor]..offsets[span.span.start]]))?;
        }
        let slice = &text[offsets[span.span.start]..offsets[span.span.end]];
        print_styled(out, slice, theme.style_for(span.category))?;
        cursor = span.span.end;
    }
    if cursor < char_count {
        queue!(out, Print(&text[offsets[cursor]..]))?;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let Some(args) = parse_args() else {
        let name = env::args().next().unwrap_or_else(|| "pycat".to_string());
        eprintln!("usage: {name} <file.py> [--theme <theme.yaml>] [-n]");
        process::exit(2);
    };

    let theme = match &args.theme {
        Some(path) => match Theme::load(path) {
            Ok(theme) => theme,
            Err(err) => {
                eprintln!("pycat: cannot load theme {}: {err}", path.display());
                process::exit(1);
            }
        },
        None => Theme::default(),
    };

    let source = match fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("pycat: cannot read {}: {err}", args.file.display());
            process::exit(1);
        }
    };

    let document = Document::from_text(&source);
    let lines = highlight_all(&document);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, spans) in lines.iter().enumerate() {
        let text = document.line_text(index).unwrap_or_default();
        if args.numbers {
            queue!(
                out,
                SetForegroundColor(Color::DarkGrey),
                Print(format!("{:>6}  ", index + 1)),
                ResetColor
            )?;
        }
        print_line(&mut out, &text, spans, &theme)?;
        if index + 1 < lines.len() {
            queue!(out, Print("\n"))?;
        }
    }
    out.flush()
}
