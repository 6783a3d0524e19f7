//! `textcore` - pad, wrap, and frame text from the command line.
//!
//! Set `RUST_LOG=textcore=trace` to see layout decisions on stderr.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use console::Style;
use textcore::{
    reflow, Alignment, BorderStyle, FillPattern, LineCaps, MatchFinder, Measure, PadLine, Panel,
    ReflowOptions, Wrapping,
};
use tracing_subscriber::EnvFilter;

/// Fixed-width text layout for monospaced output
#[derive(Parser)]
#[command(name = "textcore")]
#[command(version)]
#[command(about = "Pad, wrap, and frame text into exact widths")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pad one line of text to a fixed width
    Pad(PadArgs),

    /// Word-wrap text into padded lines
    Reflow(ReflowArgs),

    /// Render a repeating character pattern
    Pattern(PatternArgs),

    /// Draw padded lines inside a border
    Panel(PanelArgs),

    /// Highlight regex matches in text
    Highlight(HighlightArgs),
}

#[derive(Args)]
struct PadArgs {
    /// Text to pad; `@` splits it into spaced segments
    text: String,

    /// Target width
    #[arg(short, long)]
    width: Option<usize>,

    /// Filler glyph
    #[arg(short, long)]
    glyph: Option<char>,

    /// Alignment: leading, center or trailing
    #[arg(short, long)]
    align: Option<Alignment>,

    /// Segment split marker
    #[arg(long = "split", value_name = "CHAR")]
    split_marker: Option<char>,

    /// Caps placed at both ends of the line
    #[arg(long, num_args = 2, value_names = ["LEADING", "TRAILING"])]
    caps: Option<Vec<String>>,

    /// Do not put a glyph between the caps and the filler
    #[arg(long)]
    tight_caps: bool,

    /// Do not put a glyph between the text and the filler
    #[arg(long)]
    tight_text: bool,

    /// Keep empty segments from doubled or edge split markers
    #[arg(long)]
    keep_empty: bool,

    /// Measure widths in terminal columns instead of chars
    #[arg(long)]
    columns: bool,

    /// YAML preset to start from; flags override it
    #[arg(long, value_name = "FILE")]
    preset: Option<PathBuf>,
}

#[derive(Args)]
struct ReflowArgs {
    /// Text to wrap; read from stdin when omitted
    text: Option<String>,

    /// Line width
    #[arg(short, long, default_value_t = 80)]
    width: usize,

    /// Keep at most this many lines
    #[arg(long)]
    max_lines: Option<usize>,

    /// Glyph padding each line to the width
    #[arg(long, default_value_t = ' ')]
    fill: char,

    /// Break long words with a hyphen
    #[arg(long)]
    hyphenate: bool,
}

#[derive(Args)]
struct PatternArgs {
    /// Pattern runs as CHAR:COUNT, e.g. `=:3 -:1`
    #[arg(required = true, value_parser = parse_run)]
    runs: Vec<(char, usize)>,

    /// Total characters to render
    #[arg(short = 'n', long, default_value_t = 80)]
    total: usize,
}

#[derive(Args)]
struct PanelArgs {
    /// Lines to place in the panel
    lines: Vec<String>,

    /// Inner width
    #[arg(short, long, default_value_t = 40)]
    width: usize,

    /// Border: none, ascii, light, heavy, double or rounded
    #[arg(long, default_value = "light")]
    border: BorderStyle,

    /// Alignment of each line
    #[arg(short, long, default_value = "leading")]
    align: Alignment,

    /// Title shown above the lines
    #[arg(long)]
    title: Option<String>,
}

#[derive(Args)]
struct HighlightArgs {
    /// Regular expression to highlight
    pattern: String,

    /// Text to search; read from stdin when omitted
    text: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let output = match cli.command {
        Commands::Pad(args) => pad(args)?,
        Commands::Reflow(args) => reflow_text(args)?,
        Commands::Pattern(args) => FillPattern::new(args.runs).render(args.total),
        Commands::Panel(args) => panel(args),
        Commands::Highlight(args) => highlight(args, &Style::new().black().on_yellow())?,
    };
    println!("{}", output);
    Ok(())
}

fn pad(args: PadArgs) -> Result<String> {
    let padder = padder_from_args(&args)?;
    tracing::debug!(width = padder.width, alignment = %padder.alignment, "padding line");
    Ok(padder.pad(&args.text))
}

fn padder_from_args(args: &PadArgs) -> Result<PadLine> {
    let mut padder = match &args.preset {
        Some(path) => PadLine::from_yaml_file(path)
            .with_context(|| format!("loading preset {}", path.display()))?,
        None => PadLine::new(80),
    };

    if let Some(width) = args.width {
        padder = padder.width(width);
    }
    if let Some(glyph) = args.glyph {
        padder = padder.glyph(glyph);
    }
    if let Some(alignment) = args.align {
        padder = padder.align(alignment);
    }
    if let Some(marker) = args.split_marker {
        padder = padder.split_marker(marker);
    }
    if let Some(caps) = &args.caps {
        let [leading, trailing] = caps.as_slice() else {
            bail!("--caps takes exactly two values");
        };
        padder = padder.caps(LineCaps::new(leading.as_str(), trailing.as_str()));
    }
    if args.tight_caps {
        padder.caps = padder.caps.map(|caps| caps.extra_spaces(false));
    }
    if args.tight_text {
        padder = padder.space_around_text(false);
    }
    if args.keep_empty {
        padder = padder.keep_empty_segments(true);
    }
    if args.columns {
        padder = padder.measure(Measure::Columns);
    }
    Ok(padder)
}

fn reflow_text(args: ReflowArgs) -> Result<String> {
    let text = text_or_stdin(args.text)?;
    let mut options = ReflowOptions::default().fill(args.fill);
    if let Some(max) = args.max_lines {
        options = options.max_lines(max);
    }
    if args.hyphenate {
        options = options.wrapping(Wrapping::Hyphenate);
    }
    Ok(reflow(&text, args.width, &options).join("\n"))
}

fn panel(args: PanelArgs) -> String {
    let mut panel = Panel::new(PadLine::new(args.width).align(args.align)).border(args.border);
    if let Some(title) = args.title {
        panel = panel.title(title);
    }
    panel.render(&args.lines).render()
}

fn highlight(args: HighlightArgs, style: &Style) -> Result<String> {
    let finder = MatchFinder::new(&args.pattern)
        .with_context(|| format!("compiling pattern {:?}", args.pattern))?;
    let text = text_or_stdin(args.text)?;

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let count = finder.apply(&text, |range, matched| {
        out.push_str(&text[last..range.start]);
        out.push_str(&style.apply_to(matched).to_string());
        last = range.end;
    });
    out.push_str(&text[last..]);

    tracing::info!(count, "highlighted matches");
    Ok(out)
}

fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading text from stdin")?;
            Ok(buf.trim_end_matches('\n').to_string())
        }
    }
}

/// Parse a `CHAR:COUNT` pattern run. The char may itself be `:`.
fn parse_run(s: &str) -> Result<(char, usize), String> {
    let (glyph, count) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected CHAR:COUNT, got '{s}'"))?;
    let mut chars = glyph.chars();
    let (Some(glyph), None) = (chars.next(), chars.next()) else {
        return Err(format!("expected a single char before ':', got '{glyph}'"));
    };
    let count = count
        .parse()
        .map_err(|_| format!("invalid count '{count}'"))?;
    Ok((glyph, count))
}
