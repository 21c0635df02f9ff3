//! Output formatting for query results

use crate::index::stats::IndexStats;
use memchr::memmem;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print the matches for one query to stdout, highlighting every occurrence
pub fn print_matches<M: AsRef<[u8]>>(
    query: &str,
    matches: &[M],
    heading: bool,
    choice: ColorChoice,
) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    write_matches(&mut stdout, query, matches, heading)
}

/// Print `query:count` to stdout
pub fn print_count(query: &str, count: usize, choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    write_count(&mut stdout, query, count)
}

/// Print index statistics to stdout
pub fn print_stats(stats: &IndexStats) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", stats)
}

/// Print index statistics to stdout as pretty JSON
pub fn print_stats_json(stats: &IndexStats) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}

pub fn write_matches<W: WriteColor, M: AsRef<[u8]>>(
    out: &mut W,
    query: &str,
    matches: &[M],
    heading: bool,
) -> io::Result<()> {
    if heading {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        writeln!(out, "{}", query)?;
        out.reset()?;
    }

    for line in matches {
        write_match_line(out, line.as_ref(), query.as_bytes())?;
    }

    Ok(())
}

pub fn write_count<W: WriteColor>(out: &mut W, query: &str, count: usize) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    write!(out, "{}", query)?;
    out.reset()?;
    write!(out, ":")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    writeln!(out, "{}", count)?;
    out.reset()
}

/// Write one matching line with each non-overlapping occurrence highlighted.
/// Lines are written as raw bytes.
fn write_match_line<W: WriteColor>(out: &mut W, line: &[u8], needle: &[u8]) -> io::Result<()> {
    let mut written = 0;

    if !needle.is_empty() {
        for start in memmem::find_iter(line, needle) {
            out.write_all(&line[written..start])?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            out.write_all(&line[start..start + needle.len()])?;
            out.reset()?;
            written = start + needle.len();
        }
    }

    out.write_all(&line[written..])?;
    writeln!(out)
}
