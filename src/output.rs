//! Terminal rendering for search results and document term listings.

use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print ranked search results, best document first.
pub fn print_search_results(results: &[String], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    if results.is_empty() {
        writeln!(stdout, "no matching documents")?;
        return Ok(());
    }

    for (rank, name) in results.iter().enumerate() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{}.", rank + 1)?;
        stdout.reset()?;
        write!(stdout, " ")?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        writeln!(stdout, "{}", name)?;
        stdout.reset()?;
    }
    Ok(())
}

/// Print one document's keyword counts, highest first.
pub fn print_document_terms(name: &str, ranked: &[(&str, u32)], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(stdout, "{}", name)?;
    stdout.reset()?;

    if ranked.is_empty() {
        writeln!(stdout, "  (no keywords)")?;
        return Ok(());
    }
    for &(keyword, count) in ranked {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{:>6}", count)?;
        stdout.reset()?;
        writeln!(stdout, "  {}", keyword)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct SearchReport<'a> {
    keywords: [&'a str; 2],
    results: &'a [String],
}

/// Machine-readable search output: the keywords as given, ranked results.
pub fn print_search_json(keyword1: &str, keyword2: &str, results: &[String]) -> io::Result<()> {
    let report = SearchReport {
        keywords: [keyword1, keyword2],
        results,
    };
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;
    Ok(())
}

#[derive(Serialize)]
struct TermsReport<'a> {
    document: &'a str,
    terms: Vec<TermCount<'a>>,
}

#[derive(Serialize)]
struct TermCount<'a> {
    keyword: &'a str,
    count: u32,
}

/// Machine-readable document term listing.
pub fn print_terms_json(document: &str, ranked: &[(&str, u32)]) -> io::Result<()> {
    let report = TermsReport {
        document,
        terms: ranked
            .iter()
            .map(|&(keyword, count)| TermCount { keyword, count })
            .collect(),
    };
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;
    Ok(())
}
