//! `mgrep -E <pattern> [-r] [-j <n>] [files...]`
//!
//! Exit codes: `0` some line matched, `1` no line matched, `2` the pattern
//! was malformed or a file couldn't be read.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser as _;

use mgrep::Regex;

mod cli;
mod walk;

struct FileResult {
    any_match: bool,
    lines: Vec<String>,
}

fn scan_lines<R: BufRead>(reader: R, re: &Regex, prefix: Option<&str>) -> io::Result<FileResult> {
    let mut any_match = false;
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if re.is_match(&line) {
            any_match = true;
            match prefix {
                Some(p) => lines.push(format!("{p}:{line}")),
                None => lines.push(line),
            }
        }
    }
    Ok(FileResult { any_match, lines })
}

fn scan_file(path: &Path, re: &Regex, prefix: Option<&str>) -> anyhow::Result<FileResult> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    scan_lines(io::BufReader::new(file), re, prefix)
        .with_context(|| format!("failed to read {}", path.display()))
}

/// Scans `files` using `jobs` worker threads, split into contiguous chunks
/// so output order always matches input order regardless of which chunk
/// finishes first.
fn scan_files(files: &[PathBuf], re: &Regex, prefixed: bool, jobs: usize) -> anyhow::Result<Vec<FileResult>> {
    let jobs = jobs.max(1).min(files.len().max(1));
    log::debug!("scanning {} file(s) with {} worker thread(s)", files.len(), jobs);
    if jobs <= 1 || files.len() <= 1 {
        return files
            .iter()
            .map(|path| {
                let prefix = prefixed.then(|| walk::display_path(path));
                scan_file(path, re, prefix.as_deref())
            })
            .collect();
    }

    let chunk_size = files.len().div_ceil(jobs);
    let chunks: Vec<&[PathBuf]> = files.chunks(chunk_size).collect();
    std::thread::scope(|scope| -> anyhow::Result<Vec<FileResult>> {
        let handles: Vec<_> = chunks
            .into_iter()
            .map(|chunk| {
                scope.spawn(move || -> anyhow::Result<Vec<FileResult>> {
                    chunk
                        .iter()
                        .map(|path| {
                            let prefix = prefixed.then(|| walk::display_path(path));
                            scan_file(path, re, prefix.as_deref())
                        })
                        .collect()
                })
            })
            .collect();
        let mut results = Vec::with_capacity(files.len());
        for handle in handles {
            results.extend(handle.join().expect("worker thread panicked")?);
        }
        Ok(results)
    })
}

fn run() -> anyhow::Result<bool> {
    let args = cli::Cli::parse();

    let re = Regex::new(&args.pattern)?;

    if args.paths.is_empty() {
        log::debug!("no paths given, reading stdin");
        let result = scan_lines(io::stdin().lock(), &re, None).context("failed to read stdin")?;
        print_lines(&result.lines)?;
        return Ok(result.any_match);
    }

    let files = walk::collect_files(&args.paths, args.recursive)?;
    let prefixed = files.len() > 1 || args.recursive;
    let results = scan_files(&files, &re, prefixed, args.jobs)?;

    let mut any_match = false;
    for result in &results {
        any_match |= result.any_match;
        print_lines(&result.lines)?;
    }
    Ok(any_match)
}

fn print_lines(lines: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for line in lines {
        writeln!(handle, "{line}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(true) => ExitCode::from(0),
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("mgrep: {err:#}");
            ExitCode::from(2)
        }
    }
}
