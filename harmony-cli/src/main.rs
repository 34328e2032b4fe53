//! Command line front end: analyse chords typed at the prompt, or run
//! `harmony-cli demo` for two bundled progressions.
use std::{
    error::Error,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use harmony::{
    analysis::{parse_chords, Analysis, AnalysisError, AnalysisSettings},
    primitives::Key,
};

/// Read lines until a blank one (or end of input).
fn read_block(
    input: &mut impl BufRead,
    prompt: &str,
) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(lines);
        }
        match line.trim() {
            "" => return Ok(lines),
            text => lines.push(text.to_string()),
        }
    }
}

fn interactive() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    println!("Enter chords (C, Am, B°), one per line. Empty line to finish.");
    let chords = parse_chords(&read_block(&mut input, "chord> ")?)?;
    print!("Key (empty to detect): ");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let key = match line.trim() {
        "" => None,
        text => Some(text.parse::<Key>()?),
    };
    log::debug!("chords: {:?}, key: {:?}", chords, key);
    let analysis = Analysis::run(chords, &AnalysisSettings::new(key))?;
    print!("{}", analysis);
    Ok(())
}

fn demo() -> Result<(), Box<dyn Error>> {
    let songs: [(&str, &[&str], Option<&str>); 2] = [
        ("No Woman No Cry", &["C", "G", "Am", "F"], None),
        ("Creep", &["G", "B", "C", "Cm"], Some("G")),
    ];
    for (title, chords, key) in songs {
        println!("Analysing {}", title);
        let key = key.map(|k| k.parse::<Key>()).transpose()?;
        let analysis =
            Analysis::run(parse_chords(chords)?, &AnalysisSettings::new(key))?;
        println!("{}", analysis);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let result = match std::env::args().nth(1).as_deref() {
        None => interactive(),
        Some("demo") => demo(),
        Some(other) => Err(format!(
            "Unknown command: `{}`. Usage: harmony-cli [demo]",
            other
        )
        .into()),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<AnalysisError>() {
                Some(AnalysisError::NoCandidateKeys) => {
                    println!("No key found for these chords.")
                }
                _ => eprintln!("Error: {}", err),
            }
            ExitCode::FAILURE
        }
    }
}
