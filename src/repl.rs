//! Interactive read-eval-print loop over stdin/stdout.

use anyhow::Context;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::session::{BANNER, FAREWELL, Session, Step};

const PROMPT: &str = "\nYou: ";

/// What a single `readline` call produced.
#[derive(Debug, PartialEq, Eq)]
enum ReadOutcome {
    Line(String),
    /// Ctrl-C or Ctrl-D. Ends the session like an exit keyword.
    Closed,
}

fn read_outcome(read: Result<String, ReadlineError>) -> Result<ReadOutcome, ReadlineError> {
    match read {
        Ok(line) => Ok(ReadOutcome::Line(line)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(ReadOutcome::Closed),
        Err(e) => Err(e),
    }
}

/// Drive `session` from the terminal until an exit keyword, Ctrl-C or Ctrl-D.
///
/// A provider failure ends the loop and is returned to the caller.
pub async fn run(session: &mut Session) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new().context("failed to initialise line editor")?;
    println!("{BANNER}");

    loop {
        let line = match read_outcome(editor.readline(PROMPT)).context("failed to read input")? {
            ReadOutcome::Line(line) => line,
            ReadOutcome::Closed => {
                println!("{FAREWELL}");
                return Ok(());
            }
        };

        if !line.trim().is_empty() {
            // History lives only as long as the editor.
            let _ = editor.add_history_entry(line.as_str());
        }

        match session.handle_line(&line).await? {
            Step::Reply(response) => println!("\n{response}"),
            Step::Skip => {}
            Step::Exit(farewell) => {
                println!("{farewell}");
                return Ok(());
            }
        }
    }
}
