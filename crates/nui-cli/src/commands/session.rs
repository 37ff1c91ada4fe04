//! Session command
//!
//! Usage: nui session [--file <PATH>] [--keywords <FILE>]
//!
//! Reads one utterance per stdin line, prints the outcome and a status line
//! for each, and prints the final document text at end of input.

use clap::Args;
use nui_core::schema::{EVENT_END_ERROR, OP_EDITOR_SESSION};
use nui_core::{
    log_op_end, log_op_start, save_as_path, Command, CommandInterpreter, EditorSession, Outcome,
    Progress,
};
use nui_store::FsDocumentStore;
use std::cell::RefCell;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Document to work on; when missing it is created, with a `.txt`
    /// extension, by the first save
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// YAML keyword table (default: built-in Spanish table)
    #[arg(short, long)]
    pub keywords: Option<PathBuf>,
}

/// Execute session command
pub fn execute(args: SessionArgs) -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    log_op_start!(OP_EDITOR_SESSION, file = ?args.file);

    match run(args) {
        Ok(utterances) => {
            log_op_end!(
                OP_EDITOR_SESSION,
                duration_ms = started.elapsed().as_millis() as u64,
                utterances = utterances
            );
            Ok(())
        }
        Err(err) => {
            tracing::error!(
                component = module_path!(),
                op = OP_EDITOR_SESSION,
                event = EVENT_END_ERROR,
                duration_ms = started.elapsed().as_millis() as u64,
                error = %err,
            );
            Err(err)
        }
    }
}

/// Drive the session to end of input; returns the number of lines read
fn run(args: SessionArgs) -> Result<u64, Box<dyn std::error::Error>> {
    let table = super::load_table(args.keywords.as_deref())?;
    let session = Rc::new(RefCell::new(EditorSession::new(FsDocumentStore::new())));

    if let Some(path) = args.file {
        if path.exists() {
            session.borrow_mut().open(&path)?;
        } else {
            session
                .borrow_mut()
                .document_mut()
                .set_current_file(Some(save_as_path(&path)));
        }
    }

    let mut interpreter = CommandInterpreter::with_table(table);
    interpreter.add_listener(session.clone());

    let mut utterances = 0u64;
    for line in io::stdin().lock().lines() {
        let line = line?;
        utterances += 1;
        let outcome = interpreter.process_input(line.as_str())?;
        let session = session.borrow();
        println!("{} | {}", super::outcome_line(&outcome), status_line(&session, &outcome));
    }

    let session = session.borrow();
    let text = session.document().text();
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }

    Ok(utterances)
}

/// File commands report their progress; everything else reports stats
fn status_line(session: &EditorSession, outcome: &Outcome) -> String {
    let file_command = matches!(
        outcome.event().map(|e| e.command),
        Some(Command::OpenDocument | Command::SaveDocument)
    );
    match session.progress() {
        Progress::Done(msg) if file_command => msg.clone(),
        Progress::Error(msg) if file_command => format!("failed: {}", msg),
        _ => session.document().stats().to_string(),
    }
}
