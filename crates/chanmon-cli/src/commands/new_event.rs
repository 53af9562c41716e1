//! New-event command implementation.

use crate::error::Result;
use crate::output::Formatter;
use chanmon_events::NewEventFlow;
use rustyline::DefaultEditor;

/// Execute the new-event command: drive the wizard flow interactively.
///
/// Invalid answers re-prompt the same step; the finished draft prints as
/// JSON for whatever calendar tooling picks it up next.
pub fn execute_new_event(formatter: &Formatter) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut flow = NewEventFlow::new();

    println!("{}", flow.prompt());
    while !flow.is_complete() {
        let line = editor.readline("> ")?;
        match flow.advance(&line) {
            Ok(reply) => println!("{}", reply),
            Err(e) => println!("{}", formatter.error(&e.to_string())),
        }
    }

    let draft = flow.finish()?;
    println!("{}", serde_json::to_string_pretty(&draft)?);
    Ok(())
}
