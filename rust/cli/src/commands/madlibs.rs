//! Mad Libs command: list the stories or fill one in.
//!
//! Fields can be pre-filled with `--set key=value`; whatever is still blank
//! is asked for on stdin. The finished story goes to stdout. If anything is
//! left blank the missing labels are reported instead.

use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::parse_assignment;
use parlor_madlibs::{catalogue, story, Form};
use std::io::{BufRead, Write};

pub fn handle_madlibs_command(
    story_id: Option<String>,
    assignments: Vec<String>,
    list: bool,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if list {
        for s in catalogue() {
            writeln!(out, "{:<14} {} - {}", s.id, s.title, s.blurb)?;
        }
        return Ok(());
    }

    let chosen = match story_id.as_deref() {
        Some(id) => story(id)?,
        None => catalogue()[0],
    };
    let mut form = Form::new(chosen);

    for raw in &assignments {
        let (key, value) = parse_assignment(raw).map_err(CliError::InvalidInput)?;
        form.set(&key, &value)?;
    }

    if !form.missing().is_empty() {
        writeln!(out, "{}", chosen.title)?;
    }
    for field in chosen.fields {
        if form.value(field.key).is_some_and(|v| !v.is_empty()) {
            continue;
        }
        ui::prompt(out, &format!("{} ({}): ", field.label, field.hint))?;
        let Some(answer) = read_stdin_line(stdin)? else {
            break;
        };
        form.set(field.key, &answer)?;
    }

    let text = form.generate()?;
    writeln!(out, "{}", text)?;
    Ok(())
}
