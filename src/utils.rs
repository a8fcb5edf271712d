use crate::error::{NamesError, Result};
use std::io::BufRead;

/// Instance names from CLI arguments, or one per line from `reader` when no
/// arguments were given. Blank lines and `#` comments are skipped.
pub fn collect_items<R: BufRead>(args: Vec<String>, reader: R) -> Result<Vec<String>> {
    let items = if args.is_empty() {
        read_lines(reader)?
    } else {
        args
    };

    if items.is_empty() {
        return Err(NamesError::Validation {
            field: "input".to_string(),
            reason: "no instance names given (pass them as arguments or on stdin)".to_string(),
        });
    }
    Ok(items)
}

pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut items = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        items.push(trimmed.to_string());
    }
    Ok(items)
}
