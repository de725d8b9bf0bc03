// Command abbreviation matching for the SRL CLI

/// Find all commands that start with the given prefix (case-insensitive)
pub fn find_matching_commands<'a>(prefix: &str, commands: &'a [&str]) -> Vec<&'a str> {
    let prefix_lower = prefix.to_lowercase();
    commands.iter()
        .filter(|cmd| cmd.to_lowercase().starts_with(&prefix_lower))
        .copied()
        .collect()
}

/// Find a unique command match for the given prefix
/// Returns Ok(command) if exactly one match, Err(matches) if ambiguous, Err(empty) if no match
/// Note: Exact matches take precedence over prefix matches (e.g., "add" matches "add" not "advance")
pub fn find_unique_command<'a>(prefix: &str, commands: &'a [&str]) -> Result<&'a str, Vec<&'a str>> {
    let prefix_lower = prefix.to_lowercase();
    for cmd in commands {
        if cmd.to_lowercase() == prefix_lower {
            return Ok(*cmd);
        }
    }

    let matches = find_matching_commands(prefix, commands);

    if matches.is_empty() {
        Err(Vec::new())
    } else if matches.len() == 1 {
        Ok(matches[0])
    } else {
        Err(matches)
    }
}

/// Top-level commands in SRL
pub const TOP_LEVEL_COMMANDS: &[&str] = &[
    "pipeline", "categories", "add", "list", "show", "advance", "back", "move",
    "history", "rename", "delete", "targets", "sla", "report", "webhook",
];

/// Targets subcommands
pub const TARGET_COMMANDS: &[&str] = &["set", "list", "remove"];

/// Webhook subcommands
pub const WEBHOOK_COMMANDS: &[&str] = &["sign", "verify"];

/// Request subcommands (used with srl <id> <subcommand> pattern)
pub const REQUEST_SUBCOMMANDS: &[&str] = &[
    "show", "advance", "back", "move", "history", "rename", "delete",
];

/// Global options that take a value and may precede the command
const GLOBAL_VALUE_OPTIONS: &[&str] = &["--now", "--locale"];

/// Get subcommands for a given top-level command
pub fn get_subcommands(command: &str) -> Option<&'static [&'static str]> {
    match command {
        "targets" => Some(TARGET_COMMANDS),
        "webhook" => Some(WEBHOOK_COMMANDS),
        _ => None,
    }
}

/// Index of the first argument that is not a leading global option
fn command_index(args: &[String]) -> usize {
    let mut i = 0;
    while i < args.len() && args[i].starts_with('-') {
        if GLOBAL_VALUE_OPTIONS.contains(&args[i].as_str()) {
            i += 1;
        }
        i += 1;
    }
    i
}

fn ambiguous(kind: &str, arg: &str, matches: &[&str]) -> String {
    format!("Ambiguous {} '{}'. Did you mean one of: {}?", kind, arg, matches.join(", "))
}

/// Expand command abbreviations in argument list
/// Returns expanded args or error message
///
/// Also normalizes `<id> <subcommand>` to `<subcommand> <id>` and a bare
/// `<id>` to `show <id>`.
pub fn expand_command_abbreviations(args: Vec<String>) -> Result<Vec<String>, String> {
    let start = command_index(&args);
    if start >= args.len() {
        return Ok(args);
    }

    let mut expanded: Vec<String> = args[..start].to_vec();
    let arg = &args[start];
    let rest = &args[start + 1..];

    // Request-id-first syntax
    if arg.parse::<i64>().is_ok() {
        match rest.first() {
            None => {
                expanded.push("show".to_string());
                expanded.push(arg.clone());
            }
            Some(next_arg) if !next_arg.starts_with('-') => {
                match find_unique_command(next_arg, REQUEST_SUBCOMMANDS) {
                    Ok(full_subcmd) => {
                        expanded.push(full_subcmd.to_string());
                        expanded.push(arg.clone());
                        expanded.extend_from_slice(&rest[1..]);
                        return Ok(expanded);
                    }
                    Err(matches) if !matches.is_empty() => {
                        return Err(ambiguous("request subcommand", next_arg, &matches));
                    }
                    Err(_) => {
                        expanded.push(arg.clone());
                        expanded.extend_from_slice(rest);
                    }
                }
            }
            Some(_) => {
                expanded.push(arg.clone());
                expanded.extend_from_slice(rest);
            }
        }
        return Ok(expanded);
    }

    match find_unique_command(arg, TOP_LEVEL_COMMANDS) {
        Ok(full_cmd) => {
            expanded.push(full_cmd.to_string());
            let mut remaining = rest.iter();
            if let Some(subcommands) = get_subcommands(full_cmd) {
                if let Some(next_arg) = rest.first().filter(|a| !a.starts_with('-')) {
                    match find_unique_command(next_arg, subcommands) {
                        Ok(full_subcmd) => {
                            expanded.push(full_subcmd.to_string());
                            remaining.next();
                        }
                        Err(matches) if !matches.is_empty() => {
                            return Err(ambiguous("subcommand", next_arg, &matches));
                        }
                        // No match: leave it for clap to report
                        Err(_) => {}
                    }
                }
            }
            expanded.extend(remaining.cloned());
        }
        Err(matches) if !matches.is_empty() => {
            return Err(ambiguous("command", arg, &matches));
        }
        Err(_) => {
            expanded.push(arg.clone());
            expanded.extend_from_slice(rest);
        }
    }

    Ok(expanded)
}
