//! Error rendering
//!
//! An error renders as its summary line, then its notes in insertion order,
//! then (for groups) its members, then the errors chained to it.
//!
//! ```text
//! ExceptionGroup: request failed (2 sub-exceptions)
//! request id 42
//! +---------------- 1 ----------------
//! | TimeoutError: upstream timed out
//! | retried 3 times
//! +---------------- 2 ----------------
//! | ValueError: bad header
//! +------------------------------------
//!
//! Caused by:
//!     OSError: connection reset
//! ```

use errnote_error::{AnyError, ChainKind, ErrorObject, NoteStore};

use crate::{config::RenderConfig, stylesheet};

const MEMBER_RULE: &str = "----------------";
const CLOSING_RULE: &str = "------------------------------------";
const MEMBER_INDENT: &str = "| ";
const CHAIN_INDENT: &str = "    ";

/// Renders an error to a list of lines.
///
/// Multi-line messages and notes are split, so every element is a single
/// line without a trailing newline.
#[must_use]
pub fn render(error: &dyn ErrorObject, config: &RenderConfig) -> Vec<String> {
    get_error_and_chain_lines(error, config, 1)
}

/// Renders an error to a single string, one line per rendered line.
#[must_use]
pub fn render_to_string(error: &dyn ErrorObject, config: &RenderConfig) -> String {
    render(error, config).join("\n")
}

/// Formats an error for printing.
///
/// This is the `Debug` output when `print_debug` is set and the rendered
/// lines otherwise.
pub(crate) fn format_error(error: &dyn ErrorObject, config: &RenderConfig) -> String {
    if config.print_debug {
        format!("{error:?}")
    } else {
        render_to_string(error, config)
    }
}

/// Lines for the error followed by every error in its chain
fn get_error_and_chain_lines(
    error: &dyn ErrorObject,
    config: &RenderConfig,
    group_depth: usize,
) -> Vec<String> {
    let mut lines = get_error_lines(error, config, group_depth);

    let mut current = error;
    while let Some((chain_kind, chained)) = current.chain().next() {
        lines.push(String::new());
        lines.push(get_chain_header_line(chain_kind, config));
        lines.extend(
            get_error_lines(chained, config, group_depth)
                .into_iter()
                .map(|line| indent(CHAIN_INDENT, &line)),
        );
        current = chained;
    }

    lines
}

/// Lines for the error itself, its notes and its members, without its chain
fn get_error_lines(error: &dyn ErrorObject, config: &RenderConfig, group_depth: usize) -> Vec<String> {
    let mut lines = get_summary_lines(error, config);
    lines.extend(get_note_lines(error.notes(), config));

    if let Some(exceptions) = error.exceptions() {
        lines.extend(get_member_lines(exceptions, config, group_depth));
    }

    lines
}

/// Formats the summary line
fn get_summary_lines(error: &dyn ErrorObject, config: &RenderConfig) -> Vec<String> {
    // <kind>: <message>
    // OR
    // <kind>
    let kind = config
        .color_choice
        .style(stylesheet::ERROR_COLOR.bold(), error.kind());
    let message = error.to_string();

    let summary = if message.is_empty() {
        kind
    } else {
        format!("{kind}: {message}")
    };

    summary.split('\n').map(ToString::to_string).collect()
}

/// Formats the notes, one line per line of each note
fn get_note_lines<'a>(notes: &'a NoteStore, config: &'a RenderConfig) -> impl Iterator<Item = String> + 'a {
    notes
        .iter()
        .flat_map(|note| note.as_str().split('\n'))
        .map(|line| config.color_choice.style(stylesheet::NOTE_COLOR, line))
}

/// Formats the members of a group
fn get_member_lines(exceptions: &[AnyError], config: &RenderConfig, group_depth: usize) -> Vec<String> {
    // +---------------- 1 ----------------
    // | <member>
    // +---------------- ... ----------------
    // | and <n> more exceptions
    // +------------------------------------
    let shown = exceptions.len().min(config.max_group_width);
    let mut lines = vec![];

    for (index, exception) in exceptions.iter().take(shown).enumerate() {
        lines.push(get_member_rule_line(&(index + 1).to_string(), config));

        let member_lines = if exception.as_group().is_some() && group_depth >= config.max_group_depth {
            log::debug!(
                "nested group {:?} not rendered past depth {}",
                exception.message(),
                config.max_group_depth
            );
            vec![format!("... (max_group_depth is {})", config.max_group_depth)]
        } else {
            get_error_and_chain_lines(exception, config, group_depth + 1)
        };

        lines.extend(member_lines.iter().map(|line| get_indented_member_line(line, config)));
    }

    let hidden = exceptions.len() - shown;
    if hidden > 0 {
        let plural = if hidden == 1 { "" } else { "s" };
        lines.push(get_member_rule_line("...", config));
        lines.push(get_indented_member_line(
            &format!("and {hidden} more exception{plural}"),
            config,
        ));
    }

    let closing = format!("+{CLOSING_RULE}");
    lines.push(config.color_choice.style(stylesheet::GROUP_FRAME, &closing));

    lines
}

fn get_member_rule_line(label: &str, config: &RenderConfig) -> String {
    let rule = format!("+{MEMBER_RULE} {label} {MEMBER_RULE}");
    config.color_choice.style(stylesheet::GROUP_FRAME, &rule)
}

fn get_indented_member_line(line: &str, config: &RenderConfig) -> String {
    if line.is_empty() {
        return config
            .color_choice
            .style(stylesheet::GROUP_FRAME, MEMBER_INDENT.trim_end());
    }

    let bar = config.color_choice.style(stylesheet::GROUP_FRAME, MEMBER_INDENT);
    format!("{bar}{line}")
}

fn get_chain_header_line(chain_kind: ChainKind, config: &RenderConfig) -> String {
    let header = match chain_kind {
        ChainKind::Cause => "Caused by:",
        ChainKind::Context => "While handling:",
    };
    config.color_choice.style(stylesheet::CHAIN_HEADER, header)
}

fn indent(prefix: &str, line: &str) -> String {
    if line.is_empty() {
        prefix.trim_end().to_string()
    } else {
        format!("{prefix}{line}")
    }
}
