//! The prepare-log pipeline shared by every tree.
//!
//! ```text
//! prepare_log(priority, error, message, site)
//!     → is_loggable(priority)        (false: no-op)
//!     → compose message              (nothing to say: no-op)
//!     → one-shot tag or infer_tag    (inference error: panic)
//!     → emit(Record)
//! ```

use std::error::Error;
use std::fmt;

use crate::priority::Priority;
use crate::tree::{CallSite, Record, Tree};

/// Run the full pipeline for `tree`. This is the default body of
/// [`Tree::prepare_log`].
pub fn prepare_log<T: Tree + ?Sized>(
    tree: &T,
    priority: Priority,
    error: Option<&(dyn Error + 'static)>,
    message: Option<fmt::Arguments<'_>>,
    site: &CallSite,
) {
    if !tree.is_loggable(priority) {
        return;
    }

    let Some(message) = compose_message(error, message) else {
        return;
    };

    let tag = match tree.tag_slot().take() {
        Some(tag) => Some(tag),
        None => match tree.infer_tag(site) {
            Ok(tag) => tag,
            Err(err) => panic!("{err}"),
        },
    };

    tree.emit(&Record {
        priority,
        tag: tag.as_deref(),
        message: &message,
        error,
        site,
    });
}

/// Build the final message text, or `None` when there is nothing to log.
///
/// An empty template counts as absent. Without a template the rendered error
/// becomes the message; with both, the error follows the template on its own
/// line.
pub fn compose_message(
    error: Option<&(dyn Error + 'static)>,
    message: Option<fmt::Arguments<'_>>,
) -> Option<String> {
    let message = message.map(render_arguments).filter(|m| !m.is_empty());

    match (message, error) {
        (None, None) => None,
        (None, Some(err)) => Some(render_error(err)),
        (Some(message), None) => Some(message),
        (Some(mut message), Some(err)) => {
            message.push('\n');
            message.push_str(&render_error(err));
            Some(message)
        }
    }
}

fn render_arguments(args: fmt::Arguments<'_>) -> String {
    match args.as_str() {
        Some(text) => text.to_string(),
        None => fmt::format(args),
    }
}

/// Render an error and its `source()` chain, one cause per line.
pub fn render_error(error: &(dyn Error + 'static)) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        out.push_str("\nCaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
