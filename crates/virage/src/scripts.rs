//! Script discovery inside loaded fragments.
//!
//! Injecting markup does not execute the `<script>` elements it carries, so
//! after a committed navigation the router scans the fragment and replays
//! every script through [`Surface::execute_script`](crate::surface::Surface).
//! Discovery preserves document order; execution ordering across multiple
//! external scripts is best-effort, as it was in the reference deployment.
use std::cell::RefCell;

use lol_html::{RewriteStrSettings, element, rewrite_str, text};

use crate::errors::ScriptError;

/// One `<script>` element found in a fragment, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// `<script src="...">` — the environment re-requests and executes it.
    External { src: String },
    /// `<script>...</script>` — the environment executes the inline text.
    Inline { code: String },
}

/// Collects every script element of `html` in document order.
pub fn extract_scripts(html: &str) -> Result<Vec<ScriptSource>, ScriptError> {
    let scripts = RefCell::new(Vec::new());

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("script", |el| {
                    let script = match el.get_attribute("src") {
                        Some(src) => ScriptSource::External { src },
                        None => ScriptSource::Inline { code: String::new() },
                    };
                    scripts.borrow_mut().push(script);
                    Ok(())
                }),
                text!("script", |chunk| {
                    // Text inside an external script element carries nothing to execute
                    if let Some(ScriptSource::Inline { code }) = scripts.borrow_mut().last_mut() {
                        code.push_str(chunk.as_str());
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::new()
        },
    )
    .map_err(|source| ScriptError::Scan { source })?;

    Ok(scripts.into_inner())
}
