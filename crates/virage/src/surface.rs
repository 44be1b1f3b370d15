//! The surface seam: the embedding environment's side of the router.
//!
//! The router itself never touches a document. Everything that requires one
//! (replacing the container's content, executing a script, painting the
//! active marker on a menu link) goes through this trait, implemented by
//! whatever hosts the router.
use crate::scripts::ScriptSource;

/// The capabilities a router needs from its embedding environment.
///
/// All methods are infallible from the router's point of view: a surface
/// that cannot display markup has nothing meaningful to report back, and
/// script execution is best-effort by contract.
pub trait Surface {
    /// Replaces the container's entire content with `markup`, verbatim.
    ///
    /// Called for the loading placeholder, for fetched fragment bodies, and
    /// for the inline error view. Whatever was displayed before is gone.
    fn render(&mut self, markup: &str);

    /// Executes one script found in a freshly rendered fragment.
    ///
    /// Called once per script, in document order, only after a fragment
    /// body was rendered. The environment decides what "execute" means.
    fn execute_script(&mut self, script: &ScriptSource);

    /// Moves the active marker to the given trigger identity, clearing it
    /// from every other trigger. `None` clears the marker everywhere.
    fn mark_active(&mut self, trigger: Option<&str>);
}
