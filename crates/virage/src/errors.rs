//! Error types for Virage.
use std::fmt::{self, Debug, Formatter};
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Rust's uses the Debug trait to show errors when they're returned from main
                    // But, thiserror uses the Display trait to show errors. This redirects Debug to Display, essentially.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum RouteError {
    #[error("No route named `{key}`")]
    Unknown { key: String },
}

#[derive(Error)]
pub enum FetchError {
    #[error("Request for `{url}` returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("Request for `{url}` failed")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Error)]
pub enum ScriptError {
    #[error("Failed to scan fragment for script elements")]
    Scan {
        #[source]
        source: lol_html::errors::RewritingError,
    },
}

#[derive(Error, Debug)]
pub enum RouterError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Script(#[from] ScriptError),
}

impl_debug_for_error!(RouteError, FetchError, ScriptError);
