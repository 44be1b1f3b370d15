#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Modules the end-user will interact directly or indirectly with
pub mod errors;
pub mod fetch;
pub mod history;
pub mod routes;
pub mod scripts;
pub mod surface;

mod logging;
mod router;
mod views;

// Exports for end-users
pub use router::{NavTrigger, Navigation, PageRouter};

#[macro_export]
/// Helps to define the route table handed to [`PageRouter::new`].
///
/// The first argument is the default route key; it must be one of the keys
/// of the table.
///
/// ## Example
/// ```rs
/// use virage::route_table;
///
/// let routes = route_table!("accueil", {
///     "accueil" => "pages/page-accueil-temp.html",
///     "membres" => "pages/page-liste-membres.html",
/// });
/// ```
macro_rules! route_table {
    ($default:expr, { $($key:expr => $url:expr),* $(,)? }) => {
        $crate::routes::RouteTable::new($default, [$(($key, $url)),*])
    };
}
