//! The route table: a fixed mapping from route keys to fragment URLs.
//!
//! The table is built once at startup and never changes afterwards. Every
//! navigation the router performs goes through [`RouteTable::url_for`], and
//! the initial page shown on load is computed by
//! [`RouteTable::resolve_initial`].
use rustc_hash::FxHashMap;

/// Maps route keys (stable page identifiers) to the URLs of their HTML
/// fragments, and holds the default route key used when no (or an unknown)
/// fragment identifier is present at load time.
///
/// ## Example
/// ```rs
/// use virage::routes::RouteTable;
///
/// let routes = RouteTable::new("accueil", [
///     ("accueil", "pages/page-accueil-temp.html"),
///     ("faq", "pages/page-faq.html"),
/// ]);
///
/// assert_eq!(routes.url_for("faq"), Some("pages/page-faq.html"));
/// ```
pub struct RouteTable {
    entries: FxHashMap<String, String>,
    default_route: String,
}

impl RouteTable {
    /// Builds the table from `(key, url)` pairs.
    ///
    /// Panics if `default_route` is not one of the keys. A router without a
    /// reachable default page cannot recover from anything, so this is
    /// treated as a startup precondition rather than a recoverable error.
    pub fn new<K, V>(
        default_route: impl Into<String>,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries: FxHashMap<String, String> = entries
            .into_iter()
            .map(|(key, url)| (key.into(), url.into()))
            .collect();
        let default_route = default_route.into();

        if !entries.contains_key(&default_route) {
            panic!("Default route {:?} is not present in the route table", default_route);
        }

        Self { entries, default_route }
    }

    pub fn url_for(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn default_route(&self) -> &str {
        &self.default_route
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Computes the initial route key for a given location fragment
    /// identifier, with or without its leading `#`.
    ///
    /// A non-empty fragment naming a known route wins; anything else falls
    /// back to the default route. Pure, no side effects.
    pub fn resolve_initial<'a>(&'a self, hash: &'a str) -> &'a str {
        let key = hash.strip_prefix('#').unwrap_or(hash);

        if !key.is_empty() && self.entries.contains_key(key) {
            key
        } else {
            &self.default_route
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RouteTable;

    fn table() -> RouteTable {
        RouteTable::new(
            "accueil",
            [
                ("accueil", "pages/page-accueil-temp.html"),
                ("membres", "pages/page-liste-membres.html"),
                ("faq", "pages/page-faq.html"),
            ],
        )
    }

    #[test]
    fn test_url_for_known_key() {
        let routes = table();
        assert_eq!(routes.url_for("membres"), Some("pages/page-liste-membres.html"));
    }

    #[test]
    fn test_url_for_unknown_key() {
        let routes = table();
        assert_eq!(routes.url_for("inconnu"), None);
    }

    #[test]
    fn test_resolve_initial_empty_hash() {
        let routes = table();
        assert_eq!(routes.resolve_initial(""), "accueil");
    }

    #[test]
    fn test_resolve_initial_known_hash() {
        let routes = table();
        assert_eq!(routes.resolve_initial("#membres"), "membres");
    }

    #[test]
    fn test_resolve_initial_known_hash_without_prefix() {
        let routes = table();
        assert_eq!(routes.resolve_initial("membres"), "membres");
    }

    #[test]
    fn test_resolve_initial_unknown_hash() {
        let routes = table();
        assert_eq!(routes.resolve_initial("#inconnu"), "accueil");
    }

    #[test]
    fn test_resolve_initial_bare_prefix() {
        let routes = table();
        assert_eq!(routes.resolve_initial("#"), "accueil");
    }

    #[test]
    #[should_panic(expected = "not present in the route table")]
    fn test_default_route_must_be_known() {
        RouteTable::new("absent", [("accueil", "pages/page-accueil-temp.html")]);
    }
}
