//! The two views the router renders itself: the loading placeholder and the
//! inline error view. Fragment bodies are rendered verbatim and never pass
//! through here.
use maud::html;

/// Shown synchronously as soon as a navigation starts, before the fetch
/// resolves.
pub(crate) fn loading() -> String {
    html! {
        div class="router-loading" {
            p class="router-loading-label" { "Chargement..." }
            div class="router-loading-spinner" {}
        }
    }
    .into_string()
}

/// Shown when a fetch fails. The recovery link targets the default route's
/// fragment identifier, so a plain anchor click gets the user back home.
pub(crate) fn load_error(page: &str, default_route: &str) -> String {
    html! {
        div class="router-error" {
            h3 class="router-error-title" { "Erreur de chargement" }
            p class="router-error-detail" {
                "Impossible de charger la page " code { (page) } "."
            }
            a class="router-error-recovery" href=(format!("#{}", default_route)) {
                "← Retour à l'accueil"
            }
        }
    }
    .into_string()
}
