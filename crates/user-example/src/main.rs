use std::env;

use virage::fetch::HttpFetcher;
use virage::history::{HistoryEntry, HistorySink};
use virage::scripts::ScriptSource;
use virage::surface::Surface;
use virage::{PageRouter, route_table};

/// Prints everything the router would display to stdout.
struct StdoutSurface;

impl Surface for StdoutSurface {
    fn render(&mut self, markup: &str) {
        println!("{markup}");
    }

    fn execute_script(&mut self, script: &ScriptSource) {
        match script {
            ScriptSource::External { src } => println!("<!-- script: {src} -->"),
            ScriptSource::Inline { code } => {
                println!("<!-- inline script ({} bytes) -->", code.len())
            }
        }
    }

    fn mark_active(&mut self, trigger: Option<&str>) {
        if let Some(trigger) = trigger {
            println!("<!-- active menu: {trigger} -->");
        }
    }
}

struct StdoutHistory;

impl HistorySink for StdoutHistory {
    fn push(&mut self, entry: &HistoryEntry, fragment: &str) {
        println!("<!-- history: {} {fragment} -->", entry.page);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base = env::args().nth(1).unwrap_or_else(|| "http://localhost:8080".to_string());
    let hash = env::args().nth(2).unwrap_or_default();

    let routes = route_table!("accueil", {
        "accueil" => "pages/page-accueil-temp.html",
        "connect" => "pages/connect.html",
        "connect-1" => "pages/connect-1.html",
        "connect-2" => "pages/connect-2.html",
        "membres" => "pages/page-liste-membres.html",
        "personnalites" => "pages/page-liste-personalites.html",
        "gouvernements" => "pages/page-gouv-publies.html",
        "faq" => "pages/page-faq.html",
        "apropos" => "pages/page-apropos.html",
        "mon-espace" => "pages/page-mon-espace.html",
        "reglages" => "pages/page-reglages.html",
    });

    let router = PageRouter::new(
        routes,
        Box::new(StdoutSurface),
        Box::new(StdoutHistory),
        HttpFetcher::with_base(base),
    );

    router.register_trigger("menu-accueil", "accueil");
    router.register_trigger("menu-membres", "membres");
    router.register_trigger("menu-personnalites", "personnalites");
    router.register_trigger("menu-gouvernements", "gouvernements");
    router.register_trigger("menu-faq", "faq");
    router.register_trigger("menu-apropos", "apropos");
    router.register_trigger("menu-mon-espace", "mon-espace");
    router.register_trigger("menu-reglages", "reglages");

    router.start(&hash).await?;

    Ok(())
}
