use scraper::{Html, Selector};

/// Get the message and details text of the first alert in `html`.
#[track_caller]
pub(crate) fn must_get_alert_text(html: &Html) -> (String, String) {
    let alert = html
        .select(&Selector::parse("[role=alert]").unwrap())
        .next()
        .expect("No alert found");

    let message = alert
        .select(&Selector::parse("p").unwrap())
        .next()
        .map(|p| p.text().collect::<String>().trim().to_owned())
        .unwrap_or_default();
    let details = alert
        .select(&Selector::parse("span").unwrap())
        .next()
        .map(|span| span.text().collect::<String>().trim().to_owned())
        .unwrap_or_default();

    (message, details)
}
