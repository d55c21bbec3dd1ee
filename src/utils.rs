use askama::Template;

use crate::types::PlayingItem;

pub const NOTHING_PLAYING: &str = "Nothing playing.";

/// Anchor for a track. Askama escapes both fields since the template is HTML.
#[derive(Template)]
#[template(
    source = r#"{% if let Some(href) = href %}<a href="{{ href }}">{{ title }}</a>{% else %}{{ title }}{% endif %}"#,
    ext = "html"
)]
struct TrackLinkTemplate<'a> {
    title: &'a str,
    href: Option<&'a str>,
}

/// `"<first artist> - <name>"`, or just the name for items without artists
/// (podcast episodes).
pub fn track_title(item: &PlayingItem) -> String {
    match item.artists.first() {
        Some(artist) => format!("{} - {}", artist.name, item.name),
        None => item.name.clone(),
    }
}

/// HTML for a track: a link when Spotify gave us one, plain text otherwise.
///
/// # Arguments
///
/// * `title` - Display text, usually from [`track_title`]
/// * `href` - The track's `external_urls.spotify`, if any
///
/// # Example
///
/// ```
/// use spotsave::utils::track_link;
///
/// let html = track_link("Artist - Song", Some("https://open.spotify.com/track/1"));
/// assert_eq!(html, r#"<a href="https://open.spotify.com/track/1">Artist - Song</a>"#);
/// ```
pub fn track_link(title: &str, href: Option<&str>) -> String {
    let template = TrackLinkTemplate { title, href };
    template.render().unwrap_or_default()
}
