use chrono::Utc;
use spotsave::config::RedisSettings;
use spotsave::error::Error;
use spotsave::save::SaveOutcome;
use spotsave::types::*;
use spotsave::utils::*;

// Helper function to create a playing item
fn create_item(name: &str, artists: &[&str], href: Option<&str>) -> PlayingItem {
    PlayingItem {
        id: Some("track1".to_string()),
        name: name.to_string(),
        artists: artists
            .iter()
            .map(|a| SimpleArtist {
                name: a.to_string(),
            })
            .collect(),
        external_urls: ExternalUrls {
            spotify: href.map(str::to_string),
        },
    }
}

fn create_token(expires_at: i64) -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        expires_at,
        scope: "user-library-read user-library-modify".to_string(),
        username: "alice".to_string(),
    }
}

#[test]
fn test_track_title_uses_first_artist() {
    let item = create_item("Song", &["Artist", "Featured"], None);
    assert_eq!(track_title(&item), "Artist - Song");
}

#[test]
fn test_track_title_without_artists() {
    let item = create_item("Episode 12", &[], None);
    assert_eq!(track_title(&item), "Episode 12");
}

#[test]
fn test_track_link() {
    assert_eq!(
        track_link("Artist - Song", Some("https://open.spotify.com/track/1")),
        r#"<a href="https://open.spotify.com/track/1">Artist - Song</a>"#
    );

    // No external URL renders plain text
    assert_eq!(track_link("Artist - Song", None), "Artist - Song");
}

#[test]
fn test_track_link_escapes_html() {
    let link = track_link("Tom & Jerry <live>", Some("https://x.test/?a=1&b=2"));
    assert_eq!(
        link,
        r#"<a href="https://x.test/?a=1&amp;b=2">Tom &amp; Jerry &lt;live&gt;</a>"#
    );

    // Quotes cannot break out of the attribute
    let link = track_link("Song", Some("https://x.test/\" onclick=\"x"));
    assert!(!link.contains("\" onclick=\""));
    assert!(link.ends_with(">Song</a>"));

    assert_eq!(track_link("<b>", None), "&lt;b&gt;");
}

#[test]
fn test_redirect_hint_parse() {
    assert_eq!(RedirectHint::parse(Some("save")), RedirectHint::SaveFlow);
    assert_eq!(RedirectHint::parse(None), RedirectHint::Default);

    // Only the allow-listed value is recognised
    assert_eq!(RedirectHint::parse(Some("")), RedirectHint::Default);
    assert_eq!(RedirectHint::parse(Some("SAVE")), RedirectHint::Default);
    assert_eq!(
        RedirectHint::parse(Some("https://evil.example")),
        RedirectHint::Default
    );
}

#[test]
fn test_redirect_hint_paths() {
    assert_eq!(RedirectHint::Default.view_path(), "/");
    assert_eq!(RedirectHint::SaveFlow.view_path(), "/save");
    assert_eq!(RedirectHint::Default.login_path(), "/login");
    assert_eq!(RedirectHint::SaveFlow.login_path(), "/login?r=save");
    assert_eq!(RedirectHint::Default.as_param(), None);
    assert_eq!(RedirectHint::SaveFlow.as_param(), Some("save"));
}

#[test]
fn test_token_expiry() {
    let now = Utc::now().timestamp();

    assert!(!create_token(now + 3600).is_expired());
    assert!(create_token(now - 1).is_expired());
    assert!(create_token(now - 3600).is_expired());
}

#[test]
fn test_token_scopes() {
    let token = create_token(0);
    assert_eq!(
        token.scopes(),
        vec!["user-library-read", "user-library-modify"]
    );
}

#[test]
fn test_token_record_layout() {
    let json = serde_json::to_value(create_token(1700000000)).unwrap();

    assert_eq!(json["access_token"], "access");
    assert_eq!(json["refresh_token"], "refresh");
    assert_eq!(json["expires_at"], 1700000000);
    assert_eq!(json["scope"], "user-library-read user-library-modify");
    assert_eq!(json["username"], "alice");
}

#[test]
fn test_token_response_defaults() {
    let response: TokenResponse =
        serde_json::from_str(r#"{"access_token": "a", "token_type": "Bearer"}"#).unwrap();

    assert_eq!(response.access_token, "a");
    assert_eq!(response.refresh_token, None);
    assert_eq!(response.scope, None);
    assert_eq!(response.expires_in, 3600);
}

#[test]
fn test_currently_playing_paused_has_no_item() {
    let paused: CurrentlyPlaying = serde_json::from_str(
        r#"{"is_playing": false, "item": {"id": "t", "name": "Song", "artists": []}}"#,
    )
    .unwrap();
    assert!(paused.playing_item().is_none());

    let playing: CurrentlyPlaying = serde_json::from_str(
        r#"{"is_playing": true, "item": {"id": "t", "name": "Song", "artists": []}}"#,
    )
    .unwrap();
    assert_eq!(playing.playing_item().map(|i| i.name.as_str()), Some("Song"));
}

#[test]
fn test_playlist_page_contains() {
    let page: PlaylistTracksPage = serde_json::from_str(
        r#"{
            "items": [
                {"track": {"id": "a"}},
                {"track": null},
                {"track": {"id": null}},
                {"track": {"id": "b"}}
            ],
            "next": null
        }"#,
    )
    .unwrap();

    assert!(page.contains("a"));
    assert!(page.contains("b"));
    assert!(!page.contains("c"));
    assert!(page.next.is_none());
}

#[test]
fn test_save_outcome_render() {
    let outcome = SaveOutcome {
        liked: true,
        added_to_playlist: true,
        title: "Artist - Song".to_string(),
        href: Some("https://open.spotify.com/track/1".to_string()),
    };
    assert_eq!(
        outcome.render(),
        "❤️☑️ <a href=\"https://open.spotify.com/track/1\">Artist - Song</a>"
    );

    let only_playlist = SaveOutcome {
        liked: false,
        ..outcome.clone()
    };
    assert_eq!(only_playlist.markers(), "☑️");

    let nothing_new = SaveOutcome {
        liked: false,
        added_to_playlist: false,
        ..outcome
    };
    assert_eq!(
        nothing_new.render(),
        "<a href=\"https://open.spotify.com/track/1\">Artist - Song</a>"
    );
}

#[test]
fn test_redis_connection_url() {
    let settings = RedisSettings {
        host: "redis.internal".to_string(),
        port: 6380,
        db: 3,
        password: Some("p@ss:word".to_string()),
    };
    let url = settings.connection_url().unwrap();

    assert_eq!(url.scheme(), "redis");
    assert_eq!(url.host_str(), Some("redis.internal"));
    assert_eq!(url.port(), Some(6380));
    assert_eq!(url.path(), "/3");
    assert_eq!(url.username(), "");
    assert_eq!(url.password(), Some("p%40ss%3Aword"));
}

#[test]
fn test_redis_connection_url_without_password() {
    let settings = RedisSettings {
        host: "127.0.0.1".to_string(),
        port: 6379,
        db: 0,
        password: Some(String::new()),
    };

    assert_eq!(
        settings.connection_url().unwrap().as_str(),
        "redis://127.0.0.1:6379/0"
    );
}

#[test]
fn test_requires_login() {
    assert!(Error::Authorization("invalid_grant".to_string()).requires_login());
    assert!(!Error::Config("missing".to_string()).requires_login());
}
