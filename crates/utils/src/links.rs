// ABOUTME: Recognizes YouTube watch links and Twitch VOD links by pattern.
// ABOUTME: Patterns are anchored to the whole string; nothing is fetched.

use once_cell::sync::Lazy;
use regex::Regex;

static YOUTUBE_WATCH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://(?:www\.)?youtube\.com/watch\?v=(?P<id>[A-Za-z0-9_-]+)$").unwrap()
});
static TWITCH_VOD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://(?:www\.)?twitch\.tv/videos/(?P<id>[0-9]+)$").unwrap()
});

/// Returns true for `https://(www.)youtube.com/watch?v=<id>` with nothing after the id.
pub fn is_youtube_link(url: &str) -> bool {
    YOUTUBE_WATCH_RE.is_match(url)
}

/// Returns true for `https://(www.)twitch.tv/videos/<digits>`.
pub fn is_twitch_vod_link(url: &str) -> bool {
    TWITCH_VOD_RE.is_match(url)
}

/// Extracts the video id from a link accepted by [`is_youtube_link`].
pub fn youtube_video_id(url: &str) -> Option<&str> {
    capture_id(&YOUTUBE_WATCH_RE, url)
}

/// Extracts the numeric VOD id from a link accepted by [`is_twitch_vod_link`].
/// The id is returned as text since VOD ids are opaque to callers.
pub fn twitch_vod_id(url: &str) -> Option<&str> {
    capture_id(&TWITCH_VOD_RE, url)
}

fn capture_id<'a>(re: &Regex, url: &'a str) -> Option<&'a str> {
    re.captures(url)
        .and_then(|caps| caps.name("id"))
        .map(|m| m.as_str())
}
