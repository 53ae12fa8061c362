//! Video platform names.

pub const SERVICE_YOUTUBE: &str = "YouTube";
pub const SERVICE_PEERTUBE: &str = "PeerTube";
pub const SERVICE_SPOTIFY: &str = "Spotify";
pub const SERVICE_PODCAST: &str = "Podcast";
pub const KNOWN_SERVICES: &[&str] = &[
    SERVICE_YOUTUBE,
    SERVICE_PEERTUBE,
    SERVICE_SPOTIFY,
    SERVICE_PODCAST,
];

/// Platform assumed when a query names none.
pub const DEFAULT_SERVICE: &str = SERVICE_YOUTUBE;

/// Map a raw `service` parameter to its canonical spelling.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Missing,
/// blank, or unknown values resolve to [`DEFAULT_SERVICE`].
pub fn canonical_service(raw: Option<&str>) -> &'static str {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return DEFAULT_SERVICE;
    };

    KNOWN_SERVICES
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(raw))
        .unwrap_or(DEFAULT_SERVICE)
}
