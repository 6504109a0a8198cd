// Media items handed to player backends

use url::Url;

/// A playable item: a local path or a URL with a protocol
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileItem {
    path: String,
    label: Option<String>,
    mime_type: Option<String>,
}

impl FileItem {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: None,
            mime_type: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Display label, falling back to the path
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.path)
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn url(&self) -> MediaUrl {
        MediaUrl::parse(&self.path)
    }
}

/// Resolved location of a media item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrl {
    raw: String,
    protocol: String,
}

impl MediaUrl {
    /// Split off the protocol of `raw`.
    ///
    /// Paths without a scheme (`/media/a.mkv`, `movie.mkv`) and drive-letter
    /// paths (`C:\media\a.mkv`) have an empty protocol.
    pub fn parse(raw: &str) -> Self {
        let protocol = raw
            .split_once("://")
            .and_then(|(scheme, _)| valid_scheme(scheme))
            .unwrap_or_default();

        Self {
            raw: raw.to_string(),
            protocol,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn is_local_path(&self) -> bool {
        self.protocol.is_empty()
    }
}

/// Normalized `scheme` when it is a well-formed scheme longer than a drive letter
fn valid_scheme(scheme: &str) -> Option<String> {
    if scheme.len() < 2 {
        return None;
    }
    // Only the scheme is checked; the rest of the URL may be anything the engine accepts
    Url::parse(&format!("{}://localhost/", scheme))
        .ok()
        .map(|url| url.scheme().to_string())
}

impl std::fmt::Display for MediaUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
