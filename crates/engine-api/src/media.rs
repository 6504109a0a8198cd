// Media references and track metadata reported by the playback engine

/// How the engine should interpret a media reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSource {
    /// A local filesystem path
    Path,
    /// A location with a protocol (`http://`, `smb://`, `file://`, ...)
    Location,
}

/// A media reference to attach to a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub mrl: String,
    pub source: MediaSource,
}

impl Media {
    pub fn new(mrl: impl Into<String>, source: MediaSource) -> Self {
        Self {
            mrl: mrl.into(),
            source,
        }
    }

    pub fn from_path(path: impl Into<String>) -> Self {
        Self::new(path, MediaSource::Path)
    }

    pub fn from_location(location: impl Into<String>) -> Self {
        Self::new(location, MediaSource::Location)
    }
}

/// Elementary stream type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackType {
    Unknown,
    Audio,
    Video,
    Subtitle,
}

/// Video projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    Rectangular,
    Equirectangular,
    CubemapLayoutStandard,
}

/// One elementary stream of the current media
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaTrack {
    pub id: i32,
    pub track_type: TrackType,
    pub projection: Projection,
    pub language: Option<String>,
}

impl MediaTrack {
    pub fn new(id: i32, track_type: TrackType) -> Self {
        Self {
            id,
            track_type,
            projection: Projection::Rectangular,
            language: None,
        }
    }

    pub fn video(id: i32, projection: Projection) -> Self {
        Self {
            projection,
            ..Self::new(id, TrackType::Video)
        }
    }

    pub fn audio(id: i32) -> Self {
        Self::new(id, TrackType::Audio)
    }

    /// A video track that is not a flat rectangle (360 / VR video)
    pub fn is_spherical_video(&self) -> bool {
        self.track_type == TrackType::Video && self.projection != Projection::Rectangular
    }
}

/// Entry of a track list offered for selection (subtitles, audio)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDescription {
    pub id: i32,
    pub name: String,
}

impl TrackDescription {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Navigation commands for interactive media (menus, 360 viewpoint)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateMode {
    Activate,
    Up,
    Down,
    Left,
    Right,
    Popup,
}
