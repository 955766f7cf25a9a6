use std::fmt;

/// Regional storefront a catalog search is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Market {
    Us,
    Gb,
    Ca,
    De,
    Fr,
}

impl Market {
    /// All collected markets, in collection order.
    pub const ALL: [Market; 5] = [Market::Us, Market::Gb, Market::Ca, Market::De, Market::Fr];

    pub fn code(self) -> &'static str {
        match self {
            Market::Us => "US",
            Market::Gb => "GB",
            Market::Ca => "CA",
            Market::De => "DE",
            Market::Fr => "FR",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone)]
pub struct TrackRecord {
    pub name: String,
    pub artist: String, // first listed artist only
    pub album: String,
    pub popularity: u32,
    pub market: Market,
}

#[derive(Debug, Clone)]
pub struct PlaylistRecord {
    pub name: String,
    pub owner: Option<String>,
    pub tracks: u32,
    pub market: Market,
}

#[derive(Debug, Clone)]
pub struct ArtistRecord {
    pub name: String,
    pub followers: u32,
    pub popularity: u32,
    pub market: Market,
}

/// One collected catalog entity, discriminated by kind.
#[derive(Debug, Clone)]
pub enum Record {
    Track(TrackRecord),
    Playlist(PlaylistRecord),
    Artist(ArtistRecord),
}

impl Record {
    pub fn kind(&self) -> &'static str {
        match self {
            Record::Track(_) => "track",
            Record::Playlist(_) => "playlist",
            Record::Artist(_) => "artist",
        }
    }

    pub fn market(&self) -> Market {
        match self {
            Record::Track(t) => t.market,
            Record::Playlist(p) => p.market,
            Record::Artist(a) => a.market,
        }
    }
}
