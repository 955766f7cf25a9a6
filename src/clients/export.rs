use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::clients::{entities::Record, errors::Result};

/// Fixed output path, relative to the working directory.
pub const OUTPUT_PATH: &str = "spotify_top_data.csv";

// Union schema over all three record kinds; fields that don't apply to a
// kind stay empty in that row.
const HEADERS: [&str; 9] = [
    "name",
    "artist",
    "album",
    "popularity",
    "market",
    "type",
    "owner",
    "tracks",
    "followers",
];

#[derive(Debug, Serialize)]
struct Row<'a> {
    name: &'a str,
    artist: Option<&'a str>,
    album: Option<&'a str>,
    popularity: Option<u32>,
    market: &'a str,
    kind: &'a str,
    owner: Option<&'a str>,
    tracks: Option<u32>,
    followers: Option<u32>,
}

impl<'a> From<&'a Record> for Row<'a> {
    fn from(record: &'a Record) -> Row<'a> {
        let mut row = Row {
            name: "",
            artist: None,
            album: None,
            popularity: None,
            market: record.market().code(),
            kind: record.kind(),
            owner: None,
            tracks: None,
            followers: None,
        };
        match record {
            Record::Track(t) => {
                row.name = &t.name;
                row.artist = Some(&t.artist);
                row.album = Some(&t.album);
                row.popularity = Some(t.popularity);
            }
            Record::Playlist(p) => {
                row.name = &p.name;
                row.owner = p.owner.as_deref();
                row.tracks = Some(p.tracks);
            }
            Record::Artist(a) => {
                row.name = &a.name;
                row.followers = Some(a.followers);
                row.popularity = Some(a.popularity);
            }
        }
        row
    }
}

// Write the whole aggregate as one CSV file, overwriting any existing file.
// The header row is written even when the aggregate is empty.
pub fn write_csv<P: AsRef<Path>>(path: P, records: &[Record]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path.as_ref())?;
    writer.write_record(HEADERS)?;
    for record in records {
        writer.serialize(Row::from(record))?;
    }
    writer.flush()?;
    debug!(
        "Wrote {} records to {:?}",
        records.len(),
        path.as_ref()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::entities::{ArtistRecord, Market, PlaylistRecord, TrackRecord};

    fn track(name: &str, market: Market) -> Record {
        Record::Track(TrackRecord {
            name: name.to_string(),
            artist: "Artist A".to_string(),
            album: "Album A".to_string(),
            popularity: 81,
            market,
        })
    }

    fn playlist(name: &str, owner: Option<&str>, market: Market) -> Record {
        Record::Playlist(PlaylistRecord {
            name: name.to_string(),
            owner: owner.map(str::to_string),
            tracks: 42,
            market,
        })
    }

    fn artist(name: &str, market: Market) -> Record {
        Record::Artist(ArtistRecord {
            name: name.to_string(),
            followers: 123456,
            popularity: 93,
            market,
        })
    }

    fn write_to_string(records: &[Record]) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&path, records).unwrap();
        std::fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn empty_aggregate_writes_header_only() {
        let content = write_to_string(&[]);
        assert_eq!(
            content,
            "name,artist,album,popularity,market,type,owner,tracks,followers\n"
        );
    }

    #[test]
    fn rows_use_the_union_schema() {
        let records = vec![
            track("Song", Market::Us),
            playlist("Mix", Some("DJ"), Market::Us),
            artist("Band", Market::Us),
        ];
        let content = write_to_string(&records);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "Song,Artist A,Album A,81,US,track,,,");
        assert_eq!(lines[2], "Mix,,,,US,playlist,DJ,42,");
        assert_eq!(lines[3], "Band,,,93,US,artist,,,123456");
    }

    #[test]
    fn playlist_without_owner_leaves_the_cell_empty() {
        let content = write_to_string(&[playlist("Mix", None, Market::De)]);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[1], "Mix,,,,DE,playlist,,42,");
    }

    #[test]
    fn export_preserves_aggregation_order() {
        // 2 tracks, 1 playlist, 3 artists for one market, nothing elsewhere
        let records = vec![
            track("First", Market::Us),
            track("Second", Market::Us),
            playlist("Mix", Some("DJ"), Market::Us),
            artist("One", Market::Us),
            artist("Two", Market::Us),
            artist("Three", Market::Us),
        ];
        let content = write_to_string(&records);
        let lines: Vec<&str> = content.lines().collect();
        // 1 header + 6 data rows
        assert_eq!(lines.len(), 7);
        let names: Vec<&str> = lines[1..]
            .iter()
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(names, vec!["First", "Second", "Mix", "One", "Two", "Three"]);
        assert!(lines[1..].iter().all(|l| l.split(',').nth(4) == Some("US")));
    }

    #[test]
    fn rerunning_overwrites_with_identical_content() {
        let records = vec![track("Song", Market::Ca), artist("Band", Market::Fr)];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&path, &records).unwrap();
        let first = std::fs::read(&path).unwrap();
        write_csv(&path, &records).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);
    }
}
