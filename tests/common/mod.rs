//! Helpers shared by the integration tests: archive reading and a small
//! structural reader for navigation markup.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use walkdir::WalkDir;
use zip::{CompressionMethod, ZipArchive};

/// One archive entry as stored on disk.
pub struct StoredEntry {
    pub name: String,
    pub method: CompressionMethod,
    pub is_dir: bool,
    pub data: Vec<u8>,
}

/// Every entry of the archive at `path`, in physical order.
pub fn read_entries(path: &Path) -> Vec<StoredEntry> {
    let file = File::open(path).expect("open archive");
    let mut archive = ZipArchive::new(file).expect("read zip");

    (0..archive.len())
        .map(|i| {
            let mut entry = archive.by_index(i).expect("entry");
            let mut data = Vec::new();
            entry.read_to_end(&mut data).expect("read entry");
            StoredEntry {
                name: entry.name().to_string(),
                method: entry.compression(),
                is_dir: entry.is_dir(),
                data,
            }
        })
        .collect()
}

/// Content of one named entry.
pub fn entry_text(path: &Path, name: &str) -> String {
    let entry = read_entries(path)
        .into_iter()
        .find(|e| e.name == name)
        .unwrap_or_else(|| panic!("no entry {name}"));
    String::from_utf8(entry.data).expect("utf-8 entry")
}

/// Relative path -> bytes for every file under `dir`.
pub fn snapshot_dir(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(dir)
        .into_iter()
        .map(|e| e.expect("walk"))
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(dir).unwrap();
            let key = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            (key, std::fs::read(e.path()).unwrap())
        })
        .collect()
}

/// A link found in an EPUB 3 `<nav>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub depth: usize,
    pub href: String,
    pub label: String,
    pub epub_type: Option<String>,
}

fn attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .map(|a| String::from_utf8(a.value.to_vec()).expect("utf-8 attribute"))
}

/// Links of the `<nav epub:type="{kind}">` collection, in document order.
///
/// Depth counts enclosing `<ol>` elements inside the nav.
pub fn nav_links(xhtml: &str, kind: &str) -> Vec<NavLink> {
    let mut reader = Reader::from_str(xhtml);
    reader.config_mut().trim_text(true);

    let mut links = Vec::new();
    let mut in_nav = false;
    let mut depth = 0;
    let mut current: Option<NavLink> = None;

    loop {
        match reader.read_event().expect("well-formed nav document") {
            Event::Start(e) => match e.name().as_ref() {
                b"nav" => in_nav = attr(&e, b"epub:type").as_deref() == Some(kind),
                b"ol" if in_nav => depth += 1,
                b"a" if in_nav => {
                    current = Some(NavLink {
                        depth,
                        href: attr(&e, b"href").unwrap_or_default(),
                        label: String::new(),
                        epub_type: attr(&e, b"epub:type"),
                    });
                }
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"nav" => in_nav = false,
                b"ol" if in_nav => depth -= 1,
                b"a" => links.extend(current.take()),
                _ => {}
            },
            Event::Text(t) => {
                if let Some(link) = current.as_mut() {
                    link.label.push_str(&String::from_utf8_lossy(t.as_ref()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    links
}

/// A navPoint from an NCX `navMap`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavPoint {
    pub id: String,
    pub depth: usize,
    pub play_order: u32,
    pub label: String,
    pub src: String,
    pub parent: Option<String>,
}

/// navPoints in document (pre-)order.
pub fn ncx_points(ncx: &str) -> Vec<NavPoint> {
    let mut reader = Reader::from_str(ncx);
    reader.config_mut().trim_text(true);

    let mut points: Vec<NavPoint> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    let mut in_label = false;
    let mut in_text = false;

    loop {
        match reader.read_event().expect("well-formed ncx") {
            Event::Start(e) => match e.name().as_ref() {
                b"navPoint" => {
                    let parent = stack.last().map(|&i| points[i].id.clone());
                    points.push(NavPoint {
                        id: attr(&e, b"id").unwrap_or_default(),
                        depth: stack.len() + 1,
                        play_order: attr(&e, b"playOrder")
                            .and_then(|v| v.parse().ok())
                            .unwrap_or(0),
                        label: String::new(),
                        src: String::new(),
                        parent,
                    });
                    stack.push(points.len() - 1);
                }
                b"navLabel" => in_label = true,
                b"text" => in_text = in_label,
                _ => {}
            },
            Event::Empty(e) if e.name().as_ref() == b"content" => {
                if let Some(&i) = stack.last() {
                    points[i].src = attr(&e, b"src").unwrap_or_default();
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"navPoint" => {
                    stack.pop();
                }
                b"navLabel" => in_label = false,
                b"text" => in_text = false,
                _ => {}
            },
            Event::Text(t) if in_text => {
                if let Some(&i) = stack.last() {
                    points[i].label.push_str(&String::from_utf8_lossy(t.as_ref()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    points
}
