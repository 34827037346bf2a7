//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use serde_json::{json, Value};

use iso_chooser::cli::tui::menu::events::EventSource;

/// A single-version product with one `iso` item
pub fn iso_product(arch: &str, version: &str, path: &str, sha256: &str, size: u64) -> Value {
    json!({
        "arch": arch,
        "os": "ubuntu-server",
        "release": "noble",
        "release_title": "24.04",
        "release_codename": "Noble Numbat",
        "versions": {
            version: {
                "items": {
                    "manifest": {
                        "ftype": "manifest",
                        "path": format!("{}.manifest", path),
                        "sha256": "0000",
                        "size": 10
                    },
                    "iso": {
                        "ftype": "iso",
                        "path": path,
                        "sha256": sha256,
                        "size": size
                    }
                }
            }
        }
    })
}

/// Wrap products (in the given order) into a catalog document
pub fn catalog(products: &[(&str, Value)]) -> String {
    let mut map = serde_json::Map::new();
    for (id, product) in products {
        map.insert(id.to_string(), product.clone());
    }
    json!({
        "format": "products:1.0",
        "content_id": "com.ubuntu.cdimage:ubuntu-server",
        "products": map
    })
    .to_string()
}

/// Catalog with one amd64 product for `release`
pub fn simple_catalog(release: &str) -> String {
    catalog(&[(
        &format!("com.ubuntu.cdimage:ubuntu-server:{}:amd64", release),
        iso_product(
            "amd64",
            "20240101",
            &format!("https://releases.ubuntu.com/{0}/ubuntu-{0}-live-server-amd64.iso", release),
            "abc123",
            123456,
        ),
    )])
}

pub fn write_catalog(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Replays a fixed list of events, then reports end of input
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Plain key presses without modifiers
    pub fn keys(codes: impl IntoIterator<Item = KeyCode>) -> Self {
        Self::new(
            codes
                .into_iter()
                .map(|code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted events"))
    }
}
