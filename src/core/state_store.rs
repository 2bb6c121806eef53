//! Saving and restoring a [`Zoo`] as a tagged snapshot.
//!
//! File layout:
//!
//! ```text
//! +--------+---------+--------+----------------------------------+
//! | "ZOOS" | version | format | payload (Snapshot)               |
//! | 4 B    | 1 B     | 1 B    | bincode or JSON, to end of file  |
//! +--------+---------+--------+----------------------------------+
//! ```
//!
//! Variants are encoded by serde's externally tagged enum representation, so a
//! record with a variant this build does not know fails to decode instead of
//! being read as something else.

use crate::domain::model::{AnimalKind, Zoo};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, ZooError};
use bincode::Options;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SNAPSHOT_MAGIC: [u8; 4] = *b"ZOOS";
pub const SNAPSHOT_VERSION: u8 = 1;
pub const HEADER_LEN: usize = SNAPSHOT_MAGIC.len() + 2;

/// Upper bound for a binary payload; also caps allocations while decoding untrusted bytes.
const MAX_SNAPSHOT_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotFormat {
    #[default]
    Binary,
    Json,
}

impl SnapshotFormat {
    pub fn tag(self) -> u8 {
        match self {
            SnapshotFormat::Binary => 0,
            SnapshotFormat::Json => 1,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(SnapshotFormat::Binary),
            1 => Some(SnapshotFormat::Json),
            _ => None,
        }
    }
}

impl fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotFormat::Binary => f.write_str("binary"),
            SnapshotFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for SnapshotFormat {
    type Err = ZooError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "binary" | "bin" => Ok(SnapshotFormat::Binary),
            "json" => Ok(SnapshotFormat::Json),
            other => Err(ZooError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: binary, json".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Snapshot {
    pub saved_at: DateTime<Utc>,
    pub zoo: Zoo,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    saved_at: DateTime<Utc>,
    zoo: &'a Zoo,
}

fn bincode_options() -> impl Options {
    // DefaultOptions: varint integers, trailing bytes rejected
    bincode::DefaultOptions::new().with_limit(MAX_SNAPSHOT_BYTES)
}

/// JSON has no NaN or infinity; serde_json would write them as `null`, which never reads back.
fn ensure_finite_floats(zoo: &Zoo) -> Result<()> {
    for animal in &zoo.animals {
        if let AnimalKind::Bird { wing_span } = animal.kind {
            if !wing_span.is_finite() {
                return Err(ZooError::EncodeError {
                    message: format!(
                        "wing span of '{}' is {}, which JSON cannot represent",
                        animal.name, wing_span
                    ),
                });
            }
        }
    }
    Ok(())
}

/// Encodes `zoo` into a complete snapshot, header included.
pub fn encode(zoo: &Zoo, format: SnapshotFormat) -> Result<Vec<u8>> {
    let snapshot = SnapshotRef {
        saved_at: Utc::now(),
        zoo,
    };

    let payload = match format {
        SnapshotFormat::Binary => {
            bincode_options()
                .serialize(&snapshot)
                .map_err(|e| ZooError::EncodeError {
                    message: e.to_string(),
                })?
        }
        SnapshotFormat::Json => {
            ensure_finite_floats(zoo)?;
            serde_json::to_vec_pretty(&snapshot).map_err(|e| ZooError::EncodeError {
                message: e.to_string(),
            })?
        }
    };

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(&SNAPSHOT_MAGIC);
    bytes.push(SNAPSHOT_VERSION);
    bytes.push(format.tag());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

pub fn decode_snapshot(bytes: &[u8]) -> Result<Snapshot> {
    if bytes.len() < HEADER_LEN {
        return Err(ZooError::decode(format!(
            "truncated header: {} of {} bytes",
            bytes.len(),
            HEADER_LEN
        )));
    }

    let (header, payload) = bytes.split_at(HEADER_LEN);
    if header[..SNAPSHOT_MAGIC.len()] != SNAPSHOT_MAGIC {
        return Err(ZooError::decode("not a zoo snapshot (bad magic)"));
    }

    let version = header[4];
    if version != SNAPSHOT_VERSION {
        return Err(ZooError::decode(format!(
            "unsupported snapshot version {} (expected {})",
            version, SNAPSHOT_VERSION
        )));
    }

    let format = SnapshotFormat::from_tag(header[5])
        .ok_or_else(|| ZooError::decode(format!("unknown payload format tag {}", header[5])))?;

    match format {
        SnapshotFormat::Binary => bincode_options()
            .deserialize(payload)
            .map_err(|e| ZooError::decode(e.to_string())),
        SnapshotFormat::Json => {
            serde_json::from_slice(payload).map_err(|e| ZooError::decode(e.to_string()))
        }
    }
}

pub fn decode(bytes: &[u8]) -> Result<Zoo> {
    decode_snapshot(bytes).map(|snapshot| snapshot.zoo)
}

/// Persists zoos through a [`Storage`] backend.
pub struct StateStore<S: Storage> {
    storage: S,
    format: SnapshotFormat,
}

impl<S: Storage> StateStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            format: SnapshotFormat::default(),
        }
    }

    pub fn with_format(mut self, format: SnapshotFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> SnapshotFormat {
        self.format
    }

    pub fn save(&self, zoo: &Zoo, destination: &str) -> Result<()> {
        let bytes = encode(zoo, self.format)?;
        self.storage.write_file(destination, &bytes)?;

        tracing::info!(
            "Saved {} ({} animals, {} employees) to {} as {} [{} bytes]",
            zoo.name,
            zoo.animals.len(),
            zoo.employees.len(),
            destination,
            self.format,
            bytes.len()
        );
        Ok(())
    }

    pub fn load(&self, source: &str) -> Result<Zoo> {
        self.load_snapshot(source).map(|snapshot| snapshot.zoo)
    }

    pub fn load_snapshot(&self, source: &str) -> Result<Snapshot> {
        let bytes = self.storage.read_file(source)?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), source);

        let snapshot = decode_snapshot(&bytes)?;
        tracing::info!(
            "Loaded {} from {} (saved at {})",
            snapshot.zoo.name,
            source,
            snapshot.saved_at.to_rfc3339()
        );
        Ok(snapshot)
    }
}
