//! Waymark Archive Layer
//!
//! Persists the one roadmap tree to SQLite so a pipeline session can pick
//! up where the previous one stopped.
//!
//! The archive holds at most one roadmap. [`RoadmapArchive::save`] replaces
//! the whole stored tree inside a single transaction; there is no partial
//! update path. Loading rebuilds the tree in the order it was saved.
//!
//! # Examples
//!
//! ```no_run
//! use waymark_archive::SqliteArchive;
//!
//! let archive = SqliteArchive::new("waymark.db").unwrap();
//! // Archive is now ready for save/load
//! ```

#![warn(missing_docs)]

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use thiserror::Error;
use waymark_domain::{
    Concept, Module, Resource, ResourceKind, Roadmap, RoadmapArchive, RoadmapId, RoadmapStatus,
    Topic,
};

/// Errors that can occur during archive operations
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of RoadmapArchive
///
/// Enum fields are stored under their display names and timestamps as
/// RFC 3339 text, so the database stays readable with plain sqlite3.
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// SqliteArchive instance.
pub struct SqliteArchive {
    conn: Connection,
}

impl SqliteArchive {
    /// Open (or create) an archive at the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use waymark_archive::SqliteArchive;
    ///
    /// let archive = SqliteArchive::new(":memory:").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, ArchiveError> {
        let conn = Connection::open(path)?;
        let mut archive = Self { conn };
        archive.initialize_schema()?;
        Ok(archive)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), ArchiveError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Convert RoadmapId to bytes for storage
    fn roadmap_id_to_bytes(id: RoadmapId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    /// Convert bytes to RoadmapId
    fn bytes_to_roadmap_id(bytes: &[u8]) -> Result<RoadmapId, ArchiveError> {
        if bytes.len() != 16 {
            return Err(ArchiveError::InvalidData(format!(
                "Expected 16 bytes for RoadmapId, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(RoadmapId::from_value(u128::from_be_bytes(arr)))
    }

    fn parse_status(s: &str) -> Result<RoadmapStatus, ArchiveError> {
        RoadmapStatus::parse(s)
            .ok_or_else(|| ArchiveError::InvalidData(format!("Unknown roadmap status: {}", s)))
    }

    fn parse_kind(s: &str) -> Result<ResourceKind, ArchiveError> {
        ResourceKind::parse(s)
            .ok_or_else(|| ArchiveError::InvalidData(format!("Unknown resource kind: {}", s)))
    }

    fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, ArchiveError> {
        DateTime::parse_from_rfc3339(s)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| ArchiveError::InvalidData(format!("Bad timestamp '{}': {}", s, e)))
    }

    /// Write the whole tree under an already-open transaction
    fn insert_tree(tx: &Transaction<'_>, roadmap: &Roadmap) -> Result<(), ArchiveError> {
        let id_bytes = Self::roadmap_id_to_bytes(roadmap.id);
        tx.execute(
            "INSERT INTO roadmaps (id, status, created_at, last_modified_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                &id_bytes,
                roadmap.status.as_str(),
                roadmap.created_at.to_rfc3339(),
                roadmap.last_modified_at.to_rfc3339(),
            ],
        )?;

        for module in &roadmap.modules {
            tx.execute(
                "INSERT INTO modules (roadmap_id, position, title, description, estimated_hours)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    &id_bytes,
                    module.order,
                    &module.title,
                    &module.description,
                    module.estimated_hours as i64,
                ],
            )?;
            let module_row = tx.last_insert_rowid();

            for topic in &module.topics {
                tx.execute(
                    "INSERT INTO topics (module_id, position, title, description, confidence_score)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        module_row,
                        topic.order,
                        &topic.title,
                        &topic.description,
                        topic.confidence_score,
                    ],
                )?;
                let topic_row = tx.last_insert_rowid();

                for concept in &topic.concepts {
                    tx.execute(
                        "INSERT INTO concepts (topic_id, position, title, description)
                         VALUES (?1, ?2, ?3, ?4)",
                        params![topic_row, concept.order, &concept.title, &concept.description],
                    )?;
                }
            }

            for resource in &module.resources {
                tx.execute(
                    "INSERT INTO resources (module_id, title, url, kind, source, description)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        module_row,
                        &resource.title,
                        &resource.url,
                        resource.kind.as_str(),
                        &resource.source,
                        &resource.description,
                    ],
                )?;
            }
        }

        Ok(())
    }

    fn load_modules(&self, roadmap_id: &[u8]) -> Result<Vec<Module>, ArchiveError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, position, title, description, estimated_hours
             FROM modules WHERE roadmap_id = ?1 ORDER BY position",
        )?;
        let rows = stmt
            .query_map(params![roadmap_id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)? as u32,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, i64>(4)? as u64,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut modules = Vec::with_capacity(rows.len());
        for (module_row, position, title, description, estimated_hours) in rows {
            let mut module = Module::new(title, description, position, estimated_hours);
            module.topics = self.load_topics(module_row)?;
            module.resources = self.load_resources(module_row)?;
            modules.push(module);
        }
        Ok(modules)
    }

    fn load_topics(&self, module_row: i64) -> Result<Vec<Topic>, ArchiveError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, position, title, description, confidence_score
             FROM topics WHERE module_id = ?1 ORDER BY position",
        )?;
        let rows = stmt
            .query_map(params![module_row], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)? as u32,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, i32>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut topics = Vec::with_capacity(rows.len());
        for (topic_row, position, title, description, confidence_score) in rows {
            let mut topic = Topic::new(title, description, position, confidence_score);
            topic.concepts = self.load_concepts(topic_row)?;
            topics.push(topic);
        }
        Ok(topics)
    }

    fn load_concepts(&self, topic_row: i64) -> Result<Vec<Concept>, ArchiveError> {
        let mut stmt = self.conn.prepare(
            "SELECT position, title, description
             FROM concepts WHERE topic_id = ?1 ORDER BY position",
        )?;
        let concepts = stmt
            .query_map(params![topic_row], |row| {
                Ok(Concept::new(
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(0)? as u32,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(concepts)
    }

    fn load_resources(&self, module_row: i64) -> Result<Vec<Resource>, ArchiveError> {
        // resources carry no position; rowid order is insertion order
        let mut stmt = self.conn.prepare(
            "SELECT title, url, kind, source, description
             FROM resources WHERE module_id = ?1 ORDER BY id",
        )?;
        let resources = stmt
            .query_map(params![module_row], |row| {
                let kind_str: String = row.get(2)?;
                let kind = Self::parse_kind(&kind_str).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        2,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
                Ok(Resource::new(
                    row.get(0)?,
                    row.get(1)?,
                    kind,
                    row.get(3)?,
                    row.get(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(resources)
    }
}

impl RoadmapArchive for SqliteArchive {
    type Error = ArchiveError;

    fn load(&self) -> Result<Option<Roadmap>, Self::Error> {
        let header = self
            .conn
            .query_row(
                "SELECT id, status, created_at, last_modified_at FROM roadmaps LIMIT 1",
                [],
                |row| {
                    Ok((
                        row.get::<_, Vec<u8>>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                    ))
                },
            )
            .optional()?;
        let Some((id_bytes, status, created_at, last_modified_at)) = header else {
            return Ok(None);
        };

        let mut roadmap = Roadmap::new();
        roadmap.id = Self::bytes_to_roadmap_id(&id_bytes)?;
        roadmap.status = Self::parse_status(&status)?;
        roadmap.created_at = Self::parse_timestamp(&created_at)?;
        roadmap.last_modified_at = Self::parse_timestamp(&last_modified_at)?;
        roadmap.modules = self.load_modules(&id_bytes)?;

        Ok(Some(roadmap))
    }

    fn save(&mut self, roadmap: &Roadmap) -> Result<(), Self::Error> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM roadmaps", [])?;
        Self::insert_tree(&tx, roadmap)?;
        tx.commit()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.conn.execute("DELETE FROM roadmaps", [])?;
        Ok(())
    }
}
