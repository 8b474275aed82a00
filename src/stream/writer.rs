//! The append-only stream abstraction forecasts are written to, with a
//! buffered record builder and the shipped sink implementations.

use crate::stream::error::StreamError;
use crate::stream::record::{Record, RecordValue};
use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};
use std::io::Write;

/// An append-only sink of timestamped records.
pub trait Stream {
    /// Appends one record to the sink.
    fn write(&mut self, record: Record) -> Result<(), StreamError>;
}

/// Buffered record building on any [`Stream`].
///
/// # Examples
///
/// ```
/// use bikecast::{MemoryStream, StreamExt};
/// use chrono::{FixedOffset, TimeZone};
///
/// let mut stream = MemoryStream::new();
/// let timestamp = FixedOffset::west_opt(5 * 3600)
///     .unwrap()
///     .with_ymd_and_hms(2023, 4, 7, 14, 15, 0)
///     .unwrap();
///
/// stream
///     .buffer()
///     .timestamp(timestamp)
///     .value("real_n_bikes", 412i64)
///     .write()?;
///
/// assert_eq!(stream.records().len(), 1);
/// # Ok::<(), bikecast::StreamError>(())
/// ```
pub trait StreamExt: Stream {
    /// Starts a buffered record targeting this stream.
    fn buffer(&mut self) -> RecordBuffer<'_, Self> {
        RecordBuffer::new(self)
    }
}

impl<S: Stream + ?Sized> StreamExt for S {}

/// A record under construction; chain `.timestamp(..)` and `.value(..)`,
/// then flush with `.write()`.
pub struct RecordBuffer<'a, S: Stream + ?Sized> {
    stream: &'a mut S,
    timestamp: Option<DateTime<FixedOffset>>,
    values: Vec<(String, RecordValue)>,
}

impl<'a, S: Stream + ?Sized> RecordBuffer<'a, S> {
    pub fn new(stream: &'a mut S) -> Self {
        Self {
            stream,
            timestamp: None,
            values: Vec::new(),
        }
    }

    /// Sets the record's timestamp.
    pub fn timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Adds one key/value pair to the record.
    pub fn value(mut self, key: impl Into<String>, value: impl Into<RecordValue>) -> Self {
        self.values.push((key.into(), value.into()));
        self
    }

    /// Flushes the buffered record to the stream.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::MissingTimestamp`] when no timestamp was set;
    /// sink errors propagate unchanged.
    pub fn write(self) -> Result<(), StreamError> {
        let timestamp = self.timestamp.ok_or(StreamError::MissingTimestamp)?;
        self.stream.write(Record {
            timestamp,
            values: self.values,
        })
    }
}

/// An in-process stream keeping its records in memory.
///
/// Used by tests and the demo; also handy as a staging sink before handing
/// records to an external producer.
#[derive(Debug, Default)]
pub struct MemoryStream {
    records: Vec<Record>,
}

impl MemoryStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records appended so far, oldest first.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Stream for MemoryStream {
    fn write(&mut self, record: Record) -> Result<(), StreamError> {
        self.records.push(record);
        Ok(())
    }
}

/// A stream serializing each record as one JSON object per line.
///
/// The timestamp is emitted as an RFC 3339 `"timestamp"` field; the record's
/// values follow as top-level fields.
pub struct JsonLinesStream<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesStream<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the stream, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Stream for JsonLinesStream<W> {
    fn write(&mut self, record: Record) -> Result<(), StreamError> {
        let mut object = Map::new();
        object.insert(
            "timestamp".to_string(),
            Value::String(record.timestamp.to_rfc3339()),
        );
        for (key, value) in record.values {
            object.insert(key, serde_json::to_value(value)?);
        }

        serde_json::to_writer(&mut self.writer, &Value::Object(object))?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
