//! Byte-level resource access with transparent compression.

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::settings::Settings;
use crate::StoreError;

/// Two-byte gzip signature.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// File access for shape records.
///
/// Writing follows the settings' compress flag; reading sniffs the gzip
/// signature instead, so a store configured either way loads both forms.
#[derive(Clone, Debug)]
pub struct FileStore {
    compress: bool,
}

impl FileStore {
    pub fn new(settings: &Settings) -> Self {
        Self {
            compress: settings.compress,
        }
    }

    /// Open a resource for reading, decompressing gzip content
    /// transparently.
    pub fn open_for_read(&self, path: impl AsRef<Path>) -> Result<Box<dyn Read>, StoreError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| StoreError::from_io(e, path))?;
        let mut reader = BufReader::new(file);
        let head = reader.fill_buf().map_err(|e| StoreError::from_io(e, path))?;
        if head.starts_with(&GZIP_MAGIC) {
            log::debug!("{} is gzip, decompressing", path.display());
            Ok(Box::new(GzDecoder::new(reader)))
        } else {
            Ok(Box::new(reader))
        }
    }

    /// Open a resource for writing.
    ///
    /// With `exclusive` the resource must not exist yet; otherwise an
    /// existing resource is truncated. The returned writer must be
    /// [`StoreWriter::finish`]ed so compressed output gets its trailer.
    pub fn open_for_write(
        &self,
        path: impl AsRef<Path>,
        exclusive: bool,
    ) -> Result<StoreWriter, StoreError> {
        let path = path.as_ref();
        let file = if exclusive {
            OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
                .map_err(|e| StoreError::from_io(e, path))?
        } else {
            File::create(path).map_err(|e| StoreError::from_io(e, path))?
        };
        let writer = BufWriter::new(file);
        let sink = if self.compress {
            Sink::Gzip(GzEncoder::new(writer, Compression::default()))
        } else {
            Sink::Plain(writer)
        };
        Ok(StoreWriter { sink })
    }

    /// Read a whole resource into text.
    pub fn read_to_string(&self, path: impl AsRef<Path>) -> Result<String, StoreError> {
        let path = path.as_ref();
        let mut text = String::new();
        self.open_for_read(path)?
            .read_to_string(&mut text)
            .map_err(|e| StoreError::from_io(e, path))?;
        Ok(text)
    }

    /// Write a whole resource in one go.
    pub fn write_all(
        &self,
        path: impl AsRef<Path>,
        bytes: &[u8],
        exclusive: bool,
    ) -> Result<(), StoreError> {
        let mut writer = self.open_for_write(path, exclusive)?;
        writer.write_all(bytes).map_err(StoreError::Io)?;
        writer.finish()
    }
}

#[derive(Debug)]
enum Sink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

/// Writer handle for one open resource.
#[derive(Debug)]
pub struct StoreWriter {
    sink: Sink,
}

impl StoreWriter {
    /// Flush everything and write the compression trailer if there is
    /// one. Dropping the writer unfinished can leave a truncated file.
    pub fn finish(self) -> Result<(), StoreError> {
        match self.sink {
            Sink::Plain(mut writer) => writer.flush().map_err(StoreError::Io),
            Sink::Gzip(encoder) => {
                let mut writer = encoder.finish().map_err(StoreError::Io)?;
                writer.flush().map_err(StoreError::Io)
            }
        }
    }
}

impl Write for StoreWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.sink {
            Sink::Plain(writer) => writer.write(buf),
            Sink::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.sink {
            Sink::Plain(writer) => writer.flush(),
            Sink::Gzip(encoder) => encoder.flush(),
        }
    }
}
