/* Source file sinks.
   A sink creates one writable file per generated unit. Content only becomes
   visible on commit(); a file dropped without commit is discarded, so a
   failed write never leaves a half written unit behind. */

use indexmap::IndexMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

pub const SOURCE_EXTENSION: &str = "java";

pub trait SourceFile: Write {
    fn commit(self: Box<Self>) -> io::Result<()>;
}

pub trait SourceFileSink {
    fn create_source_file(&mut self, qualified_name: &str) -> io::Result<Box<dyn SourceFile + '_>>;
}

/* Writes units below a root directory, one directory level per package
   segment (e.g. "com.acme.PizzaBuilder" -> "com/acme/PizzaBuilder.java") */
#[derive(Debug)]
pub struct DirectoryFiler {
    root: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectoryFiler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /* Paths of all committed files so far */
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /* Rejects names whose segments are not plain names, so every unit stays
       below the root */
    pub fn path_for(&self, qualified_name: &str) -> io::Result<PathBuf> {
        let mut segments: Vec<&str> = qualified_name.split('.').collect();
        if let Some(bad) = segments.iter().find(|s| !is_plain_segment(s)) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid segment '{}' in source file name '{}'", bad, qualified_name),
            ));
        }

        let mut path = self.root.clone();
        let simple_name = segments.pop().unwrap_or_default();
        for segment in segments {
            path.push(segment);
        }
        path.push(format!("{}.{}", simple_name, SOURCE_EXTENSION));
        Ok(path)
    }
}

fn is_plain_segment(segment: &str) -> bool {
    if segment.is_empty() || segment == ".." || segment.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

impl SourceFileSink for DirectoryFiler {
    fn create_source_file(&mut self, qualified_name: &str) -> io::Result<Box<dyn SourceFile + '_>> {
        let final_path = self.path_for(qualified_name)?;
        if let Some(parent) = final_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = final_path.with_extension(format!("{}.tmp", SOURCE_EXTENSION));
        let file = File::create(&tmp_path)?;
        debug!(path = %tmp_path.display(), "created pending source file");

        Ok(Box::new(PendingFile {
            writer: Some(BufWriter::new(file)),
            tmp_path,
            final_path,
            committed: false,
            written: &mut self.written,
        }))
    }
}

struct PendingFile<'a> {
    writer: Option<BufWriter<File>>,
    tmp_path: PathBuf,
    final_path: PathBuf,
    committed: bool,
    written: &'a mut Vec<PathBuf>,
}

impl PendingFile<'_> {
    fn writer(&mut self) -> io::Result<&mut BufWriter<File>> {
        self.writer
            .as_mut()
            .ok_or_else(|| io::Error::other("source file already closed"))
    }
}

impl Write for PendingFile<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer()?.flush()
    }
}

impl SourceFile for PendingFile<'_> {
    fn commit(mut self: Box<Self>) -> io::Result<()> {
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| io::Error::other("source file already closed"))?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        drop(writer);

        fs::rename(&self.tmp_path, &self.final_path)?;
        self.committed = true;
        debug!(path = %self.final_path.display(), "committed source file");
        self.written.push(self.final_path.clone());
        Ok(())
    }
}

impl Drop for PendingFile<'_> {
    fn drop(&mut self) {
        /* Close before removing */
        self.writer.take();
        if !self.committed {
            let _ = fs::remove_file(&self.tmp_path);
        }
    }
}

/* Keeps committed units in memory, keyed by qualified name */
#[derive(Debug, Default)]
pub struct MemoryFiler {
    pub units: IndexMap<String, String>,
}

impl MemoryFiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, qualified_name: &str) -> Option<&str> {
        self.units.get(qualified_name).map(String::as_str)
    }
}

impl SourceFileSink for MemoryFiler {
    fn create_source_file(&mut self, qualified_name: &str) -> io::Result<Box<dyn SourceFile + '_>> {
        Ok(Box::new(MemoryFile {
            qualified_name: qualified_name.to_string(),
            buffer: Vec::new(),
            units: &mut self.units,
        }))
    }
}

struct MemoryFile<'a> {
    qualified_name: String,
    buffer: Vec<u8>,
    units: &'a mut IndexMap<String, String>,
}

impl Write for MemoryFile<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SourceFile for MemoryFile<'_> {
    fn commit(self: Box<Self>) -> io::Result<()> {
        let MemoryFile {
            qualified_name,
            buffer,
            units,
        } = *self;
        let text = String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        units.insert(qualified_name, text);
        Ok(())
    }
}
