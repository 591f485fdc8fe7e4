//! Output sinks: stdout or a file, compressed according to its extension.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const WRITER_BUFFER_SIZE: usize = 256 * 1024;

/// Compression format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Bzip2,
    Xz,
    Zstd,
}

impl Compression {
    /// Detect compression format from file extension
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("gz" | "gzip") => Compression::Gzip,
            Some("bz2" | "bzip2") => Compression::Bzip2,
            Some("xz" | "lzma") => Compression::Xz,
            Some("zst" | "zstd") => Compression::Zstd,
            _ => Compression::None,
        }
    }

    /// Write `data` to `writer` through the matching compressor.
    pub fn write_all<W: Write>(&self, writer: W, data: &[u8]) -> io::Result<()> {
        match self {
            Compression::None => {
                let mut w = writer;
                w.write_all(data)?;
                w.flush()
            }
            Compression::Gzip => {
                let mut enc = flate2::write::GzEncoder::new(writer, flate2::Compression::default());
                enc.write_all(data)?;
                enc.finish()?.flush()
            }
            Compression::Bzip2 => {
                let mut enc = bzip2::write::BzEncoder::new(writer, bzip2::Compression::default());
                enc.write_all(data)?;
                enc.finish()?.flush()
            }
            Compression::Xz => {
                let mut enc = xz2::write::XzEncoder::new(writer, 6);
                enc.write_all(data)?;
                enc.finish()?.flush()
            }
            Compression::Zstd => {
                let mut enc = zstd::stream::write::Encoder::new(writer, 0)?;
                enc.write_all(data)?;
                enc.finish()?.flush()
            }
        }
    }
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Compression::None => write!(f, "none"),
            Compression::Gzip => write!(f, "gzip"),
            Compression::Bzip2 => write!(f, "bzip2"),
            Compression::Xz => write!(f, "xz"),
            Compression::Zstd => write!(f, "zstd"),
        }
    }
}

/// Write `text` plus a trailing newline to `path`, or to stdout when `None`.
///
/// Returns the compression applied.
pub fn write_output(path: Option<&Path>, text: &str) -> io::Result<Compression> {
    let mut data = Vec::with_capacity(text.len() + 1);
    data.extend_from_slice(text.as_bytes());
    data.push(b'\n');

    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let compression = Compression::from_path(path);
            let file = BufWriter::with_capacity(WRITER_BUFFER_SIZE, File::create(path)?);
            compression.write_all(file, &data)?;
            Ok(compression)
        }
        None => {
            let stdout = io::stdout();
            Compression::None.write_all(stdout.lock(), &data)?;
            Ok(Compression::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_detect_from_extension() {
        assert_eq!(Compression::from_path(Path::new("a.sql")), Compression::None);
        assert_eq!(Compression::from_path(Path::new("a.sql.GZ")), Compression::Gzip);
        assert_eq!(Compression::from_path(Path::new("a.csv.bz2")), Compression::Bzip2);
        assert_eq!(Compression::from_path(Path::new("a.xml.xz")), Compression::Xz);
        assert_eq!(Compression::from_path(Path::new("a.json.zst")), Compression::Zstd);
    }

    #[test]
    fn test_plain_file_gets_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out.csv");
        assert_eq!(write_output(Some(&path), "a,b").unwrap(), Compression::None);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n");
    }

    #[test]
    fn test_compressed_outputs_decode() {
        let dir = TempDir::new().unwrap();
        let text = "INSERT INTO t (id) VALUES\n(1);";

        let gz = dir.path().join("out.sql.gz");
        write_output(Some(&gz), text).unwrap();
        let mut decoded = String::new();
        flate2::read::GzDecoder::new(File::open(&gz).unwrap())
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, format!("{}\n", text));

        let zst = dir.path().join("out.sql.zst");
        write_output(Some(&zst), text).unwrap();
        let decoded = zstd::stream::decode_all(File::open(&zst).unwrap()).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), format!("{}\n", text));

        let xz = dir.path().join("out.sql.xz");
        write_output(Some(&xz), text).unwrap();
        let mut decoded = String::new();
        xz2::read::XzDecoder::new(File::open(&xz).unwrap())
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, format!("{}\n", text));

        let bz = dir.path().join("out.sql.bz2");
        write_output(Some(&bz), text).unwrap();
        let mut decoded = String::new();
        bzip2::read::BzDecoder::new(File::open(&bz).unwrap())
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, format!("{}\n", text));
    }
}
