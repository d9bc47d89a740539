//! Index archive: one portable blob for the whole index directory.
//!
//! The built index ships as a zstd-compressed tar stream so it can be
//! fetched as a single opaque byte blob and unpacked wherever the query
//! engine runs. Unpacking always clears the target first, so
//! re-provisioning the same blob is idempotent.

use std::{fs, io, path::Path};

use tracing::debug;

use crate::error::IndexError;

/// Packs an index directory into a compressed archive blob.
pub fn pack(index_dir: &Path) -> Result<Vec<u8>, IndexError> {
    let pack_err = |source: io::Error| IndexError::Pack {
        path: index_dir.to_path_buf(),
        source,
    };

    let mut buf = Vec::new();
    let encoder =
        zstd::Encoder::new(&mut buf, zstd::DEFAULT_COMPRESSION_LEVEL).map_err(pack_err)?;

    let mut builder = tar::Builder::new(encoder);
    builder.append_dir_all(".", index_dir).map_err(pack_err)?;

    let encoder = builder.into_inner().map_err(pack_err)?;
    encoder.finish().map_err(pack_err)?;

    debug!(bytes = buf.len(), path = %index_dir.display(), "packed index");
    Ok(buf)
}

/// Unpacks an archive blob into the target directory.
///
/// Any pre-existing content at `target` is deleted first. A corrupt or
/// unreadable blob fails the whole operation.
pub fn unpack(blob: &[u8], target: &Path) -> Result<(), IndexError> {
    let unpack_err = |source: io::Error| IndexError::Unpack {
        path: target.to_path_buf(),
        source,
    };

    if target.exists() {
        fs::remove_dir_all(target).map_err(unpack_err)?;
    }
    fs::create_dir_all(target).map_err(unpack_err)?;

    let decoder = zstd::Decoder::new(blob).map_err(unpack_err)?;
    let mut archive = tar::Archive::new(decoder);
    archive.unpack(target).map_err(unpack_err)?;

    debug!(path = %target.display(), "unpacked index");
    Ok(())
}

#[cfg(test)]
mod test {
    use tempfile::TempDir;

    use super::*;

    /// Writes a fake index directory with a couple of files.
    fn write_source(dir: &Path) {
        fs::write(dir.join("meta.json"), b"{\"segments\":[]}").unwrap();
        fs::write(dir.join("seg.idx"), vec![0u8; 1024]).unwrap();
    }

    fn read_tree(dir: &Path) -> Vec<(String, Vec<u8>)> {
        let mut entries: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| {
                let e = e.unwrap();
                (
                    e.file_name().to_string_lossy().into_owned(),
                    fs::read(e.path()).unwrap(),
                )
            })
            .collect();
        entries.sort();
        entries
    }

    #[test]
    fn pack_unpack_round_trips() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source");
        fs::create_dir_all(&source).unwrap();
        write_source(&source);

        let blob = pack(&source).unwrap();
        let target = temp.path().join("target");
        unpack(&blob, &target).unwrap();

        assert_eq!(read_tree(&source), read_tree(&target));
    }

    #[test]
    fn unpack_replaces_existing_content() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source");
        fs::create_dir_all(&source).unwrap();
        write_source(&source);

        let blob = pack(&source).unwrap();
        let target = temp.path().join("target");

        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("stale.bin"), b"leftover").unwrap();

        unpack(&blob, &target).unwrap();

        assert!(!target.join("stale.bin").exists());
        assert_eq!(read_tree(&source), read_tree(&target));
    }

    #[test]
    fn unpack_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source");
        fs::create_dir_all(&source).unwrap();
        write_source(&source);

        let blob = pack(&source).unwrap();
        let target = temp.path().join("target");

        unpack(&blob, &target).unwrap();
        let first = read_tree(&target);
        unpack(&blob, &target).unwrap();
        let second = read_tree(&target);

        assert_eq!(first, second);
    }

    #[test]
    fn corrupt_blob_is_rejected() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target");

        let err = unpack(b"not an archive at all", &target).unwrap_err();
        assert!(matches!(err, IndexError::Unpack { .. }));
    }

    #[test]
    fn compression_shrinks_repetitive_data() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("zeros.bin"), vec![0u8; 64 * 1024]).unwrap();

        let blob = pack(&source).unwrap();
        assert!(blob.len() < 64 * 1024);
    }
}
