//! Content-aware artifact writing.

use std::io;
use std::path::Path;

/// Whether [`write_if_changed`] actually wrote the target file.
///
/// Informational only: the caller's cache update must not depend on this
/// distinction, since an unchanged artifact still means the input compiled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The target was created or its content replaced.
    Written,
    /// The target already held exactly this content; nothing was written.
    Unchanged,
}

/// Writes `content` to `target` only if it differs from the current file
/// content.
///
/// An absent target always counts as changed. The comparison is an exact
/// byte comparison, so the target's modification time moves only when its
/// content does.
pub fn write_if_changed(target: &Path, content: &[u8]) -> io::Result<WriteOutcome> {
    match std::fs::read(target) {
        Ok(existing) if existing == content => return Ok(WriteOutcome::Unchanged),
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    std::fs::write(target, content)?;
    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_target_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("tri.vert.glsl.spv");

        let outcome = write_if_changed(&target, b"0x0, 0x1").unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(std::fs::read(&target).unwrap(), b"0x0, 0x1");
    }

    #[test]
    fn identical_content_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("tri.vert.glsl.spv");
        std::fs::write(&target, "0x0, 0x1").unwrap();
        let before = std::fs::metadata(&target).unwrap().modified().unwrap();

        let outcome = write_if_changed(&target, b"0x0, 0x1").unwrap();
        assert_eq!(outcome, WriteOutcome::Unchanged);

        let after = std::fs::metadata(&target).unwrap().modified().unwrap();
        assert_eq!(before, after, "no-op write must not touch the file");
    }

    #[test]
    fn different_content_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("tri.vert.glsl.spv");
        std::fs::write(&target, "0x0").unwrap();

        let outcome = write_if_changed(&target, b"0xff").unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(std::fs::read(&target).unwrap(), b"0xff");
    }

    #[test]
    fn missing_parent_dir_errors() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("no-such-dir").join("out.spv");
        assert!(write_if_changed(&target, b"0x0").is_err());
    }
}
