//! Running the validator on a single shader source.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use spvbake_common::temp_output_path;

use crate::error::CompileError;

/// Entry point name passed to the validator. Fixed convention: every shader
/// in the tree exports `main`.
const ENTRY_POINT: &str = "main";

/// Poll interval while waiting on the child under a timeout.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// The synchronous compile port consumed by the build pipeline.
///
/// Implemented by [`GlslangCompiler`] for real builds and by canned fakes in
/// pipeline tests.
pub trait ShaderCompiler {
    /// Compiles one source file, returning its SPIR-V bytes on success.
    fn compile(&self, source: &Path) -> Result<CompiledShader, CompileError>;
}

/// The product of a successful compile.
#[derive(Debug)]
pub struct CompiledShader {
    /// The raw SPIR-V binary.
    pub binary: Vec<u8>,
    /// Captured standard output of the validator run.
    pub stdout: String,
    /// Captured standard error of the validator run.
    pub stderr: String,
}

/// Invokes `glslangValidator` as an external process.
///
/// Output goes to `<source>.tmp.spv`, never directly to the final artifact:
/// a concurrent reader of the artifact cannot observe a partial write, and a
/// failed compile cannot clobber the last good artifact. The temp file is
/// promoted by reading it into memory; it is removed unconditionally on
/// success.
#[derive(Debug)]
pub struct GlslangCompiler {
    validator: PathBuf,
    timeout: Option<Duration>,
}

impl GlslangCompiler {
    /// Creates a compiler invoking the given validator binary, with no
    /// timeout.
    pub fn new(validator: impl Into<PathBuf>) -> Self {
        Self {
            validator: validator.into(),
            timeout: None,
        }
    }

    /// Sets the wall-clock limit for a single compile. `None` waits
    /// indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The validator binary this compiler invokes.
    pub fn validator(&self) -> &Path {
        &self.validator
    }

    fn wait(&self, child: &mut Child) -> Result<ExitStatus, CompileError> {
        let Some(limit) = self.timeout else {
            return child.wait().map_err(|source| CompileError::Spawn { source });
        };

        let start = Instant::now();
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) => {}
                Err(source) => return Err(CompileError::Spawn { source }),
            }
            if start.elapsed() >= limit {
                let _ = child.kill();
                let _ = child.wait();
                return Err(CompileError::TimedOut { limit });
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl ShaderCompiler for GlslangCompiler {
    fn compile(&self, source: &Path) -> Result<CompiledShader, CompileError> {
        let temp = temp_output_path(source);

        log::debug!(
            "{} -V --entry-point {ENTRY_POINT} {} -o {}",
            self.validator.display(),
            source.display(),
            temp.display()
        );

        let mut child = Command::new(&self.validator)
            .arg("-V")
            .arg("--entry-point")
            .arg(ENTRY_POINT)
            .arg(source)
            .arg("-o")
            .arg(&temp)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CompileError::Spawn { source })?;

        let stdout_handle = drain(child.stdout.take());
        let stderr_handle = drain(child.stderr.take());

        let status = self.wait(&mut child)?;

        let stdout = stdout_handle.join().unwrap_or_default();
        let stderr = stderr_handle.join().unwrap_or_default();

        if !status.success() {
            return Err(CompileError::Rejected {
                code: status.code().unwrap_or(-1),
                stdout,
                stderr,
            });
        }

        let binary = std::fs::read(&temp).map_err(|source| CompileError::Io {
            path: temp.clone(),
            source,
        })?;

        if let Err(e) = std::fs::remove_file(&temp) {
            log::debug!("could not remove {}: {e}", temp.display());
        }

        Ok(CompiledShader {
            binary,
            stdout,
            stderr,
        })
    }
}

/// Drains a child stream to a string on a dedicated thread, so pipe buffers
/// never fill while the parent waits on the process. Carriage returns are
/// stripped to normalize Windows validator output.
fn drain(stream: Option<impl Read + Send + 'static>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut bytes = Vec::new();
        if let Some(mut stream) = stream {
            let _ = stream.read_to_end(&mut bytes);
        }
        String::from_utf8_lossy(&bytes).replace('\r', "")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    mod unix {
        use super::super::*;
        use std::os::unix::fs::PermissionsExt;

        fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
            let path = dir.join(name);
            std::fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
            let mut perms = std::fs::metadata(&path).unwrap().permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&path, perms).unwrap();
            path
        }

        // Stub validator that writes bytes 0x00 0x01 0xff to the -o target.
        const OK_BODY: &str = r#"
out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "-o" ]; then out="$a"; fi
  prev="$a"
done
printf '\000\001\377' > "$out"
echo "stub: compiled"
"#;

        #[test]
        fn success_reads_binary_and_removes_temp() {
            let dir = tempfile::tempdir().unwrap();
            let validator = write_stub(dir.path(), "stub-validator", OK_BODY);
            let source = dir.path().join("tri.vert.glsl");
            std::fs::write(&source, "void main() {}").unwrap();

            let compiler = GlslangCompiler::new(&validator);
            let compiled = compiler.compile(&source).unwrap();

            assert_eq!(compiled.binary, vec![0x00, 0x01, 0xff]);
            assert!(compiled.stdout.contains("stub: compiled"));
            assert!(
                !temp_output_path(&source).exists(),
                "temp output must be removed on success"
            );
        }

        #[test]
        fn rejection_captures_diagnostics() {
            let dir = tempfile::tempdir().unwrap();
            let validator = write_stub(
                dir.path(),
                "stub-validator",
                "echo \"ERROR: 0:3: '' : syntax error\" >&2\nexit 1\n",
            );
            let source = dir.path().join("bad.frag.glsl");
            std::fs::write(&source, "nonsense").unwrap();

            let err = GlslangCompiler::new(&validator).compile(&source).unwrap_err();
            match err {
                CompileError::Rejected { code, stderr, .. } => {
                    assert_eq!(code, 1);
                    assert!(stderr.contains("syntax error"));
                }
                other => panic!("expected Rejected, got {other:?}"),
            }
        }

        #[test]
        fn rejection_does_not_touch_artifact() {
            let dir = tempfile::tempdir().unwrap();
            let validator = write_stub(dir.path(), "stub-validator", "exit 1\n");
            let source = dir.path().join("bad.frag.glsl");
            std::fs::write(&source, "nonsense").unwrap();
            let artifact = spvbake_common::artifact_path(&source);
            std::fs::write(&artifact, "0x2a").unwrap();

            let _ = GlslangCompiler::new(&validator).compile(&source);
            assert_eq!(std::fs::read_to_string(&artifact).unwrap(), "0x2a");
        }

        #[test]
        fn timeout_kills_and_reports() {
            let dir = tempfile::tempdir().unwrap();
            let validator = write_stub(dir.path(), "stub-validator", "sleep 30\n");
            let source = dir.path().join("slow.comp.glsl");
            std::fs::write(&source, "void main() {}").unwrap();

            let compiler = GlslangCompiler::new(&validator)
                .with_timeout(Some(Duration::from_millis(200)));
            let start = Instant::now();
            let err = compiler.compile(&source).unwrap_err();
            assert!(matches!(err, CompileError::TimedOut { .. }));
            assert!(start.elapsed() < Duration::from_secs(10));
        }

        #[test]
        fn crlf_output_is_normalized() {
            let dir = tempfile::tempdir().unwrap();
            let validator = write_stub(
                dir.path(),
                "stub-validator",
                "printf 'line one\\r\\nline two\\r\\n' >&2\nexit 1\n",
            );
            let source = dir.path().join("a.vert.glsl");
            std::fs::write(&source, "x").unwrap();

            let err = GlslangCompiler::new(&validator).compile(&source).unwrap_err();
            if let CompileError::Rejected { stderr, .. } = err {
                assert_eq!(stderr, "line one\nline two\n");
            } else {
                panic!("expected Rejected");
            }
        }
    }

    #[test]
    fn missing_validator_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("tri.vert.glsl");
        std::fs::write(&source, "void main() {}").unwrap();

        let compiler = GlslangCompiler::new("/nonexistent/glslangValidator");
        let err = compiler.compile(&source).unwrap_err();
        assert!(matches!(err, CompileError::Spawn { .. }));
    }
}
