use std::io::{self, Write};
#[cfg(any(target_family = "windows", target_family = "unix"))]
use std::path::{Path, PathBuf};

use crate::parser::line::{classify_line, SourceLine};

use super::error::BundleError;

/// Host-system access used during expansion. Tests substitute an
/// in-memory implementation.
pub trait SystemApi {
    /// Resolve `relative` against the directory of `base`, the file
    /// whose include directive referenced it.
    fn resolve_path(&self, base: &str, relative: &str) -> Result<String, io::Error>;

    /// Stable identity for a file, used to detect include cycles.
    fn canonical_id(&self, path: &str) -> Result<String, io::Error>;

    fn fs_read_to_string(&mut self, path: &str) -> Result<String, io::Error>;
}

/// `SystemApi` backed by the real filesystem.
///
/// Paths resolve against the symlink-resolved directory of the
/// including file, so includes work no matter how the entry path was
/// spelled (absolute, relative, or through a symlink).
#[cfg(any(target_family = "windows", target_family = "unix"))]
#[derive(Debug, Default)]
pub struct OsSystemApi {}

#[cfg(any(target_family = "windows", target_family = "unix"))]
impl OsSystemApi {
    pub fn new() -> Self {
        Self {}
    }

    fn real_dir(path: &str) -> Result<PathBuf, io::Error> {
        let real = std::fs::canonicalize(path)?;
        Ok(real.parent().map(Path::to_path_buf).unwrap_or(real))
    }
}

#[cfg(any(target_family = "windows", target_family = "unix"))]
impl SystemApi for OsSystemApi {
    fn resolve_path(&self, base: &str, relative: &str) -> Result<String, io::Error> {
        let joined = Self::real_dir(base)?.join(relative);
        Ok(joined.to_string_lossy().into_owned())
    }

    fn canonical_id(&self, path: &str) -> Result<String, io::Error> {
        let real = std::fs::canonicalize(path)?;
        Ok(real.to_string_lossy().into_owned())
    }

    fn fs_read_to_string(&mut self, path: &str) -> Result<String, io::Error> {
        std::fs::read_to_string(path)
    }
}

/// Drives include expansion: recursive inlining of include directives
/// and optional constant substitution at marker lines.
#[derive(Debug)]
pub struct BundlerEnv<S> {
    sys: S,
    /// Canonical ids of files on the current expansion path.
    active: Vec<String>,
}
impl<S: SystemApi> BundlerEnv<S> {
    pub fn new(sys: S) -> Self {
        Self {
            sys,
            active: Vec::new(),
        }
    }

    /// Expand `path` to `out` without constant substitution; constants
    /// markers pass through as plain text.
    pub fn expand_to<W: Write>(&mut self, out: &mut W, path: &str) -> Result<(), BundleError> {
        self.process(out, path, "", None)
    }

    /// Expand `path` to `out`, splicing `decls` at constants markers.
    pub fn bundle_to<W: Write>(
        &mut self,
        out: &mut W,
        path: &str,
        decls: &[String],
    ) -> Result<(), BundleError> {
        self.process(out, path, "", Some(decls))
    }

    fn process<W: Write>(
        &mut self,
        out: &mut W,
        path: &str,
        indent: &str,
        decls: Option<&[String]>,
    ) -> Result<(), BundleError> {
        let id = self
            .sys
            .canonical_id(path)
            .map_err(|e| BundleError::io(path, e))?;
        if self.active.contains(&id) {
            return Err(BundleError::cyclic_include(path));
        }
        self.active.push(id);
        let result = self.process_lines(out, path, indent, decls);
        self.active.pop();
        result
    }

    fn process_lines<W: Write>(
        &mut self,
        out: &mut W,
        path: &str,
        indent: &str,
        decls: Option<&[String]>,
    ) -> Result<(), BundleError> {
        let content = self
            .sys
            .fs_read_to_string(path)
            .map_err(|e| BundleError::io(path, e))?;
        for raw in content.split_inclusive('\n') {
            let (line, ending) = split_line_ending(raw);
            match (classify_line(line), decls) {
                (SourceLine::Include { indent: own, path: rel }, _) => {
                    let target = self
                        .sys
                        .resolve_path(path, &rel)
                        .map_err(|e| BundleError::io(rel.as_str(), e))?;
                    let nested = format!("{}{}", indent, own);
                    self.process(out, &target, &nested, decls)?;
                }
                (SourceLine::ConstantsMarker { indent: own }, Some(decls)) => {
                    let prefix = format!("{}{}", indent, own);
                    for decl in decls {
                        writeln!(out, "{}{}", prefix, decl).map_err(BundleError::output)?;
                    }
                    writeln!(out).map_err(BundleError::output)?;
                }
                _ => {
                    write!(out, "{}{}{}", indent, line, ending).map_err(BundleError::output)?;
                }
            }
        }
        Ok(())
    }
}

/// Split a line produced by `split_inclusive('\n')` into its body and
/// terminator, keeping `\r\n` intact.
fn split_line_ending(raw: &str) -> (&str, &str) {
    if let Some(body) = raw.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = raw.strip_suffix('\n') {
        (body, "\n")
    } else {
        (raw, "")
    }
}
