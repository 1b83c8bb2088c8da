use crate::ast;
use std::path::Path;
use std::path::PathBuf;

/// A line/column position inside a loaded schema source, plus the path of the
/// file it came from (if it came from a file at all).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(file: Option<&Path>, pos: ast::AstPos) -> Self {
        Self {
            col: pos.column,
            file: file.map(Path::to_path_buf),
            line: pos.line,
        }
    }
}

/// Where a type or root operation binding was defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefLocation {
    /// Built-in scalars (`Int`, `String`, ...) have no source location.
    BuiltIn,
    Schema(FilePosition),
}
impl std::convert::From<FilePosition> for DefLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}
