use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

pub(crate) fn create_dir_all(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::create_dir_all(path)
        .with_context(|| format!("Unable to create directory {}", path.display()))
}

pub(crate) fn file(path: impl AsRef<Path>) -> Result<std::fs::File> {
    let path = path.as_ref();
    std::fs::File::create(path).context(format!("Unable to create file {}", path.display()))
}

pub(crate) fn write_all(path: impl AsRef<Path>, data: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    let mut f = file(path)?;
    f.write_all(data.as_ref())
        .context(format!("Unable to write data to {}", path.display()))
}

pub(crate) fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).context(format!("Unable to read file {}", path.display()))
}

/// Basically move a file. Renames `from` -> `to`.
pub(crate) fn rename(from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<()> {
    std::fs::rename(from.as_ref(), to.as_ref()).with_context(|| {
        format!(
            "Unable to rename file from '{}' to '{}'",
            from.as_ref().display(),
            to.as_ref().display()
        )
    })
}
