use std::io::BufWriter;
use std::{path::PathBuf, fs::{self, File}};

use anyhow::{Result, Context, anyhow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Dir,
    File,
    Other
}

/// The entries of a directory, as full paths, in unspecified order.
pub fn easy_filepaths_in_dir<P>(
    path: P
) -> Result<impl Iterator<Item = Result<(PathBuf, FileKind)>>>
where PathBuf: From<P>
{
    let pathbuf: PathBuf = path.into();
    Ok(fs::read_dir(&pathbuf).with_context(
        || anyhow!("can't open directory for reading: {:?}",
                   pathbuf.to_string_lossy()))?
       .map(
           move |entry_result: Result<fs::DirEntry, std::io::Error>|
                                      -> Result<(PathBuf, FileKind)>
           {
               let entry = entry_result.with_context(
                   || anyhow!("reading directory: {:?}", pathbuf.to_string_lossy()))?;
               let ft = entry.file_type().with_context(
                   || anyhow!("getting file type of {:?}", entry.path()))?;
               Ok(
                   (
                       entry.path(),
                       if ft.is_dir() {
                           FileKind::Dir
                       } else if ft.is_file() {
                           FileKind::File
                       } else {
                           FileKind::Other
                       }
                   ))
           }))
}

/// Open a file for appending, creating it and its parent directory
/// if necessary.
pub fn open_log_output<P>(
    path: P
) -> Result<Box<BufWriter<File>>>
where PathBuf: From<P>
{
    let mut outp = File::options();
    outp.append(true).create(true);
    let pathb = PathBuf::from(path);
    if let Some(parent) = pathb.parent() {
        let _ignore = std::fs::create_dir_all(parent);
    }
    Ok(Box::new(BufWriter::new(outp.open(&pathb).with_context(
        || anyhow!("opening log for output: {:?}", pathb.to_string_lossy()))?)))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn t_easy_filepaths_in_dir() {
        let base = Path::new(env!("CARGO_MANIFEST_DIR"));
        let entries: Vec<(PathBuf, FileKind)> = easy_filepaths_in_dir(base.to_path_buf())
            .expect("readable")
            .collect::<Result<_>>()
            .expect("readable entries");
        assert!(entries.contains(&(base.join("css"), FileKind::Dir)));
        assert!(entries.contains(&(base.join("Cargo.toml"), FileKind::File)));
    }
}
