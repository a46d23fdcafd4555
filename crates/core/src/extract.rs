//! Archive installation
//!
//! Replaces the runtime directory with the contents of a distribution
//! archive. JRE archives nest everything under a single top-level directory
//! (e.g. `jdk1.8.0_60/`), so the first path component of every entry is
//! stripped and the runtime directory itself becomes the distribution root.
//!
//! Supports `.tar.gz` / `.tgz`, `.tar`, and `.zip`.

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use tar::Archive;
use tracing::debug;

use crate::{CoreError, Result};

/// Destructively install an archive into `dest`
///
/// Any existing directory at `dest` is removed first, so repeated installs
/// converge on the same end state. Failures propagate as-is; a failed
/// install may leave `dest` empty or partially populated.
pub fn install_archive(archive: &Path, dest: &Path) -> Result<()> {
    if dest.exists() {
        fs::remove_dir_all(dest)?;
    }
    fs::create_dir_all(dest)?;

    unpack_archive(archive, dest)?;
    debug!(dest = %dest.display(), "archive installed");
    Ok(())
}

fn unpack_archive(archive: &Path, dest: &Path) -> Result<()> {
    let name = archive.to_string_lossy();

    if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        let file = File::open(archive)?;
        unpack_tar(GzDecoder::new(BufReader::new(file)), dest)
    } else if name.ends_with(".tar") {
        let file = File::open(archive)?;
        unpack_tar(BufReader::new(file), dest)
    } else if name.ends_with(".zip") {
        unpack_zip(archive, dest)
    } else {
        Err(CoreError::UnsupportedArchive(name.into_owned()))
    }
}

fn unpack_tar<R: Read>(reader: R, dest: &Path) -> Result<()> {
    let mut archive = Archive::new(reader);

    for entry in archive.entries()? {
        let mut entry = entry?;
        let stripped = strip_first_component(&entry.path()?);

        if stripped.as_os_str().is_empty() {
            continue;
        }

        let dest_path = dest.join(&stripped);
        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent)?;
        }

        entry.unpack(&dest_path)?;
    }

    Ok(())
}

fn unpack_zip(archive_path: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))
        .map_err(|e| CoreError::Archive(format!("Failed to open zip: {}", e)))?;

    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .map_err(|e| CoreError::Archive(format!("Failed to read zip entry: {}", e)))?;

        let path = file
            .enclosed_name()
            .ok_or_else(|| CoreError::Archive("Invalid zip entry name".to_string()))?;

        let stripped = strip_first_component(&path);
        if stripped.as_os_str().is_empty() {
            continue;
        }

        let dest_path = dest.join(&stripped);

        if file.is_dir() {
            fs::create_dir_all(&dest_path)?;
        } else {
            if let Some(parent) = dest_path.parent() {
                fs::create_dir_all(parent)?;
            }

            let mut outfile = File::create(&dest_path)?;
            std::io::copy(&mut file, &mut outfile)?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = file.unix_mode() {
                    fs::set_permissions(&dest_path, fs::Permissions::from_mode(mode))?;
                }
            }
        }
    }

    Ok(())
}

/// Drop the leading path component (ignoring a leading `./`)
fn strip_first_component(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .skip(1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_tar_gz(path: &Path, entries: &[(&str, &[u8])]) {
        let file = File::create(path).unwrap();
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);

        for (name, data) in entries {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o755);
            header.set_cksum();
            builder.append_data(&mut header, *name, *data).unwrap();
        }

        builder.into_inner().unwrap().finish().unwrap();
    }

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();

        for (name, data) in entries {
            writer.start_file(name.to_string(), options).unwrap();
            writer.write_all(data).unwrap();
        }

        writer.finish().unwrap();
    }

    #[test]
    fn test_install_strips_top_level_directory() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("jre.tar.gz");
        write_tar_gz(
            &archive,
            &[
                ("jdk1.8.0_60/bin/java", b"java"),
                ("jdk1.8.0_60/lib/rt.jar", b"rt"),
            ],
        );

        let dest = temp.path().join(".java");
        install_archive(&archive, &dest).unwrap();

        assert!(dest.join("bin/java").exists());
        assert!(dest.join("lib/rt.jar").exists());
        // The archive's own top folder must not be nested inside dest
        assert!(!dest.join("jdk1.8.0_60").exists());
    }

    #[test]
    fn test_install_replaces_previous_contents() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join(".java");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("stale"), b"old").unwrap();

        let archive = temp.path().join("jre.tar.gz");
        write_tar_gz(&archive, &[("jdk/bin/java", b"java")]);

        install_archive(&archive, &dest).unwrap();

        assert!(dest.join("bin/java").exists());
        assert!(!dest.join("stale").exists());
    }

    #[test]
    fn test_install_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("jre.tar.gz");
        write_tar_gz(&archive, &[("jdk/bin/java", b"java")]);

        let dest = temp.path().join(".java");
        install_archive(&archive, &dest).unwrap();
        install_archive(&archive, &dest).unwrap();

        assert!(dest.join("bin/java").exists());
        assert_eq!(fs::read_dir(&dest).unwrap().count(), 1);
    }

    #[test]
    fn test_install_zip() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("jre.zip");
        write_zip(&archive, &[("jdk/bin/java.exe", b"java")]);

        let dest = temp.path().join(".java");
        install_archive(&archive, &dest).unwrap();

        assert!(dest.join("bin/java.exe").exists());
        assert!(!dest.join("jdk").exists());
    }

    #[test]
    fn test_entries_with_leading_dot() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("jre.tar.gz");
        write_tar_gz(&archive, &[("./jdk/bin/java", b"java")]);

        let dest = temp.path().join(".java");
        install_archive(&archive, &dest).unwrap();

        assert!(dest.join("bin/java").exists());
    }

    #[test]
    fn test_unsupported_archive() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("jre.rar");
        fs::write(&archive, b"not-an-archive").unwrap();

        let dest = temp.path().join(".java");
        let err = install_archive(&archive, &dest).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedArchive(_)));
    }

    #[test]
    fn test_strip_first_component() {
        assert_eq!(
            strip_first_component(Path::new("jdk/bin/java")),
            PathBuf::from("bin/java")
        );
        assert_eq!(
            strip_first_component(Path::new("./jdk/bin/java")),
            PathBuf::from("bin/java")
        );
        assert_eq!(strip_first_component(Path::new("jdk")), PathBuf::new());
    }
}
