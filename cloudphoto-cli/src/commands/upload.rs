use std::path::{Path, PathBuf};

use anyhow::Result;
use cloudphoto_core::{album, Album, Config, Error, S3Client};
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

pub async fn execute(config: &Config, album: String, path: PathBuf) -> Result<()> {
    let album = Album::new(album)?;

    if !path.is_dir() {
        return Err(Error::NotFound(format!(
            "Directory '{}' does not exist",
            path.display()
        ))
        .into());
    }

    let photos = collect_photo_paths(&path);
    let s3 = S3Client::connect(config).await?;

    let pb = ProgressBar::new(photos.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("Invalid progress bar template")
            .progress_chars("█▓▒░ "),
    );

    let mut uploaded = 0usize;
    for photo_path in &photos {
        let filename = photo_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let key = album.key_for(&filename);

        match s3.upload_file(photo_path, &key).await {
            Ok(()) => {
                uploaded += 1;
                pb.set_message(format!("Uploaded: {filename}"));
            }
            Err(e) => {
                pb.println(format!("Warning: photo '{filename}' not sent: {e}"));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if uploaded == 0 {
        return Err(Error::NotFound(format!(
            "No photos found in directory '{}'",
            path.display()
        ))
        .into());
    }

    println!("Uploaded {uploaded} photo(s) to album '{album}'");
    Ok(())
}

/// Regular files directly inside `dir` with a photo extension, sorted
/// for a stable upload order.
fn collect_photo_paths(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| album::is_photo_file(&e.file_name().to_string_lossy()))
        .map(|e| e.into_path())
        .collect();
    paths.sort();
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn collects_only_flat_photo_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.jpg"), b"jpg").unwrap();
        fs::write(dir.path().join("a.JPEG"), b"jpeg").unwrap();
        fs::write(dir.path().join("notes.txt"), b"txt").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.jpg"), b"jpg").unwrap();

        let names: Vec<String> = collect_photo_paths(dir.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.JPEG", "b.jpg"]);
    }
}
