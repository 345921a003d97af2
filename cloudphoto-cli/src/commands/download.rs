use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use cloudphoto_core::{Album, Config, Error, S3Client};

pub async fn execute(config: &Config, album: String, path: PathBuf) -> Result<()> {
    let album = Album::new(album)?;
    let s3 = S3Client::connect(config).await?;

    fs::create_dir_all(&path)?;

    let keys = s3.list_keys_with_prefix(&album.prefix()).await?;
    let photos: Vec<(&String, &str)> = keys
        .iter()
        .filter_map(|key| album.photo_name(key).map(|name| (key, name)))
        .collect();

    if photos.is_empty() {
        return Err(Error::NotFound(format!("No photos found in album '{album}'")).into());
    }

    // The first failed transfer aborts the whole command
    for (key, name) in photos {
        let local_path = path.join(name);
        s3.download_to_file(key, &local_path).await?;
        println!("Downloaded '{key}' to '{}'", local_path.display());
    }

    Ok(())
}
