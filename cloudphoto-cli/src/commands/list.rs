use anyhow::Result;
use cloudphoto_core::{album, Album, Config, Error, S3Client};

pub async fn execute(config: &Config, album: Option<String>) -> Result<()> {
    let album = album.map(Album::new).transpose()?;
    let s3 = S3Client::connect(config).await?;

    match album {
        Some(album) => list_photos(&s3, &album).await,
        None => list_albums(&s3).await,
    }
}

async fn list_albums(s3: &S3Client) -> Result<()> {
    let keys = s3.list_all_keys().await?;
    let mut albums = album::albums_from_keys(&keys);

    if albums.is_empty() {
        return Err(Error::NotFound("Photo albums not found".to_string()).into());
    }

    albums.sort();
    for album in albums {
        println!("{album}");
    }
    Ok(())
}

async fn list_photos(s3: &S3Client, album: &Album) -> Result<()> {
    let keys = s3.list_keys_with_prefix(&album.prefix()).await?;
    let mut photos: Vec<&str> = keys.iter().filter_map(|key| album.photo_name(key)).collect();

    if photos.is_empty() {
        return Err(Error::NotFound(format!("No photos found in album '{album}'")).into());
    }

    photos.sort_unstable();
    for photo in photos {
        println!("{photo}");
    }
    Ok(())
}
