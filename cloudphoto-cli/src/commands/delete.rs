use anyhow::Result;
use cloudphoto_core::{Album, Config, Error, S3Client};

pub async fn execute(config: &Config, album: String, photo: Option<String>) -> Result<()> {
    let album = Album::new(album)?;
    let s3 = S3Client::connect(config).await?;

    match photo {
        Some(photo) => delete_photo(&s3, &album, &photo).await,
        None => delete_album(&s3, &album).await,
    }
}

async fn delete_photo(s3: &S3Client, album: &Album, photo: &str) -> Result<()> {
    let key = album.key_for(photo);

    if !s3.object_exists(&key).await? {
        return Err(Error::NotFound(format!(
            "Photo '{photo}' not found in album '{album}'"
        ))
        .into());
    }

    s3.delete_object(&key).await?;
    println!("Photo '{photo}' deleted from album '{album}'");
    Ok(())
}

async fn delete_album(s3: &S3Client, album: &Album) -> Result<()> {
    tracing::info!("Deleting album: {}", album);

    let keys = s3.list_keys_with_prefix(&album.prefix()).await?;

    if keys.is_empty() {
        return Err(Error::NotFound(format!("Album '{album}' not found")).into());
    }

    for key in &keys {
        s3.delete_object(key).await?;
    }

    println!("Album '{album}' deleted");
    Ok(())
}
