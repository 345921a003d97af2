use anyhow::Result;
use cloudphoto_core::{album, site, Album, Config, Error, S3Client};

pub async fn execute(config: &Config) -> Result<()> {
    let s3 = S3Client::connect(config).await?;

    let keys = s3.list_all_keys().await?;
    let names = album::albums_from_keys(&keys);
    if names.is_empty() {
        return Err(Error::NotFound("Photo albums not found".to_string()).into());
    }

    let albums = names
        .into_iter()
        .map(Album::new)
        .collect::<cloudphoto_core::Result<Vec<_>>>()?;
    let pages = site::plan_pages(albums);
    tracing::info!("Publishing {} album page(s)", pages.len());

    s3.make_public_readable().await?;
    s3.enable_website(site::INDEX_DOCUMENT, site::ERROR_DOCUMENT)
        .await?;

    s3.upload_bytes(
        site::render_index(&pages).into_bytes(),
        site::INDEX_DOCUMENT,
        "text/html",
    )
    .await?;
    s3.upload_bytes(
        site::render_error_page().into_bytes(),
        site::ERROR_DOCUMENT,
        "text/html",
    )
    .await?;

    for page in &pages {
        let html = site::render_album_page(page, &keys);
        s3.upload_bytes(html.into_bytes(), &page.file_name, "text/html")
            .await?;
    }

    println!("{}", config.website_url());
    Ok(())
}
