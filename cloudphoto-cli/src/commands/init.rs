use std::path::Path;

use anyhow::Result;
use cloudphoto_core::{config, Config, S3Client};
use dialoguer::{Input, Password};

pub async fn execute(config_path: &Path) -> Result<()> {
    let aws_access_key_id: String = Input::new()
        .with_prompt("Access key id")
        .interact_text()?;
    let aws_secret_access_key: String = Password::new()
        .with_prompt("Secret access key")
        .interact()?;
    let bucket: String = Input::new().with_prompt("Bucket name").interact_text()?;
    let region: String = Input::new()
        .with_prompt("Region")
        .default(config::DEFAULT_REGION.to_string())
        .interact_text()?;
    let endpoint_url: String = Input::new()
        .with_prompt("Endpoint URL")
        .default(config::DEFAULT_ENDPOINT.to_string())
        .interact_text()?;

    let config = Config {
        region,
        endpoint_url,
        bucket,
        aws_access_key_id,
        aws_secret_access_key,
    };
    config.validate()?;

    let s3 = S3Client::connect(&config).await?;
    s3.ensure_bucket().await?;

    config.save_to(config_path)?;
    println!("Configuration saved to '{}'", config_path.display());

    Ok(())
}
