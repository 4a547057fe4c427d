use std::io;

use yima::{Credentials, YimaClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("YIMA_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "YIMA_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("YIMA_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "YIMA_PASSWORD environment variable is required",
        )
    })?;

    let mut client = YimaClient::new();
    client.login(&Credentials::new(username, password)?).await?;

    let detail = client.account_detail().await?;
    println!(
        "{} (level {}): balance {:.2}, frozen {:.2}, max hold {}",
        detail.name, detail.level, detail.balance, detail.frozen, detail.max_hold
    );

    Ok(())
}
