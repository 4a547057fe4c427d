use std::io;
use std::time::Duration;

use yima::{Credentials, ItemId, MobileOption, YimaClient, YimaError};

const POLL_INTERVAL: Duration = Duration::from_secs(5);
const MAX_POLLS: u32 = 24;

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
    let item: u32 = std::env::var("YIMA_ITEM_ID")
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "YIMA_ITEM_ID environment variable is required",
            )
        })?
        .parse()?;
    let item = ItemId::new(item);

    let mut client = YimaClient::new();
    if let Err(err) = client.login(&Credentials::new(username, password)?).await {
        if err.is_fatal() {
            eprintln!("cannot reach Yima: {err}");
            std::process::exit(1);
        }
        return Err(err.into());
    }

    let mobile = client.get_number(item, &MobileOption::default()).await?;
    println!("got number {}", mobile.raw());

    for _ in 0..MAX_POLLS {
        match client.get_sms_message(&mobile, item, true).await {
            Ok(sms) => {
                println!("sms: {sms}");
                return Ok(());
            }
            Err(YimaError::Vendor { body, .. }) => {
                println!("waiting ({body})");
                tokio::time::sleep(POLL_INTERVAL).await;
            }
            Err(err) => return Err(err.into()),
        }
    }

    client.release_number(&mobile, item).await?;
    println!("no sms received, released {}", mobile.raw());
    Ok(())
}
