use std::io;

use yima::{Token, YimaClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("YIMA_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "YIMA_TOKEN environment variable is required",
        )
    })?;
    let keyword = std::env::args().nth(1).unwrap_or_else(|| "测试".to_owned());

    let client = YimaClient::builder().token(Token::new(token)?).build()?;

    for candidate in client.search_template(&keyword).await? {
        println!(
            "{:>6}  {:<24} {:>6.2}  {}",
            candidate.id.value(), candidate.item_name, candidate.price, candidate.regex
        );
    }

    Ok(())
}
