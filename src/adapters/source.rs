use crate::domain::model::NumberSource;
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

pub const STDIN_PROMPT: &str = "Enter a JSON array of integers and press Enter:";

/// Reads the raw JSON array from `source` and decodes it.
pub async fn read_numbers(source: &NumberSource) -> Result<Vec<i64>> {
    let data = match source {
        NumberSource::Stdin => {
            println!("{}", STDIN_PROMPT);
            read_line(BufReader::new(tokio::io::stdin())).await?
        }
        NumberSource::File(path) => {
            tracing::debug!("Reading numbers from {}", path.display());
            tokio::fs::read(path).await?
        }
    };

    parse_numbers(&data)
}

/// One line, newline included. Input that ends before a newline is an error.
pub async fn read_line<R: AsyncBufRead + Unpin>(mut reader: R) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_until(b'\n', &mut data).await?;
    if data.last() != Some(&b'\n') {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "stdin closed before a newline was read",
        )
        .into());
    }
    Ok(data)
}

pub fn parse_numbers(data: &[u8]) -> Result<Vec<i64>> {
    Ok(serde_json::from_slice(data)?)
}
