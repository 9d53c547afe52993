use crate::cli::{args::EncodeArgs, io};
use crockford::{Settings, encode_stream};
use futures::TryStreamExt;
use tokio::io::AsyncWriteExt;

pub fn handle(args: EncodeArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = io::runtime()?;

    runtime.block_on(async {
        let source = io::open_input(args.file.as_deref()).await?;
        let mut sink = io::open_output(args.output.as_deref()).await?;

        let mut stream = encode_stream(source, true);
        while let Some(symbols) = stream.try_next().await? {
            sink.write_all(symbols.as_bytes()).await?;
        }
        tracing::debug!(bytes = stream.position(), "encoded input");

        if settings.encode.trailing_newline && !args.no_newline {
            sink.write_all(b"\n").await?;
        }
        sink.flush().await?;

        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
