use crate::cli::{args::DecodeArgs, io};
use crockford::{Settings, decode_stream};
use futures::TryStreamExt;
use tokio::io::AsyncWriteExt;

pub fn handle(args: DecodeArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = io::runtime()?;

    runtime.block_on(async {
        let source = io::open_input(args.file.as_deref()).await?;
        let source: io::Input = if settings.decode.skip_whitespace && !args.strict {
            Box::new(io::SkipWhitespace::new(source))
        } else {
            source
        };
        let mut sink = io::open_output(args.output.as_deref()).await?;

        let mut stream = decode_stream(source, true);
        loop {
            match stream.try_next().await {
                Ok(Some(bytes)) => sink.write_all(&bytes).await?,
                Ok(None) => break,
                Err(e) => {
                    // Output decoded before the error is still valid
                    sink.flush().await?;
                    return Err(e.into());
                }
            }
        }
        tracing::debug!(symbols = stream.position(), "decoded input");
        sink.flush().await?;

        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
