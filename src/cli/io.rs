//! Async input and output plumbing for the CLI.

use pin_project_lite::pin_project;
use std::io;
use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll, ready};
use tokio::io::{AsyncRead, AsyncWrite, BufWriter, ReadBuf};

pub type Input = Box<dyn AsyncRead + Unpin>;
pub type Output = BufWriter<Box<dyn AsyncWrite + Unpin>>;

/// Current-thread runtime: the codec never needs more than one thread.
pub fn runtime() -> io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread().build()
}

/// Opens `file`, or stdin when no file is given.
pub async fn open_input(file: Option<&Path>) -> io::Result<Input> {
    match file {
        Some(path) => {
            let file = tokio::fs::File::open(path).await.map_err(|e| {
                io::Error::new(e.kind(), format!("Cannot open '{}': {}", path.display(), e))
            })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(tokio::io::stdin())),
    }
}

/// Creates `file`, or uses stdout when no file is given.
pub async fn open_output(file: Option<&Path>) -> io::Result<Output> {
    let sink: Box<dyn AsyncWrite + Unpin> = match file {
        Some(path) => Box::new(tokio::fs::File::create(path).await.map_err(|e| {
            io::Error::new(e.kind(), format!("Cannot create '{}': {}", path.display(), e))
        })?),
        None => Box::new(tokio::io::stdout()),
    };
    Ok(BufWriter::new(sink))
}

pin_project! {
    /// Source adapter that drops ASCII whitespace, so line-wrapped or
    /// newline-terminated text can be decoded.
    pub struct SkipWhitespace<R> {
        #[pin]
        inner: R,
    }
}

impl<R> SkipWhitespace<R> {
    pub fn new(inner: R) -> Self {
        SkipWhitespace { inner }
    }
}

impl<R: AsyncRead> AsyncRead for SkipWhitespace<R> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let mut this = self.project();

        loop {
            let start = buf.filled().len();
            ready!(this.inner.as_mut().poll_read(cx, buf))?;

            let end = buf.filled().len();
            if end == start {
                return Poll::Ready(Ok(()));
            }

            let filled = buf.filled_mut();
            let mut kept = start;
            for i in start..end {
                if !filled[i].is_ascii_whitespace() {
                    filled[kept] = filled[i];
                    kept += 1;
                }
            }
            buf.set_filled(kept);

            // A read of only whitespace is not end of input
            if kept > start {
                return Poll::Ready(Ok(()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_skip_whitespace() {
        let mut reader = SkipWhitespace::new(&b"d1jp rv3f\n41vp\r\n\tywkccg\n"[..]);
        let mut out = String::new();
        reader.read_to_string(&mut out).await.unwrap();
        assert_eq!(out, "d1jprv3f41vpywkccg");
    }

    #[tokio::test]
    async fn test_skip_whitespace_only_input() {
        let mut reader = SkipWhitespace::new(&b" \n\n "[..]);
        let mut out = Vec::new();
        reader.read_to_end(&mut out).await.unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_skip_whitespace_feeds_decoder() {
        let source = SkipWhitespace::new(&b"d1jprv3f\n41vpywkc\ncg\n"[..]);
        let mut stream = crockford::decode_stream(source, true);
        let mut out = Vec::new();
        while let Some(chunk) = futures::TryStreamExt::try_next(&mut stream).await.unwrap() {
            out.extend(chunk);
        }
        assert_eq!(out, b"hello world");
    }
}
