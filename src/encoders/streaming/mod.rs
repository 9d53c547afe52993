mod decoder;
mod encoder;

pub use decoder::DecodeStream;
pub use encoder::EncodeStream;

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll, ready};
use tokio::io::{AsyncRead, ReadBuf};

/// Creates a stream of Base32 symbols from a byte source.
///
/// With `close_on_end` the source is dropped once the stream is exhausted or
/// closed; otherwise it is kept for [`EncodeStream::into_inner`].
pub fn encode_stream<R: AsyncRead>(source: R, close_on_end: bool) -> EncodeStream<R> {
    EncodeStream::new(source).close_on_end(close_on_end)
}

/// Creates a stream of decoded bytes from a Base32 symbol source.
pub fn decode_stream<R: AsyncRead>(source: R, close_on_end: bool) -> DecodeStream<R> {
    DecodeStream::new(source).close_on_end(close_on_end)
}

/// Reads from `source` into `window[*filled..]` until the window is full or
/// the source reports end of input.
///
/// Progress is recorded in `filled` after every read, so a `Pending` from the
/// source keeps what was already read and the next call resumes from there.
/// Resolves to `true` if the source reached its end.
fn poll_fill<R: AsyncRead + ?Sized>(
    mut source: Pin<&mut R>,
    cx: &mut Context<'_>,
    window: &mut [u8],
    filled: &mut usize,
) -> Poll<io::Result<bool>> {
    while *filled < window.len() {
        let mut buf = ReadBuf::new(&mut window[*filled..]);
        ready!(source.as_mut().poll_read(cx, &mut buf))?;

        let read = buf.filled().len();
        if read == 0 {
            return Poll::Ready(Ok(true));
        }
        *filled += read;
    }

    Poll::Ready(Ok(false))
}

/// Marks a stream finished, dropping its source if it owns the source's
/// lifetime.
fn release<R>(
    mut source: Pin<&mut Option<R>>,
    finished: &mut bool,
    close_on_end: bool,
    position: usize,
) {
    *finished = true;
    if close_on_end {
        source.set(None);
        tracing::debug!(position, "stream finished, source closed");
    } else {
        tracing::debug!(position, "stream finished, source retained");
    }
}
