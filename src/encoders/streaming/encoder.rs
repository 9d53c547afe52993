use crate::encoders::algorithms::chunked::{BYTES_PER_CHUNK, encode_chunk, encoded_len};
use futures::Stream;
use pin_project_lite::pin_project;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll, ready};
use tokio::io::AsyncRead;

use super::{poll_fill, release};

pin_project! {
    /// Lazily encodes bytes pulled from an async source into Base32 symbols.
    ///
    /// Each item is the encoding of one 5-byte chunk (the last one may be
    /// shorter). The stream waits for a full chunk before encoding, so the
    /// output does not depend on how the source splits its reads. When the
    /// source is not ready the stream returns `Pending` and is woken by the
    /// source.
    ///
    /// The source is dropped as soon as the stream ends, fails or is closed,
    /// unless `close_on_end(false)` was set; in that case it can be taken
    /// back with [`EncodeStream::into_inner`].
    pub struct EncodeStream<R> {
        #[pin]
        source: Option<R>,
        window: [u8; BYTES_PER_CHUNK],
        filled: usize,
        position: usize,
        finished: bool,
        close_on_end: bool,
    }
}

impl<R: AsyncRead> EncodeStream<R> {
    /// Creates an encoding stream over `source` that closes it at the end.
    pub fn new(source: R) -> Self {
        EncodeStream {
            source: Some(source),
            window: [0; BYTES_PER_CHUNK],
            filled: 0,
            position: 0,
            finished: false,
            close_on_end: true,
        }
    }

    /// Sets whether the source is closed when the stream ends.
    pub fn close_on_end(mut self, close: bool) -> Self {
        self.close_on_end = close;
        self
    }
}

impl<R> EncodeStream<R> {
    /// Number of source bytes encoded so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the stream has yielded its last item.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn get_ref(&self) -> Option<&R> {
        self.source.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut R> {
        self.source.as_mut()
    }

    /// Consumes the stream, returning the source if it was not closed.
    pub fn into_inner(self) -> Option<R> {
        self.source
    }

    /// Ends the stream early. Bytes pulled into a partial chunk are dropped.
    pub fn close(self: Pin<&mut Self>) {
        let this = self.project();
        if !*this.finished {
            release(this.source, this.finished, *this.close_on_end, *this.position);
        }
    }
}

impl<R: AsyncRead> Stream for EncodeStream<R> {
    type Item = io::Result<String>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }
        let Some(source) = this.source.as_mut().as_pin_mut() else {
            *this.finished = true;
            return Poll::Ready(None);
        };

        let at_end = match ready!(poll_fill(source, cx, this.window, this.filled)) {
            Ok(at_end) => at_end,
            Err(e) => {
                tracing::debug!(position = *this.position, error = %e, "source read failed");
                release(this.source, this.finished, *this.close_on_end, *this.position);
                return Poll::Ready(Some(Err(e)));
            }
        };

        let len = *this.filled;
        if len == 0 {
            release(this.source, this.finished, *this.close_on_end, *this.position);
            return Poll::Ready(None);
        }

        let mut symbols = String::with_capacity(encoded_len(len));
        encode_chunk(&this.window[..len], &mut symbols);
        tracing::trace!(position = *this.position, len, "encoded chunk");

        *this.filled = 0;
        *this.position += len;

        // A short chunk is only ever produced at end of input
        if at_end {
            release(this.source, this.finished, *this.close_on_end, *this.position);
        }

        Poll::Ready(Some(Ok(symbols)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished { (0, Some(0)) } else { (0, None) }
    }
}
