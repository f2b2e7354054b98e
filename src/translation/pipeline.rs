/*!
 * Line-by-line bilingual lyrics pipeline.
 *
 * Reads one input line at a time, translates the lyrics of timed lines,
 * and writes every line out in input order before the next one is read.
 * The first translation or write failure ends the run; lines written before
 * it stay in the output.
 */

use indicatif::ProgressBar;
use log::{debug, error, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::errors::AppError;
use crate::lyrics_processor::LrcLine;
use crate::translation::core::Translator;
use crate::translation::pacing::Pacer;

/// Counters for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Lines read and written
    pub lines: usize,
    /// Lyric lines sent for translation
    pub translated: usize,
    /// Lines copied unchanged
    pub passed_through: usize,
}

/// Sequential lyrics translation driver
pub struct LyricsPipeline<T, P> {
    /// Translation capability
    translator: T,
    /// Pacing between translation calls
    pacer: P,
    /// Target language code or name
    target_language: String,
    /// Optional progress display
    progress: Option<ProgressBar>,
}

impl<T, P> LyricsPipeline<T, P>
where
    T: Translator,
    P: Pacer,
{
    /// Create a new pipeline
    pub fn new(translator: T, pacer: P, target_language: impl Into<String>) -> Self {
        Self {
            translator,
            pacer,
            target_language: target_language.into(),
            progress: None,
        }
    }

    /// Report progress on the given bar
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Process every line of `reader` into `writer`
    ///
    /// The writer is flushed whether the run completes or stops early.
    pub async fn run<R, W>(&mut self, reader: R, writer: &mut W) -> Result<PipelineSummary, AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let result = self.process_lines(reader, writer).await;
        let flushed = writer.flush().await
            .map_err(|e| AppError::File(format!("Failed to flush output: {}", e)));

        let summary = result?;
        flushed?;

        info!(
            "Processed {} lines ({} translated, {} unchanged)",
            summary.lines, summary.translated, summary.passed_through
        );
        Ok(summary)
    }

    async fn process_lines<R, W>(&mut self, reader: R, writer: &mut W) -> Result<PipelineSummary, AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut summary = PipelineSummary::default();
        let mut lines = reader.split(b'\n');

        loop {
            let line_number = summary.lines + 1;
            let mut raw = match lines.next_segment().await {
                Ok(Some(raw)) => raw,
                Ok(None) => break,
                Err(e) => {
                    return Err(AppError::File(format!("Failed to read input line {}: {}", line_number, e)));
                }
            };
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }

            let output = match LrcLine::parse(&raw) {
                LrcLine::Lyric(segments) if segments.has_lyrics() => {
                    let translated = self.translate_line(line_number, &segments.lyrics_text()).await?;
                    summary.translated += 1;
                    segments.assemble(&translated)
                }
                LrcLine::Lyric(_) | LrcLine::PassThrough(_) => {
                    debug!("Line {}: copied unchanged", line_number);
                    summary.passed_through += 1;
                    raw
                }
            };

            write_line(writer, &output).await
                .map_err(|e| AppError::File(format!("Failed to write output line {}: {}", line_number, e)))?;

            summary.lines = line_number;
            if let Some(progress) = &self.progress {
                progress.inc(1);
            }
        }

        Ok(summary)
    }

    async fn translate_line(&mut self, line_number: usize, lyrics: &str) -> Result<String, AppError> {
        if let Some(progress) = &self.progress {
            progress.set_message(format!("translating line {}", line_number));
        }

        let result = self.translator.translate(lyrics, &self.target_language).await;
        self.pacer.pause().await;

        match result {
            Ok(translated) => {
                debug!("Line {}: {:?} -> {:?}", line_number, lyrics, translated);
                Ok(translated)
            }
            Err(e) => {
                error!("Translation of line {} failed ({}): {}", line_number, e.kind(), e);
                Err(AppError::Translation { line_number, source: e })
            }
        }
    }
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, line: &[u8]) -> std::io::Result<()> {
    writer.write_all(line).await?;
    writer.write_all(b"\n").await
}
