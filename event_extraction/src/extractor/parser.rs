//! Seam to the external dependency parser.

use crate::{ExtractionError, ParsedToken};

/// A batch dependency parser.
///
/// `parse_batch` must return exactly one token sequence per submitted
/// sentence, in submission order.
pub trait DependencyParser {
    type Token: ParsedToken;

    fn parse_batch(
        &mut self,
        sentences: &[String],
    ) -> Result<Vec<Vec<Self::Token>>, ExtractionError>;
}

/// Parse `sentences` in chunks of `batch_size`, checking that every batch
/// comes back complete.
pub(crate) fn parse_in_batches<P: DependencyParser>(
    parser: &mut P,
    sentences: &[String],
    batch_size: usize,
) -> Result<Vec<Vec<P::Token>>, ExtractionError> {
    let mut parsed = Vec::with_capacity(sentences.len());

    for batch in sentences.chunks(batch_size.max(1)) {
        let docs = parser.parse_batch(batch)?;
        if docs.len() != batch.len() {
            return Err(ExtractionError::ParseCountMismatch {
                expected: batch.len(),
                found: docs.len(),
            });
        }
        parsed.extend(docs);
    }

    Ok(parsed)
}
