//! Regrouping a subtoken stream into surface tokens.

use crate::error::ReassembleError;
use crate::split::CONTINUATION_MARKER;

/// Remove the continuation marker from `subtoken`.
///
/// Returns the bare text and whether the marker was present.
pub fn strip_marker(subtoken: &str) -> (&str, bool) {
    match subtoken.strip_suffix(CONTINUATION_MARKER) {
        Some(bare) => (bare, true),
        None => (subtoken, false),
    }
}

/// Rebuild the surface tokens from a split stream and its lengths.
///
/// Each length groups that many consecutive subtokens into one token. In a
/// group of two or more, every subtoken but the last must end with the
/// marker, which is dropped when gluing. A group of one is taken verbatim,
/// so pass-through tokens that happen to end in `@@` survive.
///
/// Lengths whose sum overflows `usize` are reported as a
/// [`ReassembleError::LengthMismatch`] with `expected` saturated at
/// `usize::MAX`.
pub fn reassemble<S: AsRef<str>>(
    subtokens: &[S],
    lengths: &[usize],
) -> Result<Vec<String>, ReassembleError> {
    let expected = lengths
        .iter()
        .try_fold(0usize, |total, &len| total.checked_add(len))
        .unwrap_or(usize::MAX);
    if expected != subtokens.len() {
        return Err(ReassembleError::LengthMismatch {
            expected,
            actual: subtokens.len(),
        });
    }

    let mut tokens = Vec::with_capacity(lengths.len());
    let mut pos: usize = 0;
    for (index, &len) in lengths.iter().enumerate() {
        if len == 0 {
            return Err(ReassembleError::ZeroLength { index });
        }
        let group = pos
            .checked_add(len)
            .and_then(|end| subtokens.get(pos..end))
            .ok_or(ReassembleError::LengthMismatch {
                expected,
                actual: subtokens.len(),
            })?;
        let mut token = String::new();
        for (offset, part) in group.iter().enumerate() {
            let part = part.as_ref();
            if offset + 1 == len {
                token.push_str(part);
                continue;
            }
            match strip_marker(part) {
                (bare, true) => token.push_str(bare),
                (_, false) => {
                    return Err(ReassembleError::MissingMarker {
                        position: pos + offset,
                        subtoken: part.to_owned(),
                    })
                }
            }
        }
        tokens.push(token);
        pos += len;
    }
    Ok(tokens)
}
