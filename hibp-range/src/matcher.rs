use crate::error::Error;

/// Separator between the hash suffix and the occurrence count in a range line.
pub const COUNT_SEPARATOR: char = ':';

/// Finds the occurrence count for `suffix` in a range response.
///
/// Lines are scanned in order and the first one starting with `suffix` wins.
/// The count is whatever follows the first `:` after the matched suffix. A
/// suffix that matches no line is not an error, it simply has 0 occurrences.
pub fn occurrences<'a, I>(lines: I, suffix: &str) -> Result<u64, Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let Some(line) = lines.into_iter().find(|line| line.starts_with(suffix)) else {
        return Ok(0);
    };

    let rest = &line[suffix.len()..];
    let Some(separator) = rest.find(COUNT_SEPARATOR) else {
        return Err(Error::MalformedLine { line: line.to_string() });
    };

    let count = &rest[separator + 1..];
    count
        .parse::<u64>()
        .map_err(|source| Error::InvalidCount { text: count.to_string(), source })
}
