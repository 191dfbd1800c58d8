/// Returns the start index and text of the word that ends at the cursor.
pub(crate) fn current_word(line: &str) -> (usize, &str) {
    let start = line
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '_')
        .last()
        .map_or(line.len(), |(index, _)| index);

    (start, &line[start..])
}

/// Returns `true` if a filter name is expected after `prefix`.
pub(crate) fn expects_filter_name(prefix: &str) -> bool {
    prefix.trim_end().ends_with('|')
}

/// Returns the filter names that complete the word ending at `pos`.
///
/// Returns the position from which candidates replace the line.
pub(crate) fn complete_filter_name<'a>(
    line: &str,
    pos: usize,
    names: &'a [String],
) -> (usize, Vec<&'a str>) {
    let (start, word) = current_word(&line[..pos]);
    if !expects_filter_name(&line[..start]) {
        return (pos, Vec::new());
    }

    let candidates = names
        .iter()
        .filter(|name| name.starts_with(word))
        .map(String::as_str)
        .collect();

    (start, candidates)
}
