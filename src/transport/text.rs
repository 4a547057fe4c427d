/// Return the text strictly between the first `start` and the next `end` after it.
///
/// Returns an empty string when either delimiter is missing.
///
/// ```
/// assert_eq!(yima::between("code[1234]ok", "[", "]"), "1234");
/// assert_eq!(yima::between("no brackets", "[", "]"), "");
/// ```
pub fn between<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    let Some(found) = text.find(start) else {
        return "";
    };
    let rest = &text[found + start.len()..];
    match rest.find(end) {
        Some(stop) => &rest[..stop],
        None => "",
    }
}
