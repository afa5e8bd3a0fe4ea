/// Errors surfaced by phrase resolution.
///
/// Resolution is total for well-formed input; the only rejected input is an
/// empty or whitespace-only phrase.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("empty input: nothing to translate")]
    EmptyInput,
}
