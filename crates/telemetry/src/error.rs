/// Errors raised while building generator inputs.
///
/// Generation itself is total; these only fire for malformed catalogs and
/// for fallible entropy sources plugged in later.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The catalog has no names to draw from.
    #[error("service catalog is empty")]
    EmptyCatalog,

    /// Two catalog names map to the same service id.
    #[error("catalog names `{first}` and `{second}` share the id `{id}`")]
    IdCollision {
        first: String,
        second: String,
        id: String,
    },

    /// A generation source failed.
    #[error("generation failed: {0}")]
    Generation(String),
}
