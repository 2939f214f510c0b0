use thiserror::Error;

/// Domain errors raised while reducing upstream documents into catalog
/// entities.
#[derive(Error, Debug)]
pub enum DexError {
    /// A document was fetched successfully but lacks data the catalog
    /// requires, such as a creature without official artwork or a species URL
    /// without a numeric id segment.
    #[error("missing expected {field} in {resource}")]
    MissingData {
        /// The resource the document came from.
        resource: String,
        /// The absent field or value.
        field: &'static str,
    },
}
