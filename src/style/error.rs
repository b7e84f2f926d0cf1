use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Inline CSS segment without a `property: value` shape.
    #[error("Malformed style declaration: `{0}`")]
    MalformedDeclaration(String),
}
