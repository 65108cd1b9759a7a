use css::SelectorError;
use html::Id;
use slider_core::ConfigError;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SliderError {
    #[error("invalid selector: {0}")]
    Selector(#[from] SelectorError),

    #[error("invalid slider configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("node {0:?} is not a range input")]
    NotARangeInput(Id),

    #[error("node {0:?} has no parent to host the slider")]
    Detached(Id),

    #[error("the document has no node ids left for a new slider")]
    IdsExhausted,
}
