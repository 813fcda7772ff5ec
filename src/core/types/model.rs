//! Model identifier types
//!
//! A completion request names its model either as one of the stock completion
//! models or as a fine-tuned derivative. The two kinds are distinct types so a
//! request and the response parsed for it always agree on which one they use.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::providers::openai::error::OpenAIError;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Completion {}
    impl Sealed for super::FineTunedModel {}
}

/// The two kinds of model identifier accepted by the completions endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelVariant {
    /// A stock model published by the API
    Stock,
    /// A custom-trained derivative of a stock model
    FineTuned,
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stock => write!(f, "stock"),
            Self::FineTuned => write!(f, "fine_tuned"),
        }
    }
}

/// A model identifier usable in a completion request.
///
/// Sealed: [`Completion`] and [`FineTunedModel`] are the only implementors.
pub trait ModelId:
    sealed::Sealed
    + Serialize
    + DeserializeOwned
    + Clone
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Which kind of identifier this type represents
    const VARIANT: ModelVariant;
}

/// Stock text-completion models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Completion {
    #[serde(rename = "text-davinci-003")]
    TextDavinci003,
    #[serde(rename = "text-davinci-002")]
    TextDavinci002,
    #[serde(rename = "text-davinci-001")]
    TextDavinci001,
    #[serde(rename = "text-curie-001")]
    TextCurie001,
    #[serde(rename = "text-babbage-001")]
    TextBabbage001,
    #[serde(rename = "text-ada-001")]
    TextAda001,
    #[serde(rename = "davinci")]
    Davinci,
    #[serde(rename = "curie")]
    Curie,
    #[serde(rename = "babbage")]
    Babbage,
    #[serde(rename = "ada")]
    Ada,
    #[serde(rename = "davinci-instruct-beta")]
    DavinciInstructBeta,
    #[serde(rename = "curie-instruct-beta")]
    CurieInstructBeta,
    #[serde(rename = "code-davinci-002")]
    CodeDavinci002,
    #[serde(rename = "code-cushman-001")]
    CodeCushman001,
    #[serde(rename = "gpt-3.5-turbo-instruct")]
    Gpt35TurboInstruct,
    #[serde(rename = "davinci-002")]
    Davinci002,
    #[serde(rename = "babbage-002")]
    Babbage002,
}

impl Completion {
    /// Every stock completion model, in declaration order
    pub const ALL: [Completion; 17] = [
        Self::TextDavinci003,
        Self::TextDavinci002,
        Self::TextDavinci001,
        Self::TextCurie001,
        Self::TextBabbage001,
        Self::TextAda001,
        Self::Davinci,
        Self::Curie,
        Self::Babbage,
        Self::Ada,
        Self::DavinciInstructBeta,
        Self::CurieInstructBeta,
        Self::CodeDavinci002,
        Self::CodeCushman001,
        Self::Gpt35TurboInstruct,
        Self::Davinci002,
        Self::Babbage002,
    ];

    /// Wire name of the model
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextDavinci003 => "text-davinci-003",
            Self::TextDavinci002 => "text-davinci-002",
            Self::TextDavinci001 => "text-davinci-001",
            Self::TextCurie001 => "text-curie-001",
            Self::TextBabbage001 => "text-babbage-001",
            Self::TextAda001 => "text-ada-001",
            Self::Davinci => "davinci",
            Self::Curie => "curie",
            Self::Babbage => "babbage",
            Self::Ada => "ada",
            Self::DavinciInstructBeta => "davinci-instruct-beta",
            Self::CurieInstructBeta => "curie-instruct-beta",
            Self::CodeDavinci002 => "code-davinci-002",
            Self::CodeCushman001 => "code-cushman-001",
            Self::Gpt35TurboInstruct => "gpt-3.5-turbo-instruct",
            Self::Davinci002 => "davinci-002",
            Self::Babbage002 => "babbage-002",
        }
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Completion {
    type Err = OpenAIError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| OpenAIError::InvalidModel(format!("unknown completion model '{}'", s)))
    }
}

impl ModelId for Completion {
    const VARIANT: ModelVariant = ModelVariant::Stock;
}

/// Name of a fine-tuned model, e.g. `curie:ft-acme-2021-03-03-21-44-20`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FineTunedModel(String);

impl FineTunedModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for FineTunedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FineTunedModel {
    type Err = OpenAIError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(OpenAIError::InvalidModel(
                "fine-tuned model name cannot be empty".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }
}

impl ModelId for FineTunedModel {
    const VARIANT: ModelVariant = ModelVariant::FineTuned;
}
