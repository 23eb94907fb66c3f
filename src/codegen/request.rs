//! JSON rendition of the sqlc plugin request/response messages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub sqlc_version: String,
    /// Raw plugin options: a JSON object, a string holding JSON, or absent.
    #[serde(default)]
    pub plugin_options: serde_json::Value,
    #[serde(default)]
    pub queries: Vec<Query>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Query {
    pub name: String,
    pub text: String,
    #[serde(default)]
    pub cmd: String,
    #[serde(default)]
    pub params: Vec<Parameter>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub column: Column,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub files: Vec<File>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub name: String,
    pub contents: String,
}
