/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Response of the `login` endpoint
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoginResponse {
    /// Token authorising the following requests
    pub token: String,
}

/// Personal details of the student attached to a card
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct StudentInfo {
    /// First name
    #[serde(rename = "desNome", default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(rename = "desCognome", default)]
    pub last_name: Option<String>,
    /// Any other field sent by the portal
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StudentInfo {
    /// Full name of the student, when the portal provided one
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Some(name.clone()),
            (None, None) => None,
        }
    }
}

/// One element of the `schede` response
///
/// It carries the identifiers every data call must send. Fields the client
/// does not interpret are kept verbatim in `extra`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StudentCard {
    /// Token to use for data calls on this card
    #[serde(rename = "authToken")]
    pub auth_token: String,
    /// Ministerial school code
    #[serde(rename = "codMin")]
    pub school_code: String,
    /// Student identifier
    #[serde(rename = "prgAlunno", deserialize_with = "id_as_string")]
    pub student_id: String,
    /// Card identifier
    #[serde(rename = "prgScheda", deserialize_with = "id_as_string")]
    pub card_id: String,
    /// School identifier
    #[serde(rename = "prgScuola", deserialize_with = "id_as_string")]
    pub school_id: String,
    /// Student details
    #[serde(rename = "alunno", default)]
    pub student: Option<StudentInfo>,
    /// Any other field sent by the portal
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accepts identifiers sent either as JSON numbers or as strings
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or a number, found {other}"
        ))),
    }
}
