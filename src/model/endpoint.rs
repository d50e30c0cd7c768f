use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Data endpoints of the family portal
///
/// Any other endpoint name can still be called through
/// [`Client::call`](crate::application::client::Client::call).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// Absences, late entries and early exits
    Assenze,
    /// What happened on a given day
    Oggi,
    /// Disciplinary notes
    NoteDisciplinari,
    /// Daily marks
    VotiGiornalieri,
    /// End of term marks
    VotiScrutinio,
    /// Homework
    Compiti,
    /// Lesson topics
    Argomenti,
    /// Class reminders
    Promemoria,
    /// Timetable
    Orario,
    /// Teachers of the class
    DocentiClasse,
}

impl Endpoint {
    /// Every known endpoint
    pub const ALL: [Endpoint; 10] = [
        Endpoint::Assenze,
        Endpoint::Oggi,
        Endpoint::NoteDisciplinari,
        Endpoint::VotiGiornalieri,
        Endpoint::VotiScrutinio,
        Endpoint::Compiti,
        Endpoint::Argomenti,
        Endpoint::Promemoria,
        Endpoint::Orario,
        Endpoint::DocentiClasse,
    ];

    /// Path segment of the endpoint
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Assenze => "assenze",
            Endpoint::Oggi => "oggi",
            Endpoint::NoteDisciplinari => "notedisciplinari",
            Endpoint::VotiGiornalieri => "votigiornalieri",
            Endpoint::VotiScrutinio => "votiscrutinio",
            Endpoint::Compiti => "compiti",
            Endpoint::Argomenti => "argomenti",
            Endpoint::Promemoria => "promemoria",
            Endpoint::Orario => "orario",
            Endpoint::DocentiClasse => "docenticlasse",
        }
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_matches('/').to_lowercase();
        Endpoint::ALL
            .into_iter()
            .find(|e| e.as_str() == name)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown endpoint: {s}")))
    }
}
