use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

/// Interface for the student data service
///
/// Every method is a named shortcut for one endpoint of the portal and
/// returns its JSON payload unchanged. Methods without a date argument query
/// the current day.
#[async_trait]
pub trait StudentService: Send + Sync {
    /// Gets absences, late entries and early exits
    async fn absences(&self) -> Result<Value, AppError>;

    /// Gets what happened at school on a given day
    ///
    /// # Arguments
    /// * `date` - The day to query, today when `None`
    async fn today(&self, date: Option<NaiveDate>) -> Result<Value, AppError>;

    /// Gets disciplinary notes
    async fn disciplinary_notes(&self) -> Result<Value, AppError>;

    /// Gets daily marks
    async fn daily_marks(&self) -> Result<Value, AppError>;

    /// Gets end of term marks
    async fn final_marks(&self) -> Result<Value, AppError>;

    /// Gets homework
    async fn homework(&self) -> Result<Value, AppError>;

    /// Gets lesson topics
    async fn lesson_topics(&self) -> Result<Value, AppError>;

    /// Gets class reminders
    async fn reminders(&self) -> Result<Value, AppError>;

    /// Gets the timetable
    async fn timetable(&self) -> Result<Value, AppError>;

    /// Gets the teachers of the class
    async fn teachers(&self) -> Result<Value, AppError>;
}
