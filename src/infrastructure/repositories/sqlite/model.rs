use diesel::{Identifiable, Insertable, Queryable, QueryableByName};
use std::fmt;

/// Row as stored in the `prompts` table
#[derive(Queryable, Identifiable, QueryableByName, Clone, Debug)]
#[diesel(table_name = crate::infrastructure::repositories::sqlite::schema::prompts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DbEntry {
    pub id: i32,
    pub prompt: String,
    pub link: String,
    pub tags: String,
    pub category: String,
    pub ai_model: String,
    pub date_added: String,
}

/// New entry for insertion; `date_added` carries the preformatted
/// "YYYY-MM-DD HH:MM:SS" local timestamp.
#[derive(Insertable, Debug)]
#[diesel(table_name = crate::infrastructure::repositories::sqlite::schema::prompts)]
pub struct NewEntry {
    pub prompt: String,
    pub link: String,
    pub tags: String,
    pub category: String,
    pub ai_model: String,
    pub date_added: String,
}

impl fmt::Display for NewEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "prompt: {}, link: {}, tags: {}, category: {}, ai_model: {}, date_added: {}",
            self.prompt, self.link, self.tags, self.category, self.ai_model, self.date_added
        )
    }
}
