use crate::models::{Event, EventSignup, EventWithSignups, NewEvent, NewSignup};

use diesel::connection::SimpleConnection;
use diesel::prelude::*;

no_arg_sql_function!(last_insert_rowid, diesel::sql_types::Integer);

// SQLite has no SERIAL; AUTOINCREMENT keeps ids monotonic and never reused.
const SCHEMA_DDL: &str = "
CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title VARCHAR(255) NOT NULL,
    background TEXT NOT NULL,
    location VARCHAR(255) NOT NULL,
    start_time TEXT NOT NULL,
    end_time TEXT NOT NULL,
    price INTEGER NOT NULL,
    published BOOLEAN NOT NULL
);

CREATE TABLE IF NOT EXISTS event_signups (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    event INTEGER NOT NULL REFERENCES events (id) ON DELETE CASCADE,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL
);

CREATE VIEW IF NOT EXISTS events_with_signups AS
SELECT events.*, COALESCE(signup_counts.signups, 0) AS signups
FROM events
LEFT OUTER JOIN (
    SELECT event, COUNT(*) AS signups
    FROM event_signups
    GROUP BY event
) signup_counts ON events.id = signup_counts.event;
";

#[derive(Debug)]
pub enum Error {
    EventNotFound(i32),
    UnknownEvent(i32),
    DatabaseConnection(diesel::ConnectionError),
    Database(diesel::result::Error),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        use Error::*;
        match self {
            EventNotFound(event_id) => write!(f, "Event not found: {}", event_id),
            UnknownEvent(event_id) => write!(f, "No such event to sign up for: {}", event_id),
            DatabaseConnection(..) => write!(f, "Database connection error"),
            Database(..) => write!(f, "Database error"),
        }
    }
}

/// Opens a SQLite connection. Foreign keys are off by default in SQLite, and
/// both the referential check on signup inserts and the delete cascade depend
/// on them, so the pragma is issued on every connection.
pub fn connect(database_url: &str) -> Result<SqliteConnection, Error> {
    let conn = SqliteConnection::establish(database_url).map_err(Error::DatabaseConnection)?;
    conn.batch_execute("PRAGMA foreign_keys = ON;")
        .map_err(Error::Database)?;
    Ok(conn)
}

pub fn initialize_schema(conn: &SqliteConnection) -> Result<(), Error> {
    conn.batch_execute(SCHEMA_DDL).map_err(Error::Database)
}

pub fn create_event(conn: &SqliteConnection, new_event: &NewEvent) -> Result<Event, Error> {
    use crate::schema::events::dsl::events;
    use diesel::dsl::insert_into;

    insert_into(events)
        .values(new_event)
        .execute(conn)
        .map_err(Error::Database)?;
    let rowid: i32 = diesel::select(last_insert_rowid)
        .get_result(conn)
        .map_err(Error::Database)?;
    events.find(rowid).first(conn).map_err(Error::Database)
}

pub fn find_event(conn: &SqliteConnection, event_id: i32) -> Result<Event, Error> {
    use crate::schema::events::dsl::events;
    events.find(event_id).first(conn).map_err(|err| match err {
        diesel::result::Error::NotFound => Error::EventNotFound(event_id),
        err => Error::Database(err),
    })
}

/// Inserts one signup. The store assigns a fresh id; the insert is rejected
/// atomically when `event` names no live event.
pub fn signup(conn: &SqliteConnection, new_signup: &NewSignup) -> Result<EventSignup, Error> {
    use crate::schema::event_signups::dsl::event_signups;
    use diesel::dsl::insert_into;

    insert_into(event_signups)
        .values(new_signup)
        .execute(conn)
        .map_err(|err| match &err {
            diesel::result::Error::DatabaseError(_, info)
                if info.message().contains("FOREIGN KEY constraint failed") =>
            {
                Error::UnknownEvent(new_signup.event)
            }
            _ => Error::Database(err),
        })?;
    let rowid: i32 = diesel::select(last_insert_rowid)
        .get_result(conn)
        .map_err(Error::Database)?;
    event_signups.find(rowid).first(conn).map_err(Error::Database)
}

/// Deletes an event, cascading to its signups. Deleting an event that does
/// not exist is not an error; the affected row count says what happened.
pub fn delete_event(conn: &SqliteConnection, event_id: i32) -> Result<usize, Error> {
    use crate::schema::events::dsl::events;
    diesel::delete(events.find(event_id))
        .execute(conn)
        .map_err(Error::Database)
}

/// Reads the `events_with_signups` view: every event with its signup count,
/// zero included. Computed fresh by the database on each call.
pub fn events_with_signup_counts(conn: &SqliteConnection) -> Result<Vec<EventWithSignups>, Error> {
    use crate::views::events_with_signups::dsl::{events_with_signups, id};
    events_with_signups
        .order(id)
        .load(conn)
        .map_err(Error::Database)
}

pub fn event_with_signup_count(
    conn: &SqliteConnection,
    event_id: i32,
) -> Result<EventWithSignups, Error> {
    use crate::views::events_with_signups::dsl::events_with_signups;
    events_with_signups
        .find(event_id)
        .first(conn)
        .map_err(|err| match err {
            diesel::result::Error::NotFound => Error::EventNotFound(event_id),
            err => Error::Database(err),
        })
}
