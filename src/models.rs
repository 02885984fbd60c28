use crate::schema::*;

use serde_derive::Serialize;

#[derive(Debug, Identifiable, Queryable, Serialize)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub background: String,
    pub location: String,
    pub start_time: String,
    pub end_time: String,
    pub price: i32,
    pub published: bool,
}

#[derive(Debug, Insertable)]
#[table_name = "events"]
pub struct NewEvent {
    pub title: String,
    pub background: String,
    pub location: String,
    pub start_time: String,
    pub end_time: String,
    pub price: i32,
    pub published: bool,
}

#[derive(Associations, Debug, Identifiable, Queryable, Serialize)]
#[belongs_to(Event, foreign_key = "event")]
pub struct EventSignup {
    pub id: i32,
    pub event: i32,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Insertable)]
#[table_name = "event_signups"]
pub struct NewSignup {
    pub event: i32,
    pub name: String,
    pub email: String,
}

/// One row of the `events_with_signups` view: an event with the count of its
/// signups, zero when none exist.
#[derive(Debug, Queryable, Serialize)]
pub struct EventWithSignups {
    pub id: i32,
    pub title: String,
    pub background: String,
    pub location: String,
    pub start_time: String,
    pub end_time: String,
    pub price: i32,
    pub published: bool,
    pub signups: i64,
}
