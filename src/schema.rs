table! {
    events (id) {
        id -> Integer,
        title -> Text,
        background -> Text,
        location -> Text,
        start_time -> Text,
        end_time -> Text,
        price -> Integer,
        published -> Bool,
    }
}

table! {
    event_signups (id) {
        id -> Integer,
        event -> Integer,
        name -> Text,
        email -> Text,
    }
}

joinable!(event_signups -> events (event));

allow_tables_to_appear_in_same_query!(events, event_signups,);
