use event_signups::store;
use event_signups::{NewEvent, NewSignup};

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use lazy_static::lazy_static;
use serde_derive::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize)]
struct Config {
    db_path: PathBuf,
}

lazy_static! {
    static ref CONFIG: Config = {
        let mut settings = config::Config::default();
        settings.merge(config::File::with_name("settings")).unwrap();
        settings.try_into::<Config>().unwrap()
    };
}

fn main() {
    let matches = App::new("event-signups")
        .about("Record signups for events and report per-event counts")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("create-event")
                .about("Insert an event row")
                .arg(Arg::with_name("title").required(true))
                .arg(Arg::with_name("location").required(true))
                .arg(Arg::with_name("start-time").required(true))
                .arg(Arg::with_name("end-time").required(true))
                .arg(
                    Arg::with_name("background")
                        .long("background")
                        .takes_value(true)
                        .default_value(""),
                )
                .arg(
                    Arg::with_name("price")
                        .long("price")
                        .takes_value(true)
                        .default_value("0")
                        .validator(integer_arg),
                )
                .arg(Arg::with_name("published").long("published")),
        )
        .subcommand(
            SubCommand::with_name("signup")
                .about("Sign somebody up for an event")
                .arg(Arg::with_name("event").required(true).validator(integer_arg))
                .arg(Arg::with_name("name").required(true))
                .arg(Arg::with_name("email").required(true)),
        )
        .subcommand(
            SubCommand::with_name("delete-event")
                .about("Delete an event and, via cascade, its signups")
                .arg(Arg::with_name("event").required(true).validator(integer_arg)),
        )
        .subcommand(
            SubCommand::with_name("list")
                .about("List every event with its signup count"),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn integer_arg(value: String) -> Result<(), String> {
    value
        .parse::<i32>()
        .map(|_| ())
        .map_err(|err| format!("{}", err))
}

fn run(matches: &ArgMatches) -> Result<(), store::Error> {
    let conn = store::connect(&format!("{}", CONFIG.db_path.display()))?;
    store::initialize_schema(&conn)?;

    match matches.subcommand() {
        ("create-event", Some(sub)) => {
            let event = store::create_event(
                &conn,
                &NewEvent {
                    title: sub.value_of("title").unwrap().to_owned(),
                    background: sub.value_of("background").unwrap().to_owned(),
                    location: sub.value_of("location").unwrap().to_owned(),
                    start_time: sub.value_of("start-time").unwrap().to_owned(),
                    end_time: sub.value_of("end-time").unwrap().to_owned(),
                    price: sub.value_of("price").unwrap().parse().unwrap(),
                    published: sub.is_present("published"),
                },
            )?;
            println!("Created event {}: {}", event.id, event.title);
        }
        ("signup", Some(sub)) => {
            let created = store::signup(
                &conn,
                &NewSignup {
                    event: sub.value_of("event").unwrap().parse().unwrap(),
                    name: sub.value_of("name").unwrap().to_owned(),
                    email: sub.value_of("email").unwrap().to_owned(),
                },
            )?;
            println!(
                "Signup {}: {} <{}> for event {}",
                created.id, created.name, created.email, created.event
            );
        }
        ("delete-event", Some(sub)) => {
            let event_id = sub.value_of("event").unwrap().parse().unwrap();
            let deleted = store::delete_event(&conn, event_id)?;
            if deleted == 0 {
                println!("No event {}", event_id);
            } else {
                println!("Deleted event {}", event_id);
            }
        }
        ("list", _) => {
            for row in store::events_with_signup_counts(&conn)? {
                println!(
                    "{}\t{}\t{} - {}\t{}\t{} signups",
                    row.id, row.title, row.start_time, row.end_time, row.location, row.signups
                );
            }
        }
        _ => unreachable!(),
    }
    Ok(())
}
