//! Decode an in-memory contact list into typed records.

use std::io::Cursor;

use linecast::{DecodeOptions, FromLine, decode_lines};

#[derive(Debug)]
struct Contact {
    last: String,
    first: String,
    email: String,
}

#[derive(Debug, thiserror::Error)]
#[error("malformed contact line: `{0}`")]
struct BadContact(String);

impl FromLine for Contact {
    type Err = BadContact;

    fn from_line(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.split(',').map(str::trim);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(last), Some(first), Some(email)) if !email.is_empty() => Ok(Contact {
                last: last.to_string(),
                first: first.to_string(),
                email: email.to_string(),
            }),
            _ => Err(BadContact(line.to_string())),
        }
    }
}

fn main() {
    let data = "Smith, John, jsmith@gmail.com\n\
                Jones, Mary, mjones@hotmail.com\n\
                Johnson, Steve, sjohnson@yahoo.com\n";

    for record in decode_lines::<Contact, _>(Cursor::new(data), DecodeOptions::new()) {
        match record {
            Ok(contact) => println!("{} {} <{}>", contact.first, contact.last, contact.email),
            Err(e) => eprintln!("skipping: {e}"),
        }
    }
}
