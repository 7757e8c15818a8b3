use glzig_derive::glzig_error;
use std::borrow::Cow;

#[glzig_error]
pub enum ParseStageError {
    #[error("Number error{}: {source}", format_context(.context))]
    Number { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Missing attribute{}: {message}", format_context(.context))]
    MissingAttribute { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(value: &str) -> Result<u32, ParseStageError> {
    value.parse::<u32>().context("Parsing the feature number")
}

fn main() {
    let err = parse("x").unwrap_err();
    assert!(err.to_string().starts_with("Number error (Parsing the feature number)"));

    let err: Result<(), ParseStageError> = Err(ParseStageError::MissingAttribute {
        message: Cow::Borrowed("name"),
        context: None,
    });
    let err = err.context("Reading <command>").unwrap_err();
    assert_eq!(err.to_string(), "Missing attribute (Reading <command>): name");
}
