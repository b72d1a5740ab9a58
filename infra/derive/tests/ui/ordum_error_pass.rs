use ordum_derive::ordum_error;
use std::borrow::Cow;

#[ordum_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown {input}{}: expected one of {candidates:?}", format_context(.context))]
    NotFound { input: String, candidates: Vec<String>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let io: DemoError = std::io::Error::other("boom").into();
    assert!(matches!(io, DemoError::Io { context: None, .. }));

    let internal: DemoError = "broken".into();
    assert_eq!(internal.to_string(), "Internal error: broken");
}
