/// One line typed during a `browse` session.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Search(String),
    Page(usize),
    PageSize(usize),
    Quit,
    Invalid(String),
}

impl Input {
    /// Lines starting with `:` are commands; anything else is search text,
    /// passed through untouched.
    pub fn parse(line: &str) -> Self {
        let Some(command) = line.strip_prefix(':') else {
            return Input::Search(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("q" | "quit"), None, None) => Input::Quit,
            (Some("page" | "p"), Some(n), None) => number(n).map_or_else(Input::Invalid, Input::Page),
            (Some("size" | "s"), Some(n), None) => {
                number(n).map_or_else(Input::Invalid, Input::PageSize)
            }
            _ => Input::Invalid(format!("unknown command: {line}")),
        }
    }
}

fn number(raw: &str) -> Result<usize, String> {
    raw.parse()
        .map_err(|_| format!("not a number: {raw}"))
}
