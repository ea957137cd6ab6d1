//! Interactive shell
//!
//! Menu-style session: load a source,
//! display all books, search, borrow, return and rank. The catalog lives
//! for the length of the session and starts out empty.

use crate::config::SourceConfig;
use crate::output::render_table;
use anyhow::Result;
use lms_core::{parse_rank_count, parse_search_term, Catalog, InputError, LoaderKind, SearchField};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "lms> ";
const DEFAULT_TOP: usize = 5;

const HELP: &str = "\
Commands:
  load [file|database] [path]   Load the catalog (defaults to the configured source)
  list                          Display all books
  search <field> <term>         Search by Title, Author, Genre or ISBN
  borrow <isbn>                 Borrow one copy
  return <isbn>                 Return one copy
  top [n]                       Show the n most borrowed books (default 5, n < 0 shows none)
  help                          Show this message
  quit                          Leave the shell";

/// Run an interactive session over stdin/stdout
pub fn shell(source: &SourceConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(source.clone());
    session.run(stdin.lock(), stdout.lock())
}

/// What a single command produced
#[derive(Debug, PartialEq)]
enum Reply {
    Output(String),
    Quit,
}

/// One shell session owning its catalog
struct Session {
    catalog: Catalog,
    source: SourceConfig,
}

impl Session {
    fn new(source: SourceConfig) -> Self {
        Self {
            catalog: Catalog::new(),
            source,
        }
    }

    fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        writeln!(
            out,
            "Library Management System initialized. Load data to begin."
        )?;
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        for line in input.lines() {
            match self.execute(&line?) {
                Ok(Reply::Quit) => break,
                Ok(Reply::Output(text)) if text.is_empty() => {}
                Ok(Reply::Output(text)) => writeln!(out, "{}", text.trim_end())?,
                Err(e) => {
                    tracing::debug!("Command failed: {:?}", e);
                    writeln!(out, "Error: {}", e)?;
                }
            }
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        writeln!(out)?;
        Ok(())
    }

    fn execute(&mut self, line: &str) -> lms_core::Result<Reply> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Reply::Output(String::new()));
        };
        let args: Vec<&str> = words.collect();

        let text = match command.to_lowercase().as_str() {
            "quit" | "exit" => return Ok(Reply::Quit),
            "help" => HELP.to_string(),
            "load" => self.load(&args)?,
            "list" => self.list(),
            "search" => self.search(&args)?,
            "borrow" => {
                let isbn = args.first().ok_or(InputError::MissingArgument("isbn"))?;
                let book = self.catalog.borrow_book(isbn)?;
                format!("Book borrowed: {} (ISBN: {})", book.title, book.isbn)
            }
            "return" => {
                let isbn = args.first().ok_or(InputError::MissingArgument("isbn"))?;
                let book = self.catalog.return_book(isbn)?;
                format!("Book returned: {} (ISBN: {})", book.title, book.isbn)
            }
            "top" => {
                // Echo the count as typed; negatives rank nothing
                let (n, shown) = match args.first() {
                    Some(arg) => (parse_rank_count(arg)?, arg.to_string()),
                    None => (DEFAULT_TOP, DEFAULT_TOP.to_string()),
                };
                format!(
                    "{}Displaying top {} borrowed books",
                    render_table(&self.catalog.top_borrowed(n)),
                    shown
                )
            }
            other => return Err(InputError::UnknownCommand(other.to_string()).into()),
        };

        Ok(Reply::Output(text))
    }

    fn load(&mut self, args: &[&str]) -> lms_core::Result<String> {
        let source = match args.split_first() {
            Some((kind, rest)) => {
                let kind: LoaderKind = kind.parse()?;
                let mut source = self.source.with_kind(kind);
                if !rest.is_empty() {
                    source.locator = rest.join(" ");
                }
                source
            }
            None => self.source.clone(),
        };

        let loader = lms_core::loader_for(source.kind, source.locator.as_str());
        self.catalog.load_from(loader.as_ref())?;
        self.source = source;

        Ok(format!(
            "{}\nData loaded successfully from: {}",
            self.list(),
            self.source.kind
        ))
    }

    fn list(&self) -> String {
        format!(
            "{}Displaying all books: {} books",
            render_table(&self.catalog.books()),
            self.catalog.len()
        )
    }

    fn search(&self, args: &[&str]) -> lms_core::Result<String> {
        let (field, rest) = args
            .split_first()
            .ok_or(InputError::MissingArgument("search field"))?;
        let field: SearchField = field.parse()?;
        let term = parse_search_term(&rest.join(" "))?;

        let results = self.catalog.search(field, &term);
        Ok(format!(
            "{}Search completed: {} results found for {}: {}",
            render_table(&results),
            results.len(),
            field,
            term
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_core::LmsError;
    use std::io::Cursor;

    fn stub_session() -> Session {
        Session::new(SourceConfig {
            kind: LoaderKind::Database,
            locator: "stub".to_string(),
        })
    }

    fn output(reply: lms_core::Result<Reply>) -> String {
        match reply.unwrap() {
            Reply::Output(text) => text,
            Reply::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_starts_empty() {
        let mut session = stub_session();
        let text = output(session.execute("list"));
        assert!(text.ends_with("Displaying all books: 0 books"));
    }

    #[test]
    fn test_load_configured_source() {
        let mut session = stub_session();
        let text = output(session.execute("load"));
        assert!(text.contains("Database Book 1"));
        assert!(text.ends_with("Data loaded successfully from: Database"));
    }

    #[test]
    fn test_borrow_and_return_messages() {
        let mut session = stub_session();
        session.execute("load").unwrap();

        let text = output(session.execute("borrow 100"));
        assert_eq!(text, "Book borrowed: Database Book 1 (ISBN: 100)");

        let text = output(session.execute("return 100"));
        assert_eq!(text, "Book returned: Database Book 1 (ISBN: 100)");

        let err = session.execute("return 100").unwrap_err();
        assert_eq!(
            err.to_string(),
            "All copies are already available for Database Book 1"
        );
    }

    #[test]
    fn test_borrow_exhausts_copies() {
        let mut session = stub_session();
        session.execute("load").unwrap();
        for _ in 0..3 {
            session.execute("borrow 100").unwrap();
        }
        let err = session.execute("BORROW 100").unwrap_err();
        assert_eq!(err.to_string(), "No copies available for Database Book 1");
    }

    #[test]
    fn test_search_validation() {
        let mut session = stub_session();
        session.execute("load").unwrap();

        let text = output(session.execute("search title book 2"));
        assert!(text.ends_with("Search completed: 1 results found for Title: book 2"));

        assert!(matches!(
            session.execute("search title   "),
            Err(LmsError::Input(InputError::EmptySearchTerm))
        ));
        assert!(matches!(
            session.execute("search publisher x"),
            Err(LmsError::Input(InputError::UnknownSearchField(_)))
        ));
        assert!(matches!(
            session.execute("search"),
            Err(LmsError::Input(InputError::MissingArgument(_)))
        ));
    }

    #[test]
    fn test_top_ranks_borrowed() {
        let mut session = stub_session();
        session.execute("load").unwrap();
        session.execute("borrow 101").unwrap();

        let text = output(session.execute("top 1"));
        assert!(text.contains("Database Book 2"));
        assert!(!text.contains("Database Book 1"));
        assert!(text.ends_with("Displaying top 1 borrowed books"));

        let text = output(session.execute("top -2"));
        assert!(!text.contains("Database Book"));
        assert!(text.ends_with("Displaying top -2 borrowed books"));

        let text = output(session.execute("top"));
        assert!(text.ends_with("Displaying top 5 borrowed books"));

        assert!(matches!(
            session.execute("top many"),
            Err(LmsError::Input(InputError::InvalidCount(_)))
        ));
    }

    #[test]
    fn test_load_unknown_source_kind() {
        let mut session = stub_session();
        assert!(matches!(
            session.execute("load ftp somewhere"),
            Err(LmsError::Input(InputError::UnknownSource(_)))
        ));
    }

    #[test]
    fn test_failed_load_keeps_catalog() {
        let mut session = stub_session();
        session.execute("load").unwrap();
        session.execute("borrow 100").unwrap();

        let err = session
            .execute("load file /nonexistent/books.txt")
            .unwrap_err();
        assert!(matches!(err, LmsError::Load(_)));

        let text = output(session.execute("top 1"));
        assert!(text.contains("Database Book 1"));
    }

    #[test]
    fn test_unknown_command_and_quit() {
        let mut session = stub_session();
        assert!(matches!(
            session.execute("dance"),
            Err(LmsError::Input(InputError::UnknownCommand(_)))
        ));
        assert_eq!(session.execute("exit").unwrap(), Reply::Quit);
        assert_eq!(session.execute("   ").unwrap(), Reply::Output(String::new()));
    }

    #[test]
    fn test_run_reports_errors_and_continues() {
        let mut session = stub_session();
        let input = Cursor::new("borrow 100\nload\nborrow 100\nquit\nlist\n");
        let mut out = Vec::new();
        session.run(input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Library Management System initialized."));
        assert!(text.contains("Error: No book with ISBN 100"));
        assert!(text.contains("Book borrowed: Database Book 1 (ISBN: 100)"));
        // Nothing after quit runs
        assert_eq!(text.matches("Displaying all books").count(), 1);
    }
}
