//! Interactive paging over an address book.
//!
//! Each page is framed by a banner; between pages the user presses ENTER to
//! continue. Any other input, or end of input, stops the walk early.

use std::io::{self, BufRead, Write};

use tracing::debug;

use contacts_core::domain::Record;

const BANNER_FILL: &str = "********************";
const PROMPT: &str = "Press ENTER for the next page, or type anything to stop: ";

/// How a paging session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerOutcome {
    /// Every page was shown.
    Finished { pages: usize },
    /// The user stopped before the last page.
    Stopped { pages: usize },
}

/// Writes pages to `out`, reading continue/stop decisions from `input`.
pub struct Pager<R, W> {
    input: R,
    out: W,
    pause: bool,
}

impl<R: BufRead, W: Write> Pager<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            pause: true,
        }
    }

    /// Print every page back to back.
    pub fn without_pause(mut self) -> Self {
        self.pause = false;
        self
    }

    /// Walk `pages`, pulling the next page only after the user asks for it.
    pub fn run<'a, I>(&mut self, pages: I) -> io::Result<PagerOutcome>
    where
        I: IntoIterator<Item = Vec<&'a Record>>,
    {
        let mut pages = pages.into_iter().peekable();
        let mut shown = 0;

        while let Some(page) = pages.next() {
            shown += 1;
            self.write_page(shown, &page)?;

            if pages.peek().is_none() {
                break;
            }
            if self.pause && !self.wants_more()? {
                debug!(pages = shown, "Paging stopped by user");
                return Ok(PagerOutcome::Stopped { pages: shown });
            }
        }

        writeln!(self.out, "{BANNER_FILL} END {BANNER_FILL}")?;
        self.out.flush()?;
        Ok(PagerOutcome::Finished { pages: shown })
    }

    fn write_page(&mut self, number: usize, page: &[&Record]) -> io::Result<()> {
        writeln!(self.out, "{BANNER_FILL} Page {number} {BANNER_FILL}")?;
        for record in page {
            writeln!(self.out, "{record}")?;
        }
        self.out.flush()
    }

    /// Empty line means continue. EOF counts as stop.
    fn wants_more(&mut self) -> io::Result<bool> {
        write!(self.out, "{PROMPT}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(false);
        }
        Ok(line.trim_end_matches(['\r', '\n']).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contacts_core::domain::{AddressBook, Name};
    use std::num::NonZeroUsize;

    fn book(names: &[&str]) -> AddressBook {
        names
            .iter()
            .map(|n| Record::new(Name::new(*n).unwrap(), None, None))
            .collect()
    }

    fn run(book: &AddressBook, size: usize, input: &str, pause: bool) -> (PagerOutcome, String) {
        let mut out = Vec::new();
        let mut pager = Pager::new(input.as_bytes(), &mut out);
        if !pause {
            pager = pager.without_pause();
        }
        let outcome = pager
            .run(book.paginate(NonZeroUsize::new(size).unwrap()))
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn enter_walks_every_page() {
        let (outcome, text) = run(&book(&["Bill", "Bob", "Tom", "Ann", "Eve"]), 2, "\n\n", true);
        assert_eq!(outcome, PagerOutcome::Finished { pages: 3 });
        assert!(text.contains("Page 1"));
        assert!(text.contains("Page 3"));
        assert!(text.ends_with("******************** END ********************\n"));
        assert_eq!(text.matches(PROMPT).count(), 2);
    }

    #[test]
    fn typed_text_stops_early() {
        let (outcome, text) = run(&book(&["Bill", "Bob", "Tom"]), 1, "q\n", true);
        assert_eq!(outcome, PagerOutcome::Stopped { pages: 1 });
        assert!(!text.contains("Page 2"));
        assert!(!text.contains("END"));
    }

    #[test]
    fn eof_stops() {
        let (outcome, _) = run(&book(&["Bill", "Bob"]), 1, "", true);
        assert_eq!(outcome, PagerOutcome::Stopped { pages: 1 });
    }

    #[test]
    fn empty_book_shows_one_empty_page() {
        let (outcome, text) = run(&AddressBook::new(), 2, "", true);
        assert_eq!(outcome, PagerOutcome::Finished { pages: 1 });
        assert_eq!(
            text,
            "******************** Page 1 ********************\n\
             ******************** END ********************\n"
        );
    }

    #[test]
    fn no_pause_never_prompts() {
        let (outcome, text) = run(&book(&["Bill", "Bob", "Tom"]), 1, "", false);
        assert_eq!(outcome, PagerOutcome::Finished { pages: 3 });
        assert!(!text.contains(PROMPT));
    }

    #[test]
    fn records_printed_with_display_format() {
        let (_, text) = run(&book(&["Tom"]), 2, "", true);
        assert!(text.contains("Tom [] -\n"));
    }
}
