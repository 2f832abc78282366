//! Interactive recommendation session.
//!
//! Drives the read-choose-reread loop: show a menu, read a 1-based choice,
//! display the chosen article, then re-rank around it. Input and output are
//! injected so the loop is testable without a terminal.

use crate::error::Result;
use crate::output;
use lector::corpus::Corpus;
use lector::recommend::ContentRecommender;
use std::io::{BufRead, Write};

pub(crate) struct Session {
    corpus: Corpus,
    recommender: ContentRecommender,
    /// Menu size per round
    count: usize,
}

impl Session {
    pub(crate) fn new(corpus: Corpus, recommender: ContentRecommender, count: usize) -> Self {
        Self {
            corpus,
            recommender,
            count,
        }
    }

    /// Run the session until the reader enters an invalid choice or the
    /// input ends.
    pub(crate) fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        let mut recommendations = self.recommender.initial(self.count)?;
        let mut round = 0usize;

        loop {
            self.render_menu(out, &recommendations, round)?;
            output::prompt(out)?;

            let Some(line) = read_line(input)? else {
                writeln!(out)?;
                break;
            };
            let Some(choice) = parse_choice(&line, recommendations.len()) else {
                output::goodbye(out)?;
                break;
            };

            let article_idx = recommendations[choice];
            let article = self
                .corpus
                .get(article_idx)
                .ok_or_else(|| lector::error::LectorError::index_out_of_bounds(
                    article_idx,
                    self.corpus.len(),
                ))?;
            output::article(out, article_idx, article)?;

            output::press_enter(out)?;
            if read_line(input)?.is_none() {
                writeln!(out)?;
                break;
            }

            recommendations = self.recommender.after_reading(article_idx, self.count)?;
            round += 1;
        }

        Ok(())
    }

    /// Render one round's menu. The first round is a single flat list;
    /// later rounds split off the dissimilar picks under their own header.
    fn render_menu<W: Write>(
        &self,
        out: &mut W,
        recommendations: &[usize],
        round: usize,
    ) -> Result<()> {
        let less_similar = self.recommender.less_similar();
        let split = if round == 0 || less_similar == 0 {
            recommendations.len()
        } else {
            recommendations.len().saturating_sub(less_similar)
        };

        output::menu_header(out)?;
        for (i, &article_idx) in recommendations[..split].iter().enumerate() {
            output::menu_item(out, i + 1, self.title_of(article_idx))?;
        }

        if split < recommendations.len() {
            output::different_header(out)?;
            for (i, &article_idx) in recommendations[split..].iter().enumerate() {
                output::menu_item(out, split + i + 1, self.title_of(article_idx))?;
            }
        }

        Ok(())
    }

    fn title_of(&self, article_idx: usize) -> &str {
        self.corpus
            .get(article_idx)
            .map_or("(unknown article)", |a| a.title.as_str())
    }
}

/// Read one line, returning `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// Parse a 1-based menu choice into a 0-based index. Anything that is not
/// a number in `1..=menu_len` is an invalid choice.
fn parse_choice(line: &str, menu_len: usize) -> Option<usize> {
    let value: usize = line.trim().parse().ok()?;
    if (1..=menu_len).contains(&value) {
        Some(value - 1)
    } else {
        None
    }
}
