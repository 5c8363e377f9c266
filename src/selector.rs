//! Budget-bounded random article selection.
//!
//! The pool is shuffled, then walked in that order while the running word
//! total stays strictly below the budget. The first article that would reach
//! or cross the budget ends the walk; later, smaller articles are not tried.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Article;

/// Shuffle `articles` with `rng` and take a budget-bounded prefix.
pub fn select_articles<R>(mut articles: Vec<Article>, word_budget: i64, rng: &mut R) -> Vec<Article>
where
    R: Rng + ?Sized,
{
    articles.shuffle(rng);
    take_within_budget(articles, word_budget)
}

/// Greedy first-fit-then-halt over `articles` in the given order.
///
/// Every prefix of the result sums to strictly less than `word_budget`. A
/// non-positive budget always yields an empty selection.
pub fn take_within_budget<I>(articles: I, word_budget: i64) -> Vec<Article>
where
    I: IntoIterator<Item = Article>,
{
    let Ok(budget) = u64::try_from(word_budget) else {
        return Vec::new();
    };

    let mut total_words: u64 = 0;
    let mut selected = Vec::new();

    for article in articles {
        let next_total = total_words.saturating_add(article.word_count);
        if next_total >= budget {
            tracing::debug!(
                "Stopping at '{}' ({} words): {} would reach budget {}",
                article.title,
                article.word_count,
                next_total,
                budget
            );
            break;
        }
        total_words = next_total;
        selected.push(article);
    }

    selected
}

/// Combined word count of a selection.
pub fn total_words(articles: &[Article]) -> u64 {
    articles.iter().map(|a| a.word_count).sum()
}
