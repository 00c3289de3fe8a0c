use sqlx::PgPool;

use crate::dto::ranking::{CommentCount, TopMovieEntry, TopMoviesFilter};
use crate::error::Result;
use crate::repository::ranking::RankingRepository;

/// Ranks movies by comment count, highest first.
///
/// Ties share a rank and the next distinct count takes the following rank,
/// so counts `[3, 3, 1]` rank as `[1, 1, 2]`. Rows come out by rank, then by
/// movie id.
pub fn dense_rank(mut counts: Vec<CommentCount>) -> Vec<TopMovieEntry> {
    counts.sort_by(|a, b| {
        b.total_comments
            .cmp(&a.total_comments)
            .then(a.movie_id.cmp(&b.movie_id))
    });

    let mut rank = 0;
    let mut previous = None;

    counts
        .into_iter()
        .map(|count| {
            if previous != Some(count.total_comments) {
                rank += 1;
                previous = Some(count.total_comments);
            }

            TopMovieEntry {
                movie_id: count.movie_id,
                total_comments: count.total_comments,
                rank,
            }
        })
        .collect()
}

pub async fn top_movies(pool: &PgPool, filter: &TopMoviesFilter) -> Result<Vec<TopMovieEntry>> {
    let repo = RankingRepository::new(pool);
    let counts = repo.comment_counts(filter).await?;

    tracing::debug!(
        "Ranking {} movies for comments between {} and {}",
        counts.len(),
        filter.window.after,
        filter.window.before
    );

    Ok(dense_rank(counts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(movie_id: i64, total_comments: i64) -> CommentCount {
        CommentCount {
            movie_id,
            total_comments,
        }
    }

    fn ranks(entries: &[TopMovieEntry]) -> Vec<(i64, i64, i64)> {
        entries
            .iter()
            .map(|e| (e.movie_id, e.total_comments, e.rank))
            .collect()
    }

    #[test]
    fn test_ties_do_not_leave_gaps() {
        let entries = dense_rank(vec![count(1, 1), count(2, 3), count(3, 3)]);

        assert_eq!(ranks(&entries), vec![(2, 3, 1), (3, 3, 1), (1, 1, 2)]);
    }

    #[test]
    fn test_commented_movie_ranks_above_silent_one() {
        let entries = dense_rank(vec![count(2, 0), count(1, 1)]);

        assert_eq!(ranks(&entries), vec![(1, 1, 1), (2, 0, 2)]);
    }

    #[test]
    fn test_all_zero_counts_share_top_rank() {
        let entries = dense_rank(vec![count(2, 0), count(1, 0)]);

        assert_eq!(ranks(&entries), vec![(1, 0, 1), (2, 0, 1)]);
    }

    #[test]
    fn test_empty_input_yields_empty_ranking() {
        assert!(dense_rank(Vec::new()).is_empty());
    }

    #[test]
    fn test_ranks_are_consecutive_over_many_distinct_counts() {
        let entries = dense_rank(vec![
            count(1, 5),
            count(2, 2),
            count(3, 5),
            count(4, 0),
            count(5, 2),
            count(6, 9),
        ]);

        assert_eq!(
            ranks(&entries),
            vec![
                (6, 9, 1),
                (1, 5, 2),
                (3, 5, 2),
                (2, 2, 3),
                (5, 2, 3),
                (4, 0, 4)
            ]
        );
    }
}
