use crate::error::{CurryError, Result};
use crate::generator::constants::{COMMENT_BUCKETS, REACTION_COMMENTS};
use crate::generator::random::RandomSource;

/// Map a rice percentage to its comment bucket.
///
/// Rounds half up to the nearest multiple of 10, so 55 lands in bucket 6.
/// Clamped to `0..=10`.
pub fn bucket_index(rice_percent: u8) -> usize {
    ((rice_percent as usize + 5) / 10).min(COMMENT_BUCKETS - 1)
}

/// Canned reaction strings, one non-empty list per bucket.
#[derive(Debug, Clone)]
pub struct CommentTable {
    buckets: Vec<Vec<String>>,
}

impl CommentTable {
    /// The built-in table.
    pub fn builtin() -> Self {
        Self {
            buckets: REACTION_COMMENTS
                .iter()
                .map(|bucket| bucket.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    /// Build a table from custom content.
    ///
    /// Requires exactly 11 buckets, each with at least one comment.
    pub fn from_buckets(buckets: Vec<Vec<String>>) -> Result<Self> {
        if buckets.len() != COMMENT_BUCKETS {
            return Err(CurryError::InvalidComments(format!(
                "expected {} buckets, found {}",
                COMMENT_BUCKETS,
                buckets.len()
            )));
        }

        if let Some(empty) = buckets.iter().position(|b| b.is_empty()) {
            return Err(CurryError::InvalidComments(format!(
                "bucket {} has no comments",
                empty
            )));
        }

        Ok(Self { buckets })
    }

    /// Comments for one bucket.
    pub fn bucket(&self, index: usize) -> &[String] {
        &self.buckets[index.min(COMMENT_BUCKETS - 1)]
    }

    /// Pick a comment for the given rice percentage.
    pub fn select(&self, rice_percent: u8, rng: &mut impl RandomSource) -> String {
        let group = self.bucket(bucket_index(rice_percent));
        let last = group.len().saturating_sub(1) as u32;
        let pick = rng.int_inclusive(0, last) as usize;
        group[pick.min(group.len() - 1)].clone()
    }
}

impl Default for CommentTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random::ScriptedSource;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(bucket_index(0), 0);
        assert_eq!(bucket_index(4), 0);
        assert_eq!(bucket_index(5), 1);
        assert_eq!(bucket_index(54), 5);
        assert_eq!(bucket_index(55), 6);
        assert_eq!(bucket_index(95), 10);
        assert_eq!(bucket_index(100), 10);
    }

    #[test]
    fn test_builtin_has_eleven_buckets() {
        let table = CommentTable::builtin();
        for i in 0..COMMENT_BUCKETS {
            assert!(!table.bucket(i).is_empty());
        }
    }

    #[test]
    fn test_select_uses_bucket() {
        let table = CommentTable::builtin();
        let mut source = ScriptedSource::new([1]);
        let comment = table.select(100, &mut source);
        assert_eq!(comment, table.bucket(10)[1]);
    }

    #[test]
    fn test_from_buckets_validation() {
        let short = vec![vec!["x".to_string()]; 10];
        assert!(matches!(
            CommentTable::from_buckets(short),
            Err(CurryError::InvalidComments(_))
        ));

        let mut with_empty = vec![vec!["x".to_string()]; 11];
        with_empty[3].clear();
        assert!(CommentTable::from_buckets(with_empty).is_err());

        let ok = vec![vec!["x".to_string()]; 11];
        assert!(CommentTable::from_buckets(ok).is_ok());
    }
}
