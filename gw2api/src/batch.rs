use crate::error::{Error, Result};
use itertools::Itertools;
use serde_json::Value;
use std::fmt::Display;

/// Most ids the API accepts in a single `ids` parameter.
pub const MAX_BATCH_SIZE: usize = 200;

/// Positional slices of `ids`, `size` long except possibly the last.
/// Never yields an empty slice.
pub fn chunks<I>(ids: &[I], size: usize) -> impl Iterator<Item = &[I]> {
    ids.chunks(size.max(1))
}

/// A chunk whose request failed. Its ids are kept so the caller can retry them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkFailure {
    pub index: usize,
    pub ids: Vec<String>,
    pub error: Error,
}

/// Concatenated results of every chunk, in chunk order, plus the chunks that failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    pub values: Vec<Value>,
    pub failures: Vec<ChunkFailure>,
    requests: usize,
}

impl Batch {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// How many requests went out to build this batch.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests
    }

    /// All values, or the error of the first failed chunk.
    ///
    /// # Errors
    ///
    /// Fails if any chunk failed.
    pub fn into_result(self) -> Result<Vec<Value>> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure.error),
            None => Ok(self.values),
        }
    }

    fn record(&mut self, index: usize, ids: Vec<String>, response: Result<Value>) {
        self.requests += 1;
        match response {
            Ok(Value::Array(values)) => self.values.extend(values),
            Ok(value) => self.values.push(value),
            Err(error) => self.failures.push(ChunkFailure { index, ids, error }),
        }
    }
}

/// Fetches `ids` of `resource` in chunks of [`MAX_BATCH_SIZE`], one request at a time.
///
/// With no ids a single request without the `ids` parameter is made, which
/// gives back whatever the resource lists by default. A failed chunk is
/// recorded in [`Batch::failures`] and the remaining chunks are still fetched.
#[must_use]
pub fn fetch_many<I, F>(resource: &str, ids: &[I], mut request: F) -> Batch
where
    I: Display,
    F: FnMut(&str, &[(&str, &str)]) -> Result<Value>,
{
    let mut batch = Batch::default();

    if ids.is_empty() {
        tracing::debug!(resource, "fetching default listing");
        batch.record(0, Vec::new(), request(resource, &[]));
        return batch;
    }

    for (index, chunk) in chunks(ids, MAX_BATCH_SIZE).enumerate() {
        let joined = chunk.iter().join(",");
        tracing::debug!(resource, index, size = chunk.len(), "fetching chunk");

        let response = request(resource, &[("ids", joined.as_str())]);
        if let Err(e) = &response {
            tracing::warn!(resource, index, "chunk failed: {e}");
        }

        batch.record(index, chunk.iter().map(ToString::to_string).collect(), response);
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids_param<'a>(params: &[(&str, &'a str)]) -> Option<&'a str> {
        params.iter().find(|(k, _)| *k == "ids").map(|(_, v)| *v)
    }

    // Answers with the ids it was asked for, and records each chunk size.
    fn echo(sizes: &mut Vec<usize>) -> impl FnMut(&str, &[(&str, &str)]) -> Result<Value> + '_ {
        move |_, params| {
            let ids = ids_param(params).expect("chunk request without ids");
            let echoed = ids.split(',').map(|id| json!(id.parse::<u64>().unwrap())).collect::<Vec<_>>();
            sizes.push(echoed.len());
            Ok(Value::Array(echoed))
        }
    }

    #[test]
    fn splits_into_ordered_chunks() {
        let ids = (1..=450).collect::<Vec<u64>>();
        let mut sizes = vec![];

        let batch = fetch_many("items", &ids, echo(&mut sizes));

        assert_eq!(sizes, vec![200, 200, 50]);
        assert_eq!(batch.requests(), 3);
        assert!(batch.is_complete());
        assert_eq!(batch.values, ids.iter().map(|id| json!(id)).collect::<Vec<_>>());
    }

    #[test]
    fn exact_multiple_has_no_trailing_request() {
        let ids = (1..=400).collect::<Vec<u64>>();
        let mut sizes = vec![];

        let batch = fetch_many("items", &ids, echo(&mut sizes));

        assert_eq!(sizes, vec![200, 200]);
        assert_eq!(batch.values.len(), 400);
    }

    #[test]
    fn small_sets_use_one_request() {
        for n in [1_u64, 7, 199, 200] {
            let ids = (1..=n).collect::<Vec<_>>();
            let mut sizes = vec![];

            let batch = fetch_many("recipes", &ids, echo(&mut sizes));

            assert_eq!(sizes, vec![ids.len()]);
            assert_eq!(batch.requests(), 1);
        }
    }

    #[test]
    fn request_count_is_ceiling_of_batch_size() {
        for n in [201_usize, 399, 401, 600, 1001] {
            let ids = (0..n).collect::<Vec<_>>();
            let mut calls = 0;

            let batch = fetch_many("items", &ids, |_, params| {
                let size = ids_param(params).unwrap().split(',').count();
                assert!(size > 0 && size <= MAX_BATCH_SIZE);
                calls += 1;
                Ok(json!([]))
            });

            assert_eq!(calls, n.div_ceil(MAX_BATCH_SIZE));
            assert_eq!(batch.requests(), calls);
        }
    }

    #[test]
    fn no_ids_makes_a_single_listing_request() {
        let mut seen = vec![];

        let batch = fetch_many::<u32, _>("worlds", &[], |resource, params| {
            seen.push((resource.to_owned(), params.len()));
            Ok(json!([1001, 1002]))
        });

        assert_eq!(seen, vec![("worlds".to_owned(), 0)]);
        assert_eq!(batch.values, vec![json!(1001), json!(1002)]);
    }

    #[test]
    fn failed_chunk_is_reported_and_others_kept() {
        let ids = (1..=450).collect::<Vec<u64>>();
        let mut index = 0;

        let batch = fetch_many("items", &ids, |_, params| {
            index += 1;
            if index == 2 {
                return Err(Error::Status(503));
            }
            let count = ids_param(params).unwrap().split(',').count();
            Ok(Value::Array(vec![json!(null); count]))
        });

        assert!(!batch.is_complete());
        assert_eq!(batch.requests(), 3);
        assert_eq!(batch.values.len(), 250);
        assert_eq!(batch.failures.len(), 1);

        let failure = &batch.failures[0];
        assert_eq!(failure.index, 1);
        assert_eq!(failure.ids.first().map(String::as_str), Some("201"));
        assert_eq!(failure.ids.len(), 200);
        assert_eq!(batch.into_result(), Err(Error::Status(503)));
    }

    #[test]
    fn objects_are_kept_whole() {
        let batch = fetch_many("characters", &["Some Name"], |_, params| {
            assert_eq!(ids_param(params), Some("Some Name"));
            Ok(json!({ "name": "Some Name" }))
        });

        assert_eq!(batch.values, vec![json!({ "name": "Some Name" })]);
    }

    #[test]
    fn chunks_never_empty() {
        let ids = [1, 2, 3, 4, 5];
        let sizes = chunks(&ids, 2).map(<[i32]>::len).collect::<Vec<_>>();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(chunks(&[] as &[i32], 2).count(), 0);
    }
}
