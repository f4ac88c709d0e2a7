//! Batch runner end-to-end tests against a scripted oracle
//!
//! Covers batch ordering and per-target independence, duplicate targets,
//! and the full generate -> match -> report flow with exact call counts.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::error::ResolveError;
    use crate::hdpath::CandidatePath;
    use crate::matcher::MatchResult;
    use crate::oracle::AddressOracle;
    use crate::pathspace;
    use crate::runner::run;

    /// Oracle with a fixed path -> address map and a call log
    struct MapOracle {
        addresses: HashMap<String, String>,
        calls: Vec<String>,
    }

    impl MapOracle {
        fn new(entries: &[(&str, &str)]) -> Self {
            MapOracle {
                addresses: entries
                    .iter()
                    .map(|(p, a)| (p.to_string(), a.to_string()))
                    .collect(),
                calls: Vec::new(),
            }
        }
    }

    impl AddressOracle for MapOracle {
        async fn resolve(&mut self, path: &CandidatePath) -> Result<String, ResolveError> {
            self.calls.push(path.as_str().to_string());
            self.addresses
                .get(path.as_str())
                .cloned()
                .ok_or(ResolveError::Device(0x6A80))
        }
    }

    fn candidates(templates: &[&str], depth: i64) -> Vec<CandidatePath> {
        let templates: Vec<String> = templates.iter().map(|s| s.to_string()).collect();
        pathspace::generate(&templates, depth)
    }

    fn targets(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_matching_address_reports_its_path() {
        // 44'/60'/0'/0 -> 0xBB, 44'/60'/0'/1 -> 0xAA; searching 0xAA
        let candidates = candidates(&["44'/60'/0'"], 2);
        let mut oracle = MapOracle::new(&[("44'/60'/0'/0", "0xBB"), ("44'/60'/0'/1", "0xAA")]);

        let report = run(&targets(&["0xAA"]), &candidates, &mut oracle).await;

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].address, "0xAA");
        assert_eq!(
            report.entries[0].result,
            MatchResult::Found(CandidatePath::new("44'/60'/0'", 1))
        );
        // exactly two lookups, in sequence order
        assert_eq!(oracle.calls, vec!["44'/60'/0'/0", "44'/60'/0'/1"]);

        let rendered = report.render().unwrap();
        assert!(rendered.contains("\"0xAA\": \"44'/60'/0'/1\""));
    }

    #[tokio::test]
    async fn test_unmatched_address_reports_sentinel_after_full_scan() {
        let candidates = candidates(&["44'/60'/0'"], 2);
        let mut oracle = MapOracle::new(&[("44'/60'/0'/0", "0xBB"), ("44'/60'/0'/1", "0xAA")]);

        let report = run(&targets(&["0xCC"]), &candidates, &mut oracle).await;

        assert_eq!(report.entries[0].result, MatchResult::NotFound);
        assert_eq!(oracle.calls, vec!["44'/60'/0'/0", "44'/60'/0'/1"]);

        let rendered = report.render().unwrap();
        assert!(rendered.contains("\"0xCC\": \"No paths found\""));
    }

    #[tokio::test]
    async fn test_batch_order_and_independence() {
        // A lives at the third index of the template, B exists nowhere
        let candidates = candidates(&["44'/60'/0'"], 3);
        let script = [
            ("44'/60'/0'/0", "0x01"),
            ("44'/60'/0'/1", "0x02"),
            ("44'/60'/0'/2", "0xAA"),
        ];

        let mut oracle = MapOracle::new(&script);
        let report = run(&targets(&["0xAA", "0xBB"]), &candidates, &mut oracle).await;

        assert_eq!(report.entries[0].address, "0xAA");
        assert_eq!(
            report.entries[0].result,
            MatchResult::Found(CandidatePath::new("44'/60'/0'", 2))
        );
        assert_eq!(report.entries[1].address, "0xBB");
        assert_eq!(report.entries[1].result, MatchResult::NotFound);
        // A's search stops at its match (3 calls); B scans everything (3 calls)
        assert_eq!(oracle.calls.len(), 6);

        // same per-target results when B is searched first
        let mut oracle = MapOracle::new(&script);
        let reversed = run(&targets(&["0xBB", "0xAA"]), &candidates, &mut oracle).await;
        assert_eq!(reversed.entries[0].result, MatchResult::NotFound);
        assert_eq!(
            reversed.entries[1].result,
            MatchResult::Found(CandidatePath::new("44'/60'/0'", 2))
        );
    }

    #[tokio::test]
    async fn test_duplicate_targets_searched_independently() {
        let candidates = candidates(&["44'/60'/0'"], 2);
        let mut oracle = MapOracle::new(&[("44'/60'/0'/0", "0xAA"), ("44'/60'/0'/1", "0xBB")]);

        let report = run(&targets(&["0xAA", "0xAA"]), &candidates, &mut oracle).await;

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].result, report.entries[1].result);
        // no deduplication: both searches hit the oracle
        assert_eq!(oracle.calls.len(), 2);
    }

    #[tokio::test]
    async fn test_zero_depth_resolves_everything_to_not_found() {
        let candidates = candidates(&["44'/60'/0'", "44'/61'/0'/0"], 0);
        let mut oracle = MapOracle::new(&[]);

        let report = run(&targets(&["0xAA", "0xBB"]), &candidates, &mut oracle).await;

        assert!(report
            .entries
            .iter()
            .all(|e| e.result == MatchResult::NotFound));
        assert!(oracle.calls.is_empty());
    }

    #[tokio::test]
    async fn test_template_priority_order_wins() {
        // both templates derive the target; the first template must win
        let candidates = candidates(&["T1", "T2"], 1);
        let mut oracle = MapOracle::new(&[("T1/0", "0xAA"), ("T2/0", "0xAA")]);

        let report = run(&targets(&["0xAA"]), &candidates, &mut oracle).await;

        assert_eq!(
            report.entries[0].result,
            MatchResult::Found(CandidatePath::new("T1", 0))
        );
        assert_eq!(oracle.calls, vec!["T1/0"]);
    }
}
