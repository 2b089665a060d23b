// src/core/finalize.rs
//
// Turns raw groupings into the six ordered tables every renderer consumes.
// Pure: the same Groups always produce the same FinalizedTables.

use indexmap::IndexMap;

use crate::config::consts::{MIN_SHARE_BP, SHARE_SCALE, TOP_REGIONS};
use super::aggregate::Groups;

pub type YearTable<V> = IndexMap<i32, V>;
pub type RegionTable<V> = IndexMap<String, V>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FinalizedTables {
    pub salary_by_year: YearTable<i64>,
    pub count_by_year: YearTable<usize>,
    pub salary_by_year_for_profession: YearTable<i64>,
    pub count_by_year_for_profession: YearTable<usize>,
    /// Ranked by mean salary, members drawn from `share_by_region_top10`.
    pub salary_by_region_top10: RegionTable<i64>,
    /// Ranked by share of all postings.
    pub share_by_region_top10: RegionTable<f64>,
}

impl FinalizedTables {
    pub fn is_empty(&self) -> bool {
        self.salary_by_year.is_empty()
    }

    /// Sum of the listed shares; the remainder is "other regions".
    pub fn listed_share(&self) -> f64 {
        self.share_by_region_top10.values().sum()
    }
}

/// Mean truncated toward zero; 0 for an empty sample.
pub fn truncated_mean(samples: &[f64]) -> i64 {
    if samples.is_empty() {
        return 0;
    }
    (samples.iter().sum::<f64>() / samples.len() as f64).trunc() as i64
}

/// `count / total` in basis points, rounded half to even.
pub fn share_bp(count: usize, total: usize) -> u64 {
    if total == 0 {
        return 0;
    }
    let (count, total) = (count as u128, total as u128);
    let scaled = count * SHARE_SCALE as u128;
    let (q, r) = (scaled / total, scaled % total);
    let up = match (2 * r).cmp(&total) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Equal => q % 2 == 1,
        std::cmp::Ordering::Less => false,
    };
    (q + u128::from(up)) as u64
}

/// Threshold on the unrounded `count / total`; rounding comes after.
fn meets_min_share(count: usize, total: usize) -> bool {
    total > 0 && count as u128 * SHARE_SCALE as u128 >= MIN_SHARE_BP as u128 * total as u128
}

fn year_tables(groups: &IndexMap<i32, Vec<f64>>) -> (YearTable<i64>, YearTable<usize>) {
    let salary = groups.iter().map(|(&y, s)| (y, truncated_mean(s))).collect();
    let count = groups.iter().map(|(&y, s)| (y, s.len())).collect();
    (salary, count)
}

pub fn finalize(groups: &Groups) -> FinalizedTables {
    let (salary_by_year, count_by_year) = year_tables(&groups.years.all);

    // All-or-nothing: only an entirely empty profession subset is zero-filled.
    let (salary_by_year_for_profession, count_by_year_for_profession) =
        if groups.years.profession.is_empty() {
            (
                salary_by_year.keys().map(|&y| (y, 0)).collect(),
                count_by_year.keys().map(|&y| (y, 0)).collect(),
            )
        } else {
            year_tables(&groups.years.profession)
        };

    let total = groups.total_count;
    let mut shares: Vec<(&String, u64)> = groups
        .regions
        .samples
        .iter()
        .filter(|(_, s)| meets_min_share(s.len(), total))
        .map(|(region, s)| (region, share_bp(s.len(), total)))
        .collect();
    shares.sort_by(|a, b| b.1.cmp(&a.1));
    shares.truncate(TOP_REGIONS);

    let mut salaries: Vec<(&String, i64)> = shares
        .iter()
        .map(|&(region, _)| (region, truncated_mean(&groups.regions.samples[region])))
        .collect();
    salaries.sort_by(|a, b| b.1.cmp(&a.1));
    salaries.truncate(TOP_REGIONS);

    FinalizedTables {
        salary_by_year,
        count_by_year,
        salary_by_year_for_profession,
        count_by_year_for_profession,
        salary_by_region_top10: salaries.into_iter().map(|(r, v)| (r.clone(), v)).collect(),
        share_by_region_top10: shares
            .into_iter()
            .map(|(r, bp)| (r.clone(), bp as f64 / SHARE_SCALE as f64))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::ingest;
    use crate::core::record::RawRecord;

    fn rec(name: &str, area: &str, year: i32, from: u32, to: u32) -> RawRecord {
        RawRecord {
            name: s!(name),
            salary_from: from.to_string(),
            salary_to: to.to_string(),
            salary_currency: s!("RUR"),
            area_name: s!(area),
            published_at: format!("{year}-06-15T12:00:00+0300"),
        }
    }

    fn regions(counts: &[(&str, usize)]) -> Groups {
        let mut data = Vec::new();
        for &(area, n) in counts {
            for _ in 0..n {
                data.push(rec("x", area, 2020, 100, 100));
            }
        }
        ingest(&data, "x").unwrap()
    }

    #[test]
    fn three_record_scenario() {
        let data = vec![
            rec("Аналитик", "Москва", 2020, 1000, 2000),
            rec("Аналитик", "Москва", 2020, 3000, 4000),
            rec("Тестировщик", "Казань", 2021, 500, 500),
        ];
        let t = finalize(&ingest(&data, "Программист").unwrap());

        assert_eq!(t.salary_by_year, YearTable::<i64>::from([(2020, 2500), (2021, 500)]));
        assert_eq!(t.count_by_year, YearTable::<usize>::from([(2020, 2), (2021, 1)]));
        assert_eq!(t.salary_by_year_for_profession, YearTable::<i64>::from([(2020, 0), (2021, 0)]));
        assert_eq!(t.count_by_year_for_profession, YearTable::<usize>::from([(2020, 0), (2021, 0)]));
        assert_eq!(
            t.share_by_region_top10,
            RegionTable::<f64>::from([(s!("Москва"), 0.6667), (s!("Казань"), 0.3333)])
        );
        assert_eq!(
            t.salary_by_region_top10,
            RegionTable::<i64>::from([(s!("Москва"), 2500), (s!("Казань"), 500)])
        );
    }

    #[test]
    fn partial_profession_match_is_not_zero_filled() {
        let data = vec![
            rec("Программист", "Москва", 2020, 100, 100),
            rec("Аналитик", "Москва", 2021, 300, 300),
        ];
        let t = finalize(&ingest(&data, "Программист").unwrap());
        assert_eq!(t.salary_by_year_for_profession, YearTable::<i64>::from([(2020, 100)]));
        assert_eq!(t.count_by_year_for_profession, YearTable::<usize>::from([(2020, 1)]));
    }

    #[test]
    fn mean_truncates() {
        assert_eq!(truncated_mean(&[1.0, 2.0]), 1);
        assert_eq!(truncated_mean(&[2999.9]), 2999);
        assert_eq!(truncated_mean(&[]), 0);
    }

    #[test]
    fn share_rounding_is_exact() {
        assert_eq!(share_bp(2, 3), 6667);
        assert_eq!(share_bp(1, 3), 3333);
        assert_eq!(share_bp(99, 10_000), 99);
        assert_eq!(share_bp(1, 100), 100);
        // 0.00005 and 0.00015 are exact halves: to even
        assert_eq!(share_bp(1, 20_000), 0);
        assert_eq!(share_bp(3, 20_000), 2);
        assert_eq!(share_bp(5, 0), 0);
    }

    #[test]
    fn threshold_boundary() {
        // 99/10000 = 0.0099 is dropped, 100/10000 = 0.01 is kept
        let g = regions(&[("Big", 9801), ("Edge", 100), ("Below", 99)]);
        let t = finalize(&g);
        assert!(t.share_by_region_top10.contains_key("Edge"));
        assert_eq!(t.share_by_region_top10["Edge"], 0.01);
        assert!(!t.share_by_region_top10.contains_key("Below"));
        assert!(!t.salary_by_region_top10.contains_key("Below"));
    }

    #[test]
    fn threshold_uses_unrounded_share() {
        // 199/20000 = 0.00995 would round to 0.01 but sits below the cut
        let g = regions(&[("Big", 19_801), ("Edge", 199)]);
        let t = finalize(&g);
        assert!(!t.share_by_region_top10.contains_key("Edge"));
        assert!(!t.salary_by_region_top10.contains_key("Edge"));
        assert_eq!(t.share_by_region_top10.keys().collect::<Vec<_>>(), vec!["Big"]);
        assert!(!meets_min_share(1_999, 200_000));
        assert!(meets_min_share(2_000, 200_000));
        assert!(!meets_min_share(0, 0));
    }

    #[test]
    fn top_ten_and_subset() {
        let counts: Vec<(String, usize)> = (0..14).map(|i| (format!("R{i:02}"), 10 + i)).collect();
        let borrowed: Vec<(&str, usize)> = counts.iter().map(|(r, n)| (r.as_str(), *n)).collect();
        let t = finalize(&regions(&borrowed));

        assert_eq!(t.share_by_region_top10.len(), 10);
        assert_eq!(t.share_by_region_top10.keys().next().map(String::as_str), Some("R13"));
        assert!(t.salary_by_region_top10.keys().all(|k| t.share_by_region_top10.contains_key(k)));
        for v in t.share_by_region_top10.values() {
            assert!((0.01..=1.0).contains(v));
        }
        let w: Vec<f64> = t.share_by_region_top10.values().copied().collect();
        assert!(w.windows(2).all(|p| p[0] >= p[1]));
    }

    #[test]
    fn salary_ranking_is_stable_and_inherits_share_order() {
        // equal shares, equal salaries: share table keeps encounter order,
        // salary table keeps share-table order
        let data = vec![
            rec("x", "A", 2020, 100, 100),
            rec("x", "B", 2020, 300, 300),
            rec("x", "C", 2020, 100, 100),
        ];
        let t = finalize(&ingest(&data, "x").unwrap());
        assert_eq!(t.share_by_region_top10.keys().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(t.salary_by_region_top10.keys().collect::<Vec<_>>(), vec!["B", "A", "C"]);
    }

    #[test]
    fn idempotent_and_empty() {
        let data = vec![rec("x", "A", 2020, 1, 3), rec("y", "B", 2019, 5, 7)];
        let g = ingest(&data, "x").unwrap();
        assert_eq!(finalize(&g), finalize(&g));

        let empty = finalize(&Groups::default());
        assert!(empty.is_empty());
        assert!(empty.count_by_year_for_profession.is_empty());
        assert!(empty.share_by_region_top10.is_empty());
        assert!(empty.salary_by_region_top10.is_empty());
    }

    #[test]
    fn full_region_shares_sum_to_one() {
        let g = regions(&[("A", 7), ("B", 5), ("C", 3), ("D", 1)]);
        let sum: f64 = g
            .regions
            .samples
            .values()
            .map(|s| share_bp(s.len(), g.total_count) as f64 / SHARE_SCALE as f64)
            .sum();
        assert!((sum - 1.0).abs() < 1e-3);
    }
}
