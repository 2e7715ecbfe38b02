use std::collections::HashMap;

use crate::types::{LicenseCount, LicenseRecord};

/// Counts records per license, most common first. Ties keep the order in
/// which each license was first seen.
pub fn count_licenses(records: &[LicenseRecord]) -> Vec<LicenseCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<LicenseCount> = Vec::new();

    for record in records {
        match index.get(record.license.as_str()) {
            Some(&pos) => counts[pos].count += 1,
            None => {
                index.insert(record.license.as_str(), counts.len());
                counts.push(LicenseCount {
                    license: record.license.clone(),
                    count: 1,
                });
            }
        }
    }

    // stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, license: &str) -> LicenseRecord {
        LicenseRecord {
            name: name.to_string(),
            version: "1.0.0".to_string(),
            license: license.to_string(),
            license_url: String::new(),
            license_text: None,
        }
    }

    fn pairs(counts: &[LicenseCount]) -> Vec<(&str, usize)> {
        counts
            .iter()
            .map(|c| (c.license.as_str(), c.count))
            .collect()
    }

    #[test]
    fn ties_keep_discovery_order() {
        let mut records = Vec::new();
        records.push(record("a", "MIT"));
        records.push(record("b", "Apache-2.0"));
        records.push(record("c", "ISC"));
        for name in ["d", "e", "f", "g"] {
            records.push(record(name, "MIT"));
        }
        for name in ["h", "i"] {
            records.push(record(name, "Apache-2.0"));
        }
        for name in ["j", "k"] {
            records.push(record(name, "ISC"));
        }

        let counts = count_licenses(&records);
        assert_eq!(
            pairs(&counts),
            [("MIT", 5), ("Apache-2.0", 3), ("ISC", 3)]
        );
    }

    #[test]
    fn ties_are_not_sorted_alphabetically() {
        let records = [
            record("a", "Zlib"),
            record("b", "BSD-3-Clause"),
            record("c", "Apache-2.0"),
            record("d", "BSD-3-Clause"),
        ];

        let counts = count_licenses(&records);
        assert_eq!(
            pairs(&counts),
            [("BSD-3-Clause", 2), ("Zlib", 1), ("Apache-2.0", 1)]
        );
    }

    #[test]
    fn empty_inventory_has_no_counts() {
        assert!(count_licenses(&[]).is_empty());
    }
}
