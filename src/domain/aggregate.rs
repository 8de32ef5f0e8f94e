use std::collections::HashMap;

use crate::domain::entities::dataset::{Dataset, Group, GroupingField};

/// Sums holdings per `field` value, keeps positive totals and sorts them
/// largest first. Equal totals keep the order their key first appeared in.
///
/// Keys are compared exactly as stored; only whitespace-only keys are skipped.
pub fn aggregate(dataset: &Dataset, field: GroupingField) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index_by_key: HashMap<&str, usize> = HashMap::new();

    for holding in &dataset.holdings {
        let key = holding.key(field);
        if key.trim().is_empty() {
            continue;
        }
        match index_by_key.get(key) {
            Some(&idx) => groups[idx].total += holding.value,
            None => {
                index_by_key.insert(key, groups.len());
                groups.push(Group {
                    category: key.to_string(),
                    total: holding.value,
                });
            }
        }
    }

    groups.retain(|group| group.total > 0.0);
    // `sort_by` is stable, which provides the tie-break.
    groups.sort_by(|a, b| b.total.total_cmp(&a.total));
    groups
}
