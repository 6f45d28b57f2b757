//! Dose grouping.
//!
//! Schedules that list one dose per time point are compiled into one
//! instruction per distinct dose. Two doses are the same when both magnitude
//! and unit code are exactly equal. Groups keep the order in which their dose
//! was first seen, and points keep their input order within a group.

use crate::types::Dose;

/// Time points that share one dose.
#[derive(Debug, Clone, PartialEq)]
pub struct DoseGroup<P> {
    pub dose: Dose,
    pub points: Vec<P>,
}

/// Partition `(point, dose)` pairs into groups of equal dose.
///
/// Linear scan over the groups seen so far; schedules are small.
pub fn group_by_dose<'a, P, I>(entries: I) -> Vec<DoseGroup<P>>
where
    I: IntoIterator<Item = (P, &'a Dose)>,
{
    let mut groups: Vec<DoseGroup<P>> = Vec::new();

    for (point, dose) in entries {
        match groups.iter_mut().find(|group| group.dose == *dose) {
            Some(group) => group.points.push(point),
            None => groups.push(DoseGroup {
                dose: dose.clone(),
                points: vec![point],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_in_first_seen_order() {
        let one = Dose::bare(1.0);
        let two = Dose::bare(2.0);
        let groups = group_by_dose([("a", &one), ("b", &two), ("c", &one)]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].dose, one);
        assert_eq!(groups[0].points, vec!["a", "c"]);
        assert_eq!(groups[1].dose, two);
        assert_eq!(groups[1].points, vec!["b"]);
    }

    #[test]
    fn test_unit_code_splits_groups() {
        let coded = Dose::new(1.0, Some("tab"));
        let uncoded = Dose::bare(1.0);
        let groups = group_by_dose([(1, &coded), (2, &uncoded), (3, &coded)]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].points, vec![1, 3]);
        assert_eq!(groups[1].points, vec![2]);
    }

    #[test]
    fn test_exact_magnitude_comparison() {
        let a = Dose::bare(1.0);
        let b = Dose::bare(1.000_000_1);
        assert_eq!(group_by_dose([(1, &a), (2, &b)]).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let groups = group_by_dose(std::iter::empty::<(u8, &Dose)>());
        assert!(groups.is_empty());
    }
}
